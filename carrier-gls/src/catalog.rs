use crate::carrier::LabelFormat;
use carrier_core::FileTypeCatalog;

/// Code every label catalog already offers, so GLS never contributes it
pub const PDF_SENTINEL: &str = "PDF";

/// Fold the GLS label formats into the shared file-type catalog
pub fn extend_file_type_catalog(base: FileTypeCatalog) -> FileTypeCatalog {
    tracing::debug!("Adding GLS label formats to a catalog of {} file types", base.len());
    base.merge(LabelFormat::ALL.iter().map(|format| format.file_type()), PDF_SENTINEL)
}
