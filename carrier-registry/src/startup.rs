use crate::app_config::{AppConfig, LabelCatalogConfig};
use crate::carrier::DeliveryType;
use crate::dispatch;
use crate::store::{CarrierStore, StoreError};
use carrier_core::FileTypeCatalog;

/// Commit every configured carrier, stopping at the first invalid one
pub fn load_carriers(config: &AppConfig) -> Result<CarrierStore, StoreError> {
    let mut store = CarrierStore::new();
    for carrier in &config.carriers {
        store.create(carrier.clone())?;
    }
    Ok(store)
}

/// Build the process-wide label file-type catalog: the configured base list
/// with each integration's formats folded in, in delivery-type order.
pub fn build_file_type_catalog(config: &LabelCatalogConfig) -> FileTypeCatalog {
    let catalog = DeliveryType::ALL
        .iter()
        .fold(FileTypeCatalog::new(config.base.clone()), |catalog, delivery_type| {
            dispatch::extend_file_types(*delivery_type, catalog)
        });
    tracing::debug!("Label catalog holds {} file types", catalog.len());
    catalog
}
