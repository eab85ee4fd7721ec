pub mod catalog;
pub mod models;
pub mod ports;
pub mod record;
pub mod template;

pub use catalog::{FileType, FileTypeCatalog};
pub use models::{EndOfDayReport, Package, QuoteRequest, ShippingResult};
pub use ports::{BoxError, ServiceClientFactory, ShipmentRecord};
pub use record::ensure_one;

#[derive(Debug, thiserror::Error)]
pub enum CarrierError {
    /// A required carrier field is missing or does not fit the environment.
    #[error("{0}")]
    Configuration(String),

    /// An operation needing exactly one carrier record got a different count.
    #[error("Expected singleton {expected}, got {found} records")]
    Precondition { expected: &'static str, found: usize },

    #[error("Invalid tracking URL template '{template}': {reason}")]
    Template { template: String, reason: String },

    #[error("{0}")]
    BusinessRule(String),

    /// Errors raised by the shipment record or the remote service client.
    /// Surfaced as-is: Display and source() belong to the collaborator.
    #[error(transparent)]
    Collaborator(BoxError),
}

impl CarrierError {
    pub fn collaborator(err: impl Into<BoxError>) -> Self {
        CarrierError::Collaborator(err.into())
    }
}

pub type CarrierResult<T> = Result<T, CarrierError>;
