pub mod carrier;
pub mod catalog;
pub mod client;
pub mod orchestrator;
pub mod validator;

pub use carrier::{GlsCarrier, GlsField, LabelFormat};
pub use catalog::extend_file_type_catalog;
pub use client::{GlsClient, GlsClientError, GlsConnector};
pub use orchestrator::GlsOrchestrator;
pub use validator::{validate_environment_urls, validate_on_commit, validate_required_fields};
