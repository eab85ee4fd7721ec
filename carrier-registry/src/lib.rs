pub mod app_config;
pub mod carrier;
pub mod dispatch;
pub mod startup;
pub mod store;

pub use app_config::AppConfig;
pub use carrier::{CarrierConfig, DeliveryType, FixedCarrier, ServiceClient};
pub use dispatch::CarrierDispatch;
pub use store::{CarrierStore, StoreError};
