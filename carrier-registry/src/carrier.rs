use carrier_gls::{GlsCarrier, GlsClient};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Integration a carrier record is wired to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    Fixed,
    Gls,
}

impl DeliveryType {
    pub const ALL: [DeliveryType; 2] = [DeliveryType::Fixed, DeliveryType::Gls];
}

/// Flat-rate carrier with no remote service behind it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixedCarrier {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub prod_environment: bool,
    /// Price in minor units
    #[serde(default)]
    pub price: i32,
}

impl FixedCarrier {
    pub fn new(name: impl Into<String>, price: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            prod_environment: false,
            price,
        }
    }
}

/// A carrier record. The variant is the record's delivery type and holds
/// that integration's own settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "delivery_type", rename_all = "snake_case")]
pub enum CarrierConfig {
    Fixed(FixedCarrier),
    Gls(GlsCarrier),
}

impl CarrierConfig {
    pub fn id(&self) -> Uuid {
        match self {
            CarrierConfig::Fixed(c) => c.id,
            CarrierConfig::Gls(c) => c.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CarrierConfig::Fixed(c) => &c.name,
            CarrierConfig::Gls(c) => &c.name,
        }
    }

    pub fn delivery_type(&self) -> DeliveryType {
        match self {
            CarrierConfig::Fixed(_) => DeliveryType::Fixed,
            CarrierConfig::Gls(_) => DeliveryType::Gls,
        }
    }

    pub fn prod_environment(&self) -> bool {
        match self {
            CarrierConfig::Fixed(c) => c.prod_environment,
            CarrierConfig::Gls(c) => c.prod_environment,
        }
    }
}

impl From<GlsCarrier> for CarrierConfig {
    fn from(carrier: GlsCarrier) -> Self {
        CarrierConfig::Gls(carrier)
    }
}

impl From<FixedCarrier> for CarrierConfig {
    fn from(carrier: FixedCarrier) -> Self {
        CarrierConfig::Fixed(carrier)
    }
}

/// Service connection for a carrier; flat-rate carriers have none
#[derive(Debug, Clone)]
pub enum ServiceClient {
    Offline,
    Gls(GlsClient),
}
