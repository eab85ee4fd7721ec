use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// End-of-day batch report sent to the carrier. Once a package is listed in
/// one, the carrier considers it final.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndOfDayReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
}

impl EndOfDayReport {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
        }
    }
}

impl Default for EndOfDayReport {
    fn default() -> Self {
        Self::new()
    }
}

/// A physical parcel within a shipment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub id: Uuid,
    pub parcel_tracking: Option<String>,
    pub report: Option<EndOfDayReport>,
}

impl Package {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            parcel_tracking: None,
            report: None,
        }
    }

    pub fn with_tracking(code: impl Into<String>) -> Self {
        Self {
            parcel_tracking: Some(code.into()),
            ..Self::new()
        }
    }

    /// Tracking code, if one was assigned and it is not blank
    pub fn tracking_code(&self) -> Option<&str> {
        self.parcel_tracking.as_deref().filter(|code| !code.is_empty())
    }

    pub fn is_reported(&self) -> bool {
        self.report.is_some()
    }

    /// Link the package to an end-of-day report
    pub fn attach_report(&mut self, report: EndOfDayReport) {
        self.report = Some(report);
    }
}

impl Default for Package {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of booking one shipment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingResult {
    pub exact_price: bool,
    pub tracking_number: Option<String>,
}

/// Sale order to quote a delivery price for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub order_id: Uuid,
    pub reference: String,
}

impl QuoteRequest {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            order_id: Uuid::new_v4(),
            reference: reference.into(),
        }
    }
}
