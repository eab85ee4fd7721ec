use crate::carrier::{CarrierConfig, DeliveryType, FixedCarrier, ServiceClient};
use carrier_core::{
    ensure_one, CarrierResult, FileTypeCatalog, QuoteRequest, ServiceClientFactory,
    ShipmentRecord, ShippingResult,
};
use carrier_gls::{GlsCarrier, GlsClient, GlsConnector, GlsField, GlsOrchestrator};
use std::slice;

/// Validate `after` as the committed form of `before` (`None` for a new
/// record).
///
/// The changed fields are worked out per variant from the two records. A new
/// record, or one whose delivery type switched, counts as fully changed.
/// Flat-rate records carry no constraints.
pub fn validate_change(before: Option<&CarrierConfig>, after: &CarrierConfig) -> CarrierResult<()> {
    match (before, after) {
        (_, CarrierConfig::Fixed(_)) => Ok(()),
        (Some(CarrierConfig::Gls(old)), CarrierConfig::Gls(new)) => {
            carrier_gls::validate_on_commit(slice::from_ref(new), &new.changed_fields(old))
        }
        (_, CarrierConfig::Gls(new)) => carrier_gls::validate_on_commit(slice::from_ref(new), &GlsField::ALL),
    }
}

/// Fold each integration's label formats into `base`
pub fn extend_file_types(delivery_type: DeliveryType, base: FileTypeCatalog) -> FileTypeCatalog {
    match delivery_type {
        DeliveryType::Gls => carrier_gls::extend_file_type_catalog(base),
        DeliveryType::Fixed => base,
    }
}

/// Routes shipment operations to the orchestrator of the carrier's integration
pub struct CarrierDispatch<F = GlsConnector> {
    gls: GlsOrchestrator<F>,
}

impl CarrierDispatch<GlsConnector> {
    pub fn new() -> Self {
        Self::with_gls(GlsOrchestrator::with_default_connector())
    }
}

impl Default for CarrierDispatch<GlsConnector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> CarrierDispatch<F>
where
    F: ServiceClientFactory<GlsCarrier, Client = GlsClient>,
{
    pub fn with_gls(gls: GlsOrchestrator<F>) -> Self {
        Self { gls }
    }

    pub fn estimate_price(&self, carriers: &[CarrierConfig], order: &QuoteRequest) -> CarrierResult<i32> {
        match ensure_one(carriers)? {
            CarrierConfig::Gls(gls) => self.gls.estimate_price(slice::from_ref(gls), order),
            CarrierConfig::Fixed(fixed) => Ok(fixed.price),
        }
    }

    pub fn get_client(&self, carriers: &[CarrierConfig]) -> CarrierResult<ServiceClient> {
        match ensure_one(carriers)? {
            CarrierConfig::Gls(gls) => Ok(ServiceClient::Gls(self.gls.create_client(slice::from_ref(gls))?)),
            CarrierConfig::Fixed(_) => Ok(ServiceClient::Offline),
        }
    }

    pub fn send_shipment<R>(&self, carrier: &CarrierConfig, request: &mut R) -> CarrierResult<ShippingResult>
    where
        R: ShipmentRecord<GlsCarrier>,
    {
        match carrier {
            CarrierConfig::Gls(gls) => self.gls.send_shipment(gls, request),
            CarrierConfig::Fixed(fixed) => Ok(fixed_shipping_result(fixed)),
        }
    }

    pub fn tracking_links<R>(&self, carriers: &[CarrierConfig], requests: &[R]) -> CarrierResult<Vec<String>>
    where
        R: ShipmentRecord<GlsCarrier>,
    {
        match ensure_one(carriers)? {
            CarrierConfig::Gls(gls) => self.gls.tracking_links(slice::from_ref(gls), requests),
            CarrierConfig::Fixed(_) => Ok(Vec::new()),
        }
    }

    pub fn cancel_shipment<R>(&self, carrier: &CarrierConfig, requests: &mut [R]) -> CarrierResult<()>
    where
        R: ShipmentRecord<GlsCarrier>,
    {
        match carrier {
            CarrierConfig::Gls(gls) => self.gls.cancel_shipment(gls, requests),
            CarrierConfig::Fixed(fixed) => {
                tracing::debug!("Nothing to cancel on flat-rate carrier {}", fixed.name);
                Ok(())
            }
        }
    }
}

// Flat-rate deliveries are never booked remotely: the price is exact and
// there is no tracking number.
fn fixed_shipping_result(carrier: &FixedCarrier) -> ShippingResult {
    tracing::info!("Flat-rate shipment on carrier {} at {}", carrier.name, carrier.price);
    ShippingResult {
        exact_price: true,
        tracking_number: None,
    }
}
