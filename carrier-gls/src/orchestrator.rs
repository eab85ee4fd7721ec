use crate::carrier::GlsCarrier;
use crate::client::GlsConnector;
use carrier_core::{
    ensure_one, template, CarrierError, CarrierResult, QuoteRequest, ServiceClientFactory,
    ShipmentRecord, ShippingResult,
};

/// Sequences booking, tracking and cancellation of GLS shipments.
///
/// Holds no state between calls besides the client factory; every client
/// handle it builds is handed to the caller and never kept.
pub struct GlsOrchestrator<F = GlsConnector> {
    client_factory: F,
}

impl GlsOrchestrator<GlsConnector> {
    pub fn with_default_connector() -> Self {
        Self::new(GlsConnector)
    }
}

impl<F> GlsOrchestrator<F>
where
    F: ServiceClientFactory<GlsCarrier>,
{
    pub fn new(client_factory: F) -> Self {
        Self { client_factory }
    }

    /// Delivery price quote. GLS rates are not fetched, so this is always zero.
    pub fn estimate_price(&self, carriers: &[GlsCarrier], order: &QuoteRequest) -> CarrierResult<i32> {
        let carrier = ensure_one(carriers)?;
        tracing::debug!("GLS carrier {} quoting order {} at 0", carrier.name, order.reference);
        Ok(0)
    }

    /// Open a service client for the single carrier in `carriers`
    pub fn create_client(&self, carriers: &[GlsCarrier]) -> CarrierResult<F::Client> {
        let carrier = ensure_one(carriers)?;
        self.client_factory
            .create(carrier)
            .map_err(CarrierError::Collaborator)
    }

    /// Book `request` with GLS. The record talks to the carrier itself.
    pub fn send_shipment<R>(&self, carrier: &GlsCarrier, request: &mut R) -> CarrierResult<ShippingResult>
    where
        R: ShipmentRecord<GlsCarrier>,
    {
        let tracking_number = request.send(carrier).map_err(CarrierError::Collaborator)?;
        tracing::info!(
            "Shipment booked with GLS carrier {}: tracking {:?}",
            carrier.name,
            tracking_number
        );

        Ok(ShippingResult {
            exact_price: false,
            tracking_number,
        })
    }

    pub fn tracking_url(&self, carriers: &[GlsCarrier], tracking_code: &str) -> CarrierResult<String> {
        let carrier = ensure_one(carriers)?;
        template::substitute(&carrier.url_tracking, tracking_code)
    }

    /// Tracking URLs of every tracked package, request by request
    pub fn tracking_links<R>(&self, carriers: &[GlsCarrier], requests: &[R]) -> CarrierResult<Vec<String>>
    where
        R: ShipmentRecord<GlsCarrier>,
    {
        let mut links = Vec::new();
        for request in requests {
            for code in request.packages().iter().filter_map(|p| p.tracking_code()) {
                links.push(self.tracking_url(carriers, code)?);
            }
        }
        Ok(links)
    }

    /// Cancel every request, unless one of their packages was already sent
    /// in an end-of-day report. Stops at the first failing cancellation.
    pub fn cancel_shipment<R>(&self, carrier: &GlsCarrier, requests: &mut [R]) -> CarrierResult<()>
    where
        R: ShipmentRecord<GlsCarrier>,
    {
        let reported = requests
            .iter()
            .flat_map(|r| r.packages())
            .any(|p| p.is_reported());
        if reported {
            tracing::warn!("Refusing GLS cancellation on carrier {}: packages already reported", carrier.name);
            return Err(CarrierError::BusinessRule(
                "Packages cannot be cancelled after the End of Day report.".to_string(),
            ));
        }

        for request in requests.iter_mut() {
            request.cancel().map_err(CarrierError::Collaborator)?;
        }
        tracing::info!("Cancelled {} GLS shipment(s) on carrier {}", requests.len(), carrier.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::sample_carrier;
    use carrier_core::{BoxError, EndOfDayReport, Package};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shipment record double that logs every carrier call into a shared journal
    struct MockShipment {
        name: String,
        packages: Vec<Package>,
        tracking: Option<String>,
        fail_cancel: bool,
        journal: Rc<RefCell<Vec<String>>>,
    }

    impl MockShipment {
        fn new(name: &str, codes: &[&str], journal: &Rc<RefCell<Vec<String>>>) -> Self {
            Self {
                name: name.to_string(),
                packages: codes.iter().map(|c| Package::with_tracking(*c)).collect(),
                tracking: codes.first().map(|c| c.to_string()),
                fail_cancel: false,
                journal: Rc::clone(journal),
            }
        }
    }

    impl ShipmentRecord<GlsCarrier> for MockShipment {
        fn packages(&self) -> &[Package] {
            &self.packages
        }

        fn send(&mut self, carrier: &GlsCarrier) -> Result<Option<String>, BoxError> {
            self.journal
                .borrow_mut()
                .push(format!("send {} via {}", self.name, carrier.name));
            if self.packages.is_empty() {
                return Err("GLS rejected the shipment: no parcels".into());
            }
            Ok(self.tracking.clone())
        }

        fn cancel(&mut self) -> Result<(), BoxError> {
            self.journal.borrow_mut().push(format!("cancel {}", self.name));
            if self.fail_cancel {
                return Err(format!("GLS refused to cancel {}", self.name).into());
            }
            Ok(())
        }
    }

    fn journal() -> Rc<RefCell<Vec<String>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_estimate_price_is_zero() {
        let orchestrator = GlsOrchestrator::with_default_connector();
        let order = QuoteRequest::new("SO042");

        assert_eq!(orchestrator.estimate_price(&[sample_carrier()], &order).unwrap(), 0);
    }

    #[test]
    fn test_singleton_operations_reject_other_counts() {
        let orchestrator = GlsOrchestrator::with_default_connector();
        let order = QuoteRequest::new("SO042");
        let none: Vec<GlsCarrier> = Vec::new();
        let two = vec![sample_carrier(), sample_carrier()];

        for carriers in [&none[..], &two[..]] {
            assert!(matches!(
                orchestrator.estimate_price(carriers, &order),
                Err(CarrierError::Precondition { .. })
            ));
            assert!(matches!(
                orchestrator.create_client(carriers),
                Err(CarrierError::Precondition { .. })
            ));
            assert!(matches!(
                orchestrator.tracking_url(carriers, "A1"),
                Err(CarrierError::Precondition { .. })
            ));
        }
    }

    #[test]
    fn test_create_client_propagates_connector_error() {
        let orchestrator = GlsOrchestrator::with_default_connector();
        let mut carrier = sample_carrier();
        carrier.contact_id.clear();

        let err = orchestrator.create_client(&[carrier]).unwrap_err();
        assert!(matches!(err, CarrierError::Collaborator(_)));
        assert_eq!(err.to_string(), "GLS connection parameter 'Contact ID' is missing");
    }

    #[test]
    fn test_send_shipment_returns_tracking() {
        let orchestrator = GlsOrchestrator::with_default_connector();
        let carrier = sample_carrier();
        let journal = journal();
        let mut shipment = MockShipment::new("WH/OUT/0001", &["ZX81"], &journal);

        let result = orchestrator.send_shipment(&carrier, &mut shipment).unwrap();

        assert_eq!(
            result,
            ShippingResult {
                exact_price: false,
                tracking_number: Some("ZX81".to_string()),
            }
        );
        assert_eq!(*journal.borrow(), vec!["send WH/OUT/0001 via GLS Europe"]);
    }

    #[test]
    fn test_send_shipment_propagates_record_error() {
        let orchestrator = GlsOrchestrator::with_default_connector();
        let journal = journal();
        let mut shipment = MockShipment::new("WH/OUT/0002", &[], &journal);

        let err = orchestrator.send_shipment(&sample_carrier(), &mut shipment).unwrap_err();
        assert_eq!(err.to_string(), "GLS rejected the shipment: no parcels");
    }

    #[test]
    fn test_tracking_url() {
        let orchestrator = GlsOrchestrator::with_default_connector();
        let mut carrier = sample_carrier();
        carrier.url_tracking = "https://x/%s".to_string();

        assert_eq!(orchestrator.tracking_url(&[carrier], "ABC123").unwrap(), "https://x/ABC123");
    }

    #[test]
    fn test_tracking_url_without_placeholder() {
        let orchestrator = GlsOrchestrator::with_default_connector();
        let mut carrier = sample_carrier();
        carrier.url_tracking = "https://x/".to_string();

        assert!(matches!(
            orchestrator.tracking_url(&[carrier], "ABC123"),
            Err(CarrierError::Template { .. })
        ));
    }

    #[test]
    fn test_tracking_links_skip_blank_codes_in_order() {
        let orchestrator = GlsOrchestrator::with_default_connector();
        let mut carrier = sample_carrier();
        carrier.url_tracking = "https://x/%s".to_string();
        let journal = journal();
        let mut first = MockShipment::new("first", &["A1", ""], &journal);
        first.packages.push(Package::new());
        let second = MockShipment::new("second", &["B1"], &journal);

        let links = orchestrator.tracking_links(&[carrier], &[first, second]).unwrap();
        assert_eq!(links, vec!["https://x/A1", "https://x/B1"]);
    }

    #[test]
    fn test_tracking_links_keep_duplicates() {
        let orchestrator = GlsOrchestrator::with_default_connector();
        let journal = journal();
        let shipment = MockShipment::new("dup", &["A1", "A1"], &journal);

        let links = orchestrator.tracking_links(&[sample_carrier()], &[shipment]).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0], links[1]);
    }

    #[test]
    fn test_cancel_blocked_by_end_of_day_report() {
        let orchestrator = GlsOrchestrator::with_default_connector();
        let journal = journal();
        let mut requests = vec![
            MockShipment::new("one", &["A1"], &journal),
            MockShipment::new("two", &["B1"], &journal),
            MockShipment::new("three", &["C1"], &journal),
        ];
        requests[1].packages[0].attach_report(EndOfDayReport::new());

        let err = orchestrator.cancel_shipment(&sample_carrier(), &mut requests).unwrap_err();

        assert!(matches!(err, CarrierError::BusinessRule(_)));
        assert_eq!(err.to_string(), "Packages cannot be cancelled after the End of Day report.");
        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn test_cancel_every_request_in_order() {
        let orchestrator = GlsOrchestrator::with_default_connector();
        let journal = journal();
        let mut requests = vec![
            MockShipment::new("one", &["A1"], &journal),
            MockShipment::new("two", &[], &journal),
            MockShipment::new("three", &["C1"], &journal),
        ];

        orchestrator.cancel_shipment(&sample_carrier(), &mut requests).unwrap();
        assert_eq!(*journal.borrow(), vec!["cancel one", "cancel two", "cancel three"]);
    }

    #[test]
    fn test_cancel_stops_at_first_failure() {
        let orchestrator = GlsOrchestrator::with_default_connector();
        let journal = journal();
        let mut requests = vec![
            MockShipment::new("one", &["A1"], &journal),
            MockShipment::new("two", &["B1"], &journal),
            MockShipment::new("three", &["C1"], &journal),
        ];
        requests[1].fail_cancel = true;

        let err = orchestrator.cancel_shipment(&sample_carrier(), &mut requests).unwrap_err();

        assert_eq!(err.to_string(), "GLS refused to cancel two");
        assert_eq!(*journal.borrow(), vec!["cancel one", "cancel two"]);
    }
}
