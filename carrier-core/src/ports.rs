use crate::models::Package;

/// Error type returned by external collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A picking/parcel record owned outside the carrier integration.
///
/// `C` is the carrier configuration the record is shipped with. The record
/// performs the actual carrier call on `send` and keeps its own state.
pub trait ShipmentRecord<C> {
    /// Packages attached to this shipment, in display order
    fn packages(&self) -> &[Package];

    /// Book the shipment with the carrier, returning the tracking code if any
    fn send(&mut self, carrier: &C) -> Result<Option<String>, BoxError>;

    /// Cancel the shipment on the carrier side
    fn cancel(&mut self) -> Result<(), BoxError>;
}

/// Builds authenticated connection handles for a carrier configuration.
pub trait ServiceClientFactory<C> {
    type Client;

    /// Open a new handle. Implementations check their own parameters at
    /// connect time and fail with a carrier-specific error.
    fn create(&self, carrier: &C) -> Result<Self::Client, BoxError>;
}
