use crate::carrier::{GlsCarrier, GlsField, LabelFormat};
use carrier_core::{BoxError, ServiceClientFactory};
use carrier_shared::Masked;
use uuid::Uuid;

/// Connection context for one unit of work against the GLS web service.
///
/// Handles are not cached: build one per shipment operation and drop it.
#[derive(Debug, Clone)]
pub struct GlsClient {
    pub carrier_id: Uuid,
    pub endpoint: String,
    pub contact_id: String,
    pub login: String,
    pub password: Masked<String>,
    pub label_format: LabelFormat,
}

#[derive(Debug, thiserror::Error)]
pub enum GlsClientError {
    #[error("GLS connection parameter '{0}' is missing")]
    MissingParameter(&'static str),
}

/// Default client factory. Checks its connection parameters itself, so the
/// orchestrator does not re-validate the carrier before calling it.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlsConnector;

impl GlsConnector {
    pub fn connect(&self, carrier: &GlsCarrier) -> Result<GlsClient, GlsClientError> {
        let endpoint_field = if carrier.prod_environment {
            GlsField::Url
        } else {
            GlsField::UrlTest
        };
        for field in [GlsField::ContactId, GlsField::Login, GlsField::Password, endpoint_field] {
            if carrier.is_blank(field) {
                return Err(GlsClientError::MissingParameter(field.label()));
            }
        }
        let label_format = carrier
            .label_format
            .ok_or(GlsClientError::MissingParameter(GlsField::LabelFormat.label()))?;

        tracing::debug!("Opening GLS client for carrier {} on {}", carrier.name, carrier.endpoint());

        Ok(GlsClient {
            carrier_id: carrier.id,
            endpoint: carrier.endpoint().to_string(),
            contact_id: carrier.contact_id.clone(),
            login: carrier.login.clone(),
            password: carrier.password.clone(),
            label_format,
        })
    }
}

impl ServiceClientFactory<GlsCarrier> for GlsConnector {
    type Client = GlsClient;

    fn create(&self, carrier: &GlsCarrier) -> Result<GlsClient, BoxError> {
        Ok(self.connect(carrier)?)
    }
}
