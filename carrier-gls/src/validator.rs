use crate::carrier::{GlsCarrier, GlsField};
use carrier_core::{CarrierError, CarrierResult};

/// Fields that must be set on every GLS carrier, in reporting order
pub const REQUIRED_FIELDS: [GlsField; 5] = [
    GlsField::ContactId,
    GlsField::Login,
    GlsField::Password,
    GlsField::UrlTracking,
    GlsField::LabelFormat,
];

/// Changes that re-run [`validate_required_fields`]
pub const REQUIRED_FIELDS_TRIGGERS: [GlsField; 6] = [
    GlsField::DeliveryType,
    GlsField::ContactId,
    GlsField::Login,
    GlsField::Password,
    GlsField::UrlTracking,
    GlsField::LabelFormat,
];

/// Changes that re-run [`validate_environment_urls`]
pub const ENVIRONMENT_TRIGGERS: [GlsField; 4] = [
    GlsField::DeliveryType,
    GlsField::ProdEnvironment,
    GlsField::Url,
    GlsField::UrlTest,
];

/// Check that every carrier carries its credentials, tracking URL and label
/// format. Fails on the first missing field of the first incomplete carrier.
pub fn validate_required_fields(carriers: &[GlsCarrier]) -> CarrierResult<()> {
    for carrier in carriers {
        if let Some(field) = REQUIRED_FIELDS.iter().find(|f| carrier.is_blank(**f)) {
            return Err(CarrierError::Configuration(format!(
                "The GLS field '{}' is required for carrier {}",
                field.label(),
                carrier.name
            )));
        }
    }
    Ok(())
}

/// Check that the endpoint for the selected environment is configured
pub fn validate_environment_urls(carriers: &[GlsCarrier]) -> CarrierResult<()> {
    for carrier in carriers {
        let (field, mode) = if carrier.prod_environment {
            (GlsField::Url, "non test mode")
        } else {
            (GlsField::UrlTest, "test mode")
        };
        if carrier.is_blank(field) {
            return Err(CarrierError::Configuration(format!(
                "The GLS field '{}' is required in {}",
                field.label(),
                mode
            )));
        }
    }
    Ok(())
}

/// Run the checks whose trigger set intersects `changed`.
pub fn validate_on_commit(carriers: &[GlsCarrier], changed: &[GlsField]) -> CarrierResult<()> {
    let triggered = |triggers: &[GlsField]| changed.iter().any(|f| triggers.contains(f));

    if triggered(&REQUIRED_FIELDS_TRIGGERS[..]) {
        validate_required_fields(carriers)?;
    }
    if triggered(&ENVIRONMENT_TRIGGERS[..]) {
        validate_environment_urls(carriers)?;
    }
    Ok(())
}
