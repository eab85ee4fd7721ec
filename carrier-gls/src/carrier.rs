use carrier_core::FileType;
use carrier_shared::Masked;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Label file encodings the GLS web service can return
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LabelFormat {
    #[default]
    Pdf,
    Zebra,
    Intermec,
    Datamax,
    Toshiba,
}

impl LabelFormat {
    /// Declaration order, which is also the order offered to users
    pub const ALL: [LabelFormat; 5] = [
        LabelFormat::Pdf,
        LabelFormat::Zebra,
        LabelFormat::Intermec,
        LabelFormat::Datamax,
        LabelFormat::Toshiba,
    ];

    pub fn code(self) -> &'static str {
        match self {
            LabelFormat::Pdf => "PDF",
            LabelFormat::Zebra => "ZEBRA",
            LabelFormat::Intermec => "INTERMEC",
            LabelFormat::Datamax => "DATAMAX",
            LabelFormat::Toshiba => "TOSHIBA",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LabelFormat::Pdf => "PDF",
            LabelFormat::Zebra => "Zebra",
            LabelFormat::Intermec => "Intermec",
            LabelFormat::Datamax => "Datamax",
            LabelFormat::Toshiba => "Toshiba",
        }
    }

    pub fn file_type(self) -> FileType {
        FileType::new(self.code(), self.name())
    }
}

/// Fields of a GLS carrier record whose changes trigger validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlsField {
    DeliveryType,
    ContactId,
    Login,
    Password,
    Url,
    UrlTest,
    UrlTracking,
    LabelFormat,
    ProdEnvironment,
}

impl GlsField {
    pub const ALL: [GlsField; 9] = [
        GlsField::DeliveryType,
        GlsField::ContactId,
        GlsField::Login,
        GlsField::Password,
        GlsField::Url,
        GlsField::UrlTest,
        GlsField::UrlTracking,
        GlsField::LabelFormat,
        GlsField::ProdEnvironment,
    ];

    /// Human label used in validation messages
    pub fn label(self) -> &'static str {
        match self {
            GlsField::DeliveryType => "Delivery Type",
            GlsField::ContactId => "Contact ID",
            GlsField::Login => "Login User",
            GlsField::Password => "Login Password",
            GlsField::Url => "Service Url",
            GlsField::UrlTest => "Test Service Url",
            GlsField::UrlTracking => "Tracking Url",
            GlsField::LabelFormat => "Label format",
            GlsField::ProdEnvironment => "Environment",
        }
    }
}

/// A carrier record configured for the GLS web service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlsCarrier {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub prod_environment: bool,
    #[serde(default)]
    pub contact_id: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: Masked<String>,
    /// Production endpoint
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub url_test: String,
    /// Root URL for parcel tracking, with a `%s` for the tracking reference
    #[serde(default)]
    pub url_tracking: String,
    /// An empty string in config leaves the format unset
    #[serde(default = "default_label_format", deserialize_with = "blank_label_format")]
    pub label_format: Option<LabelFormat>,
}

fn default_label_format() -> Option<LabelFormat> {
    Some(LabelFormat::default())
}

fn blank_label_format<'de, D>(deserializer: D) -> Result<Option<LabelFormat>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(code) if !code.is_empty() => LabelFormat::deserialize(code.into_deserializer()).map(Some),
        _ => Ok(None),
    }
}

impl GlsCarrier {
    /// A blank test-mode record; fill in credentials before committing it.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            prod_environment: false,
            contact_id: String::new(),
            login: String::new(),
            password: Masked::default(),
            url: String::new(),
            url_test: String::new(),
            url_tracking: String::new(),
            label_format: default_label_format(),
        }
    }

    /// Endpoint matching the current environment flag
    pub fn endpoint(&self) -> &str {
        if self.prod_environment {
            &self.url
        } else {
            &self.url_test
        }
    }

    /// Fields whose value differs from `before`. The delivery type is not
    /// part of a GLS record, so it never shows up here.
    pub fn changed_fields(&self, before: &GlsCarrier) -> Vec<GlsField> {
        GlsField::ALL
            .into_iter()
            .filter(|field| match field {
                GlsField::DeliveryType => false,
                GlsField::ContactId => self.contact_id != before.contact_id,
                GlsField::Login => self.login != before.login,
                GlsField::Password => self.password != before.password,
                GlsField::Url => self.url != before.url,
                GlsField::UrlTest => self.url_test != before.url_test,
                GlsField::UrlTracking => self.url_tracking != before.url_tracking,
                GlsField::LabelFormat => self.label_format != before.label_format,
                GlsField::ProdEnvironment => self.prod_environment != before.prod_environment,
            })
            .collect()
    }

    pub(crate) fn is_blank(&self, field: GlsField) -> bool {
        match field {
            GlsField::DeliveryType | GlsField::ProdEnvironment => false,
            GlsField::ContactId => self.contact_id.is_empty(),
            GlsField::Login => self.login.is_empty(),
            GlsField::Password => self.password.is_empty(),
            GlsField::Url => self.url.is_empty(),
            GlsField::UrlTest => self.url_test.is_empty(),
            GlsField::UrlTracking => self.url_tracking.is_empty(),
            GlsField::LabelFormat => self.label_format.is_none(),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_carrier() -> GlsCarrier {
    GlsCarrier {
        contact_id: "276a45fkqM".to_string(),
        login: "shipit".to_string(),
        password: Masked::from("secret"),
        url: "https://api.gls-group.eu/public/v1".to_string(),
        url_test: "https://api-sandbox.gls-group.eu/public/v1".to_string(),
        url_tracking: "https://gls-group.eu/track/%s".to_string(),
        ..GlsCarrier::new("GLS Europe")
    }
}
