use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{fields::Fields, Kind, Record, ValidationError};

/// Contact or coaching request. Write-only.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Inquiry {
    pub name: String,
    /// Any string; the address format is not checked.
    pub email: String,
    pub message: String,
    pub source: Option<String>,
}

impl Record for Inquiry {
    const KIND: Kind = Kind::Inquiry;

    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let mut fields = Fields::new(value)?;

        let inquiry = Inquiry {
            name: fields.required_str("name"),
            email: fields.required_str("email"),
            message: fields.required_str("message"),
            source: fields.optional_str("source"),
        };

        fields.finish(inquiry)
    }
}
