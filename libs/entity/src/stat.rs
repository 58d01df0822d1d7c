use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{fields::Fields, Kind, Record, ValidationError};

/// A headline figure for social proof, e.g. "clients coached" / "1,200+".
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

impl Record for Stat {
    const KIND: Kind = Kind::Stat;

    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let mut fields = Fields::new(value)?;

        let stat = Stat {
            label: fields.required_str("label"),
            value: fields.required_str("value"),
        };

        fields.finish(stat)
    }
}
