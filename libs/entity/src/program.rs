use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{fields::Fields, Kind, Reason, Record, ValidationError};

/// A paid or free coaching offering.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Program {
    /// Program title
    pub name: String,
    /// URL-friendly identifier
    pub slug: String,
    pub description: String,
    /// e.g., reset, membership, download
    pub category: String,
    pub price: Option<f64>,
    pub features: Vec<String>,
    pub active: bool,
}

impl Record for Program {
    const KIND: Kind = Kind::Program;

    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let mut fields = Fields::new(value)?;

        let program = Program {
            name: fields.required_str("name"),
            slug: fields.required_str("slug"),
            description: fields.required_str("description"),
            category: fields.required_str("category"),
            price: fields.optional_number("price"),
            features: fields.str_list("features"),
            active: fields.bool_or("active", true),
        };

        if let Some(price) = program.price {
            fields.check("price", price >= 0.0, Reason::Minimum(0));
        }

        fields.finish(program)
    }
}
