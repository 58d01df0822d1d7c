use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{fields::Fields, Kind, Reason, Record, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Testimonial {
    pub name: String,
    pub role: Option<String>,
    pub quote: String,
    /// 1 to 5 inclusive
    pub rating: Option<i64>,
}

impl Record for Testimonial {
    const KIND: Kind = Kind::Testimonial;

    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let mut fields = Fields::new(value)?;

        let testimonial = Testimonial {
            name: fields.required_str("name"),
            role: fields.optional_str("role"),
            quote: fields.required_str("quote"),
            rating: fields.optional_integer("rating"),
        };

        if let Some(rating) = testimonial.rating {
            fields.check("rating", rating >= 1, Reason::Minimum(1));
            fields.check("rating", rating <= 5, Reason::Maximum(5));
        }

        fields.finish(testimonial)
    }
}
