use std::fmt::Debug;

use serde::Serialize;
use serde_json::Value;

mod error;
mod fields;
pub mod inquiry;
pub mod kind;
pub mod post;
pub mod program;
pub mod stat;
pub mod testimonial;

pub use error::{FieldError, Reason, ValidationError};
pub use kind::Kind;

pub mod prelude {
    pub use crate::inquiry::Inquiry;
    pub use crate::kind::Kind;
    pub use crate::post::Post;
    pub use crate::program::Program;
    pub use crate::stat::Stat;
    pub use crate::testimonial::Testimonial;
    pub use crate::{Record, ValidationError};
}

/// A document kind that can be validated from untyped JSON and persisted
/// in its own collection.
pub trait Record: Serialize + Debug + Send + Sync + Sized + 'static {
    const KIND: Kind;

    /// Fields serialized as RFC 3339 strings that the store keeps as dates.
    const TIMESTAMP_FIELDS: &'static [&'static str] = &[];

    /// Builds a fully defaulted record, or reports every offending field.
    /// Unknown keys are ignored.
    fn from_value(value: &Value) -> Result<Self, ValidationError>;
}
