use repository::Filter;
use serde::Deserialize;
use serde_with::serde_as;
use utoipa::IntoParams;

use crate::request::Flag;

#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetProgramsParam {
    /// Exact category, e.g. reset
    pub category: Option<String>,
    #[serde_as(as = "Option<Flag>")]
    #[serde(default)]
    pub active: Option<bool>,
}

impl GetProgramsParam {
    /// Absent parameters do not constrain the result.
    pub fn filter(&self) -> Filter {
        let mut filter = Filter::new();
        if let Some(category) = &self.category {
            filter = filter.equals("category", category.as_str());
        }
        if let Some(active) = self.active {
            filter = filter.equals("active", active);
        }
        filter
    }
}
