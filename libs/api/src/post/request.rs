use repository::Filter;
use serde::Deserialize;
use serde_with::serde_as;
use utoipa::IntoParams;

use crate::request::Flag;

#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetPostsParam {
    /// Only posts carrying this tag
    pub tag: Option<String>,
    /// Defaults to true
    #[serde_as(as = "Option<Flag>")]
    #[serde(default)]
    pub published: Option<bool>,
}

impl GetPostsParam {
    /// `published` is always constrained; an empty `tag` counts as absent.
    pub fn filter(&self) -> Filter {
        let filter =
            Filter::new().equals("published", self.published.unwrap_or(true));

        match self.tag.as_deref() {
            Some(tag) if !tag.is_empty() => filter.contains("tags", tag),
            _ => filter,
        }
    }
}
