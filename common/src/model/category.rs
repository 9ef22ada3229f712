use crate::model::lenient_string;
use serde::{Deserialize, Serialize};

/// Campaign category, used to populate filter dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Category {
    #[serde(alias = "_id", deserialize_with = "lenient_string")]
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
}

impl Category {
    /// Value sent as the `category` filter.
    pub fn filter_value(&self) -> &str {
        self.slug.as_deref().unwrap_or(&self.name)
    }
}
