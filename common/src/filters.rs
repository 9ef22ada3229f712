//! List filters and the query they turn into.

use std::collections::BTreeMap;

/// Active filters of a list page. Empty values are never stored, so an
/// empty set means "no filtering".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet(BTreeMap<String, String>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.insert(field, value);
        self
    }

    fn insert(&mut self, field: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.0.remove(field);
        } else {
            self.0.insert(field.to_string(), value.to_string());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Working copy edited inside the filter modal until the user applies it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    values: FilterSet,
}

impl FilterDraft {
    pub fn from_applied(applied: &FilterSet) -> Self {
        Self {
            values: applied.clone(),
        }
    }

    pub fn set(&mut self, field: &str, value: &str) {
        self.values.insert(field, value);
    }

    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).unwrap_or("")
    }

    /// Drops every value; the returned set is what the parent receives.
    pub fn clear_all(&mut self) -> FilterSet {
        self.values = FilterSet::new();
        self.apply()
    }

    pub fn apply(&self) -> FilterSet {
        self.values.clone()
    }
}

/// A selectable option of a filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A filter field shown in the modal: a dropdown when `options` is non-empty,
/// free text otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterField {
    pub key: String,
    pub label: String,
    pub options: Vec<FilterOption>,
}

impl FilterField {
    pub fn select(key: &str, label: &str, options: Vec<FilterOption>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            options,
        }
    }

    pub fn text(key: &str, label: &str) -> Self {
        Self::select(key, label, Vec::new())
    }
}

/// Parameters of one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub filters: FilterSet,
    pub page: u32,
    pub limit: u32,
}

impl ListQuery {
    pub fn first_page(limit: u32) -> Self {
        Self {
            search: String::new(),
            filters: FilterSet::new(),
            page: 1,
            limit,
        }
    }

    /// Query-string pairs in a fixed order: search, filters, page, limit.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search".to_string(), search.to_string()));
        }
        for (field, value) in self.filters.iter() {
            pairs.push((field.to_string(), value.to_string()));
        }
        pairs.push(("page".to_string(), self.page.max(1).to_string()));
        pairs.push(("limit".to_string(), self.limit.to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_all_yields_empty_set() {
        let applied = FilterSet::new().with("status", "active").with("category", "health");
        let mut draft = FilterDraft::from_applied(&applied);
        assert_eq!(draft.get("status"), "active");

        let cleared = draft.clear_all();
        assert!(cleared.is_empty());
        assert_eq!(cleared, FilterSet::new());
        assert_eq!(draft.get("status"), "");
    }

    #[test]
    fn test_blank_values_remove_filter() {
        let mut draft = FilterDraft::default();
        draft.set("status", "pending");
        draft.set("status", "  ");
        assert!(draft.apply().is_empty());
    }

    #[test]
    fn test_query_pairs() {
        let query = ListQuery {
            search: " water ".to_string(),
            filters: FilterSet::new().with("status", "active"),
            page: 0,
            limit: 20,
        };
        let pairs = query.to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("search".to_string(), "water".to_string()),
                ("status".to_string(), "active".to_string()),
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "20".to_string()),
            ]
        );

        let empty = ListQuery::first_page(10).to_pairs();
        assert_eq!(empty.len(), 2);
    }
}
