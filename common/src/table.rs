//! Client-side table behaviour shared by every list page: sorting, search,
//! load state and server-driven pagination.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A record that can be shown in a data table.
///
/// `cell` returns the display text for a column key. Sorting and search work
/// on the same text so what the user sees is what gets compared.
pub trait TableRow {
    fn cell(&self, key: &str) -> String;

    /// Value used for sorting; defaults to the display text.
    fn sort_value(&self, key: &str) -> String {
        self.cell(key)
    }

    /// Stable identifier used for row keys and actions.
    fn row_id(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(key: &str) -> Self {
        Self {
            key: key.to_string(),
            direction: SortDirection::Ascending,
        }
    }

    /// Clicking the active column flips direction; another column starts ascending.
    pub fn toggle(current: Option<&SortState>, key: &str) -> SortState {
        match current {
            Some(state) if state.key == key => SortState {
                key: key.to_string(),
                direction: match state.direction {
                    SortDirection::Ascending => SortDirection::Descending,
                    SortDirection::Descending => SortDirection::Ascending,
                },
            },
            _ => SortState::ascending(key),
        }
    }
}

fn finite_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Total order over cell text: finite numbers compare by value and rank
/// before everything else, the rest compares case-insensitively.
pub fn compare_values(a: &str, b: &str) -> Ordering {
    match (finite_number(a), finite_number(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Stable sort of `rows` by the column in `sort`.
pub fn sort_rows<R: TableRow>(rows: &mut [R], sort: &SortState) {
    rows.sort_by(|a, b| {
        let ordering = compare_values(&a.sort_value(&sort.key), &b.sort_value(&sort.key));
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Case-insensitive substring match over `fields`. An empty needle matches.
pub fn matches_search<R: TableRow>(row: &R, fields: &[&str], needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| row.cell(field).to_lowercase().contains(&needle))
}

/// Filters then sorts a copy of `rows` for display.
pub fn visible_rows<R: TableRow + Clone>(
    rows: &[R],
    search_fields: &[&str],
    needle: &str,
    sort: Option<&SortState>,
) -> Vec<R> {
    let mut shown: Vec<R> = rows
        .iter()
        .filter(|row| matches_search(*row, search_fields, needle))
        .cloned()
        .collect();
    if let Some(sort) = sort {
        sort_rows(&mut shown, sort);
    }
    shown
}

/// Load state of a page-level request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> ListState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ListState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// One server page of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total: Option<u64>,
}

impl<T> Page<T> {
    pub fn single(items: Vec<T>) -> Self {
        Self {
            items,
            page: 1,
            total_pages: 1,
            total: None,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::single(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        amount: &'static str,
    }

    impl TableRow for Row {
        fn cell(&self, key: &str) -> String {
            match key {
                "name" => self.name.to_string(),
                "amount" => self.amount.to_string(),
                _ => String::new(),
            }
        }

        fn row_id(&self) -> String {
            self.id.to_string()
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "beta", amount: "10" },
            Row { id: 2, name: "Alpha", amount: "2" },
            Row { id: 3, name: "gamma", amount: "100" },
        ]
    }

    #[test]
    fn test_numeric_strings_sort_by_value() {
        let mut data = rows();
        sort_rows(&mut data, &SortState::ascending("amount"));
        let amounts: Vec<_> = data.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec!["2", "10", "100"]);

        let descending = SortState::toggle(Some(&SortState::ascending("amount")), "amount");
        sort_rows(&mut data, &descending);
        let amounts: Vec<_> = data.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec!["100", "10", "2"]);
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let mut data = rows();
        sort_rows(&mut data, &SortState::ascending("name"));
        let names: Vec<_> = data.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_compare_values_numbers_before_text() {
        assert_eq!(compare_values("10", "2"), Ordering::Greater);
        assert_eq!(compare_values("10", "abc"), Ordering::Less);
        assert_eq!(compare_values("9", "1a"), Ordering::Less);
        assert_eq!(compare_values("1a", "10"), Ordering::Greater);
        assert_eq!(compare_values("ABC", "abc"), Ordering::Equal);
    }

    #[test]
    fn test_non_finite_words_are_text() {
        assert_eq!(compare_values("Nan", "5"), Ordering::Greater);
        assert_eq!(compare_values("inf", "5"), Ordering::Greater);
        assert_eq!(compare_values("Infinity", "nan"), Ordering::Less);
    }

    #[derive(Clone, Debug)]
    struct Label(String);

    impl TableRow for Label {
        fn cell(&self, _key: &str) -> String {
            self.0.clone()
        }

        fn row_id(&self) -> String {
            self.0.clone()
        }
    }

    #[test]
    fn test_sort_large_mixed_column() {
        let mut data: Vec<Label> = (0..150)
            .map(|n| match n % 3 {
                0 => Label(format!("{}", n * 7 % 101)),
                1 => Label(format!("{}a", n * 7 % 101)),
                _ => Label(format!("x{}", n * 7 % 101)),
            })
            .collect();
        sort_rows(&mut data, &SortState::ascending("label"));

        let first_text = data
            .iter()
            .position(|row| row.0.parse::<f64>().is_err())
            .unwrap_or(data.len());
        assert_eq!(first_text, 50);
        for pair in data.windows(2) {
            assert_ne!(compare_values(&pair[0].0, &pair[1].0), Ordering::Greater);
        }

        sort_rows(&mut data, &SortState::toggle(Some(&SortState::ascending("label")), "label"));
        for pair in data.windows(2) {
            assert_ne!(compare_values(&pair[0].0, &pair[1].0), Ordering::Less);
        }
    }

    #[test]
    fn test_toggle_new_column_starts_ascending() {
        let current = SortState {
            key: "amount".to_string(),
            direction: SortDirection::Descending,
        };
        assert_eq!(SortState::toggle(Some(&current), "name"), SortState::ascending("name"));
        assert_eq!(SortState::toggle(None, "name"), SortState::ascending("name"));
    }

    #[test]
    fn test_search_over_selected_fields() {
        let data = rows();
        assert!(matches_search(&data[1], &["name"], "ALP"));
        assert!(!matches_search(&data[1], &["amount"], "alp"));
        assert!(matches_search(&data[1], &["name"], "   "));

        let shown = visible_rows(&data, &["name"], "a", Some(&SortState::ascending("name")));
        let ids: Vec<_> = shown.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_page_navigation_flags() {
        let page = Page { items: vec![1, 2], page: 2, total_pages: 3, total: Some(6) };
        assert!(page.has_previous());
        assert!(page.has_next());
        let single = Page::single(vec![1]);
        assert!(!single.has_previous());
        assert!(!single.has_next());
    }
}
