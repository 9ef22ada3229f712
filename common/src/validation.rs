//! Field-level validation used by the console forms.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Maximum length, in characters, of free-text description fields.
pub const MAX_DESCRIPTION_LEN: usize = 1000;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// `local@domain.tld` with no whitespace. `a@b.co` passes, `a@b` does not.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

const LINK_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Whether a link or image target may be rendered: relative references and
/// `http`, `https` or `mailto` URLs. Whitespace and control characters are
/// ignored when reading the scheme, as browsers do.
pub fn is_safe_link(url: &str) -> bool {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    let Some(colon) = compact.find(':') else {
        return true;
    };
    if compact[..colon].contains(['/', '?', '#']) {
        return true;
    }
    let scheme = compact[..colon].to_ascii_lowercase();
    LINK_SCHEMES.contains(&scheme.as_str())
}

/// Field name to error message, looked up by field name. Only the first
/// message per field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first error reported for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

pub fn required(errors: &mut FormErrors, field: &str, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{label} is required"));
    }
}

pub fn email(errors: &mut FormErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, "Email is required");
    } else if !is_valid_email(value) {
        errors.add(field, "Enter a valid email address");
    }
}

pub fn max_length(errors: &mut FormErrors, field: &str, label: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(field, format!("{label} must be at most {max} characters"));
    }
}

pub fn validate_description(errors: &mut FormErrors, field: &str, value: &str) {
    max_length(errors, field, "Description", value, MAX_DESCRIPTION_LEN);
}

/// Parses a positive amount; reports an error and returns `None` otherwise.
pub fn positive_amount(errors: &mut FormErrors, field: &str, label: &str, value: &str) -> Option<f64> {
    let trimmed = value.trim().replace(',', "");
    if trimmed.is_empty() {
        errors.add(field, format!("{label} is required"));
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Some(amount),
        Ok(_) => {
            errors.add(field, format!("{label} must be greater than zero"));
            None
        }
        Err(_) => {
            errors.add(field, format!("{label} must be a number"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_regex() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" donor.name+tag@example.org "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.co"));
        assert!(!is_valid_email("a b@c.io"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_link_schemes() {
        assert!(is_safe_link("https://example.org/give"));
        assert!(is_safe_link("HTTP://example.org"));
        assert!(is_safe_link("mailto:team@example.org"));
        assert!(is_safe_link("/campaigns/12"));
        assert!(is_safe_link("#donate"));
        assert!(is_safe_link("updates?page=2:1"));
        assert!(!is_safe_link("javascript:alert(1)"));
        assert!(!is_safe_link(" JavaScript:alert(1)"));
        assert!(!is_safe_link("java\tscript:alert(1)"));
        assert!(!is_safe_link("data:text/html;base64,PHNjcmlwdD4="));
        assert!(!is_safe_link("vbscript:msgbox"));
    }

    #[test]
    fn test_description_limit() {
        let mut errors = FormErrors::new();
        validate_description(&mut errors, "description", &"x".repeat(MAX_DESCRIPTION_LEN));
        assert!(errors.is_empty());

        validate_description(&mut errors, "description", &"x".repeat(MAX_DESCRIPTION_LEN + 1));
        assert_eq!(
            errors.get("description"),
            Some("Description must be at most 1000 characters")
        );
    }

    #[test]
    fn test_description_counts_characters_not_bytes() {
        let mut errors = FormErrors::new();
        validate_description(&mut errors, "description", &"é".repeat(MAX_DESCRIPTION_LEN));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FormErrors::new();
        required(&mut errors, "title", "Title", "");
        max_length(&mut errors, "title", "Title", "", 0);
        errors.add("title", "other");
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_positive_amount() {
        let mut errors = FormErrors::new();
        assert_eq!(positive_amount(&mut errors, "goal", "Goal", "1,500.50"), Some(1500.5));
        assert_eq!(positive_amount(&mut errors, "a", "Goal", "0"), None);
        assert_eq!(positive_amount(&mut errors, "b", "Goal", "ten"), None);
        assert_eq!(positive_amount(&mut errors, "c", "Goal", " "), None);
        assert_eq!(errors.get("a"), Some("Goal must be greater than zero"));
        assert_eq!(errors.get("b"), Some("Goal must be a number"));
        assert_eq!(errors.get("c"), Some("Goal is required"));
    }
}
