//! Contact list import from CSV uploads.
//!
//! The header row decides the columns: `email` is required, the name is read
//! from `name`, `full_name` or `first_name` + `last_name`. Header matching is
//! case-insensitive and ignores surrounding whitespace and quotes.

use crate::requests::NewContact;
use crate::validation::is_valid_email;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("The file has no 'email' column")]
    MissingEmailColumn,

    #[error("Could not read CSV: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line number in the file, header included.
    pub line: usize,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub contacts: Vec<NewContact>,
    pub rejected: Vec<RejectedRow>,
    pub duplicates: usize,
}

fn normalize_header(header: &str) -> String {
    header
        .trim()
        .trim_matches(|c| c == '"' || c == '\'' || c == '\u{feff}')
        .trim()
        .to_lowercase()
        .replace(' ', "_")
}

fn detect_delimiter(input: &str) -> u8 {
    let header = input.lines().next().unwrap_or("");
    if header.matches(';').count() > header.matches(',').count() {
        b';'
    } else {
        b','
    }
}

pub fn parse_contacts_csv(input: &str) -> Result<ImportReport, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(detect_delimiter(input))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ImportError::Malformed(e.to_string()))?
        .iter()
        .map(normalize_header)
        .collect();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let email_idx = column("email")
        .or_else(|| column("email_address"))
        .ok_or(ImportError::MissingEmailColumn)?;
    let name_idx = column("name").or_else(|| column("full_name"));
    let first_idx = column("first_name");
    let last_idx = column("last_name");

    let mut report = ImportReport::default();
    let mut seen = HashSet::new();

    for (offset, record) in reader.records().enumerate() {
        let record = record.map_err(|e| ImportError::Malformed(e.to_string()))?;
        let line = record
            .position()
            .map_or(offset + 2, |position| position.line() as usize);
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .map(str::trim)
                .unwrap_or("")
                .to_string()
        };

        let email = field(Some(email_idx)).to_lowercase();
        if email.is_empty() && record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        if !is_valid_email(&email) {
            report.rejected.push(RejectedRow {
                line,
                value: email,
                reason: "invalid email".to_string(),
            });
            continue;
        }
        if !seen.insert(email.clone()) {
            report.duplicates += 1;
            continue;
        }

        let name = match name_idx {
            Some(_) => field(name_idx),
            None => format!("{} {}", field(first_idx), field(last_idx)).trim().to_string(),
        };
        report.contacts.push(NewContact {
            email,
            name: (!name.is_empty()).then_some(name),
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_with_name_column() {
        let csv = "Email,Name\nada@example.org,Ada Lovelace\nbad-address,Nobody\nADA@example.org,Dup\n";
        let report = parse_contacts_csv(csv).unwrap();
        assert_eq!(report.contacts.len(), 1);
        assert_eq!(report.contacts[0].name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].line, 3);
        assert_eq!(report.duplicates, 1);
    }

    #[test]
    fn test_import_first_last_semicolon() {
        let csv = "first_name;last_name;email\nGrace;Hopper;grace@navy.mil\n;;\n";
        let report = parse_contacts_csv(csv).unwrap();
        assert_eq!(report.contacts.len(), 1);
        assert_eq!(report.contacts[0].name.as_deref(), Some("Grace Hopper"));
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_rejected_line_follows_quoted_newlines() {
        let csv = "email,name\nada@example.org,\"Ada\nLovelace\"\n\nnot-an-email,Nobody\n";
        let report = parse_contacts_csv(csv).unwrap();
        assert_eq!(report.contacts[0].name.as_deref(), Some("Ada\nLovelace"));
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].line, 5);
    }

    #[test]
    fn test_missing_email_column() {
        assert_eq!(
            parse_contacts_csv("name\nAda\n"),
            Err(ImportError::MissingEmailColumn)
        );
    }

    #[test]
    fn test_email_only_rows() {
        let report = parse_contacts_csv("\"email\"\nx@y.io\n").unwrap();
        assert_eq!(report.contacts, vec![NewContact { email: "x@y.io".to_string(), name: None }]);
    }
}
