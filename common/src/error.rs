//! Normalised API failures.
//!
//! Every request made by the console ends in `Result<T, ApiError>`. Message
//! extraction from error bodies happens once, in `ApiError::from_response`,
//! so pages only ever display `ApiError::to_string()`.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Builds an error from a non-success status and raw response body.
    ///
    /// The message is taken from `message`, `error`, `data.message` or
    /// `errors[0].message` of a JSON body, then the raw text, then a generic
    /// status line.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        let message = extract_message(body)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    let Ok(json) = serde_json::from_str::<Value>(trimmed) else {
        return Some(trimmed.to_string());
    };
    let candidates = [
        json.get("message"),
        json.get("error"),
        json.get("data").and_then(|data| data.get("message")),
        json.get("errors")
            .and_then(|errors| errors.get(0))
            .and_then(|first| first.get("message")),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter_map(|value| value.as_str())
        .find(|message| !message.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_extraction_order() {
        let err = ApiError::from_response(400, r#"{"message": "Title is required", "error": "Bad Request"}"#);
        assert_eq!(err.to_string(), "Title is required");

        let err = ApiError::from_response(422, r#"{"error": "Invalid amount"}"#);
        assert_eq!(err.to_string(), "Invalid amount");

        let err = ApiError::from_response(409, r#"{"data": {"message": "Already reviewed"}}"#);
        assert_eq!(err.to_string(), "Already reviewed");

        let err = ApiError::from_response(400, r#"{"errors": [{"message": "Email taken"}]}"#);
        assert_eq!(err.to_string(), "Email taken");
    }

    #[test]
    fn test_blank_message_defers_to_next_candidate() {
        let err = ApiError::from_response(422, r#"{"message": "", "error": "Invalid amount"}"#);
        assert_eq!(err.to_string(), "Invalid amount");

        let err = ApiError::from_response(400, r#"{"message": "  ", "data": {"message": "Goal too low"}}"#);
        assert_eq!(err.to_string(), "Goal too low");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(
            ApiError::from_response(502, "Bad gateway").to_string(),
            "Bad gateway"
        );
        assert_eq!(
            ApiError::from_response(500, "").to_string(),
            "Request failed with status 500"
        );
        assert_eq!(
            ApiError::from_response(500, r#"{"message": 5}"#).to_string(),
            "Request failed with status 500"
        );
    }

    #[test]
    fn test_unauthorized() {
        let err = ApiError::from_response(401, r#"{"message": "jwt expired"}"#);
        assert_eq!(err, ApiError::Unauthorized);
        assert_eq!(err.status(), Some(401));
    }
}
