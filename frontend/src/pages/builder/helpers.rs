//! Pure helpers for the builder: dirty tracking and image data URLs.

use base64::{engine::general_purpose, Engine as _};
use common::model::page_config::PageConfig;

pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Fingerprint of a config as it would be stored.
pub fn config_hash(config: &PageConfig) -> String {
    compute_md5(&serde_json::to_string(config).unwrap_or_default())
}

pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { "application/octet-stream" } else { mime };
    format!("data:{mime};base64,{}", general_purpose::STANDARD.encode(bytes))
}
