//! Platform-independent pieces of the campaign console.
//!
//! Everything here compiles natively so the browser app and the host server
//! share one set of models, and so the logic the UI depends on (page config
//! editing, table sorting, filters, validation, request sequencing, markdown)
//! can be unit tested without a browser.

pub mod config;
pub mod envelope;
pub mod error;
pub mod filters;
pub mod format;
pub mod forms;
pub mod import;
pub mod markdown;
pub mod model;
pub mod requests;
pub mod sequencing;
pub mod storage;
pub mod table;
pub mod validation;
