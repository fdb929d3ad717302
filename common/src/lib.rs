//! Shared model and rendering logic for the invoice template editor.
//!
//! Everything in this crate is pure: it compiles for the backend and for the
//! `wasm32` frontend alike, so the preview the editor shows and the preview the
//! REST service returns come from the same code.

pub mod binding;
pub mod format;
pub mod model;
pub mod presets;
pub mod render;
pub mod requests;

use serde_json::Value;
use thiserror::Error;

/// Sample data typed by the user could not be parsed as JSON.
#[derive(Debug, Error)]
#[error("Invalid JSON: {0}")]
pub struct SampleDataError(#[from] serde_json::Error);

/// Parses the sample data text area of the editor.
///
/// Called at save time; a failure blocks the save without touching the
/// persisted template.
pub fn parse_sample_data(text: &str) -> Result<Value, SampleDataError> {
    Ok(serde_json::from_str(text)?)
}
