use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::layout::TemplateLayout;

/// A stored invoice template.
///
/// `id` and both timestamps are assigned by the repository. `sample_data` is
/// an arbitrary JSON document used to preview bindings before real data exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub layout: TemplateLayout,
    pub sample_data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
