//! Request bodies of the template REST API and their validation.
//!
//! Bodies are checked field by field in a fixed order (`name`, `description`,
//! `layout`, `sampleData`) and the first problem found is reported together
//! with the path of the offending field, so the client can point at it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::layout::TemplateLayout;

/// A request body failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub message: String,
    /// Dotted path of the offending field, empty for the body itself.
    pub field: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }
}

/// Body of `POST /api/templates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub layout: TemplateLayout,
    pub sample_data: Value,
}

/// Body of `PUT /api/templates/{id}`. Absent fields are left unchanged.
///
/// Only serialized by clients; the server goes through [`from_json`](Self::from_json)
/// so an explicit `null` description can be told apart from an absent one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `Some(None)` clears the description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<TemplateLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_data: Option<Value>,
}

impl CreateTemplateRequest {
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let fields = as_object(body)?;
        let name = required(fields, "name").and_then(|v| string_field("name", v))?;
        let description = optional_description(fields)?;
        let layout = required(fields, "layout").and_then(layout_field)?;
        let sample_data = required(fields, "sampleData")
            .and_then(|v| non_null("sampleData", v))?
            .clone();

        Ok(Self {
            name,
            description,
            layout,
            sample_data,
        })
    }
}

impl UpdateTemplateRequest {
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let fields = as_object(body)?;
        let name = fields
            .get("name")
            .map(|v| string_field("name", v))
            .transpose()?;
        let description = if fields.contains_key("description") {
            Some(optional_description(fields)?)
        } else {
            None
        };
        let layout = fields.get("layout").map(layout_field).transpose()?;
        let sample_data = fields
            .get("sampleData")
            .map(|v| non_null("sampleData", v).cloned())
            .transpose()?;

        Ok(Self {
            name,
            description,
            layout,
            sample_data,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object().ok_or_else(|| {
        ValidationError::new("", format!("Expected object, received {}", type_name(body)))
    })
}

fn required<'a>(fields: &'a Map<String, Value>, name: &str) -> Result<&'a Value, ValidationError> {
    match fields.get(name) {
        Some(value) => Ok(value),
        None => Err(ValidationError::new(name, "Required")),
    }
}

fn non_null<'a>(name: &str, value: &'a Value) -> Result<&'a Value, ValidationError> {
    if value.is_null() {
        Err(ValidationError::new(name, "Required"))
    } else {
        Ok(value)
    }
}

fn string_field(name: &str, value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Err(ValidationError::new(name, "Required")),
        other => Err(ValidationError::new(
            name,
            format!("Expected string, received {}", type_name(other)),
        )),
    }
}

fn optional_description(fields: &Map<String, Value>) -> Result<Option<String>, ValidationError> {
    match fields.get("description") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => string_field("description", value).map(Some),
    }
}

fn layout_field(value: &Value) -> Result<TemplateLayout, ValidationError> {
    if !value.is_object() {
        return Err(ValidationError::new(
            "layout",
            format!("Expected object, received {}", type_name(value)),
        ));
    }
    let layout: TemplateLayout = serde_json::from_value(value.clone())
        .map_err(|e| ValidationError::new("layout", e.to_string()))?;
    if let Some((index, message)) = layout.table_config_error() {
        return Err(ValidationError::new(
            format!("layout.elements.{}.tableConfig", index),
            message,
        ));
    }
    Ok(layout)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
