//! Closed style schema for template elements.
//!
//! Stored layouts written by older editors carry loosely typed style values:
//! `fontSize` may be `14` or `"24px"`, `fontWeight` may be `"bold"` or `600`.
//! Decoding normalises those spellings and drops values it cannot use, so a
//! slightly odd style never makes a whole layout unreadable.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::format::value_to_text;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableVariant {
    #[default]
    Default,
    Minimal,
    Modern,
}

impl TableVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            TableVariant::Default => "default",
            TableVariant::Minimal => "minimal",
            TableVariant::Modern => "modern",
        }
    }
}

/// Visual properties of one element. Every field is optional; the renderer
/// supplies per-type defaults for whatever is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(default, deserialize_with = "css_length", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Unitless multiple of the font size.
    #[serde(default, deserialize_with = "css_ratio", skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(default, deserialize_with = "css_length", skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<String>,
    #[serde(default, deserialize_with = "css_length", skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub table_variant: Option<TableVariant>,
}

impl ElementStyle {
    /// Style given to elements freshly added from the toolbar.
    pub fn for_new_element() -> Self {
        Self {
            color: Some("#000000".to_string()),
            font_size: Some(14.0),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A number, or a string such as `"24px"` or `"1.5"`.
fn css_length<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches("px").trim().parse().ok(),
        _ => None,
    }))
}

/// A unitless number such as `1.5` or `"1.5"`. Values with units are dropped.
fn css_ratio<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

/// A string, or a number written where a keyword was expected (`600`).
fn css_keyword<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(_) => Some(value_to_text(&value)),
        _ => None,
    }))
}

/// Decodes `T` when possible and otherwise forgets the value.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn normalises_loose_values() {
        let style: ElementStyle = serde_json::from_value(json!({
            "fontSize": "24px",
            "fontWeight": 600,
            "lineHeight": "normal",
            "letterSpacing": 2,
            "textAlign": "right",
            "tableVariant": "modern"
        }))
        .unwrap();

        assert_eq!(
            style,
            ElementStyle {
                font_size: Some(24.0),
                font_weight: Some("600".into()),
                line_height: None,
                letter_spacing: Some(2.0),
                text_align: Some(TextAlign::Right),
                table_variant: Some(TableVariant::Modern),
                ..ElementStyle::default()
            }
        );
    }

    #[test]
    fn line_height_stays_unitless() {
        let ratio: ElementStyle = serde_json::from_value(json!({ "lineHeight": "1.6" })).unwrap();
        assert_eq!(ratio.line_height, Some(1.6));

        let pixels: ElementStyle = serde_json::from_value(json!({ "lineHeight": "24px" })).unwrap();
        assert_eq!(pixels.line_height, None);
    }

    #[test]
    fn drops_unusable_values_and_unknown_keys() {
        let style: ElementStyle = serde_json::from_value(json!({
            "textAlign": "diagonal",
            "color": "",
            "fontSize": { "value": 3 },
            "zIndex": 4
        }))
        .unwrap();
        assert!(style.is_empty());
    }

    #[test]
    fn serializes_only_present_fields() {
        let value = serde_json::to_value(ElementStyle::for_new_element()).unwrap();
        assert_eq!(value, json!({ "fontSize": 14.0, "color": "#000000" }));
    }
}
