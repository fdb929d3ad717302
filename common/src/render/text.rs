use serde_json::Value;

use super::visual::{TextStyle, TextVisual};
use super::RenderMode;
use crate::binding::{interpolate, placeholder, resolve_or};
use crate::format::value_to_text;
use crate::model::layout::TemplateElement;
use crate::model::style::ElementStyle;

pub(super) fn render(element: &TemplateElement, mode: RenderMode, data: &Value) -> TextVisual {
    let text = match (mode, element.binding()) {
        (RenderMode::Preview, Some(binding)) => {
            match resolve_or(data, binding, Value::String(placeholder(binding))) {
                Value::String(s) => interpolate(&s, data),
                other => value_to_text(&other),
            }
        }
        (RenderMode::Preview, None) => interpolate(&authoring_text(element), data),
        (RenderMode::Edit, _) => authoring_text(element),
    };

    TextVisual {
        text,
        style: resolve_style(&element.style),
    }
}

/// What the author sees on the canvas: literal content, else the binding token.
fn authoring_text(element: &TemplateElement) -> String {
    if let Some(content) = element.content() {
        content.to_string()
    } else if let Some(binding) = element.binding() {
        placeholder(binding)
    } else {
        "Text".to_string()
    }
}

fn resolve_style(style: &ElementStyle) -> TextStyle {
    let keyword = |value: &Option<String>, default: &str| {
        value.clone().unwrap_or_else(|| default.to_string())
    };
    TextStyle {
        font_size: style.font_size.unwrap_or(14.0),
        text_align: style.text_align.unwrap_or_default(),
        color: keyword(&style.color, "inherit"),
        font_weight: keyword(&style.font_weight, "normal"),
        line_height: style.line_height,
        font_style: keyword(&style.font_style, "normal"),
        text_transform: keyword(&style.text_transform, "none"),
        letter_spacing: style.letter_spacing,
        font_family: keyword(&style.font_family, "inherit"),
        border_bottom: keyword(&style.border_bottom, "none"),
        padding_bottom: style.padding_bottom.unwrap_or(0.0),
    }
}
