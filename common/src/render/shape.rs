use serde_json::Value;

use super::visual::{ShapeKind, ShapeVisual};
use crate::binding::{placeholder, resolve_or};
use crate::format::value_to_text;
use crate::model::layout::{ElementType, TemplateElement};

pub(super) fn render(element: &TemplateElement, data: &Value) -> ShapeVisual {
    let (shape, default_background) = match element.element_type {
        ElementType::Line => (ShapeKind::Line, "#000"),
        ElementType::Badge => (ShapeKind::Badge, "#3b82f6"),
        _ => (ShapeKind::Box, "#eee"),
    };
    let style = &element.style;

    ShapeVisual {
        shape,
        label: (shape == ShapeKind::Badge).then(|| badge_label(element, data)),
        background: style
            .background_color
            .clone()
            .unwrap_or_else(|| default_background.to_string()),
        border: style.border.clone().unwrap_or_else(|| "none".to_string()),
        color: style.color.clone().unwrap_or_else(|| "#fff".to_string()),
        font_size: style.font_size.unwrap_or(12.0),
        rounded: shape == ShapeKind::Badge,
    }
}

// Badges resolve their binding in both modes.
fn badge_label(element: &TemplateElement, data: &Value) -> String {
    if let Some(content) = element.content() {
        return content.to_string();
    }
    match element.binding() {
        Some(binding) => value_to_text(&resolve_or(data, binding, Value::String(placeholder(binding)))),
        None => "PAID".to_string(),
    }
}
