//! Element renderer.
//!
//! Turns one [`TemplateElement`] into a [`Visual`]: the text, image source,
//! shape or table the canvas should draw for it. Rendering is a pure function of
//! the element, the [`RenderMode`] and the sample data; it never fails. Missing
//! data degrades to placeholders or to the literal `{{binding}}` token.
//!
//! In edit mode bindings are shown as tokens so the author sees what is bound
//! where. Preview mode substitutes values from the sample data.

mod media;
mod shape;
mod table;
mod text;
mod visual;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::layout::{ElementType, TemplateElement, TemplateLayout};

pub use visual::{
    ImageVisual, ShapeKind, ShapeVisual, TableHeader, TableVisual, TextStyle, TextVisual, Visual,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Edit,
    Preview,
}

impl RenderMode {
    pub fn is_preview(self) -> bool {
        self == RenderMode::Preview
    }
}

/// A rendered element together with its placement on the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedElement {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub visual: Visual,
}

pub fn render_element(element: &TemplateElement, mode: RenderMode, data: &Value) -> Visual {
    match element.element_type {
        ElementType::Text => Visual::Text(text::render(element, mode, data)),
        ElementType::Image | ElementType::Qr | ElementType::Signature => {
            Visual::Image(media::render(element, mode, data))
        }
        ElementType::Box | ElementType::Line | ElementType::Badge => {
            Visual::Shape(shape::render(element, data))
        }
        ElementType::Table => match &element.table_config {
            Some(config) => Visual::Table(table::render(config, &element.style, mode, data)),
            None => Visual::Invalid {
                message: "Invalid Table Config".to_string(),
            },
        },
    }
}

/// Renders every element of a layout in stacking order.
pub fn render_layout(layout: &TemplateLayout, mode: RenderMode, data: &Value) -> Vec<RenderedElement> {
    layout
        .elements
        .iter()
        .map(|element| RenderedElement {
            id: element.id.clone(),
            x: element.x,
            y: element.y,
            width: element.width,
            height: element.height,
            visual: render_element(element, mode, data),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::layout::{TableColumn, TableConfig};
    use crate::model::style::ElementStyle;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn table_element() -> TemplateElement {
        TemplateElement {
            id: "items".into(),
            element_type: ElementType::Table,
            x: 20.0,
            y: 150.0,
            width: 550.0,
            height: 300.0,
            content: None,
            binding: None,
            orientation: None,
            table_config: Some(TableConfig {
                data_source: "items".into(),
                columns: vec![
                    TableColumn::new("Description", "description", "70%"),
                    TableColumn::new("Price", "price", "30%").currency(),
                ],
            }),
            style: ElementStyle::default(),
        }
    }

    #[test]
    fn table_previews_sample_rows() {
        let layout = TemplateLayout {
            elements: vec![table_element()],
            ..TemplateLayout::default()
        };
        let data = json!({ "items": [{ "description": "X", "price": 10 }] });

        let rendered = render_layout(&layout, RenderMode::Preview, &data);
        assert_eq!(rendered.len(), 1);
        assert_eq!((rendered[0].x, rendered[0].y), (20.0, 150.0));
        match &rendered[0].visual {
            Visual::Table(table) => {
                assert_eq!(table.rows, vec![vec!["X".to_string(), "$10.00".to_string()]]);
            }
            other => panic!("expected a table, got {:?}", other),
        }
    }

    #[test]
    fn table_without_config_is_invalid() {
        let mut element = table_element();
        element.table_config = None;
        assert_eq!(
            render_element(&element, RenderMode::Preview, &json!({})),
            Visual::Invalid {
                message: "Invalid Table Config".into()
            }
        );
    }

    #[test]
    fn visuals_serialize_with_kind_tag() {
        let visual = render_element(&table_element(), RenderMode::Edit, &Value::Null);
        let value = serde_json::to_value(&visual).unwrap();
        assert_eq!(value["kind"], json!("table"));
        assert_eq!(value["rows"][0], json!(["{description}", "{price}"]));
    }
}
