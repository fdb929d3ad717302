use serde::Serialize;

use crate::format::format_number;
use crate::model::style::{TableVariant, TextAlign};

/// What the canvas draws for one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Visual {
    Text(TextVisual),
    Image(ImageVisual),
    Shape(ShapeVisual),
    Table(TableVisual),
    /// The element cannot be drawn; `message` is shown in its place.
    Invalid { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextVisual {
    pub text: String,
    pub style: TextStyle,
}

/// Text styling with every default filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: f64,
    pub text_align: TextAlign,
    pub color: String,
    pub font_weight: String,
    /// `None` is CSS `normal`.
    pub line_height: Option<f64>,
    pub font_style: String,
    pub text_transform: String,
    /// `None` is CSS `normal`.
    pub letter_spacing: Option<f64>,
    pub font_family: String,
    pub border_bottom: String,
    pub padding_bottom: f64,
}

impl TextStyle {
    /// Inline CSS declarations for the text container.
    pub fn css(&self) -> String {
        let line_height = self
            .line_height
            .map(format_number)
            .unwrap_or_else(|| "normal".to_string());
        let letter_spacing = self
            .letter_spacing
            .map(|px| format!("{}px", format_number(px)))
            .unwrap_or_else(|| "normal".to_string());
        format!(
            "font-size:{}px;text-align:{};color:{};font-weight:{};line-height:{};font-style:{};\
             text-transform:{};letter-spacing:{};font-family:{};border-bottom:{};padding-bottom:{}px;",
            format_number(self.font_size),
            self.text_align.as_css(),
            self.color,
            self.font_weight,
            line_height,
            self.font_style,
            self.text_transform,
            letter_spacing,
            self.font_family,
            self.border_bottom,
            format_number(self.padding_bottom),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageVisual {
    pub src: String,
    /// Element type name, used as the `alt` text.
    pub alt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Box,
    Line,
    Badge,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeVisual {
    pub shape: ShapeKind,
    /// Only badges carry a label.
    pub label: Option<String>,
    pub background: String,
    pub border: String,
    pub color: String,
    pub font_size: f64,
    /// Pill-shaped corners.
    pub rounded: bool,
}

impl ShapeVisual {
    pub fn css(&self) -> String {
        let radius = if self.rounded { "border-radius:9999px;" } else { "" };
        format!(
            "background-color:{};border:{};color:{};font-size:{}px;{}",
            self.background,
            self.border,
            self.color,
            format_number(self.font_size),
            radius
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableHeader {
    pub header: String,
    pub width: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableVisual {
    pub variant: TableVariant,
    pub columns: Vec<TableHeader>,
    /// Cell text, one inner vector per row, in column order.
    pub rows: Vec<Vec<String>>,
}
