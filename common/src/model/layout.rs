//! Page layout and the operations the editor performs on it.
//!
//! The layout is the editor's working state: the canvas renders it, the
//! properties panel edits it through [`ElementEdit`], and saving sends it back
//! to the server wholesale. Geometry is in CSS pixels at 96 DPI.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::style::{ElementStyle, TableVariant, TextAlign};
use crate::presets::TextPreset;

/// Magnetic grid used for dragging and resizing.
pub const GRID_SIZE: f64 = 10.0;

/// Where new elements land on the page.
const INSERT_POSITION: (f64, f64) = (50.0, 50.0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl PageSize {
    /// Portrait width and height in pixels.
    pub fn portrait_dimensions(self) -> (f64, f64) {
        match self {
            // 210mm x 297mm
            PageSize::A4 => (794.0, 1123.0),
            // 8.5in x 11in
            PageSize::Letter => (816.0, 1056.0),
        }
    }

    pub fn dimensions(self, orientation: Orientation) -> (f64, f64) {
        let (w, h) = self.portrait_dimensions();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Text,
    Image,
    Table,
    Box,
    Line,
    Qr,
    Signature,
    Badge,
}

impl ElementType {
    pub const ALL: [ElementType; 8] = [
        ElementType::Text,
        ElementType::Image,
        ElementType::Table,
        ElementType::Box,
        ElementType::Line,
        ElementType::Qr,
        ElementType::Signature,
        ElementType::Badge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::Text => "text",
            ElementType::Image => "image",
            ElementType::Table => "table",
            ElementType::Box => "box",
            ElementType::Line => "line",
            ElementType::Qr => "qr",
            ElementType::Signature => "signature",
            ElementType::Badge => "badge",
        }
    }

    /// Width and height of an element added from the toolbar.
    pub fn default_size(self) -> (f64, f64) {
        match self {
            ElementType::Table => (400.0, 150.0),
            _ => (200.0, 50.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// How a table cell value is displayed in preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnFormat {
    #[default]
    Text,
    Number,
    Currency,
}

impl ColumnFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnFormat::Text => "text",
            ColumnFormat::Number => "number",
            ColumnFormat::Currency => "currency",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(ColumnFormat::Text),
            "number" => Some(ColumnFormat::Number),
            "currency" => Some(ColumnFormat::Currency),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub header: String,
    /// Path resolved against each row of the data source.
    pub binding: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ColumnFormat>,
}

impl TableColumn {
    pub fn new(header: &str, binding: &str, width: &str) -> Self {
        Self {
            header: header.to_string(),
            binding: binding.to_string(),
            width: Some(width.to_string()),
            format: None,
        }
    }

    pub fn currency(mut self) -> Self {
        self.format = Some(ColumnFormat::Currency);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    /// Path to the array of rows inside the sample data.
    pub data_source: String,
    pub columns: Vec<TableColumn>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            data_source: "items".to_string(),
            columns: vec![
                TableColumn::new("Description", "description", "50%"),
                TableColumn::new("Price", "price", "20%").currency(),
                TableColumn::new("Qty", "quantity", "15%"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateElement {
    pub id: String,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Literal text, image URL or QR payload depending on the type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<LineOrientation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_config: Option<TableConfig>,
    #[serde(default, skip_serializing_if = "ElementStyle::is_empty")]
    pub style: ElementStyle,
}

impl TemplateElement {
    /// A toolbar element of the given type with a fresh id, at the insert
    /// position.
    pub fn new(element_type: ElementType) -> Self {
        let (width, height) = element_type.default_size();
        let mut element = Self {
            id: Uuid::new_v4().to_string(),
            element_type,
            x: INSERT_POSITION.0,
            y: INSERT_POSITION.1,
            width,
            height,
            content: None,
            binding: None,
            orientation: None,
            table_config: None,
            style: ElementStyle::for_new_element(),
        };
        match element_type {
            ElementType::Text => element.content = Some("Double click to edit".to_string()),
            ElementType::Table => element.table_config = Some(TableConfig::default()),
            ElementType::Line => element.orientation = Some(LineOrientation::Horizontal),
            _ => {}
        }
        element
    }

    /// Non-empty literal content, if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }

    /// Non-empty binding path, if any.
    pub fn binding(&self) -> Option<&str> {
        self.binding.as_deref().filter(|b| !b.is_empty())
    }

    /// Checks that `tableConfig` appears on tables and only on tables.
    pub fn table_config_error(&self) -> Option<&'static str> {
        match (self.element_type, &self.table_config) {
            (ElementType::Table, None) => Some("Table elements require a tableConfig"),
            (ElementType::Table, Some(_)) => None,
            (_, Some(_)) => Some("Only table elements may carry a tableConfig"),
            (_, None) => None,
        }
    }

    /// Applies one edit from the properties panel.
    pub fn apply(&mut self, edit: ElementEdit) {
        match edit {
            ElementEdit::Content(text) => self.content = non_empty(text),
            ElementEdit::Binding(path) => self.binding = non_empty(path.trim().to_string()),
            ElementEdit::X(x) => self.x = x,
            ElementEdit::Y(y) => self.y = y,
            ElementEdit::Width(width) => self.width = width.max(GRID_SIZE),
            ElementEdit::Height(height) => self.height = height.max(GRID_SIZE),
            ElementEdit::FontSize(size) => {
                self.style.font_size = (size > 0.0).then_some(size);
            }
            ElementEdit::TextAlign(align) => self.style.text_align = Some(align),
            ElementEdit::Color(color) => self.style.color = non_empty(color),
            ElementEdit::Border(border) => self.style.border = non_empty(border),
            ElementEdit::BackgroundColor(color) => self.style.background_color = non_empty(color),
            ElementEdit::TableVariant(variant) => self.style.table_variant = Some(variant),
            ElementEdit::Orientation(orientation) => {
                let current = self.orientation.unwrap_or_default();
                if current != orientation {
                    std::mem::swap(&mut self.width, &mut self.height);
                }
                self.orientation = Some(orientation);
            }
            ElementEdit::DataSource(path) => {
                if let Some(config) = &mut self.table_config {
                    config.data_source = path.trim().to_string();
                }
            }
            ElementEdit::AddColumn => {
                if let Some(config) = &mut self.table_config {
                    config
                        .columns
                        .push(TableColumn::new("New Column", "newKey", "100px"));
                }
            }
            ElementEdit::RemoveColumn(index) => {
                if let Some(config) = &mut self.table_config {
                    if index < config.columns.len() {
                        config.columns.remove(index);
                    }
                }
            }
            ElementEdit::ColumnHeader(index, header) => {
                if let Some(column) = self.column_mut(index) {
                    column.header = header;
                }
            }
            ElementEdit::ColumnBinding(index, binding) => {
                if let Some(column) = self.column_mut(index) {
                    column.binding = binding.trim().to_string();
                }
            }
            ElementEdit::ColumnWidth(index, width) => {
                if let Some(column) = self.column_mut(index) {
                    column.width = non_empty(width);
                }
            }
            ElementEdit::ColumnFormat(index, format) => {
                if let Some(column) = self.column_mut(index) {
                    column.format = Some(format);
                }
            }
        }
    }

    fn column_mut(&mut self, index: usize) -> Option<&mut TableColumn> {
        self.table_config
            .as_mut()
            .and_then(|config| config.columns.get_mut(index))
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// A single change made through the properties panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementEdit {
    Content(String),
    Binding(String),
    X(f64),
    Y(f64),
    Width(f64),
    Height(f64),
    FontSize(f64),
    TextAlign(TextAlign),
    Color(String),
    Border(String),
    BackgroundColor(String),
    TableVariant(TableVariant),
    Orientation(LineOrientation),
    DataSource(String),
    AddColumn,
    RemoveColumn(usize),
    ColumnHeader(usize, String),
    ColumnBinding(usize, String),
    ColumnWidth(usize, String),
    ColumnFormat(usize, ColumnFormat),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateLayout {
    #[serde(default)]
    pub page_size: PageSize,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub elements: Vec<TemplateElement>,
}

/// Rounds to the nearest grid line.
pub fn snap_to_grid(value: f64) -> f64 {
    (value / GRID_SIZE).round() * GRID_SIZE
}

impl TemplateLayout {
    pub fn page_dimensions(&self) -> (f64, f64) {
        self.page_size.dimensions(self.orientation)
    }

    pub fn element(&self, id: &str) -> Option<&TemplateElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut TemplateElement> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    /// Appends an element and returns its id.
    pub fn insert(&mut self, element: TemplateElement) -> String {
        let id = element.id.clone();
        self.elements.push(element);
        id
    }

    pub fn add_element(&mut self, element_type: ElementType) -> String {
        self.insert(TemplateElement::new(element_type))
    }

    /// Places a copy of a preset's element at the insert position.
    pub fn add_preset(&mut self, preset: &TextPreset) -> String {
        let mut element = preset.element.clone();
        element.id = Uuid::new_v4().to_string();
        element.x = INSERT_POSITION.0;
        element.y = INSERT_POSITION.1;
        self.insert(element)
    }

    pub fn remove_element(&mut self, id: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|el| el.id != id);
        self.elements.len() != before
    }

    pub fn apply_edit(&mut self, id: &str, edit: ElementEdit) -> bool {
        match self.element_mut(id) {
            Some(element) => {
                element.apply(edit);
                true
            }
            None => false,
        }
    }

    /// Moves an element, snapping to the grid and keeping it on the page.
    pub fn move_element(&mut self, id: &str, x: f64, y: f64) -> bool {
        let (page_width, page_height) = self.page_dimensions();
        match self.element_mut(id) {
            Some(element) => {
                element.x = snap_to_grid(x).clamp(0.0, (page_width - element.width).max(0.0));
                element.y = snap_to_grid(y).clamp(0.0, (page_height - element.height).max(0.0));
                true
            }
            None => false,
        }
    }

    /// Resizes an element from its top-left corner, snapping to the grid.
    pub fn resize_element(&mut self, id: &str, width: f64, height: f64) -> bool {
        let (page_width, page_height) = self.page_dimensions();
        match self.element_mut(id) {
            Some(element) => {
                let max_width = (page_width - element.x).max(GRID_SIZE);
                let max_height = (page_height - element.y).max(GRID_SIZE);
                element.width = snap_to_grid(width).clamp(GRID_SIZE, max_width);
                element.height = snap_to_grid(height).clamp(GRID_SIZE, max_height);
                true
            }
            None => false,
        }
    }

    /// First element breaking the table-config rule, with its index.
    pub fn table_config_error(&self) -> Option<(usize, &'static str)> {
        self.elements
            .iter()
            .enumerate()
            .find_map(|(index, el)| el.table_config_error().map(|msg| (index, msg)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn layout_with(types: &[ElementType]) -> (TemplateLayout, Vec<String>) {
        let mut layout = TemplateLayout::default();
        let ids = types.iter().map(|t| layout.add_element(*t)).collect();
        (layout, ids)
    }

    #[test]
    fn decodes_stored_layout_json() {
        let layout: TemplateLayout = serde_json::from_value(json!({
            "pageSize": "Letter",
            "orientation": "landscape",
            "elements": [
                {
                    "id": "el_table", "type": "table",
                    "x": 20, "y": 150, "width": 550, "height": 300,
                    "tableConfig": {
                        "dataSource": "items",
                        "columns": [
                            { "header": "Price", "binding": "price", "width": "15%", "format": "currency" }
                        ]
                    }
                },
                { "id": "el_1", "type": "text", "x": 20, "y": 20, "width": 200, "height": 40,
                  "content": "INVOICE", "style": { "fontSize": "24px", "fontWeight": "bold" } }
            ]
        }))
        .unwrap();

        assert_eq!(layout.page_dimensions(), (1056.0, 816.0));
        assert_eq!(layout.elements[0].element_type, ElementType::Table);
        let config = layout.elements[0].table_config.as_ref().unwrap();
        assert_eq!(config.columns[0].format, Some(ColumnFormat::Currency));
        assert_eq!(layout.elements[1].style.font_size, Some(24.0));
        assert_eq!(layout.table_config_error(), None);
    }

    #[test]
    fn encodes_element_type_as_type() {
        let element = TemplateElement::new(ElementType::Qr);
        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["type"], json!("qr"));
        assert!(value.get("tableConfig").is_none());
        assert!(value.get("content").is_none());
    }

    #[test]
    fn new_elements_follow_toolbar_defaults() {
        let (layout, ids) = layout_with(&[ElementType::Text, ElementType::Table, ElementType::Line]);
        assert_eq!(ids.len(), 3);
        assert_ne!(ids[0], ids[1]);

        let text = layout.element(&ids[0]).unwrap();
        assert_eq!((text.x, text.y, text.width, text.height), (50.0, 50.0, 200.0, 50.0));
        assert_eq!(text.content(), Some("Double click to edit"));
        assert_eq!(text.style.font_size, Some(14.0));

        let table = layout.element(&ids[1]).unwrap();
        assert_eq!((table.width, table.height), (400.0, 150.0));
        assert_eq!(table.table_config, Some(TableConfig::default()));

        let line = layout.element(&ids[2]).unwrap();
        assert_eq!(line.orientation, Some(LineOrientation::Horizontal));
    }

    #[test]
    fn removes_elements_by_id() {
        let (mut layout, ids) = layout_with(&[ElementType::Box, ElementType::Badge]);
        assert!(layout.remove_element(&ids[0]));
        assert!(!layout.remove_element(&ids[0]));
        assert_eq!(layout.elements.len(), 1);
        assert_eq!(layout.elements[0].id, ids[1]);
    }

    #[test]
    fn move_snaps_and_stays_on_page() {
        let (mut layout, ids) = layout_with(&[ElementType::Box]);
        assert!(layout.move_element(&ids[0], 123.0, 46.0));
        let el = layout.element(&ids[0]).unwrap();
        assert_eq!((el.x, el.y), (120.0, 50.0));

        layout.move_element(&ids[0], -40.0, 5000.0);
        let el = layout.element(&ids[0]).unwrap();
        assert_eq!((el.x, el.y), (0.0, 1123.0 - 50.0));

        assert!(!layout.move_element("missing", 0.0, 0.0));
    }

    #[test]
    fn resize_snaps_with_minimum_cell() {
        let (mut layout, ids) = layout_with(&[ElementType::Box]);
        layout.resize_element(&ids[0], 257.0, 2.0);
        let el = layout.element(&ids[0]).unwrap();
        assert_eq!((el.width, el.height), (260.0, GRID_SIZE));

        layout.resize_element(&ids[0], 5000.0, 64.0);
        let el = layout.element(&ids[0]).unwrap();
        assert_eq!((el.width, el.height), (794.0 - 50.0, 60.0));
    }

    #[test]
    fn applies_content_and_style_edits() {
        let (mut layout, ids) = layout_with(&[ElementType::Text]);
        let id = &ids[0];
        layout.apply_edit(id, ElementEdit::Content(String::new()));
        layout.apply_edit(id, ElementEdit::Binding(" client.name ".into()));
        layout.apply_edit(id, ElementEdit::TextAlign(TextAlign::Center));
        layout.apply_edit(id, ElementEdit::FontSize(18.0));
        layout.apply_edit(id, ElementEdit::Color(String::new()));

        let el = layout.element(id).unwrap();
        assert_eq!(el.content, None);
        assert_eq!(el.binding(), Some("client.name"));
        assert_eq!(el.style.text_align, Some(TextAlign::Center));
        assert_eq!(el.style.font_size, Some(18.0));
        assert_eq!(el.style.color, None);
        assert!(!layout.apply_edit("missing", ElementEdit::X(1.0)));
    }

    #[test]
    fn applies_table_column_edits() {
        let (mut layout, ids) = layout_with(&[ElementType::Table]);
        let id = &ids[0];
        layout.apply_edit(id, ElementEdit::AddColumn);
        layout.apply_edit(id, ElementEdit::ColumnHeader(3, "Total".into()));
        layout.apply_edit(id, ElementEdit::ColumnBinding(3, "total".into()));
        layout.apply_edit(id, ElementEdit::ColumnFormat(3, ColumnFormat::Currency));
        layout.apply_edit(id, ElementEdit::RemoveColumn(0));
        layout.apply_edit(id, ElementEdit::RemoveColumn(42));
        layout.apply_edit(id, ElementEdit::DataSource("lines".into()));
        layout.apply_edit(id, ElementEdit::TableVariant(TableVariant::Modern));

        let config = layout.element(id).unwrap().table_config.clone().unwrap();
        assert_eq!(config.data_source, "lines");
        let headers: Vec<_> = config.columns.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(headers, vec!["Price", "Qty", "Total"]);
        assert_eq!(config.columns[2].binding, "total");
        assert_eq!(config.columns[2].format, Some(ColumnFormat::Currency));
        assert_eq!(
            layout.element(id).unwrap().style.table_variant,
            Some(TableVariant::Modern)
        );
    }

    #[test]
    fn switching_line_orientation_swaps_dimensions() {
        let (mut layout, ids) = layout_with(&[ElementType::Line]);
        layout.apply_edit(&ids[0], ElementEdit::Orientation(LineOrientation::Vertical));
        let el = layout.element(&ids[0]).unwrap();
        assert_eq!((el.width, el.height), (50.0, 200.0));

        layout.apply_edit(&ids[0], ElementEdit::Orientation(LineOrientation::Vertical));
        let el = layout.element(&ids[0]).unwrap();
        assert_eq!((el.width, el.height), (50.0, 200.0));
    }

    #[test]
    fn reports_table_config_violations() {
        let (mut layout, ids) = layout_with(&[ElementType::Text, ElementType::Table]);
        layout.element_mut(&ids[1]).unwrap().table_config = None;
        assert_eq!(
            layout.table_config_error(),
            Some((1, "Table elements require a tableConfig"))
        );

        layout.element_mut(&ids[1]).unwrap().table_config = Some(TableConfig::default());
        layout.element_mut(&ids[0]).unwrap().table_config = Some(TableConfig::default());
        assert_eq!(
            layout.table_config_error(),
            Some((0, "Only table elements may carry a tableConfig"))
        );
    }
}
