//! Persisted shapes of the invoice editor.
//!
//! A [`Template`](template::Template) owns one [`TemplateLayout`](layout::TemplateLayout),
//! which owns an ordered list of [`TemplateElement`](layout::TemplateElement)s.
//! The JSON produced by these types is the on-disk contract of the `layout`
//! column, so field names stay camelCase.

pub mod layout;
pub mod style;
pub mod template;

pub use layout::{
    ColumnFormat, ElementEdit, ElementType, LineOrientation, Orientation, PageSize, TableColumn,
    TableConfig, TemplateElement, TemplateLayout, GRID_SIZE,
};
pub use style::{ElementStyle, TableVariant, TextAlign};
pub use template::Template;
