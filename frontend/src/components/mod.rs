pub mod editor;
pub mod templates;
