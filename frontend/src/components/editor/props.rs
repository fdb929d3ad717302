//! Defines the properties for the `EditorComponent`.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EditorProps {
    /// Id of the template to load and edit. The parent re-keys the component
    /// on this id, so a new id always starts from a fresh state.
    pub template_id: i64,
}
