//! Component state for the template editor.
//!
//! The editor works on a local copy of the template: the layout, the name and
//! the raw sample-data text. Nothing reaches the server until the user saves.
//! Dirty tracking compares an MD5 of that editable state against the digest
//! taken at load or at the last successful save.

use common::model::{Template, TemplateElement, TemplateLayout};
use common::render::RenderMode;
use serde_json::Value;
use yew::prelude::*;

use crate::helpers::compute_md5;

/// Scale the page is shown at when the editor opens.
pub const DEFAULT_SCALE: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Move,
    Resize,
}

/// An in-progress pointer gesture on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub id: String,
    pub kind: DragKind,
    /// Pointer position when the gesture started, in screen pixels.
    pub origin: (f64, f64),
    /// Element x, y, width and height when the gesture started.
    pub start: (f64, f64, f64, f64),
}

pub struct EditorComponent {
    /// The template as last loaded or saved.
    pub template: Option<Template>,
    pub load_error: Option<String>,
    pub name: String,
    pub layout: TemplateLayout,
    /// Sample data exactly as typed; may be invalid JSON.
    pub sample_text: String,
    /// Last sample data that parsed; the canvas previews against it.
    pub sample_data: Value,
    pub sample_error: Option<String>,
    pub selected: Option<String>,
    pub mode: RenderMode,
    pub scale: f64,
    pub drag: Option<DragState>,
    pub saving: bool,
    pub presets_ref: NodeRef,
    /// Digest of the editable state at load or last save.
    pub original_md5: Option<String>,
}

impl EditorComponent {
    pub fn new() -> Self {
        Self {
            template: None,
            load_error: None,
            name: String::new(),
            layout: TemplateLayout::default(),
            sample_text: String::new(),
            sample_data: Value::Null,
            sample_error: None,
            selected: None,
            mode: RenderMode::Edit,
            scale: DEFAULT_SCALE,
            drag: None,
            saving: false,
            presets_ref: NodeRef::default(),
            original_md5: None,
        }
    }

    /// Replaces the editable state with a template from the server.
    pub fn load(&mut self, template: Template) {
        self.name = template.name.clone();
        self.layout = template.layout.clone();
        self.sample_text = pretty_json(&template.sample_data);
        self.sample_data = template.sample_data.clone();
        self.sample_error = None;
        self.template = Some(template);
        self.original_md5 = Some(self.state_md5());
    }

    /// Restores the sample data stored with the template, discarding edits.
    pub fn reset_sample_data(&mut self) -> bool {
        let Some(data) = self.template.as_ref().map(|t| t.sample_data.clone()) else {
            return false;
        };
        self.sample_text = pretty_json(&data);
        self.sample_data = data;
        self.sample_error = None;
        true
    }

    pub fn selected_element(&self) -> Option<&TemplateElement> {
        self.selected.as_deref().and_then(|id| self.layout.element(id))
    }

    pub fn state_md5(&self) -> String {
        let layout = serde_json::to_string(&self.layout).unwrap_or_default();
        compute_md5(&format!("{}\u{0}{}\u{0}{}", self.name, layout, self.sample_text))
    }

    pub fn is_dirty(&self) -> bool {
        self.original_md5
            .as_ref()
            .is_some_and(|original| *original != self.state_md5())
    }
}

pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
