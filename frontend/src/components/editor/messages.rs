use common::model::{ElementEdit, ElementType, Orientation, PageSize, Template};
use common::render::RenderMode;

use super::state::DragKind;

pub enum Msg {
    Loaded(Template),
    LoadFailed(String),
    SetName(String),
    SetMode(RenderMode),
    SetScale(f64),
    SetPageSize(PageSize),
    SetOrientation(Orientation),
    AddElement(ElementType),
    OpenPresets,
    ClosePresets,
    AddPreset(usize),
    Select(Option<String>),
    /// Edit applied to the selected element.
    Edit(ElementEdit),
    DeleteSelected,
    StartDrag {
        id: String,
        kind: DragKind,
        client_x: f64,
        client_y: f64,
    },
    DragTo {
        client_x: f64,
        client_y: f64,
    },
    EndDrag,
    SampleDataChanged(String),
    ResetSampleData,
    Save,
    Saved(Template),
    SaveFailed(String),
}
