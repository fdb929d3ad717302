//! Message handling for the template editor.

use common::parse_sample_data;
use common::presets::text_presets;
use common::requests::UpdateTemplateRequest;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{DragKind, DragState, EditorComponent};
use crate::api;
use crate::helpers::{set_window_dirty_flag, show_error_toast, show_toast};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

const MIN_SCALE: f64 = 0.25;
const MAX_SCALE: f64 = 2.0;

pub fn update(component: &mut EditorComponent, ctx: &Context<EditorComponent>, msg: Msg) -> bool {
    let render = match msg {
        Msg::Loaded(template) => {
            component.load(template);
            true
        }
        Msg::LoadFailed(e) => {
            show_error_toast(&format!("Failed to load template: {}", e));
            component.load_error = Some(e);
            true
        }
        Msg::SetName(name) => {
            component.name = name;
            true
        }
        Msg::SetMode(mode) => {
            component.mode = mode;
            component.drag = None;
            true
        }
        Msg::SetScale(scale) => {
            if !scale.is_finite() {
                return false;
            }
            component.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
            true
        }
        Msg::SetPageSize(page_size) => {
            component.layout.page_size = page_size;
            true
        }
        Msg::SetOrientation(orientation) => {
            component.layout.orientation = orientation;
            true
        }
        Msg::AddElement(element_type) => {
            let id = component.layout.add_element(element_type);
            component.selected = Some(id);
            true
        }
        Msg::OpenPresets => {
            open_top_sheet(component.presets_ref.clone());
            false
        }
        Msg::ClosePresets => {
            close_top_sheet(component.presets_ref.clone());
            false
        }
        Msg::AddPreset(index) => {
            let Some(preset) = text_presets().into_iter().nth(index) else {
                return false;
            };
            let id = component.layout.add_preset(&preset);
            component.selected = Some(id);
            close_top_sheet(component.presets_ref.clone());
            true
        }
        Msg::Select(id) => {
            if component.selected == id {
                return false;
            }
            component.selected = id;
            true
        }
        Msg::Edit(edit) => match component.selected.clone() {
            Some(id) => component.layout.apply_edit(&id, edit),
            None => false,
        },
        Msg::DeleteSelected => match component.selected.take() {
            Some(id) => component.layout.remove_element(&id),
            None => false,
        },
        Msg::StartDrag {
            id,
            kind,
            client_x,
            client_y,
        } => {
            if component.mode.is_preview() {
                return false;
            }
            let Some(element) = component.layout.element(&id) else {
                return false;
            };
            component.drag = Some(DragState {
                start: (element.x, element.y, element.width, element.height),
                origin: (client_x, client_y),
                kind,
                id: id.clone(),
            });
            component.selected = Some(id);
            true
        }
        Msg::DragTo { client_x, client_y } => {
            let Some(drag) = component.drag.clone() else {
                return false;
            };
            let dx = (client_x - drag.origin.0) / component.scale;
            let dy = (client_y - drag.origin.1) / component.scale;
            let (x, y, width, height) = drag.start;
            match drag.kind {
                DragKind::Move => component.layout.move_element(&drag.id, x + dx, y + dy),
                DragKind::Resize => {
                    component
                        .layout
                        .resize_element(&drag.id, width + dx, height + dy)
                }
            }
        }
        Msg::EndDrag => component.drag.take().is_some(),
        Msg::SampleDataChanged(text) => {
            match parse_sample_data(&text) {
                Ok(value) => {
                    component.sample_data = value;
                    component.sample_error = None;
                }
                Err(e) => component.sample_error = Some(e.to_string()),
            }
            component.sample_text = text;
            true
        }
        Msg::ResetSampleData => component.reset_sample_data(),
        Msg::Save => {
            save(component, ctx);
            true
        }
        Msg::Saved(template) => {
            component.saving = false;
            component.load(template);
            show_toast("Template saved successfully.");
            true
        }
        Msg::SaveFailed(e) => {
            component.saving = false;
            show_error_toast(&format!("Failed to save template: {}", e));
            true
        }
    };

    set_window_dirty_flag(component.is_dirty());
    render
}

fn save(component: &mut EditorComponent, ctx: &Context<EditorComponent>) {
    if component.saving {
        return;
    }
    let Some(template) = component.template.as_ref() else {
        return;
    };
    let sample_data = match parse_sample_data(&component.sample_text) {
        Ok(value) => value,
        Err(_) => {
            show_error_toast("Invalid JSON: Please fix the sample data JSON before saving.");
            return;
        }
    };

    let id = template.id;
    let request = UpdateTemplateRequest {
        name: Some(component.name.clone()),
        layout: Some(component.layout.clone()),
        sample_data: Some(sample_data),
        ..Default::default()
    };
    component.saving = true;

    let link = ctx.link().clone();
    spawn_local(async move {
        match api::update_template(id, &request).await {
            Ok(saved) => link.send_message(Msg::Saved(saved)),
            Err(e) => link.send_message(Msg::SaveFailed(e)),
        }
    });
}
