use common::presets::text_presets;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::EditorComponent;
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

/// Top sheet listing the text presets; clicking one inserts it on the page.
pub fn presets_sheet(component: &EditorComponent, link: &Scope<EditorComponent>) -> Html {
    let presets = text_presets();
    html! {
        <YwMaterialTopSheet
            node_ref={component.presets_ref.clone()}
            title="Text Presets"
            on_close={link.callback(|_| Msg::ClosePresets)}>
            <div class="preset-grid">
                { for presets.iter().enumerate().map(|(index, preset)| html! {
                    <button class="preset" key={preset.id} onclick={link.callback(move |_| Msg::AddPreset(index))}>
                        <strong>{ preset.name }</strong>
                        <div class="muted">{ preset.description }</div>
                    </button>
                }) }
            </div>
        </YwMaterialTopSheet>
    }
}
