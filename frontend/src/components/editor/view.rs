//! Editor layout: header, element toolbar with sample data, canvas and
//! properties panel.

use common::model::{ElementType, Orientation, PageSize};
use common::render::RenderMode;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::canvas::canvas;
use super::messages::Msg;
use super::presets::presets_sheet;
use super::properties::properties_panel;
use super::state::EditorComponent;

pub fn view(component: &EditorComponent, ctx: &Context<EditorComponent>) -> Html {
    let link = ctx.link();

    if let Some(error) = &component.load_error {
        return html! {
            <div class="template-list">
                <h1>{"Template unavailable"}</h1>
                <p class="muted">{ error.clone() }</p>
                <a href="#/">{"Back to templates"}</a>
            </div>
        };
    }
    if component.template.is_none() {
        return html! { <div class="template-list"><p class="muted">{"Loading..."}</p></div> };
    }

    html! {
        <div class="editor-root">
            { header(component, link) }
            <div class="editor-body">
                { left_sidebar(component, link) }
                { canvas(component, link) }
                { properties_panel(component, link) }
            </div>
            { presets_sheet(component, link) }
        </div>
    }
}

fn header(component: &EditorComponent, link: &Scope<EditorComponent>) -> Html {
    let on_name = link.callback(|e: InputEvent| {
        Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let on_page_size = link.callback(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        Msg::SetPageSize(if value == "Letter" { PageSize::Letter } else { PageSize::A4 })
    });
    let on_orientation = link.callback(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        Msg::SetOrientation(if value == "landscape" {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        })
    });
    let on_scale = link.batch_callback(|e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        value.parse::<f64>().ok().map(|percent| Msg::SetScale(percent / 100.0))
    });
    let mode_button = |mode: RenderMode, label: &str| {
        html! {
            <button class={classes!((component.mode == mode).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetMode(mode))}>
                { label.to_string() }
            </button>
        }
    };
    let layout = &component.layout;
    let scale_percent = (component.scale * 100.0).round();

    html! {
        <header class="editor-header">
            <div style="display:flex; align-items:center; gap:8px;">
                <a href="#/" title="Back to templates"><i class="material-icons">{"arrow_back"}</i></a>
                <input class="name-input" value={component.name.clone()} oninput={on_name} />
                if component.is_dirty() {
                    <span class="dirty-dot" title="Unsaved changes"></span>
                }
            </div>
            <div style="display:flex; align-items:center; gap:12px;">
                <div class="segmented">
                    { mode_button(RenderMode::Edit, "Edit") }
                    { mode_button(RenderMode::Preview, "Preview") }
                </div>
                <select onchange={on_page_size}>
                    <option value="A4" selected={layout.page_size == PageSize::A4}>{"A4"}</option>
                    <option value="Letter" selected={layout.page_size == PageSize::Letter}>{"Letter"}</option>
                </select>
                <select onchange={on_orientation}>
                    <option value="portrait" selected={layout.orientation == Orientation::Portrait}>{"Portrait"}</option>
                    <option value="landscape" selected={layout.orientation == Orientation::Landscape}>{"Landscape"}</option>
                </select>
                <label class="muted">
                    {"Zoom "}
                    <input type="range" min="25" max="200" step="5"
                        value={scale_percent.to_string()} oninput={on_scale} />
                    { format!(" {}%", scale_percent) }
                </label>
                <button class="primary" disabled={component.saving} onclick={link.callback(|_| Msg::Save)}>
                    { if component.saving { "Saving..." } else { "Save" } }
                </button>
            </div>
        </header>
    }
}

fn left_sidebar(component: &EditorComponent, link: &Scope<EditorComponent>) -> Html {
    let on_sample = link.callback(|e: InputEvent| {
        Msg::SampleDataChanged(e.target_unchecked_into::<HtmlTextAreaElement>().value())
    });

    html! {
        <aside class="sidebar">
            <h3>{"Elements"}</h3>
            <div class="icon-toolbar">
                { for ElementType::ALL.iter().map(|element_type| {
                    let element_type = *element_type;
                    html! {
                        <button class="icon-btn" key={element_type.as_str()}
                            onclick={link.callback(move |_| Msg::AddElement(element_type))}>
                            <i class="material-icons">{ toolbar_icon(element_type) }</i>
                            <span class="icon-label">{ element_type.as_str() }</span>
                        </button>
                    }
                }) }
                <button class="icon-btn wide" onclick={link.callback(|_| Msg::OpenPresets)}>
                    <i class="material-icons">{"auto_awesome"}</i>
                    <span class="icon-label">{"Text presets"}</span>
                </button>
            </div>
            <div class="sample-data">
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <h3 style="border:0;">{"Sample Data (JSON)"}</h3>
                    <button class="icon-btn" style="margin-right:12px;" title="Reset sample data"
                        onclick={link.callback(|_| Msg::ResetSampleData)}>
                        <i class="material-icons">{"restart_alt"}</i>
                    </button>
                </div>
                <textarea spellcheck="false" value={component.sample_text.clone()} oninput={on_sample}></textarea>
                if let Some(error) = &component.sample_error {
                    <div class="error">{ error.clone() }</div>
                }
            </div>
        </aside>
    }
}

fn toolbar_icon(element_type: ElementType) -> &'static str {
    match element_type {
        ElementType::Text => "text_fields",
        ElementType::Image => "image",
        ElementType::Table => "table_chart",
        ElementType::Box => "crop_square",
        ElementType::Line => "horizontal_rule",
        ElementType::Qr => "qr_code_2",
        ElementType::Signature => "draw",
        ElementType::Badge => "sell",
    }
}
