//! Template list: the landing page.
//!
//! Shows every stored template as a card. Clicking a card opens it in the
//! editor; "Create New Template" stores a template with the default layout and
//! sample data, then opens it. Deleting asks for confirmation first.

use common::model::Template;
use common::presets::new_template_request;
use web_sys::MouseEvent;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::app::Route;
use crate::helpers::{confirm, navigate, show_error_toast, show_toast};

pub enum Msg {
    Load,
    Loaded(Vec<Template>),
    LoadFailed(String),
    Create,
    CreateFailed(String),
    Open(i64),
    Delete(i64),
    Deleted(i64),
}

pub struct TemplateListComponent {
    templates: Vec<Template>,
    loading: bool,
    creating: bool,
}

impl Component for TemplateListComponent {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            templates: Vec::new(),
            loading: true,
            creating: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::list_templates().await {
                        Ok(templates) => link.send_message(Msg::Loaded(templates)),
                        Err(e) => link.send_message(Msg::LoadFailed(e)),
                    }
                });
                false
            }
            Msg::Loaded(templates) => {
                self.templates = templates;
                self.loading = false;
                true
            }
            Msg::LoadFailed(e) => {
                self.loading = false;
                show_error_toast(&format!("Could not load templates: {}", e));
                true
            }
            Msg::Create => {
                if self.creating {
                    return false;
                }
                self.creating = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::create_template(&new_template_request()).await {
                        Ok(template) => link.send_message(Msg::Open(template.id)),
                        Err(e) => link.send_message(Msg::CreateFailed(e)),
                    }
                });
                true
            }
            Msg::CreateFailed(e) => {
                self.creating = false;
                show_error_toast(&format!("Failed to create template: {}", e));
                true
            }
            Msg::Open(id) => {
                navigate(Route::Editor(id));
                false
            }
            Msg::Delete(id) => {
                if !confirm("Delete this template? This cannot be undone.") {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::delete_template(id).await {
                        Ok(()) => link.send_message(Msg::Deleted(id)),
                        Err(e) => show_error_toast(&format!("Failed to delete template: {}", e)),
                    }
                });
                false
            }
            Msg::Deleted(id) => {
                self.templates.retain(|t| t.id != id);
                show_toast("Template deleted.");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="template-list">
                <header>
                    <div>
                        <h1>{"Templates"}</h1>
                        <p class="muted">{"Manage your invoice designs and layouts."}</p>
                    </div>
                    <button class="primary" disabled={self.creating} onclick={link.callback(|_| Msg::Create)}>
                        { if self.creating { "Creating..." } else { "Create New Template" } }
                    </button>
                </header>
                {
                    if self.loading {
                        html! { <p class="muted">{"Loading..."}</p> }
                    } else {
                        html! {
                            <div class="template-grid">
                                <button class="template-card create-card" disabled={self.creating} onclick={link.callback(|_| Msg::Create)}>
                                    <i class="material-icons">{"add"}</i>
                                    {"Create Empty Template"}
                                </button>
                                { for self.templates.iter().map(|t| template_card(t, link)) }
                            </div>
                        }
                    }
                }
            </div>
        }
    }
}

fn template_card(template: &Template, link: &Scope<TemplateListComponent>) -> Html {
    let id = template.id;
    let on_delete = link.callback(move |e: MouseEvent| {
        e.stop_propagation();
        Msg::Delete(id)
    });
    let description = template
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "No description".to_string());

    html! {
        <div class="template-card" key={id.to_string()} onclick={link.callback(move |_| Msg::Open(id))}>
            <strong>{ template.name.clone() }</strong>
            <span class="description">{ description }</span>
            <span class="muted">{ format!("{} elements", template.layout.elements.len()) }</span>
            <footer>
                <span>{ template.updated_at.format("%Y-%m-%d").to_string() }</span>
                <button class="danger" title="Delete" onclick={on_delete}>
                    <i class="material-icons">{"delete"}</i>
                </button>
            </footer>
        </div>
    }
}
