//! Application shell: picks the page to show from the location hash.
//!
//! `#/` shows the template list, `#/editor/{id}` the editor for one template.
//! Hash routing keeps every page reachable through the backend's single
//! `index.html` fallback.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::{html, Component, Context, Html};

use crate::components::editor::EditorComponent;
use crate::components::templates::TemplateListComponent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Editor(i64),
}

impl Route {
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        match path.split_once('/') {
            Some(("editor", id)) => id.parse().map(Route::Editor).unwrap_or(Route::List),
            _ => Route::List,
        }
    }

    pub fn to_hash(self) -> String {
        match self {
            Route::List => "#/".to_string(),
            Route::Editor(id) => format!("#/editor/{}", id),
        }
    }

    /// Route of the current page.
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|hash| Route::from_hash(&hash))
            .unwrap_or(Route::List)
    }
}

pub enum Msg {
    HashChanged,
}

pub struct App {
    route: Route,
    // Kept alive for as long as the app is mounted.
    _hash_listener: Option<Closure<dyn Fn()>>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let listener = Closure::<dyn Fn()>::new(move || link.send_message(Msg::HashChanged));
        let registered = web_sys::window().is_some_and(|window| {
            window
                .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
                .is_ok()
        });

        Self {
            route: Route::current(),
            _hash_listener: registered.then_some(listener),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::HashChanged => {
                let route = Route::current();
                let changed = route != self.route;
                self.route = route;
                changed
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match self.route {
            Route::List => html! { <TemplateListComponent /> },
            Route::Editor(id) => html! { <EditorComponent key={id.to_string()} template_id={id} /> },
        }
    }
}
