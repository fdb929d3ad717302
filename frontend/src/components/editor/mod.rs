//! Template editor: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `EditorProps`, `EditorComponent`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - On creation, load the template named by `template_id` from the server.

use yew::platform::spawn_local;
use yew::prelude::*;

mod canvas;
mod messages;
mod presets;
mod properties;
mod props;
mod state;
mod update;
mod view;

use crate::api;
pub use messages::Msg;
pub use props::EditorProps;
pub use state::EditorComponent;

impl Component for EditorComponent {
    type Message = Msg;
    type Properties = EditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let template_id = ctx.props().template_id;
        spawn_local(async move {
            match api::get_template(template_id).await {
                Ok(template) => link.send_message(Msg::Loaded(template)),
                Err(e) => link.send_message(Msg::LoadFailed(e)),
            }
        });
        EditorComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        crate::helpers::set_window_dirty_flag(false);
    }
}
