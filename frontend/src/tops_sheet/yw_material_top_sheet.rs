//! Slide-down sheet used for secondary panels such as the text presets.
//!
//! The sheet is always mounted; [`open_top_sheet`] and [`close_top_sheet`]
//! toggle the `show` class on its DOM node so the CSS transition runs.

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use web_sys::MouseEvent;
use yew::{html, Callback, Component, Context, Html, NodeRef, Properties};

/// Delay before the class is toggled, so a freshly rendered sheet animates.
const TOGGLE_DELAY_MS: u32 = 50;

pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    pub title: String,
    pub on_close: Callback<MouseEvent>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:12px;">
                    <strong>{ props.title.clone() }</strong>
                    <button class="icon-btn" onclick={props.on_close.clone()}>
                        <i class="material-icons">{"close"}</i>
                    </button>
                </div>
                { props.children.clone() }
            </div>
        }
    }
}

fn toggle_show(top_sheet_ref: NodeRef, show: bool) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        Timeout::new(TOGGLE_DELAY_MS, move || {
            let classes = top_sheet.class_list();
            let _ = if show {
                classes.add_1("show")
            } else {
                classes.remove_1("show")
            };
        })
        .forget();
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    toggle_show(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    toggle_show(top_sheet_ref, false);
}
