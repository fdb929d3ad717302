//! The page canvas: positions every element and draws its rendered visual.
//!
//! In edit mode elements are selectable, draggable and resizable; pointer moves
//! are tracked on the canvas area so a drag survives leaving the element. In
//! preview mode the page is static.

use common::format::format_number;
use common::model::TemplateElement;
use common::render::{render_element, ShapeKind, TableVisual, Visual};
use web_sys::MouseEvent;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{DragKind, EditorComponent};

pub fn canvas(component: &EditorComponent, link: &Scope<EditorComponent>) -> Html {
    let (page_width, page_height) = component.layout.page_dimensions();
    let editing = !component.mode.is_preview();

    let page_style = format!(
        "width:{}px;height:{}px;transform:scale({});",
        format_number(page_width),
        format_number(page_height),
        component.scale
    );
    // The scaled page keeps its unscaled box; reserve the scaled height instead.
    let holder_style = format!("height:{}px;", format_number(page_height * component.scale));

    let on_mouse_move = link.batch_callback(|e: MouseEvent| {
        Some(Msg::DragTo {
            client_x: f64::from(e.client_x()),
            client_y: f64::from(e.client_y()),
        })
    });
    let on_mouse_up = link.callback(|_: MouseEvent| Msg::EndDrag);
    let on_mouse_down = link.callback(|_: MouseEvent| Msg::Select(None));

    html! {
        <div class="canvas-area"
            onmousemove={on_mouse_move}
            onmouseup={on_mouse_up.clone()}
            onmouseleave={on_mouse_up}
            onmousedown={on_mouse_down}>
            <div style={holder_style}>
                <div class={classes!("page", editing.then_some("editing"))} style={page_style}>
                    { for component.layout.elements.iter().map(|el| element_frame(component, el, link)) }
                </div>
            </div>
        </div>
    }
}

fn element_frame(
    component: &EditorComponent,
    element: &TemplateElement,
    link: &Scope<EditorComponent>,
) -> Html {
    let editing = !component.mode.is_preview();
    let selected = editing && component.selected.as_deref() == Some(element.id.as_str());
    let style = format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;",
        format_number(element.x),
        format_number(element.y),
        format_number(element.width),
        format_number(element.height)
    );
    let visual = render_element(element, component.mode, &component.sample_data);

    let on_mouse_down = drag_start(link, &element.id, DragKind::Move, editing);
    let resize_handle = if selected {
        let on_resize = drag_start(link, &element.id, DragKind::Resize, true);
        html! { <div class="resize-handle" onmousedown={on_resize}></div> }
    } else {
        html! {}
    };

    html! {
        <div key={element.id.clone()}
            class={classes!("element", editing.then_some("editable"), selected.then_some("selected"))}
            style={style}
            onmousedown={on_mouse_down}>
            <div class="element-content">{ visual_html(&visual) }</div>
            { resize_handle }
        </div>
    }
}

fn drag_start(
    link: &Scope<EditorComponent>,
    id: &str,
    kind: DragKind,
    enabled: bool,
) -> Callback<MouseEvent> {
    let id = id.to_string();
    link.batch_callback(move |e: MouseEvent| {
        if !enabled {
            return None;
        }
        e.stop_propagation();
        e.prevent_default();
        Some(Msg::StartDrag {
            id: id.clone(),
            kind,
            client_x: f64::from(e.client_x()),
            client_y: f64::from(e.client_y()),
        })
    })
}

fn visual_html(visual: &Visual) -> Html {
    match visual {
        Visual::Text(text) => html! {
            <div style={format!("white-space:pre-wrap;width:100%;height:100%;{}", text.style.css())}>
                { text.text.clone() }
            </div>
        },
        Visual::Image(image) => html! {
            <img src={image.src.clone()} alt={image.alt.clone()}
                style="width:100%;height:100%;object-fit:contain;" draggable="false" />
        },
        Visual::Shape(shape) => {
            let label = match (&shape.shape, &shape.label) {
                (ShapeKind::Badge, Some(label)) => html! { { label.clone() } },
                _ => html! {},
            };
            html! { <div class="shape" style={shape.css()}>{ label }</div> }
        }
        Visual::Table(table) => table_html(table),
        Visual::Invalid { message } => html! { <div class="invalid">{ message.clone() }</div> },
    }
}

fn table_html(table: &TableVisual) -> Html {
    html! {
        <table class={classes!("invoice-table", table.variant.as_str())}>
            <thead>
                <tr>
                    { for table.columns.iter().map(|column| html! {
                        <th style={column.width.as_ref().map(|w| format!("width:{};", w))}>
                            { column.header.clone() }
                        </th>
                    }) }
                </tr>
            </thead>
            <tbody>
                { for table.rows.iter().map(|row| html! {
                    <tr>{ for row.iter().map(|cell| html! { <td>{ cell.clone() }</td> }) }</tr>
                }) }
            </tbody>
        </table>
    }
}
