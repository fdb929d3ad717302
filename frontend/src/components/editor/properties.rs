//! Right-hand properties panel for the selected element.
//!
//! Every input emits a single [`ElementEdit`]; the layout applies it to the
//! selected element.

use common::format::format_number;
use common::model::{
    ColumnFormat, ElementEdit, ElementType, LineOrientation, TableColumn, TableVariant,
    TemplateElement, TextAlign,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::EditorComponent;

pub fn properties_panel(component: &EditorComponent, link: &Scope<EditorComponent>) -> Html {
    let Some(element) = component.selected_element() else {
        return html! {
            <aside class="sidebar right">
                <p class="muted">{"Select an element to edit its properties."}</p>
            </aside>
        };
    };

    html! {
        <aside class="sidebar right">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <strong style="text-transform:capitalize;">{ element.element_type.as_str() }</strong>
                <button class="danger" onclick={link.callback(|_| Msg::DeleteSelected)}>{"Delete"}</button>
            </div>
            <div class="field-row" style="margin-top:12px;">
                { number_field(link, "X", element.x, ElementEdit::X) }
                { number_field(link, "Y", element.y, ElementEdit::Y) }
                { number_field(link, "Width", element.width, ElementEdit::Width) }
                { number_field(link, "Height", element.height, ElementEdit::Height) }
            </div>
            { type_fields(element, link) }
        </aside>
    }
}

fn type_fields(element: &TemplateElement, link: &Scope<EditorComponent>) -> Html {
    let content = element.content.clone().unwrap_or_default();
    let style = &element.style;

    match element.element_type {
        ElementType::Text => html! {
            <>
                { textarea_field(link, "Content", &content, ElementEdit::Content) }
                { binding_field(element, link) }
                <div class="field-row">
                    { number_field(link, "Font size", style.font_size.unwrap_or(14.0), ElementEdit::FontSize) }
                    { align_field(link, style.text_align.unwrap_or_default()) }
                </div>
                { text_field(link, "Color", style.color.as_deref().unwrap_or(""), "#000000", ElementEdit::Color) }
            </>
        },
        ElementType::Image | ElementType::Signature => {
            text_field(link, "Image URL", &content, "https://...", ElementEdit::Content)
        }
        ElementType::Qr => html! {
            <>
                { text_field(link, "QR data", &content, "https://example.com", ElementEdit::Content) }
                { binding_field(element, link) }
            </>
        },
        ElementType::Badge => html! {
            <>
                { text_field(link, "Label", &content, "PAID", ElementEdit::Content) }
                { binding_field(element, link) }
                { text_field(link, "Background", style.background_color.as_deref().unwrap_or(""), "#3b82f6", ElementEdit::BackgroundColor) }
                { text_field(link, "Text color", style.color.as_deref().unwrap_or(""), "#ffffff", ElementEdit::Color) }
            </>
        },
        ElementType::Box => html! {
            <>
                { text_field(link, "Background", style.background_color.as_deref().unwrap_or(""), "transparent", ElementEdit::BackgroundColor) }
                { text_field(link, "Border", style.border.as_deref().unwrap_or(""), "1px solid #000", ElementEdit::Border) }
            </>
        },
        ElementType::Line => html! {
            <>
                { orientation_field(link, element.orientation.unwrap_or_default()) }
                { text_field(link, "Color", style.background_color.as_deref().unwrap_or(""), "#000000", ElementEdit::BackgroundColor) }
            </>
        },
        ElementType::Table => table_fields(element, link),
    }
}

/// Hint for the binding input, for the types whose renderer resolves one.
fn binding_hint(element_type: ElementType) -> Option<&'static str> {
    match element_type {
        ElementType::Text => Some("e.g. client.name"),
        ElementType::Qr => Some("e.g. payment.link"),
        ElementType::Badge => Some("e.g. status"),
        _ => None,
    }
}

fn binding_field(element: &TemplateElement, link: &Scope<EditorComponent>) -> Html {
    match binding_hint(element.element_type) {
        Some(hint) => {
            let binding = element.binding.as_deref().unwrap_or("");
            text_field(link, "Binding", binding, hint, ElementEdit::Binding)
        }
        None => html! {},
    }
}

fn table_fields(element: &TemplateElement, link: &Scope<EditorComponent>) -> Html {
    let Some(config) = element.table_config.as_ref() else {
        return html! { <p class="invalid">{"Invalid Table Config"}</p> };
    };
    let variant = element.style.table_variant.unwrap_or_default();
    let variants = [TableVariant::Default, TableVariant::Minimal, TableVariant::Modern];
    let on_variant = link.callback(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        let variant = match value.as_str() {
            "minimal" => TableVariant::Minimal,
            "modern" => TableVariant::Modern,
            _ => TableVariant::Default,
        };
        Msg::Edit(ElementEdit::TableVariant(variant))
    });

    html! {
        <>
            { text_field(link, "Data source", &config.data_source, "items", ElementEdit::DataSource) }
            <label class="field">
                {"Style"}
                <select onchange={on_variant}>
                    { for variants.iter().map(|v| html! {
                        <option value={v.as_str()} selected={*v == variant}>{ v.as_str() }</option>
                    }) }
                </select>
            </label>
            <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:8px;">
                <strong>{"Columns"}</strong>
                <button class="icon-btn" onclick={link.callback(|_| Msg::Edit(ElementEdit::AddColumn))}>
                    {"+ Add"}
                </button>
            </div>
            { for config.columns.iter().enumerate().map(|(index, column)| column_card(link, index, column)) }
        </>
    }
}

fn column_card(link: &Scope<EditorComponent>, index: usize, column: &TableColumn) -> Html {
    let format = column.format.unwrap_or_default();
    let formats = [ColumnFormat::Text, ColumnFormat::Number, ColumnFormat::Currency];
    let on_format = link.batch_callback(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        ColumnFormat::parse(&value).map(|f| Msg::Edit(ElementEdit::ColumnFormat(index, f)))
    });

    html! {
        <div class="column-card" key={index}>
            <div class="field-row">
                { text_field(link, "Header", &column.header, "", move |v| ElementEdit::ColumnHeader(index, v)) }
                { text_field(link, "Key", &column.binding, "", move |v| ElementEdit::ColumnBinding(index, v)) }
                { text_field(link, "Width", column.width.as_deref().unwrap_or(""), "auto", move |v| ElementEdit::ColumnWidth(index, v)) }
                <label class="field">
                    {"Format"}
                    <select onchange={on_format}>
                        { for formats.iter().map(|f| html! {
                            <option value={f.as_str()} selected={*f == format}>{ f.as_str() }</option>
                        }) }
                    </select>
                </label>
            </div>
            <button class="danger" onclick={link.callback(move |_| Msg::Edit(ElementEdit::RemoveColumn(index)))}>
                {"Remove"}
            </button>
        </div>
    }
}

fn number_field(
    link: &Scope<EditorComponent>,
    label: &str,
    value: f64,
    edit: fn(f64) -> ElementEdit,
) -> Html {
    let oninput = link.batch_callback(move |e: InputEvent| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        input
            .value()
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| Msg::Edit(edit(v)))
    });
    html! {
        <label class="field">
            { label.to_string() }
            <input type="number" value={format_number(value)} {oninput} />
        </label>
    }
}

fn text_field<F>(
    link: &Scope<EditorComponent>,
    label: &str,
    value: &str,
    placeholder: &str,
    edit: F,
) -> Html
where
    F: Fn(String) -> ElementEdit + 'static,
{
    let oninput = link.callback(move |e: InputEvent| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        Msg::Edit(edit(input.value()))
    });
    html! {
        <label class="field">
            { label.to_string() }
            <input type="text" value={value.to_string()} placeholder={placeholder.to_string()} {oninput} />
        </label>
    }
}

fn textarea_field(
    link: &Scope<EditorComponent>,
    label: &str,
    value: &str,
    edit: fn(String) -> ElementEdit,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let textarea = e.target_unchecked_into::<HtmlTextAreaElement>();
        Msg::Edit(edit(textarea.value()))
    });
    html! {
        <label class="field">
            { label.to_string() }
            <textarea rows="4" value={value.to_string()} {oninput}></textarea>
        </label>
    }
}

fn align_field(link: &Scope<EditorComponent>, current: TextAlign) -> Html {
    let aligns = [TextAlign::Left, TextAlign::Center, TextAlign::Right, TextAlign::Justify];
    let onchange = link.callback(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        let align = match value.as_str() {
            "center" => TextAlign::Center,
            "right" => TextAlign::Right,
            "justify" => TextAlign::Justify,
            _ => TextAlign::Left,
        };
        Msg::Edit(ElementEdit::TextAlign(align))
    });
    html! {
        <label class="field">
            {"Align"}
            <select {onchange}>
                { for aligns.iter().map(|a| html! {
                    <option value={a.as_css()} selected={*a == current}>{ a.as_css() }</option>
                }) }
            </select>
        </label>
    }
}

fn orientation_field(link: &Scope<EditorComponent>, current: LineOrientation) -> Html {
    let onchange = link.callback(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        let orientation = if value == "vertical" {
            LineOrientation::Vertical
        } else {
            LineOrientation::Horizontal
        };
        Msg::Edit(ElementEdit::Orientation(orientation))
    });
    html! {
        <label class="field">
            {"Orientation"}
            <select {onchange}>
                <option value="horizontal" selected={current == LineOrientation::Horizontal}>{"horizontal"}</option>
                <option value="vertical" selected={current == LineOrientation::Vertical}>{"vertical"}</option>
            </select>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_bound_types_offer_a_binding_input() {
        let bound: Vec<_> = ElementType::ALL
            .into_iter()
            .filter(|t| binding_hint(*t).is_some())
            .collect();
        assert_eq!(bound, vec![ElementType::Text, ElementType::Qr, ElementType::Badge]);
    }
}
