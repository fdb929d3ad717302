//! Built-in content: text block presets, the layout given to new templates and
//! the demo template seeded into an empty database.

use serde_json::{json, Value};

use crate::model::layout::{
    ElementType, Orientation, PageSize, TableColumn, TableConfig, TemplateElement, TemplateLayout,
};
use crate::model::style::{ElementStyle, TextAlign};
use crate::requests::CreateTemplateRequest;

/// A pre-styled text block offered in the editor's presets panel.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Element template; id and position are replaced on insertion.
    pub element: TemplateElement,
}

fn text_block(width: f64, height: f64, content: &str, style: ElementStyle) -> TemplateElement {
    TemplateElement {
        id: String::new(),
        element_type: ElementType::Text,
        x: 0.0,
        y: 0.0,
        width,
        height,
        content: Some(content.to_string()),
        binding: None,
        orientation: None,
        table_config: None,
        style,
    }
}

fn preset(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    element: TemplateElement,
) -> TextPreset {
    TextPreset {
        id,
        name,
        description,
        element,
    }
}

fn font(size: f64, color: &str) -> ElementStyle {
    ElementStyle {
        font_size: Some(size),
        color: Some(color.to_string()),
        ..ElementStyle::default()
    }
}

fn weighted(size: f64, weight: &str, color: &str) -> ElementStyle {
    ElementStyle {
        font_weight: Some(weight.to_string()),
        ..font(size, color)
    }
}

pub fn text_presets() -> Vec<TextPreset> {
    let mut date = text_block(200.0, 25.0, "Date: {{date}}", font(12.0, "#6b7280"));
    date.binding = Some("date".to_string());

    vec![
        preset(
            "address-block",
            "Address Block",
            "Multi-line address with proper spacing",
            text_block(
                250.0,
                80.0,
                "Company Name\n123 Street Address\nCity, State ZIP\nCountry",
                ElementStyle {
                    line_height: Some(1.5),
                    ..font(12.0, "#333333")
                },
            ),
        ),
        preset(
            "supplier-name",
            "Supplier Name",
            "Large bold supplier/company name",
            text_block(300.0, 50.0, "Supplier Name", weighted(24.0, "bold", "#1a1a1a")),
        ),
        preset(
            "client-name",
            "Client Name",
            "Client or customer name heading",
            text_block(250.0, 40.0, "Client Name", weighted(18.0, "600", "#2c3e50")),
        ),
        preset(
            "invoice-title",
            "Invoice Title",
            "Large prominent invoice header",
            text_block(
                200.0,
                50.0,
                "INVOICE",
                ElementStyle {
                    text_transform: Some("uppercase".to_string()),
                    letter_spacing: Some(2.0),
                    ..weighted(32.0, "bold", "#2563eb")
                },
            ),
        ),
        preset(
            "invoice-number",
            "Invoice Number",
            "Invoice number with label",
            text_block(200.0, 30.0, "Invoice #: INV-001", weighted(14.0, "500", "#4b5563")),
        ),
        preset("date-label", "Date Field", "Date with label", date),
        preset(
            "section-heading",
            "Section Heading",
            "Bold section heading with underline",
            text_block(
                200.0,
                30.0,
                "Section Heading",
                ElementStyle {
                    border_bottom: Some("2px solid #d1d5db".to_string()),
                    padding_bottom: Some(5.0),
                    ..weighted(16.0, "bold", "#1f2937")
                },
            ),
        ),
        preset(
            "total-amount",
            "Total Amount",
            "Large total amount display",
            text_block(
                200.0,
                40.0,
                "$0.00",
                ElementStyle {
                    text_align: Some(TextAlign::Right),
                    ..weighted(24.0, "bold", "#059669")
                },
            ),
        ),
        preset(
            "label-value",
            "Label & Value",
            "Label with value (e.g., Status: Paid)",
            text_block(200.0, 25.0, "Label: Value", font(13.0, "#374151")),
        ),
        preset(
            "footer-text",
            "Footer Text",
            "Small footer or disclaimer text",
            text_block(
                400.0,
                40.0,
                "Thank you for your business",
                ElementStyle {
                    text_align: Some(TextAlign::Center),
                    font_style: Some("italic".to_string()),
                    ..font(11.0, "#9ca3af")
                },
            ),
        ),
        preset(
            "contact-info",
            "Contact Info",
            "Contact details block",
            text_block(
                250.0,
                60.0,
                "Email: contact@company.com\nPhone: +1 234 567 8900\nWebsite: www.company.com",
                ElementStyle {
                    line_height: Some(1.6),
                    ..font(11.0, "#6b7280")
                },
            ),
        ),
        preset(
            "marine-vessel",
            "Vessel Name",
            "Ship or vessel name (marine themed)",
            text_block(
                300.0,
                45.0,
                "M/V Ocean Voyager",
                ElementStyle {
                    font_family: Some("serif".to_string()),
                    ..weighted(20.0, "600", "#0369a1")
                },
            ),
        ),
        preset(
            "marine-port",
            "Port Information",
            "Port of call details",
            text_block(
                250.0,
                50.0,
                "Port: Miami, FL\nDeparture: {{departureDate}}",
                ElementStyle {
                    line_height: Some(1.5),
                    ..font(13.0, "#475569")
                },
            ),
        ),
        preset(
            "cabin-number",
            "Cabin Number",
            "Cabin or suite number",
            text_block(200.0, 35.0, "Cabin: A-101", weighted(15.0, "600", "#0c4a6e")),
        ),
    ]
}

/// Layout of a template created from the template list.
pub fn default_layout() -> TemplateLayout {
    let mut title = text_block(300.0, 50.0, "INVOICE", weighted(32.0, "bold", "#1a1a1a"));
    title.id = "title".to_string();
    title.x = 40.0;
    title.y = 40.0;

    TemplateLayout {
        page_size: PageSize::A4,
        orientation: Orientation::Portrait,
        elements: vec![title],
    }
}

pub fn default_sample_data() -> Value {
    json!({
        "invoiceNumber": "INV-001",
        "date": "2024-05-20",
        "client": {
            "name": "Acme Corp",
            "address": "123 Business Rd, Tech City"
        },
        "items": [
            { "description": "Web Development", "quantity": 1, "price": 1500 },
            { "description": "Hosting (Yearly)", "quantity": 1, "price": 200 }
        ],
        "total": 1700
    })
}

/// Request body sent when the user creates a new template.
pub fn new_template_request() -> CreateTemplateRequest {
    CreateTemplateRequest {
        name: "New Invoice Template".to_string(),
        description: Some("Created from dashboard".to_string()),
        layout: default_layout(),
        sample_data: default_sample_data(),
    }
}

fn positioned(mut element: TemplateElement, id: &str, x: f64, y: f64) -> TemplateElement {
    element.id = id.to_string();
    element.x = x;
    element.y = y;
    element
}

/// The demo template inserted into an empty repository.
pub fn seed_template() -> CreateTemplateRequest {
    let title = positioned(
        text_block(
            200.0,
            40.0,
            "INVOICE",
            ElementStyle {
                font_size: Some(24.0),
                font_weight: Some("bold".to_string()),
                ..ElementStyle::default()
            },
        ),
        "el_1",
        20.0,
        20.0,
    );

    let mut provider = positioned(text_block(200.0, 60.0, "", font_only(14.0)), "el_2", 20.0, 70.0);
    provider.content = None;
    provider.binding = Some("provider.name".to_string());

    let mut client = positioned(
        text_block(
            200.0,
            60.0,
            "",
            ElementStyle {
                text_align: Some(TextAlign::Right),
                ..font_only(14.0)
            },
        ),
        "el_3",
        350.0,
        70.0,
    );
    client.content = None;
    client.binding = Some("client.name".to_string());

    let table = TemplateElement {
        id: "el_table".to_string(),
        element_type: ElementType::Table,
        x: 20.0,
        y: 150.0,
        width: 550.0,
        height: 300.0,
        content: None,
        binding: None,
        orientation: None,
        table_config: Some(TableConfig {
            data_source: "items".to_string(),
            columns: vec![
                TableColumn::new("Description", "description", "50%"),
                TableColumn::new("Qty", "quantity", "15%"),
                TableColumn::new("Price", "price", "15%").currency(),
                TableColumn::new("Total", "total", "20%").currency(),
            ],
        }),
        style: ElementStyle::default(),
    };

    CreateTemplateRequest {
        name: "Standard Invoice".to_string(),
        description: Some("A clean, standard invoice layout.".to_string()),
        layout: TemplateLayout {
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            elements: vec![title, provider, client, table],
        },
        sample_data: json!({
            "invoiceNumber": "INV-2023-001",
            "date": "2023-10-25",
            "provider": {
                "name": "Acme Corp",
                "address": "123 Business Rd, Tech City",
                "email": "contact@acme.com"
            },
            "client": {
                "name": "John Doe",
                "address": "456 Customer Ln, Buyer Town"
            },
            "items": [
                { "description": "Web Development", "quantity": 10, "price": 50, "total": 500 },
                { "description": "Hosting Setup", "quantity": 1, "price": 100, "total": 100 },
                { "description": "Domain Registration", "quantity": 1, "price": 15, "total": 15 }
            ],
            "subtotal": 615,
            "tax": 61.5,
            "total": 676.5
        }),
    }
}

fn font_only(size: f64) -> ElementStyle {
    ElementStyle {
        font_size: Some(size),
        ..ElementStyle::default()
    }
}
