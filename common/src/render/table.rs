use serde_json::Value;

use super::visual::{TableHeader, TableVisual};
use super::RenderMode;
use crate::binding::resolve;
use crate::format::{format_currency, value_to_text};
use crate::model::layout::{ColumnFormat, TableColumn, TableConfig};
use crate::model::style::ElementStyle;

/// Rows drawn in edit mode so the author can see the column layout.
const EDIT_ROWS: usize = 3;

pub(super) fn render(
    config: &TableConfig,
    style: &ElementStyle,
    mode: RenderMode,
    data: &Value,
) -> TableVisual {
    let rows = match mode {
        RenderMode::Edit => (0..EDIT_ROWS)
            .map(|_| {
                config
                    .columns
                    .iter()
                    .map(|col| format!("{{{}}}", col.binding))
                    .collect()
            })
            .collect(),
        RenderMode::Preview => match resolve(data, &config.data_source) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|row| config.columns.iter().map(|col| cell(col, row)).collect())
                .collect(),
            _ => Vec::new(),
        },
    };

    TableVisual {
        variant: style.table_variant.unwrap_or_default(),
        columns: config
            .columns
            .iter()
            .map(|col| TableHeader {
                header: col.header.clone(),
                width: col.width.clone(),
            })
            .collect(),
        rows,
    }
}

fn cell(column: &TableColumn, row: &Value) -> String {
    let value = resolve(row, &column.binding);
    match column.format.unwrap_or_default() {
        ColumnFormat::Currency => format_currency(value.unwrap_or(&Value::Null)),
        ColumnFormat::Text | ColumnFormat::Number => value.map(value_to_text).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::style::TableVariant;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn config() -> TableConfig {
        TableConfig {
            data_source: "invoice.items".into(),
            columns: vec![
                TableColumn::new("Description", "description", "50%"),
                TableColumn::new("Qty", "quantity", "15%"),
                TableColumn::new("Price", "price", "35%").currency(),
            ],
        }
    }

    #[test]
    fn edit_mode_shows_binding_tokens() {
        let table = render(&config(), &ElementStyle::default(), RenderMode::Edit, &Value::Null);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[2], vec!["{description}", "{quantity}", "{price}"]);
        assert_eq!(table.columns[2].header, "Price");
        assert_eq!(table.columns[2].width.as_deref(), Some("35%"));
        assert_eq!(table.variant, TableVariant::Default);
    }

    #[test]
    fn preview_formats_each_row() {
        let data = json!({
            "invoice": {
                "items": [
                    { "description": "Web Development", "quantity": 1, "price": 1500 },
                    { "description": "Support", "price": "n/a" }
                ]
            }
        });
        let style = ElementStyle {
            table_variant: Some(TableVariant::Modern),
            ..ElementStyle::default()
        };
        let table = render(&config(), &style, RenderMode::Preview, &data);
        assert_eq!(table.variant, TableVariant::Modern);
        assert_eq!(
            table.rows,
            vec![
                vec!["Web Development", "1", "$1,500.00"],
                vec!["Support", "", "$0.00"],
            ]
        );
    }

    #[test]
    fn non_array_data_source_has_no_rows() {
        for data in [json!({}), json!({ "invoice": { "items": "nope" } })] {
            let table = render(&config(), &ElementStyle::default(), RenderMode::Preview, &data);
            assert!(table.rows.is_empty());
            assert_eq!(table.columns.len(), 3);
        }
    }
}
