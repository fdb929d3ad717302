//! Binding resolution against sample data.
//!
//! A binding is a dotted path such as `client.address` that addresses a value
//! inside the template's sample JSON document. Two operations live here:
//!
//! - [`resolve`] / [`resolve_or`]: walk a path through a JSON value.
//! - [`interpolate`]: replace every `{{path}}` token in a string with the value
//!   it resolves to, leaving unresolved tokens untouched.
//!
//! Neither operation fails. A missing key, a `null` on the way down or a
//! non-container value simply ends the walk.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use crate::format::value_to_text;

static BINDING_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("binding token pattern is valid"));

/// Looks up `path` inside `root`.
///
/// Returns `None` when the path leads nowhere (the JavaScript `undefined`).
/// A `null` found at the end of the path is returned as `Some(Value::Null)`;
/// a `null` in the middle stops the walk.
///
/// Numeric segments index arrays, so `items.0.price` works. There is no
/// bracket syntax and no way to escape a literal dot inside a key.
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for key in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(key)?,
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i))?,
            // null, or a scalar that has no properties to descend into
            _ => return None,
        };
    }
    Some(current)
}

/// Like [`resolve`], but substitutes `fallback` when the path leads nowhere.
pub fn resolve_or(root: &Value, path: &str, fallback: Value) -> Value {
    resolve(root, path).cloned().unwrap_or(fallback)
}

/// Replaces each `{{path}}` token in `template` with its resolved value.
///
/// The inner text is trimmed before lookup, so `{{ client.name }}` works.
/// Tokens that do not resolve are left exactly as written; a token that
/// resolves to `null` becomes the text `null`.
pub fn interpolate(template: &str, root: &Value) -> String {
    BINDING_TOKEN
        .replace_all(template, |caps: &Captures| {
            let path = caps[1].trim();
            match resolve(root, path) {
                Some(Value::Null) => "null".to_string(),
                Some(value) => value_to_text(value),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// The placeholder shown for a binding that has no value yet.
pub fn placeholder(binding: &str) -> String {
    format!("{{{{{}}}}}", binding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn invoice() -> Value {
        json!({
            "invoiceNumber": "INV-001",
            "client": { "name": "Acme Corp", "address": null },
            "items": [{ "description": "Hosting", "price": 200 }],
            "total": 1700,
            "paid": false
        })
    }

    #[test]
    fn resolves_nested_values_exactly() {
        let data = invoice();
        assert_eq!(resolve(&data, "client.name"), Some(&json!("Acme Corp")));
        assert_eq!(resolve(&data, "total"), Some(&json!(1700)));
        assert_eq!(resolve(&data, "paid"), Some(&json!(false)));
        assert_eq!(
            resolve(&data, "client"),
            Some(&json!({ "name": "Acme Corp", "address": null }))
        );
    }

    #[test]
    fn final_null_is_returned_as_null() {
        let data = invoice();
        assert_eq!(resolve(&data, "client.address"), Some(&Value::Null));
        assert_eq!(resolve_or(&data, "client.address", json!("n/a")), Value::Null);
    }

    #[test]
    fn null_intermediate_returns_fallback() {
        let data = invoice();
        assert_eq!(resolve(&data, "client.address.street"), None);
        assert_eq!(
            resolve_or(&data, "client.address.street", json!("unknown")),
            json!("unknown")
        );
        assert_eq!(resolve_or(&Value::Null, "anything", json!(0)), json!(0));
    }

    #[test]
    fn missing_keys_return_fallback() {
        let data = invoice();
        assert_eq!(resolve(&data, "provider.name"), None);
        assert_eq!(resolve_or(&data, "nope", json!([])), json!([]));
    }

    #[test]
    fn scalars_have_no_children() {
        let data = invoice();
        assert_eq!(resolve(&data, "invoiceNumber.length"), None);
        assert_eq!(resolve(&data, "total.value"), None);
    }

    #[test]
    fn numeric_segments_index_arrays() {
        let data = invoice();
        assert_eq!(resolve(&data, "items.0.description"), Some(&json!("Hosting")));
        assert_eq!(resolve(&data, "items.3.description"), None);
        assert_eq!(resolve(&data, "items.first"), None);
    }

    #[test]
    fn interpolation_without_tokens_is_identity() {
        let data = invoice();
        for text in ["", "Plain text", "{ not a token }", "{{unclosed", "}}{{"] {
            assert_eq!(interpolate(text, &data), text);
        }
    }

    #[test]
    fn interpolates_resolved_tokens() {
        let data = json!({ "name": "Ann" });
        assert_eq!(interpolate("Hello {{name}}", &data), "Hello Ann");
        assert_eq!(interpolate("Hello {{ name }}!", &data), "Hello Ann!");
    }

    #[test]
    fn unresolved_tokens_render_literally() {
        assert_eq!(interpolate("Hello {{name}}", &json!({})), "Hello {{name}}");
        assert_eq!(
            interpolate("{{ a.b }} and {{name}}", &json!({ "name": "Bo" })),
            "{{ a.b }} and Bo"
        );
    }

    #[test]
    fn interpolates_non_string_values() {
        let data = invoice();
        assert_eq!(
            interpolate("Total: {{total}} ({{paid}})", &data),
            "Total: 1700 (false)"
        );
        assert_eq!(interpolate("#{{items.0.price}}", &data), "#200");
    }

    #[test]
    fn null_values_interpolate_as_null_text() {
        let data = json!({ "note": null });
        assert_eq!(interpolate("Note: {{note}}", &data), "Note: null");
        assert_eq!(interpolate("{{note.text}}", &data), "{{note.text}}");
    }

    #[test]
    fn placeholder_wraps_binding_in_braces() {
        assert_eq!(placeholder("client.name"), "{{client.name}}");
    }
}
