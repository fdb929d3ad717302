use serde_json::Value;

use super::visual::ImageVisual;
use super::RenderMode;
use crate::binding::resolve_or;
use crate::format::value_to_text;
use crate::model::layout::{ElementType, TemplateElement};

const IMAGE_PLACEHOLDER: &str = "https://placehold.co/400?text=Image";
const SIGNATURE_PLACEHOLDER: &str = "https://placehold.co/200x100?text=Signature";
const QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=";
const DEFAULT_QR_PAYLOAD: &str = "https://example.com";

/// Image, QR code and signature elements all draw as an `<img>`.
pub(super) fn render(element: &TemplateElement, mode: RenderMode, data: &Value) -> ImageVisual {
    let src = match element.element_type {
        ElementType::Qr => qr_code_url(&qr_payload(element, mode, data)),
        ElementType::Signature => SIGNATURE_PLACEHOLDER.to_string(),
        _ => element
            .content()
            .map(str::to_string)
            .unwrap_or_else(|| IMAGE_PLACEHOLDER.to_string()),
    };
    ImageVisual {
        src,
        alt: element.element_type.as_str().to_string(),
    }
}

fn qr_payload(element: &TemplateElement, mode: RenderMode, data: &Value) -> String {
    let content = element.content.clone().unwrap_or_default();
    match (mode, element.binding()) {
        (RenderMode::Preview, Some(binding)) => {
            value_to_text(&resolve_or(data, binding, Value::String(content)))
        }
        _ => content,
    }
}

fn qr_code_url(payload: &str) -> String {
    let payload = if payload.is_empty() {
        DEFAULT_QR_PAYLOAD
    } else {
        payload
    };
    format!("{}{}", QR_SERVICE, urlencoding::encode(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn element(element_type: ElementType, content: Option<&str>, binding: Option<&str>) -> TemplateElement {
        let mut element = TemplateElement::new(element_type);
        element.content = content.map(str::to_string);
        element.binding = binding.map(str::to_string);
        element
    }

    #[test]
    fn image_uses_content_or_placeholder() {
        let data = Value::Null;
        let el = element(ElementType::Image, Some("https://cdn.test/logo.png"), None);
        assert_eq!(render(&el, RenderMode::Edit, &data).src, "https://cdn.test/logo.png");
        let el = element(ElementType::Image, None, None);
        let visual = render(&el, RenderMode::Preview, &data);
        assert_eq!(visual.src, IMAGE_PLACEHOLDER);
        assert_eq!(visual.alt, "image");
    }

    #[test]
    fn qr_encodes_resolved_payload_in_preview() {
        let data = json!({ "payment": { "link": "https://pay.test/a b" } });
        let el = element(ElementType::Qr, Some("fallback"), Some("payment.link"));
        assert_eq!(
            render(&el, RenderMode::Preview, &data).src,
            "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=https%3A%2F%2Fpay.test%2Fa%20b"
        );
        assert_eq!(
            render(&el, RenderMode::Edit, &data).src,
            format!("{}fallback", QR_SERVICE)
        );
    }

    #[test]
    fn qr_falls_back_to_content_then_default() {
        let el = element(ElementType::Qr, Some("hello"), Some("missing"));
        assert_eq!(render(&el, RenderMode::Preview, &json!({})).src, format!("{}hello", QR_SERVICE));

        let el = element(ElementType::Qr, None, None);
        assert_eq!(
            render(&el, RenderMode::Edit, &Value::Null).src,
            format!("{}https%3A%2F%2Fexample.com", QR_SERVICE)
        );
    }

    #[test]
    fn signature_is_always_the_placeholder() {
        let el = element(ElementType::Signature, Some("https://cdn.test/sig.png"), None);
        assert_eq!(render(&el, RenderMode::Preview, &Value::Null).src, SIGNATURE_PLACEHOLDER);
    }
}
