//! # Service Errors
//!
//! Every handler returns `Result<HttpResponse, ServiceError>`. The error maps to
//! an HTTP status and a JSON body of the shape `{"message": ..., "field": ...}`:
//!
//! - `400` for bodies that fail validation (`field` names the offending field)
//!   or cannot be parsed at all (`field` is `null`).
//! - `404` when the template id is unknown or not an integer.
//! - `500` for storage failures. The cause is logged, the client only sees
//!   `Internal Server Error`.

use actix_web::error::{BlockingError, JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use common::requests::ValidationError;
use log::error;
use serde_json::json;
use thiserror::Error;

use crate::repository::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The body is not JSON, or not `application/json`, or too large.
    #[error("{0}")]
    MalformedBody(String),

    #[error("Template not found")]
    TemplateNotFound,

    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),

    #[error("blocking task failed: {0}")]
    Blocking(#[from] BlockingError),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) | ServiceError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ServiceError::TemplateNotFound => StatusCode::NOT_FOUND,
            ServiceError::Storage(_) | ServiceError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ServiceError::Validation(e) => json!({ "message": e.message, "field": e.field }),
            ServiceError::MalformedBody(message) => json!({ "message": message, "field": null }),
            ServiceError::TemplateNotFound => json!({ "message": self.to_string() }),
            ServiceError::Storage(_) | ServiceError::Blocking(_) => {
                error!("{}", self);
                json!({ "message": "Internal Server Error" })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Registered through `JsonConfig` so unparsable bodies get the JSON error shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServiceError::MalformedBody(err.to_string()).into()
}

/// Registered through `PathConfig`: an id that is not an integer names no template.
pub fn path_error_handler(_err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ServiceError::TemplateNotFound.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;

    async fn body_of(err: ServiceError) -> (StatusCode, Value) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn validation_names_the_field() {
        let (status, body) =
            body_of(ValidationError::new("name", "Required").into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Required", "field": "name" }));
    }

    #[actix_web::test]
    async fn malformed_body_has_null_field() {
        let (status, body) = body_of(ServiceError::MalformedBody("EOF".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], Value::Null);
    }

    #[actix_web::test]
    async fn storage_failures_hide_the_cause() {
        let (status, body) = body_of(StoreError::Poisoned.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Internal Server Error" }));
    }

    #[actix_web::test]
    async fn missing_template_is_404() {
        let (status, body) = body_of(ServiceError::TemplateNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Template not found" }));
    }
}
