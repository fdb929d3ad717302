use actix_web::{web, HttpResponse};
use common::requests::CreateTemplateRequest;
use log::info;
use serde_json::Value;

use crate::error::ServiceError;
use crate::repository::TemplateRepository;

/// Actix web handler for `POST /api/templates`.
///
/// The body is validated field by field before anything is written; the first
/// failure is returned as `400` with the offending field.
pub async fn process(
    repository: web::Data<TemplateRepository>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ServiceError> {
    let request = CreateTemplateRequest::from_json(&body)?;
    let template = web::block(move || repository.create(&request)).await??;
    info!("Created template {} '{}'", template.id, template.name);
    Ok(HttpResponse::Created().json(template))
}
