use actix_web::{web, HttpResponse};
use common::requests::UpdateTemplateRequest;
use log::info;
use serde_json::Value;

use crate::error::ServiceError;
use crate::repository::TemplateRepository;

/// Actix web handler for `PUT /api/templates/{template_id}`.
///
/// Fields absent from the body keep their stored value; `"description": null`
/// clears the description. Validation runs before the id is looked up.
pub async fn process(
    repository: web::Data<TemplateRepository>,
    template_id: web::Path<i64>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ServiceError> {
    let id = template_id.into_inner();
    let patch = UpdateTemplateRequest::from_json(&body)?;
    let template = web::block(move || repository.update(id, &patch))
        .await??
        .ok_or(ServiceError::TemplateNotFound)?;
    info!("Updated template {}", template.id);
    Ok(HttpResponse::Ok().json(template))
}
