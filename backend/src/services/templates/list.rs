use actix_web::{web, HttpResponse};

use crate::error::ServiceError;
use crate::repository::TemplateRepository;

/// Actix web handler for `GET /api/templates`.
///
/// Returns every template, least recently updated first.
pub async fn process(
    repository: web::Data<TemplateRepository>,
) -> Result<HttpResponse, ServiceError> {
    let templates = web::block(move || repository.list()).await??;
    Ok(HttpResponse::Ok().json(templates))
}
