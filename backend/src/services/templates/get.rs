//! # Template Retrieval Service
//!
//! Backs `GET /api/templates/{template_id}`. The template is read through the
//! shared repository on the blocking pool and returned as JSON; an unknown id
//! yields `404 {"message": "Template not found"}`.

use actix_web::{web, HttpResponse};

use crate::error::ServiceError;
use crate::repository::TemplateRepository;

pub async fn process(
    repository: web::Data<TemplateRepository>,
    template_id: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let id = template_id.into_inner();
    let template = web::block(move || repository.get(id))
        .await??
        .ok_or(ServiceError::TemplateNotFound)?;
    Ok(HttpResponse::Ok().json(template))
}
