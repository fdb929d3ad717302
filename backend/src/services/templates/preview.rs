//! # Template Preview Service
//!
//! Backs `GET /api/templates/{template_id}/preview`: the stored layout is
//! rendered in preview mode against the template's own sample data, using the
//! same renderer the editor canvas uses. The response is the list of rendered
//! elements with their geometry, in stacking order.

use actix_web::{web, HttpResponse};
use common::render::{render_layout, RenderMode};

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
    let rendered = render_layout(&template.layout, RenderMode::Preview, &template.sample_data);
    Ok(HttpResponse::Ok().json(rendered))
}
