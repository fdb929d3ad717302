use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::error::ServiceError;
use crate::repository::TemplateRepository;

/// Actix web handler for `DELETE /api/templates/{template_id}`.
///
/// Answers `204 No Content` whether or not the template existed.
pub async fn process(
    repository: web::Data<TemplateRepository>,
    template_id: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let id = template_id.into_inner();
    if web::block(move || repository.delete(id)).await?? {
        info!("Deleted template {}", id);
    } else {
        debug!("Delete of unknown template {}", id);
    }
    Ok(HttpResponse::NoContent().finish())
}
