pub mod templates;

use actix_web::web;

use crate::error::{json_error_handler, path_error_handler};

/// Maximum accepted JSON body.
const JSON_LIMIT: usize = 10 * 1024 * 1024; // 10 MB

/// Registers the REST API and its extractor configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_LIMIT)
            .error_handler(json_error_handler),
    )
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .service(templates::configure_routes());
}
