//! # Template Service Module
//!
//! This module aggregates all API endpoints related to the management of
//! invoice templates. It acts as a router, directing incoming HTTP requests
//! under the `/api/templates` path to the handler defined in each sub-module.
//!
//! ## Sub-modules:
//! - `list`: Returns every stored template.
//! - `get`: Returns one template by id.
//! - `create`: Validates a new template and stores it.
//! - `update`: Applies a partial update to an existing template.
//! - `delete`: Removes a template; deleting an unknown id is not an error.
//! - `preview`: Renders a template against its own sample data.
//!
//! Every handler receives the shared [`TemplateRepository`](crate::repository::TemplateRepository)
//! as `web::Data` and runs its blocking SQLite work through `web::block`.

mod create;
mod delete;
mod get;
mod list;
mod preview;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for all template-related routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: `list::process`, `200` with an array of templates.
/// *   **`POST /`**: `create::process`, `201` with the stored template, or `400`
///     naming the first invalid field.
/// *   **`GET /{template_id}`**: `get::process`, `200` or `404`.
/// *   **`PUT /{template_id}`**: `update::process`, `200`, `400` or `404`.
/// *   **`DELETE /{template_id}`**: `delete::process`, always `204`.
/// *   **`GET /{template_id}/preview`**: `preview::process`, `200` with the
///     rendered elements, or `404`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{template_id}", get().to(get::process))
        .route("/{template_id}", put().to(update::process))
        .route("/{template_id}", delete().to(delete::process))
        .route("/{template_id}/preview", get().to(preview::process))
}

#[cfg(test)]
mod tests {
    use crate::repository::TemplateRepository;
    use actix_web::http::header::ContentType;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::Template;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn repository() -> web::Data<TemplateRepository> {
        web::Data::new(TemplateRepository::open_in_memory().unwrap())
    }

    fn body() -> Value {
        json!({
            "name": "Invoice",
            "description": "Monthly",
            "layout": { "pageSize": "A4", "orientation": "portrait", "elements": [] },
            "sampleData": { "total": 3 }
        })
    }

    #[actix_web::test]
    async fn create_without_name_names_the_field() {
        let app = test::init_service(
            App::new()
                .app_data(repository())
                .configure(crate::services::configure),
        )
        .await;

        let mut payload = body();
        payload.as_object_mut().unwrap().remove("name");
        let req = test::TestRequest::post()
            .uri("/api/templates")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error, json!({ "message": "Required", "field": "name" }));
    }

    #[actix_web::test]
    async fn malformed_json_is_a_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(repository())
                .configure(crate::services::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/templates")
            .insert_header(ContentType::json())
            .set_payload("{ \"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error["field"], Value::Null);
    }

    #[actix_web::test]
    async fn crud_lifecycle() {
        let app = test::init_service(
            App::new()
                .app_data(repository())
                .configure(crate::services::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/templates")
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Template = test::read_body_json(resp).await;
        assert_eq!(created.name, "Invoice");

        let req = test::TestRequest::put()
            .uri(&format!("/api/templates/{}", created.id))
            .set_json(json!({ "name": "Renamed", "description": null }))
            .to_request();
        let updated: Template = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.description, None);
        assert_eq!(updated.sample_data, json!({ "total": 3 }));

        let req = test::TestRequest::get().uri("/api/templates").to_request();
        let listed: Vec<Template> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![updated.clone()]);

        let req = test::TestRequest::get()
            .uri(&format!("/api/templates/{}", created.id))
            .to_request();
        let fetched: Template = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, updated);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/templates/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&format!("/api/templates/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn deleting_unknown_template_is_no_content() {
        let app = test::init_service(
            App::new()
                .app_data(repository())
                .configure(crate::services::configure),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/templates/9999")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn unknown_or_malformed_ids_are_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(repository())
                .configure(crate::services::configure),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/templates/9999")
            .set_json(json!({ "name": "Ghost" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error, json!({ "message": "Template not found" }));

        let req = test::TestRequest::get().uri("/api/templates/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_validates_before_lookup() {
        let app = test::init_service(
            App::new()
                .app_data(repository())
                .configure(crate::services::configure),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/templates/9999")
            .set_json(json!({ "layout": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error["field"], json!("layout"));
    }

    #[actix_web::test]
    async fn preview_renders_table_rows_from_sample_data() {
        let app = test::init_service(
            App::new()
                .app_data(repository())
                .configure(crate::services::configure),
        )
        .await;

        let payload = json!({
            "name": "Table",
            "layout": {
                "elements": [{
                    "id": "items", "type": "table",
                    "x": 20, "y": 150, "width": 550, "height": 300,
                    "tableConfig": {
                        "dataSource": "items",
                        "columns": [
                            { "header": "Description", "binding": "description" },
                            { "header": "Price", "binding": "price", "format": "currency" }
                        ]
                    }
                }]
            },
            "sampleData": { "items": [{ "description": "X", "price": 10 }] }
        });
        let req = test::TestRequest::post()
            .uri("/api/templates")
            .set_json(payload)
            .to_request();
        let created: Template = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/templates/{}/preview", created.id))
            .to_request();
        let rendered: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(rendered[0]["id"], json!("items"));
        assert_eq!(rendered[0]["visual"]["kind"], json!("table"));
        assert_eq!(rendered[0]["visual"]["rows"], json!([["X", "$10.00"]]));
    }
}
