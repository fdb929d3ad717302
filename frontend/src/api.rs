//! REST client for the template API.
//!
//! Errors are returned as display strings ready for a toast: the server's
//! `message`, prefixed with the offending `field` when there is one.

use common::model::Template;
use common::requests::{CreateTemplateRequest, UpdateTemplateRequest};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

const API_PATH: &str = "/api/templates";

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    field: Option<String>,
}

fn template_url(id: i64) -> String {
    format!("{}/{}", API_PATH, id)
}

async fn error_message(response: &Response) -> String {
    match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            message,
            field: Some(field),
        }) if !field.is_empty() => format!("{}: {}", field, message),
        Ok(body) => body.message,
        Err(_) => format!("HTTP {}", response.status()),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.ok() {
        response.json::<T>().await.map_err(|e| e.to_string())
    } else {
        Err(error_message(&response).await)
    }
}

pub async fn list_templates() -> Result<Vec<Template>, String> {
    let response = Request::get(API_PATH)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

pub async fn get_template(id: i64) -> Result<Template, String> {
    let response = Request::get(&template_url(id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

pub async fn create_template(request: &CreateTemplateRequest) -> Result<Template, String> {
    let response = Request::post(API_PATH)
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

pub async fn update_template(id: i64, patch: &UpdateTemplateRequest) -> Result<Template, String> {
    let response = Request::put(&template_url(id))
        .json(patch)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    decode(response).await
}

pub async fn delete_template(id: i64) -> Result<(), String> {
    let response = Request::delete(&template_url(id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_message(&response).await)
    }
}
