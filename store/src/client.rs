//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoApi` holds only a `base_url` and carries no mutable state between
//! calls. Each of the five REST operations is split into a `build_*` method
//! that produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`, keeping the wire format free of I/O dependencies.
//!
//! Any 2xx answer counts as success; any other status becomes
//! `ServiceError::Http` with the raw status and body kept for diagnostics.
//! The store does not branch on status codes — "not found" is a local
//! collection concept, not a transport one.

use uuid::Uuid;

use crate::error::ServiceError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, TodoItem, UpdateTodo};

/// Stateless builder/parser for the five todo REST calls.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos", self.base_url),
            headers: json_headers(),
            body: None,
        }
    }

    pub fn build_get(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos/{id}", self.base_url),
            headers: json_headers(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &NewTodo) -> Result<HttpRequest, ServiceError> {
        let body =
            serde_json::to_string(input).map_err(|e| ServiceError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update(&self, id: Uuid, input: &UpdateTodo) -> Result<HttpRequest, ServiceError> {
        let body =
            serde_json::to_string(input).map_err(|e| ServiceError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/todos/{id}", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.base_url),
            headers: json_headers(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ServiceError> {
        parse_json(response)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<TodoItem, ServiceError> {
        parse_json(response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<TodoItem, ServiceError> {
        parse_json(response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<TodoItem, ServiceError> {
        parse_json(response)
    }

    /// Deletion needs no body; a 2xx status is the whole confirmation.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ServiceError> {
        check_success(&response)
    }
}

/// Every request carries `content-type: application/json`, body or not —
/// the service speaks JSON on both directions of all five calls.
fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn check_success(response: &HttpResponse) -> Result<(), ServiceError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ServiceError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(response: HttpResponse) -> Result<T, ServiceError> {
    check_success(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ServiceError::Deserialization(e.to_string()))
}
