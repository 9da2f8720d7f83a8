//! The remote collaborator boundary: five CRUD calls over HTTP.
//!
//! # Design
//! `RemoteTodoService` is the seam the store is tested through — unit tests
//! substitute a mockall mock, the end-to-end test uses the real
//! `UreqTodoService` against the mock server. The ureq agent is built with
//! `http_status_as_error(false)` so 4xx/5xx answers come back as data for
//! `TodoApi` to interpret rather than as transport errors.

use uuid::Uuid;

use crate::client::TodoApi;
use crate::error::ServiceError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, TodoItem, UpdateTodo};

/// The five REST calls the store needs from the remote todo service.
#[cfg_attr(test, mockall::automock)]
pub trait RemoteTodoService {
    fn list(&self) -> Result<Vec<TodoItem>, ServiceError>;
    fn get(&self, id: Uuid) -> Result<TodoItem, ServiceError>;
    fn create(&self, input: &NewTodo) -> Result<TodoItem, ServiceError>;
    fn update(&self, id: Uuid, input: &UpdateTodo) -> Result<TodoItem, ServiceError>;
    fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
}

/// Blocking HTTP implementation of `RemoteTodoService` backed by ureq.
#[derive(Debug)]
pub struct UreqTodoService {
    api: TodoApi,
    agent: ureq::Agent,
}

impl UreqTodoService {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            api: TodoApi::new(base_url),
            agent,
        }
    }

    /// Execute a built request and capture status plus body as plain data.
    /// Headers are taken from the built request, not reinvented here, so
    /// what `TodoApi` puts on the wire description is what goes out.
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ServiceError> {
        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = req;

        let result = match (method, body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&path), &headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(&path), &headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&path), &headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(&path), &headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(&path), &headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_headers(self.agent.put(&path), &headers).send_empty(),
        };

        let mut response = result.map_err(|e| ServiceError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl RemoteTodoService for UreqTodoService {
    fn list(&self) -> Result<Vec<TodoItem>, ServiceError> {
        let resp = self.execute(self.api.build_list())?;
        self.api.parse_list(resp)
    }

    fn get(&self, id: Uuid) -> Result<TodoItem, ServiceError> {
        let resp = self.execute(self.api.build_get(id))?;
        self.api.parse_get(resp)
    }

    fn create(&self, input: &NewTodo) -> Result<TodoItem, ServiceError> {
        let resp = self.execute(self.api.build_create(input)?)?;
        self.api.parse_create(resp)
    }

    fn update(&self, id: Uuid, input: &UpdateTodo) -> Result<TodoItem, ServiceError> {
        let resp = self.execute(self.api.build_update(id, input)?)?;
        self.api.parse_update(resp)
    }

    fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let resp = self.execute(self.api.build_delete(id))?;
        self.api.parse_delete(resp)
    }
}
