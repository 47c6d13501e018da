//! Todo API client scoped to a single owning user.
//!
//! # Design
//! `TodoClient` holds only its transport and the fixed `user_id`; it carries
//! no mutable state between calls. Each CRUD operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. The async operations chain the two
//! around exactly one `Transport::send`, and return transport errors as-is.

use tracing::debug;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Deleted, NewTodo, Todo, TodoId, TodoPatch, TodoUpdate, UserId, DEFAULT_USER_ID};

const JSON_HEADER: (&str, &str) = ("content-type", "application/json");

/// Stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient<T> {
    transport: T,
    user_id: UserId,
}

impl<T> TodoClient<T> {
    /// Client owned by `DEFAULT_USER_ID`.
    pub fn new(transport: T) -> Self {
        Self::with_user_id(transport, DEFAULT_USER_ID)
    }

    pub fn with_user_id(transport: T, user_id: UserId) -> Self {
        Self { transport, user_id }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("/todos?userId={}", self.user_id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The title is forwarded as given, empty or not.
    pub fn build_create_todo(&self, title: &str) -> Result<HttpRequest, TransportError> {
        let payload = NewTodo {
            user_id: self.user_id,
            title: title.to_string(),
            completed: false,
        };
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: "/todos".to_string(),
            headers: json_headers(),
            body: Some(encode(&payload)?),
        })
    }

    pub fn build_update_todo(&self, update: &TodoUpdate) -> Result<HttpRequest, TransportError> {
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("/todos/{}", update.id),
            headers: json_headers(),
            body: Some(encode(&TodoPatch::from(update))?),
        })
    }

    pub fn build_delete_todo(&self, id: TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("/todos/{id}"),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, TransportError> {
        response.error_for_status()?.json()
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, TransportError> {
        response.error_for_status()?.json()
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, TransportError> {
        response.error_for_status()?.json()
    }

    /// Any 2xx body counts as a completed delete; see `Deleted` for how it
    /// is classified.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<Deleted, TransportError> {
        let response = response.error_for_status()?;
        let body = response.body.trim();
        if body.is_empty() {
            return Ok(Deleted::Empty);
        }
        let value = match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => value,
            Err(_) => return Ok(Deleted::Other(serde_json::Value::String(response.body))),
        };
        let empty = match &value {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if empty {
            return Ok(Deleted::Empty);
        }
        Ok(match serde_json::from_value::<Todo>(value.clone()) {
            Ok(todo) => Deleted::Todo(todo),
            Err(_) => Deleted::Other(value),
        })
    }
}

impl<T: Transport> TodoClient<T> {
    /// All todos of this client's user, in server order.
    pub async fn list_todos(&self) -> Result<Vec<Todo>, TransportError> {
        let response = self.execute(self.build_list_todos()).await?;
        self.parse_list_todos(response)
    }

    pub async fn create_todo(&self, title: &str) -> Result<Todo, TransportError> {
        let response = self.execute(self.build_create_todo(title)?).await?;
        self.parse_create_todo(response)
    }

    /// Set `title` and `completed` on the todo `update.id`. No existence
    /// check is made; a missing todo surfaces as the server's error.
    pub async fn update_todo(&self, update: &TodoUpdate) -> Result<Todo, TransportError> {
        let response = self.execute(self.build_update_todo(update)?).await?;
        self.parse_update_todo(response)
    }

    pub async fn delete_todo(&self, id: TodoId) -> Result<Deleted, TransportError> {
        let response = self.execute(self.build_delete_todo(id)).await?;
        self.parse_delete_todo(response)
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(
            method = request.method.as_str(),
            path = %request.path,
            user_id = self.user_id,
            "todo request"
        );
        self.transport.send(request).await
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![(JSON_HEADER.0.to_string(), JSON_HEADER.1.to_string())]
}

fn encode<P: serde::Serialize>(payload: &P) -> Result<String, TransportError> {
    serde_json::to_string(payload).map_err(|e| TransportError::Encode(e.to_string()))
}
