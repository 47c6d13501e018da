//! Async API client core for the todo service.
//!
//! # Overview
//! `TodoClient` lists, creates, updates and deletes the todos of one fixed
//! user. It builds `HttpRequest` values, hands them to a `Transport`, and
//! parses the `HttpResponse` it gets back.
//!
//! # Design
//! - `TodoClient` is stateless: it holds its transport and a `user_id`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary stays explicit and
//!   the pure halves are testable without a network.
//! - Base URL, timeouts and connection handling belong to the transport
//!   (`ReqwestTransport` for real HTTP).
//! - Transport errors reach the caller unchanged.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::{ConfigError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Deleted, NewTodo, Todo, TodoId, TodoUpdate, UserId, DEFAULT_USER_ID};
