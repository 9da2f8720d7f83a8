//! Client-side state manager for a remote todo collection.
//!
//! # Overview
//! `TodoStore` owns a local cache of todo items and keeps it convergent with
//! a remote REST service: every mutation is applied locally only after the
//! service has confirmed it. Failed calls leave the cache untouched and are
//! surfaced as an error plus a user-facing notice — never as a partial
//! update.
//!
//! # Design
//! - `TodoStore` is an owned object; all shared state (items, busy flags,
//!   notices) lives behind its methods, never in globals.
//! - The remote side is the `RemoteTodoService` trait; `UreqTodoService` is
//!   the real HTTP transport, and tests substitute a mock.
//! - Underneath the transport, `TodoApi` builds `HttpRequest` values and
//!   parses `HttpResponse` values without touching the network
//!   (host-does-IO pattern), so the wire format is testable offline.

pub mod client;
pub mod error;
pub mod http;
pub mod notice;
pub mod service;
pub mod store;
pub mod types;

pub use client::TodoApi;
pub use error::{ServiceError, StoreError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notice::{Notice, NoticeLevel};
pub use service::{RemoteTodoService, UreqTodoService};
pub use store::TodoStore;
pub use types::{NewTodo, TodoItem, UpdateTodo};
