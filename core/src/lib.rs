//! Async HTTP client core for the VMS backend.
//!
//! # Overview
//! Issues JSON requests against a configured base URL with a shared set of
//! default headers, interprets responses by content type, and reports every
//! failure through one `ApiError`.
//!
//! # Design
//! - `ClientConfig` fixes the base URL once; `ApiClient` never changes it.
//! - `DefaultHeaders` is the only shared mutable state. Clients hold a handle
//!   to it and snapshot it when a request is built.
//! - `build_request` and `parse_response` are pure; the `Transport` trait is
//!   the only place that does I/O, with `ReqwestTransport` as the default.
//! - `vms` holds the typed ESG endpoint built on top of the client.

// ESG rows are wide enough to overflow `json!`'s default expansion depth.
#![recursion_limit = "256"]

pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod http;
pub mod transport;
pub mod vms;

pub use client::{parse_content, parse_response, ApiClient, ResponseContent};
pub use config::ClientConfig;
pub use error::ApiError;
pub use headers::DefaultHeaders;
pub use http::{Headers, HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use vms::{get_esg_all, EsgData, GetEsgAllRequest, GetEsgAllResponse};
