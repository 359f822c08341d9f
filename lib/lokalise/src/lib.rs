//! Typed async client for the Lokalise translation management API.
//!
//! An [`Api`] owns one authenticated transport and hands out a service per
//! resource. Services are cheap values configured by chaining `with_*`
//! calls, and every call returns a typed response or an [`Error`].
//!
//! # Example
//!
//! ```ignore
//! use lokalise::prelude::*;
//!
//! let api = Api::builder("my-token").retry_count(5).build()?;
//!
//! let projects = api
//!     .projects()
//!     .with_page_options(PageOptions::new(50, 1))
//!     .list()
//!     .await?;
//! println!("{} projects in total", projects.paged.total_count.unwrap_or_default());
//!
//! let keys = api
//!     .keys()
//!     .with_list_options(KeyListOptions {
//!         include_translations: true,
//!         ..KeyListOptions::default()
//!     })
//!     .list("123.abc")
//!     .await?;
//! ```
//!
//! Failed calls surface the API error envelope as [`Error::Api`]; transport
//! failures and 5xx responses are retried according to the client
//! configuration.

extern crate self as lokalise;

mod api;
mod config;
mod connector;
pub mod middleware;
pub mod model;
pub mod prelude;
mod rest;
mod service;
pub mod services;
mod transport;

pub use api::{Api, ApiBuilder};
pub use config::{
    ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_PAGE_LIMIT, DEFAULT_RETRY_COUNT,
};
pub use connector::https_connector;
pub use rest::{Reply, Rest};
pub use service::{Paginated, ServiceBase};
pub use transport::{
    BoxedService, HttpTransport, HttpTransportBuilder, ServiceFuture, execute_cancellable,
};

// Re-export tower for middleware composition
pub use tower;

// Re-export the cancellation token accepted by every service
pub use tokio_util::sync::CancellationToken;

// Re-export core types
pub use lokalise_core::{
    CursorPageOptions, EnvelopeErrorDecoder, Error, ErrorDecoder, ExplicitBool, HttpClient,
    JSON_CONTENT_TYPE, Method, PageOptions, Paged, Paging, QueryValue, Request, RequestBuilder,
    RequestOption, Response, Result, StatusCode, ToQueryPairs, from_json, to_json,
};

// Re-export pagination header names
pub use lokalise_core::{
    LIMIT_HEADER, NEXT_CURSOR_HEADER, PAGE_COUNT_HEADER, PAGE_HEADER, TOTAL_COUNT_HEADER,
};

// Re-export macros
pub use lokalise_macro::Query;
