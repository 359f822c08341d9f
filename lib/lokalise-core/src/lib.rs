//! Core types and traits for the lokalise API client.
//!
//! This crate provides the transport-independent building blocks:
//! - [`Method`] - HTTP method enum
//! - [`Request`] and [`RequestBuilder`] - HTTP request types
//! - [`Response`] - HTTP response type
//! - [`Error`] and [`Result`] - Error handling
//! - [`ErrorDecoder`] and [`EnvelopeErrorDecoder`] - Error envelope decoding
//! - [`HttpClient`] - Core client trait for HTTP execution
//! - [`PageOptions`], [`CursorPageOptions`], [`Paging`] and [`Paged`] - Pagination
//! - [`RequestOption`], [`ToQueryPairs`] and [`QueryValue`] - Option composition

mod body;
mod client;
mod error;
mod method;
mod option;
mod pagination;
mod request;
mod response;

pub use body::{JSON_CONTENT_TYPE, from_json, to_json};
pub use client::HttpClient;
pub use error::{EnvelopeErrorDecoder, Error, ErrorDecoder, Result};
pub use method::Method;
pub use option::{ExplicitBool, QueryValue, RequestOption, ToQueryPairs};
pub use pagination::{
    CursorPageOptions, LIMIT_HEADER, NEXT_CURSOR_HEADER, PAGE_COUNT_HEADER, PAGE_HEADER,
    PageOptions, Paged, Paging, TOTAL_COUNT_HEADER,
};
pub use request::{Request, RequestBuilder};
pub use response::Response;

// Re-export http crate types for status codes
pub use http::StatusCode;
