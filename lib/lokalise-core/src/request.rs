//! HTTP request building.
//!
//! Use [`Request::builder`] to construct requests with headers, query parameters, and bodies.
//!
//! # Example
//!
//! ```
//! use lokalise_core::{Method, PageOptions, Request};
//!
//! let url = "https://api.lokalise.co/api2/projects".parse().unwrap();
//! let request = Request::builder(Method::Get, url)
//!     .header("Accept", "application/json")
//!     .option(&PageOptions::new(100, 2))
//!     .build();
//!
//! assert_eq!(request.url().query(), Some("limit=100&page=2"));
//! ```

use std::collections::HashMap;

use bytes::Bytes;

use crate::{Method, RequestOption};

/// An HTTP request with method, URL, headers, and optional body.
#[derive(Debug, Clone)]
pub struct Request<B = Bytes> {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<B>,
}

impl<B> Request<B> {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: url::Url) -> RequestBuilder<B> {
        RequestBuilder::new(method, url)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Mutable access to headers.
    #[must_use]
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, url::Url, HashMap<String, String>, Option<B>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder<B = Bytes> {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<B>,
}

impl<B> RequestBuilder<B> {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets a query parameter, replacing any previous value with the same name.
    #[must_use]
    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.set_query(name, value);
        self
    }

    /// Sets a query parameter in place, replacing any previous value with the same name.
    pub fn set_query(&mut self, name: &str, value: &str) {
        let retained: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(key, _)| key != name)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut query = self.url.query_pairs_mut();
        query.clear();
        query.extend_pairs(retained);
        query.append_pair(name, value);
    }

    /// Current request URL.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request<B> {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl RequestBuilder<Bytes> {
    /// Applies a single request option.
    #[must_use]
    pub fn option(mut self, option: &dyn RequestOption) -> Self {
        option.apply_to(&mut self);
        self
    }

    /// Applies request options in order; later options win on identical names.
    #[must_use]
    pub fn options(mut self, options: &[&dyn RequestOption]) -> Self {
        for option in options {
            option.apply_to(&mut self);
        }
        self
    }

    /// Set a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json<T: serde::Serialize + ?Sized>(self, value: &T) -> crate::Result<Self> {
        let body = crate::to_json(value)?;
        Ok(self
            .header("Content-Type", crate::JSON_CONTENT_TYPE)
            .body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PageOptions;

    fn projects_url() -> url::Url {
        url::Url::parse("https://api.lokalise.co/api2/projects").expect("valid URL")
    }

    #[test]
    fn request_builder_basic() {
        let request = Request::<Bytes>::builder(Method::Get, projects_url())
            .header("Accept", "application/json")
            .build();

        assert_eq!(request.method(), Method::Get);
        assert_eq!(
            request.url().as_str(),
            "https://api.lokalise.co/api2/projects"
        );
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert!(request.body().is_none());
    }

    #[test]
    fn request_builder_with_query() {
        let request = Request::<Bytes>::builder(Method::Get, projects_url())
            .query("page", "1")
            .query("limit", "10")
            .build();

        assert_eq!(
            request.url().as_str(),
            "https://api.lokalise.co/api2/projects?page=1&limit=10"
        );
    }

    #[test]
    fn later_query_overrides_earlier() {
        let request = Request::<Bytes>::builder(Method::Get, projects_url())
            .query("limit", "10")
            .query("page", "3")
            .query("limit", "50")
            .build();

        assert_eq!(request.url().query(), Some("page=3&limit=50"));
    }

    #[test]
    fn options_apply_in_order() {
        let first = PageOptions::new(10, 1);
        let second = PageOptions::new(0, 4);
        let request = Request::<Bytes>::builder(Method::Get, projects_url())
            .options(&[&first, &second])
            .build();

        assert_eq!(request.url().query(), Some("limit=10&page=4"));
    }

    #[test]
    fn request_builder_json() {
        #[derive(serde::Serialize)]
        struct NewProject {
            name: String,
        }

        let request = Request::builder(Method::Post, projects_url())
            .json(&NewProject {
                name: "Website".to_string(),
            })
            .expect("json")
            .build();

        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(
            request.body().map(|body| body.to_vec()),
            Some(br#"{"name":"Website"}"#.to_vec())
        );
    }
}
