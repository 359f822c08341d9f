//! HTTP method types.

use derive_more::Display;

/// HTTP request method used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method - list or retrieve resources.
    #[display("GET")]
    Get,
    /// POST method - create resources or trigger actions.
    #[display("POST")]
    Post,
    /// PUT method - update resources.
    #[display("PUT")]
    Put,
    /// PATCH method - partial updates such as secret regeneration.
    #[display("PATCH")]
    Patch,
    /// DELETE method - remove resources, optionally with a body.
    #[display("DELETE")]
    Delete,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}
