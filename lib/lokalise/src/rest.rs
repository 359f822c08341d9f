//! Request dispatcher shared by every resource service.

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::transport::{HttpTransport, execute_cancellable};
use crate::{
    EnvelopeErrorDecoder, Error, ErrorDecoder, HttpClient, Method, Paged, RequestBuilder,
    RequestOption, Response, Result, from_json,
};

const USER_AGENT: &str = concat!("lokalise-rs/", env!("CARGO_PKG_VERSION"));

/// Decoded value together with the raw response it came from.
#[derive(Debug, Clone)]
pub struct Reply<T> {
    /// Decoded body.
    pub value: T,
    /// Raw response, kept for headers such as pagination.
    pub response: Response<Bytes>,
}

impl<T> Reply<T> {
    /// Pagination headers of the response.
    #[must_use]
    pub fn paged(&self) -> Paged {
        Paged::from_response(&self.response)
    }

    /// Drop the raw response.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Per-verb dispatch onto the API.
///
/// Paths are given as segments and percent-encoded one by one onto the base
/// URL, so identifiers never need escaping by the caller. Any [`HttpClient`]
/// can carry the calls; [`Rest::new`] uses the authenticated [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct Rest<C = HttpTransport> {
    client: C,
    base_url: Url,
    decoder: EnvelopeErrorDecoder,
}

impl Rest {
    /// Create a dispatcher over the given transport and its base URL.
    #[must_use]
    pub fn new(transport: HttpTransport) -> Self {
        let base_url = transport.config().base_url.clone();
        Self::with_client(transport, base_url)
    }

    /// Underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &HttpTransport {
        &self.client
    }
}

impl<C> Rest<C> {
    /// Create a dispatcher over any client.
    #[must_use]
    pub const fn with_client(client: C, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            decoder: EnvelopeErrorDecoder,
        }
    }

    /// Underlying client.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Join path segments onto the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] when the base URL cannot carry a path.
    pub fn url(&self, path: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        let message = format!("base URL {url} cannot carry a path");
        url.path_segments_mut()
            .map_err(|()| Error::invalid_request(message))?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }
}

impl<C: HttpClient> Rest<C> {
    fn request(&self, method: Method, path: &[&str]) -> Result<RequestBuilder<Bytes>> {
        Ok(RequestBuilder::new(method, self.url(path)?)
            .header("Accept", crate::JSON_CONTENT_TYPE)
            .header("User-Agent", USER_AGENT))
    }

    /// `GET` with query options applied in order.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &[&str],
        options: &[&dyn RequestOption],
        cancel: &CancellationToken,
    ) -> Result<Reply<T>> {
        let request = self.request(Method::Get, path)?.options(options);
        self.send(request, cancel).await
    }

    /// `POST` with a JSON body.
    pub async fn post<B, T>(
        &self,
        path: &[&str],
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<Reply<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::Post, path)?.json(body)?;
        self.send(request, cancel).await
    }

    /// `PUT` with a JSON body.
    pub async fn put<B, T>(
        &self,
        path: &[&str],
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<Reply<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::Put, path)?.json(body)?;
        self.send(request, cancel).await
    }

    /// `PATCH` with a JSON body.
    pub async fn patch<B, T>(
        &self,
        path: &[&str],
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<Reply<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::Patch, path)?.json(body)?;
        self.send(request, cancel).await
    }

    /// `DELETE` without a body.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &[&str],
        cancel: &CancellationToken,
    ) -> Result<Reply<T>> {
        let request = self.request(Method::Delete, path)?;
        self.send(request, cancel).await
    }

    /// `DELETE` with a JSON body, used by bulk removals.
    pub async fn delete_with_body<B, T>(
        &self,
        path: &[&str],
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<Reply<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::Delete, path)?.json(body)?;
        self.send(request, cancel).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder<Bytes>,
        cancel: &CancellationToken,
    ) -> Result<Reply<T>> {
        let response = execute_cancellable(&self.client, request.build(), cancel).await?;

        if let Some(error) = self.decoder.decode(response.status(), response.body()) {
            return Err(error);
        }

        let value = if response.body().iter().all(u8::is_ascii_whitespace) {
            from_json(b"null")?
        } else {
            response.json()?
        };

        Ok(Reply { value, response })
    }
}
