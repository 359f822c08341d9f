//! State shared by every resource service.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::rest::Rest;
use crate::{CursorPageOptions, PageOptions, Paged, Paging, RequestOption, Result};

/// List envelopes that carry the pagination headers of their response.
pub trait Paginated {
    /// Store the decoded pagination headers.
    fn set_paged(&mut self, paged: Paged);
}

macro_rules! impl_paginated {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::service::Paginated for $ty {
                fn set_paged(&mut self, paged: $crate::Paged) {
                    self.paged = paged;
                }
            }
        )+
    };
}
pub(crate) use impl_paginated;

/// Generates the `with_*` builders every service exposes.
macro_rules! impl_service_base {
    ($($service:ty),+ $(,)?) => {
        $(
            impl $service {
                /// Use this token to cancel calls made through the service.
                #[must_use]
                pub fn with_cancellation(
                    mut self,
                    cancel: ::tokio_util::sync::CancellationToken,
                ) -> Self {
                    self.base = self.base.with_cancellation(cancel);
                    self
                }

                /// Switch list calls to offset pagination with these options.
                #[must_use]
                pub fn with_page_options(mut self, options: $crate::PageOptions) -> Self {
                    self.base = self.base.with_page_options(options);
                    self
                }

                /// Switch list calls to cursor pagination with these options.
                #[must_use]
                pub fn with_cursor_options(mut self, options: $crate::CursorPageOptions) -> Self {
                    self.base = self.base.with_cursor_options(options);
                    self
                }
            }
        )+
    };
}
pub(crate) use impl_service_base;

/// Dispatcher handle, cancellation token and paging mode of a service.
#[derive(Debug, Clone)]
pub struct ServiceBase {
    rest: Arc<Rest>,
    cancel: CancellationToken,
    paging: Paging,
    default_limit: u32,
}

impl ServiceBase {
    pub(crate) fn new(rest: Arc<Rest>, default_limit: u32) -> Self {
        Self {
            rest,
            cancel: CancellationToken::new(),
            paging: Paging::default(),
            default_limit,
        }
    }

    /// Use this token for every call.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Offset pagination.
    #[must_use]
    pub fn with_page_options(mut self, options: PageOptions) -> Self {
        self.paging = Paging::Offset(options);
        self
    }

    /// Cursor pagination.
    #[must_use]
    pub fn with_cursor_options(mut self, options: CursorPageOptions) -> Self {
        self.paging = Paging::Cursor(options);
        self
    }

    /// Dispatcher.
    #[must_use]
    pub fn rest(&self) -> &Rest {
        &self.rest
    }

    /// Cancellation token used by the service.
    #[must_use]
    pub const fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Paging options, with the client default limit filled in.
    #[must_use]
    pub fn paging(&self) -> Paging {
        self.paging.clone().with_default_limit(self.default_limit)
    }

    pub(crate) async fn list<T>(&self, path: &[&str], options: &[&dyn RequestOption]) -> Result<T>
    where
        T: DeserializeOwned + Paginated,
    {
        let paging = self.paging();
        let mut all: Vec<&dyn RequestOption> = Vec::with_capacity(options.len() + 1);
        all.push(&paging);
        all.extend_from_slice(options);

        let reply = self.rest.get::<T>(path, &all, &self.cancel).await?;
        let paged = reply.paged();
        let mut value = reply.value;
        value.set_paged(paged);
        Ok(value)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &[&str],
        options: &[&dyn RequestOption],
    ) -> Result<T> {
        Ok(self.rest.get(path, options, &self.cancel).await?.value)
    }

    pub(crate) async fn post<B, T>(&self, path: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        Ok(self.rest.post(path, body, &self.cancel).await?.value)
    }

    pub(crate) async fn put<B, T>(&self, path: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        Ok(self.rest.put(path, body, &self.cancel).await?.value)
    }

    pub(crate) async fn patch<B, T>(&self, path: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        Ok(self.rest.patch(path, body, &self.cancel).await?.value)
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T> {
        Ok(self.rest.delete(path, &self.cancel).await?.value)
    }

    pub(crate) async fn delete_with_body<B, T>(&self, path: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        Ok(self.rest.delete_with_body(path, body, &self.cancel).await?.value)
    }
}
