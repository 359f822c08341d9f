//! Pagination: page parameters going out, pagination headers coming back.
//!
//! The API supports two exclusive modes:
//! - offset mode, driven by `page` and `limit`,
//! - cursor mode, driven by `pagination=cursor`, `cursor` and `limit`.
//!
//! Responses describe the page they carry through `X-Pagination-*` headers,
//! decoded by [`Paged::from_response`].

use crate::{Response, ToQueryPairs};

/// Header with the total number of items.
pub const TOTAL_COUNT_HEADER: &str = "X-Pagination-Total-Count";
/// Header with the number of pages.
pub const PAGE_COUNT_HEADER: &str = "X-Pagination-Page-Count";
/// Header with the page size.
pub const LIMIT_HEADER: &str = "X-Pagination-Limit";
/// Header with the current page (1-based).
pub const PAGE_HEADER: &str = "X-Pagination-Page";
/// Header with the cursor of the next page, cursor mode only.
pub const NEXT_CURSOR_HEADER: &str = "X-Pagination-Next-Cursor";

/// Offset pagination parameters.
///
/// Zero values are left out of the query string so the server default applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Page size.
    pub limit: u32,
    /// 1-based page number.
    pub page: u32,
}

impl PageOptions {
    /// Create page options.
    #[must_use]
    pub const fn new(limit: u32, page: u32) -> Self {
        Self { limit, page }
    }
}

impl ToQueryPairs for PageOptions {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(2);
        if self.limit > 0 {
            pairs.push(("limit".to_string(), self.limit.to_string()));
        }
        if self.page > 0 {
            pairs.push(("page".to_string(), self.page.to_string()));
        }
        pairs
    }
}

/// Cursor pagination parameters.
///
/// The cursor is opaque and must be passed back verbatim from
/// [`Paged::next_cursor`]. An empty cursor requests the first page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorPageOptions {
    /// Page size.
    pub limit: u32,
    /// Cursor returned by the previous page.
    pub cursor: String,
}

impl CursorPageOptions {
    /// Create cursor options.
    #[must_use]
    pub fn new(limit: u32, cursor: impl Into<String>) -> Self {
        Self {
            limit,
            cursor: cursor.into(),
        }
    }
}

impl ToQueryPairs for CursorPageOptions {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("pagination".to_string(), "cursor".to_string())];
        if self.limit > 0 {
            pairs.push(("limit".to_string(), self.limit.to_string()));
        }
        if !self.cursor.is_empty() {
            pairs.push(("cursor".to_string(), self.cursor.clone()));
        }
        pairs
    }
}

/// Pagination mode for list calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paging {
    /// Offset mode (`page` + `limit`).
    Offset(PageOptions),
    /// Cursor mode (`cursor` + `limit`).
    Cursor(CursorPageOptions),
}

impl Default for Paging {
    fn default() -> Self {
        Self::Offset(PageOptions::default())
    }
}

impl Paging {
    /// Page size requested in either mode.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        match self {
            Self::Offset(options) => options.limit,
            Self::Cursor(options) => options.limit,
        }
    }

    /// Same paging with the limit replaced when it is unset.
    #[must_use]
    pub fn with_default_limit(mut self, limit: u32) -> Self {
        match &mut self {
            Self::Offset(options) if options.limit == 0 => options.limit = limit,
            Self::Cursor(options) if options.limit == 0 => options.limit = limit,
            _ => {}
        }
        self
    }
}

impl ToQueryPairs for Paging {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        match self {
            Self::Offset(options) => options.to_query_pairs(),
            Self::Cursor(options) => options.to_query_pairs(),
        }
    }
}

/// Pagination metadata of a list response.
///
/// Every field is `None` when the server did not send the header (the wire
/// sentinel `-1` is also read as `None`). A response without any header is a
/// single, unpaginated page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paged {
    /// Total number of items.
    pub total_count: Option<i64>,
    /// Number of pages.
    pub page_count: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
    /// Current page (1-based).
    pub page: Option<i64>,
    /// Cursor of the next page, cursor mode only.
    pub next_cursor: Option<String>,
}

impl Paged {
    /// Decode the pagination headers of a response.
    #[must_use]
    pub fn from_response<B>(response: &Response<B>) -> Self {
        let number = |name: &str| {
            response
                .header(name)
                .and_then(|value| value.trim().parse::<i64>().ok())
                .filter(|value| *value >= 0)
        };

        Self {
            total_count: number(TOTAL_COUNT_HEADER),
            page_count: number(PAGE_COUNT_HEADER),
            limit: number(LIMIT_HEADER),
            page: number(PAGE_HEADER),
            next_cursor: response
                .header(NEXT_CURSOR_HEADER)
                .filter(|cursor| !cursor.is_empty())
                .map(ToString::to_string),
        }
    }

    /// Current page (1-based), if the server reported it.
    #[must_use]
    pub const fn current_page(&self) -> Option<i64> {
        self.page
    }

    /// Returns `true` when more items are available in cursor mode.
    #[must_use]
    pub fn has_next_cursor(&self) -> bool {
        self.next_cursor.as_deref().is_some_and(|cursor| !cursor.is_empty())
    }

    /// Returns `true` when more items are available.
    ///
    /// The cursor is authoritative when present; otherwise the current page is
    /// compared to the page count.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        if self.next_cursor.is_some() {
            return self.has_next_cursor();
        }
        matches!((self.page, self.page_count), (Some(page), Some(count)) if page < count)
    }

    /// Returns `true` when the server sent no pagination header at all.
    #[must_use]
    pub fn is_unpaginated(&self) -> bool {
        *self == Self::default()
    }

    /// Cursor options for the next page, keeping the given limit.
    #[must_use]
    pub fn next_cursor_options(&self, limit: u32) -> Option<CursorPageOptions> {
        self.next_cursor
            .as_ref()
            .map(|cursor| CursorPageOptions::new(limit, cursor.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert2::check;
    use bytes::Bytes;

    use super::*;

    fn response(headers: &[(&str, &str)]) -> Response<Bytes> {
        let headers: HashMap<String, String> = headers
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect();
        Response::new(200, headers, Bytes::from("{}"))
    }

    #[test]
    fn page_options_omit_zero_fields() {
        check!(PageOptions::default().to_query_pairs().is_empty());
        check!(
            PageOptions::new(0, 3).to_query_pairs() == vec![("page".to_string(), "3".to_string())]
        );
        check!(
            PageOptions::new(500, 0).to_query_pairs()
                == vec![("limit".to_string(), "500".to_string())]
        );
    }

    #[test]
    fn cursor_options_always_select_cursor_mode() {
        check!(
            CursorPageOptions::default().to_query_pairs()
                == vec![("pagination".to_string(), "cursor".to_string())]
        );
        check!(
            CursorPageOptions::new(100, "eyIxIjo5NzM1NjI0NX0=").to_query_pairs()
                == vec![
                    ("pagination".to_string(), "cursor".to_string()),
                    ("limit".to_string(), "100".to_string()),
                    ("cursor".to_string(), "eyIxIjo5NzM1NjI0NX0=".to_string()),
                ]
        );
    }

    #[test]
    fn paging_default_limit() {
        let paging = Paging::default().with_default_limit(100);
        check!(paging == Paging::Offset(PageOptions::new(100, 0)));

        let paging = Paging::Offset(PageOptions::new(20, 2)).with_default_limit(100);
        check!(paging.limit() == 20);

        let paging = Paging::Cursor(CursorPageOptions::default()).with_default_limit(50);
        check!(paging.limit() == 50);
    }

    #[test]
    fn paged_without_headers() {
        let paged = Paged::from_response(&response(&[]));
        check!(paged.total_count.is_none());
        check!(paged.page_count.is_none());
        check!(paged.limit.is_none());
        check!(paged.page.is_none());
        check!(paged.next_cursor.is_none());
        check!(paged.is_unpaginated());
        check!(!paged.has_next_page());
    }

    #[test]
    fn paged_with_offset_headers() {
        let paged = Paged::from_response(&response(&[
            ("x-pagination-total-count", "1000"),
            ("x-pagination-page-count", "10"),
            ("x-pagination-limit", "100"),
            ("x-pagination-page", "1"),
        ]));

        check!(paged.total_count == Some(1000));
        check!(paged.page_count == Some(10));
        check!(paged.limit == Some(100));
        check!(paged.current_page() == Some(1));
        check!(!paged.has_next_cursor());
        check!(paged.has_next_page());
    }

    #[test]
    fn paged_with_cursor_header() {
        let paged = Paged::from_response(&response(&[
            ("X-Pagination-Next-Cursor", "eyIxIjo5NzM1NjI0NX0="),
            ("X-Pagination-Limit", "100"),
        ]));

        check!(paged.total_count.is_none());
        check!(paged.page_count.is_none());
        check!(paged.limit == Some(100));
        check!(paged.page.is_none());
        check!(paged.next_cursor.as_deref() == Some("eyIxIjo5NzM1NjI0NX0="));
        check!(paged.has_next_cursor());
        check!(
            paged.next_cursor_options(100)
                == Some(CursorPageOptions::new(100, "eyIxIjo5NzM1NjI0NX0="))
        );
    }

    #[test]
    fn paged_ignores_garbage_and_sentinels() {
        let paged = Paged::from_response(&response(&[
            ("X-Pagination-Total-Count", "many"),
            ("X-Pagination-Page-Count", "-1"),
            ("X-Pagination-Next-Cursor", ""),
        ]));

        check!(paged.total_count.is_none());
        check!(paged.page_count.is_none());
        check!(!paged.has_next_cursor());
    }

    #[test]
    fn cursor_is_authoritative_for_next() {
        let paged = Paged {
            page_count: Some(1),
            page: Some(1),
            next_cursor: Some("abc".to_string()),
            ..Paged::default()
        };
        check!(paged.has_next_page());
    }
}
