//! Procedural macros for the lokalise API client.
//!
//! This crate provides `#[derive(Query)]`, which turns a filter-option
//! struct into query parameters following the API encoding rules.

mod query_derive;

use proc_macro::TokenStream;

/// Derive the `ToQueryPairs` trait for a struct.
///
/// Every field is encoded with `lokalise::QueryValue`: zero numbers, empty
/// strings, empty lists, `false` and `None` are left out; `true` becomes `"1"`
/// and lists are joined with commas.
///
/// # Field Attributes
///
/// - `#[query(rename = "name")]` - Use a different name in the query string
/// - `#[query(skip)]` - Never send the field
/// - `#[query(explicit_bool)]` - Send `false` as `"0"` instead of omitting it
///
/// # Example
///
/// ```ignore
/// use lokalise::Query;
///
/// #[derive(Query)]
/// struct KeyListOptions {
///     include_translations: bool,        // include_translations=1
///     filter_tags: Vec<String>,          // filter_tags=web,ios
///     #[query(rename = "filter_key_ids")]
///     key_ids: Vec<i64>,                 // filter_key_ids=1,2,3
/// }
/// ```
#[proc_macro_derive(Query, attributes(query))]
pub fn derive_query(input: TokenStream) -> TokenStream {
    query_derive::expand_query_derive(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
