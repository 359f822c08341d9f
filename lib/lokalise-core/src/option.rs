//! Request option composition.
//!
//! Anything implementing [`RequestOption`] can shape a pending request.
//! Filter structs usually get it for free through [`ToQueryPairs`], which is
//! what `#[derive(Query)]` generates, with field values encoded by [`QueryValue`]:
//!
//! | Field type | Encoding |
//! |---|---|
//! | integers | decimal, omitted when zero |
//! | `String`, `&str` | as is, omitted when empty |
//! | `bool` | `"1"` when true, omitted when false |
//! | `Vec<T>` | comma-separated, omitted when empty |
//! | `Option<T>` | encoding of the inner value, omitted when `None` |

use bytes::Bytes;

use crate::RequestBuilder;

/// Something that mutates a pending request, typically by adding query parameters.
///
/// Options are shared by reference across await points, hence the `Sync` bound.
pub trait RequestOption: Sync {
    /// Apply this option to the request under construction.
    fn apply_to(&self, request: &mut RequestBuilder<Bytes>);
}

/// Trait for types that can be converted to query parameter pairs.
///
/// This is automatically implemented by the `#[derive(Query)]` macro.
///
/// # Example
///
/// ```ignore
/// use lokalise::Query;
///
/// #[derive(Query)]
/// struct KeyFilters {
///     include_translations: bool,
///     #[query(rename = "filter_tags")]
///     tags: Vec<String>,
/// }
/// ```
pub trait ToQueryPairs {
    /// Convert this type to a vector of key-value pairs for query parameters.
    fn to_query_pairs(&self) -> Vec<(String, String)>;
}

impl<T: ToQueryPairs + Sync + ?Sized> RequestOption for T {
    fn apply_to(&self, request: &mut RequestBuilder<Bytes>) {
        for (name, value) in self.to_query_pairs() {
            request.set_query(&name, &value);
        }
    }
}

/// Encoding of a single field value into a query parameter value.
///
/// `None` means the parameter is left out so the server default applies.
pub trait QueryValue {
    /// The encoded value, or `None` when the parameter must be omitted.
    fn to_query_value(&self) -> Option<String>;
}

/// Boolean encoding that keeps `false` on the wire as `"0"`.
///
/// Used for the few filters where the server distinguishes "false" from "not set".
pub trait ExplicitBool {
    /// The encoded value, or `None` when the parameter must be omitted.
    fn to_explicit_query_value(&self) -> Option<String>;
}

impl QueryValue for bool {
    fn to_query_value(&self) -> Option<String> {
        self.then(|| "1".to_string())
    }
}

impl ExplicitBool for bool {
    fn to_explicit_query_value(&self) -> Option<String> {
        Some(if *self { "1" } else { "0" }.to_string())
    }
}

impl ExplicitBool for Option<bool> {
    fn to_explicit_query_value(&self) -> Option<String> {
        self.as_ref().and_then(ExplicitBool::to_explicit_query_value)
    }
}

macro_rules! impl_query_value_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> Option<String> {
                    (*self != 0).then(|| self.to_string())
                }
            }
        )*
    };
}

impl_query_value_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl QueryValue for str {
    fn to_query_value(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> Option<String> {
        self.as_str().to_query_value()
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> Option<String> {
        (**self).to_query_value()
    }
}

impl<T: QueryValue> QueryValue for Option<T> {
    fn to_query_value(&self) -> Option<String> {
        self.as_ref().and_then(QueryValue::to_query_value)
    }
}

impl<T: QueryValue> QueryValue for Vec<T> {
    fn to_query_value(&self) -> Option<String> {
        self.as_slice().to_query_value()
    }
}

impl<T: QueryValue> QueryValue for [T] {
    fn to_query_value(&self) -> Option<String> {
        let values: Vec<String> = self.iter().filter_map(QueryValue::to_query_value).collect();
        (!values.is_empty()).then(|| values.join(","))
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn bool_encoding() {
        check!(true.to_query_value() == Some("1".to_string()));
        check!(false.to_query_value().is_none());
        check!(false.to_explicit_query_value() == Some("0".to_string()));
        check!(Some(true).to_explicit_query_value() == Some("1".to_string()));
        check!(None::<bool>.to_explicit_query_value().is_none());
    }

    #[test]
    fn integer_encoding() {
        check!(0_u32.to_query_value().is_none());
        check!(100_u32.to_query_value() == Some("100".to_string()));
        check!((-1_i64).to_query_value() == Some("-1".to_string()));
    }

    #[test]
    fn string_encoding() {
        check!(String::new().to_query_value().is_none());
        check!("en".to_query_value() == Some("en".to_string()));
        check!(Some("fr".to_string()).to_query_value() == Some("fr".to_string()));
        check!(None::<String>.to_query_value().is_none());
    }

    #[test]
    fn list_encoding() {
        check!(vec!["web", "ios"].to_query_value() == Some("web,ios".to_string()));
        check!(vec![12_i64, 34, 56].to_query_value() == Some("12,34,56".to_string()));
        check!(Vec::<String>::new().to_query_value().is_none());
        check!(vec![String::new()].to_query_value().is_none());
    }

    #[test]
    fn to_query_pairs_overwrite_previous_values() {
        struct Limit(u32);

        impl ToQueryPairs for Limit {
            fn to_query_pairs(&self) -> Vec<(String, String)> {
                vec![("limit".to_string(), self.0.to_string())]
            }
        }

        let url = url::Url::parse("https://api.lokalise.co/api2/teams").expect("url");
        let mut builder = RequestBuilder::<Bytes>::new(crate::Method::Get, url);
        Limit(10).apply_to(&mut builder);
        Limit(20).apply_to(&mut builder);

        check!(builder.url().query() == Some("limit=20"));
    }
}
