//! Query derive macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Fields, parse2};

/// Field options parsed from `#[query(...)]` attributes.
#[derive(Debug, Clone, Default)]
struct QueryFieldOptions {
    /// Leave the field out of the query string entirely.
    skip: bool,
    /// Rename the field in query string.
    rename: Option<String>,
    /// Encode `false` as `"0"` instead of omitting it.
    explicit_bool: bool,
}

/// Expand the `#[derive(Query)]` macro.
pub fn expand_query_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => {
                return Ok(quote! {
                    impl #impl_generics ::lokalise::ToQueryPairs
                        for #name #ty_generics #where_clause
                    {
                        fn to_query_pairs(
                            &self,
                        ) -> ::std::vec::Vec<(::std::string::String, ::std::string::String)> {
                            ::std::vec::Vec::new()
                        }
                    }
                });
            }
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Query derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Query derive only supports structs",
            ));
        }
    };

    let mut field_handlers = Vec::new();

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let options = parse_query_field_options(&field.attrs)?;
        if options.skip {
            continue;
        }

        let key = options
            .rename
            .clone()
            .unwrap_or_else(|| field_name.to_string().trim_start_matches("r#").to_string());

        field_handlers.push(generate_field_handler(field_name, &key, &options));
    }

    Ok(quote! {
        impl #impl_generics ::lokalise::ToQueryPairs for #name #ty_generics #where_clause {
            fn to_query_pairs(
                &self,
            ) -> ::std::vec::Vec<(::std::string::String, ::std::string::String)> {
                let mut pairs = ::std::vec::Vec::new();
                #(#field_handlers)*
                pairs
            }
        }
    })
}

/// Parse field options from `#[query(...)]` attributes.
fn parse_query_field_options(attrs: &[syn::Attribute]) -> syn::Result<QueryFieldOptions> {
    let mut options = QueryFieldOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("query") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                options.skip = true;
            } else if meta.path.is_ident("explicit_bool") {
                options.explicit_bool = true;
            } else if meta.path.is_ident("rename") {
                let value: syn::LitStr = meta.value()?.parse()?;
                options.rename = Some(value.value());
            } else {
                return Err(meta.error(
                    "unknown query attribute, expected one of: skip, rename, explicit_bool",
                ));
            }
            Ok(())
        })?;
    }

    Ok(options)
}

/// Generate code for handling a single field.
fn generate_field_handler(
    field_name: &syn::Ident,
    key: &str,
    options: &QueryFieldOptions,
) -> TokenStream {
    let encoded = if options.explicit_bool {
        quote! { ::lokalise::ExplicitBool::to_explicit_query_value(&self.#field_name) }
    } else {
        quote! { ::lokalise::QueryValue::to_query_value(&self.#field_name) }
    };

    quote! {
        if let ::std::option::Option::Some(value) = #encoded {
            pairs.push((#key.to_string(), value));
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use quote::quote;

    use super::*;

    fn expand(input: TokenStream) -> String {
        expand_query_derive(input)
            .map(|tokens| tokens.to_string())
            .unwrap_or_else(|err| err.to_string())
    }

    #[test]
    fn uses_field_names_as_keys() {
        let expanded = expand(quote! {
            struct KeyListOptions {
                include_translations: bool,
                filter_tags: Vec<String>,
            }
        });

        check!(expanded.contains("ToQueryPairs for KeyListOptions"));
        check!(expanded.contains("\"include_translations\""));
        check!(expanded.contains("\"filter_tags\""));
    }

    #[test]
    fn rename_skip_and_explicit_bool() {
        let expanded = expand(quote! {
            struct TranslationListOptions {
                #[query(rename = "filter_lang_id")]
                lang_id: i64,
                #[query(skip)]
                internal: String,
                #[query(explicit_bool)]
                filter_is_reviewed: Option<bool>,
            }
        });

        check!(expanded.contains("\"filter_lang_id\""));
        check!(!expanded.contains("\"internal\""));
        check!(expanded.contains("ExplicitBool"));
    }

    #[test]
    fn rejects_tuple_structs() {
        let expanded = expand(quote! {
            struct Filters(String);
        });
        check!(expanded.contains("named fields"));
    }

    #[test]
    fn rejects_unknown_attributes() {
        let expanded = expand(quote! {
            struct Filters {
                #[query(format = "csv")]
                tags: Vec<String>,
            }
        });
        check!(expanded.contains("unknown query attribute"));
    }
}
