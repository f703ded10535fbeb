use proc_macro::TokenStream;
use syn_utils::into_macro_output;

#[macro_use]
mod syn_utils;

mod query_bindings_impl;

/// Binds fields of a struct to URL query parameters.
///
/// Each field marked with `#[query("name", options...)]` is registered, in declaration
/// order, with the parameter `name`. The field type must implement `ParamSlot`
/// (`QueryParam<T>` or `Computed<T>`).
///
/// # Options
///
/// | Option               | Effect                                               |
/// |----------------------|------------------------------------------------------|
/// | `push_history_state` | writes create a new history entry instead of replacing the current one |
/// | `use_json`           | values are stored as JSON text                        |
/// | `export`             | allows a getter-only `Computed<T>` field              |
///
/// A getter-only field without `export` is a compile error.
///
/// # Examples
///
/// ```ignore
/// #[derive(QueryBindings)]
/// struct Filters {
///     #[query("q")]
///     text: QueryParam<String>,
///     #[query("tags", use_json, push_history_state)]
///     tags: QueryParam<Vec<String>>,
/// }
/// ```
#[proc_macro_derive(QueryBindings, attributes(query))]
pub fn derive_query_bindings(input: TokenStream) -> TokenStream {
    into_macro_output(query_bindings_impl::derive_query_bindings(input.into()))
}
