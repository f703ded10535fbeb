//! Keeps fields of UI components synchronized with URL query parameters.
//!
//! ```
//! use query_binding::{MemoryUrlStore, OnInit, QueryBinder, QueryBindings, QueryParam};
//!
//! #[derive(QueryBindings)]
//! struct Search {
//!     #[query("q")]
//!     text: QueryParam<String>,
//!     #[query("page", push_history_state, use_json)]
//!     page: QueryParam<u32>,
//! }
//! impl OnInit for Search {}
//!
//! let binder = QueryBinder::new(MemoryUrlStore::new("/search?q=rust"));
//! let mut search = binder
//!     .create(Search {
//!         text: QueryParam::new("default".to_string()),
//!         page: QueryParam::new(1),
//!     })
//!     .unwrap();
//!
//! assert_eq!(search.text.get().unwrap().as_deref(), Some("rust"));
//! search.page.set(2).unwrap();
//! assert_eq!(binder.store().query_parameters().to_string(), "q=rust&page=2");
//! ```
extern crate self as query_binding;

mod binder;
mod binding;
mod codec;
mod debounce;
mod error;
mod logging;
mod options;
mod query;
mod registry;
mod store;
mod utils;

pub use binder::*;
pub use binding::*;
pub use codec::*;
pub use debounce::*;
pub use error::*;
pub use logging::*;
pub use options::*;
pub use query::*;
pub use registry::*;
pub use store::*;

pub use query_binding_macros::QueryBindings;
