//! Query Builder
//!
//! - url_builder.rs - request URL composition
//! - filter.rs - `$filter` expression composition

pub mod filter;
pub mod url_builder;

pub use filter::{FilterBuilder, quote_literal, split_list};
pub use url_builder::{QueryParams, build_url};
