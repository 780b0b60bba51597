//! Typed client for the hosted web-search API.
//!
//! The insight flow runs one search per submission, keyed on the company
//! URL, and shows the returned reference links alongside the generated
//! summary. Responses are resolved at this boundary: downstream code sees
//! a [`SearchContext`] with a concrete (possibly empty) references list,
//! never the raw optional wire field.

mod client;
mod error;
mod types;

pub use client::SearchClient;
pub use error::SearchError;
pub use types::{SearchContext, SearchResult};
