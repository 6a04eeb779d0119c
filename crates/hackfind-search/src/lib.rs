//! Event search for hackfind.
//!
//! Builds provider queries from a place description, calls the Tavily search
//! API, filters noisy hits with heuristic predicates, and extracts normalized
//! [`hackfind_core::EventRecord`]s from the survivors.

pub mod client;
pub mod error;
pub mod extract;
pub mod filter;
pub mod query;
pub mod types;

pub use client::TavilyClient;
pub use error::SearchError;
pub use extract::extract_event;
pub use filter::{clean_title, filter_results, FilterConfig};
pub use query::QueryTerms;
pub use types::{RawResult, SearchResponse};
