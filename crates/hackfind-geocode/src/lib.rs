//! Reverse-geocoding client for hackfind.
//!
//! Resolves a coordinate to a [`hackfind_core::PlaceDescription`] via the
//! Nominatim `reverse` endpoint. Resolution never fails past this crate's
//! boundary: any transport, status, or body-shape problem degrades to a
//! coordinate-label place description and is logged.

pub mod client;
pub mod error;
pub mod types;

pub use client::NominatimClient;
pub use error::GeocodeError;
pub use types::{Address, ReverseResponse};
