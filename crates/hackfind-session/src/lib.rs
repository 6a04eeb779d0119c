//! The stateful location session driving the lookup pipeline.
//!
//! A [`LocationSession`] receives location and end events from a hosting
//! dispatcher, runs the geocode → query → search → filter → extract pipeline
//! for each location, accumulates the results, and suspends in [`LocationSession::run`]
//! until the termination flag is set. The host is responsible for
//! serializing events against one session; the `&mut self` receiver on
//! [`LocationSession::on_location`] makes that explicit.

pub mod error;
pub mod pipeline;
pub mod session;
pub mod types;

pub use error::SessionError;
pub use pipeline::run_location_pipeline;
pub use session::{LocationSession, SessionConfig};
pub use types::{EndAck, SessionState};
