//! Session state and event acknowledgments.

use hackfind_core::{Coordinate, EventRecord};
use serde::Serialize;

/// Per-session accumulation, owned exclusively by one `LocationSession` and
/// mutated only by its own event handlers.
#[derive(Debug, Default)]
pub struct SessionState {
    /// One entry per processed location event, in arrival order. The event
    /// list may be empty when every collaborator degraded.
    pub accumulated: Vec<(Coordinate, Vec<EventRecord>)>,
}

/// Fixed acknowledgment returned by the end event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndAck {
    pub end: bool,
}
