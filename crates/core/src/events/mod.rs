//! Session events module.
//!
//! Provides the events a session store emits after a dispatch changed state
//! and the sink trait that receives them. Embedding applications implement
//! the sink to react to facts the state machine itself does not act on
//! (regenerating an exhausted action plan, celebrating a badge, etc.).

mod session_event;
mod sink;

pub use session_event::*;
pub use sink::*;
