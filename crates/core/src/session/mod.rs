//! Session module - the process-wide container around the state machine.

mod session_store;

#[cfg(test)]
mod session_store_tests;

pub use session_store::SessionStore;
