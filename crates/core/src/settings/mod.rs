//! Settings module - configuration of a session store.

mod settings_model;


pub use settings_model::{DemoIdentity, SessionSettings};
