//! Avanza Core - session state machine for a credit-score simulation and
//! personal finance education app.
//!
//! All state changes go through [`store::transition`], a pure function of
//! the current [`AppState`] and an [`Action`]. [`SessionStore`] owns the
//! live snapshot and serializes dispatches; the `advisor` module bridges the
//! asynchronous AI collaborators back into ordinary actions.

pub mod advisor;
pub mod calculators;
pub mod checklist;
pub mod constants;
pub mod credit;
pub mod errors;
pub mod events;
pub mod gamification;
pub mod gating;
pub mod lessons;
pub mod notifications;
pub mod onboarding;
pub mod session;
pub mod settings;
pub mod store;
pub mod subscription;
pub mod users;
pub mod utils;
pub mod wallet;

// Re-export the session entry points
pub use session::SessionStore;
pub use store::{reduce, transition, Action, AppState, Transition, TransitionContext};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
