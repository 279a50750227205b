//! Store module - the session state, the actions it accepts and the pure
//! transition function between them.

mod actions;
mod reducer;
mod state;

#[cfg(test)]
mod actions_tests;

pub use actions::Action;
pub use reducer::{reduce, transition, Transition, TransitionContext};
pub use state::AppState;
