//! Gating module - which top-level screen a session shows.
//!
//! Everything here is derived from the state on every read and never stored.

mod navigation;
mod screen;

#[cfg(test)]
mod gating_tests;

pub use navigation::{active_nav_tab, is_header_visible, is_nav_visible, AppPage, NavTab};
pub use screen::{resolve_screen, Screen};
