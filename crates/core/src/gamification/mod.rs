//! Gamification module - levels derived from points and badge eligibility.

mod badges;
mod levels;

#[cfg(test)]
mod gamification_tests;

pub use badges::{check_for_new_badges, Badge, BadgeId, BADGES};
pub use levels::{calculate_level, points_to_next_level, Level, LEVELS};
