//! Users module - identity, preferences and per-user progress.

mod currency;
mod users_model;

#[cfg(test)]
mod users_model_tests;

pub use currency::{supported_currencies, Currency};
pub use users_model::{
    avatar_url, ActionPlanItem, Language, NotificationPreferences, ProfileUpdate, SettingsUpdate,
    SubscriptionTier, Theme, User,
};
