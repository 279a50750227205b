//! User domain models.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::constants::AVATAR_BASE_URL;
use crate::credit::CreditProfile;
use crate::gamification::{calculate_level, BadgeId, Level};
use crate::onboarding::OnboardingData;

use super::currency::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub daily_streak: bool,
    pub new_lessons: bool,
    pub goal_milestones: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            daily_streak: true,
            new_lessons: true,
            goal_milestones: true,
        }
    }
}

/// One step of the user's action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlanItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl ActionPlanItem {
    /// Builds a fresh, uncompleted plan from step descriptions.
    pub fn plan_from_texts<I, S>(texts: I) -> Vec<ActionPlanItem>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| ActionPlanItem {
                id: format!("ap_{}", index),
                text: text.into(),
                completed: false,
            })
            .collect()
    }
}

/// The authenticated subject of a session.
///
/// Serializes with an extra `level` entry derived from `points`; the level is
/// ignored when a snapshot is read back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: String,
    pub currency: Currency,
    pub language: Language,
    pub theme: Theme,
    pub credit_profile: CreditProfile,
    pub wallet_balance: Decimal,
    pub has_completed_onboarding: bool,
    pub has_completed_tutorial: bool,
    pub has_completed_guided_setup: bool,
    #[serde(default)]
    pub onboarding_data: Option<OnboardingData>,
    pub subscription_tier: SubscriptionTier,
    pub points: u32,
    pub badges: BTreeSet<BadgeId>,
    pub daily_streak: u32,
    pub last_activity_date: Option<NaiveDate>,
    pub action_plan: Option<Vec<ActionPlanItem>>,
    pub needs_new_action_plan: bool,
    pub notification_preferences: NotificationPreferences,
}

impl User {
    /// A user as created by registration or login: default credit profile,
    /// empty wallet and every onboarding step pending.
    pub fn new(name: impl Into<String>, email: impl Into<String>, currency: Currency) -> Self {
        let email = email.into();
        let avatar = avatar_url(&email);
        Self::with_avatar(name, email, avatar, currency)
    }

    pub fn with_avatar(
        name: impl Into<String>,
        email: impl Into<String>,
        avatar: impl Into<String>,
        currency: Currency,
    ) -> Self {
        User {
            name: name.into(),
            email: email.into(),
            phone: None,
            avatar: avatar.into(),
            currency,
            language: Language::default(),
            theme: Theme::default(),
            credit_profile: CreditProfile::default(),
            wallet_balance: Decimal::ZERO,
            has_completed_onboarding: false,
            has_completed_tutorial: false,
            has_completed_guided_setup: false,
            onboarding_data: None,
            subscription_tier: SubscriptionTier::Free,
            points: 0,
            badges: BTreeSet::new(),
            daily_streak: 0,
            last_activity_date: None,
            action_plan: None,
            needs_new_action_plan: false,
            notification_preferences: NotificationPreferences::default(),
        }
    }

    /// Level for the current points. Derived on every read, never stored.
    pub fn level(&self) -> Level {
        calculate_level(self.points)
    }

    pub fn is_premium(&self) -> bool {
        self.subscription_tier == SubscriptionTier::Premium
    }

    pub fn has_badge(&self, badge: BadgeId) -> bool {
        self.badges.contains(&badge)
    }
}

impl Serialize for User {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.onboarding_data.is_some() { 23 } else { 22 };
        let mut user = serializer.serialize_struct("User", fields)?;
        user.serialize_field("name", &self.name)?;
        user.serialize_field("email", &self.email)?;
        user.serialize_field("phone", &self.phone)?;
        user.serialize_field("avatar", &self.avatar)?;
        user.serialize_field("currency", &self.currency)?;
        user.serialize_field("language", &self.language)?;
        user.serialize_field("theme", &self.theme)?;
        user.serialize_field("creditProfile", &self.credit_profile)?;
        user.serialize_field("walletBalance", &self.wallet_balance)?;
        user.serialize_field("hasCompletedOnboarding", &self.has_completed_onboarding)?;
        user.serialize_field("hasCompletedTutorial", &self.has_completed_tutorial)?;
        user.serialize_field("hasCompletedGuidedSetup", &self.has_completed_guided_setup)?;
        match &self.onboarding_data {
            Some(data) => user.serialize_field("onboardingData", data)?,
            None => user.skip_field("onboardingData")?,
        }
        user.serialize_field("subscriptionTier", &self.subscription_tier)?;
        user.serialize_field("points", &self.points)?;
        user.serialize_field("level", &self.level())?;
        user.serialize_field("badges", &self.badges)?;
        user.serialize_field("dailyStreak", &self.daily_streak)?;
        user.serialize_field("lastActivityDate", &self.last_activity_date)?;
        user.serialize_field("actionPlan", &self.action_plan)?;
        user.serialize_field("needsNewActionPlan", &self.needs_new_action_plan)?;
        user.serialize_field(
            "notificationPreferences",
            &self.notification_preferences,
        )?;
        user.end()
    }
}

/// Generated avatar for an identity seed (usually the email).
pub fn avatar_url(seed: &str) -> String {
    format!("{}{}", AVATAR_BASE_URL, seed)
}

/// Partial update of the public profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Full settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub currency: Currency,
    pub language: Language,
    pub notification_preferences: NotificationPreferences,
}
