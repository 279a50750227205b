//! Session configuration.

use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COLLABORATOR_TIMEOUT_SECS, DEFAULT_CURRENCY_CODE, DEMO_USER_AVATAR_SEED,
    DEMO_USER_EMAIL, DEMO_USER_NAME,
};
use crate::errors::{Error, Result};
use crate::users::Currency;
use crate::utils::time_utils::DEFAULT_ACTIVITY_TZ;

/// Identity assigned by `LOGIN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoIdentity {
    pub name: String,
    pub email: String,
    #[serde(default = "default_avatar_seed")]
    pub avatar_seed: String,
}

fn default_avatar_seed() -> String {
    DEMO_USER_AVATAR_SEED.to_string()
}

impl Default for DemoIdentity {
    fn default() -> Self {
        Self {
            name: DEMO_USER_NAME.to_string(),
            email: DEMO_USER_EMAIL.to_string(),
            avatar_seed: default_avatar_seed(),
        }
    }
}

/// Settings a [`SessionStore`](crate::session::SessionStore) is built with.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionSettings {
    /// IANA timezone whose calendar days drive the daily streak
    pub activity_timezone: String,
    pub collaborator_timeout_secs: u64,
    /// ISO code of the currency given to the demo identity
    pub default_currency: String,
    pub demo_identity: DemoIdentity,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            activity_timezone: DEFAULT_ACTIVITY_TZ.name().to_string(),
            collaborator_timeout_secs: DEFAULT_COLLABORATOR_TIMEOUT_SECS,
            default_currency: DEFAULT_CURRENCY_CODE.to_string(),
            demo_identity: DemoIdentity::default(),
        }
    }
}

impl SessionSettings {
    /// Parses and validates settings from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: SessionSettings = serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfigValue(format!("malformed settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.activity_timezone.parse::<Tz>().map_err(|_| {
            Error::InvalidConfigValue(format!(
                "unknown activity timezone '{}'",
                self.activity_timezone
            ))
        })?;

        if self.collaborator_timeout_secs == 0 {
            return Err(Error::InvalidConfigValue(
                "collaboratorTimeoutSecs must be greater than zero".to_string(),
            ));
        }

        if Currency::from_code(&self.default_currency).is_none() {
            return Err(Error::InvalidConfigValue(format!(
                "unsupported default currency '{}'",
                self.default_currency
            )));
        }

        if self.demo_identity.name.trim().is_empty() || self.demo_identity.email.trim().is_empty()
        {
            return Err(Error::InvalidConfigValue(
                "demoIdentity needs a name and an email".to_string(),
            ));
        }
        Ok(())
    }

    /// Timezone for activity dates. Falls back to UTC for names that do not
    /// parse; `validate` reports those.
    pub fn activity_tz(&self) -> Tz {
        self.activity_timezone
            .parse::<Tz>()
            .unwrap_or(DEFAULT_ACTIVITY_TZ)
    }

    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_secs(self.collaborator_timeout_secs)
    }

    pub fn default_currency(&self) -> Currency {
        Currency::from_code(&self.default_currency).unwrap_or_default()
    }
}
