//! Credit profile and scenario domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_CREDIT_SCORE, MIN_CREDIT_SCORE};

/// Clamps a raw score into the simulated bureau range.
pub fn clamp_score(score: i32) -> i32 {
    score.clamp(MIN_CREDIT_SCORE, MAX_CREDIT_SCORE)
}

/// Qualitative payment track record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentHistory {
    Excelente,
    #[default]
    Bueno,
    Regular,
    Malo,
}

/// Simulated credit bureau profile owned by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditProfile {
    /// Always within `MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE`
    pub score: i32,
    pub debt: Decimal,
    pub credit_lines: u32,
    pub payment_history: PaymentHistory,
    /// Percentage of available credit in use (0-100)
    pub credit_utilization: u8,
}

impl CreditProfile {
    pub fn new(
        score: i32,
        debt: Decimal,
        credit_lines: u32,
        payment_history: PaymentHistory,
        credit_utilization: u8,
    ) -> Self {
        Self {
            score: clamp_score(score),
            debt: debt.max(Decimal::ZERO),
            credit_lines,
            payment_history,
            credit_utilization: credit_utilization.min(100),
        }
    }

    /// Returns a copy with the score moved by `impact` and clamped.
    pub fn with_score_impact(&self, impact: i32) -> Self {
        Self {
            score: clamp_score(self.score.saturating_add(impact)),
            ..self.clone()
        }
    }

    /// Shallow-merges a patch. The score is not part of a patch.
    pub fn merged(&self, patch: &CreditProfilePatch) -> Self {
        Self {
            score: self.score,
            debt: patch.debt.unwrap_or(self.debt),
            credit_lines: patch.credit_lines.unwrap_or(self.credit_lines),
            payment_history: patch.payment_history.unwrap_or(self.payment_history),
            credit_utilization: patch.credit_utilization.unwrap_or(self.credit_utilization),
        }
    }
}

impl Default for CreditProfile {
    /// Profile assigned to a freshly registered user before onboarding.
    fn default() -> Self {
        Self {
            score: 650,
            debt: dec!(500),
            credit_lines: 1,
            payment_history: PaymentHistory::Bueno,
            credit_utilization: 30,
        }
    }
}

/// User-editable subset of a credit profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_lines: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_utilization: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_history: Option<PaymentHistory>,
}

impl CreditProfilePatch {
    /// A patch is applicable when every field it sets stays within the
    /// profile's invariants.
    pub fn is_valid(&self) -> bool {
        self.debt.map_or(true, |d| d >= Decimal::ZERO)
            && self.credit_utilization.map_or(true, |u| u <= 100)
    }

    pub fn is_empty(&self) -> bool {
        self.debt.is_none()
            && self.credit_lines.is_none()
            && self.credit_utilization.is_none()
            && self.payment_history.is_none()
    }
}

/// One answer to a decision scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOption {
    pub text: String,
    /// Signed effect on the credit score
    pub impact: i32,
    pub explanation: String,
}

/// A decision scenario shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub description: String,
    pub options: Vec<ScenarioOption>,
}

/// Audit record of an answered scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditHistoryEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub scenario_title: String,
    pub decision: String,
    pub impact: i32,
    pub explanation: String,
}
