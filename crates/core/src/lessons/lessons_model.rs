//! Lesson and quiz domain models.

use serde::{Deserialize, Serialize};

use crate::constants::QUIZ_PASSING_PERCENTAGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonCategory {
    #[serde(rename = "Conceptos Básicos")]
    CreditBasics,
    #[serde(rename = "Manejo de Deudas")]
    ManagingDebt,
    #[serde(rename = "Construyendo Crédito")]
    BuildingCredit,
    #[serde(rename = "Reportes de Crédito")]
    CreditReports,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonStep {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<QuizOption>,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: LessonCategory,
    /// Minutes
    pub duration: u32,
    pub steps: Vec<LessonStep>,
    pub quiz: Vec<QuizQuestion>,
    #[serde(default)]
    pub is_premium: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LessonStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Failed,
}

impl LessonStatus {
    /// Whether `START_LESSON` may move this status to `InProgress`.
    pub fn can_start(&self) -> bool {
        matches!(self, LessonStatus::NotStarted | LessonStatus::Failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgress {
    pub status: LessonStatus,
    /// Last quiz percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

impl LessonProgress {
    pub fn in_progress() -> Self {
        Self {
            status: LessonStatus::InProgress,
            score: None,
        }
    }
}

/// Quiz percentage rounded down, `None` when the answer counts are inconsistent.
pub fn quiz_percentage(correct: u32, total: u32) -> Option<u8> {
    if total == 0 || correct > total {
        return None;
    }
    let pct = u64::from(correct) * 100 / u64::from(total);
    u8::try_from(pct).ok()
}

/// Exact pass check: `correct / total >= 70%` without rounding.
pub fn is_passing(correct: u32, total: u32) -> bool {
    total > 0
        && u64::from(correct) * 100 >= u64::from(QUIZ_PASSING_PERCENTAGE) * u64::from(total)
}
