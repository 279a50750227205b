//! The session state snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calculators::CalculatorHistoryEntry;
use crate::checklist::{CreditType, UploadedFileState};
use crate::credit::{default_scenarios, CreditHistoryEntry, Scenario};
use crate::lessons::{default_lessons, Lesson, LessonProgress, LessonStatus};
use crate::notifications::{unread_count, Notification};
use crate::users::User;
use crate::wallet::{Goal, Transaction};

/// Everything the presentation layer may read about a session.
///
/// Ledgers (`credit_history`, `transactions`, `notifications`,
/// `calculator_history`) are ordered most-recent-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub scenarios: Vec<Scenario>,
    pub current_scenario_index: usize,
    pub credit_history: Vec<CreditHistoryEntry>,
    pub lessons: Vec<Lesson>,
    pub goals: Vec<Goal>,
    pub transactions: Vec<Transaction>,
    pub lesson_progress: BTreeMap<String, LessonProgress>,
    pub uploaded_files: BTreeMap<String, UploadedFileState>,
    pub completed_checklists: BTreeMap<CreditType, bool>,
    pub notifications: Vec<Notification>,
    pub calculator_history: Vec<CalculatorHistoryEntry>,
}

impl AppState {
    /// Canonical logged-out state: built-in content, empty ledgers.
    pub fn logged_out() -> Self {
        AppState {
            is_authenticated: false,
            user: None,
            scenarios: default_scenarios(),
            current_scenario_index: 0,
            credit_history: Vec::new(),
            lessons: default_lessons(),
            goals: Vec::new(),
            transactions: Vec::new(),
            lesson_progress: BTreeMap::new(),
            uploaded_files: BTreeMap::new(),
            completed_checklists: BTreeMap::new(),
            notifications: Vec::new(),
            calculator_history: Vec::new(),
        }
    }

    /// Fresh session for a newly authenticated user.
    pub fn signed_in(user: User) -> Self {
        AppState {
            is_authenticated: true,
            user: Some(user),
            ..AppState::logged_out()
        }
    }

    /// Scenario the user should answer next.
    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.scenarios.get(self.current_scenario_index)
    }

    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    pub fn lesson_status(&self, lesson_id: &str) -> LessonStatus {
        self.lesson_progress
            .get(lesson_id)
            .map(|p| p.status)
            .unwrap_or_default()
    }

    pub fn goal(&self, goal_id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == goal_id)
    }

    pub fn is_checklist_completed(&self, credit_type: CreditType) -> bool {
        self.completed_checklists
            .get(&credit_type)
            .copied()
            .unwrap_or(false)
    }

    pub fn unread_notifications(&self) -> usize {
        unread_count(&self.notifications)
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::logged_out()
    }
}
