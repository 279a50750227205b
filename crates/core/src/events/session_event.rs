//! Session event types.

use serde::{Deserialize, Serialize};

use crate::checklist::CreditType;
use crate::gamification::BadgeId;

/// Facts about a session, emitted after the state has been replaced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The session signed in or out.
    AuthenticationChanged { is_authenticated: bool },

    /// Every item of the action plan is completed; a replacement plan is due.
    ActionPlanExhausted,

    /// Badges earned by a single transition, in rule order.
    ///
    /// Only the first one produced a notification.
    BadgesUnlocked { badges: Vec<BadgeId> },

    /// A document checklist was marked as complete.
    ChecklistCompleted { checklist_type: CreditType },
}

impl SessionEvent {
    pub fn authentication_changed(is_authenticated: bool) -> Self {
        Self::AuthenticationChanged { is_authenticated }
    }

    pub fn badges_unlocked(badges: Vec<BadgeId>) -> Self {
        Self::BadgesUnlocked { badges }
    }

    pub fn checklist_completed(checklist_type: CreditType) -> Self {
        Self::ChecklistCompleted { checklist_type }
    }
}
