//! Notification domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::gamification::BadgeId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub text: String,
    pub date: DateTime<Utc>,
    pub read: bool,
}

/// A user-visible consequence of a transition.
///
/// Transitions report these alongside the next state; the text is only
/// rendered when the notification is materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    DecisionPoints(u32),
    LessonCompleted(u32),
    TaskCompleted(u32),
    PlanCompleted,
    BadgeUnlocked(BadgeId),
    Streak(u32),
    GoalCreated(String),
    SettingsSaved,
    PremiumUpgraded,
    PremiumCancelled,
    ReferralPoints(u32),
    Custom(String),
}

impl NotificationKind {
    pub fn text(&self) -> String {
        match self {
            NotificationKind::DecisionPoints(points) => {
                format!("¡Ganaste {} puntos por una buena decisión!", points)
            }
            NotificationKind::LessonCompleted(points) => {
                format!("🎓 ¡Lección completada! Ganaste {} puntos.", points)
            }
            NotificationKind::TaskCompleted(points) => {
                format!("✅ ¡Tarea completada! Ganaste {} puntos.", points)
            }
            NotificationKind::PlanCompleted => {
                "🚀 ¡Plan completado! Generando tus próximos pasos...".to_string()
            }
            NotificationKind::BadgeUnlocked(badge) => {
                format!("¡Nueva medalla desbloqueada: {}! 🏅", badge.name())
            }
            NotificationKind::Streak(days) => format!("🔥 ¡Racha de {} días! Sigue así.", days),
            NotificationKind::GoalCreated(name) => format!("🎯 Nueva meta creada: \"{}\".", name),
            NotificationKind::SettingsSaved => "Tu configuración ha sido guardada.".to_string(),
            NotificationKind::PremiumUpgraded => {
                "¡Felicidades! 🎉 Has mejorado a Premium.".to_string()
            }
            NotificationKind::PremiumCancelled => {
                "Tu suscripción Premium ha sido cancelada.".to_string()
            }
            NotificationKind::ReferralPoints(points) => {
                format!("🎁 ¡Ganaste {} puntos por invitar a un amigo!", points)
            }
            NotificationKind::Custom(text) => text.clone(),
        }
    }
}

/// Number of notifications not yet marked as read.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}
