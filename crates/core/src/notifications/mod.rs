//! Notifications module.

mod notifications_model;

pub use notifications_model::{unread_count, Notification, NotificationKind};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamification::BadgeId;
    use chrono::Utc;

    #[test]
    fn test_notification_texts() {
        assert_eq!(
            NotificationKind::DecisionPoints(2).text(),
            "¡Ganaste 2 puntos por una buena decisión!"
        );
        assert_eq!(
            NotificationKind::BadgeUnlocked(BadgeId::FirstGoal).text(),
            "¡Nueva medalla desbloqueada: Soñador Activo! 🏅"
        );
        assert_eq!(
            NotificationKind::GoalCreated("Viaje".to_string()).text(),
            "🎯 Nueva meta creada: \"Viaje\"."
        );
        assert_eq!(NotificationKind::Custom("Hola".to_string()).text(), "Hola");
    }

    #[test]
    fn test_unread_count() {
        let make = |read| Notification {
            id: "n".to_string(),
            text: "t".to_string(),
            date: Utc::now(),
            read,
        };
        assert_eq!(unread_count(&[make(false), make(true), make(false)]), 2);
        assert_eq!(unread_count(&[]), 0);
    }
}
