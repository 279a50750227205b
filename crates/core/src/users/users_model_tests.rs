//! Tests for user models.

#[cfg(test)]
mod tests {
    use crate::gamification::Level;
    use crate::users::{
        supported_currencies, ActionPlanItem, Currency, SubscriptionTier, Theme, User,
    };
    use rust_decimal::Decimal;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("Ana", "ana@example.com", Currency::default());
        assert_eq!(user.avatar, "https://i.pravatar.cc/150?u=ana@example.com");
        assert_eq!(user.credit_profile.score, 650);
        assert_eq!(user.wallet_balance, Decimal::ZERO);
        assert_eq!(user.points, 0);
        assert_eq!(user.level(), Level::NovatoFinanciero);
        assert_eq!(user.subscription_tier, SubscriptionTier::Free);
        assert!(!user.has_completed_onboarding);
        assert!(!user.has_completed_tutorial);
        assert!(!user.has_completed_guided_setup);
        assert!(user.badges.is_empty());
        assert!(user.action_plan.is_none());
    }

    #[test]
    fn test_level_follows_points() {
        let mut user = User::new("Ana", "ana@example.com", Currency::default());
        user.points = 49;
        assert_eq!(user.level(), Level::NovatoFinanciero);
        user.points = 50;
        assert_eq!(user.level(), Level::AprendizFinanciero);
        user.points = 10_000;
        assert_eq!(user.level(), Level::MaestroDelCredito);
    }

    #[test]
    fn test_currency_lookup() {
        assert_eq!(Currency::default().code, "PEN");
        assert_eq!(Currency::from_code("usd").map(|c| c.symbol), Some("$".to_string()));
        assert!(Currency::from_code("JPY").is_none());
        assert_eq!(supported_currencies().len(), 7);
    }

    #[test]
    fn test_theme_toggles() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_plan_from_texts_assigns_positional_ids() {
        let plan = ActionPlanItem::plan_from_texts(["Uno", "Dos"]);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].id, "ap_0");
        assert_eq!(plan[1].id, "ap_1");
        assert!(plan.iter().all(|item| !item.completed));
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User::new("Ana", "ana@example.com", Currency::default());
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["hasCompletedOnboarding"], false);
        assert_eq!(json["subscriptionTier"], "free");
        assert_eq!(json["creditProfile"]["paymentHistory"], "Bueno");
        assert!(json.get("onboardingData").is_none());
    }

    #[test]
    fn test_user_snapshot_exposes_derived_level() {
        let mut user = User::new("Ana", "ana@example.com", Currency::default());
        user.points = 130;
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["points"], 130);
        assert_eq!(json["level"], "Planificador Consciente");

        let restored: User = serde_json::from_value(json).unwrap();
        assert_eq!(restored, user);
    }
}
