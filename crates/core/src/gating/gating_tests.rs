use super::*;
use crate::store::AppState;
use crate::users::{Currency, User};

fn session(onboarding: bool, tutorial: bool, guided_setup: bool) -> AppState {
    let mut user = User::new("Ana", "ana@example.com", Currency::default());
    user.has_completed_onboarding = onboarding;
    user.has_completed_tutorial = tutorial;
    user.has_completed_guided_setup = guided_setup;
    AppState::signed_in(user)
}

mod screens {
    use super::*;

    #[test]
    fn test_logged_out_shows_auth_flow() {
        assert_eq!(
            resolve_screen(&AppState::logged_out(), AppPage::Home),
            Screen::AuthFlow
        );
    }

    #[test]
    fn test_authenticated_without_user_is_loading() {
        let state = AppState {
            is_authenticated: true,
            ..AppState::logged_out()
        };
        assert_eq!(resolve_screen(&state, AppPage::Home), Screen::Loading);
    }

    #[test]
    fn test_steps_are_gated_in_order() {
        let page = AppPage::Lessons;
        assert_eq!(
            resolve_screen(&session(false, true, true), page),
            Screen::Onboarding
        );
        assert_eq!(
            resolve_screen(&session(true, false, true), page),
            Screen::Tutorial
        );
        assert_eq!(
            resolve_screen(&session(true, true, false), page),
            Screen::GuidedSetup
        );
        assert_eq!(
            resolve_screen(&session(true, true, true), page),
            Screen::MainApp(AppPage::Lessons)
        );
    }

    #[test]
    fn test_screen_serialization() {
        let json = serde_json::to_string(&Screen::MainApp(AppPage::CalculatorHistory)).unwrap();
        assert_eq!(json, r#"{"screen":"mainApp","page":"calculatorHistory"}"#);
        let json = serde_json::to_string(&Screen::GuidedSetup).unwrap();
        assert_eq!(json, r#"{"screen":"guidedSetup"}"#);
    }
}

mod navigation {
    use super::*;

    #[test]
    fn test_primary_pages_map_to_themselves() {
        for tab in [
            NavTab::Home,
            NavTab::Goals,
            NavTab::Finanzas,
            NavTab::Lessons,
            NavTab::Profile,
        ] {
            assert_eq!(active_nav_tab(AppPage::from(tab)), tab);
        }
    }

    #[test]
    fn test_sub_pages_map_to_parent_tab() {
        for page in [
            AppPage::WalletPage,
            AppPage::Marketplace,
            AppPage::CalculatorHistory,
            AppPage::Checklist,
        ] {
            assert_eq!(active_nav_tab(page), NavTab::Finanzas);
        }
        for page in [
            AppPage::History,
            AppPage::Subscription,
            AppPage::Faq,
            AppPage::Settings,
        ] {
            assert_eq!(active_nav_tab(page), NavTab::Profile);
        }
    }

    #[test]
    fn test_unmapped_pages_fall_back_to_home() {
        assert_eq!(active_nav_tab(AppPage::Wallet), NavTab::Home);
        assert_eq!(active_nav_tab(AppPage::GoalsPage), NavTab::Home);
    }

    #[test]
    fn test_header_visibility() {
        assert!(is_header_visible(AppPage::Home, false));
        assert!(!is_header_visible(AppPage::Home, true));
        assert!(!is_header_visible(AppPage::Settings, false));
        assert!(is_nav_visible(false));
        assert!(!is_nav_visible(true));
    }
}
