use super::*;
use crate::lessons::{LessonProgress, LessonStatus};
use crate::store::AppState;
use crate::users::{Currency, User};
use crate::wallet::Goal;
use rust_decimal_macros::dec;

mod levels {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(calculate_level(0), Level::NovatoFinanciero);
        assert_eq!(calculate_level(49), Level::NovatoFinanciero);
        assert_eq!(calculate_level(50), Level::AprendizFinanciero);
        assert_eq!(calculate_level(119), Level::AprendizFinanciero);
        assert_eq!(calculate_level(120), Level::PlanificadorConsciente);
        assert_eq!(calculate_level(250), Level::EstrategaDelAhorro);
        assert_eq!(calculate_level(500), Level::MaestroDelCredito);
        assert_eq!(calculate_level(u32::MAX), Level::MaestroDelCredito);
    }

    #[test]
    fn test_levels_are_strictly_increasing() {
        assert_eq!(LEVELS[0].min_points(), 0);
        for pair in LEVELS.windows(2) {
            assert!(pair[0].min_points() < pair[1].min_points());
            assert_eq!(pair[0].next(), Some(pair[1]));
        }
        assert_eq!(Level::MaestroDelCredito.next(), None);
    }

    #[test]
    fn test_points_to_next_level() {
        assert_eq!(points_to_next_level(0), Some(50));
        assert_eq!(points_to_next_level(6), Some(44));
        assert_eq!(points_to_next_level(120), Some(130));
        assert_eq!(points_to_next_level(900), None);
    }

    #[test]
    fn test_level_serializes_as_display_name() {
        let json = serde_json::to_string(&Level::MaestroDelCredito).unwrap();
        assert_eq!(json, "\"Maestro del Crédito\"");
        assert_eq!(Level::NovatoFinanciero.to_string(), "Novato Financiero");
    }
}

mod badges {
    use super::*;

    fn session() -> AppState {
        AppState::signed_in(User::new("Ana", "ana@example.com", Currency::default()))
    }

    fn completed(score: u8) -> LessonProgress {
        LessonProgress {
            status: LessonStatus::Completed,
            score: Some(score),
        }
    }

    fn check(state: &AppState) -> Vec<BadgeId> {
        let user = state.user.as_ref().unwrap();
        check_for_new_badges(user, state)
    }

    #[test]
    fn test_fresh_user_earns_nothing() {
        assert!(check(&session()).is_empty());
    }

    #[test]
    fn test_badges_are_reported_in_rule_order() {
        let mut state = session();
        state.lesson_progress.insert("1".to_string(), completed(100));
        state.goals.push(Goal {
            id: "goal_1".to_string(),
            name: "Viaje".to_string(),
            target_amount: dec!(1000),
            current_amount: dec!(0),
        });
        state.user.as_mut().unwrap().daily_streak = 7;

        assert_eq!(
            check(&state),
            vec![
                BadgeId::FirstLesson,
                BadgeId::PerfectQuiz,
                BadgeId::FirstGoal,
                BadgeId::SevenDayStreak,
            ]
        );
    }

    #[test]
    fn test_held_badges_are_not_reported_again() {
        let mut state = session();
        state.lesson_progress.insert("1".to_string(), completed(80));
        state
            .user
            .as_mut()
            .unwrap()
            .badges
            .insert(BadgeId::FirstLesson);

        assert!(check(&state).is_empty());
    }

    #[test]
    fn test_failed_lessons_do_not_count() {
        let mut state = session();
        state.lesson_progress.insert(
            "1".to_string(),
            LessonProgress {
                status: LessonStatus::Failed,
                score: Some(50),
            },
        );
        assert!(check(&state).is_empty());
    }

    #[test]
    fn test_score_and_scenario_thresholds() {
        let mut state = session();
        state.user.as_mut().unwrap().credit_profile.score = 750;
        assert_eq!(check(&state), vec![BadgeId::PositiveScore]);

        state.user.as_mut().unwrap().credit_profile.score = 749;
        assert!(check(&state).is_empty());
    }

    #[test]
    fn test_five_completed_lessons() {
        let mut state = session();
        for id in 1..=5 {
            state.lesson_progress.insert(id.to_string(), completed(70));
        }
        assert_eq!(check(&state), vec![BadgeId::FirstLesson, BadgeId::FiveLessons]);
    }

    #[test]
    fn test_badge_catalog_matches_ids() {
        for badge in BADGES.iter() {
            assert_eq!(badge.id.badge(), badge);
        }
        assert_eq!(BadgeId::TenScenarios.name(), "Decisor Experto");
        assert_eq!(
            serde_json::to_string(&BadgeId::SevenDayStreak).unwrap(),
            "\"b_seven_day_streak\""
        );
    }
}
