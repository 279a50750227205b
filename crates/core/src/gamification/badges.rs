use serde::{Deserialize, Serialize};

use crate::lessons::LessonStatus;
use crate::store::AppState;
use crate::users::User;

/// Identifier of a permanent achievement.
///
/// Variant order is the rule evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BadgeId {
    #[serde(rename = "b_first_lesson")]
    FirstLesson,
    #[serde(rename = "b_five_lessons")]
    FiveLessons,
    #[serde(rename = "b_perfect_quiz")]
    PerfectQuiz,
    #[serde(rename = "b_first_goal")]
    FirstGoal,
    #[serde(rename = "b_ten_scenarios")]
    TenScenarios,
    #[serde(rename = "b_positive_score")]
    PositiveScore,
    #[serde(rename = "b_seven_day_streak")]
    SevenDayStreak,
}

/// Display metadata for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const BADGES: [Badge; 7] = [
    Badge {
        id: BadgeId::FirstLesson,
        name: "Primera Lección",
        description: "Completaste tu primera lección.",
        icon: "BookOpenIcon",
    },
    Badge {
        id: BadgeId::FiveLessons,
        name: "Estudiante Dedicado",
        description: "Completaste 5 lecciones.",
        icon: "LessonsIcon",
    },
    Badge {
        id: BadgeId::PerfectQuiz,
        name: "Conocimiento Perfecto",
        description: "Obtuviste 100% en un quiz.",
        icon: "LessonsIcon",
    },
    Badge {
        id: BadgeId::FirstGoal,
        name: "Soñador Activo",
        description: "Creaste tu primera meta de ahorro.",
        icon: "GoalsIcon",
    },
    Badge {
        id: BadgeId::TenScenarios,
        name: "Decisor Experto",
        description: "Completaste 10 escenarios.",
        icon: "HistoryIcon",
    },
    Badge {
        id: BadgeId::PositiveScore,
        name: "En la Cima",
        description: "Alcanzaste un puntaje de 750.",
        icon: "StarIcon",
    },
    Badge {
        id: BadgeId::SevenDayStreak,
        name: "Racha de 7 días",
        description: "Mantuviste tu racha por 7 días.",
        icon: "LinkIcon",
    },
];

const DEDICATED_STUDENT_LESSONS: usize = 5;
const EXPERT_DECIDER_SCENARIOS: usize = 10;
const TOP_SCORE: i32 = 750;
const STREAK_DAYS: u32 = 7;
const PERFECT_QUIZ: u8 = 100;

impl BadgeId {
    pub fn badge(&self) -> &'static Badge {
        // BADGES is declared in variant order
        &BADGES[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        self.badge().name
    }
}

fn completed_lessons(state: &AppState) -> usize {
    state
        .lesson_progress
        .values()
        .filter(|p| p.status == LessonStatus::Completed)
        .count()
}

fn qualifies(badge: BadgeId, user: &User, state: &AppState) -> bool {
    match badge {
        BadgeId::FirstLesson => completed_lessons(state) > 0,
        BadgeId::FiveLessons => completed_lessons(state) >= DEDICATED_STUDENT_LESSONS,
        BadgeId::PerfectQuiz => state
            .lesson_progress
            .values()
            .any(|p| p.score == Some(PERFECT_QUIZ)),
        BadgeId::FirstGoal => !state.goals.is_empty(),
        BadgeId::TenScenarios => state.credit_history.len() >= EXPERT_DECIDER_SCENARIOS,
        BadgeId::PositiveScore => user.credit_profile.score >= TOP_SCORE,
        BadgeId::SevenDayStreak => user.daily_streak >= STREAK_DAYS,
    }
}

/// Scans `state` for badges `user` qualifies for but does not hold yet.
///
/// Returned in rule order. Pure: merging into the user's badge set is up to
/// the caller.
pub fn check_for_new_badges(user: &User, state: &AppState) -> Vec<BadgeId> {
    BADGES
        .iter()
        .map(|b| b.id)
        .filter(|id| !user.badges.contains(id))
        .filter(|id| qualifies(*id, user, state))
        .collect()
}
