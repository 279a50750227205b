//! Subscription module - which features the premium tier unlocks.

use serde::{Deserialize, Serialize};

use crate::calculators::CalculatorId;
use crate::lessons::{Lesson, QuizQuestion};
use crate::users::{SubscriptionTier, User};

/// Features gated behind the premium subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PremiumFeature {
    PremiumLesson,
    FullQuiz,
    PremiumCalculator,
    AiChat,
    AiGoalSuggestions,
    PremiumMarketplaceProduct,
}

/// Whether `user` may use `feature`. Nobody is entitled without a session.
pub fn is_feature_unlocked(user: Option<&User>, feature: PremiumFeature) -> bool {
    match feature {
        PremiumFeature::PremiumLesson
        | PremiumFeature::FullQuiz
        | PremiumFeature::PremiumCalculator
        | PremiumFeature::AiChat
        | PremiumFeature::AiGoalSuggestions
        | PremiumFeature::PremiumMarketplaceProduct => user.is_some_and(User::is_premium),
    }
}

pub fn can_open_lesson(user: Option<&User>, lesson: &Lesson) -> bool {
    !lesson.is_premium || is_feature_unlocked(user, PremiumFeature::PremiumLesson)
}

pub fn can_use_calculator(user: Option<&User>, calculator: CalculatorId) -> bool {
    !calculator.is_premium() || is_feature_unlocked(user, PremiumFeature::PremiumCalculator)
}

/// Quiz questions shown to a subscriber of `tier`.
///
/// Free users only see the first question.
pub fn visible_quiz(lesson: &Lesson, tier: SubscriptionTier) -> &[QuizQuestion] {
    match tier {
        SubscriptionTier::Premium => &lesson.quiz,
        SubscriptionTier::Free => &lesson.quiz[..lesson.quiz.len().min(1)],
    }
}
