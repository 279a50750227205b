//! Onboarding module - questionnaire answers and the initial profile estimate.

mod initial_profile;
mod onboarding_model;


pub use initial_profile::{calculate_initial_profile, feedback_message};
pub use onboarding_model::{
    CreditGoal, CreditSituation, IncomeSource, MonthlyIncome, OnboardingData,
};
