//! Initial credit profile estimation from onboarding answers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::onboarding_model::{CreditSituation, MonthlyIncome, OnboardingData};
use crate::credit::{CreditProfile, PaymentHistory};

const BASE_SCORE: i32 = 500;
const SCORE_PER_DEPENDENT: i32 = 5;

fn income_bonus(income: MonthlyIncome) -> i32 {
    match income {
        MonthlyIncome::Bajo => 5,
        MonthlyIncome::MedioBajo => 20,
        MonthlyIncome::MedioAlto => 40,
        MonthlyIncome::Alto => 60,
    }
}

fn situation_bonus(situation: CreditSituation) -> i32 {
    match situation {
        CreditSituation::AlDia => 100,
        CreditSituation::SinHistorial => 10,
        CreditSituation::Atrasado => -100,
    }
}

fn age_bonus(age: u32) -> i32 {
    let age = i32::try_from(age).unwrap_or(i32::MAX);
    let mut bonus = 0;
    if age > 25 {
        bonus += age - 25;
    }
    if age > 35 {
        bonus += age - 35;
    }
    bonus
}

/// Estimates the starting credit profile for a newly onboarded user.
///
/// The score is clamped to the bureau range; people reporting late debts
/// start with a mock balance owed.
pub fn calculate_initial_profile(data: &OnboardingData) -> CreditProfile {
    let dependents = i32::try_from(data.dependents).unwrap_or(i32::MAX);
    let score = BASE_SCORE
        .saturating_add(age_bonus(data.age))
        .saturating_add(income_bonus(data.monthly_income))
        .saturating_add(situation_bonus(data.credit_situation))
        .saturating_sub(dependents.saturating_mul(SCORE_PER_DEPENDENT));

    let debt = if data.credit_situation == CreditSituation::Atrasado {
        dec!(500)
    } else {
        Decimal::ZERO
    };
    let credit_lines = if data.credit_situation == CreditSituation::SinHistorial {
        0
    } else {
        1
    };

    CreditProfile::new(score, debt, credit_lines, PaymentHistory::Regular, 0)
}

/// Encouragement shown next to the estimated score.
pub fn feedback_message(score: i32) -> &'static str {
    if score >= 700 {
        "¡Excelente punto de partida! Tu perfil financiero es sólido. Usemos el simulador para fortalecerlo aún más."
    } else if score >= 600 {
        "¡Tienes una buena base! Hay algunas áreas que podemos mejorar para que alcances tus metas. ¡Vamos a ello!"
    } else {
        "Este es nuestro punto de partida. No te preocupes, juntos construiremos un historial crediticio fuerte. ¡El primer paso es el más importante!"
    }
}
