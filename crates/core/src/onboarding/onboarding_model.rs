//! Onboarding questionnaire models.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_APPLICANT_AGE;
use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeSource {
    #[serde(rename = "Empleado/a")]
    Empleado,
    #[serde(rename = "Autónomo/a")]
    Autonomo,
    #[serde(rename = "Estudiante")]
    Estudiante,
    #[serde(rename = "Otro")]
    Otro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthlyIncome {
    #[serde(rename = "Menos de 500")]
    Bajo,
    #[serde(rename = "500 - 1,500")]
    MedioBajo,
    #[serde(rename = "1,500 - 3,000")]
    MedioAlto,
    #[serde(rename = "Más de 3,000")]
    Alto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditSituation {
    #[serde(rename = "No tengo historial crediticio")]
    SinHistorial,
    #[serde(rename = "Tengo créditos y estoy al día")]
    AlDia,
    #[serde(rename = "Tengo algunas deudas atrasadas")]
    Atrasado,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditGoal {
    #[serde(rename = "Conseguir mi primer crédito")]
    ObtenerCredito,
    #[serde(rename = "Mejorar mi puntaje actual")]
    MejorarPuntaje,
    #[serde(rename = "Reducir mis deudas")]
    ReducirDeudas,
    #[serde(rename = "Ahorrar para una compra grande")]
    CompraGrande,
}

/// Answers collected by the onboarding questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingData {
    pub age: u32,
    pub income_source: IncomeSource,
    pub monthly_income: MonthlyIncome,
    pub dependents: u32,
    pub credit_situation: CreditSituation,
    pub credit_goal: CreditGoal,
}

impl OnboardingData {
    /// Validates the questionnaire answers.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.age < MIN_APPLICANT_AGE {
            return Err(ValidationError::Underage {
                age: self.age,
                min: MIN_APPLICANT_AGE,
            });
        }
        Ok(())
    }
}
