//! Calculators module - saved calculator runs.
//!
//! The calculators themselves live in the presentation layer; the session
//! only keeps the history of runs the user chose to save.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculatorId {
    Budget,
    SavingsGoal,
    EmergencyFund,
    PersonalLoan,
    CompoundInterest,
    Inflation,
    DebtCapacity,
}

impl CalculatorId {
    /// Calculators reserved for premium subscribers.
    pub fn is_premium(&self) -> bool {
        matches!(self, CalculatorId::Inflation | CalculatorId::DebtCapacity)
    }
}

/// A single input or output of a calculator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalculatorValue {
    Number(f64),
    Text(String),
}

/// A calculator run as submitted by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCalculation {
    pub calculator_id: CalculatorId,
    pub calculator_title: String,
    #[serde(default)]
    pub inputs: BTreeMap<String, CalculatorValue>,
    #[serde(default)]
    pub results: BTreeMap<String, CalculatorValue>,
}

/// A saved calculator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorHistoryEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub calculator_id: CalculatorId,
    pub calculator_title: String,
    pub inputs: BTreeMap<String, CalculatorValue>,
    pub results: BTreeMap<String, CalculatorValue>,
}

impl CalculatorHistoryEntry {
    pub fn from_new(id: String, date: DateTime<Utc>, calculation: NewCalculation) -> Self {
        Self {
            id,
            date,
            calculator_id: calculation.calculator_id,
            calculator_title: calculation.calculator_title,
            inputs: calculation.inputs,
            results: calculation.results,
        }
    }
}
