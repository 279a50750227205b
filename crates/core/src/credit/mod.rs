//! Credit module - simulated credit profile, scenarios and decision history.

mod credit_model;
mod scenario_catalog;


pub use credit_model::{
    clamp_score, CreditHistoryEntry, CreditProfile, CreditProfilePatch, PaymentHistory, Scenario,
    ScenarioOption,
};
pub use scenario_catalog::default_scenarios;
