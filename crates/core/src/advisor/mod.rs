//! Advisor module - the AI plan generator and document analyzer boundary.
//!
//! The collaborators themselves live outside this crate. The service here
//! bounds their latency, replaces failures with fixed fallback content and
//! feeds the outcome back into the session as ordinary actions.

mod advisor_model;
mod advisor_service;
mod advisor_traits;


pub use advisor_model::{
    is_verdict_ok, DocumentUpload, DOCUMENT_ANALYSIS_ERROR, DOCUMENT_ANALYSIS_FALLBACK,
    DOCUMENT_ANALYSIS_UNAVAILABLE, INITIAL_PLAN_FALLBACK, NEXT_PLAN_FALLBACK,
};
pub use advisor_service::AdvisorService;
pub use advisor_traits::{DocumentAnalyzer, PlanGenerator};
