//! Collaborator traits.

use async_trait::async_trait;

use crate::errors::AdvisorError;
use crate::onboarding::OnboardingData;
use crate::users::User;

/// Produces short action plans, usually backed by a language model.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// First plan, from the onboarding answers alone.
    async fn initial_plan(
        &self,
        answers: &OnboardingData,
    ) -> std::result::Result<Vec<String>, AdvisorError>;

    /// Follow-up plan once the previous one is exhausted.
    async fn next_plan(&self, user: &User) -> std::result::Result<Vec<String>, AdvisorError>;
}

/// Reviews a photo of a document.
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    /// Returns a short verdict. A readable, complete document yields text
    /// containing `OK`; anything else is a hint for the user.
    async fn analyze(&self, image: &[u8]) -> std::result::Result<String, AdvisorError>;
}
