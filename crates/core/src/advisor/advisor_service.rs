use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, warn};

use super::advisor_model::{
    is_verdict_ok, usable_plan, DocumentUpload, DOCUMENT_ANALYSIS_ERROR,
    DOCUMENT_ANALYSIS_FALLBACK, DOCUMENT_ANALYSIS_UNAVAILABLE, INITIAL_PLAN_FALLBACK,
    NEXT_PLAN_FALLBACK,
};
use super::advisor_traits::{DocumentAnalyzer, PlanGenerator};
use crate::checklist::{build_checklist, is_checklist_complete, UploadedFileState};
use crate::errors::{AdvisorError, Result};
use crate::onboarding::{calculate_initial_profile, OnboardingData};
use crate::session::SessionStore;
use crate::store::Action;
use crate::users::ActionPlanItem;

/// Bridges the asynchronous collaborators and the session store.
///
/// Every call resolves to a terminal action: collaborator failures and
/// timeouts are replaced with fixed fallback content before dispatching.
pub struct AdvisorService {
    store: Arc<SessionStore>,
    plan_generator: Arc<dyn PlanGenerator>,
    document_analyzer: Arc<dyn DocumentAnalyzer>,
    timeout: Duration,
}

impl AdvisorService {
    pub fn new(
        store: Arc<SessionStore>,
        plan_generator: Arc<dyn PlanGenerator>,
        document_analyzer: Arc<dyn DocumentAnalyzer>,
    ) -> Self {
        let timeout = store.settings().collaborator_timeout();
        Self {
            store,
            plan_generator,
            document_analyzer,
            timeout,
        }
    }

    async fn bounded<T, F>(&self, call: F) -> std::result::Result<T, AdvisorError>
    where
        F: Future<Output = std::result::Result<T, AdvisorError>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(AdvisorError::Timeout(self.timeout.as_secs())),
        }
    }

    /// First action plan for a set of onboarding answers.
    pub async fn initial_action_plan(&self, answers: &OnboardingData) -> Vec<ActionPlanItem> {
        let generated = self
            .bounded(self.plan_generator.initial_plan(answers))
            .await;
        ActionPlanItem::plan_from_texts(plan_or_fallback(generated, &INITIAL_PLAN_FALLBACK))
    }

    /// Validates the answers, derives the starting profile and plan, then
    /// completes onboarding.
    pub async fn complete_onboarding(&self, answers: OnboardingData) -> Result<bool> {
        answers.validate()?;
        let credit_profile = calculate_initial_profile(&answers);
        let action_plan = self.initial_action_plan(&answers).await;
        Ok(self.store.dispatch(Action::CompleteOnboarding {
            onboarding_data: answers,
            credit_profile,
            action_plan,
        }))
    }

    /// Replaces an exhausted action plan. Returns false when no refresh was
    /// needed.
    pub async fn refresh_action_plan(&self) -> bool {
        let state = self.store.snapshot();
        let Some(user) = state.user.as_ref().filter(|u| u.needs_new_action_plan) else {
            return false;
        };

        let generated = self.bounded(self.plan_generator.next_plan(user)).await;
        let items = ActionPlanItem::plan_from_texts(plan_or_fallback(generated, &NEXT_PLAN_FALLBACK));
        self.store.dispatch(Action::SetNewActionPlan { items })
    }

    /// Runs one document through the analyzer and records the outcome.
    ///
    /// Returns the stored upload state.
    pub async fn analyze_document(&self, upload: DocumentUpload) -> UploadedFileState {
        let DocumentUpload {
            item_id,
            file_name,
            credit_type,
            image,
        } = upload;

        self.store.dispatch(Action::UploadFile {
            item_id: item_id.clone(),
            file_state: UploadedFileState::analyzing(file_name.clone()),
        });

        let verdict = if image.is_empty() {
            warn!("Skipping analysis of '{}': empty image", item_id);
            DOCUMENT_ANALYSIS_ERROR.to_string()
        } else {
            match self.bounded(self.document_analyzer.analyze(&image)).await {
                Ok(text) => text,
                Err(AdvisorError::Unavailable) => {
                    warn!("Document analyzer unavailable for '{}'", item_id);
                    DOCUMENT_ANALYSIS_UNAVAILABLE.to_string()
                }
                Err(e) => {
                    warn!("Document analysis of '{}' failed: {}", item_id, e);
                    DOCUMENT_ANALYSIS_FALLBACK.to_string()
                }
            }
        };

        let accepted = !image.is_empty() && is_verdict_ok(&verdict);
        let file_state = UploadedFileState::analyzed(file_name, accepted, verdict);
        self.store.dispatch(Action::UploadFile {
            item_id,
            file_state: file_state.clone(),
        });

        let state = self.store.snapshot();
        let onboarding = state.user.as_ref().and_then(|u| u.onboarding_data.as_ref());
        let items = build_checklist(onboarding, credit_type);
        if is_checklist_complete(&items, &state.uploaded_files) {
            debug!("Checklist {:?} is complete", credit_type);
            self.store
                .dispatch(Action::SetChecklistCompleted { checklist_type: credit_type });
        }

        file_state
    }

    /// Analyzes several documents concurrently.
    pub async fn analyze_documents(&self, uploads: Vec<DocumentUpload>) -> Vec<UploadedFileState> {
        join_all(uploads.into_iter().map(|u| self.analyze_document(u))).await
    }
}

fn plan_or_fallback(
    generated: std::result::Result<Vec<String>, AdvisorError>,
    fallback: &[&str],
) -> Vec<String> {
    let generated = generated.and_then(|steps| {
        usable_plan(steps)
            .ok_or_else(|| AdvisorError::InvalidResponse("unexpected plan shape".to_string()))
    });
    match generated {
        Ok(steps) => steps,
        Err(e) => {
            warn!("Using fallback action plan: {}", e);
            fallback.iter().map(|s| s.to_string()).collect()
        }
    }
}
