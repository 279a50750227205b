//! The closed set of requests the session state machine accepts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculators::NewCalculation;
use crate::checklist::{CreditType, UploadedFileState};
use crate::credit::{CreditProfile, CreditProfilePatch, Scenario};
use crate::errors::{Error, Result};
use crate::onboarding::OnboardingData;
use crate::users::{ActionPlanItem, Currency, ProfileUpdate, SettingsUpdate};
use crate::wallet::WalletFlow;

/// A tagged request to transition state.
///
/// On the JSON boundary the tag is the `type` field (`"ADD_GOAL"`) and the
/// payload fields sit next to it. Tags this build does not know decode to
/// [`Action::Unknown`], which is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    Login,
    Register {
        name: String,
        email: String,
        /// Accepted for form parity, never stored
        #[serde(default, skip_serializing)]
        password: String,
        currency: Currency,
    },
    Logout,

    CompleteOnboarding {
        onboarding_data: OnboardingData,
        credit_profile: CreditProfile,
        action_plan: Vec<ActionPlanItem>,
    },
    StartReonboarding,
    CompleteTutorial,
    CompleteGuidedSetup,

    UpdateUserProfile(ProfileUpdate),
    UpdateSettings(SettingsUpdate),
    UpdateCreditProfile(CreditProfilePatch),

    AnswerScenario {
        scenario: Scenario,
        option_index: usize,
    },

    AddGoal {
        name: String,
        target_amount: Decimal,
    },
    RemoveGoal {
        goal_id: String,
    },
    AddTransaction {
        amount: Decimal,
        flow: WalletFlow,
        #[serde(default)]
        description: Option<String>,
    },
    AllocateFundsToGoal {
        goal_id: String,
        amount: Decimal,
    },
    WithdrawFundsFromGoal {
        goal_id: String,
        amount: Decimal,
    },

    StartLesson {
        lesson_id: String,
    },
    SubmitQuiz {
        lesson_id: String,
        correct_answers: u32,
        total_questions: u32,
    },

    UpgradeToPremium,
    DowngradeToFree,

    ToggleActionPlanItem {
        item_id: String,
    },
    SetNewActionPlan {
        items: Vec<ActionPlanItem>,
    },
    AddReferralPoints {
        points: u32,
    },
    UpdateStreak,

    UploadFile {
        item_id: String,
        file_state: UploadedFileState,
    },
    RemoveFile {
        item_id: String,
    },
    SetChecklistCompleted {
        checklist_type: CreditType,
    },

    ToggleTheme,
    AddNotification {
        text: String,
    },
    MarkNotificationsAsRead,

    SaveCalculation(NewCalculation),
    DeleteCalculation {
        id: String,
    },

    #[serde(other)]
    Unknown,
}

impl Action {
    /// Decodes an action received as JSON.
    pub fn from_json(json: &str) -> Result<Action> {
        serde_json::from_str(json).map_err(|e| Error::ActionDecode(e.to_string()))
    }

    /// Wire tag of the action, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Login => "LOGIN",
            Action::Register { .. } => "REGISTER",
            Action::Logout => "LOGOUT",
            Action::CompleteOnboarding { .. } => "COMPLETE_ONBOARDING",
            Action::StartReonboarding => "START_REONBOARDING",
            Action::CompleteTutorial => "COMPLETE_TUTORIAL",
            Action::CompleteGuidedSetup => "COMPLETE_GUIDED_SETUP",
            Action::UpdateUserProfile(_) => "UPDATE_USER_PROFILE",
            Action::UpdateSettings(_) => "UPDATE_SETTINGS",
            Action::UpdateCreditProfile(_) => "UPDATE_CREDIT_PROFILE",
            Action::AnswerScenario { .. } => "ANSWER_SCENARIO",
            Action::AddGoal { .. } => "ADD_GOAL",
            Action::RemoveGoal { .. } => "REMOVE_GOAL",
            Action::AddTransaction { .. } => "ADD_TRANSACTION",
            Action::AllocateFundsToGoal { .. } => "ALLOCATE_FUNDS_TO_GOAL",
            Action::WithdrawFundsFromGoal { .. } => "WITHDRAW_FUNDS_FROM_GOAL",
            Action::StartLesson { .. } => "START_LESSON",
            Action::SubmitQuiz { .. } => "SUBMIT_QUIZ",
            Action::UpgradeToPremium => "UPGRADE_TO_PREMIUM",
            Action::DowngradeToFree => "DOWNGRADE_TO_FREE",
            Action::ToggleActionPlanItem { .. } => "TOGGLE_ACTION_PLAN_ITEM",
            Action::SetNewActionPlan { .. } => "SET_NEW_ACTION_PLAN",
            Action::AddReferralPoints { .. } => "ADD_REFERRAL_POINTS",
            Action::UpdateStreak => "UPDATE_STREAK",
            Action::UploadFile { .. } => "UPLOAD_FILE",
            Action::RemoveFile { .. } => "REMOVE_FILE",
            Action::SetChecklistCompleted { .. } => "SET_CHECKLIST_COMPLETED",
            Action::ToggleTheme => "TOGGLE_THEME",
            Action::AddNotification { .. } => "ADD_NOTIFICATION",
            Action::MarkNotificationsAsRead => "MARK_NOTIFICATIONS_AS_READ",
            Action::SaveCalculation(_) => "SAVE_CALCULATION",
            Action::DeleteCalculation { .. } => "DELETE_CALCULATION",
            Action::Unknown => "UNKNOWN",
        }
    }
}
