//! The pure transition function of the session state machine.
//!
//! Every transition first computes the next state together with the list of
//! user-visible consequences ([`NotificationKind`]). The two are composed
//! only when a [`Transition`] is committed, so a transition that unlocks
//! several badges at once still reports all of them.

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;

use super::actions::Action;
use super::state::AppState;
use crate::calculators::{CalculatorHistoryEntry, NewCalculation};
use crate::checklist::{CreditType, UploadedFileState};
use crate::constants::{POINTS_PER_ACTION_ITEM, POINTS_PER_GOOD_DECISION, POINTS_PER_LESSON};
use crate::credit::{CreditHistoryEntry, CreditProfile, CreditProfilePatch, Scenario};
use crate::gamification::{check_for_new_badges, BadgeId};
use crate::lessons::{is_passing, quiz_percentage, LessonProgress, LessonStatus};
use crate::notifications::{Notification, NotificationKind};
use crate::onboarding::OnboardingData;
use crate::settings::SessionSettings;
use crate::users::{
    avatar_url, ActionPlanItem, Currency, ProfileUpdate, SettingsUpdate, SubscriptionTier, User,
};
use crate::utils::id_utils::{
    new_id, CALCULATION_ID_PREFIX, GOAL_ID_PREFIX, HISTORY_ID_PREFIX, NOTIFICATION_ID_PREFIX,
    TRANSACTION_ID_PREFIX,
};
use crate::utils::time_utils::{activity_date_from_utc, previous_day};
use crate::wallet::{Goal, Transaction, TransactionType, WalletFlow};

/// Everything a transition may read besides the state and the action.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    pub now: DateTime<Utc>,
    /// Calendar day of `now` in the configured activity timezone
    pub today: NaiveDate,
    pub settings: &'a SessionSettings,
}

impl<'a> TransitionContext<'a> {
    pub fn new(now: DateTime<Utc>, settings: &'a SessionSettings) -> Self {
        Self {
            now,
            today: activity_date_from_utc(now, settings.activity_tz()),
            settings,
        }
    }
}

/// A transition that applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Next state, without the notifications below
    pub state: AppState,
    /// Consequences to tell the user about, in the order they happened
    pub notifications: Vec<NotificationKind>,
    /// Badges earned by this transition, in rule order
    pub unlocked_badges: Vec<BadgeId>,
}

impl Transition {
    fn new(state: AppState) -> Self {
        Self {
            state,
            notifications: Vec::new(),
            unlocked_badges: Vec::new(),
        }
    }

    fn notify(mut self, kind: NotificationKind) -> Self {
        self.notifications.push(kind);
        self
    }

    fn notify_if(self, condition: bool, kind: NotificationKind) -> Self {
        if condition {
            self.notify(kind)
        } else {
            self
        }
    }

    /// Merges newly qualifying badges into the user's set.
    ///
    /// Only the first new badge is announced; all of them are kept in
    /// `unlocked_badges`.
    fn with_new_badges(mut self) -> Self {
        let earned = match self.state.user.as_ref() {
            Some(user) => check_for_new_badges(user, &self.state),
            None => return self,
        };
        let Some(first) = earned.first().copied() else {
            return self;
        };
        if let Some(user) = self.state.user.as_mut() {
            user.badges.extend(earned.iter().copied());
        }
        self.unlocked_badges = earned;
        self.notify(NotificationKind::BadgeUnlocked(first))
    }

    /// Materializes the notifications into the state, newest first.
    pub fn commit(self, now: DateTime<Utc>) -> AppState {
        let Transition {
            mut state,
            notifications,
            ..
        } = self;
        if notifications.is_empty() {
            return state;
        }
        let mut materialized: Vec<Notification> = notifications
            .iter()
            .rev()
            .map(|kind| Notification {
                id: new_id(NOTIFICATION_ID_PREFIX),
                text: kind.text(),
                date: now,
                read: false,
            })
            .collect();
        materialized.append(&mut state.notifications);
        state.notifications = materialized;
        state
    }
}

/// Computes the next state. Rejected and unknown actions return an equal copy
/// of `state`.
pub fn reduce(state: &AppState, action: Action, ctx: &TransitionContext<'_>) -> AppState {
    match transition(state, action, ctx) {
        Some(next) => next.commit(ctx.now),
        None => state.clone(),
    }
}

/// Computes the transition for `action`, or `None` when it does not apply.
pub fn transition(
    state: &AppState,
    action: Action,
    ctx: &TransitionContext<'_>,
) -> Option<Transition> {
    match action {
        Action::Register {
            name,
            email,
            currency,
            ..
        } => register(name, email, currency),
        Action::Login => Some(login(ctx.settings)),
        Action::Logout => Some(Transition::new(AppState::logged_out())),

        Action::CompleteOnboarding {
            onboarding_data,
            credit_profile,
            action_plan,
        } => complete_onboarding(state, onboarding_data, credit_profile, action_plan),
        Action::StartReonboarding => {
            update_user(state, "START_REONBOARDING", |u| {
                u.has_completed_onboarding = false
            })
        }
        Action::CompleteTutorial => update_user(state, "COMPLETE_TUTORIAL", |u| {
            u.has_completed_tutorial = true
        }),
        Action::CompleteGuidedSetup => update_user(state, "COMPLETE_GUIDED_SETUP", |u| {
            u.has_completed_guided_setup = true
        }),

        Action::UpdateUserProfile(update) => update_profile(state, update),
        Action::UpdateSettings(update) => update_settings(state, update),
        Action::UpdateCreditProfile(patch) => update_credit_profile(state, patch),

        Action::AnswerScenario {
            scenario,
            option_index,
        } => answer_scenario(state, scenario, option_index, ctx),

        Action::AddGoal {
            name,
            target_amount,
        } => add_goal(state, name, target_amount),
        Action::RemoveGoal { goal_id } => remove_goal(state, &goal_id),
        Action::AddTransaction {
            amount,
            flow,
            description,
        } => add_transaction(state, amount, flow, description, ctx),
        Action::AllocateFundsToGoal { goal_id, amount } => {
            allocate_to_goal(state, goal_id, amount, ctx)
        }
        Action::WithdrawFundsFromGoal { goal_id, amount } => {
            withdraw_from_goal(state, goal_id, amount, ctx)
        }

        Action::StartLesson { lesson_id } => start_lesson(state, lesson_id),
        Action::SubmitQuiz {
            lesson_id,
            correct_answers,
            total_questions,
        } => submit_quiz(state, lesson_id, correct_answers, total_questions),

        Action::UpgradeToPremium => update_user(state, "UPGRADE_TO_PREMIUM", |u| {
            u.subscription_tier = SubscriptionTier::Premium
        })
        .map(|t| t.notify(NotificationKind::PremiumUpgraded)),
        Action::DowngradeToFree => update_user(state, "DOWNGRADE_TO_FREE", |u| {
            u.subscription_tier = SubscriptionTier::Free
        })
        .map(|t| t.notify(NotificationKind::PremiumCancelled)),

        Action::ToggleActionPlanItem { item_id } => toggle_action_plan_item(state, &item_id),
        Action::SetNewActionPlan { items } => update_user(state, "SET_NEW_ACTION_PLAN", |u| {
            u.action_plan = Some(items);
            u.needs_new_action_plan = false;
        }),
        Action::AddReferralPoints { points } => add_referral_points(state, points),
        Action::UpdateStreak => update_streak(state, ctx.today),

        Action::UploadFile { item_id, file_state } => upload_file(state, item_id, file_state),
        Action::RemoveFile { item_id } => remove_file(state, &item_id),
        Action::SetChecklistCompleted { checklist_type } => {
            set_checklist_completed(state, checklist_type)
        }

        Action::ToggleTheme => update_user(state, "TOGGLE_THEME", |u| u.theme = u.theme.toggled()),
        Action::AddNotification { text } => {
            Some(Transition::new(state.clone()).notify(NotificationKind::Custom(text)))
        }
        Action::MarkNotificationsAsRead => mark_notifications_as_read(state),

        Action::SaveCalculation(calculation) => Some(save_calculation(state, calculation, ctx)),
        Action::DeleteCalculation { id } => delete_calculation(state, &id),

        Action::Unknown => None,
    }
}

fn rejected(kind: &str, reason: &str) -> Option<Transition> {
    debug!("{} ignored: {}", kind, reason);
    None
}

fn require_user<'s>(state: &'s AppState, kind: &str) -> Option<&'s User> {
    if state.user.is_none() {
        debug!("{} ignored: no user in session", kind);
    }
    state.user.as_ref()
}

/// Applies `f` to a copy of the session user.
fn update_user<F>(state: &AppState, kind: &str, f: F) -> Option<Transition>
where
    F: FnOnce(&mut User),
{
    require_user(state, kind)?;
    let mut next = state.clone();
    if let Some(user) = next.user.as_mut() {
        f(user);
    }
    Some(Transition::new(next))
}

fn award_points(user: &mut User, points: u32) {
    user.points = user.points.saturating_add(points);
}

fn ledger_entry(
    transaction_type: TransactionType,
    amount: Decimal,
    related_goal: Option<String>,
    description: Option<String>,
    ctx: &TransitionContext<'_>,
) -> Transaction {
    Transaction {
        id: new_id(TRANSACTION_ID_PREFIX),
        date: ctx.now,
        transaction_type,
        amount,
        related_goal,
        description,
    }
}

fn register(name: String, email: String, currency: Currency) -> Option<Transition> {
    let (name, email) = (name.trim(), email.trim());
    if name.is_empty() || email.is_empty() {
        return rejected("REGISTER", "name and email are required");
    }
    if !currency.is_supported() {
        return rejected("REGISTER", "unsupported currency");
    }
    let user = User::new(name, email, currency);
    Some(Transition::new(AppState::signed_in(user)))
}

fn login(settings: &SessionSettings) -> Transition {
    let identity = &settings.demo_identity;
    let user = User::with_avatar(
        identity.name.clone(),
        identity.email.clone(),
        avatar_url(&identity.avatar_seed),
        settings.default_currency(),
    );
    Transition::new(AppState::signed_in(user))
}

fn complete_onboarding(
    state: &AppState,
    data: OnboardingData,
    profile: CreditProfile,
    plan: Vec<ActionPlanItem>,
) -> Option<Transition> {
    if let Err(e) = data.validate() {
        debug!("COMPLETE_ONBOARDING ignored: {}", e);
        return None;
    }
    let profile = CreditProfile::new(
        profile.score,
        profile.debt,
        profile.credit_lines,
        profile.payment_history,
        profile.credit_utilization,
    );
    update_user(state, "COMPLETE_ONBOARDING", |u| {
        u.has_completed_onboarding = true;
        u.onboarding_data = Some(data);
        u.credit_profile = profile;
        u.action_plan = Some(plan);
        u.needs_new_action_plan = false;
    })
}

fn update_profile(state: &AppState, update: ProfileUpdate) -> Option<Transition> {
    update_user(state, "UPDATE_USER_PROFILE", |u| {
        if let Some(name) = update.name {
            u.name = name;
        }
        if let Some(avatar) = update.avatar {
            u.avatar = avatar;
        }
    })
}

fn update_settings(state: &AppState, update: SettingsUpdate) -> Option<Transition> {
    if !update.currency.is_supported() {
        return rejected("UPDATE_SETTINGS", "unsupported currency");
    }
    update_user(state, "UPDATE_SETTINGS", |u| {
        u.name = update.name;
        u.email = update.email;
        u.phone = update.phone;
        u.currency = update.currency;
        u.language = update.language;
        u.notification_preferences = update.notification_preferences;
    })
    .map(|t| t.notify(NotificationKind::SettingsSaved))
}

fn update_credit_profile(state: &AppState, patch: CreditProfilePatch) -> Option<Transition> {
    if !patch.is_valid() {
        return rejected("UPDATE_CREDIT_PROFILE", "patch out of range");
    }
    update_user(state, "UPDATE_CREDIT_PROFILE", |u| {
        u.credit_profile = u.credit_profile.merged(&patch)
    })
}

fn answer_scenario(
    state: &AppState,
    scenario: Scenario,
    option_index: usize,
    ctx: &TransitionContext<'_>,
) -> Option<Transition> {
    require_user(state, "ANSWER_SCENARIO")?;
    if state.scenarios.is_empty() {
        return rejected("ANSWER_SCENARIO", "no scenarios loaded");
    }
    let Some(option) = scenario.options.get(option_index) else {
        return rejected("ANSWER_SCENARIO", "option index out of range");
    };

    let points = if option.impact > 0 {
        POINTS_PER_GOOD_DECISION
    } else {
        0
    };
    let entry = CreditHistoryEntry {
        id: new_id(HISTORY_ID_PREFIX),
        date: ctx.now,
        scenario_title: scenario.title.clone(),
        decision: option.text.clone(),
        impact: option.impact,
        explanation: option.explanation.clone(),
    };

    let mut next = update_user(state, "ANSWER_SCENARIO", |u| {
        u.credit_profile = u.credit_profile.with_score_impact(option.impact);
        award_points(u, points);
    })?;
    next.state.credit_history.insert(0, entry);
    next.state.current_scenario_index =
        (state.current_scenario_index + 1) % state.scenarios.len();

    Some(
        next.notify_if(points > 0, NotificationKind::DecisionPoints(points))
            .with_new_badges(),
    )
}

fn add_goal(state: &AppState, name: String, target_amount: Decimal) -> Option<Transition> {
    require_user(state, "ADD_GOAL")?;
    let name = name.trim().to_string();
    if name.is_empty() {
        return rejected("ADD_GOAL", "goal name is required");
    }
    if target_amount <= Decimal::ZERO {
        return rejected("ADD_GOAL", "target amount must be positive");
    }

    let mut next = state.clone();
    next.goals.insert(
        0,
        Goal {
            id: new_id(GOAL_ID_PREFIX),
            name: name.clone(),
            target_amount,
            current_amount: Decimal::ZERO,
        },
    );
    Some(Transition::new(next).notify(NotificationKind::GoalCreated(name)))
}

fn remove_goal(state: &AppState, goal_id: &str) -> Option<Transition> {
    state.goal(goal_id)?;
    let mut next = state.clone();
    next.goals.retain(|g| g.id != goal_id);
    Some(Transition::new(next))
}

fn add_transaction(
    state: &AppState,
    amount: Decimal,
    flow: WalletFlow,
    description: Option<String>,
    ctx: &TransitionContext<'_>,
) -> Option<Transition> {
    let user = require_user(state, "ADD_TRANSACTION")?;
    if amount <= Decimal::ZERO {
        return rejected("ADD_TRANSACTION", "amount must be positive");
    }

    let transaction_type = TransactionType::from(flow);
    let Some(balance) = user
        .wallet_balance
        .checked_add(transaction_type.signed_amount(amount))
    else {
        return rejected("ADD_TRANSACTION", "wallet balance out of range");
    };
    let description = description.filter(|d| !d.trim().is_empty());
    let mut next = update_user(state, "ADD_TRANSACTION", |u| u.wallet_balance = balance)?;
    next.state.transactions.insert(
        0,
        ledger_entry(transaction_type, amount, None, description, ctx),
    );
    Some(next)
}

fn allocate_to_goal(
    state: &AppState,
    goal_id: String,
    amount: Decimal,
    ctx: &TransitionContext<'_>,
) -> Option<Transition> {
    let user = require_user(state, "ALLOCATE_FUNDS_TO_GOAL")?;
    if amount <= Decimal::ZERO {
        return rejected("ALLOCATE_FUNDS_TO_GOAL", "amount must be positive");
    }
    if amount > user.wallet_balance {
        return rejected("ALLOCATE_FUNDS_TO_GOAL", "insufficient wallet balance");
    }
    let Some(goal) = state.goal(&goal_id) else {
        return rejected("ALLOCATE_FUNDS_TO_GOAL", "unknown goal");
    };
    let Some(goal_amount) = goal.current_amount.checked_add(amount) else {
        return rejected("ALLOCATE_FUNDS_TO_GOAL", "goal amount out of range");
    };

    let mut next = update_user(state, "ALLOCATE_FUNDS_TO_GOAL", |u| {
        u.wallet_balance -= amount
    })?;
    if let Some(goal) = next.state.goals.iter_mut().find(|g| g.id == goal_id) {
        goal.current_amount = goal_amount;
    }
    next.state.transactions.insert(
        0,
        ledger_entry(
            TransactionType::AsignacionMeta,
            amount,
            Some(goal_id),
            None,
            ctx,
        ),
    );
    Some(next)
}

fn withdraw_from_goal(
    state: &AppState,
    goal_id: String,
    amount: Decimal,
    ctx: &TransitionContext<'_>,
) -> Option<Transition> {
    let user = require_user(state, "WITHDRAW_FUNDS_FROM_GOAL")?;
    if amount <= Decimal::ZERO {
        return rejected("WITHDRAW_FUNDS_FROM_GOAL", "amount must be positive");
    }
    let Some(goal) = state.goal(&goal_id) else {
        return rejected("WITHDRAW_FUNDS_FROM_GOAL", "unknown goal");
    };
    if amount > goal.current_amount {
        return rejected("WITHDRAW_FUNDS_FROM_GOAL", "insufficient goal balance");
    }
    let Some(balance) = user.wallet_balance.checked_add(amount) else {
        return rejected("WITHDRAW_FUNDS_FROM_GOAL", "wallet balance out of range");
    };

    let mut next = update_user(state, "WITHDRAW_FUNDS_FROM_GOAL", |u| {
        u.wallet_balance = balance
    })?;
    if let Some(goal) = next.state.goals.iter_mut().find(|g| g.id == goal_id) {
        goal.current_amount -= amount;
    }
    next.state.transactions.insert(
        0,
        ledger_entry(TransactionType::RetiroMeta, amount, Some(goal_id), None, ctx),
    );
    Some(next)
}

fn start_lesson(state: &AppState, lesson_id: String) -> Option<Transition> {
    if state.lesson(&lesson_id).is_none() {
        return rejected("START_LESSON", "unknown lesson");
    }
    if !state.lesson_status(&lesson_id).can_start() {
        return None;
    }
    let mut next = state.clone();
    next.lesson_progress
        .insert(lesson_id, LessonProgress::in_progress());
    Some(Transition::new(next))
}

fn submit_quiz(
    state: &AppState,
    lesson_id: String,
    correct: u32,
    total: u32,
) -> Option<Transition> {
    require_user(state, "SUBMIT_QUIZ")?;
    if state.lesson(&lesson_id).is_none() {
        return rejected("SUBMIT_QUIZ", "unknown lesson");
    }
    let Some(score) = quiz_percentage(correct, total) else {
        return rejected("SUBMIT_QUIZ", "inconsistent answer counts");
    };

    let passed = is_passing(correct, total);
    let already_completed = state.lesson_status(&lesson_id) == LessonStatus::Completed;
    let points = if passed && !already_completed {
        POINTS_PER_LESSON
    } else {
        0
    };

    let mut next = update_user(state, "SUBMIT_QUIZ", |u| award_points(u, points))?;
    next.state.lesson_progress.insert(
        lesson_id,
        LessonProgress {
            status: if passed {
                LessonStatus::Completed
            } else {
                LessonStatus::Failed
            },
            score: Some(score),
        },
    );

    Some(
        next.notify_if(points > 0, NotificationKind::LessonCompleted(points))
            .with_new_badges(),
    )
}

fn toggle_action_plan_item(state: &AppState, item_id: &str) -> Option<Transition> {
    let user = require_user(state, "TOGGLE_ACTION_PLAN_ITEM")?;
    let Some(plan) = user.action_plan.as_ref() else {
        return rejected("TOGGLE_ACTION_PLAN_ITEM", "no action plan");
    };
    let Some(item) = plan.iter().find(|i| i.id == item_id) else {
        return rejected("TOGGLE_ACTION_PLAN_ITEM", "unknown plan item");
    };

    let points = if item.completed {
        0
    } else {
        POINTS_PER_ACTION_ITEM
    };
    let plan_complete = plan.iter().all(|i| {
        if i.id == item_id {
            !i.completed
        } else {
            i.completed
        }
    });

    let next = update_user(state, "TOGGLE_ACTION_PLAN_ITEM", |u| {
        if let Some(plan) = u.action_plan.as_mut() {
            for item in plan.iter_mut().filter(|i| i.id == item_id) {
                item.completed = !item.completed;
            }
        }
        u.needs_new_action_plan = plan_complete;
        award_points(u, points);
    })?;

    Some(
        next.notify_if(points > 0, NotificationKind::TaskCompleted(points))
            .notify_if(plan_complete, NotificationKind::PlanCompleted),
    )
}

fn add_referral_points(state: &AppState, points: u32) -> Option<Transition> {
    if points == 0 {
        return rejected("ADD_REFERRAL_POINTS", "no points to add");
    }
    let next = update_user(state, "ADD_REFERRAL_POINTS", |u| award_points(u, points))?;
    Some(
        next.notify(NotificationKind::ReferralPoints(points))
            .with_new_badges(),
    )
}

fn update_streak(state: &AppState, today: NaiveDate) -> Option<Transition> {
    let user = require_user(state, "UPDATE_STREAK")?;
    let last = user.last_activity_date;
    if last == Some(today) {
        return None;
    }

    let streak = if last.is_some() && last == previous_day(today) {
        user.daily_streak.saturating_add(1)
    } else {
        1
    };
    let next = update_user(state, "UPDATE_STREAK", |u| {
        u.daily_streak = streak;
        u.last_activity_date = Some(today);
    })?;
    Some(next.notify_if(streak > 1, NotificationKind::Streak(streak)))
}

fn upload_file(
    state: &AppState,
    item_id: String,
    file_state: UploadedFileState,
) -> Option<Transition> {
    if state.uploaded_files.get(&item_id) == Some(&file_state) {
        return None;
    }
    let mut next = state.clone();
    next.uploaded_files.insert(item_id, file_state);
    Some(Transition::new(next))
}

fn remove_file(state: &AppState, item_id: &str) -> Option<Transition> {
    if !state.uploaded_files.contains_key(item_id) {
        return None;
    }
    let mut next = state.clone();
    next.uploaded_files.remove(item_id);
    Some(Transition::new(next))
}

fn set_checklist_completed(state: &AppState, checklist_type: CreditType) -> Option<Transition> {
    if state.is_checklist_completed(checklist_type) {
        return None;
    }
    let mut next = state.clone();
    next.completed_checklists.insert(checklist_type, true);
    Some(Transition::new(next))
}

fn mark_notifications_as_read(state: &AppState) -> Option<Transition> {
    if state.notifications.iter().all(|n| n.read) {
        return None;
    }
    let mut next = state.clone();
    for notification in next.notifications.iter_mut() {
        notification.read = true;
    }
    Some(Transition::new(next))
}

fn save_calculation(
    state: &AppState,
    calculation: NewCalculation,
    ctx: &TransitionContext<'_>,
) -> Transition {
    let entry =
        CalculatorHistoryEntry::from_new(new_id(CALCULATION_ID_PREFIX), ctx.now, calculation);
    let mut next = state.clone();
    next.calculator_history.insert(0, entry);
    Transition::new(next)
}

fn delete_calculation(state: &AppState, id: &str) -> Option<Transition> {
    if !state.calculator_history.iter().any(|c| c.id == id) {
        return None;
    }
    let mut next = state.clone();
    next.calculator_history.retain(|c| c.id != id);
    Some(Transition::new(next))
}
