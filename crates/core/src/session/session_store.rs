use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, warn};

use crate::checklist::CreditType;
use crate::errors::Result;
use crate::events::{NoOpSessionEventSink, SessionEvent, SessionEventSink};
use crate::gamification::BadgeId;
use crate::gating::{resolve_screen, AppPage, Screen};
use crate::settings::SessionSettings;
use crate::store::{transition, Action, AppState, TransitionContext};
use crate::utils::time_utils::{Clock, SystemClock};

/// Holds the authoritative state of one application session.
///
/// All writes go through [`dispatch`](Self::dispatch); readers get immutable
/// snapshots. Transitions are applied one at a time under a write lock, so a
/// dispatched action always sees the result of the previous one.
pub struct SessionStore {
    state: RwLock<Arc<AppState>>,
    settings: SessionSettings,
    clock: Arc<dyn Clock>,
    event_sink: Arc<dyn SessionEventSink>,
}

impl SessionStore {
    pub fn new(
        settings: SessionSettings,
        clock: Arc<dyn Clock>,
        event_sink: Arc<dyn SessionEventSink>,
    ) -> Self {
        Self {
            state: RwLock::new(Arc::new(AppState::logged_out())),
            settings,
            clock,
            event_sink,
        }
    }

    /// Store with default settings, the wall clock and no event sink.
    pub fn with_defaults() -> Self {
        Self::new(
            SessionSettings::default(),
            Arc::new(SystemClock),
            Arc::new(NoOpSessionEventSink),
        )
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Latest state. Cheap: the snapshot is shared, not copied.
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Screen to show for the current state.
    pub fn screen(&self, active_page: AppPage) -> Screen {
        resolve_screen(&self.snapshot(), active_page)
    }

    /// Applies `action`. Returns whether the state changed.
    ///
    /// When the action signs a user in, the daily streak is brought up to
    /// date as part of the same write.
    pub fn dispatch(&self, action: Action) -> bool {
        let kind = action.kind();
        if action == Action::Unknown {
            warn!("Ignoring action with unknown type");
            return false;
        }

        let now = self.clock.now();
        let ctx = TransitionContext::new(now, &self.settings);

        let events = {
            let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let current = Arc::clone(&guard);

            let Some(applied) = transition(&current, action, &ctx) else {
                debug!("{} left the session unchanged", kind);
                return false;
            };
            let mut unlocked = applied.unlocked_badges.clone();
            let mut next = applied.commit(now);

            if !current.is_authenticated && next.is_authenticated {
                if let Some(streak) = transition(&next, Action::UpdateStreak, &ctx) {
                    unlocked.extend(streak.unlocked_badges.iter().copied());
                    next = streak.commit(now);
                }
            }

            if next == *current {
                debug!("{} left the session unchanged", kind);
                return false;
            }

            let events = session_events(&current, &next, unlocked);
            *guard = Arc::new(next);
            events
        };

        debug!("Applied {} ({} events)", kind, events.len());
        if !events.is_empty() {
            self.event_sink.emit_batch(events);
        }
        true
    }

    /// Decodes and applies an action received as JSON.
    pub fn dispatch_json(&self, json: &str) -> Result<bool> {
        let action = Action::from_json(json)?;
        Ok(self.dispatch(action))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Facts worth telling the embedding application about a state change.
fn session_events(before: &AppState, after: &AppState, unlocked: Vec<BadgeId>) -> Vec<SessionEvent> {
    let mut events = Vec::new();

    if before.is_authenticated != after.is_authenticated {
        events.push(SessionEvent::authentication_changed(after.is_authenticated));
    }

    let needs_plan = |state: &AppState| {
        state
            .user
            .as_ref()
            .is_some_and(|u| u.needs_new_action_plan)
    };
    if needs_plan(after) && !needs_plan(before) {
        events.push(SessionEvent::ActionPlanExhausted);
    }

    if !unlocked.is_empty() {
        events.push(SessionEvent::badges_unlocked(unlocked));
    }

    for checklist_type in [CreditType::Negocio, CreditType::Consumo, CreditType::Hipotecario] {
        if after.is_checklist_completed(checklist_type)
            && !before.is_checklist_completed(checklist_type)
        {
            events.push(SessionEvent::checklist_completed(checklist_type));
        }
    }

    events
}
