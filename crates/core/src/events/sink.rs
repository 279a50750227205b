//! Session event sink trait and implementations.

use std::sync::{Arc, Mutex, PoisonError};

use super::SessionEvent;

/// Receives the facts a [`SessionStore`](crate::session::SessionStore)
/// derives after a dispatch changed state.
///
/// The state machine only records that something happened; the embedding
/// application decides what to do about it. Typical reactions:
///
/// - `AuthenticationChanged`: load or drop per-user screens
/// - `ActionPlanExhausted`: ask the advisor for the next plan
///   ([`AdvisorService::refresh_action_plan`](crate::advisor::AdvisorService::refresh_action_plan))
/// - `BadgesUnlocked`: celebrate every badge, not just the one the
///   notification feed names
/// - `ChecklistCompleted`: offer to start the credit application
///
/// `emit()` runs on the dispatching thread after the store lock is
/// released. Keep it short; long work such as plan generation belongs on a
/// spawned task that dispatches its result back into the store. A sink that
/// fails must not affect the session.
pub trait SessionEventSink: Send + Sync {
    /// Emit a single session event.
    fn emit(&self, event: SessionEvent);

    /// Emit multiple session events.
    ///
    /// Default implementation calls `emit()` for each event.
    fn emit_batch(&self, events: Vec<SessionEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Sink for embeddings that only read snapshots.
#[derive(Clone, Default)]
pub struct NoOpSessionEventSink;

impl SessionEventSink for NoOpSessionEventSink {
    fn emit(&self, _event: SessionEvent) {}
}

/// Records every event in emission order. Used by the store and advisor
/// tests to assert which facts a dispatch produced.
#[derive(Clone, Default)]
pub struct MockSessionEventSink {
    events: Arc<Mutex<Vec<SessionEvent>>>,
}

impl MockSessionEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionEventSink for MockSessionEventSink {
    fn emit(&self, event: SessionEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
