//! Loading intent and the delayed-activation state machine.
//!
//! A button declares a [`LoadingIntent`]; the [`LoadingStateMachine`] turns
//! it into an observable [`LoadingState`] over time. A delayed intent arms a
//! one-shot timer on the shared [`SharedTimerManager`]. The owner routes fired
//! timer ids back through [`LoadingStateMachine::handle_timer`], which only
//! accepts the id of the timer it currently has armed.

use std::time::{Duration, Instant};

use horizon_cascade_core::{Signal, SharedTimerManager, TimerId};

/// What the button's props ask for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LoadingIntent {
    /// Not loading.
    #[default]
    Off,
    /// Loading right away.
    Immediate,
    /// Loading once the delay has elapsed without the intent changing.
    Delayed(Duration),
}

impl LoadingIntent {
    /// Intent for a `{ delay }` request.
    ///
    /// A missing or zero delay means loading right away.
    pub fn delayed(delay: Option<Duration>) -> Self {
        match delay {
            Some(delay) if !delay.is_zero() => LoadingIntent::Delayed(delay),
            _ => LoadingIntent::Immediate,
        }
    }

    /// The intent with a zero delay folded into [`Immediate`](Self::Immediate).
    pub fn normalized(self) -> Self {
        match self {
            LoadingIntent::Delayed(delay) if delay.is_zero() => LoadingIntent::Immediate,
            other => other,
        }
    }

    /// Whether any loading is requested.
    pub fn is_requested(self) -> bool {
        self != LoadingIntent::Off
    }
}

impl From<bool> for LoadingIntent {
    fn from(loading: bool) -> Self {
        if loading {
            LoadingIntent::Immediate
        } else {
            LoadingIntent::Off
        }
    }
}

impl From<Duration> for LoadingIntent {
    fn from(delay: Duration) -> Self {
        LoadingIntent::delayed(Some(delay))
    }
}

/// Observable loading state of one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingState {
    Off,
    /// Waiting for the delay timer, which fires at `deadline`.
    Delayed { deadline: Instant },
    Active,
}

impl LoadingState {
    /// Anything but `Off` counts as loading.
    pub fn is_loading(self) -> bool {
        self != LoadingState::Off
    }
}

/// Converts a loading intent into state over time.
///
/// The machine owns at most one pending timer. Every intent change cancels it
/// before anything else happens, and dropping the machine cancels it too.
pub struct LoadingStateMachine {
    intent: LoadingIntent,
    state: LoadingState,
    pending: Option<TimerId>,
    timers: SharedTimerManager,

    /// Emitted on every state transition with the new state.
    pub state_changed: Signal<LoadingState>,

    /// Emitted when [`is_loading`](Self::is_loading) flips.
    pub loading_changed: Signal<bool>,
}

impl LoadingStateMachine {
    /// Create the machine for a newly mounted button.
    ///
    /// A delayed intent arms its timer immediately.
    pub fn new(intent: LoadingIntent, timers: SharedTimerManager) -> Self {
        let intent = intent.normalized();
        let mut machine = Self {
            intent,
            state: LoadingState::Off,
            pending: None,
            timers,
            state_changed: Signal::new(),
            loading_changed: Signal::new(),
        };
        machine.state = machine.enter(intent);
        tracing::debug!(
            target: "horizon_cascade_button::loading",
            ?intent,
            state = ?machine.state,
            "loading state machine mounted"
        );
        machine
    }

    /// The current intent.
    pub fn intent(&self) -> LoadingIntent {
        self.intent
    }

    /// The current state.
    pub fn state(&self) -> LoadingState {
        self.state
    }

    /// Whether the button reports itself as loading.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Whether the delay (if any) has elapsed and loading is fully active.
    pub fn is_active(&self) -> bool {
        self.state == LoadingState::Active
    }

    /// The id of the armed delay timer, if any.
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending
    }

    /// Time left before a delayed intent activates.
    pub fn remaining(&self) -> Option<Duration> {
        match self.state {
            LoadingState::Delayed { deadline } => {
                Some(deadline.saturating_duration_since(self.timers.now()))
            }
            _ => None,
        }
    }

    /// Apply a new intent.
    ///
    /// Returns `true` if the state changed. Re-applying the current intent
    /// does nothing, so a re-render with unchanged props keeps its timer.
    pub fn set_intent(&mut self, intent: LoadingIntent) -> bool {
        let intent = intent.normalized();
        if intent == self.intent {
            return false;
        }
        tracing::debug!(
            target: "horizon_cascade_button::loading",
            from = ?self.intent,
            to = ?intent,
            "loading intent changed"
        );
        self.intent = intent;
        self.cancel_pending();
        let next = self.enter(intent);
        self.transition(next)
    }

    /// Deliver a fired timer.
    ///
    /// Returns `true` if the timer was this machine's armed delay and the
    /// machine became active. Any other id (a stale timer from an earlier
    /// intent, or another button's timer) is ignored.
    pub fn handle_timer(&mut self, id: TimerId) -> bool {
        if self.pending != Some(id) {
            tracing::trace!(target: "horizon_cascade_button::loading", ?id, "ignoring stale timer");
            return false;
        }
        self.pending = None;
        self.transition(LoadingState::Active)
    }

    /// Cancel the pending timer, as on unmount.
    ///
    /// The state is left as is; a `Delayed` state will never activate.
    pub fn cancel(&mut self) {
        self.cancel_pending();
    }

    fn enter(&mut self, intent: LoadingIntent) -> LoadingState {
        match intent {
            LoadingIntent::Off => LoadingState::Off,
            LoadingIntent::Immediate => LoadingState::Active,
            LoadingIntent::Delayed(delay) => {
                let id = self.timers.start_one_shot(delay);
                self.pending = Some(id);
                let deadline = self
                    .timers
                    .deadline(id)
                    .unwrap_or_else(|| self.timers.now());
                LoadingState::Delayed { deadline }
            }
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            if self.timers.stop(id).is_err() {
                tracing::trace!(
                    target: "horizon_cascade_button::loading",
                    ?id,
                    "pending timer already fired"
                );
            }
        }
    }

    fn transition(&mut self, next: LoadingState) -> bool {
        if next == self.state {
            return false;
        }
        let was_loading = self.state.is_loading();
        tracing::debug!(
            target: "horizon_cascade_button::loading",
            from = ?self.state,
            to = ?next,
            "loading state transition"
        );
        self.state = next;
        self.state_changed.emit(next);
        if was_loading != next.is_loading() {
            self.loading_changed.emit(next.is_loading());
        }
        true
    }
}

impl Drop for LoadingStateMachine {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl std::fmt::Debug for LoadingStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingStateMachine")
            .field("intent", &self.intent)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .finish()
    }
}

static_assertions::assert_impl_all!(LoadingStateMachine: Send, Sync);
