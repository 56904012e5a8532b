//! One-shot, cancellable completion timer.
//!
//! This is the Rust rendition of a scheduled callback: the host advances
//! the timer with its frame tick, and the timer reports expiry exactly
//! once. Cancelling (or dropping the owner) guarantees it never fires.

/// Lifecycle of a one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    /// Counting toward the deadline.
    Armed,
    /// Already reported expiry; inert.
    Fired,
    /// Cancelled before expiry; will never fire.
    Cancelled,
}

/// A one-shot timer that fires exactly once, or never if cancelled.
#[derive(Debug, Clone)]
pub struct CompletionTimer {
    /// Milliseconds until expiry, measured from creation.
    deadline_ms: f32,
    /// Milliseconds accumulated so far.
    elapsed_ms: f32,
    /// Current lifecycle state.
    state: TimerState,
}

impl CompletionTimer {
    /// Creates an armed timer expiring `deadline_ms` from now.
    #[must_use]
    pub fn new(deadline_ms: f32) -> Self {
        Self {
            deadline_ms: deadline_ms.max(0.0),
            elapsed_ms: 0.0,
            state: TimerState::Armed,
        }
    }

    /// Advances the timer by `dt_ms` milliseconds.
    ///
    /// Returns true exactly once, on the tick in which the accumulated
    /// time reaches the deadline. Fired and cancelled timers ignore
    /// further updates.
    pub fn update(&mut self, dt_ms: f32) -> bool {
        if self.state != TimerState::Armed {
            return false;
        }

        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.deadline_ms {
            self.state = TimerState::Fired;
            return true;
        }

        false
    }

    /// Cancels the timer; it will never fire afterward.
    pub fn cancel(&mut self) {
        if self.state == TimerState::Armed {
            self.state = TimerState::Cancelled;
        }
    }

    /// Returns true while the timer is counting.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.state == TimerState::Armed
    }

    /// Returns true once the timer has fired.
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.state == TimerState::Fired
    }

    /// The configured deadline in milliseconds.
    #[must_use]
    pub fn deadline_ms(&self) -> f32 {
        self.deadline_ms
    }
}
