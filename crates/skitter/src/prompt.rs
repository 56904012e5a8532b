//! The prompt controller: host events in, offset/burst/events out.
//!
//! Single-threaded and tick-driven. Each host event handler runs to
//! completion before yielding, and the only suspension points are the
//! owned timers advanced in [`PromptController::on_frame`]. Dropping the
//! controller cancels everything; nothing fires after teardown.

use skitter_burst::{Burst, BurstAnimator, CompletionTimer};
use skitter_core::Vec2;
use skitter_engine::{GeometryProvider, PlacementEngine};

use crate::config::{AcceptConfig, SkitterConfig};

/// Events the controller reports back to the host from a frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEvent {
    /// The active burst finished; the host should unmount its layer.
    BurstFinished,
    /// The accept transition delay elapsed; show the confirmation view.
    Accepted,
}

/// The evasive prompt state machine.
///
/// Owns the placement engine, the burst animator, at most one live burst,
/// and at most one pending accept transition. The host forwards pointer
/// and resize events and calls [`PromptController::on_frame`] once per
/// rendered frame.
#[derive(Debug)]
pub struct PromptController<P: GeometryProvider> {
    /// Live layout source.
    provider: P,
    /// Decline control placement.
    engine: PlacementEngine,
    /// Burst factory.
    animator: BurstAnimator,
    /// The active burst, if any.
    burst: Option<Burst>,
    /// Pending accept transition, if any.
    accept_timer: Option<CompletionTimer>,
    /// Accept timing.
    accept: AcceptConfig,
    /// Host-supplied reduced-motion preference.
    reduced_motion: bool,
    /// Set once the accept transition has fired.
    answered: bool,
}

impl<P: GeometryProvider> PromptController<P> {
    /// Creates a controller.
    ///
    /// The placement engine and the burst animator get decorrelated
    /// streams derived from the one host-supplied seed.
    #[must_use]
    pub fn new(provider: P, config: SkitterConfig, seed: u64) -> Self {
        Self {
            provider,
            engine: PlacementEngine::new(config.placement, seed),
            animator: BurstAnimator::new(config.burst, seed.wrapping_add(1)),
            burst: None,
            accept_timer: None,
            accept: config.accept,
            reduced_motion: false,
            answered: false,
        }
    }

    /// Sets the host's reduced-motion preference.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// The decline control's current translation.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.engine.offset()
    }

    /// The active burst, for the host to animate.
    #[must_use]
    pub fn burst(&self) -> Option<&Burst> {
        self.burst.as_ref()
    }

    /// Returns true once the prompt has been accepted.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Pointer-enter, touch-start, or press on the decline control.
    ///
    /// No-op until the host can produce geometry, and after acceptance.
    pub fn on_decline_approach(&mut self) {
        if self.answered {
            return;
        }
        if let Some(geometry) = self.provider.geometry() {
            self.engine.relocate(&geometry);
        }
    }

    /// Container resize or orientation change.
    ///
    /// The engine ignores this until initial placement has run.
    pub fn on_container_resize(&mut self) {
        if let Some(geometry) = self.provider.geometry() {
            self.engine.reconcile(&geometry);
        }
    }

    /// Pointer-down on the accept control.
    ///
    /// Spawns a burst at the pointer coordinates unless reduced motion is
    /// requested. A new pointer-down replaces any burst still playing.
    pub fn on_accept_pointer_down(&mut self, x: f32, y: f32) {
        if self.answered || self.reduced_motion {
            return;
        }
        self.burst = Some(self.animator.spawn(Vec2::new(x, y)));
    }

    /// Press (click) on the accept control: arms the transition delay.
    ///
    /// 100ms under reduced motion, 600ms otherwise so the burst can
    /// develop. Repeated presses while a transition is pending are
    /// ignored.
    pub fn on_accept_press(&mut self) {
        if self.answered || self.accept_timer.is_some() {
            return;
        }
        let delay_ms = if self.reduced_motion {
            self.accept.reduced_motion_delay_ms
        } else {
            self.accept.transition_delay_ms
        };
        tracing::debug!(delay_ms, "accept transition armed");
        self.accept_timer = Some(CompletionTimer::new(delay_ms));
    }

    /// Advances the controller by one frame.
    ///
    /// Runs the deferred initial placement on the first frame in which
    /// the provider yields geometry (i.e. after the host's first real
    /// layout pass), then drives the burst and accept timers. Returns the
    /// events produced this frame.
    pub fn on_frame(&mut self, dt_ms: f32) -> Vec<PromptEvent> {
        let mut events = Vec::new();

        if !self.engine.is_initialized() {
            if let Some(geometry) = self.provider.geometry() {
                self.engine.place_initial(&geometry);
            }
        }

        if let Some(burst) = &mut self.burst {
            if burst.update(dt_ms) {
                self.burst = None;
                events.push(PromptEvent::BurstFinished);
            }
        }

        if let Some(timer) = &mut self.accept_timer {
            if timer.update(dt_ms) {
                self.accept_timer = None;
                self.answered = true;
                tracing::debug!("prompt accepted");
                events.push(PromptEvent::Accepted);
            }
        }

        events
    }
}
