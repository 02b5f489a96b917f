//! Four-phase animation state machine.
//!
//! ```text
//! RingField --(t >= 2π)--> GrowRoundedRect --(t >= π)--> LogoHold --(t >= π)--> ShrinkRoundedRect
//!     ^                                                                               |
//!     +-----------------------------------(t >= π)-----------------------------------+
//! ```

use std::f64::consts::{PI, TAU};

/// Behavior mode of the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Oscillating rings around the central disc.
    RingField,
    /// Disc morphing into the rounded rectangle.
    GrowRoundedRect,
    /// Static rounded-rect "logo".
    LogoHold,
    /// Rounded rectangle morphing back into the disc.
    ShrinkRoundedRect,
}

impl Phase {
    /// Phase time at which this phase exits.
    pub fn duration(self) -> f64 {
        match self {
            Self::RingField => TAU,
            Self::GrowRoundedRect | Self::LogoHold | Self::ShrinkRoundedRect => PI,
        }
    }

    /// Phase entered when this one exits.
    pub fn next(self) -> Self {
        match self {
            Self::RingField => Self::GrowRoundedRect,
            Self::GrowRoundedRect => Self::LogoHold,
            Self::LogoHold => Self::ShrinkRoundedRect,
            Self::ShrinkRoundedRect => Self::RingField,
        }
    }
}

/// A phase change produced by [`AnimationState::evaluate_transition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Transition {
    /// Phase that exited.
    pub from: Phase,
    /// Phase that was entered.
    pub to: Phase,
}

/// Phase, time within the phase, and completed ring-field cycles.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AnimationState {
    phase: Phase,
    phase_time: f64,
    cycle_count: u64,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    /// Start in [`Phase::RingField`] at time zero.
    pub fn new() -> Self {
        Self::starting_in(Phase::RingField)
    }

    /// Start in an arbitrary phase at time zero.
    pub fn starting_in(phase: Phase) -> Self {
        Self {
            phase,
            phase_time: 0.0,
            cycle_count: 0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Time accumulated since entering the current phase.
    pub fn phase_time(&self) -> f64 {
        self.phase_time
    }

    /// Number of completed ring-field periods.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Advance the phase clock by one frame's worth of time.
    pub fn tick(&mut self, update_speed: f64) {
        self.phase_time += update_speed.max(0.0);
    }

    /// Restart the clock of the current phase.
    pub fn reset_phase_time(&mut self) {
        self.phase_time = 0.0;
    }

    /// Leave the current phase if its time threshold has been crossed.
    pub fn evaluate_transition(&mut self) -> Option<Transition> {
        if self.phase_time < self.phase.duration() {
            return None;
        }
        let from = self.phase;
        if from == Phase::RingField {
            self.cycle_count += 1;
            tracing::debug!(cycle_count = self.cycle_count, "ring field cycle complete");
        }
        self.phase = from.next();
        self.phase_time = 0.0;
        Some(Transition {
            from,
            to: self.phase,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
