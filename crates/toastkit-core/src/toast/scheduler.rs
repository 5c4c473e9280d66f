//! Dismiss countdown bookkeeping
//!
//! [`Countdown`] is the per-toast timer state: how much unpaused time is left
//! and whether a timer is currently armed. It does no sleeping itself; the
//! provider spawns a task for every [`Arm`] it hands out and checks the
//! arm's generation when that task fires.

use std::time::Duration;
use tokio::time::Instant;

/// A request to start a one-shot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arm {
    pub generation: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Never armed
    Idle,
    Armed { since: Instant },
    Paused,
    /// Dismissed; never re-armed
    Stopped,
}

/// Remaining-time accounting for one toast
#[derive(Debug, Clone)]
pub struct Countdown {
    duration: Duration,
    remaining: Duration,
    pausable: bool,
    phase: Phase,
    generation: u64,
}

impl Countdown {
    /// A zero `duration` yields a countdown that never arms.
    pub fn new(duration: Duration, pausable: bool) -> Self {
        Self {
            duration,
            remaining: duration,
            pausable,
            phase: Phase::Idle,
            generation: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.duration.is_zero()
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.phase, Phase::Armed { .. })
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    /// Unpaused time left before the countdown fires
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.phase {
            Phase::Armed { since } => self
                .remaining
                .saturating_sub(now.saturating_duration_since(since)),
            _ => self.remaining,
        }
    }

    /// Start the countdown for the first time.
    pub fn arm(&mut self, now: Instant) -> Option<Arm> {
        if !self.is_enabled() || self.phase != Phase::Idle {
            return None;
        }
        Some(self.arm_at(now))
    }

    /// Freeze the countdown, returning the remaining time.
    ///
    /// Inert for non-pausable or disabled countdowns and when not armed.
    pub fn pause(&mut self, now: Instant) -> Option<Duration> {
        if !self.pausable {
            return None;
        }
        let Phase::Armed { since } = self.phase else {
            return None;
        };
        let elapsed = now.saturating_duration_since(since);
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.phase = Phase::Paused;
        self.generation += 1;
        Some(self.remaining)
    }

    /// Re-arm a paused countdown with whatever time was left.
    pub fn resume(&mut self, now: Instant) -> Option<Arm> {
        if !self.pausable || self.phase != Phase::Paused {
            return None;
        }
        Some(self.arm_at(now))
    }

    /// Cancel permanently. Any outstanding arm becomes stale.
    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
        self.generation += 1;
    }

    /// Whether a timer started for `generation` should still fire
    pub fn is_current(&self, generation: u64) -> bool {
        self.is_armed() && self.generation == generation
    }

    fn arm_at(&mut self, now: Instant) -> Arm {
        self.generation += 1;
        self.phase = Phase::Armed { since: now };
        Arm {
            generation: self.generation,
            delay: self.remaining,
        }
    }
}
