// src/player/gate.rs
//! Transition gate: every play/pause toggle passes through a Loading delay.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::state::PlaybackState;

/// What a toggle does while the gate is already Loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LoadingToggle {
    /// Toggles during Loading are dropped.
    #[default]
    Ignore,
    /// Toggles during Loading flip the pending target and restart the delay.
    Retarget,
}

/// Result of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Ignored,
    /// Entered Loading; the delay must be armed for this target.
    Armed(PlaybackState),
    /// Already Loading; the delay must be re-armed for this new target.
    Retargeted(PlaybackState),
}

impl GateOutcome {
    /// Target whose delay has to be (re)armed, if any.
    pub fn target(self) -> Option<PlaybackState> {
        match self {
            GateOutcome::Ignored => None,
            GateOutcome::Armed(t) | GateOutcome::Retargeted(t) => Some(t),
        }
    }
}

/// Tracks the pending target between a toggle and the delay firing.
#[derive(Debug, Clone)]
pub struct TransitionGate {
    delay: Duration,
    policy: LoadingToggle,
    pending: Option<PlaybackState>,
}

impl TransitionGate {
    pub fn new(delay: Duration, policy: LoadingToggle) -> Self {
        Self {
            delay,
            policy,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn pending(&self) -> Option<PlaybackState> {
        self.pending
    }

    /// Decide what a toggle from `current` does.
    ///
    /// The caller moves the player into Loading when the outcome carries a
    /// target, and arms the delay after cancelling any outstanding one.
    pub fn request(&mut self, current: PlaybackState) -> GateOutcome {
        if let Some(target) = current.toggled() {
            self.pending = Some(target);
            return GateOutcome::Armed(target);
        }

        match (self.policy, self.pending) {
            (LoadingToggle::Retarget, Some(pending)) => {
                let target = pending.toggled().unwrap_or(PlaybackState::Paused);
                self.pending = Some(target);
                GateOutcome::Retargeted(target)
            }
            _ => GateOutcome::Ignored,
        }
    }

    /// Resolve the delay, handing back the target it was armed for.
    pub fn complete(&mut self) -> Option<PlaybackState> {
        self.pending.take()
    }

    /// Drop the pending target without resolving it.
    pub fn reset(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(policy: LoadingToggle) -> TransitionGate {
        TransitionGate::new(Duration::from_millis(500), policy)
    }

    #[test]
    fn toggle_targets_the_opposite_state() {
        let mut g = gate(LoadingToggle::Ignore);
        assert_eq!(
            g.request(PlaybackState::Paused),
            GateOutcome::Armed(PlaybackState::Playing)
        );
        assert_eq!(g.complete(), Some(PlaybackState::Playing));

        assert_eq!(
            g.request(PlaybackState::Playing),
            GateOutcome::Armed(PlaybackState::Paused)
        );
        assert_eq!(g.complete(), Some(PlaybackState::Paused));
        assert_eq!(g.complete(), None);
    }

    #[test]
    fn loading_toggle_is_ignored_by_default() {
        let mut g = gate(LoadingToggle::Ignore);
        g.request(PlaybackState::Paused);
        assert_eq!(g.request(PlaybackState::Loading), GateOutcome::Ignored);
        assert_eq!(g.pending(), Some(PlaybackState::Playing));
    }

    #[test]
    fn retarget_flips_the_pending_target() {
        let mut g = gate(LoadingToggle::Retarget);
        g.request(PlaybackState::Paused);
        assert_eq!(
            g.request(PlaybackState::Loading),
            GateOutcome::Retargeted(PlaybackState::Paused)
        );
        assert_eq!(
            g.request(PlaybackState::Loading),
            GateOutcome::Retargeted(PlaybackState::Playing)
        );
        assert_eq!(g.complete(), Some(PlaybackState::Playing));
    }

    #[test]
    fn retarget_without_pending_is_ignored() {
        let mut g = gate(LoadingToggle::Retarget);
        assert_eq!(g.request(PlaybackState::Loading), GateOutcome::Ignored);
        assert_eq!(GateOutcome::Ignored.target(), None);
    }
}
