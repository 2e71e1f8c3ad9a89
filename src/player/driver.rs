// src/player/driver.rs
//! Timer-driven driver around the player state machine.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::{
    clock::PlaybackClock,
    gate::TransitionGate,
    machine::PlayerMachine,
    state::{PlaybackState, PlayerSnapshot},
    timer::{Fired, TimerEvent, TimerHandle, Timers},
    volume::VolumeController,
};
use crate::config::PlayerSettings;

/// Owns the player machine and the two timers that move it: the gate's
/// one-shot delay and the clock's periodic tick.
///
/// Every armed timer is held through a handle. Arming the gate cancels the
/// previous handle first, the clock handle is dropped as soon as Playing is
/// left, and dropping the driver cancels whatever is still pending.
#[derive(Debug)]
pub struct PlayerDriver {
    machine: PlayerMachine,
    timers: Timers,
    gate_timer: Option<TimerHandle>,
    clock_timer: Option<TimerHandle>,
}

impl PlayerDriver {
    pub fn new(machine: PlayerMachine) -> Self {
        Self {
            machine,
            timers: Timers::new(),
            gate_timer: None,
            clock_timer: None,
        }
    }

    /// Build a paused player from configuration.
    pub fn from_settings(settings: &PlayerSettings) -> Self {
        let machine = PlayerMachine::new(
            PlaybackClock::new(
                Duration::from_secs(settings.duration_secs),
                Duration::from_millis(settings.tick_ms),
            ),
            TransitionGate::new(
                Duration::from_millis(settings.transition_ms),
                settings.loading_toggle,
            ),
            VolumeController::new(settings.initial_volume, settings.default_restore_volume),
        );
        Self::new(machine)
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.machine.snapshot()
    }

    pub fn state(&self) -> PlaybackState {
        self.machine.state()
    }

    /// Number of timers currently armed.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Play/pause toggle received at `now`.
    pub fn toggle(&mut self, now: Instant) {
        let Some(target) = self.machine.request_toggle().target() else {
            return;
        };

        if let Some(stale) = self.gate_timer.take() {
            self.timers.cancel(stale);
            debug!("cancelled pending gate delay");
        }
        let delay = self.machine.gate().delay();
        self.gate_timer = Some(self.timers.once(now, delay, TimerEvent::GateElapsed));
        debug!(target = target.label(), ?delay, "gate armed");

        // Loading stops the clock right away.
        self.sync_clock(now);
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.machine.toggle_mute()
    }

    /// Pointer press or drag at offset `x` along the volume slider.
    pub fn pointer(&mut self, x: f64) -> bool {
        self.machine.set_volume_from_pointer(x)
    }

    pub fn nudge_volume(&mut self, delta: f64) -> bool {
        self.machine.nudge_volume(delta)
    }

    pub fn set_volume(&mut self, v: f64) {
        self.machine.set_volume(v);
    }

    pub fn set_track_width(&mut self, width: u16) {
        self.machine.set_track_width(width);
    }

    /// Fire every timer due at `now`, in deadline order. Returns how many fired.
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(now) {
            self.dispatch(timer);
            fired += 1;
        }
        fired
    }

    fn dispatch(&mut self, fired: Fired) {
        match fired.event {
            TimerEvent::GateElapsed => {
                if self.gate_timer != Some(fired.handle) {
                    return;
                }
                self.gate_timer = None;
                self.machine.complete_transition();
                // The clock runs from the moment the delay was due, not from
                // when the loop got around to it.
                self.sync_clock(fired.deadline);
            }
            TimerEvent::Tick => {
                if self.clock_timer != Some(fired.handle) {
                    return;
                }
                self.machine.tick();
                trace!(elapsed = ?self.machine.elapsed(), "tick");
            }
        }
    }

    /// Start or stop the periodic clock so it runs exactly while Playing.
    fn sync_clock(&mut self, anchor: Instant) {
        match (self.machine.is_playing(), self.clock_timer) {
            (true, None) => {
                let period = self.machine.clock().tick();
                self.clock_timer = Some(self.timers.every(anchor, period, TimerEvent::Tick));
                debug!(?period, "clock started");
            }
            (false, Some(handle)) => {
                self.timers.cancel(handle);
                self.clock_timer = None;
                debug!("clock stopped");
            }
            _ => {}
        }
    }

    /// Cancel every pending timer. Later `advance` calls change nothing.
    pub fn shutdown(&mut self) {
        let cancelled = self.timers.clear();
        self.gate_timer = None;
        self.clock_timer = None;
        if cancelled > 0 {
            debug!(cancelled, "player timers cancelled");
        }
    }
}

impl Drop for PlayerDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}
