// src/player/mod.rs
//! Simulated player: state machine, timers and the driver tying them together.

pub mod clock;
pub mod driver;
pub mod gate;
pub mod machine;
pub mod state;
pub mod timer;
pub mod volume;

// Re-export commonly used types
pub use clock::{format_time, PlaybackClock};
pub use driver::PlayerDriver;
pub use gate::{GateOutcome, LoadingToggle, TransitionGate};
pub use machine::PlayerMachine;
pub use state::{PlaybackState, PlayerSnapshot};
pub use timer::{TimerEvent, TimerHandle, Timers};
pub use volume::VolumeController;
