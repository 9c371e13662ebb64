//! Lauflicht Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die GPIO-Traits, den Pin-Parser, den Sequenz-Aufbau
//! und die Lauflicht-State-Machine.

#![no_std]

#[macro_use]
mod fmt;

pub mod config;
pub mod engine;
pub mod error;
pub mod lifecycle;
pub mod parser;
pub mod schedule;
pub mod sequence;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use config::{DEFAULT_TIMER_INTERVAL_MS, timer_interval_ms};
pub use engine::{LightingEngine, TickOutcome};
pub use error::{ChaserError, ConfigError, EngineError, EntryError, SequenceError};
pub use lifecycle::{load_sequence, shutdown};
pub use parser::{PinSpecList, parse_entry, parse_pin_specs};
pub use schedule::Schedule;
pub use sequence::{BuildError, LedSequence, build_sequence};
pub use traits::{LedPin, PinDriver, PinError};
pub use types::{
    Direction, DriveMode, MAX_DISTINCT_PINS, MAX_SEQUENCE_LEN, PinId, PinSpec, Trigger,
};
