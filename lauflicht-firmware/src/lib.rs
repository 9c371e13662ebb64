// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von lauflicht-core
pub use lauflicht_core::{
    ChaserError, LedPin, LedSequence, LightingEngine, Schedule, TickOutcome, load_sequence,
    shutdown, timer_interval_ms,
};

use core::cell::RefCell;

// Embassy Sync-Typen
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::hal::GpioLed;

// ============================================================================
// Type-Aliase für geteilte Zustände
// ============================================================================
//
// Statt:  Mutex<CriticalSectionRawMutex, RefCell<Option<LedSequence<GpioLed>>>>
// Nutze:  SharedSequence

/// LED-Sequenz, geteilt zwischen Lauflicht-Task (Ticks) und main (Herunterfahren)
///
/// Der Mutex macht jeden Tick und das Herunterfahren atomar zueinander.
/// Nach dem Herunterfahren ist der Inhalt `None`.
pub type SharedSequence = Mutex<CriticalSectionRawMutex, RefCell<Option<LedSequence<GpioLed>>>>;

/// Stopp-Anforderung (Stopp-Taster → main)
pub type StopSignal = Signal<CriticalSectionRawMutex, ()>;
