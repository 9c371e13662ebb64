//! Core Types für das Lauflicht
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

/// Maximale Anzahl Einträge in einer LED-Sequenz (inkl. Wiederholungen)
pub const MAX_SEQUENCE_LEN: usize = 64;

/// Maximale Anzahl unterschiedlicher GPIO-Pins in einer Sequenz
pub const MAX_DISTINCT_PINS: usize = 32;

/// Identifiziert eine physikalische Ausgangsleitung (Port, Pin)
///
/// Gleichheit ist strukturell: zwei `PinId` mit gleichem Port und Pin
/// bezeichnen dieselbe Leitung.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinId {
    pub port: i32,
    pub pin: i32,
}

impl PinId {
    pub const fn new(port: i32, pin: i32) -> Self {
        Self { port, pin }
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.port, self.pin)
    }
}

/// Richtung einer GPIO-Leitung
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    OutputOnly,
}

/// Treiber-Modus eines Ausgangs
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveMode {
    /// Treibt aktiv High und Low (im Gegensatz zu Open-Drain)
    PushPull,
}

/// Flanken-Trigger (für Ausgänge ohne Bedeutung)
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    None,
}

/// Geparste Pin-Konfiguration für einen LED-Ausgang
///
/// Wird nur über [`PinSpec::output`] erzeugt und ist damit immer ein
/// Push-Pull-Ausgang ohne Trigger, der im Zustand "aus" startet.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinSpec {
    pub id: PinId,
    pub direction: Direction,
    pub drive_mode: DriveMode,
    pub trigger: Trigger,
    pub initial_value: bool,
}

impl PinSpec {
    /// Erstellt die Ausgangs-Konfiguration für Port/Pin
    pub const fn output(port: i32, pin: i32) -> Self {
        Self {
            id: PinId::new(port, pin),
            direction: Direction::OutputOnly,
            drive_mode: DriveMode::PushPull,
            trigger: Trigger::None,
            initial_value: false,
        }
    }
}
