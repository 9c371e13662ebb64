//! Fehler-Typen
//!
//! Konfigurations- und Open-Fehler sind beim Start fatal,
//! Eintrags-Fehler beim Parsen und I/O-Fehler im Tick werden lokal behandelt.

use core::fmt;

use crate::config::LED_PINS_ATTRIBUTE;
use crate::traits::PinError;
use crate::types::{MAX_SEQUENCE_LEN, PinId};

/// Fehler beim Parsen eines einzelnen `Port,Pin` Eintrags (nicht fatal)
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryError {
    MissingPort,
    MissingPin,
    InvalidNumber,
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryError::MissingPort => write!(f, "missing port number"),
            EntryError::MissingPin => write!(f, "missing pin number"),
            EntryError::InvalidNumber => write!(f, "port or pin is not a number"),
        }
    }
}

impl core::error::Error for EntryError {}

/// Fatale Konfigurationsfehler beim Start
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Attribut "LEDPins" fehlt
    MissingLedPins,
    /// "LEDPins" enthält keinen gültigen Eintrag
    NoPinEntries,
    /// "LEDPins" enthält mehr gültige Einträge als `MAX_SEQUENCE_LEN`
    TooManyEntries,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingLedPins => {
                write!(f, "\"{}\" attribute not found", LED_PINS_ATTRIBUTE)
            }
            ConfigError::NoPinEntries => write!(f, "no pin configuration found"),
            ConfigError::TooManyEntries => write!(
                f,
                "\"{}\" has more than {} entries",
                LED_PINS_ATTRIBUTE, MAX_SEQUENCE_LEN
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Fehler beim Aufbau der LED-Sequenz
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// Erstes Öffnen einer Leitung fehlgeschlagen
    Open { pin: PinId, cause: PinError },
    /// Mehr Einträge oder Pins als die Sequenz aufnehmen kann
    CapacityExceeded,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::Open { pin, cause } => {
                write!(f, "I/O error while opening pin {pin}: {cause}")
            }
            SequenceError::CapacityExceeded => write!(f, "too many pins in sequence"),
        }
    }
}

impl core::error::Error for SequenceError {}

/// Fehler beim Erzeugen der Lauflicht-Engine
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    EmptySequence,
    /// Mehr Positionen als `MAX_SEQUENCE_LEN`
    SequenceTooLong,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EmptySequence => write!(f, "LED sequence is empty"),
            EngineError::SequenceTooLong => write!(f, "LED sequence is too long"),
        }
    }
}

impl core::error::Error for EngineError {}

/// Sammel-Fehler für den Start des Lauflichts
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChaserError {
    Config(ConfigError),
    Sequence(SequenceError),
    Engine(EngineError),
}

impl fmt::Display for ChaserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChaserError::Config(e) => e.fmt(f),
            ChaserError::Sequence(e) => e.fmt(f),
            ChaserError::Engine(e) => e.fmt(f),
        }
    }
}

impl core::error::Error for ChaserError {}

impl From<ConfigError> for ChaserError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SequenceError> for ChaserError {
    fn from(e: SequenceError) -> Self {
        Self::Sequence(e)
    }
}

impl From<EngineError> for ChaserError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}
