//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstelle zum GPIO-Treiber
//! ohne konkrete Implementierung.

use core::fmt;

use crate::types::{PinId, PinSpec};

/// Fehler-Typ für GPIO-Operationen
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    /// Port/Pin existiert auf dieser Plattform nicht oder ist reserviert
    InvalidPin(PinId),
    /// Öffnen der Leitung fehlgeschlagen
    OpenFailed,
    /// Schreiben des Pegels fehlgeschlagen
    WriteFailed,
    /// Handle wurde bereits geschlossen
    Closed,
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinError::InvalidPin(id) => write!(f, "invalid pin {id}"),
            PinError::OpenFailed => write!(f, "failed to open pin"),
            PinError::WriteFailed => write!(f, "failed to set pin value"),
            PinError::Closed => write!(f, "pin is closed"),
        }
    }
}

impl core::error::Error for PinError {}

/// Trait für einen geöffneten LED-Ausgang
///
/// # Implementierungen
/// - **Production:** GpioLed (esp-hal `Output`)
/// - **Testing:** MockPin (zeichnet alle Aufrufe auf)
///
/// # Vertrag
/// Nach `close()` muss jedes weitere `set_value()` mit einem Fehler
/// zurückkehren (typischerweise `PinError::Closed`), nicht paniken.
pub trait LedPin {
    /// Setzt den Ausgangspegel (`true` = LED an)
    fn set_value(&mut self, on: bool) -> Result<(), PinError>;

    /// Gibt die Leitung frei
    fn close(&mut self) -> Result<(), PinError>;
}

/// Trait für den GPIO-Treiber, der Leitungen öffnet
pub trait PinDriver {
    type Pin: LedPin;

    /// Öffnet eine Leitung gemäß `spec` als Ausgang
    fn open(&mut self, spec: &PinSpec) -> Result<Self::Pin, PinError>;
}
