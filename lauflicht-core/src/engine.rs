//! Lauflicht-State-Machine
//!
//! Bei jedem Tick wird die vorherige LED aus- und die aktuelle LED
//! eingeschaltet, danach rückt der Index zyklisch weiter.

use heapless::Vec;

use crate::error::EngineError;
use crate::sequence::LedSequence;
use crate::traits::{LedPin, PinError};
use crate::types::MAX_SEQUENCE_LEN;

/// Ergebnis eines Ticks
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// LED an Position `index` wurde eingeschaltet
    Lit { index: usize },
    /// Hardware-Fehler: Engine hat sich selbst gestoppt
    Halted(PinError),
    /// Engine war bereits gestoppt, keine Hardware-Zugriffe
    Cancelled,
}

/// Lauflicht-Engine
///
/// Hält eine private Kopie der Slot-Reihenfolge der Sequenz. Die Pins
/// selbst werden bei jedem `tick()` übergeben.
#[derive(Debug, Clone)]
pub struct LightingEngine {
    slots: Vec<usize, MAX_SEQUENCE_LEN>,
    current: usize,
    previous: Option<usize>,
    cancelled: bool,
}

impl LightingEngine {
    /// Erstellt die Engine für eine aufgebaute Sequenz
    ///
    /// # Fehlerbehandlung
    /// Gibt `EngineError::EmptySequence` zurück wenn die Sequenz leer ist
    pub fn new<P>(sequence: &LedSequence<P>) -> Result<Self, EngineError> {
        Self::from_slots(sequence.slots())
    }

    /// Erstellt die Engine direkt aus einer Slot-Reihenfolge
    pub fn from_slots(slots: &[usize]) -> Result<Self, EngineError> {
        if slots.is_empty() {
            return Err(EngineError::EmptySequence);
        }
        let slots = Vec::from_slice(slots).map_err(|_| EngineError::SequenceTooLong)?;

        Ok(Self {
            slots,
            current: 0,
            previous: None,
            cancelled: false,
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index der LED, die beim nächsten Tick eingeschaltet wird
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Index der zuletzt eingeschalteten LED (`None` vor dem ersten Tick)
    pub fn previous_index(&self) -> Option<usize> {
        self.previous
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Stoppt die Engine ohne Hardware-Zugriff
    pub fn halt(&mut self) {
        self.cancelled = true;
    }

    /// Führt einen Lauflicht-Schritt aus
    ///
    /// Ein I/O-Fehler (z.B. weil die Pins beim Herunterfahren bereits
    /// geschlossen wurden) stoppt die Engine dauerhaft. Der Fehler wird
    /// nur gemeldet, nie weitergereicht.
    pub fn tick<P: LedPin>(&mut self, pins: &mut [P]) -> TickOutcome {
        if self.cancelled {
            return TickOutcome::Cancelled;
        }

        match self.step(pins) {
            Ok(index) => TickOutcome::Lit { index },
            Err(e) => {
                self.cancelled = true;
                info!("I/O error while setting LED value ({}), stopping", e);
                TickOutcome::Halted(e)
            }
        }
    }

    fn step<P: LedPin>(&mut self, pins: &mut [P]) -> Result<usize, PinError> {
        // Vorherige LED ausschalten
        if let Some(previous) = self.previous {
            pin_at(pins, self.slots[previous])?.set_value(false)?;
        }

        // Aktuelle LED einschalten
        let index = self.current;
        pin_at(pins, self.slots[index])?.set_value(true)?;

        self.previous = Some(index);
        self.current = (index + 1) % self.slots.len();

        Ok(index)
    }
}

// Slot außerhalb der Pins: Sequenz wurde bereits freigegeben
fn pin_at<P>(pins: &mut [P], slot: usize) -> Result<&mut P, PinError> {
    pins.get_mut(slot).ok_or(PinError::Closed)
}
