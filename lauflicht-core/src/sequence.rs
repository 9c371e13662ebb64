//! LED-Sequenz: geöffnete Pins + Reihenfolge
//!
//! Jede unterschiedliche `PinId` wird genau einmal geöffnet. Die Reihenfolge
//! speichert pro Eintrag nur einen Slot-Index in die geöffneten Pins, so
//! dass wiederholte Einträge denselben Handle teilen.

use heapless::{LinearMap, Vec};

use crate::error::SequenceError;
use crate::traits::{LedPin, PinDriver};
use crate::types::{MAX_DISTINCT_PINS, MAX_SEQUENCE_LEN, PinId, PinSpec};

/// Geordnete Sequenz von LED-Handles
///
/// Besitzt die geöffneten Pins exklusiv. `slots[i]` ist der Index des
/// Pins, der an Position `i` leuchtet.
pub struct LedSequence<P> {
    pins: Vec<P, MAX_DISTINCT_PINS>,
    ids: Vec<PinId, MAX_DISTINCT_PINS>,
    slots: Vec<usize, MAX_SEQUENCE_LEN>,
}

impl<P> core::fmt::Debug for LedSequence<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LedSequence")
            .field("pins", &self.ids.as_slice())
            .field("slots", &self.slots.as_slice())
            .finish()
    }
}

impl<P> LedSequence<P> {
    pub const fn new() -> Self {
        Self {
            pins: Vec::new(),
            ids: Vec::new(),
            slots: Vec::new(),
        }
    }

    /// Anzahl Positionen (inkl. Wiederholungen)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Anzahl tatsächlich geöffneter Pins
    pub fn distinct_pins(&self) -> usize {
        self.pins.len()
    }

    /// Slot-Indizes in Sequenz-Reihenfolge
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Slot des Handles an Position `index`
    pub fn slot(&self, index: usize) -> Option<usize> {
        self.slots.get(index).copied()
    }

    pub fn pins(&self) -> &[P] {
        &self.pins
    }

    /// Mutable Sicht auf die geöffneten Pins (für `LightingEngine::tick`)
    pub fn pins_mut(&mut self) -> &mut [P] {
        &mut self.pins
    }

    fn push_slot(&mut self, slot: usize) -> Result<(), SequenceError> {
        self.slots
            .push(slot)
            .map_err(|_| SequenceError::CapacityExceeded)
    }
}

impl<P: LedPin> LedSequence<P> {
    /// Schaltet jeden geöffneten Pin aus und schließt ihn
    ///
    /// Fehler einzelner Pins werden ignoriert, es geht mit dem nächsten
    /// weiter. Jeder Pin wird genau einmal geschlossen, auch wenn er
    /// mehrfach in der Sequenz vorkommt.
    pub fn teardown(&mut self) {
        for (pin, id) in self.pins.iter_mut().zip(self.ids.iter()) {
            if let Err(e) = pin.set_value(false) {
                debug!("Ignoring error while switching off pin {}: {}", id, e);
            }
            if let Err(e) = pin.close() {
                debug!("Ignoring error while closing pin {}: {}", id, e);
            }
        }
    }
}

/// Abgebrochener Sequenz-Aufbau
///
/// Enthält die bis zum Fehler geöffneten Pins. Der Aufrufer ist für
/// deren Freigabe zuständig (siehe `lifecycle::load_sequence`).
pub struct BuildError<P> {
    pub error: SequenceError,
    pub partial: LedSequence<P>,
}

impl<P> core::fmt::Debug for BuildError<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BuildError")
            .field("error", &self.error)
            .field("partial", &self.partial)
            .finish()
    }
}

/// Öffnet die Pins für `specs` und baut daraus die LED-Sequenz
///
/// Für N Einträge mit K unterschiedlichen `PinId` erfolgen genau K
/// `open()` Aufrufe, die Sequenz hat die Länge N. Jeder neu geöffnete Pin
/// wird sofort ausgeschaltet.
pub fn build_sequence<D: PinDriver>(
    driver: &mut D,
    specs: &[PinSpec],
) -> Result<LedSequence<D::Pin>, BuildError<D::Pin>> {
    let mut sequence = LedSequence::new();
    let mut opened: LinearMap<PinId, usize, MAX_DISTINCT_PINS> = LinearMap::new();

    for spec in specs {
        if let Err(error) = push_spec(driver, spec, &mut sequence, &mut opened) {
            return Err(BuildError {
                error,
                partial: sequence,
            });
        }
    }

    Ok(sequence)
}

fn push_spec<D: PinDriver>(
    driver: &mut D,
    spec: &PinSpec,
    sequence: &mut LedSequence<D::Pin>,
    opened: &mut LinearMap<PinId, usize, MAX_DISTINCT_PINS>,
) -> Result<(), SequenceError> {
    // Bereits geöffnet: denselben Handle wiederverwenden
    if let Some(&slot) = opened.get(&spec.id) {
        return sequence.push_slot(slot);
    }

    if sequence.pins.is_full() || sequence.slots.is_full() {
        return Err(SequenceError::CapacityExceeded);
    }

    info!("Open GPIO pin {}", spec.id);
    let mut pin = driver.open(spec).map_err(|cause| SequenceError::Open {
        pin: spec.id,
        cause,
    })?;

    let forced_off = pin.set_value(spec.initial_value);

    let slot = sequence.pins.len();
    // Kapazität wurde oben geprüft
    let _ = sequence.pins.push(pin);
    let _ = sequence.ids.push(spec.id);
    let _ = opened.insert(spec.id, slot);

    forced_off.map_err(|cause| SequenceError::Open {
        pin: spec.id,
        cause,
    })?;

    sequence.push_slot(slot)
}
