//! Start und Herunterfahren des Lauflichts
//!
//! Verbindet Parser, Sequenz-Aufbau und Schedule. Die eigentliche
//! Ausführung (Task spawnen, Timer) übernimmt die Firmware.

use crate::error::{ChaserError, ConfigError};
use crate::parser::parse_pin_specs;
use crate::schedule::Schedule;
use crate::sequence::{BuildError, LedSequence, build_sequence};
use crate::traits::{LedPin, PinDriver};

/// Baut die LED-Sequenz aus dem Attribut "LEDPins"
///
/// # Fehlerbehandlung
/// - `ConfigError::MissingLedPins` wenn das Attribut fehlt
/// - `ConfigError::NoPinEntries` wenn kein Eintrag gültig ist
/// - `ConfigError::TooManyEntries` wenn die Sequenz nicht vollständig passt
/// - `SequenceError::Open` wenn ein Pin nicht geöffnet werden kann. Die
///   bis dahin geöffneten Pins werden vorher wieder geschlossen.
pub fn load_sequence<D: PinDriver>(
    driver: &mut D,
    led_pins: Option<&str>,
) -> Result<LedSequence<D::Pin>, ChaserError> {
    let led_pins = led_pins.ok_or(ConfigError::MissingLedPins)?;

    let specs = parse_pin_specs(led_pins)?;
    if specs.is_empty() {
        return Err(ConfigError::NoPinEntries.into());
    }

    info!("Opening {} LED pins", specs.len());
    match build_sequence(driver, &specs) {
        Ok(sequence) => Ok(sequence),
        Err(BuildError { error, mut partial }) => {
            partial.teardown();
            Err(error.into())
        }
    }
}

/// Stoppt weitere Ticks und gibt alle Pins frei
///
/// Der Abbruch ist nur eine Anforderung: ein gerade laufender Tick kann
/// danach noch auf bereits geschlossene Pins treffen und stoppt sich dann
/// selbst.
pub fn shutdown<P: LedPin>(schedule: &Schedule, sequence: &mut LedSequence<P>) {
    schedule.cancel();
    sequence.teardown();
}
