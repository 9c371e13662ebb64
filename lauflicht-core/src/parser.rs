//! Parser für das Attribut "LEDPins"
//!
//! Format: `Port,Pin|Port,Pin|...`. Fehlerhafte Einträge werden
//! übersprungen. Nur zu viele gültige Einträge sind ein Fehler.

use heapless::Vec;

use crate::error::{ConfigError, EntryError};
use crate::types::{MAX_SEQUENCE_LEN, PinSpec};

/// Geparste Pin-Konfigurationen in Eingabe-Reihenfolge (mit Duplikaten)
pub type PinSpecList = Vec<PinSpec, MAX_SEQUENCE_LEN>;

const ENTRY_SEPARATOR: char = '|';
const FIELD_SEPARATOR: char = ',';

/// Parst einen einzelnen `Port,Pin` Eintrag
///
/// Leere Felder werden übersprungen, Felder nach dem Pin ignoriert.
///
/// ```
/// # use lauflicht_core::{parse_entry, PinId};
/// let spec = parse_entry("0,17").unwrap();
/// assert_eq!(spec.id, PinId::new(0, 17));
/// ```
pub fn parse_entry(entry: &str) -> Result<PinSpec, EntryError> {
    let mut fields = entry.split(FIELD_SEPARATOR).filter(|f| !f.is_empty());

    let port = fields.next().ok_or(EntryError::MissingPort)?;
    let pin = fields.next().ok_or(EntryError::MissingPin)?;

    let port = port.parse::<i32>().map_err(|_| EntryError::InvalidNumber)?;
    let pin = pin.parse::<i32>().map_err(|_| EntryError::InvalidNumber)?;

    Ok(PinSpec::output(port, pin))
}

/// Zerlegt den kompletten "LEDPins" String in Pin-Konfigurationen
///
/// Reihenfolge und Wiederholungen bleiben erhalten. Eine leere Liste
/// muss vom Aufrufer als Konfigurationsfehler behandelt werden.
///
/// # Fehlerbehandlung
/// `ConfigError::TooManyEntries` wenn mehr als `MAX_SEQUENCE_LEN` gültige
/// Einträge vorhanden sind. Eine gekürzte Sequenz wird nie geliefert.
pub fn parse_pin_specs(text: &str) -> Result<PinSpecList, ConfigError> {
    let mut specs = PinSpecList::new();

    for entry in text.split(ENTRY_SEPARATOR).filter(|e| !e.is_empty()) {
        match parse_entry(entry) {
            Ok(spec) => {
                debug!("parsed pin config: {},{}", spec.id.port, spec.id.pin);
                if specs.push(spec).is_err() {
                    warn!(
                        "LED sequence full ({} entries) at '{}'",
                        MAX_SEQUENCE_LEN, entry
                    );
                    return Err(ConfigError::TooManyEntries);
                }
            }
            Err(e) => {
                warn!("Error while parsing pin configuration '{}': {}", entry, e);
            }
        }
    }

    Ok(specs)
}
