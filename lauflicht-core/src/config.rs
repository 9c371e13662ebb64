//! Auswertung der Konfigurations-Attribute
//!
//! Woher die Strings kommen (Build-Environment, Flash, ...) entscheidet
//! die Firmware. Hier wird nur das Format ausgewertet.

/// Attribut-Name für die LED-Pins (`Port,Pin|Port,Pin|...`)
pub const LED_PINS_ATTRIBUTE: &str = "LEDPins";

/// Attribut-Name für das Tick-Intervall in Millisekunden
pub const TIMER_INTERVAL_ATTRIBUTE: &str = "TimerInterval";

/// Standard-Intervall: 100 ms (10 Hz)
pub const DEFAULT_TIMER_INTERVAL_MS: u64 = 100;

/// Liest das Tick-Intervall
///
/// Fehlt der Wert oder ist er keine positive Ganzzahl, wird
/// [`DEFAULT_TIMER_INTERVAL_MS`] verwendet.
///
/// ```
/// # use lauflicht_core::timer_interval_ms;
/// assert_eq!(timer_interval_ms(Some("250")), 250);
/// assert_eq!(timer_interval_ms(None), 100);
/// ```
pub fn timer_interval_ms(value: Option<&str>) -> u64 {
    match value.map(str::parse::<u64>) {
        Some(Ok(ms)) if ms > 0 => ms,
        Some(_) => {
            warn!(
                "Invalid {} value, using default {} ms",
                TIMER_INTERVAL_ATTRIBUTE, DEFAULT_TIMER_INTERVAL_MS
            );
            DEFAULT_TIMER_INTERVAL_MS
        }
        None => DEFAULT_TIMER_INTERVAL_MS,
    }
}
