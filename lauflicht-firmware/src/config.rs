// Projekt-Konfiguration: Attribute und Hardware-Zuordnungen

// ============================================================================
// Lauflicht Attribute
// ============================================================================

/// Attribut "LEDPins": Sequenz der LED-Pins im Format `Port,Pin|Port,Pin|...`
/// Wird zur Build-Zeit aus der Environment Variable LED_PINS geladen
/// Setze diese in .env file (z.B. `LED_PINS=0,0|0,1|0,2|0,3|0,2|0,1`)
/// Fehlt der Wert, bricht die Firmware beim Start mit einem Konfigurationsfehler ab
pub const LED_PINS: Option<&str> = option_env!("LED_PINS");

/// Attribut "TimerInterval": Tick-Intervall in Millisekunden
/// Wird zur Build-Zeit aus der Environment Variable TIMER_INTERVAL geladen
/// Fehlt der Wert oder ist er ungültig, gilt der Default von 100 ms
pub const TIMER_INTERVAL: Option<&str> = option_env!("TIMER_INTERVAL");

// ============================================================================
// GPIO Konfiguration
// ============================================================================

/// Einziger GPIO-Port des ESP32-C6
pub const GPIO_PORT: i32 = 0;

/// Höchste frei nutzbare GPIO-Nummer
/// GPIO24-30 sind mit dem SPI-Flash verbunden
pub const MAX_GPIO_PIN: i32 = 23;

/// GPIOs die nicht als LED genutzt werden dürfen
/// - GPIO9: BOOT-Taster (Stopp-Taster)
/// - GPIO12/13: USB-Serial-JTAG (Logging/Flashen)
pub const RESERVED_GPIO_PINS: [i32; 3] = [STOP_BUTTON_PIN, 12, 13];

/// GPIO des Stopp-Tasters (BOOT-Taster auf dem DevKit, Low-aktiv)
pub const STOP_BUTTON_PIN: i32 = 9;

/// Entprell-Zeit des Stopp-Tasters in Millisekunden
pub const STOP_BUTTON_DEBOUNCE_MS: u64 = 20;

/// Schlaf-Intervall von main() nach dem Herunterfahren in Sekunden
pub const IDLE_INTERVAL_SECS: u64 = 3600;
