// GPIO LED Ausgang und Treiber
//
// Implementiert die Traits aus lauflicht-core mit esp-hal `Output` Pins.

use defmt::info;
use esp_hal::gpio::{AnyPin, DriveMode, Level, Output, OutputConfig};
use lauflicht_core::{DriveMode as SpecDriveMode, LedPin, PinDriver, PinError, PinSpec};

use crate::config::{GPIO_PORT, MAX_GPIO_PIN, RESERVED_GPIO_PINS};

/// LED an einem GPIO-Ausgang
///
/// `close()` gibt den `Output` frei. Danach schlägt jedes `set_value()`
/// mit `PinError::Closed` fehl, ein weiteres `close()` ist wirkungslos.
pub struct GpioLed {
    output: Option<Output<'static>>,
}

impl GpioLed {
    pub fn new(output: Output<'static>) -> Self {
        Self {
            output: Some(output),
        }
    }
}

impl LedPin for GpioLed {
    fn set_value(&mut self, on: bool) -> Result<(), PinError> {
        let output = self.output.as_mut().ok_or(PinError::Closed)?;
        output.set_level(Level::from(on));
        Ok(())
    }

    fn close(&mut self) -> Result<(), PinError> {
        // Drop des Output setzt den Pin zurück
        self.output = None;
        Ok(())
    }
}

/// GPIO-Treiber für den ESP32-C6
///
/// Akzeptiert nur Port 0 und die frei nutzbaren GPIOs. Reservierte Pins
/// (Stopp-Taster, USB) werden abgelehnt.
pub struct EspPinDriver {
    _private: (),
}

impl EspPinDriver {
    /// Erstellt den Treiber
    ///
    /// # Safety
    /// Der Aufrufer darf die GPIOs `0..=MAX_GPIO_PIN` (außer den
    /// reservierten) nicht anderweitig aus den Peripherals verwenden.
    /// Da `build_sequence` jede `PinId` nur einmal öffnet, wird kein GPIO
    /// doppelt vergeben.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl PinDriver for EspPinDriver {
    type Pin = GpioLed;

    fn open(&mut self, spec: &PinSpec) -> Result<GpioLed, PinError> {
        let id = spec.id;
        if id.port != GPIO_PORT
            || !(0..=MAX_GPIO_PIN).contains(&id.pin)
            || RESERVED_GPIO_PINS.contains(&id.pin)
        {
            return Err(PinError::InvalidPin(id));
        }

        let drive_mode = match spec.drive_mode {
            SpecDriveMode::PushPull => DriveMode::PushPull,
        };
        let config = OutputConfig::default().with_drive_mode(drive_mode);

        // SAFETY: Pin-Nummer ist geprüft und nicht reserviert, siehe `EspPinDriver::new`
        let pin = unsafe { AnyPin::steal(id.pin as u8) };
        let output = Output::new(pin, Level::from(spec.initial_value), config);

        info!("Opened GPIO{} as push-pull output", id.pin);
        Ok(GpioLed::new(output))
    }
}
