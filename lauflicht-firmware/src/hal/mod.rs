// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die GPIO-Traits aus lauflicht-core
// für den ESP32-C6. Mocks für Tests liegen in lauflicht-tests.

pub mod gpio_led;

pub use gpio_led::{EspPinDriver, GpioLed};
