// Stopp-Taster Task - Löst das Herunterfahren des Lauflichts aus
use defmt::info;
use embassy_time::{Duration, Timer};
use esp_hal::gpio::{Input, InputConfig, Pull};

use crate::StopSignal;
use crate::config::STOP_BUTTON_DEBOUNCE_MS;

/// Wartet auf einen entprellten Tastendruck (Low-aktiv)
async fn wait_for_press(button: &mut Input<'_>) {
    loop {
        button.wait_for_falling_edge().await;
        Timer::after(Duration::from_millis(STOP_BUTTON_DEBOUNCE_MS)).await;
        if button.is_low() {
            break;
        }
    }
}

/// Stopp-Taster Task
///
/// Signalisiert main einmalig, dass das Lauflicht heruntergefahren
/// werden soll, und endet dann.
///
/// # Parameter
/// - `gpio9`: GPIO9 Peripheral (BOOT-Taster)
/// - `stop`: Signal an main
#[embassy_executor::task]
pub async fn stop_button_task(gpio9: esp_hal::peripherals::GPIO9<'static>, stop: &'static StopSignal) {
    let mut button = Input::new(gpio9, InputConfig::default().with_pull(Pull::Up));

    wait_for_press(&mut button).await;

    info!("Stop button pressed");
    stop.signal(());
}
