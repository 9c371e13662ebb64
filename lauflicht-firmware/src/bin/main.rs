// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use core::cell::RefCell;

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_lauflicht::config::{IDLE_INTERVAL_SECS, LED_PINS, TIMER_INTERVAL};
use esp_lauflicht::hal::{EspPinDriver, GpioLed};
use esp_lauflicht::tasks::{chaser_task, stop_button_task};
use esp_lauflicht::{
    ChaserError, LedSequence, LightingEngine, Schedule, SharedSequence, StopSignal,
    load_sequence, shutdown, timer_interval_ms,
};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Abbruch-Signal für den Lauflicht-Task
static SCHEDULE: Schedule = Schedule::new();

/// Baut LED-Sequenz und Engine aus den Attributen "LEDPins"
///
/// Konfigurations- und Open-Fehler sind fatal: es gibt keinen
/// Teilbetrieb mit einer unvollständigen Sequenz.
fn start_chaser(
    driver: &mut EspPinDriver,
) -> Result<(LedSequence<GpioLed>, LightingEngine), ChaserError> {
    let sequence = load_sequence(driver, LED_PINS)?;
    let engine = LightingEngine::new(&sequence)?;
    Ok((sequence, engine))
}

/// Main Entry Point
///
/// Initialisiert Hardware, öffnet die LED-Pins, startet den Lauflicht-Task
/// und fährt nach einem Druck auf den Stopp-Taster wieder herunter.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("Starting Lauflicht application");

    // LED-Sequenz aufbauen
    // SAFETY: Außer GPIO9 (Stopp-Taster) wird kein GPIO aus `peripherals` verwendet
    let mut driver = unsafe { EspPinDriver::new() };
    let (sequence, engine) = match start_chaser(&mut driver) {
        Ok(started) => started,
        Err(e) => defmt::panic!("Lauflicht startup failed: {}", e),
    };

    // Tick-Intervall aus Attribut "TimerInterval" (Default 100 ms)
    let interval_ms = timer_interval_ms(TIMER_INTERVAL);

    // Sequenz muss 'static sein für Tasks
    static SEQUENCE: static_cell::StaticCell<SharedSequence> = static_cell::StaticCell::new();
    let sequence = &*SEQUENCE.init(Mutex::new(RefCell::new(Some(sequence))));

    // Stopp-Signal erstellen (Stopp-Taster → main)
    static STOP: static_cell::StaticCell<StopSignal> = static_cell::StaticCell::new();
    let stop = &*STOP.init(StopSignal::new());

    // Spawn Stopp-Taster Task
    spawner
        .spawn(stop_button_task(peripherals.GPIO9, stop))
        .unwrap();

    // Spawn Lauflicht Task
    info!("Starting LED timer ({} ms)", interval_ms);
    spawner
        .spawn(chaser_task(engine, sequence, &SCHEDULE, interval_ms))
        .unwrap();

    // Warten bis das Herunterfahren angefordert wird
    stop.wait().await;
    info!("Stopping Lauflicht application");

    // Erst Ticks abbrechen, dann jeden Pin aus- und zuschalten.
    // Ein Nachzügler-Tick findet danach `None` vor und stoppt sich selbst.
    sequence.lock(|cell| {
        if let Some(mut leds) = cell.borrow_mut().take() {
            shutdown(&SCHEDULE, &mut leds);
        }
    });
    info!("All LED pins closed");

    // Main-Loop: schläft (Lauflicht ist beendet)
    loop {
        Timer::after(Duration::from_secs(IDLE_INTERVAL_SECS)).await;
    }
}
