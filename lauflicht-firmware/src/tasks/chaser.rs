// Lauflicht Task - Schaltet periodisch die nächste LED der Sequenz ein
use core::cell::RefCell;

use defmt::{debug, info};
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Ticker};
use lauflicht_core::PinError;

use crate::{LedPin, LedSequence, LightingEngine, Schedule, SharedSequence, TickOutcome};

/// Lauflicht Logic - Testbare Tick-Schleife ohne Hardware-Abhängigkeit
///
/// Ruft bei jedem Ticker-Intervall `engine.tick()` auf, bis
/// - der Schedule abgebrochen wurde (Herunterfahren angefordert) oder
/// - die Engine sich wegen eines I/O-Fehlers selbst gestoppt hat.
///
/// Der erste Tick erfolgt sofort.
///
/// # Parameter
/// - `engine`: Lauflicht-Engine mit eigener Kopie der Reihenfolge
/// - `sequence`: Geteilte LED-Sequenz (`None` nach dem Herunterfahren)
/// - `schedule`: Abbruch-Signal von main
/// - `interval`: Tick-Intervall
pub async fn chaser_logic<P: LedPin>(
    mut engine: LightingEngine,
    sequence: &Mutex<CriticalSectionRawMutex, RefCell<Option<LedSequence<P>>>>,
    schedule: &Schedule,
    interval: Duration,
) {
    let mut ticker = Ticker::every(interval);

    loop {
        // Abbruch ist kooperativ: wird erst vor dem nächsten Tick geprüft
        if schedule.is_cancelled() {
            info!("Chaser: Schedule cancelled");
            break;
        }

        let outcome = sequence.lock(|cell| match cell.borrow_mut().as_mut() {
            Some(sequence) => engine.tick(sequence.pins_mut()),
            None => {
                // Sequenz wurde bereits freigegeben
                engine.halt();
                TickOutcome::Halted(PinError::Closed)
            }
        });

        match outcome {
            TickOutcome::Lit { index } => debug!("Chaser: LED #{} on", index),
            // I/O-Fehler wurde bereits von der Engine geloggt
            TickOutcome::Halted(_) | TickOutcome::Cancelled => break,
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        ticker.next().await;
    }
}

/// Lauflicht Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `engine`: Lauflicht-Engine (aus der aufgebauten Sequenz erstellt)
/// - `sequence`: Geteilte LED-Sequenz
/// - `schedule`: Abbruch-Signal von main
/// - `interval_ms`: Tick-Intervall in Millisekunden
#[embassy_executor::task]
pub async fn chaser_task(
    engine: LightingEngine,
    sequence: &'static SharedSequence,
    schedule: &'static Schedule,
    interval_ms: u64,
) {
    info!(
        "Chaser: Starting with {} LEDs every {} ms",
        engine.len(),
        interval_ms
    );

    chaser_logic(engine, sequence, schedule, Duration::from_millis(interval_ms)).await;

    info!("Chaser: Task finished");
}
