//! Integration Tests für Start und Herunterfahren
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockDriver

mod common;

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use common::{MockDriver, PinEvent, off, on};
use lauflicht_core::{
    ChaserError, ConfigError, LightingEngine, MAX_SEQUENCE_LEN, PinError, PinId, Schedule,
    SequenceError, TickOutcome, load_sequence, shutdown, timer_interval_ms,
};

fn cycling_pins(entries: usize) -> String {
    (0..entries).map(|i| format!("0,{}|", i % 4)).collect()
}

// ============================================================================
// Tests: load_sequence()
// ============================================================================

#[test]
fn test_missing_led_pins_is_fatal() {
    let mut driver = MockDriver::new();
    let err = load_sequence(&mut driver, None).unwrap_err();

    assert_eq!(err, ChaserError::Config(ConfigError::MissingLedPins));
    assert_eq!(driver.opens, 0);
}

#[test]
fn test_missing_led_pins_names_attribute() {
    let err = load_sequence(&mut MockDriver::new(), None).unwrap_err();
    assert_eq!(err.to_string(), "\"LEDPins\" attribute not found");
}

#[test]
fn test_too_many_entries_is_fatal() {
    let mut driver = MockDriver::new();
    let err = load_sequence(&mut driver, Some(&cycling_pins(MAX_SEQUENCE_LEN + 1))).unwrap_err();

    assert_eq!(err, ChaserError::Config(ConfigError::TooManyEntries));
    // Kein Teilbetrieb: es wird gar nichts geöffnet
    assert_eq!(driver.opens, 0);
    assert!(driver.log.events().is_empty());
}

#[test]
fn test_full_sequence_keeps_every_entry() {
    let mut driver = MockDriver::new();
    let sequence = load_sequence(&mut driver, Some(&cycling_pins(MAX_SEQUENCE_LEN))).unwrap();

    assert_eq!(sequence.len(), MAX_SEQUENCE_LEN);
    assert_eq!(sequence.distinct_pins(), 4);
}

#[test]
fn test_no_valid_entry_is_fatal() {
    let mut driver = MockDriver::new();
    let err = load_sequence(&mut driver, Some("foo|bar")).unwrap_err();

    assert_eq!(err, ChaserError::Config(ConfigError::NoPinEntries));
    assert_eq!(driver.opens, 0);
}

#[test]
fn test_open_failure_closes_opened_pins() {
    let mut driver = MockDriver::new();
    driver.fail_open = Some(PinId::new(0, 3));

    let err = load_sequence(&mut driver, Some("0,1|0,2|0,1|0,3|0,4")).unwrap_err();

    assert_eq!(
        err,
        ChaserError::Sequence(SequenceError::Open {
            pin: PinId::new(0, 3),
            cause: PinError::OpenFailed,
        })
    );
    assert_eq!(driver.log.count(PinEvent::Close(PinId::new(0, 1))), 1);
    assert_eq!(driver.log.count(PinEvent::Close(PinId::new(0, 2))), 1);
    assert_eq!(driver.log.count(PinEvent::Open(PinId::new(0, 4))), 0);
}

#[test]
fn test_timer_interval_attribute() {
    assert_eq!(timer_interval_ms(Some("40")), 40);
    assert_eq!(timer_interval_ms(Some("abc")), 100);
    assert_eq!(timer_interval_ms(None), 100);
}

// ============================================================================
// Tests: shutdown()
// ============================================================================

#[test]
fn test_shutdown_closes_each_pin_once() {
    let mut driver = MockDriver::new();
    let mut sequence = load_sequence(&mut driver, Some("0,1|0,2|0,1|0,2")).unwrap();
    let schedule = Schedule::new();
    driver.log.clear();

    shutdown(&schedule, &mut sequence);

    assert!(schedule.is_cancelled());
    assert_eq!(
        driver.log.events(),
        vec![
            off(0, 1),
            PinEvent::Close(PinId::new(0, 1)),
            off(0, 2),
            PinEvent::Close(PinId::new(0, 2)),
        ]
    );
    assert!(sequence.pins().iter().all(|p| p.closed));
}

#[test]
fn test_shutdown_ignores_close_errors() {
    let mut driver = MockDriver::new();
    driver.fail_close = true;
    let mut sequence = load_sequence(&mut driver, Some("0,1|0,2|0,3")).unwrap();
    driver.log.clear();

    shutdown(&Schedule::new(), &mut sequence);

    // Jeder Pin wird trotzdem ausgeschaltet
    assert_eq!(driver.log.events(), vec![off(0, 1), off(0, 2), off(0, 3)]);
}

#[test]
fn test_tick_after_shutdown_halts_engine() {
    let mut driver = MockDriver::new();
    let mut sequence = load_sequence(&mut driver, Some("0,1|0,2")).unwrap();
    let mut engine = LightingEngine::new(&sequence).unwrap();
    let schedule = Schedule::new();

    assert_eq!(
        engine.tick(sequence.pins_mut()),
        TickOutcome::Lit { index: 0 }
    );

    shutdown(&schedule, &mut sequence);
    driver.log.clear();

    // Nachzügler-Tick: trifft auf geschlossene Pins und stoppt sich selbst
    assert_eq!(
        engine.tick(sequence.pins_mut()),
        TickOutcome::Halted(PinError::Closed)
    );
    assert_eq!(engine.tick(sequence.pins_mut()), TickOutcome::Cancelled);
    assert!(driver.log.events().is_empty());
}

#[test]
fn test_shutdown_races_with_ticking_thread() {
    let mut driver = MockDriver::new();
    let sequence = load_sequence(&mut driver, Some("0,1|0,2|0,3|0,2")).unwrap();
    let mut engine = LightingEngine::new(&sequence).unwrap();

    let sequence = Arc::new(Mutex::new(sequence));
    let schedule = Arc::new(Schedule::new());

    let ticker = {
        let sequence = sequence.clone();
        let schedule = schedule.clone();
        thread::spawn(move || {
            loop {
                // Abbruch wird erst nach dem Tick geprüft, wie bei einem
                // Timer, der den laufenden Task nicht unterbricht
                let outcome = engine.tick(sequence.lock().unwrap().pins_mut());
                if !matches!(outcome, TickOutcome::Lit { .. }) || schedule.is_cancelled() {
                    return engine;
                }
                thread::sleep(Duration::from_millis(1));
            }
        })
    };

    thread::sleep(Duration::from_millis(20));
    shutdown(&schedule, &mut *sequence.lock().unwrap());

    let mut engine = ticker.join().expect("tick thread must not panic");

    // Spätestens der nächste Tick stoppt die Engine
    let outcome = engine.tick(sequence.lock().unwrap().pins_mut());
    assert!(matches!(
        outcome,
        TickOutcome::Halted(PinError::Closed) | TickOutcome::Cancelled
    ));

    // Nach dem Herunterfahren ist jede LED aus und geschlossen
    let events = driver.log.events();
    for pin in 1..=3 {
        let id = PinId::new(0, pin);
        let last = events
            .iter()
            .rev()
            .find(|e| matches!(e, PinEvent::Set(p, _) | PinEvent::Close(p) if *p == id));
        assert_eq!(last, Some(&PinEvent::Close(id)));
        assert_eq!(driver.log.count(PinEvent::Close(id)), 1);
    }
    assert!(driver.log.count(on(0, 1)) >= 1);
}
