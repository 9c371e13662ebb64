//! Mock GPIO-Treiber für Host-Tests
//!
//! Alle erfolgreichen Aufrufe landen in einem gemeinsamen `EventLog`,
//! damit die Reihenfolge über mehrere Pins hinweg geprüft werden kann.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use lauflicht_core::{LedPin, PinDriver, PinError, PinId, PinSpec};

// ============================================================================
// Event Log
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEvent {
    Open(PinId),
    Set(PinId, bool),
    Close(PinId),
}

#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<PinEvent>>>);

impl EventLog {
    fn push(&self, event: PinEvent) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<PinEvent> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }

    pub fn count(&self, event: PinEvent) -> usize {
        self.0.lock().unwrap().iter().filter(|e| **e == event).count()
    }
}

// ============================================================================
// Mock Pin
// ============================================================================

pub struct MockPin {
    pub id: PinId,
    /// Fortlaufende Nummer pro `open()`, identifiziert die Handle-Instanz
    pub serial: usize,
    pub closed: bool,
    log: EventLog,
    fail_writes: Arc<AtomicBool>,
    fail_close: bool,
}

impl LedPin for MockPin {
    fn set_value(&mut self, on: bool) -> Result<(), PinError> {
        if self.closed {
            return Err(PinError::Closed);
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PinError::WriteFailed);
        }

        self.log.push(PinEvent::Set(self.id, on));
        Ok(())
    }

    fn close(&mut self) -> Result<(), PinError> {
        if self.fail_close {
            return Err(PinError::WriteFailed);
        }
        if !self.closed {
            self.closed = true;
            self.log.push(PinEvent::Close(self.id));
        }
        Ok(())
    }
}

// ============================================================================
// Mock Driver
// ============================================================================

#[derive(Default)]
pub struct MockDriver {
    pub log: EventLog,
    pub opens: usize,
    /// `open()` für diese Leitung schlägt fehl
    pub fail_open: Option<PinId>,
    /// `close()` schlägt auf allen Pins fehl
    pub fail_close: bool,
    /// Ab `true` schlagen alle `set_value()` Aufrufe fehl
    pub fail_writes: Arc<AtomicBool>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl PinDriver for MockDriver {
    type Pin = MockPin;

    fn open(&mut self, spec: &PinSpec) -> Result<MockPin, PinError> {
        if self.fail_open == Some(spec.id) {
            return Err(PinError::OpenFailed);
        }

        self.opens += 1;
        self.log.push(PinEvent::Open(spec.id));

        Ok(MockPin {
            id: spec.id,
            serial: self.opens,
            closed: false,
            log: self.log.clone(),
            fail_writes: self.fail_writes.clone(),
            fail_close: self.fail_close,
        })
    }
}

pub fn on(port: i32, pin: i32) -> PinEvent {
    PinEvent::Set(PinId::new(port, pin), true)
}

pub fn off(port: i32, pin: i32) -> PinEvent {
    PinEvent::Set(PinId::new(port, pin), false)
}
