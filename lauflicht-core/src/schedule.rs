//! Abbruch-Signal für den periodischen Lauflicht-Task
//!
//! `cancel()` wirkt kooperativ: ein bereits laufender Tick wird nicht
//! unterbrochen, erst der nächste Durchlauf der Schleife sieht den Abbruch.

use core::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct Schedule {
    cancelled: AtomicBool,
}

impl Schedule {
    pub const fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
        }
    }

    /// Fordert den Stopp weiterer Ticks an (blockiert nicht)
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
