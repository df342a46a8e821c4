//! Interrupt flag shared between the INT line handler and a demo's main loop.
//!
//! The platform binds its falling-edge handler for the APDS-9960 INT line to
//! [`InterruptFlag::raise`]. The main loop observes the flag, handles the
//! event, and only then calls [`InterruptFlag::acknowledge`]. Edges arriving
//! while an event is being handled collapse into that same pass.
//!
//! ```rust
//! use apds9960_demos::InterruptFlag;
//!
//! static APDS_INT: InterruptFlag = InterruptFlag::new();
//!
//! // Inside the platform's edge handler:
//! APDS_INT.raise();
//!
//! assert!(APDS_INT.is_pending());
//! APDS_INT.acknowledge();
//! assert!(!APDS_INT.is_pending());
//! ```

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;

/// Single-slot wake-up signal with no payload.
#[derive(Debug, Default)]
pub struct InterruptFlag {
    pending: AtomicBool,
}

impl InterruptFlag {
    /// Creates a cleared flag, usable in a `static`.
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Marks an event as pending. Safe to call from interrupt context.
    #[inline]
    pub fn raise(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Returns `true` if an event was raised and not yet acknowledged.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Clears the flag once the pending event has been fully handled.
    #[inline]
    pub fn acknowledge(&self) {
        self.pending.store(false, Ordering::Release);
    }

    /// Blocks until the flag is raised, sleeping `poll_interval_ms` between checks.
    pub fn wait(&self, delay: &mut impl DelayNs, poll_interval_ms: u32) {
        while !self.is_pending() {
            delay.delay_ms(poll_interval_ms);
        }
    }
}
