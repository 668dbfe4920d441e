//! Minimal cooperative scheduler for [`PollingComponent`]s.
//!
//! Firmware main loops call [`Poller::poll`] as often as they like; the
//! poller runs setup once and then ticks the component whenever its
//! interval has elapsed.
//!
//! # Example
//!
//! ```rust
//! use rs_max7219::{Max7219, scheduler::Poller};
//! use rs_max7219::hal::{FakeChain, MockClock};
//!
//! let mut display = Max7219::new(FakeChain::new(1), 1);
//! display.set_update_interval_ms(100);
//! display.set_writer(|d| {
//!     d.print("RUN");
//! });
//!
//! let mut clock = MockClock::new();
//! let mut poller = Poller::new(display);
//!
//! assert!(poller.poll(&clock).unwrap()); // setup + first update
//! clock.advance(50);
//! assert!(!poller.poll(&clock).unwrap()); // not due yet
//! clock.advance(50);
//! assert!(poller.poll(&clock).unwrap());
//! ```

use crate::traits::{Clock, PollingComponent};

/// Drives one component from a [`Clock`].
#[derive(Debug)]
pub struct Poller<C> {
    component: C,
    last_update_ms: Option<u64>,
    setup_done: bool,
}

impl<C: PollingComponent> Poller<C> {
    /// Wraps `component`; nothing runs until the first [`poll`](Self::poll).
    pub fn new(component: C) -> Self {
        Self {
            component,
            last_update_ms: None,
            setup_done: false,
        }
    }

    /// Runs setup if it has not run yet, then updates if due.
    ///
    /// Returns whether an update ran. A failed setup is retried on the
    /// next poll.
    pub fn poll<K: Clock>(&mut self, clock: &K) -> Result<bool, C::Error> {
        if !self.setup_done {
            self.component.setup()?;
            self.setup_done = true;
        }

        let now = clock.now_ms();
        let interval = u64::from(self.component.update_interval_ms());
        let due = match self.last_update_ms {
            None => true,
            Some(last) => now.saturating_sub(last) >= interval,
        };
        if !due {
            return Ok(false);
        }

        self.last_update_ms = Some(now);
        self.component.update()?;
        Ok(true)
    }

    /// Milliseconds until the next update is due (zero when overdue).
    pub fn time_until_due<K: Clock>(&self, clock: &K) -> u64 {
        match self.last_update_ms {
            None => 0,
            Some(last) => {
                let interval = u64::from(self.component.update_interval_ms());
                (last + interval).saturating_sub(clock.now_ms())
            }
        }
    }

    /// The driven component.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// The driven component, mutable.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Releases the component.
    pub fn into_inner(self) -> C {
        self.component
    }
}
