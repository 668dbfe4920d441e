//! Time source abstraction.
//!
//! # Example
//!
//! ```rust
//! use rs_max7219::traits::Clock;
//! use rs_max7219::hal::MockClock;
//!
//! let mut clock = MockClock::new();
//! let start = clock.now_ms();
//! clock.advance(250);
//! assert_eq!(clock.now_ms() - start, 250);
//! ```

/// Clock trait for getting current time.
///
/// Used by [`crate::scheduler::Poller`] to decide when a component is due.
/// In `no_std` environments there is no `std::time`, so this trait
/// provides a platform-agnostic way to read elapsed time.
///
/// # Example
///
/// ```rust
/// use rs_max7219::traits::Clock;
/// use rs_max7219::hal::MockClock;
///
/// let mut clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.advance(100);
/// assert_eq!(clock.now_ms(), 100);
/// ```
pub trait Clock {
    /// Returns current time in milliseconds since an arbitrary epoch.
    ///
    /// Must be monotonically increasing.
    fn now_ms(&self) -> u64;
}

#[cfg(feature = "std")]
impl Clock for std::time::Instant {
    fn now_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }
}
