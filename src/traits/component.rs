//! Periodic tick consumer.

/// Default update interval for polled components, in milliseconds.
pub const DEFAULT_UPDATE_INTERVAL_MS: u32 = 1000;

/// Setup ordering tiers. Components with a higher priority are set up
/// before those with a lower one.
pub mod setup_priority {
    /// Bus drivers other components depend on.
    pub const BUS: f32 = 1000.0;
    /// Directly attached hardware.
    pub const HARDWARE: f32 = 800.0;
    /// Components that consume data from other components.
    pub const PROCESSOR: f32 = 400.0;
    /// No particular ordering requirement.
    pub const DEFAULT: f32 = 0.0;
}

/// A component driven by a periodic scheduler.
///
/// The scheduler calls [`setup`](Self::setup) exactly once before the
/// first [`update`](Self::update), then calls `update` every
/// [`update_interval_ms`](Self::update_interval_ms). Neither call may
/// block or span more than one tick.
///
/// See [`crate::scheduler::Poller`] for a ready-made driver.
pub trait PollingComponent {
    /// Error type for setup/update operations.
    type Error;

    /// One-time initialization.
    fn setup(&mut self) -> Result<(), Self::Error>;

    /// Called once per tick.
    fn update(&mut self) -> Result<(), Self::Error>;

    /// Interval between ticks.
    fn update_interval_ms(&self) -> u32 {
        DEFAULT_UPDATE_INTERVAL_MS
    }

    /// Where this component's setup falls relative to others; higher
    /// runs first. See [`setup_priority`].
    fn setup_priority(&self) -> f32 {
        setup_priority::DEFAULT
    }
}
