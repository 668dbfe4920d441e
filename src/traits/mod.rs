//! Trait definitions for the bus transport, scheduling, and time.
//!
//! This module defines the seams that allow rs-max7219 to:
//! - Drive the chip chain over any framed serial transport (SPI, bit-bang, mock)
//! - Be ticked by any periodic scheduler
//! - Run the same display logic on desktop and on hardware
//!
//! # Submodules
//!
//! - `bus`: Framed byte-sequence transmitter and bit order
//! - `component`: Periodic tick consumer (setup once, update per interval)
//! - `hardware`: Clock
//!
//! # Hardware Abstraction
//!
//! - [`FrameTransmitter`]: One chip-select framed transaction per call
//! - [`PollingComponent`]: Setup/update lifecycle driven by a scheduler
//! - [`Clock`]: Time source for `no_std` environments

pub mod bus;
pub mod component;
pub mod hardware;

pub use bus::*;
pub use component::*;
pub use hardware::*;
