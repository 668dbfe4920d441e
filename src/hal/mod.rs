//! Hardware Abstraction Layer implementations.
//!
//! This module contains concrete implementations of the traits
//! defined in [`crate::traits`] for various platforms.
//!
//! # Available Implementations
//!
//! - `mock`: Test implementations for desktop development
//! - `spi`: Any `embedded-hal` 1.0 SPI device (requires `embedded-hal` feature)

pub mod mock;

#[cfg(feature = "embedded-hal")]
pub mod spi;

pub use mock::*;

#[cfg(feature = "embedded-hal")]
pub use spi::*;
