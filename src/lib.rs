//! # rs-max7219
//!
//! A driver for one or more daisy-chained MAX7219 LED display controllers,
//! presented as a single row of 7-segment characters.
//!
//! ## Features
//!
//! - **Any chain length**: `n` chips become one buffer of `8n` positions
//! - **Chain addressing**: broadcast commands, single-chip writes, batched flushes
//! - **Text rendering**: positional print with decimal-point merging, bounded `printf`
//! - **Time rendering**: strftime-style patterns (`time` feature)
//! - **Writer callback**: per-tick content generator run before each flush
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `traits` - Bus, scheduling, and clock abstractions
//! - `registers` - Chip register map
//! - `font` - Character to segment-pattern table
//! - `buffer` - The display buffer
//! - `transmitter` - Daisy-chain framing
//! - `text` - Text rendering and bounded formatting
//! - `display` - The display component that ties everything together
//! - `scheduler` - Drives a component from a clock
//! - `hal` - Concrete transports (mock for testing, SPI for hardware)
//!
//! ## Example
//!
//! ```rust
//! use rs_max7219::{Max7219, hal::FakeChain, traits::PollingComponent};
//!
//! // Two chips: sixteen positions
//! let mut display = Max7219::new(FakeChain::new(2), 2);
//! display.set_intensity(8);
//! display.setup().unwrap();
//!
//! // "3.14" takes three positions; the dot rides on the '3'
//! let next = display.print("3.14");
//! display.printf_at(next + 1, format_args!("{:>4}", 42));
//! display.display().unwrap();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// The display buffer.
pub mod buffer;
/// Shared configuration for a display chain.
pub mod config;
/// The display component with text API and update cycle.
pub mod display;
/// Character to 7-segment pattern table.
pub mod font;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// MAX7219 register map.
pub mod registers;
/// Clock-driven scheduler for polled components.
pub mod scheduler;
/// Text rendering and bounded formatting.
pub mod text;
/// Core traits for bus transport, scheduling, and time.
pub mod traits;
/// Daisy-chain framing of register writes.
pub mod transmitter;

// Re-exports for convenience
pub use buffer::DisplayBuffer;
pub use config::DisplayConfig;
pub use display::{Max7219, Writer};
pub use registers::{Register, DIGITS_PER_CHIP, MAX_INTENSITY};
pub use scheduler::Poller;
pub use text::{FixedText, MAX_TEXT_LEN};
pub use traits::{BitOrder, Clock, FrameTransmitter, PollingComponent};
pub use transmitter::ChainTransmitter;

#[cfg(feature = "serde-json-core")]
pub use config::parse_config;
