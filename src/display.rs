//! The display component: buffer, text API, and update cycle.
//!
//! This module provides [`Max7219`], the central component that ties the
//! buffer, the text renderer, and the chain transmitter together.
//!
//! # Overview
//!
//! The component:
//! - Owns the [`DisplayBuffer`] (one byte per digit across the chain)
//! - Renders text into it at character positions
//! - Flushes it to the chips on every [`display`](Max7219::display)
//! - Runs an optional writer callback before each periodic flush
//!
//! # Example
//!
//! ```rust
//! use rs_max7219::{Max7219, hal::FakeChain, traits::PollingComponent};
//!
//! let mut display = Max7219::new(FakeChain::new(1), 1);
//! display.set_intensity(4);
//! display.setup().unwrap();
//!
//! // Immediate redraw
//! display.print("HELLO");
//! display.display().unwrap();
//!
//! // Or let a writer run on each tick
//! let mut count = 0;
//! display.set_writer(move |d| {
//!     d.clear();
//!     d.printf(format_args!("{:>8}", count));
//!     count += 1;
//! });
//! display.update().unwrap();
//! display.update().unwrap();
//! assert_eq!(display.bus().chip(0).intensity, 4);
//! ```

use alloc::boxed::Box;
use core::fmt;

use crate::buffer::DisplayBuffer;
use crate::config::DisplayConfig;
use crate::registers::{Register, DIGITS_PER_CHIP, MAX_INTENSITY, SCAN_ALL_DIGITS};
use crate::text;
use crate::traits::{
    setup_priority, BitOrder, FrameTransmitter, PollingComponent, DEFAULT_UPDATE_INTERVAL_MS,
};
use crate::transmitter::ChainTransmitter;

/// Per-tick content generator.
///
/// Receives the component mutably and may print or write raw patterns;
/// the buffer is flushed right after it returns.
pub type Writer<T> = Box<dyn FnMut(&mut Max7219<T>)>;

/// A chain of MAX7219 chips presented as one row of characters.
///
/// # Type Parameter
///
/// - `T`: The bus transport ([`FrameTransmitter`] trait)
///
/// # Thread Safety
///
/// The component assumes a single owner. If several threads can print
/// or flush, wrap it in a mutex so buffer writes and flushes never
/// interleave.
pub struct Max7219<T> {
    tx: ChainTransmitter<T>,
    buffer: DisplayBuffer,
    intensity: u8,
    intensity_dirty: bool,
    update_interval_ms: u32,
    writer: Option<Writer<T>>,
    writer_changed: bool,
    initialized: bool,
}

impl<T: FrameTransmitter> Max7219<T> {
    /// Create a display for `num_chips` chained chips at full intensity.
    pub fn new(bus: T, num_chips: usize) -> Self {
        let num_chips = checked_chip_count(num_chips);
        Self {
            tx: ChainTransmitter::new(bus, num_chips),
            buffer: DisplayBuffer::new(num_chips),
            intensity: MAX_INTENSITY,
            intensity_dirty: false,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            writer: None,
            writer_changed: false,
            initialized: false,
        }
    }

    /// Create a display from a [`DisplayConfig`].
    ///
    /// A configured bit order overrides the one the transport reports.
    pub fn from_config(bus: T, config: &DisplayConfig) -> Self {
        let config = config.normalized();
        let mut display = Self::new(bus, config.num_chips);
        display.intensity = config.intensity;
        display.update_interval_ms = config.update_interval_ms;
        display.tx.set_bit_order(config.bit_order);
        display
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Set the number of chained chips.
    ///
    /// Reallocates the buffer to `8 * num_chips` positions and clears it.
    /// Zero is coerced to one. Call this before [`setup`](PollingComponent::setup);
    /// changing the chain length of a running display is not supported.
    pub fn set_num_chips(&mut self, num_chips: usize) {
        let num_chips = checked_chip_count(num_chips);
        self.buffer.resize(num_chips);
        self.tx.set_chips(num_chips);
    }

    /// Number of chained chips.
    pub fn num_chips(&self) -> usize {
        self.buffer.chips()
    }

    /// Set the brightness, clamped to 0..=15.
    ///
    /// Sent to the chips during setup, or on the next flush afterwards.
    pub fn set_intensity(&mut self, level: i32) {
        let level = level.clamp(0, MAX_INTENSITY as i32) as u8;
        if level != self.intensity {
            self.intensity = level;
            self.intensity_dirty = true;
        }
    }

    /// Current brightness.
    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    /// Override the bit order reported by the transport; `None` clears it.
    pub fn set_bit_order(&mut self, bit_order: Option<BitOrder>) {
        self.tx.set_bit_order(bit_order);
    }

    /// Set the interval the scheduler should tick this display at.
    pub fn set_update_interval_ms(&mut self, ms: u32) {
        self.update_interval_ms = ms;
    }

    /// Register the per-tick writer, replacing any previous one.
    pub fn set_writer<F>(&mut self, writer: F)
    where
        F: FnMut(&mut Self) + 'static,
    {
        self.writer = Some(Box::new(writer));
        self.writer_changed = true;
    }

    /// Remove the per-tick writer.
    pub fn clear_writer(&mut self) {
        self.writer = None;
        self.writer_changed = true;
    }

    /// True when a writer is registered.
    pub fn has_writer(&self) -> bool {
        self.writer.is_some()
    }

    /// True once setup has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ------------------------------------------------------------------
    // Raw buffer access
    // ------------------------------------------------------------------

    /// The display buffer.
    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// The display buffer, mutable. Its length cannot change through this.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.buffer.as_mut_slice()
    }

    /// Raw pattern at `pos`.
    pub fn get_raw(&self, pos: usize) -> Option<u8> {
        self.buffer.get(pos)
    }

    /// Write a raw pattern at `pos`. Out of range positions are ignored.
    pub fn set_raw(&mut self, pos: usize, pattern: u8) {
        if !self.buffer.set(pos, pattern) {
            log::warn!("raw write at {} outside buffer of {}", pos, self.buffer.len());
        }
    }

    /// Blank every position.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Print `text` starting at position `pos`.
    ///
    /// Returns the number of positions advanced; a `'.'` merges into the
    /// previous character and does not count. See [`text::render`].
    pub fn print_at(&mut self, pos: usize, text: &str) -> usize {
        text::render(&mut self.buffer, pos, text)
    }

    /// Print `text` starting at position 0.
    pub fn print(&mut self, text: &str) -> usize {
        self.print_at(0, text)
    }

    /// Print formatted text starting at position `pos`.
    ///
    /// Output longer than [`text::MAX_TEXT_LEN`] is cut off.
    ///
    /// ```rust
    /// use rs_max7219::{Max7219, hal::MockTransmitter, font};
    ///
    /// let mut display = Max7219::new(MockTransmitter::new(), 1);
    /// assert_eq!(display.printf_at(4, format_args!("{:.1}", 2.55f32)), 2);
    /// assert_eq!(display.get_raw(4), Some(font::encode('2') | font::DECIMAL_POINT));
    /// assert_eq!(display.get_raw(5), Some(font::encode('5')));
    /// ```
    pub fn printf_at(&mut self, pos: usize, args: fmt::Arguments<'_>) -> usize {
        let formatted = text::format(args);
        self.print_at(pos, formatted.as_str())
    }

    /// Print formatted text starting at position 0.
    pub fn printf(&mut self, args: fmt::Arguments<'_>) -> usize {
        self.printf_at(0, args)
    }

    /// Print `time` formatted with a strftime-style pattern at position `pos`.
    #[cfg(feature = "time")]
    pub fn strftime_at<Tz>(&mut self, pos: usize, pattern: &str, time: &chrono::DateTime<Tz>) -> usize
    where
        Tz: chrono::TimeZone,
        Tz::Offset: fmt::Display,
    {
        let formatted = text::format_time(pattern, time);
        self.print_at(pos, formatted.as_str())
    }

    /// Print `time` formatted with a strftime-style pattern at position 0.
    #[cfg(feature = "time")]
    pub fn strftime<Tz>(&mut self, pattern: &str, time: &chrono::DateTime<Tz>) -> usize
    where
        Tz: chrono::TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.strftime_at(0, pattern, time)
    }

    // ------------------------------------------------------------------
    // Hardware
    // ------------------------------------------------------------------

    /// Send the whole buffer to the chips.
    ///
    /// One frame per digit register, each carrying that digit for every
    /// chip. A pending intensity change is sent first.
    pub fn display(&mut self) -> Result<(), T::Error> {
        if self.intensity_dirty && self.initialized {
            self.tx.send_to_all(Register::Intensity, self.intensity)?;
            self.intensity_dirty = false;
        }
        for slot in 0..DIGITS_PER_CHIP {
            self.tx
                .send_row(Register::for_slot(slot), self.buffer.column(slot))?;
        }
        Ok(())
    }

    /// The bus transport.
    pub fn bus(&self) -> &T {
        self.tx.bus()
    }

    /// The bus transport, mutable.
    pub fn bus_mut(&mut self) -> &mut T {
        self.tx.bus_mut()
    }

    /// Release the bus transport.
    pub fn release(self) -> T {
        self.tx.into_inner()
    }

    fn run_writer(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            self.writer_changed = false;
            writer(self);
            // A writer that replaced or removed itself keeps that change.
            if !self.writer_changed {
                self.writer = Some(writer);
            }
        }
    }
}

impl<T: FrameTransmitter> PollingComponent for Max7219<T> {
    type Error = T::Error;

    /// Initialize every chip in the chain and show the current buffer.
    fn setup(&mut self) -> Result<(), T::Error> {
        log::debug!(
            "setting up {} chip(s), intensity {}",
            self.num_chips(),
            self.intensity
        );
        self.tx.send_to_all(Register::ScanLimit, SCAN_ALL_DIGITS)?;
        // Raw segment patterns, no Code-B decoding
        self.tx.send_to_all(Register::DecodeMode, 0x00)?;
        self.tx.send_to_all(Register::Intensity, self.intensity)?;
        self.intensity_dirty = false;
        self.display()?;
        self.tx.send_to_all(Register::DisplayTest, 0x00)?;
        self.tx.send_to_all(Register::Shutdown, 0x01)?;
        self.initialized = true;
        Ok(())
    }

    /// Run the writer, then flush.
    fn update(&mut self) -> Result<(), T::Error> {
        self.run_writer();
        self.display()
    }

    fn update_interval_ms(&self) -> u32 {
        self.update_interval_ms
    }

    fn setup_priority(&self) -> f32 {
        setup_priority::PROCESSOR
    }
}

impl<T: fmt::Debug> fmt::Debug for Max7219<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Max7219")
            .field("tx", &self.tx)
            .field("buffer", &self.buffer)
            .field("intensity", &self.intensity)
            .field("update_interval_ms", &self.update_interval_ms)
            .field("has_writer", &self.writer.is_some())
            .field("initialized", &self.initialized)
            .finish()
    }
}

fn checked_chip_count(num_chips: usize) -> usize {
    if num_chips == 0 {
        log::warn!("chip count 0 is invalid, using 1");
        1
    } else {
        num_chips
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{encode, DECIMAL_POINT};
    use crate::hal::{FakeChain, MockTransmitter};

    #[test]
    fn new_display_has_zeroed_buffer() {
        let display = Max7219::new(MockTransmitter::new(), 3);
        assert_eq!(display.buffer().len(), 24);
        assert!(display.buffer().as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn set_num_chips_resizes_and_clears() {
        let mut display = Max7219::new(MockTransmitter::new(), 1);
        display.print("88888888");
        display.set_num_chips(2);
        assert_eq!(display.num_chips(), 2);
        assert_eq!(display.buffer().len(), 16);
        assert!(display.buffer().as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn intensity_is_clamped() {
        let mut display = Max7219::new(MockTransmitter::new(), 1);
        display.set_intensity(20);
        assert_eq!(display.intensity(), 15);
        display.set_intensity(-1);
        assert_eq!(display.intensity(), 0);
        display.set_intensity(7);
        assert_eq!(display.intensity(), 7);
    }

    #[test]
    fn display_sets_up_after_hardware() {
        let display = Max7219::new(MockTransmitter::new(), 1);
        assert_eq!(display.setup_priority(), setup_priority::PROCESSOR);
        assert!(display.setup_priority() < setup_priority::HARDWARE);
    }

    #[test]
    fn setup_sends_init_sequence() {
        let mut display = Max7219::new(MockTransmitter::new(), 2);
        display.set_intensity(5);
        display.setup().unwrap();

        let frames = &display.bus().frames;
        // 3 config frames, 8 digit frames, test off, shutdown off
        assert_eq!(frames.len(), 13);
        assert_eq!(frames[0], [0x0B, 7, 0x0B, 7]);
        assert_eq!(frames[1], [0x09, 0, 0x09, 0]);
        assert_eq!(frames[2], [0x0A, 5, 0x0A, 5]);
        assert_eq!(frames[3], [0x08, 0, 0x08, 0]);
        assert_eq!(frames[10], [0x01, 0, 0x01, 0]);
        assert_eq!(frames[11], [0x0F, 0, 0x0F, 0]);
        assert_eq!(frames[12], [0x0C, 1, 0x0C, 1]);
        assert!(display.is_initialized());
    }

    #[test]
    fn display_sends_eight_frames_in_slot_order() {
        let mut display = Max7219::new(MockTransmitter::new(), 2);
        display.print_at(0, "1");
        display.print_at(9, "2");
        display.display().unwrap();

        let frames = &display.bus().frames;
        assert_eq!(frames.len(), 8);
        assert_eq!(frames[0], [0x08, encode('1'), 0x08, 0]);
        assert_eq!(frames[1], [0x07, 0, 0x07, encode('2')]);
        assert_eq!(frames[7], [0x01, 0, 0x01, 0]);
    }

    #[test]
    fn intensity_change_after_setup_is_sent_on_flush() {
        let mut display = Max7219::new(MockTransmitter::new(), 1);
        display.setup().unwrap();
        display.bus_mut().clear();

        display.set_intensity(3);
        display.display().unwrap();
        assert_eq!(display.bus().frames[0], [0x0A, 3]);
        assert_eq!(display.bus().frames.len(), 9);

        display.bus_mut().clear();
        display.display().unwrap();
        assert_eq!(display.bus().frames.len(), 8);
    }

    #[test]
    fn flush_mirrors_buffer_on_fake_chain() {
        let mut display = Max7219::new(FakeChain::new(3), 3);
        display.setup().unwrap();
        display.print("12.34567890ABCDEF");
        display.display().unwrap();
        assert_eq!(display.bus().visible(), display.buffer().as_slice());
        assert_eq!(display.get_raw(1), Some(encode('2') | DECIMAL_POINT));
    }

    #[test]
    fn update_runs_writer_then_flushes() {
        let mut display = Max7219::new(FakeChain::new(1), 1);
        display.setup().unwrap();
        let mut ticks = 0u32;
        display.set_writer(move |d| {
            ticks += 1;
            d.clear();
            d.printf(format_args!("{}", ticks));
        });

        display.update().unwrap();
        assert_eq!(display.bus().chip(0).slot(0), encode('1'));
        display.update().unwrap();
        assert_eq!(display.bus().chip(0).slot(0), encode('2'));
        assert!(display.has_writer());
    }

    #[test]
    fn writer_can_replace_itself() {
        let mut display = Max7219::new(MockTransmitter::new(), 1);
        display.set_writer(|d| {
            d.print("A");
            d.set_writer(|d| {
                d.print("B");
            });
        });

        display.update().unwrap();
        assert_eq!(display.get_raw(0), Some(encode('A')));
        display.update().unwrap();
        assert_eq!(display.get_raw(0), Some(encode('B')));
    }

    #[test]
    fn writer_can_remove_itself() {
        let mut display = Max7219::new(MockTransmitter::new(), 1);
        display.set_writer(|d| d.clear_writer());
        display.update().unwrap();
        assert!(!display.has_writer());
    }

    #[test]
    fn bus_error_propagates() {
        let mut display = Max7219::new(MockTransmitter::new(), 1);
        display.bus_mut().fail_next();
        assert!(display.setup().is_err());
        assert!(!display.is_initialized());
    }

    #[test]
    fn from_config_applies_settings() {
        let config = DisplayConfig::default()
            .with_num_chips(0)
            .with_intensity(9)
            .with_update_interval_ms(250);
        let display = Max7219::from_config(MockTransmitter::new(), &config);
        assert_eq!(display.num_chips(), 1);
        assert_eq!(display.intensity(), 9);
        assert_eq!(display.update_interval_ms(), 250);
    }

    #[test]
    fn raw_access_is_bounds_checked() {
        let mut display = Max7219::new(MockTransmitter::new(), 1);
        display.set_raw(3, 0b0100_1001);
        display.set_raw(8, 0xFF);
        assert_eq!(display.get_raw(3), Some(0b0100_1001));
        assert_eq!(display.get_raw(8), None);
        display.buffer_mut()[7] = 0x01;
        assert_eq!(display.get_raw(7), Some(0x01));
    }
}
