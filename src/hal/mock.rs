//! Mock implementations for testing without hardware.
//!
//! This module provides test doubles for the bus and clock traits,
//! enabling development and testing on desktop without a physical chain.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockTransmitter`] | [`FrameTransmitter`] | Records every frame verbatim |
//! | [`FakeChain`] | [`FrameTransmitter`] | Shift-register model of `n` chips |
//! | [`MockClock`] | [`Clock`] | Controllable time source |
//!
//! # Example
//!
//! ```rust
//! use rs_max7219::Max7219;
//! use rs_max7219::hal::FakeChain;
//! use rs_max7219::traits::PollingComponent;
//!
//! let mut display = Max7219::new(FakeChain::new(2), 2);
//! display.setup().unwrap();
//! display.print_at(8, "42");
//! display.display().unwrap();
//!
//! // Chip 1, leftmost digit holds '4'
//! assert_eq!(display.bus().chip(1).slot(0), 0b0011_0011);
//! ```
//!
//! [`FrameTransmitter`]: crate::traits::FrameTransmitter
//! [`Clock`]: crate::traits::Clock

use alloc::vec;
use alloc::vec::Vec;

use crate::registers::{Register, DIGITS_PER_CHIP};
use crate::traits::{BitOrder, Clock, FrameTransmitter};

// ============================================================================
// Bus Mocks
// ============================================================================

/// Error returned by a mock transport that was told to fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockBusError;

/// Mock transport that records every frame.
///
/// # Example
///
/// ```rust
/// use rs_max7219::hal::MockTransmitter;
/// use rs_max7219::traits::FrameTransmitter;
///
/// let mut bus = MockTransmitter::new();
/// bus.transmit(&[0x0C, 0x01]).unwrap();
///
/// assert_eq!(bus.frames.len(), 1);
/// assert_eq!(bus.frames[0], [0x0C, 0x01]);
///
/// // Inject a failure on the next frame
/// bus.fail_next();
/// assert!(bus.transmit(&[0x00, 0x00]).is_err());
/// assert_eq!(bus.frames.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockTransmitter {
    /// Every successfully transmitted frame, in order.
    pub frames: Vec<Vec<u8>>,
    /// Bit order reported to the chain layer.
    pub bit_order: BitOrder,
    fail_next: bool,
}

impl MockTransmitter {
    /// Creates an MSB-first mock with no recorded frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports `order` as the transport bit order.
    pub fn with_bit_order(mut self, order: BitOrder) -> Self {
        self.bit_order = order;
        self
    }

    /// Makes the next `transmit` call fail.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }

    /// Drops all recorded frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl FrameTransmitter for MockTransmitter {
    type Error = MockBusError;

    fn transmit(&mut self, frame: &[u8]) -> Result<(), MockBusError> {
        if core::mem::take(&mut self.fail_next) {
            return Err(MockBusError);
        }
        self.frames.push(frame.to_vec());
        Ok(())
    }

    fn bit_order(&self) -> BitOrder {
        self.bit_order
    }
}

/// Latched register state of one simulated chip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChipState {
    /// Digit registers, indexed by digit number (`digits[0]` is Digit0).
    pub digits: [u8; DIGITS_PER_CHIP],
    /// Decode mode register.
    pub decode_mode: u8,
    /// Intensity register.
    pub intensity: u8,
    /// Scan limit register.
    pub scan_limit: u8,
    /// True while the chip is in shutdown.
    pub shutdown: bool,
    /// True while display test is on.
    pub display_test: bool,
    /// Number of non-noop pairs latched.
    pub writes: usize,
}

impl ChipState {
    /// Power-on state: shut down, everything zero.
    pub fn power_on() -> Self {
        Self {
            digits: [0; DIGITS_PER_CHIP],
            decode_mode: 0,
            intensity: 0,
            scan_limit: 0,
            shutdown: true,
            display_test: false,
            writes: 0,
        }
    }

    /// Pattern shown in buffer slot `slot` (0 = leftmost).
    pub fn slot(&self, slot: usize) -> u8 {
        self.digits[DIGITS_PER_CHIP - 1 - slot % DIGITS_PER_CHIP]
    }

    fn latch(&mut self, addr: u8, data: u8) {
        let Some(register) = Register::from_addr(addr) else {
            return;
        };
        match register {
            Register::Noop => return,
            Register::DecodeMode => self.decode_mode = data,
            Register::Intensity => self.intensity = data & 0x0F,
            Register::ScanLimit => self.scan_limit = data & 0x07,
            Register::Shutdown => self.shutdown = data & 0x01 == 0,
            Register::DisplayTest => self.display_test = data & 0x01 == 1,
            digit => {
                if let Some(i) = digit.digit_index() {
                    self.digits[i as usize] = data;
                }
            }
        }
        self.writes += 1;
    }
}

impl Default for ChipState {
    fn default() -> Self {
        Self::power_on()
    }
}

/// Simulated daisy chain of `n` chips.
///
/// Each chip is a 16-bit shift register. Bytes enter the chip nearest the
/// controller (index `n - 1`) and overflow towards chip 0. At the end of
/// each frame every chip latches the pair it holds, just like the load
/// line rising on real hardware.
///
/// # Example
///
/// ```rust
/// use rs_max7219::hal::FakeChain;
/// use rs_max7219::traits::FrameTransmitter;
///
/// let mut chain = FakeChain::new(2);
///
/// // First pair shifts through to chip 0
/// chain.transmit(&[0x01, 0xAA, 0x01, 0xBB]).unwrap();
/// assert_eq!(chain.chip(0).digits[0], 0xAA);
/// assert_eq!(chain.chip(1).digits[0], 0xBB);
/// ```
#[derive(Debug)]
pub struct FakeChain {
    shift: Vec<[u8; 2]>,
    chips: Vec<ChipState>,
    /// Number of frames latched.
    pub frames: usize,
}

impl FakeChain {
    /// Creates a chain of `n` chips (at least one) in power-on state.
    pub fn new(n: usize) -> Self {
        let n = n.max(1);
        Self {
            shift: vec![[0; 2]; n],
            chips: vec![ChipState::power_on(); n],
            frames: 0,
        }
    }

    /// Number of chips.
    pub fn len(&self) -> usize {
        self.chips.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Latched state of chip `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k` is out of range.
    pub fn chip(&self, k: usize) -> &ChipState {
        &self.chips[k]
    }

    /// Visible patterns of the whole chain, in buffer order.
    pub fn visible(&self) -> Vec<u8> {
        self.chips
            .iter()
            .flat_map(|chip| (0..DIGITS_PER_CHIP).map(move |slot| chip.slot(slot)))
            .collect()
    }

    fn shift_in(&mut self, byte: u8) {
        let mut carry = byte;
        for sr in self.shift.iter_mut().rev() {
            let out = sr[0];
            sr[0] = sr[1];
            sr[1] = carry;
            carry = out;
        }
    }
}

impl FrameTransmitter for FakeChain {
    type Error = core::convert::Infallible;

    fn transmit(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        for &byte in frame {
            self.shift_in(byte);
        }
        for (chip, [addr, data]) in self.chips.iter_mut().zip(self.shift.iter().copied()) {
            chip.latch(addr, data);
        }
        self.frames += 1;
        Ok(())
    }
}

// ============================================================================
// Clock Mock
// ============================================================================

/// Mock clock for testing.
///
/// Provides a controllable time source for testing time-dependent behavior.
///
/// # Example
///
/// ```rust
/// use rs_max7219::hal::MockClock;
/// use rs_max7219::traits::Clock;
///
/// let mut clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.set(1000);
/// assert_eq!(clock.now_ms(), 1000);
///
/// clock.advance(500);
/// assert_eq!(clock.now_ms(), 1500);
/// ```
#[derive(Debug)]
pub struct MockClock {
    current_ms: u64,
}

impl MockClock {
    /// Creates a new mock clock starting at 0ms.
    pub fn new() -> Self {
        Self { current_ms: 0 }
    }

    /// Sets the current time in milliseconds.
    pub fn set(&mut self, ms: u64) {
        self.current_ms = ms;
    }

    /// Advances the clock by the given duration.
    pub fn advance(&mut self, ms: u64) {
        self.current_ms += ms;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.current_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_chain_drops_overflowing_pairs() {
        let mut chain = FakeChain::new(1);
        // Two pairs into a one-chip chain: the first falls off the end
        chain.transmit(&[0x01, 0x11, 0x02, 0x22]).unwrap();
        assert_eq!(chain.chip(0).digits[0], 0x00);
        assert_eq!(chain.chip(0).digits[1], 0x22);
    }

    #[test]
    fn noop_latches_nothing() {
        let mut chain = FakeChain::new(2);
        chain.transmit(&[0x00, 0xFF, 0x00, 0xFF]).unwrap();
        assert_eq!(chain.chip(0).writes, 0);
        assert_eq!(chain.chip(1).writes, 0);
        assert_eq!(chain.frames, 1);
    }

    #[test]
    fn control_registers_latch() {
        let mut chain = FakeChain::new(1);
        chain.transmit(&[0x0C, 0x01]).unwrap();
        chain.transmit(&[0x0A, 0x09]).unwrap();
        chain.transmit(&[0x0F, 0x01]).unwrap();
        let chip = chain.chip(0);
        assert!(!chip.shutdown);
        assert_eq!(chip.intensity, 9);
        assert!(chip.display_test);
    }

    #[test]
    fn visible_is_in_buffer_order() {
        let mut chain = FakeChain::new(1);
        chain.transmit(&[0x08, 0xAA]).unwrap();
        chain.transmit(&[0x01, 0xBB]).unwrap();
        let visible = chain.visible();
        assert_eq!(visible[0], 0xAA);
        assert_eq!(visible[7], 0xBB);
    }

    #[test]
    fn mock_clock_advances() {
        let mut clock = MockClock::new();
        clock.advance(10);
        clock.advance(5);
        assert_eq!(clock.now_ms(), 15);
    }
}
