//! Daisy-chain addressing protocol.
//!
//! All chips share one shift path: every byte clocked in pushes the
//! previous 16 bits of each chip on to the next chip. When the load line
//! rises, each chip latches whatever pair it currently holds. To give
//! `n` chips `n` different commands, a frame therefore carries `n` pairs,
//! and the pair sent first ends up in the chip furthest along the chain.
//!
//! # Chip Order
//!
//! Pairs are emitted in logical chip order `0, 1, …, n-1`:
//!
//! ```text
//!  MCU DOUT ──► chip n-1 ──► … ──► chip 1 ──► chip 0
//!  frame:      [pair 0][pair 1] … [pair n-1]
//!              (shifted first, travels furthest)
//! ```
//!
//! Chips that should not change receive the no-op register.

use alloc::vec::Vec;

use crate::registers::Register;
use crate::traits::{BitOrder, FrameTransmitter};

/// Frames register writes for a chain of `chips` identical chips.
///
/// # Example
///
/// ```rust
/// use rs_max7219::{ChainTransmitter, Register};
/// use rs_max7219::hal::MockTransmitter;
///
/// let mut tx = ChainTransmitter::new(MockTransmitter::new(), 3);
///
/// // Address only the middle chip
/// tx.send_byte(1, Register::Digit0, 0x7E).unwrap();
/// assert_eq!(tx.bus().frames[0], [0x00, 0x00, 0x01, 0x7E, 0x00, 0x00]);
///
/// // Broadcast to every chip
/// tx.send_to_all(Register::Intensity, 8).unwrap();
/// assert_eq!(tx.bus().frames[1], [0x0A, 8, 0x0A, 8, 0x0A, 8]);
/// ```
#[derive(Debug)]
pub struct ChainTransmitter<T> {
    bus: T,
    chips: usize,
    bit_order: Option<BitOrder>,
    frame: Vec<u8>,
}

impl<T: FrameTransmitter> ChainTransmitter<T> {
    /// Creates a transmitter for `chips` chips (at least one).
    pub fn new(bus: T, chips: usize) -> Self {
        let chips = chips.max(1);
        Self {
            bus,
            chips,
            bit_order: None,
            frame: Vec::with_capacity(chips * 2),
        }
    }

    /// Changes the chain length (at least one).
    pub fn set_chips(&mut self, chips: usize) {
        self.chips = chips.max(1);
        self.frame = Vec::with_capacity(self.chips * 2);
    }

    /// Chain length.
    #[inline]
    pub fn chips(&self) -> usize {
        self.chips
    }

    /// Overrides the bit order reported by the transport.
    ///
    /// `None` goes back to asking the transport.
    pub fn set_bit_order(&mut self, bit_order: Option<BitOrder>) {
        self.bit_order = bit_order;
    }

    /// Bit order bytes are prepared for.
    pub fn bit_order(&self) -> BitOrder {
        self.bit_order.unwrap_or_else(|| self.bus.bit_order())
    }

    /// Underlying transport.
    pub fn bus(&self) -> &T {
        &self.bus
    }

    /// Underlying transport, mutable.
    pub fn bus_mut(&mut self) -> &mut T {
        &mut self.bus
    }

    /// Releases the underlying transport.
    pub fn into_inner(self) -> T {
        self.bus
    }

    /// Writes the same register/data pair to every chip in one frame.
    pub fn send_to_all(&mut self, register: Register, data: u8) -> Result<(), T::Error> {
        self.frame.clear();
        for _ in 0..self.chips {
            self.push_pair(register, data);
        }
        self.flush_frame()
    }

    /// Writes `data` to `register` of chip `chip` only.
    ///
    /// Every other chip receives a no-op. A chip index outside the chain
    /// is dropped with a warning and nothing is sent.
    pub fn send_byte(&mut self, chip: usize, register: Register, data: u8) -> Result<(), T::Error> {
        if chip >= self.chips {
            log::warn!("chip {} out of range for a chain of {}", chip, self.chips);
            return Ok(());
        }
        self.frame.clear();
        for k in 0..self.chips {
            if k == chip {
                self.push_pair(register, data);
            } else {
                self.push_pair(Register::Noop, 0x00);
            }
        }
        self.flush_frame()
    }

    /// Writes `register` on every chip with per-chip data in one frame.
    ///
    /// `data[k]` goes to chip `k`. Chips without an entry get a no-op;
    /// extra entries are ignored.
    pub fn send_row<I>(&mut self, register: Register, data: I) -> Result<(), T::Error>
    where
        I: IntoIterator<Item = u8>,
    {
        self.frame.clear();
        let mut data = data.into_iter();
        for _ in 0..self.chips {
            match data.next() {
                Some(byte) => self.push_pair(register, byte),
                None => self.push_pair(Register::Noop, 0x00),
            }
        }
        self.flush_frame()
    }

    fn push_pair(&mut self, register: Register, data: u8) {
        let order = self.bit_order();
        self.frame.push(order.to_wire(register.addr()));
        self.frame.push(order.to_wire(data));
    }

    fn flush_frame(&mut self) -> Result<(), T::Error> {
        self.bus.transmit(&self.frame)
    }
}
