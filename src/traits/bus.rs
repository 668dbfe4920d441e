//! Framed serial transport abstraction.
//!
//! The MAX7219 family listens on a three-wire bus: data, clock, and a
//! load/chip-select line. Bytes are shifted in while the line is held
//! low and latched into every chip of the chain when it rises again.
//! [`FrameTransmitter`] captures exactly that: one call, one framed
//! transaction.

/// Bit order used by a transport when clocking out a byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BitOrder {
    /// Most significant bit first (what the chip expects).
    #[default]
    MsbFirst,
    /// Least significant bit first.
    LsbFirst,
}

impl BitOrder {
    /// Prepares a byte so that it appears MSB-first on the wire when
    /// clocked out in this order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_max7219::traits::BitOrder;
    ///
    /// assert_eq!(BitOrder::MsbFirst.to_wire(0b1000_0001), 0b1000_0001);
    /// assert_eq!(BitOrder::LsbFirst.to_wire(0b1100_0000), 0b0000_0011);
    /// ```
    #[inline]
    pub const fn to_wire(self, byte: u8) -> u8 {
        match self {
            BitOrder::MsbFirst => byte,
            BitOrder::LsbFirst => byte.reverse_bits(),
        }
    }
}

/// Framed byte-sequence transmitter.
///
/// Implement this for whatever drives the chain: an SPI peripheral,
/// bit-banged GPIO, or a test double. Each call to [`transmit`] must:
///
/// - assert the chip-select/load line
/// - clock out every byte of `frame` in order
/// - release the line, which latches the shifted data into the chips
///
/// # Example Implementation
///
/// ```rust,ignore
/// use rs_max7219::traits::{BitOrder, FrameTransmitter};
///
/// struct BitBang { /* pins */ }
///
/// impl FrameTransmitter for BitBang {
///     type Error = ();
///
///     fn transmit(&mut self, frame: &[u8]) -> Result<(), ()> {
///         // CS low, shift each byte MSB first, CS high
///         Ok(())
///     }
/// }
/// ```
///
/// [`transmit`]: FrameTransmitter::transmit
pub trait FrameTransmitter {
    /// Error type for bus operations.
    type Error;

    /// Sends `frame` as a single framed transaction.
    fn transmit(&mut self, frame: &[u8]) -> Result<(), Self::Error>;

    /// Bit order the underlying primitive shifts bytes out in.
    ///
    /// Defaults to [`BitOrder::MsbFirst`]. Transports that can only
    /// shift LSB first override this and the chain layer compensates.
    fn bit_order(&self) -> BitOrder {
        BitOrder::MsbFirst
    }
}

impl<T: FrameTransmitter + ?Sized> FrameTransmitter for &mut T {
    type Error = T::Error;

    fn transmit(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        (**self).transmit(frame)
    }

    fn bit_order(&self) -> BitOrder {
        (**self).bit_order()
    }
}
