//! SPI transport for any `embedded-hal` 1.0 [`SpiDevice`].
//!
//! An `SpiDevice` owns chip-select handling, so one `write` is exactly one
//! framed transaction and maps directly onto [`FrameTransmitter`].
//!
//! # Wiring
//!
//! - MOSI → DIN of the first chip
//! - SCK → CLK of every chip
//! - CS → LOAD of every chip
//!
//! The chip samples on the rising clock edge: use SPI mode 0, at most 10 MHz.

use embedded_hal::spi::SpiDevice;

use crate::traits::{BitOrder, FrameTransmitter};

/// [`FrameTransmitter`] over an `embedded-hal` SPI device.
///
/// # Example
///
/// ```rust,ignore
/// use rs_max7219::{Max7219, hal::SpiTransmitter};
///
/// let bus = SpiTransmitter::new(spi_device);
/// let mut display = Max7219::new(bus, 4);
/// ```
pub struct SpiTransmitter<SPI> {
    spi: SPI,
    bit_order: BitOrder,
}

impl<SPI: SpiDevice> SpiTransmitter<SPI> {
    /// Wraps an SPI device configured for MSB-first transfers.
    pub fn new(spi: SPI) -> Self {
        Self {
            spi,
            bit_order: BitOrder::MsbFirst,
        }
    }

    /// Declares the bit order the SPI peripheral was configured with.
    ///
    /// Some peripherals are stuck in LSB-first mode; frames are bit-reversed
    /// before they reach them so the wire stays MSB-first.
    pub fn with_bit_order(mut self, bit_order: BitOrder) -> Self {
        self.bit_order = bit_order;
        self
    }

    /// Releases the SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiDevice> FrameTransmitter for SpiTransmitter<SPI> {
    type Error = SPI::Error;

    fn transmit(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        self.spi.write(frame)
    }

    fn bit_order(&self) -> BitOrder {
        self.bit_order
    }
}
