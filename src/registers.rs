//! MAX7219 register map.
//!
//! Every transaction to a chip is a 16-bit pair: register address first,
//! data second. The digit registers hold raw segment patterns when decode
//! mode is off, which is the only mode this crate uses.

/// Number of digit registers per chip.
pub const DIGITS_PER_CHIP: usize = 8;

/// Highest intensity value accepted by the chip.
pub const MAX_INTENSITY: u8 = 15;

/// Scan limit value that enables all eight digits.
pub const SCAN_ALL_DIGITS: u8 = 7;

/// Register addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// No operation; the receiving chip latches nothing.
    Noop = 0x00,
    /// Digit 0 (rightmost position of a chip).
    Digit0 = 0x01,
    /// Digit 1.
    Digit1 = 0x02,
    /// Digit 2.
    Digit2 = 0x03,
    /// Digit 3.
    Digit3 = 0x04,
    /// Digit 4.
    Digit4 = 0x05,
    /// Digit 5.
    Digit5 = 0x06,
    /// Digit 6.
    Digit6 = 0x07,
    /// Digit 7 (leftmost position of a chip).
    Digit7 = 0x08,
    /// Code-B decode enable per digit.
    DecodeMode = 0x09,
    /// Brightness, 0..=15.
    Intensity = 0x0A,
    /// Number of scanned digits minus one.
    ScanLimit = 0x0B,
    /// 0 = shutdown, 1 = normal operation.
    Shutdown = 0x0C,
    /// 1 = all segments lit.
    DisplayTest = 0x0F,
}

impl Register {
    /// Digit register `n` (0..=7).
    ///
    /// Values above 7 saturate to [`Register::Digit7`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_max7219::Register;
    ///
    /// assert_eq!(Register::digit(0), Register::Digit0);
    /// assert_eq!(Register::digit(7), Register::Digit7);
    /// assert_eq!(Register::digit(9), Register::Digit7);
    /// ```
    pub const fn digit(n: u8) -> Self {
        match n {
            0 => Register::Digit0,
            1 => Register::Digit1,
            2 => Register::Digit2,
            3 => Register::Digit3,
            4 => Register::Digit4,
            5 => Register::Digit5,
            6 => Register::Digit6,
            _ => Register::Digit7,
        }
    }

    /// Digit register that shows buffer slot `index` of a chip.
    ///
    /// Slot 0 is the leftmost position, driven by [`Register::Digit7`].
    /// Slots past the last one saturate to [`Register::Digit0`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_max7219::Register;
    ///
    /// assert_eq!(Register::for_slot(0), Register::Digit7);
    /// assert_eq!(Register::for_slot(7), Register::Digit0);
    /// ```
    pub const fn for_slot(index: usize) -> Self {
        if index >= DIGITS_PER_CHIP {
            return Register::Digit0;
        }
        Self::digit((DIGITS_PER_CHIP - 1 - index) as u8)
    }

    /// Decodes a raw address, if it names a register.
    pub const fn from_addr(addr: u8) -> Option<Self> {
        Some(match addr {
            0x00 => Register::Noop,
            0x01..=0x08 => Register::digit(addr - 1),
            0x09 => Register::DecodeMode,
            0x0A => Register::Intensity,
            0x0B => Register::ScanLimit,
            0x0C => Register::Shutdown,
            0x0F => Register::DisplayTest,
            _ => return None,
        })
    }

    /// Raw address.
    #[inline]
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Digit index (0..=7) if this is a digit register.
    pub const fn digit_index(self) -> Option<u8> {
        match self.addr() {
            a @ 0x01..=0x08 => Some(a - 1),
            _ => None,
        }
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> u8 {
        register as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_round_trip() {
        for addr in [0x00, 0x01, 0x05, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0F] {
            assert_eq!(Register::from_addr(addr).map(Register::addr), Some(addr));
        }
        assert_eq!(Register::from_addr(0x0D), None);
        assert_eq!(Register::from_addr(0xFF), None);
    }

    #[test]
    fn slots_map_to_descending_digits() {
        let addrs: [u8; 8] = core::array::from_fn(|i| Register::for_slot(i).addr());
        assert_eq!(addrs, [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn out_of_range_digits_saturate() {
        assert_eq!(Register::digit(8), Register::Digit7);
        assert_eq!(Register::digit(9), Register::Digit7);
        assert_eq!(Register::digit(u8::MAX), Register::Digit7);
        assert_eq!(Register::for_slot(8), Register::Digit0);
        assert_eq!(Register::for_slot(usize::MAX), Register::Digit0);
    }

    #[test]
    fn digit_index_only_for_digits() {
        assert_eq!(Register::Digit0.digit_index(), Some(0));
        assert_eq!(Register::Digit7.digit_index(), Some(7));
        assert_eq!(Register::Intensity.digit_index(), None);
        assert_eq!(Register::Noop.digit_index(), None);
    }
}
