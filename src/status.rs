//! # Processor Status Register
//!
//! The P register as a [`bitflags`] set, plus the push/pull rules that
//! make B and bit 5 phantom bits: neither exists as live state on real
//! silicon. B appears only in bytes pushed by BRK/PHP, and bit 5 reads
//! as 1 from every source.

use bitflags::bitflags;

bitflags! {
    /// Processor status flags (the P register).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        /// Carry.
        const C = 0b0000_0001;
        /// Zero.
        const Z = 0b0000_0010;
        /// Interrupt disable.
        const I = 0b0000_0100;
        /// Decimal mode.
        const D = 0b0000_1000;
        /// Break. Never set in the live register; see [`Status::pushed`].
        const B = 0b0001_0000;
        /// Unused bit 5, always reads as 1.
        const U = 0b0010_0000;
        /// Overflow.
        const V = 0b0100_0000;
        /// Negative (bit 7 of the last result).
        const N = 0b1000_0000;
    }
}

impl Status {
    /// Flags at power-on and after reset: interrupts masked, bit 5 high,
    /// everything else clear.
    pub const fn power_on() -> Self {
        Self::U.union(Self::I)
    }

    /// Sets Z and N from an 8-bit result, the pattern shared by loads,
    /// transfers, logic ops, and increments.
    pub fn update_zn(&mut self, value: u8) {
        self.set(Status::Z, value == 0);
        self.set(Status::N, value & 0x80 != 0);
    }

    /// The byte an interrupt or push instruction deposits on the stack.
    ///
    /// Bit 5 is forced high. B is set only for software entry (BRK, PHP);
    /// hardware interrupt entry pushes it clear. That pushed distinction
    /// is the only place B exists at all.
    pub fn pushed(self, software: bool) -> u8 {
        let mut byte = self.bits() | Status::U.bits();
        if software {
            byte |= Status::B.bits();
        } else {
            byte &= !Status::B.bits();
        }
        byte
    }

    /// Reconstructs the live register from a byte pulled off the stack:
    /// B is discarded and bit 5 forced high, whatever the byte said.
    pub fn pulled(byte: u8) -> Self {
        (Self::from_bits_retain(byte) - Self::B) | Self::U
    }
}
