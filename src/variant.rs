//! # Silicon Variants
//!
//! The 6502 family shares one instruction set but diverges in documented
//! quirks. [`Variant`] captures the differences as associated constants,
//! selected at the type level so every check folds away at compile time
//! and a single core serves all three parts.

/// Compile-time description of one 6502-family part's quirks.
///
/// Implemented by the zero-sized marker types below; the [`CPU`] is
/// generic over the variant.
///
/// [`CPU`]: crate::CPU
pub trait Variant {
    /// `JMP (indirect)` with a pointer at 0xxxFF reads the high byte from
    /// 0xxx00 instead of carrying into the next page.
    const HAS_INDIRECT_PAGE_BUG: bool;

    /// The D flag affects ADC/SBC at all. The Ricoh part wired decimal
    /// correction out entirely.
    const HAS_DECIMAL_MODE: bool;

    /// In decimal mode, N/V/Z reflect the corrected BCD result. On NMOS
    /// parts they are left over from the binary intermediate.
    const DECIMAL_FLAGS_VALID: bool;

    /// Decimal-mode ADC/SBC take one cycle more than their binary timing.
    const DECIMAL_EXTRA_CYCLE: bool;

    /// Interrupt entry (and BRK) clears the D flag.
    const CLEARS_DECIMAL_ON_INTERRUPT: bool;
}

/// The original NMOS MOS 6502: page-boundary bugs and decimal mode with
/// binary-leftover flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nmos6502;

impl Variant for Nmos6502 {
    const HAS_INDIRECT_PAGE_BUG: bool = true;
    const HAS_DECIMAL_MODE: bool = true;
    const DECIMAL_FLAGS_VALID: bool = false;
    const DECIMAL_EXTRA_CYCLE: bool = false;
    const CLEARS_DECIMAL_ON_INTERRUPT: bool = false;
}

/// The WDC/Rockwell 65C02: indirect bug fixed, decimal flags valid at the
/// cost of an extra cycle, D cleared on interrupt entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cmos65c02;

impl Variant for Cmos65c02 {
    const HAS_INDIRECT_PAGE_BUG: bool = false;
    const HAS_DECIMAL_MODE: bool = true;
    const DECIMAL_FLAGS_VALID: bool = true;
    const DECIMAL_EXTRA_CYCLE: bool = true;
    const CLEARS_DECIMAL_ON_INTERRUPT: bool = true;
}

/// The Ricoh 2A03 (NES): an NMOS core with the decimal unit disconnected.
/// SED/CLD still toggle the flag bit; ADC/SBC ignore it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ricoh2a03;

impl Variant for Ricoh2a03 {
    const HAS_INDIRECT_PAGE_BUG: bool = true;
    const HAS_DECIMAL_MODE: bool = false;
    const DECIMAL_FLAGS_VALID: bool = false;
    const DECIMAL_EXTRA_CYCLE: bool = false;
    const CLEARS_DECIMAL_ON_INTERRUPT: bool = false;
}
