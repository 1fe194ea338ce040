//! # Opcode Dispatch Table
//!
//! The single source of truth for instruction decode: a 256-entry constant
//! table indexed by the fetched opcode byte. Each entry names the operation
//! ([`Mnemonic`]), the [`AddressingMode`] that resolves its operand, and the
//! base cycle cost before dynamic penalties (page crossings, taken
//! branches, CMOS decimal arithmetic).
//!
//! All opcode-specific behavior funnels through this table; no other part
//! of the core branches on the opcode byte. The table is immutable shared
//! data and embeds no per-instance state, so any number of CPU instances
//! can decode from it concurrently.
//!
//! Coverage:
//!
//! - the 151 documented NMOS opcodes,
//! - the undocumented NOP family (0x1A, 0x04, 0x1C, 0x80, ...), tagged
//!   [`Mnemonic::NopUndocumented`] and carrying their real addressing modes
//!   and cycle costs so lenient configurations time them correctly,
//! - everything else tagged [`Mnemonic::Illegal`], with behavior decided by
//!   the configured [`IllegalPolicy`](crate::IllegalPolicy).

use crate::addressing::AddressingMode;

/// Operation selector for the enum-tagged dispatch in the execute stage.
///
/// One variant per documented 6502 mnemonic, plus the two undefined-opcode
/// classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
    /// Undocumented NOP variant: defined timing, no architectural effect.
    NopUndocumented,
    /// No defined operation on this family.
    Illegal,
}

impl Mnemonic {
    /// True for opcodes with no documented operation. These are the ones
    /// the illegal-opcode policy applies to.
    pub const fn is_undefined(self) -> bool {
        matches!(self, Mnemonic::NopUndocumented | Mnemonic::Illegal)
    }

    /// True for operations that pay one extra cycle when their indexed
    /// operand crossed a page boundary. Stores and read-modify-write
    /// operations always perform the extra bus cycle, so their table cost
    /// already includes it and they are not listed here.
    pub(crate) const fn page_cross_sensitive(self) -> bool {
        matches!(
            self,
            Mnemonic::Adc
                | Mnemonic::And
                | Mnemonic::Cmp
                | Mnemonic::Eor
                | Mnemonic::Lda
                | Mnemonic::Ldx
                | Mnemonic::Ldy
                | Mnemonic::Ora
                | Mnemonic::Sbc
                | Mnemonic::NopUndocumented
        )
    }

    /// Assembler name, `???` for illegal opcodes.
    pub const fn name(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC", Mnemonic::And => "AND", Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC", Mnemonic::Bcs => "BCS", Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT", Mnemonic::Bmi => "BMI", Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL", Mnemonic::Brk => "BRK", Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS", Mnemonic::Clc => "CLC", Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI", Mnemonic::Clv => "CLV", Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX", Mnemonic::Cpy => "CPY", Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX", Mnemonic::Dey => "DEY", Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC", Mnemonic::Inx => "INX", Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP", Mnemonic::Jsr => "JSR", Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX", Mnemonic::Ldy => "LDY", Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP", Mnemonic::Ora => "ORA", Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP", Mnemonic::Pla => "PLA", Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL", Mnemonic::Ror => "ROR", Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS", Mnemonic::Sbc => "SBC", Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED", Mnemonic::Sei => "SEI", Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX", Mnemonic::Sty => "STY", Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY", Mnemonic::Tsx => "TSX", Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS", Mnemonic::Tya => "TYA",
            Mnemonic::NopUndocumented => "NOP*",
            Mnemonic::Illegal => "???",
        }
    }
}

/// One decode-table entry: operation, operand resolution rule, base cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Which operation the execute stage dispatches to.
    pub mnemonic: Mnemonic,
    /// How the operand bytes after the opcode are interpreted.
    pub mode: AddressingMode,
    /// Cycle cost before dynamic penalties.
    pub base_cycles: u8,
}

impl OpcodeEntry {
    /// Total instruction length in bytes, opcode included.
    pub const fn size_bytes(&self) -> u16 {
        1 + self.mode.operand_len()
    }
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode, base_cycles: u8) -> OpcodeEntry {
    OpcodeEntry {
        mnemonic,
        mode,
        base_cycles,
    }
}

/// 256-entry decode table indexed by opcode byte.
///
/// # Examples
///
/// ```
/// use sim6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// ```
pub const OPCODE_TABLE: [OpcodeEntry; 256] = build_table();

#[rustfmt::skip]
const fn build_table() -> [OpcodeEntry; 256] {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut t = [op(Illegal, Implied, 2); 256];

    // 0x00-0x1F
    t[0x00] = op(Brk, Implied, 7);
    t[0x01] = op(Ora, IndirectX, 6);
    t[0x04] = op(NopUndocumented, ZeroPage, 3);
    t[0x05] = op(Ora, ZeroPage, 3);
    t[0x06] = op(Asl, ZeroPage, 5);
    t[0x08] = op(Php, Implied, 3);
    t[0x09] = op(Ora, Immediate, 2);
    t[0x0A] = op(Asl, Accumulator, 2);
    t[0x0C] = op(NopUndocumented, Absolute, 4);
    t[0x0D] = op(Ora, Absolute, 4);
    t[0x0E] = op(Asl, Absolute, 6);
    t[0x10] = op(Bpl, Relative, 2);
    t[0x11] = op(Ora, IndirectY, 5);
    t[0x14] = op(NopUndocumented, ZeroPageX, 4);
    t[0x15] = op(Ora, ZeroPageX, 4);
    t[0x16] = op(Asl, ZeroPageX, 6);
    t[0x18] = op(Clc, Implied, 2);
    t[0x19] = op(Ora, AbsoluteY, 4);
    t[0x1A] = op(NopUndocumented, Implied, 2);
    t[0x1C] = op(NopUndocumented, AbsoluteX, 4);
    t[0x1D] = op(Ora, AbsoluteX, 4);
    t[0x1E] = op(Asl, AbsoluteX, 7);

    // 0x20-0x3F
    t[0x20] = op(Jsr, Absolute, 6);
    t[0x21] = op(And, IndirectX, 6);
    t[0x24] = op(Bit, ZeroPage, 3);
    t[0x25] = op(And, ZeroPage, 3);
    t[0x26] = op(Rol, ZeroPage, 5);
    t[0x28] = op(Plp, Implied, 4);
    t[0x29] = op(And, Immediate, 2);
    t[0x2A] = op(Rol, Accumulator, 2);
    t[0x2C] = op(Bit, Absolute, 4);
    t[0x2D] = op(And, Absolute, 4);
    t[0x2E] = op(Rol, Absolute, 6);
    t[0x30] = op(Bmi, Relative, 2);
    t[0x31] = op(And, IndirectY, 5);
    t[0x34] = op(NopUndocumented, ZeroPageX, 4);
    t[0x35] = op(And, ZeroPageX, 4);
    t[0x36] = op(Rol, ZeroPageX, 6);
    t[0x38] = op(Sec, Implied, 2);
    t[0x39] = op(And, AbsoluteY, 4);
    t[0x3A] = op(NopUndocumented, Implied, 2);
    t[0x3C] = op(NopUndocumented, AbsoluteX, 4);
    t[0x3D] = op(And, AbsoluteX, 4);
    t[0x3E] = op(Rol, AbsoluteX, 7);

    // 0x40-0x5F
    t[0x40] = op(Rti, Implied, 6);
    t[0x41] = op(Eor, IndirectX, 6);
    t[0x44] = op(NopUndocumented, ZeroPage, 3);
    t[0x45] = op(Eor, ZeroPage, 3);
    t[0x46] = op(Lsr, ZeroPage, 5);
    t[0x48] = op(Pha, Implied, 3);
    t[0x49] = op(Eor, Immediate, 2);
    t[0x4A] = op(Lsr, Accumulator, 2);
    t[0x4C] = op(Jmp, Absolute, 3);
    t[0x4D] = op(Eor, Absolute, 4);
    t[0x4E] = op(Lsr, Absolute, 6);
    t[0x50] = op(Bvc, Relative, 2);
    t[0x51] = op(Eor, IndirectY, 5);
    t[0x54] = op(NopUndocumented, ZeroPageX, 4);
    t[0x55] = op(Eor, ZeroPageX, 4);
    t[0x56] = op(Lsr, ZeroPageX, 6);
    t[0x58] = op(Cli, Implied, 2);
    t[0x59] = op(Eor, AbsoluteY, 4);
    t[0x5A] = op(NopUndocumented, Implied, 2);
    t[0x5C] = op(NopUndocumented, AbsoluteX, 4);
    t[0x5D] = op(Eor, AbsoluteX, 4);
    t[0x5E] = op(Lsr, AbsoluteX, 7);

    // 0x60-0x7F
    t[0x60] = op(Rts, Implied, 6);
    t[0x61] = op(Adc, IndirectX, 6);
    t[0x64] = op(NopUndocumented, ZeroPage, 3);
    t[0x65] = op(Adc, ZeroPage, 3);
    t[0x66] = op(Ror, ZeroPage, 5);
    t[0x68] = op(Pla, Implied, 4);
    t[0x69] = op(Adc, Immediate, 2);
    t[0x6A] = op(Ror, Accumulator, 2);
    t[0x6C] = op(Jmp, Indirect, 5);
    t[0x6D] = op(Adc, Absolute, 4);
    t[0x6E] = op(Ror, Absolute, 6);
    t[0x70] = op(Bvs, Relative, 2);
    t[0x71] = op(Adc, IndirectY, 5);
    t[0x74] = op(NopUndocumented, ZeroPageX, 4);
    t[0x75] = op(Adc, ZeroPageX, 4);
    t[0x76] = op(Ror, ZeroPageX, 6);
    t[0x78] = op(Sei, Implied, 2);
    t[0x79] = op(Adc, AbsoluteY, 4);
    t[0x7A] = op(NopUndocumented, Implied, 2);
    t[0x7C] = op(NopUndocumented, AbsoluteX, 4);
    t[0x7D] = op(Adc, AbsoluteX, 4);
    t[0x7E] = op(Ror, AbsoluteX, 7);

    // 0x80-0x9F
    t[0x80] = op(NopUndocumented, Immediate, 2);
    t[0x81] = op(Sta, IndirectX, 6);
    t[0x82] = op(NopUndocumented, Immediate, 2);
    t[0x84] = op(Sty, ZeroPage, 3);
    t[0x85] = op(Sta, ZeroPage, 3);
    t[0x86] = op(Stx, ZeroPage, 3);
    t[0x88] = op(Dey, Implied, 2);
    t[0x89] = op(NopUndocumented, Immediate, 2);
    t[0x8A] = op(Txa, Implied, 2);
    t[0x8C] = op(Sty, Absolute, 4);
    t[0x8D] = op(Sta, Absolute, 4);
    t[0x8E] = op(Stx, Absolute, 4);
    t[0x90] = op(Bcc, Relative, 2);
    t[0x91] = op(Sta, IndirectY, 6);
    t[0x94] = op(Sty, ZeroPageX, 4);
    t[0x95] = op(Sta, ZeroPageX, 4);
    t[0x96] = op(Stx, ZeroPageY, 4);
    t[0x98] = op(Tya, Implied, 2);
    t[0x99] = op(Sta, AbsoluteY, 5);
    t[0x9A] = op(Txs, Implied, 2);
    t[0x9D] = op(Sta, AbsoluteX, 5);

    // 0xA0-0xBF
    t[0xA0] = op(Ldy, Immediate, 2);
    t[0xA1] = op(Lda, IndirectX, 6);
    t[0xA2] = op(Ldx, Immediate, 2);
    t[0xA4] = op(Ldy, ZeroPage, 3);
    t[0xA5] = op(Lda, ZeroPage, 3);
    t[0xA6] = op(Ldx, ZeroPage, 3);
    t[0xA8] = op(Tay, Implied, 2);
    t[0xA9] = op(Lda, Immediate, 2);
    t[0xAA] = op(Tax, Implied, 2);
    t[0xAC] = op(Ldy, Absolute, 4);
    t[0xAD] = op(Lda, Absolute, 4);
    t[0xAE] = op(Ldx, Absolute, 4);
    t[0xB0] = op(Bcs, Relative, 2);
    t[0xB1] = op(Lda, IndirectY, 5);
    t[0xB4] = op(Ldy, ZeroPageX, 4);
    t[0xB5] = op(Lda, ZeroPageX, 4);
    t[0xB6] = op(Ldx, ZeroPageY, 4);
    t[0xB8] = op(Clv, Implied, 2);
    t[0xB9] = op(Lda, AbsoluteY, 4);
    t[0xBA] = op(Tsx, Implied, 2);
    t[0xBC] = op(Ldy, AbsoluteX, 4);
    t[0xBD] = op(Lda, AbsoluteX, 4);
    t[0xBE] = op(Ldx, AbsoluteY, 4);

    // 0xC0-0xDF
    t[0xC0] = op(Cpy, Immediate, 2);
    t[0xC1] = op(Cmp, IndirectX, 6);
    t[0xC2] = op(NopUndocumented, Immediate, 2);
    t[0xC4] = op(Cpy, ZeroPage, 3);
    t[0xC5] = op(Cmp, ZeroPage, 3);
    t[0xC6] = op(Dec, ZeroPage, 5);
    t[0xC8] = op(Iny, Implied, 2);
    t[0xC9] = op(Cmp, Immediate, 2);
    t[0xCA] = op(Dex, Implied, 2);
    t[0xCC] = op(Cpy, Absolute, 4);
    t[0xCD] = op(Cmp, Absolute, 4);
    t[0xCE] = op(Dec, Absolute, 6);
    t[0xD0] = op(Bne, Relative, 2);
    t[0xD1] = op(Cmp, IndirectY, 5);
    t[0xD4] = op(NopUndocumented, ZeroPageX, 4);
    t[0xD5] = op(Cmp, ZeroPageX, 4);
    t[0xD6] = op(Dec, ZeroPageX, 6);
    t[0xD8] = op(Cld, Implied, 2);
    t[0xD9] = op(Cmp, AbsoluteY, 4);
    t[0xDA] = op(NopUndocumented, Implied, 2);
    t[0xDC] = op(NopUndocumented, AbsoluteX, 4);
    t[0xDD] = op(Cmp, AbsoluteX, 4);
    t[0xDE] = op(Dec, AbsoluteX, 7);

    // 0xE0-0xFF
    t[0xE0] = op(Cpx, Immediate, 2);
    t[0xE1] = op(Sbc, IndirectX, 6);
    t[0xE2] = op(NopUndocumented, Immediate, 2);
    t[0xE4] = op(Cpx, ZeroPage, 3);
    t[0xE5] = op(Sbc, ZeroPage, 3);
    t[0xE6] = op(Inc, ZeroPage, 5);
    t[0xE8] = op(Inx, Implied, 2);
    t[0xE9] = op(Sbc, Immediate, 2);
    t[0xEA] = op(Nop, Implied, 2);
    t[0xEC] = op(Cpx, Absolute, 4);
    t[0xED] = op(Sbc, Absolute, 4);
    t[0xEE] = op(Inc, Absolute, 6);
    t[0xF0] = op(Beq, Relative, 2);
    t[0xF1] = op(Sbc, IndirectY, 5);
    t[0xF4] = op(NopUndocumented, ZeroPageX, 4);
    t[0xF5] = op(Sbc, ZeroPageX, 4);
    t[0xF6] = op(Inc, ZeroPageX, 6);
    t[0xF8] = op(Sed, Implied, 2);
    t[0xF9] = op(Sbc, AbsoluteY, 4);
    t[0xFA] = op(NopUndocumented, Implied, 2);
    t[0xFC] = op(NopUndocumented, AbsoluteX, 4);
    t[0xFD] = op(Sbc, AbsoluteX, 4);
    t[0xFE] = op(Inc, AbsoluteX, 7);

    t
}
