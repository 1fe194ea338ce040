//! # Addressing Modes
//!
//! The 13 addressing modes of the 6502, plus the resolver that turns the
//! bytes following an opcode into an [`Operand`].
//!
//! Resolution is the first half of every instruction: it consumes 0-2
//! operand bytes from the instruction stream (advancing PC past them),
//! performs whatever pointer reads the mode requires, and records whether
//! indexing crossed a page boundary. The operation handler consumes the
//! resulting `Operand`; nothing survives between instructions.
//!
//! Two hardware quirks live here and must not be "fixed":
//!
//! - Zero-page indexed modes wrap within the zero page. `LDA $FF,X` with
//!   X=2 reads 0x0001, never 0x0101.
//! - On NMOS parts, the indirect mode's high-byte fetch wraps within the
//!   pointer's page (`JMP ($10FF)` reads 0x10FF and 0x1000). CMOS parts
//!   carry into the next page. Selected by [`Variant::HAS_INDIRECT_PAGE_BUG`].

use crate::variant::Variant;
use crate::{MemoryBus, CPU};

/// How an instruction locates its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the operation is implied by the opcode (CLC, RTS, NOP).
    Implied,
    /// The operand is the accumulator itself (ASL A, ROR A).
    Accumulator,
    /// The operand is the byte following the opcode (LDA #$10).
    Immediate,
    /// One-byte address into page zero (LDA $80).
    ZeroPage,
    /// Zero-page address plus X, wrapping within page zero (LDA $80,X).
    ZeroPageX,
    /// Zero-page address plus Y, wrapping within page zero (LDX $80,Y).
    ZeroPageY,
    /// Signed 8-bit branch displacement (BEQ label).
    Relative,
    /// Full two-byte little-endian address (JMP $1234).
    Absolute,
    /// Absolute address plus X; page crossing costs a cycle on read ops.
    AbsoluteX,
    /// Absolute address plus Y; page crossing costs a cycle on read ops.
    AbsoluteY,
    /// Jump through a two-byte pointer (JMP ($FFFC)); JMP only.
    Indirect,
    /// (zp,X): index into page zero first, then dereference (LDA ($40,X)).
    IndirectX,
    /// (zp),Y: dereference first, then add Y (LDA ($40),Y); page crossing
    /// costs a cycle on read ops.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes the mode consumes after the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Where a resolved operand lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    /// No operand.
    Implied,
    /// The accumulator register.
    Accumulator,
    /// A bus address. Immediate operands land here too: their effective
    /// address is the operand byte's own location in the instruction stream.
    Memory(u16),
    /// A sign-extended branch displacement; the branch handler applies it
    /// to PC only if its condition holds.
    Relative(i8),
}

/// The decode result handed from the resolver to the operation handler.
///
/// This is deliberately a value, not shared scratch state: it is built
/// fresh each instruction and dropped when the handler returns.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Operand {
    pub(crate) target: Target,
    /// Indexing changed the high address byte. Only charged as a cycle when
    /// the executed operation is page-cross sensitive.
    pub(crate) page_crossed: bool,
}

impl Operand {
    pub(crate) const fn at(target: Target) -> Self {
        Self {
            target,
            page_crossed: false,
        }
    }
}

impl<M: MemoryBus, V: Variant> CPU<M, V> {
    /// Resolves `mode` against the current instruction stream, advancing PC
    /// past the operand bytes.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implied => Operand::at(Target::Implied),

            AddressingMode::Accumulator => Operand::at(Target::Accumulator),

            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Operand::at(Target::Memory(addr))
            }

            AddressingMode::ZeroPage => {
                let zp = self.fetch();
                Operand::at(Target::Memory(zp as u16))
            }

            AddressingMode::ZeroPageX => {
                // Wraps within page zero, never into page one.
                let zp = self.fetch().wrapping_add(self.x);
                Operand::at(Target::Memory(zp as u16))
            }

            AddressingMode::ZeroPageY => {
                let zp = self.fetch().wrapping_add(self.y);
                Operand::at(Target::Memory(zp as u16))
            }

            AddressingMode::Relative => {
                let offset = self.fetch() as i8;
                Operand::at(Target::Relative(offset))
            }

            AddressingMode::Absolute => {
                let addr = self.fetch_word();
                Operand::at(Target::Memory(addr))
            }

            AddressingMode::AbsoluteX => self.absolute_indexed(self.x),

            AddressingMode::AbsoluteY => self.absolute_indexed(self.y),

            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                let lo = self.memory.read(ptr) as u16;
                let hi_addr = if V::HAS_INDIRECT_PAGE_BUG && ptr & 0x00FF == 0x00FF {
                    // NMOS bug: the high-byte fetch wraps within the page.
                    ptr & 0xFF00
                } else {
                    ptr.wrapping_add(1)
                };
                let hi = self.memory.read(hi_addr) as u16;
                Operand::at(Target::Memory(hi << 8 | lo))
            }

            AddressingMode::IndirectX => {
                let zp = self.fetch().wrapping_add(self.x);
                let addr = self.read_zero_page_pointer(zp);
                Operand::at(Target::Memory(addr))
            }

            AddressingMode::IndirectY => {
                let zp = self.fetch();
                let base = self.read_zero_page_pointer(zp);
                let addr = base.wrapping_add(self.y as u16);
                Operand {
                    target: Target::Memory(addr),
                    page_crossed: (base ^ addr) & 0xFF00 != 0,
                }
            }
        }
    }

    /// Fetches one byte at PC and advances PC.
    pub(crate) fn fetch(&mut self) -> u8 {
        let byte = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Fetches a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch() as u16;
        let hi = self.fetch() as u16;
        hi << 8 | lo
    }

    fn absolute_indexed(&mut self, index: u8) -> Operand {
        let base = self.fetch_word();
        let addr = base.wrapping_add(index as u16);
        Operand {
            target: Target::Memory(addr),
            page_crossed: (base ^ addr) & 0xFF00 != 0,
        }
    }

    /// Reads a two-byte pointer out of page zero. Both pointer bytes live
    /// in page zero: a pointer at 0xFF takes its high byte from 0x00.
    fn read_zero_page_pointer(&mut self, zp: u8) -> u16 {
        let lo = self.memory.read(zp as u16) as u16;
        let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
        hi << 8 | lo
    }
}
