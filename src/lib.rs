//! # sim6502 — a cycle-accurate 6502-family CPU core
//!
//! An instruction-stepped interpreter for the MOS 6502 and its close
//! relatives, reproducing bit-exact register, flag, and cycle-count
//! behavior of the real silicon, documented quirks included: zero-page
//! index wraparound, the NMOS `JMP (indirect)` page-boundary bug, and the
//! NMOS/CMOS divergence in decimal-mode flags and timing.
//!
//! The core owns no memory and no peripherals. The embedding machine
//! supplies a [`MemoryBus`], drives execution with [`CPU::step`] /
//! [`CPU::run`], and raises interrupt lines with [`CPU::raise_irq`] /
//! [`CPU::raise_nmi`].
//!
//! ## Quick start
//!
//! ```
//! use sim6502::{FlatMemory, IllegalPolicy, Status, CPU};
//!
//! let mut mem = FlatMemory::new();
//! mem.load(0xFFFC, &[0x00, 0x80]);             // reset vector -> 0x8000
//! mem.load(0x8000, &[0xA9, 0x00, 0xF0, 0x05]); // LDA #$00; BEQ +5
//!
//! let mut cpu: CPU<FlatMemory> = CPU::new(mem, IllegalPolicy::Fault);
//! cpu.step().unwrap();
//! assert!(cpu.status().contains(Status::Z));
//! cpu.step().unwrap();
//! assert_eq!(cpu.pc(), 0x8009); // branch taken over five bytes
//! ```
//!
//! ## Design
//!
//! - **Table-driven decode**: all opcode-specific behavior funnels through
//!   the constant 256-entry [`OPCODE_TABLE`]; nothing else branches on the
//!   opcode byte.
//! - **Two-phase execution**: an addressing-mode resolver produces an
//!   explicit operand value that the operation handler consumes; there is
//!   no shared scratch state between stages or between instructions.
//! - **Per-instance state**: a [`CPU`] owns everything it mutates, so
//!   multiple cores run independently in one process.
//! - **Variant-parameterized quirks**: [`Nmos6502`], [`Cmos65c02`], and
//!   [`Ricoh2a03`] select silicon-specific behavior at the type level.
//! - **Caller-controlled failure**: undefined opcodes either fault with
//!   PC pinned at the offending byte or execute as timed NOPs, per the
//!   [`IllegalPolicy`] chosen at construction.

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;
pub mod variant;

mod instructions;

pub use addressing::AddressingMode;
pub use cpu::{
    IllegalPolicy, CPU, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STATE_SIZE,
};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, OpcodeEntry, OPCODE_TABLE};
pub use status::Status;
pub use variant::{Cmos65c02, Nmos6502, Ricoh2a03, Variant};

use thiserror::Error;

/// Errors surfaced by the execution driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// An opcode with no defined operation was fetched while
    /// [`IllegalPolicy::Fault`] is in effect. `addr` is where PC was left
    /// pointing: at the opcode itself, for post-mortem inspection.
    #[error("illegal opcode {opcode:#04X} fetched at {addr:#06X}")]
    IllegalOpcode { opcode: u8, addr: u16 },
}

/// Errors from [`CPU::restore_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// The buffer is not exactly [`STATE_SIZE`] bytes; no state was
    /// modified.
    #[error("save-state buffer is {found} bytes, expected {STATE_SIZE}")]
    UnexpectedLength { found: usize },
}
