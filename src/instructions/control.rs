//! # Control Flow
//!
//! JMP, the JSR/RTS subroutine pair, the BRK/RTI interrupt pair, and NOP.
//!
//! Two return-address conventions to keep straight:
//!
//! - JSR pushes the address of the *last byte* of the JSR instruction, not
//!   of the next instruction; RTS compensates by adding one after pulling.
//! - BRK pushes the address two bytes past its opcode, skipping the unused
//!   padding byte, and the pushed status has B set so the handler can tell
//!   a software break from a hardware interrupt. RTI adds nothing.

use crate::addressing::{Operand, Target};
use crate::cpu::IRQ_VECTOR;
use crate::status::Status;
use crate::variant::Variant;
use crate::{MemoryBus, CPU};

pub(crate) fn jmp<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let Target::Memory(target) = operand.target else {
        unreachable!("JMP resolved without a memory operand")
    };
    cpu.pc = target;
    0
}

pub(crate) fn jsr<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let Target::Memory(target) = operand.target else {
        unreachable!("JSR resolved without a memory operand")
    };
    // PC sits past the operand; the hardware pushes PC-1, the address of
    // the JSR's last byte.
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_addr);
    cpu.pc = target;
    0
}

pub(crate) fn rts<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    cpu.pc = cpu.pull_word().wrapping_add(1);
    0
}

pub(crate) fn rti<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    let byte = cpu.pull();
    cpu.status = Status::pulled(byte);
    // Unlike RTS, the pulled PC is used as-is.
    cpu.pc = cpu.pull_word();
    0
}

pub(crate) fn brk<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    // PC is one past the opcode; the pushed address skips the padding byte.
    let return_addr = cpu.pc.wrapping_add(1);
    cpu.push_word(return_addr);
    let status_byte = cpu.status.pushed(true);
    cpu.push(status_byte);
    cpu.status.insert(Status::I);
    if V::CLEARS_DECIMAL_ON_INTERRUPT {
        cpu.status.remove(Status::D);
    }
    cpu.pc = cpu.read_word(IRQ_VECTOR);
    0
}

/// NOP, documented and undocumented. The memory-operand variants still
/// perform their operand read so bus-sensitive peripherals see the same
/// access sequence the hardware produces.
pub(crate) fn nop<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    if let Target::Memory(_) = operand.target {
        let _ = cpu.load_operand(operand);
    }
    0
}
