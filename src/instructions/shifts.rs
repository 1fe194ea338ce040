//! # Shifts and Rotates
//!
//! ASL/LSR inject a zero into the vacated bit; ROL/ROR inject the carry
//! flag. In all four, the bit shifted out becomes the new carry, and Z/N
//! follow the result. Accumulator and memory forms share one handler; the
//! memory forms are read-modify-write through the bus.

use crate::addressing::Operand;
use crate::status::Status;
use crate::variant::Variant;
use crate::{MemoryBus, CPU};

pub(crate) fn asl<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let value = cpu.load_operand(operand);
    let result = value << 1;
    cpu.status.set(Status::C, value & 0x80 != 0);
    finish(cpu, operand, result)
}

pub(crate) fn lsr<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let value = cpu.load_operand(operand);
    let result = value >> 1;
    cpu.status.set(Status::C, value & 0x01 != 0);
    finish(cpu, operand, result)
}

pub(crate) fn rol<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let value = cpu.load_operand(operand);
    let result = value << 1 | cpu.status.contains(Status::C) as u8;
    cpu.status.set(Status::C, value & 0x80 != 0);
    finish(cpu, operand, result)
}

pub(crate) fn ror<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let value = cpu.load_operand(operand);
    let result = value >> 1 | (cpu.status.contains(Status::C) as u8) << 7;
    cpu.status.set(Status::C, value & 0x01 != 0);
    finish(cpu, operand, result)
}

fn finish<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand, result: u8) -> u8 {
    cpu.store_operand(operand, result);
    cpu.status.update_zn(result);
    0
}
