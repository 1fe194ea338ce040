//! # Increments and Decrements
//!
//! INC/DEC on memory, INX/INY/DEX/DEY on registers. These adjust by one and
//! set Z/N, but never touch carry; that distinction from ADC/SBC is what
//! lets loop counters coexist with multi-byte arithmetic.

use crate::addressing::Operand;
use crate::variant::Variant;
use crate::{MemoryBus, CPU};

pub(crate) fn inc<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let value = cpu.load_operand(operand).wrapping_add(1);
    cpu.store_operand(operand, value);
    cpu.status.update_zn(value);
    0
}

pub(crate) fn dec<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let value = cpu.load_operand(operand).wrapping_sub(1);
    cpu.store_operand(operand, value);
    cpu.status.update_zn(value);
    0
}

pub(crate) fn inx<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.update_zn(cpu.x);
    0
}

pub(crate) fn iny<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.update_zn(cpu.y);
    0
}

pub(crate) fn dex<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.update_zn(cpu.x);
    0
}

pub(crate) fn dey<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.update_zn(cpu.y);
    0
}
