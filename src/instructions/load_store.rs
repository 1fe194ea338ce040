//! # Loads and Stores
//!
//! Loads set Z and N from the value moved; stores affect no flags.

use crate::addressing::Operand;
use crate::variant::Variant;
use crate::{MemoryBus, CPU};

pub(crate) fn lda<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    cpu.a = cpu.load_operand(operand);
    cpu.status.update_zn(cpu.a);
    0
}

pub(crate) fn ldx<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    cpu.x = cpu.load_operand(operand);
    cpu.status.update_zn(cpu.x);
    0
}

pub(crate) fn ldy<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    cpu.y = cpu.load_operand(operand);
    cpu.status.update_zn(cpu.y);
    0
}

pub(crate) fn sta<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let value = cpu.a;
    cpu.store_operand(operand, value);
    0
}

pub(crate) fn stx<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let value = cpu.x;
    cpu.store_operand(operand, value);
    0
}

pub(crate) fn sty<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let value = cpu.y;
    cpu.store_operand(operand, value);
    0
}
