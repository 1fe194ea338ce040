//! # Register Transfers
//!
//! Every transfer except TXS sets Z/N from the value moved. TXS is the odd
//! one out: the stack pointer is not a general register and loading it
//! touches no flags.

use crate::variant::Variant;
use crate::{MemoryBus, CPU};

pub(crate) fn tax<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    cpu.x = cpu.a;
    cpu.status.update_zn(cpu.x);
    0
}

pub(crate) fn tay<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    cpu.y = cpu.a;
    cpu.status.update_zn(cpu.y);
    0
}

pub(crate) fn txa<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    cpu.a = cpu.x;
    cpu.status.update_zn(cpu.a);
    0
}

pub(crate) fn tya<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    cpu.a = cpu.y;
    cpu.status.update_zn(cpu.a);
    0
}

pub(crate) fn tsx<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    cpu.x = cpu.sp;
    cpu.status.update_zn(cpu.x);
    0
}

pub(crate) fn txs<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    cpu.sp = cpu.x;
    0
}
