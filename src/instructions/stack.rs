//! # Stack Operations
//!
//! PHA/PLA move the accumulator through the stack; PHP/PLP move the status
//! register. PHP pushes with B and bit 5 forced high (software push); PLP
//! discards the pushed B and keeps bit 5 high, so a PLP/PHP pair
//! round-trips every byte up to those forced bits.

use crate::variant::Variant;
use crate::{MemoryBus, Status, CPU};

pub(crate) fn pha<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    let value = cpu.a;
    cpu.push(value);
    0
}

pub(crate) fn pla<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    cpu.a = cpu.pull();
    cpu.status.update_zn(cpu.a);
    0
}

pub(crate) fn php<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    let byte = cpu.status.pushed(true);
    cpu.push(byte);
    0
}

pub(crate) fn plp<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>) -> u8 {
    let byte = cpu.pull();
    cpu.status = Status::pulled(byte);
    0
}
