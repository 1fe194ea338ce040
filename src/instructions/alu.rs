//! # Arithmetic and Logic
//!
//! ADC, SBC, the bitwise operations, the compares, and BIT.
//!
//! The arithmetic pair is where most of the family's subtlety lives:
//!
//! - Binary ADC/SBC use a widened intermediate to derive carry, and the
//!   standard two's-complement test for overflow. SBC is ADC of the
//!   operand's complement; carry set means "no borrow occurred".
//! - With the D flag set (and the variant wired for it), results are
//!   corrected to binary-coded decimal. The NMOS parts compute Z from the
//!   binary sum and N/V from an intermediate, while the 65C02 computes
//!   N/Z from the corrected result and charges one extra cycle. The
//!   per-variant behavior follows Bruce Clark's "Decimal Mode" appendix.

use crate::addressing::Operand;
use crate::status::Status;
use crate::variant::Variant;
use crate::{MemoryBus, CPU};

/// ADC: A <- A + operand + C.
pub(crate) fn adc<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let value = cpu.load_operand(operand);
    if V::HAS_DECIMAL_MODE && cpu.status.contains(Status::D) {
        adc_decimal(cpu, value);
        V::DECIMAL_EXTRA_CYCLE as u8
    } else {
        adc_binary(cpu, value);
        0
    }
}

/// SBC: A <- A - operand - (1 - C), i.e. ADC of the complement.
pub(crate) fn sbc<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let value = cpu.load_operand(operand);
    if V::HAS_DECIMAL_MODE && cpu.status.contains(Status::D) {
        sbc_decimal::<M, V>(cpu, value);
        V::DECIMAL_EXTRA_CYCLE as u8
    } else {
        adc_binary(cpu, !value);
        0
    }
}

fn adc_binary<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, value: u8) {
    let carry_in = cpu.status.contains(Status::C) as u16;
    let sum = cpu.a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.status.set(Status::C, sum > 0xFF);
    // Signed overflow: both operands agree in sign, result disagrees.
    cpu.status
        .set(Status::V, (cpu.a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.status.update_zn(result);
    cpu.a = result;
}

fn adc_decimal<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, value: u8) {
    let carry_in = cpu.status.contains(Status::C) as u16;
    let binary_sum = cpu.a as u16 + value as u16 + carry_in;

    // Digit-wise add with carry between nibbles.
    let mut lo = (cpu.a & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in;
    if lo >= 0x0A {
        lo = ((lo + 0x06) & 0x0F) + 0x10;
    }
    let mut sum = (cpu.a & 0xF0) as u16 + (value & 0xF0) as u16 + lo;

    // NMOS: N and V are captured from this intermediate, Z from the
    // binary sum. The CMOS part recomputes N and Z from the final result.
    let intermediate = sum as u8;
    cpu.status
        .set(Status::V, (cpu.a ^ intermediate) & (value ^ intermediate) & 0x80 != 0);

    if sum >= 0xA0 {
        sum += 0x60;
    }
    let result = sum as u8;
    cpu.status.set(Status::C, sum >= 0x100);

    if V::DECIMAL_FLAGS_VALID {
        cpu.status.update_zn(result);
    } else {
        cpu.status.set(Status::Z, binary_sum as u8 == 0);
        cpu.status.set(Status::N, intermediate & 0x80 != 0);
    }
    cpu.a = result;
}

fn sbc_decimal<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, value: u8) {
    let borrow = !cpu.status.contains(Status::C) as i16;

    // All four flags come from the binary subtraction on both NMOS and
    // CMOS; only N/Z differ on CMOS (recomputed from the decimal result).
    let binary = cpu.a as i16 - value as i16 - borrow;
    let binary_result = binary as u8;
    cpu.status.set(Status::C, binary >= 0);
    cpu.status
        .set(Status::V, (cpu.a ^ value) & (cpu.a ^ binary_result) & 0x80 != 0);
    cpu.status.update_zn(binary_result);

    let result = if V::DECIMAL_FLAGS_VALID {
        // 65C02 correction: adjust after the full-width subtraction.
        let lo = (cpu.a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
        let mut adjusted = binary;
        if adjusted < 0 {
            adjusted -= 0x60;
        }
        if lo < 0 {
            adjusted -= 0x06;
        }
        let result = adjusted as u8;
        cpu.status.update_zn(result);
        result
    } else {
        // NMOS correction: per-digit borrows.
        let mut lo = (cpu.a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
        if lo < 0 {
            lo = ((lo - 0x06) & 0x0F) - 0x10;
        }
        let mut sum = (cpu.a & 0xF0) as i16 - (value & 0xF0) as i16 + lo;
        if sum < 0 {
            sum -= 0x60;
        }
        sum as u8
    };
    cpu.a = result;
}

/// AND: A <- A & operand.
pub(crate) fn and<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let value = cpu.load_operand(operand);
    cpu.a &= value;
    cpu.status.update_zn(cpu.a);
    0
}

/// ORA: A <- A | operand.
pub(crate) fn ora<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let value = cpu.load_operand(operand);
    cpu.a |= value;
    cpu.status.update_zn(cpu.a);
    0
}

/// EOR: A <- A ^ operand.
pub(crate) fn eor<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let value = cpu.load_operand(operand);
    cpu.a ^= value;
    cpu.status.update_zn(cpu.a);
    0
}

pub(crate) fn compare_a<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let reg = cpu.a;
    compare(cpu, reg, operand)
}

pub(crate) fn compare_x<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let reg = cpu.x;
    compare(cpu, reg, operand)
}

pub(crate) fn compare_y<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let reg = cpu.y;
    compare(cpu, reg, operand)
}

/// CMP/CPX/CPY: subtraction for flags only, the register is never written.
/// Decimal mode does not apply to compares.
fn compare<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, reg: u8, operand: &Operand) -> u8 {
    let value = cpu.load_operand(operand);
    let result = reg.wrapping_sub(value);
    cpu.status.set(Status::C, reg >= value);
    cpu.status.update_zn(result);
    0
}

/// BIT: Z from A & operand; N and V copied from operand bits 7 and 6.
pub(crate) fn bit<M: MemoryBus, V: Variant>(cpu: &mut CPU<M, V>, operand: &Operand) -> u8 {
    let value = cpu.load_operand(operand);
    cpu.status.set(Status::Z, cpu.a & value == 0);
    cpu.status.set(Status::N, value & 0x80 != 0);
    cpu.status.set(Status::V, value & 0x40 != 0);
    0
}
