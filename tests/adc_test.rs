//! ADC: binary addition, carry/overflow/zero/negative flag semantics.

use sim6502::{FlatMemory, IllegalPolicy, MemoryBus, Status, CPU};

fn setup() -> CPU<FlatMemory> {
    let mut mem = FlatMemory::new();
    mem.load(0xFFFC, &[0x00, 0x80]);
    CPU::new(mem, IllegalPolicy::Fault)
}

fn set_carry(cpu: &mut CPU<FlatMemory>, value: bool) {
    let mut status = cpu.status();
    status.set(Status::C, value);
    cpu.set_status(status);
}

#[test]
fn test_adc_immediate_basic() {
    let mut cpu = setup();
    cpu.memory_mut().load(0x8000, &[0x69, 0x05]); // ADC #$05
    cpu.set_a(0x10);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.status().contains(Status::C));
    assert!(!cpu.status().contains(Status::Z));
    assert!(!cpu.status().contains(Status::V));
    assert!(!cpu.status().contains(Status::N));
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cycles, 2);
}

#[test]
fn test_adc_carry_in() {
    let mut cpu = setup();
    cpu.memory_mut().load(0x8000, &[0x69, 0x05]);
    cpu.set_a(0x10);
    set_carry(&mut cpu, true);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x16);
}

#[test]
fn test_adc_ff_plus_one_wraps_with_carry_and_zero() {
    let mut cpu = setup();
    cpu.memory_mut().load(0x8000, &[0x69, 0x01]); // ADC #$01
    cpu.set_a(0xFF);
    set_carry(&mut cpu, false);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.status().contains(Status::C));
    assert!(cpu.status().contains(Status::Z));
    assert!(!cpu.status().contains(Status::V));
    assert!(!cpu.status().contains(Status::N));
}

#[test]
fn test_adc_signed_overflow_positive() {
    let mut cpu = setup();
    cpu.memory_mut().load(0x8000, &[0x69, 0x01]);
    cpu.set_a(0x7F); // +127 + 1 overflows to -128

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.status().contains(Status::V));
    assert!(cpu.status().contains(Status::N));
    assert!(!cpu.status().contains(Status::C));
}

#[test]
fn test_adc_signed_overflow_negative() {
    let mut cpu = setup();
    cpu.memory_mut().load(0x8000, &[0x69, 0xFF]); // ADC #-1
    cpu.set_a(0x80); // -128 + -1 overflows

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.status().contains(Status::V));
    assert!(cpu.status().contains(Status::C));
    assert!(!cpu.status().contains(Status::N));
}

#[test]
fn test_adc_zero_page() {
    let mut cpu = setup();
    cpu.memory_mut().load(0x8000, &[0x65, 0x42]); // ADC $42
    cpu.memory_mut().write(0x0042, 0x20);
    cpu.set_a(0x13);

    let cycles = cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x33);
    assert_eq!(cycles, 3);
}
