//! SBC: borrow-as-inverted-carry semantics and the add/subtract
//! relationship.

use sim6502::{FlatMemory, IllegalPolicy, Status, CPU};

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
fn test_sbc_no_borrow() {
    let mut cpu = setup();
    cpu.memory_mut().load(0x8000, &[0xE9, 0x10]); // SBC #$10
    cpu.set_a(0x50);
    set_carry(&mut cpu, true); // carry set = no incoming borrow

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x40);
    assert!(cpu.status().contains(Status::C)); // no borrow occurred
    assert!(!cpu.status().contains(Status::Z));
    assert!(!cpu.status().contains(Status::N));
}

#[test]
fn test_sbc_with_incoming_borrow() {
    let mut cpu = setup();
    cpu.memory_mut().load(0x8000, &[0xE9, 0x10]);
    cpu.set_a(0x50);
    set_carry(&mut cpu, false); // carry clear = borrow one more

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x3F);
}

#[test]
fn test_sbc_underflow_clears_carry() {
    let mut cpu = setup();
    cpu.memory_mut().load(0x8000, &[0xE9, 0x60]); // SBC #$60
    cpu.set_a(0x50);
    set_carry(&mut cpu, true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xF0);
    assert!(!cpu.status().contains(Status::C)); // borrow occurred
    assert!(cpu.status().contains(Status::N));
}

#[test]
fn test_sbc_signed_overflow() {
    let mut cpu = setup();
    cpu.memory_mut().load(0x8000, &[0xE9, 0x01]); // SBC #$01
    cpu.set_a(0x80); // -128 - 1 overflows to +127
    set_carry(&mut cpu, true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.status().contains(Status::V));
}

#[test]
fn test_add_then_subtract_restores_accumulator() {
    // subtract(add(a, b), b) == a with carries held at their identities.
    for (a, b) in [(0x00u8, 0x00u8), (0x12, 0x34), (0x80, 0x7F), (0xFF, 0xFF)] {
        let mut cpu = setup();
        cpu.memory_mut().load(0x8000, &[0x69, b, 0xE9, b]); // ADC #b; SBC #b
        cpu.set_a(a);

        set_carry(&mut cpu, false);
        cpu.step().unwrap();
        set_carry(&mut cpu, true);
        cpu.step().unwrap();

        assert_eq!(cpu.a(), a, "round trip failed for a={a:#04X} b={b:#04X}");
    }
}
