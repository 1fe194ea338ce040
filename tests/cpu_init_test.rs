//! Power-on and reset behavior.

use sim6502::{FlatMemory, IllegalPolicy, MemoryBus, Status, CPU};

fn setup() -> CPU<FlatMemory> {
    let mut mem = FlatMemory::new();
    mem.load(0xFFFC, &[0x00, 0x80]);
    CPU::new(mem, IllegalPolicy::Fault)
}

#[test]
fn test_power_on_reset_state() {
    let cpu = setup();

    assert_eq!(cpu.pc(), 0x8000); // loaded from the reset vector
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.instructions(), 0);

    // Interrupts start masked; bit 5 reads as 1.
    assert!(cpu.status().contains(Status::I));
    assert!(cpu.status().contains(Status::U));
    assert!(!cpu.status().contains(Status::N | Status::V | Status::B));
    assert!(!cpu.status().contains(Status::D | Status::Z | Status::C));
}

#[test]
fn test_reset_rereads_vector_and_clears_registers() {
    let mut cpu = setup();

    cpu.set_a(0x42);
    cpu.set_x(0x11);
    cpu.set_sp(0x10);
    cpu.set_pc(0x1234);
    cpu.memory_mut().load(0xFFFC, &[0x00, 0x90]);

    cpu.reset();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.status(), Status::power_on());
}

#[test]
fn test_reset_drops_pending_interrupts() {
    let mut cpu = setup();
    cpu.memory_mut().write(0x8000, 0xEA); // NOP

    cpu.raise_nmi();
    cpu.raise_irq();
    cpu.reset();

    // Nothing vectors on the next step; the NOP runs normally.
    let cycles = cpu.step().unwrap();
    assert_eq!(cycles, 2);
    assert_eq!(cpu.pc(), 0x8001);
}
