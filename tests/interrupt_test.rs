//! Interrupt glue: NMI, IRQ masking, BRK/RTI, and the pushed status
//! byte's B-bit distinction between software and hardware entry.

use sim6502::{FlatMemory, IllegalPolicy, MemoryBus, Status, CPU};

/// Reset at 0x8000, NMI handler at 0x9000, IRQ/BRK handler at 0xA000,
/// NOPs at all three.
fn setup() -> CPU<FlatMemory> {
    let mut mem = FlatMemory::new();
    mem.load(0xFFFA, &[0x00, 0x90, 0x00, 0x80, 0x00, 0xA0]);
    mem.write(0x8000, 0xEA);
    mem.write(0x9000, 0xEA);
    mem.write(0xA000, 0xEA);
    CPU::new(mem, IllegalPolicy::Fault)
}

fn unmask_irq(cpu: &mut CPU<FlatMemory>) {
    let mut status = cpu.status();
    status.remove(Status::I);
    cpu.set_status(status);
}

#[test]
fn test_nmi_vectors_regardless_of_mask() {
    let mut cpu = setup();
    assert!(cpu.status().contains(Status::I)); // masked after reset

    cpu.raise_nmi();
    let cycles = cpu.step().unwrap();

    // 7 cycles of interrupt entry plus the handler's first NOP.
    assert_eq!(cycles, 9);
    assert_eq!(cpu.pc(), 0x9001);
    assert_eq!(cpu.sp(), 0xFA);

    // Interrupted PC pushed high byte first.
    assert_eq!(cpu.peek(0x01FD), 0x80);
    assert_eq!(cpu.peek(0x01FC), 0x00);
    // Hardware entry pushes B clear, bit 5 high.
    let pushed = cpu.peek(0x01FB);
    assert_eq!(pushed & 0b0011_0000, 0b0010_0000);
}

#[test]
fn test_irq_serviced_when_unmasked() {
    let mut cpu = setup();
    unmask_irq(&mut cpu);

    cpu.raise_irq();
    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 9);
    assert_eq!(cpu.pc(), 0xA001);
    assert!(cpu.status().contains(Status::I)); // re-masked during entry
}

#[test]
fn test_irq_dropped_while_masked() {
    let mut cpu = setup();
    // I is set after reset.

    cpu.raise_irq();
    let cycles = cpu.step().unwrap();

    // The NOP at 0x8000 runs as if no interrupt existed.
    assert_eq!(cycles, 2);
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.sp(), 0xFD);

    // The masked request was dropped, not latched: unmasking alone does
    // not deliver it.
    unmask_irq(&mut cpu);
    let cycles = cpu.step().unwrap();
    assert_eq!(cycles, 2);
    assert_eq!(cpu.pc(), 0x8002);

    // A level-triggered device re-raises; now it is serviced.
    cpu.raise_irq();
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0xA001);
}

#[test]
fn test_brk_pushes_b_set_and_skips_padding_byte() {
    let mut cpu = setup();
    cpu.memory_mut().write(0x8000, 0x00); // BRK

    let cycles = cpu.step().unwrap();

    assert_eq!(cycles, 7);
    assert_eq!(cpu.pc(), 0xA000);
    assert!(cpu.status().contains(Status::I));

    // Return address is the BRK opcode plus two.
    assert_eq!(cpu.peek(0x01FD), 0x80);
    assert_eq!(cpu.peek(0x01FC), 0x02);
    // Software entry pushes B set.
    let pushed = cpu.peek(0x01FB);
    assert_eq!(pushed & 0b0011_0000, 0b0011_0000);
}

#[test]
fn test_rti_restores_pc_and_flags() {
    let mut cpu = setup();
    cpu.memory_mut().write(0x8000, 0x00); // BRK
    cpu.memory_mut().write(0xA000, 0x40); // RTI

    // Carry set before the break; I cleared so we can see it restored.
    cpu.set_status(Status::power_on() - Status::I | Status::C);

    cpu.step().unwrap(); // BRK
    let cycles = cpu.step().unwrap(); // RTI

    assert_eq!(cycles, 6);
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.status().contains(Status::C));
    assert!(!cpu.status().contains(Status::I)); // pre-BRK mask restored
    assert!(!cpu.status().contains(Status::B));
}
