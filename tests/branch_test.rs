//! Branch instructions: condition selection and the taken/page-cross
//! cycle penalties.

use sim6502::{FlatMemory, IllegalPolicy, Status, CPU};

fn setup_at(pc: u16) -> CPU<FlatMemory> {
    let mut mem = FlatMemory::new();
    mem.load(0xFFFC, &pc.to_le_bytes());
    CPU::new(mem, IllegalPolicy::Fault)
}

#[test]
fn test_branch_not_taken_costs_base_cycles() {
    let mut cpu = setup_at(0x8000);
    cpu.memory_mut().load(0x8000, &[0xD0, 0x10]); // BNE +16
    let mut status = cpu.status();
    status.insert(Status::Z); // condition false for BNE
    cpu.set_status(status);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cycles, 2);
}

#[test]
fn test_branch_taken_same_page_costs_one_extra() {
    let mut cpu = setup_at(0x8000);
    cpu.memory_mut().load(0x8000, &[0xD0, 0x10]); // BNE +16, Z clear

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8012);
    assert_eq!(cycles, 3);
}

#[test]
fn test_branch_taken_across_page_costs_two_extra() {
    let mut cpu = setup_at(0x80F0);
    cpu.memory_mut().load(0x80F0, &[0xD0, 0x20]); // BNE +32 -> 0x8112

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8112);
    assert_eq!(cycles, 4);
}

#[test]
fn test_branch_backward_across_page() {
    let mut cpu = setup_at(0x8000);
    cpu.memory_mut().load(0x8000, &[0xD0, 0xFD]); // BNE -3 -> 0x7FFF

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x7FFF);
    assert_eq!(cycles, 4);
}

#[test]
fn test_load_immediate_then_branch_if_zero() {
    // LDA #$00; BEQ +5 starting at 0x0000: after two steps the
    // accumulator is clear, Z is set, and PC = 0x0002 + 2 + 5.
    let mut cpu = setup_at(0x0000);
    cpu.memory_mut().load(0x0000, &[0xA9, 0x00, 0xF0, 0x05]);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.status().contains(Status::Z));

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0009);
}

#[test]
fn test_each_branch_tests_its_own_flag() {
    // (opcode, flag, branch taken when flag set)
    let cases: &[(u8, Status, bool)] = &[
        (0x90, Status::C, false), // BCC
        (0xB0, Status::C, true),  // BCS
        (0xD0, Status::Z, false), // BNE
        (0xF0, Status::Z, true),  // BEQ
        (0x10, Status::N, false), // BPL
        (0x30, Status::N, true),  // BMI
        (0x50, Status::V, false), // BVC
        (0x70, Status::V, true),  // BVS
    ];

    for &(opcode, flag, taken_when_set) in cases {
        for flag_set in [false, true] {
            let mut cpu = setup_at(0x8000);
            cpu.memory_mut().load(0x8000, &[opcode, 0x04]);
            let mut status = cpu.status();
            status.set(flag, flag_set);
            cpu.set_status(status);

            cpu.step().unwrap();

            let expect_taken = flag_set == taken_when_set;
            let expected_pc = if expect_taken { 0x8006 } else { 0x8002 };
            assert_eq!(
                cpu.pc(),
                expected_pc,
                "opcode {opcode:#04X} with flag set={flag_set}"
            );
        }
    }
}
