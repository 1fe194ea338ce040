//! The run loop, the instruction counter, and the per-instruction hook.

use std::cell::Cell;
use std::rc::Rc;

use sim6502::{FlatMemory, IllegalPolicy, MemoryBus, CPU};

fn setup() -> CPU<FlatMemory> {
    let mut mem = FlatMemory::new();
    mem.load(0xFFFC, &[0x00, 0x80]);
    CPU::new(mem, IllegalPolicy::Fault)
}

#[test]
fn test_run_overshoots_by_at_most_one_instruction() {
    let mut cpu = setup();
    // NOPs everywhere past the reset vector (2 cycles each).
    for addr in 0x8000u16..0x8010 {
        cpu.memory_mut().write(addr, 0xEA);
    }

    // A 3-cycle budget cannot be met exactly; the loop finishes the
    // second NOP.
    let consumed = cpu.run(3).unwrap();

    assert_eq!(consumed, 4);
    assert_eq!(cpu.cycles(), 4);
    assert_eq!(cpu.instructions(), 2);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_run_with_zero_budget_executes_nothing() {
    let mut cpu = setup();
    cpu.memory_mut().write(0x8000, 0xEA);

    let consumed = cpu.run(0).unwrap();

    assert_eq!(consumed, 0);
    assert_eq!(cpu.instructions(), 0);
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_hook_sees_every_instruction_and_its_cost() {
    let mut cpu = setup();
    cpu.memory_mut().load(
        0x8000,
        &[
            0xA9, 0x01, // LDA #$01 (2)
            0x48, // PHA (3)
            0xEA, // NOP (2)
        ],
    );

    let count = Rc::new(Cell::new(0u64));
    let total = Rc::new(Cell::new(0u64));
    let (count_in_hook, total_in_hook) = (Rc::clone(&count), Rc::clone(&total));
    cpu.register_hook(move |_mem, cycles| {
        count_in_hook.set(count_in_hook.get() + 1);
        total_in_hook.set(total_in_hook.get() + cycles);
    });

    for _ in 0..3 {
        cpu.step().unwrap();
    }

    assert_eq!(count.get(), 3);
    assert_eq!(total.get(), cpu.cycles());
}

#[test]
fn test_hook_gets_mutable_bus_access() {
    let mut cpu = setup();
    cpu.memory_mut().load(0x8000, &[0xEA, 0xEA]);

    // A peripheral model that ticks a counter register on the bus.
    cpu.register_hook(|mem, _cycles| {
        let ticks = mem.read_debug(0x0200);
        mem.write(0x0200, ticks + 1);
    });

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.peek(0x0200), 2);
}

#[test]
fn test_registering_a_new_hook_replaces_the_old_one() {
    let mut cpu = setup();
    cpu.memory_mut().load(0x8000, &[0xEA, 0xEA]);

    let first = Rc::new(Cell::new(0u64));
    let second = Rc::new(Cell::new(0u64));

    let counter = Rc::clone(&first);
    cpu.register_hook(move |_mem, _cycles| counter.set(counter.get() + 1));
    cpu.step().unwrap();

    let counter = Rc::clone(&second);
    cpu.register_hook(move |_mem, _cycles| counter.set(counter.get() + 1));
    cpu.step().unwrap();

    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 1);
}

#[test]
fn test_clear_hook_stops_callbacks() {
    let mut cpu = setup();
    cpu.memory_mut().load(0x8000, &[0xEA, 0xEA]);

    let count = Rc::new(Cell::new(0u64));
    let counter = Rc::clone(&count);
    cpu.register_hook(move |_mem, _cycles| counter.set(counter.get() + 1));

    cpu.step().unwrap();
    cpu.clear_hook();
    cpu.step().unwrap();

    assert_eq!(count.get(), 1);
}

#[test]
fn test_instruction_counter_survives_reset() {
    let mut cpu = setup();
    cpu.memory_mut().load(0x8000, &[0xEA, 0xEA]);

    cpu.step().unwrap();
    cpu.step().unwrap();
    cpu.reset();

    // Counters track the life of the instance, not of the program.
    assert_eq!(cpu.instructions(), 2);
    assert_eq!(cpu.cycles(), 4);
    assert_eq!(cpu.pc(), 0x8000);
}
