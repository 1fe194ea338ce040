//! # CPU State and Execution Driver
//!
//! [`CPU`] holds the complete state of one emulated processor instance:
//! registers, status flags, cycle/instruction counters, pending interrupt
//! lines, and the memory bus it drives. Nothing is global; two cores with
//! independent buses can run side by side.
//!
//! ## Execution model
//!
//! Each [`step`](CPU::step) performs one pass of the interpreter state
//! machine:
//!
//! 1. service a pending NMI/IRQ at the instruction boundary,
//! 2. FETCH the opcode byte at PC,
//! 3. DECODE it through [`OPCODE_TABLE`],
//! 4. RESOLVE the addressing mode into an operand (advancing PC),
//! 5. EXECUTE the operation handler,
//! 6. account cycles (base cost + branch/page-cross/decimal penalties),
//! 7. invoke the per-instruction hook, if one is registered.
//!
//! [`run`](CPU::run) repeats this until a cycle budget is met; it may
//! overshoot by up to one instruction since instructions never suspend
//! mid-flight.

use core::marker::PhantomData;

use crate::addressing::{Operand, Target};
use crate::instructions;
use crate::opcodes::OPCODE_TABLE;
use crate::status::Status;
use crate::variant::{Nmos6502, Variant};
use crate::{ExecutionError, MemoryBus, StateError};

/// NMI service routine vector.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Power-on / reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ / BRK service routine vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Size in bytes of the buffer produced by [`CPU::save_state`].
pub const STATE_SIZE: usize = 23;

/// Cycles consumed by an IRQ/NMI entry sequence.
const INTERRUPT_CYCLES: u64 = 7;

/// What to do when an opcode with no defined operation is fetched.
///
/// The choice is caller-visible configuration, passed to [`CPU::new`];
/// there is no hidden default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalPolicy {
    /// Stop at the instruction boundary with
    /// [`ExecutionError::IllegalOpcode`], PC still pointing at the opcode.
    Fault,
    /// Execute the opcode as the multi-cycle NOP the NMOS hardware
    /// effectively performs, using the decode table's mode and timing.
    NopEquivalent,
}

/// Per-instruction callback, invoked after cycle accounting with the bus
/// and the cycles the instruction consumed. Used by embedding machines to
/// tick peripherals in lock-step, once per instruction.
pub type InstructionHook<M> = Box<dyn FnMut(&mut M, u64)>;

/// A 6502-family CPU instance, generic over its memory bus `M` and silicon
/// [`Variant`] `V` (NMOS by default).
///
/// # Examples
///
/// ```
/// use sim6502::{FlatMemory, IllegalPolicy, CPU};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0xFFFC, &[0x00, 0x80]); // reset vector -> 0x8000
/// mem.load(0x8000, &[0xA9, 0x2A]); // LDA #$2A
///
/// let mut cpu: CPU<FlatMemory> = CPU::new(mem, IllegalPolicy::Fault);
/// assert_eq!(cpu.pc(), 0x8000);
///
/// let cycles = cpu.step().unwrap();
/// assert_eq!(cycles, 2);
/// assert_eq!(cpu.a(), 0x2A);
/// ```
pub struct CPU<M: MemoryBus, V: Variant = Nmos6502> {
    /// Accumulator.
    pub(crate) a: u8,
    /// X index register.
    pub(crate) x: u8,
    /// Y index register.
    pub(crate) y: u8,
    /// Program counter: address of the next byte to fetch.
    pub(crate) pc: u16,
    /// Stack pointer: offset into the stack page (0x0100 | sp).
    pub(crate) sp: u8,
    /// Status flags.
    pub(crate) status: Status,
    /// Total bus cycles elapsed.
    pub(crate) cycles: u64,
    /// Total instructions retired.
    pub(crate) instructions: u64,
    /// Level-style pending interrupt requests, consumed at instruction
    /// boundaries.
    pending_irq: bool,
    pending_nmi: bool,
    illegal_policy: IllegalPolicy,
    hook: Option<InstructionHook<M>>,
    /// Memory bus.
    pub(crate) memory: M,
    marker: PhantomData<V>,
}

impl<M: MemoryBus, V: Variant> CPU<M, V> {
    /// Creates a CPU wired to `memory` and resets it: PC is loaded from the
    /// reset vector at 0xFFFC/0xFFFD, SP becomes 0xFD, and interrupts start
    /// masked.
    pub fn new(memory: M, illegal_policy: IllegalPolicy) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            status: Status::power_on(),
            cycles: 0,
            instructions: 0,
            pending_irq: false,
            pending_nmi: false,
            illegal_policy,
            hook: None,
            memory,
            marker: PhantomData,
        };
        cpu.reset();
        cpu
    }

    /// Resets the processor: registers cleared, SP = 0xFD, status = I | U,
    /// pending interrupts dropped, PC loaded from the reset vector. The
    /// cycle and instruction counters are not touched; they count the life
    /// of the instance, not of the program.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFD;
        self.status = Status::power_on();
        self.pending_irq = false;
        self.pending_nmi = false;
        self.pc = self.read_word(RESET_VECTOR);
        log::trace!("reset: pc={:#06X}", self.pc);
    }

    /// Executes one instruction (servicing a pending interrupt first, if
    /// any) and returns the cycles consumed, interrupt entry included.
    ///
    /// With [`IllegalPolicy::Fault`], fetching an undefined opcode returns
    /// an error and leaves PC pointing at the offending byte.
    pub fn step(&mut self) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;

        if self.pending_nmi {
            self.pending_nmi = false;
            self.interrupt(NMI_VECTOR);
        } else if self.pending_irq {
            // The IRQ line is level-triggered: a request that arrives while
            // masked is dropped here, and the device re-raises it for as
            // long as its condition persists.
            self.pending_irq = false;
            if !self.status.contains(Status::I) {
                self.interrupt(IRQ_VECTOR);
            }
        }

        let opcode_addr = self.pc;
        let opcode = self.memory.read(opcode_addr);
        let entry = &OPCODE_TABLE[opcode as usize];

        if entry.mnemonic.is_undefined() {
            match self.illegal_policy {
                IllegalPolicy::Fault => {
                    return Err(ExecutionError::IllegalOpcode {
                        opcode,
                        addr: opcode_addr,
                    });
                }
                IllegalPolicy::NopEquivalent => {
                    log::debug!(
                        "undefined opcode {opcode:#04X} at {opcode_addr:#06X}, executing as NOP"
                    );
                }
            }
        }

        self.pc = self.pc.wrapping_add(1);
        let operand = self.resolve(entry.mode);
        let extra = instructions::execute(self, entry.mnemonic, &operand);

        let mut cost = entry.base_cycles as u64 + extra as u64;
        if operand.page_crossed && entry.mnemonic.page_cross_sensitive() {
            cost += 1;
        }
        self.cycles += cost;
        self.instructions += 1;

        if let Some(hook) = self.hook.as_mut() {
            hook(&mut self.memory, cost);
        }

        Ok(self.cycles - start_cycles)
    }

    /// Executes instructions until at least `cycle_budget` cycles have
    /// elapsed, returning the cycles actually consumed (the overshoot is at
    /// most one instruction).
    ///
    /// Stops early with an error under [`IllegalPolicy::Fault`]; PC is then
    /// left at the faulting opcode.
    pub fn run(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let goal = start_cycles + cycle_budget;
        while self.cycles < goal {
            self.step()?;
        }
        Ok(self.cycles - start_cycles)
    }

    // ========== Interrupt lines ==========

    /// Signals a non-maskable interrupt. Serviced unconditionally at the
    /// next instruction boundary.
    pub fn raise_nmi(&mut self) {
        self.pending_nmi = true;
    }

    /// Signals a maskable interrupt request. Serviced at the next
    /// instruction boundary if the I flag is clear at that moment;
    /// otherwise the request is dropped, mirroring a level-triggered line
    /// whose device must keep re-raising it.
    pub fn raise_irq(&mut self) {
        self.pending_irq = true;
    }

    /// Pushes PC and flags, masks interrupts, and vectors through `vector`.
    fn interrupt(&mut self, vector: u16) {
        self.push_word(self.pc);
        self.push(self.status.pushed(false));
        self.status.insert(Status::I);
        if V::CLEARS_DECIMAL_ON_INTERRUPT {
            self.status.remove(Status::D);
        }
        self.pc = self.read_word(vector);
        self.cycles += INTERRUPT_CYCLES;
        log::trace!("interrupt via {vector:#06X}: pc={:#06X}", self.pc);
    }

    // ========== Per-instruction hook ==========

    /// Installs the per-instruction callback. Single slot: registering a
    /// new hook replaces the previous one.
    pub fn register_hook<F>(&mut self, hook: F)
    where
        F: FnMut(&mut M, u64) + 'static,
    {
        self.hook = Some(Box::new(hook));
    }

    /// Removes the per-instruction callback.
    pub fn clear_hook(&mut self) {
        self.hook = None;
    }

    // ========== Save / restore ==========

    /// Serializes the register file and counters into a fixed-size buffer.
    ///
    /// Pending interrupt requests are transient signals and are not saved;
    /// a device whose condition persists will re-raise after restore.
    pub fn save_state(&self) -> [u8; STATE_SIZE] {
        let mut buf = [0u8; STATE_SIZE];
        buf[0] = self.a;
        buf[1] = self.x;
        buf[2] = self.y;
        buf[3] = self.sp;
        buf[4] = self.status.bits();
        buf[5..7].copy_from_slice(&self.pc.to_le_bytes());
        buf[7..15].copy_from_slice(&self.cycles.to_le_bytes());
        buf[15..23].copy_from_slice(&self.instructions.to_le_bytes());
        buf
    }

    /// Restores a register file previously produced by
    /// [`save_state`](CPU::save_state). Rejects buffers of the wrong length
    /// without touching any state.
    pub fn restore_state(&mut self, buf: &[u8]) -> Result<(), StateError> {
        if buf.len() != STATE_SIZE {
            return Err(StateError::UnexpectedLength { found: buf.len() });
        }
        self.a = buf[0];
        self.x = buf[1];
        self.y = buf[2];
        self.sp = buf[3];
        // Normalize like PLP: B never latches, bit 5 always reads as 1.
        self.status = Status::pulled(buf[4]);
        self.pc = u16::from_le_bytes([buf[5], buf[6]]);
        self.cycles = u64::from_le_bytes(buf[7..15].try_into().expect("length checked"));
        self.instructions = u64::from_le_bytes(buf[15..23].try_into().expect("length checked"));
        self.pending_irq = false;
        self.pending_nmi = false;
        Ok(())
    }

    // ========== Stack helpers ==========

    /// Pushes a byte: write at 0x0100|SP, then decrement SP.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(0x0100 | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pulls a byte: increment SP, then read at 0x0100|SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(0x0100 | self.sp as u16)
    }

    /// Pushes a word, high byte first, so it pulls back little-endian.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        hi << 8 | lo
    }

    // ========== Operand access ==========

    /// Reads the value an operand designates.
    pub(crate) fn load_operand(&mut self, operand: &Operand) -> u8 {
        match operand.target {
            Target::Accumulator => self.a,
            Target::Memory(addr) => self.memory.read(addr),
            Target::Implied | Target::Relative(_) => {
                unreachable!("operand has no readable value")
            }
        }
    }

    /// Writes a value back to the operand's location.
    pub(crate) fn store_operand(&mut self, operand: &Operand, value: u8) {
        match operand.target {
            Target::Accumulator => self.a = value,
            Target::Memory(addr) => self.memory.write(addr, value),
            Target::Implied | Target::Relative(_) => {
                unreachable!("operand has no writable location")
            }
        }
    }

    /// Reads a little-endian word through the bus.
    pub(crate) fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        hi << 8 | lo
    }

    // ========== Register and debug accessors ==========

    /// Accumulator value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Stack pointer offset; the full address is `0x0100 | sp`.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Status register.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Total bus cycles elapsed since the instance was created.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Total instructions retired since the instance was created.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status | Status::U;
    }

    /// Shared access to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU, returning its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    /// Side-effect-free read of a bus address, for monitors and tests.
    pub fn peek(&self, addr: u16) -> u8 {
        self.memory.read_debug(addr)
    }
}
