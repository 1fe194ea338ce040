//! # Memory Bus Abstraction
//!
//! The CPU never owns memory. Every operand fetch, stack access, and vector
//! read goes through the [`MemoryBus`] trait supplied by the embedding
//! machine, which is free to route addresses to RAM, ROM, or memory-mapped
//! peripheral registers.
//!
//! ## Design
//!
//! - `read(&mut self)`: a real bus read. Peripherals may mutate themselves
//!   in response (a UART clearing a status bit, a FIFO advancing), so the
//!   receiver is mutable. The core issues these in the exact order and
//!   count the hardware would.
//! - `read_debug(&self)`: a side-effect-free read for monitors, tracers,
//!   and disassemblers. Never called on the execution path.
//! - `write(&mut self)`: a real bus write, side effects included.
//! - No error channel: the 6502 has no bus-error mechanism. Unmapped reads
//!   may return garbage and unmapped writes may be dropped, at the
//!   implementation's discretion.

/// Byte-addressed bus connecting the CPU core to the embedding machine.
///
/// # Examples
///
/// A 32KB RAM / 32KB ROM split with write-protected ROM:
///
/// ```
/// use sim6502::MemoryBus;
///
/// struct RomRam {
///     ram: Vec<u8>,
///     rom: Vec<u8>,
/// }
///
/// impl MemoryBus for RomRam {
///     fn read(&mut self, addr: u16) -> u8 {
///         self.read_debug(addr)
///     }
///
///     fn read_debug(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[addr as usize - 0x8000]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // ROM writes are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the bus. May have side effects in memory-mapped
    /// peripherals; the core calls this exactly once per hardware read.
    fn read(&mut self, addr: u16) -> u8;

    /// Reads a byte without side effects. Used by debug accessors and
    /// external tracing, never by instruction execution.
    fn read_debug(&self, addr: u16) -> u8;

    /// Writes a byte to the bus. May have side effects.
    fn write(&mut self, addr: u16, value: u8);
}

/// Simple 64KB flat RAM covering the whole address space.
///
/// Useful for tests and for programs that need no ROM/peripheral mapping.
/// All 65536 bytes start at 0x00 and are writable.
///
/// # Examples
///
/// ```
/// use sim6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 0x1_0000]>,
}

impl FlatMemory {
    /// Creates a zero-filled 64KB memory.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x1_0000]),
        }
    }

    /// Copies `bytes` into memory starting at `addr`, wrapping at the top
    /// of the address space.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (offset, &byte) in bytes.iter().enumerate() {
            let dest = addr.wrapping_add(offset as u16);
            self.data[dest as usize] = byte;
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn read_debug(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
