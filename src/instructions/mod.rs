//! # Instruction Implementations
//!
//! Operation handlers for every documented 6502 mnemonic, grouped by
//! category. Each handler receives the CPU and the operand resolved by the
//! addressing stage, performs the operation's register/memory/flag effects,
//! and returns any extra cycles it incurred beyond the decode table's base
//! cost (taken branches, CMOS decimal arithmetic). Page-cross penalties are
//! charged by the driver, not here.
//!
//! ## Categories
//!
//! - `alu`: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - `load_store`: LDA, LDX, LDY, STA, STX, STY
//! - `inc_dec`: INC, DEC, INX, INY, DEX, DEY
//! - `shifts`: ASL, LSR, ROL, ROR
//! - `branches`: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - `stack`: PHA, PHP, PLA, PLP
//! - `transfer`: TAX, TAY, TXA, TYA, TSX, TXS
//! - `flags`: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - `control`: JMP, JSR, RTS, RTI, BRK, NOP

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::addressing::Operand;
use crate::opcodes::Mnemonic;
use crate::status::Status;
use crate::variant::Variant;
use crate::{MemoryBus, CPU};

/// The EXECUTE stage: dispatches a decoded mnemonic to its handler.
///
/// Returns the extra cycles the operation incurred beyond its base cost.
pub(crate) fn execute<M: MemoryBus, V: Variant>(
    cpu: &mut CPU<M, V>,
    mnemonic: Mnemonic,
    operand: &Operand,
) -> u8 {
    match mnemonic {
        Mnemonic::Adc => alu::adc(cpu, operand),
        Mnemonic::Sbc => alu::sbc(cpu, operand),
        Mnemonic::And => alu::and(cpu, operand),
        Mnemonic::Ora => alu::ora(cpu, operand),
        Mnemonic::Eor => alu::eor(cpu, operand),
        Mnemonic::Cmp => alu::compare_a(cpu, operand),
        Mnemonic::Cpx => alu::compare_x(cpu, operand),
        Mnemonic::Cpy => alu::compare_y(cpu, operand),
        Mnemonic::Bit => alu::bit(cpu, operand),

        Mnemonic::Lda => load_store::lda(cpu, operand),
        Mnemonic::Ldx => load_store::ldx(cpu, operand),
        Mnemonic::Ldy => load_store::ldy(cpu, operand),
        Mnemonic::Sta => load_store::sta(cpu, operand),
        Mnemonic::Stx => load_store::stx(cpu, operand),
        Mnemonic::Sty => load_store::sty(cpu, operand),

        Mnemonic::Inc => inc_dec::inc(cpu, operand),
        Mnemonic::Dec => inc_dec::dec(cpu, operand),
        Mnemonic::Inx => inc_dec::inx(cpu),
        Mnemonic::Iny => inc_dec::iny(cpu),
        Mnemonic::Dex => inc_dec::dex(cpu),
        Mnemonic::Dey => inc_dec::dey(cpu),

        Mnemonic::Asl => shifts::asl(cpu, operand),
        Mnemonic::Lsr => shifts::lsr(cpu, operand),
        Mnemonic::Rol => shifts::rol(cpu, operand),
        Mnemonic::Ror => shifts::ror(cpu, operand),

        Mnemonic::Bcc => branches::branch_if(cpu, operand, !cpu.status.contains(Status::C)),
        Mnemonic::Bcs => branches::branch_if(cpu, operand, cpu.status.contains(Status::C)),
        Mnemonic::Bne => branches::branch_if(cpu, operand, !cpu.status.contains(Status::Z)),
        Mnemonic::Beq => branches::branch_if(cpu, operand, cpu.status.contains(Status::Z)),
        Mnemonic::Bpl => branches::branch_if(cpu, operand, !cpu.status.contains(Status::N)),
        Mnemonic::Bmi => branches::branch_if(cpu, operand, cpu.status.contains(Status::N)),
        Mnemonic::Bvc => branches::branch_if(cpu, operand, !cpu.status.contains(Status::V)),
        Mnemonic::Bvs => branches::branch_if(cpu, operand, cpu.status.contains(Status::V)),

        Mnemonic::Pha => stack::pha(cpu),
        Mnemonic::Php => stack::php(cpu),
        Mnemonic::Pla => stack::pla(cpu),
        Mnemonic::Plp => stack::plp(cpu),

        Mnemonic::Tax => transfer::tax(cpu),
        Mnemonic::Tay => transfer::tay(cpu),
        Mnemonic::Txa => transfer::txa(cpu),
        Mnemonic::Tya => transfer::tya(cpu),
        Mnemonic::Tsx => transfer::tsx(cpu),
        Mnemonic::Txs => transfer::txs(cpu),

        Mnemonic::Clc => flags::set_flag(cpu, Status::C, false),
        Mnemonic::Sec => flags::set_flag(cpu, Status::C, true),
        Mnemonic::Cli => flags::set_flag(cpu, Status::I, false),
        Mnemonic::Sei => flags::set_flag(cpu, Status::I, true),
        Mnemonic::Cld => flags::set_flag(cpu, Status::D, false),
        Mnemonic::Sed => flags::set_flag(cpu, Status::D, true),
        Mnemonic::Clv => flags::set_flag(cpu, Status::V, false),

        Mnemonic::Jmp => control::jmp(cpu, operand),
        Mnemonic::Jsr => control::jsr(cpu, operand),
        Mnemonic::Rts => control::rts(cpu),
        Mnemonic::Rti => control::rti(cpu),
        Mnemonic::Brk => control::brk(cpu),
        Mnemonic::Nop | Mnemonic::NopUndocumented => control::nop(cpu, operand),

        // Reached only under IllegalPolicy::NopEquivalent; the table gives
        // these entries implied mode and a two-cycle cost.
        Mnemonic::Illegal => 0,
    }
}
