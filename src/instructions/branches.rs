//! # Conditional Branches
//!
//! All eight branches share one handler parameterized by the tested
//! condition. The addressing stage already fetched and sign-extended the
//! displacement; it is applied to PC only when the condition holds.
//!
//! Cycle timing relative to the table's 2-cycle base:
//! +1 when the branch is taken, +1 more when the target lies on a
//! different page than the instruction following the branch.

use crate::addressing::{Operand, Target};
use crate::variant::Variant;
use crate::{MemoryBus, CPU};

pub(crate) fn branch_if<M: MemoryBus, V: Variant>(
    cpu: &mut CPU<M, V>,
    operand: &Operand,
    condition: bool,
) -> u8 {
    let Target::Relative(offset) = operand.target else {
        unreachable!("branch resolved without a relative operand")
    };
    if !condition {
        return 0;
    }

    // PC already points at the next instruction; the page-cross penalty is
    // measured against that address, not the branch opcode's.
    let target = cpu.pc.wrapping_add_signed(offset as i16);
    let crossed_page = (target ^ cpu.pc) & 0xFF00 != 0;
    cpu.pc = target;

    if crossed_page {
        2
    } else {
        1
    }
}
