//! # Flag Set/Clear
//!
//! CLC/SEC, CLI/SEI, CLD/SED, and CLV, all funneled through one handler.
//! There is no SEV: the overflow flag can only be set by arithmetic (or
//! the SO pin, which this core does not model).

use crate::status::Status;
use crate::variant::Variant;
use crate::{MemoryBus, CPU};

pub(crate) fn set_flag<M: MemoryBus, V: Variant>(
    cpu: &mut CPU<M, V>,
    flag: Status,
    value: bool,
) -> u8 {
    cpu.status.set(flag, value);
    0
}
