//! Trace comparison for hardware verification.
//!
//! Compares cycle-by-cycle state traces between an RTL testbench and the
//! golden-model ISS to catch bugs at the cycle level rather than just
//! end-state.

mod compare;
mod parse;
mod report;

pub use compare::{compare_tables, CycleVerdict, PcMismatch, RegMismatch, TraceComparison};
pub use parse::{parse_trace, parse_trace_file};

use rustc_hash::FxHashMap;

/// Number of general-purpose registers in the register file.
pub const REG_COUNT: u8 = 16;

/// Value substituted for a register the trace never mentions.
pub const ZERO_WORD: &str = "0x0";

/// Machine state observed at one simulated clock cycle.
///
/// Hex values are kept as written; equality is decided lexically
/// (case-insensitive) at comparison time, never numerically.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CycleState {
    /// Program counter, `0x`-prefixed hex string.
    pub pc: String,
    /// Register index -> hex value string. Absent indices read as `0x0`
    /// when compared.
    pub regs: FxHashMap<u8, String>,
}

/// Cycle index -> observed state, built by parsing one trace file.
pub type TraceTable = FxHashMap<u64, CycleState>;
