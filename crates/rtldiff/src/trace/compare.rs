use super::{CycleState, TraceTable, REG_COUNT, ZERO_WORD};

/// PC values that differed at one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcMismatch {
    pub rtl: String,
    pub golden: String,
}

/// Register values that differed at one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegMismatch {
    /// Register index (0..16).
    pub index: u8,
    pub rtl: String,
    pub golden: String,
}

/// Verdict for a single cycle of the merged comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleVerdict {
    /// PC and all 16 registers agree.
    Match { cycle: u64, pc: String },
    /// Cycle present in the golden trace but absent from the RTL trace.
    MissingInRtl { cycle: u64 },
    /// Cycle present in the RTL trace but absent from the golden trace.
    MissingInGolden { cycle: u64 },
    /// Same cycle, diverging state.
    Mismatch {
        cycle: u64,
        /// Present only when the PCs differ.
        pc: Option<PcMismatch>,
        /// One entry per register index that differs.
        regs: Vec<RegMismatch>,
    },
}

/// Result of comparing two trace tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceComparison {
    /// Per-cycle verdicts in ascending cycle order.
    pub verdicts: Vec<CycleVerdict>,
    /// Cycles where both sides agreed.
    pub matches: usize,
    /// Cycles that diverged or were missing from one side.
    pub mismatches: usize,
}

impl TraceComparison {
    /// Overall verdict: true iff no mismatches and no missing cycles.
    pub fn is_match(&self) -> bool {
        self.mismatches == 0
    }
}

/// Hex strings compare lexically, tolerating letter case only. `0xA` and
/// `0x0A` are NOT equal; the testbenches print values consistently enough
/// that numeric normalization would only hide formatting drift.
fn hex_eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

fn compare_cycle(cycle: u64, rtl: &CycleState, golden: &CycleState) -> CycleVerdict {
    let pc = if hex_eq(&rtl.pc, &golden.pc) {
        None
    } else {
        Some(PcMismatch {
            rtl: rtl.pc.clone(),
            golden: golden.pc.clone(),
        })
    };

    let mut regs = Vec::new();
    for index in 0..REG_COUNT {
        let rtl_val = rtl.regs.get(&index).map_or(ZERO_WORD, String::as_str);
        let golden_val = golden.regs.get(&index).map_or(ZERO_WORD, String::as_str);

        if !hex_eq(rtl_val, golden_val) {
            regs.push(RegMismatch {
                index,
                rtl: rtl_val.to_string(),
                golden: golden_val.to_string(),
            });
        }
    }

    if pc.is_none() && regs.is_empty() {
        CycleVerdict::Match {
            cycle,
            pc: rtl.pc.clone(),
        }
    } else {
        CycleVerdict::Mismatch { cycle, pc, regs }
    }
}

/// Compare an RTL trace against the golden-model trace.
///
/// Walks the union of cycle indices in ascending order - the cycle index is
/// the sole sort key, so report order is deterministic regardless of each
/// table's internal order. A cycle missing from either side counts as a
/// mismatch; register indices absent from a side read as `0x0`.
pub fn compare_tables(rtl: &TraceTable, golden: &TraceTable) -> TraceComparison {
    let mut all_cycles: Vec<u64> = rtl.keys().chain(golden.keys()).copied().collect();
    all_cycles.sort_unstable();
    all_cycles.dedup();

    let mut verdicts = Vec::with_capacity(all_cycles.len());
    let mut matches = 0;
    let mut mismatches = 0;

    for cycle in all_cycles {
        let verdict = match (rtl.get(&cycle), golden.get(&cycle)) {
            (None, _) => CycleVerdict::MissingInRtl { cycle },
            (_, None) => CycleVerdict::MissingInGolden { cycle },
            (Some(r), Some(g)) => compare_cycle(cycle, r, g),
        };

        if matches!(verdict, CycleVerdict::Match { .. }) {
            matches += 1;
        } else {
            mismatches += 1;
        }
        verdicts.push(verdict);
    }

    TraceComparison {
        verdicts,
        matches,
        mismatches,
    }
}
