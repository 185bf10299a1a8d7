use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::Result;

use super::{CycleState, TraceTable};

/// Parse a trace file into a [`TraceTable`].
///
/// The file is read fully before parsing begins; the handle is released
/// immediately after.
pub fn parse_trace_file(path: &Path) -> Result<TraceTable> {
    let content = fs::read_to_string(path)?;
    Ok(parse_trace(&content))
}

/// Parse raw trace text into a [`TraceTable`].
///
/// Handles both layouts the testbenches emit:
/// - `=== Cycle 7 === PC=0x00001004` with register assignments on the
///   following lines
/// - `=== Cycle 0x7 ===` with the PC and registers on later lines
///
/// A single pass over the text: each cycle marker opens a block that runs
/// to the next marker (or end of input); the first `PC=0x...` and every
/// `xN=0x...` token inside the block belong to that cycle, however they
/// are split across lines. Both layouts fall out of the same scan, so a
/// file mixing them cannot produce conflicting records for one region.
///
/// Tokens that don't match the expected lexical form are skipped, not
/// reported. No cycle markers at all yields an empty table, not an error.
pub fn parse_trace(content: &str) -> TraceTable {
    let marker = CYCLE_MARKER
        .get_or_init(|| Regex::new(r"=== Cycle (0[xX][0-9a-fA-F]+|\d+) ===").unwrap());
    let pc_pattern = PC_PATTERN.get_or_init(|| Regex::new(r"PC=(0x[0-9a-fA-F]+)").unwrap());
    let reg_pattern = REG_PATTERN.get_or_init(|| Regex::new(r"\bx(\d+)=(0x[0-9a-fA-F]+)").unwrap());

    // Marker positions partition the text into one block per cycle.
    let markers: Vec<(usize, usize, u64)> = marker
        .captures_iter(content)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            let cycle = parse_cycle_label(caps.get(1)?.as_str())?;
            Some((m.start(), m.end(), cycle))
        })
        .collect();

    let mut table = TraceTable::default();

    for (i, &(_, block_start, cycle)) in markers.iter().enumerate() {
        let block_end = markers.get(i + 1).map_or(content.len(), |next| next.0);
        let block = &content[block_start..block_end];

        // A marker without a PC anywhere in its block is malformed noise.
        let Some(pc_caps) = pc_pattern.captures(block) else {
            continue;
        };
        let pc = pc_caps[1].to_string();

        let mut regs = FxHashMap::default();
        for caps in reg_pattern.captures_iter(block) {
            // Indices that don't fit u8 are malformed; skip silently.
            let Ok(index) = caps[1].parse::<u8>() else {
                continue;
            };
            regs.insert(index, caps[2].to_string());
        }

        table.insert(cycle, CycleState { pc, regs });
    }

    table
}

/// Decode a cycle label: `0x`-prefixed labels are base 16, bare digits are
/// base 10. The prefix decides the base, never the surrounding layout.
fn parse_cycle_label(label: &str) -> Option<u64> {
    match label.strip_prefix("0x").or_else(|| label.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => label.parse().ok(),
    }
}

static CYCLE_MARKER: OnceLock<Regex> = OnceLock::new();
static PC_PATTERN: OnceLock<Regex> = OnceLock::new();
static REG_PATTERN: OnceLock<Regex> = OnceLock::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_combined_layout() {
        let text = "=== Cycle 7 === PC=0x00001004\nx1=0x10 x2=0x20\nx3=0x30\n";
        let table = parse_trace(text);

        assert_eq!(table.len(), 1);
        let state = &table[&7];
        assert_eq!(state.pc, "0x00001004");
        assert_eq!(state.regs[&1], "0x10");
        assert_eq!(state.regs[&2], "0x20");
        assert_eq!(state.regs[&3], "0x30");
    }

    #[test]
    fn test_parse_split_layout() {
        let text = "=== Cycle 0x7 ===\n\nPC=0x00001004\n\nx1=0x10\nx2=0x20\n";
        let table = parse_trace(text);

        assert_eq!(table.len(), 1);
        let state = &table[&7];
        assert_eq!(state.pc, "0x00001004");
        assert_eq!(state.regs[&1], "0x10");
        assert_eq!(state.regs[&2], "0x20");
    }

    #[test]
    fn test_layouts_parse_identically() {
        let combined = "=== Cycle 3 === PC=0x100\nx1=0xa x5=0xff\n";
        let split = "=== Cycle 3 ===\nPC=0x100\nx1=0xa\nx5=0xff\n";

        assert_eq!(parse_trace(combined), parse_trace(split));
    }

    #[test]
    fn test_cycle_label_base_round_trip() {
        // Decimal 12 and hex 0xc name the same cycle.
        let dec = parse_trace("=== Cycle 12 === PC=0x100\nx1=0x1\n");
        let hex = parse_trace("=== Cycle 0xc === PC=0x100\nx1=0x1\n");

        assert!(dec.contains_key(&12));
        assert_eq!(dec, hex);
    }

    #[test]
    fn test_multiple_cycles() {
        let text = "=== Cycle 0 === PC=0x0\nx1=0x1\n\
                    === Cycle 1 === PC=0x4\nx1=0x2\n\
                    === Cycle 2 === PC=0x8\nx1=0x3\n";
        let table = parse_trace(text);

        assert_eq!(table.len(), 3);
        assert_eq!(table[&0].pc, "0x0");
        assert_eq!(table[&1].pc, "0x4");
        assert_eq!(table[&2].regs[&1], "0x3");
    }

    #[test]
    fn test_registers_stop_at_next_marker() {
        let text = "=== Cycle 0 === PC=0x0\nx1=0x1\n=== Cycle 1 === PC=0x4\nx1=0x2\n";
        let table = parse_trace(text);

        assert_eq!(table[&0].regs[&1], "0x1");
        assert_eq!(table[&1].regs[&1], "0x2");
    }

    #[test]
    fn test_malformed_register_tokens_skipped() {
        let text = "=== Cycle 0 === PC=0x0\nx1=0x1 xq=0x2 x2=12 x300=0x3\n";
        let table = parse_trace(text);

        let state = &table[&0];
        assert_eq!(state.regs.len(), 1);
        assert_eq!(state.regs[&1], "0x1");
    }

    #[test]
    fn test_marker_without_pc_skipped() {
        let text = "=== Cycle 0 ===\nx1=0x1\n=== Cycle 1 === PC=0x4\nx1=0x2\n";
        let table = parse_trace(text);

        assert_eq!(table.len(), 1);
        assert!(table.contains_key(&1));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_trace("").is_empty());
        assert!(parse_trace("no cycle records here\n").is_empty());
    }

    #[test]
    fn test_reparse_is_idempotent() {
        let text = "=== Cycle 0 === PC=0x0\nx1=0x1\n=== Cycle 1 === PC=0x4\nx2=0x2\n";

        assert_eq!(parse_trace(text), parse_trace(text));
    }

    #[test]
    fn test_no_registers_is_allowed() {
        let text = "=== Cycle 5 === PC=0x14\n";
        let table = parse_trace(text);

        assert_eq!(table[&5].pc, "0x14");
        assert!(table[&5].regs.is_empty());
    }
}
