use std::fmt;

use super::{CycleVerdict, TraceComparison};

const RULE: &str =
    "================================================================================";

impl fmt::Display for CycleVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleVerdict::Match { cycle, pc } => {
                write!(f, "✓ Cycle {cycle}: MATCH (PC={pc})")
            }
            CycleVerdict::MissingInRtl { cycle } => {
                write!(f, "✗ Cycle {cycle}: missing in RTL output")
            }
            CycleVerdict::MissingInGolden { cycle } => {
                write!(f, "✗ Cycle {cycle}: missing in Golden Model output")
            }
            CycleVerdict::Mismatch { cycle, pc, regs } => {
                write!(f, "✗ Cycle {cycle}: MISMATCH")?;
                if let Some(pc) = pc {
                    write!(f, "\n   PC: RTL={} vs Golden={}", pc.rtl, pc.golden)?;
                }
                for reg in regs {
                    write!(
                        f,
                        "\n   x{}: RTL={} vs Golden={}",
                        reg.index, reg.rtl, reg.golden
                    )?;
                }
                Ok(())
            }
        }
    }
}

/// Full printable report: banner, one verdict per cycle, summary.
impl fmt::Display for TraceComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "RTL vs Golden Model Comparison")?;
        writeln!(f, "{RULE}")?;
        for verdict in &self.verdicts {
            writeln!(f, "{verdict}")?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Summary: {} matches, {} mismatches",
            self.matches, self.mismatches
        )?;
        writeln!(f, "{RULE}")
    }
}

#[cfg(test)]
mod tests {
    use super::super::{compare_tables, parse_trace};

    #[test]
    fn test_match_line_format() {
        let t = parse_trace("=== Cycle 0 === PC=0x0\nx1=0x1\n");
        let report = compare_tables(&t, &t).to_string();

        assert!(report.contains("✓ Cycle 0: MATCH (PC=0x0)"));
        assert!(report.contains("Summary: 1 matches, 0 mismatches"));
    }

    #[test]
    fn test_register_mismatch_detail_format() {
        let rtl = parse_trace("=== Cycle 3 === PC=0x100\nx2=0x5\n");
        let golden = parse_trace("=== Cycle 3 === PC=0x100\nx2=0x6\n");
        let report = compare_tables(&rtl, &golden).to_string();

        assert!(report.contains("✗ Cycle 3: MISMATCH"));
        assert!(report.contains("   x2: RTL=0x5 vs Golden=0x6"));
        assert!(report.contains("Summary: 0 matches, 1 mismatches"));
    }

    #[test]
    fn test_missing_cycle_lines() {
        let rtl = parse_trace("=== Cycle 0 === PC=0x0\n");
        let golden = parse_trace("=== Cycle 0 === PC=0x0\n=== Cycle 5 === PC=0x14\n");
        let report = compare_tables(&rtl, &golden).to_string();

        assert!(report.contains("✗ Cycle 5: missing in RTL output"));

        let report = compare_tables(&golden, &rtl).to_string();
        assert!(report.contains("✗ Cycle 5: missing in Golden Model output"));
    }

    #[test]
    fn test_pc_mismatch_detail_format() {
        let rtl = parse_trace("=== Cycle 1 === PC=0x8\n");
        let golden = parse_trace("=== Cycle 1 === PC=0xc\n");
        let report = compare_tables(&rtl, &golden).to_string();

        assert!(report.contains("   PC: RTL=0x8 vs Golden=0xc"));
    }

    #[test]
    fn test_report_has_banner_and_summary() {
        let t = parse_trace("");
        let report = compare_tables(&t, &t).to_string();

        assert!(report.starts_with("====="));
        assert!(report.contains("RTL vs Golden Model Comparison"));
        assert!(report.contains("Summary: 0 matches, 0 mismatches"));
    }
}
