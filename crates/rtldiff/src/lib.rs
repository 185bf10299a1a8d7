//! rtldiff - RTL vs Golden Model trace comparison
//!
//! Parses cycle-by-cycle execution traces from an RTL testbench and a
//! golden-model instruction-set simulator, then compares them to localize
//! a hardware bug to a specific cycle and register.
//!
//! # Example
//!
//! ```ignore
//! use rtldiff::trace;
//!
//! let rtl = trace::parse_trace_file("rtl_output.txt".as_ref())?;
//! let golden = trace::parse_trace_file("golden_output.txt".as_ref())?;
//! let report = trace::compare_tables(&rtl, &golden);
//! print!("{report}");
//! assert!(report.is_match());
//! ```

pub mod error;
pub mod mem;
pub mod trace;

pub use error::{Error, Result};
