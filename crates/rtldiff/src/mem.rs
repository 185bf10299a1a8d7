//! Logisim memory image conversion.
//!
//! Logisim exports program memory as a sparse, address-prefixed hex dump.
//! Verilog's `$readmemh` wants a dense listing with one word per line, so
//! the gaps between addressed runs must be filled with zero words.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::Result;

/// Word written for addresses the dump never mentions.
const ZERO_WORD: &str = "00000000";

/// Sparse word-addressed memory image parsed from a Logisim hex dump.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemImage {
    words: FxHashMap<u64, String>,
    max_index: Option<u64>,
}

impl MemImage {
    /// Parse a Logisim hex dump.
    ///
    /// An optional `v3.0 ...` header on the first line is skipped. Each
    /// remaining line is `ADDR: WORD [WORD ...]` with a hex word address;
    /// consecutive words occupy consecutive addresses. Lines without an
    /// address prefix or with an unparseable address are skipped.
    pub fn parse(content: &str) -> Self {
        let mut image = Self::default();

        let mut lines = content.lines();
        let mut first = lines.next();
        if first.is_some_and(|l| l.trim().starts_with("v3.0")) {
            first = lines.next();
        }

        for line in first.into_iter().chain(lines) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((addr_str, data_str)) = line.split_once(':') else {
                continue;
            };
            let Ok(base_addr) = u64::from_str_radix(addr_str.trim(), 16) else {
                continue;
            };

            for (i, word) in data_str.split_whitespace().enumerate() {
                let index = base_addr + i as u64;
                image.words.insert(index, word.to_string());
                image.max_index = Some(image.max_index.map_or(index, |m| m.max(index)));
            }
        }

        image
    }

    /// Number of words present in the dump.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Highest word index observed, if any words were present.
    pub fn max_index(&self) -> Option<u64> {
        self.max_index
    }

    /// Render the dense listing: one word per line for every index from 0
    /// to the maximum observed, gap-filling with `00000000`. Words are
    /// copied through verbatim. An empty image renders as an empty string.
    pub fn to_dense(&self) -> String {
        let Some(max_index) = self.max_index else {
            return String::new();
        };

        let mut out = String::new();
        for index in 0..=max_index {
            out.push_str(self.words.get(&index).map_or(ZERO_WORD, String::as_str));
            out.push('\n');
        }
        out
    }
}

/// Convert a Logisim hex dump file into a dense `$readmemh` listing.
///
/// Returns the parsed image so the caller can report what was converted.
pub fn convert_file(input: &Path, output: &Path) -> Result<MemImage> {
    let content = fs::read_to_string(input)?;
    let image = MemImage::parse(&content);
    fs::write(output, image.to_dense())?;
    Ok(image)
}
