//! Label rename engine — rewrites placeholder labels in the function listing.
//!
//! Reads the whole listing into memory, substitutes each (old, new) pair of
//! the fixed table in order, and writes the result straight back to the same
//! path. Matching is plain substring matching with no boundary detection.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Listing holding the graphics primitive call sites, relative to the
/// working directory.
pub const TARGET_FILE: &str = "src/asterion_func_low.asm";

/// Placeholder labels and their descriptive names, in application order.
///
/// Substitution is sequential, not simultaneous: each pair rewrites the
/// output of the pair before it, so an earlier `new` value that contains a
/// later `old` value gets rewritten again by the later pair.
pub const GRAPHICS_PRIMITIVE_RENAMES: &[(&str, &str)] = &[
    ("SUB_ram_c869", "DRAW_DOOR_BOTTOM_SETUP"),
    ("SUB_ram_c86c", "DRAW_SINGLE_PIXEL_DOWN"),
    ("SUB_ram_c871", "DRAW_VERTICAL_LINE_3_DOWN"),
    ("SUB_ram_c87e", "DRAW_VERTICAL_LINE_3_UP"),
    ("SUB_ram_c886", "DRAW_CROSS_PATTERN_RIGHT"),
    ("SUB_ram_c893", "DRAW_CROSS_PATTERN_LEFT"),
    ("SUB_ram_c8a0", "DRAW_HORIZONTAL_LINE_3_RIGHT"),
    ("SUB_ram_c8ad", "DRAW_HORIZONTAL_LINE_3_LEFT"),
    ("LAB_ram_c880", "CONTINUE_VERTICAL_LINE_UP"),
];

/// Outcome of rewriting one file.
#[derive(Debug, Clone)]
pub struct RelabelOutcome {
    /// File that was rewritten.
    pub file: String,
    /// Total occurrences replaced across all table entries.
    pub replacements: usize,
    /// Table entries that matched at least once.
    pub labels_renamed: usize,
}

/// Apply each (old, new) pair in order, replacing every non-overlapping
/// occurrence. Returns the rewritten content and the per-pair counts.
pub fn apply_renames(content: &str, table: &[(&str, &str)]) -> (String, Vec<usize>) {
    let mut content = content.to_string();
    let mut counts = Vec::with_capacity(table.len());

    for (old, new) in table {
        let count = content.matches(old).count();
        if count > 0 {
            content = content.replace(old, new);
        }
        counts.push(count);
    }

    (content, counts)
}

/// Rewrite `path` in place with the given rename table.
///
/// The write goes straight back to `path` — no temp file, no backup. A
/// failed write can leave the listing partially updated.
pub fn relabel_file(path: &Path, table: &[(&str, &str)]) -> Result<RelabelOutcome> {
    let content = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;

    let (updated, counts) = apply_renames(&content, table);

    fs::write(path, &updated).map_err(|e| Error::write(path, e))?;

    Ok(RelabelOutcome {
        file: path.display().to_string(),
        replacements: counts.iter().sum(),
        labels_renamed: counts.iter().filter(|&&c| c > 0).count(),
    })
}
