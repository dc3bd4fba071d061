//! Generation marker and the skip-if-current check.
//!
//! Regenerating a header forces a recompile of the binding translation
//! units, which is slow. Each output records the input's modification time
//! on its first line; an input whose marker still matches is skipped.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Build the marker line for `input` from its current modification time.
pub fn marker_line(input: &Path) -> Result<String> {
    let mtime = fs::metadata(input)
        .and_then(|m| m.modified())
        .with_context(|| format!("failed to stat {}", input.display()))?;
    let secs = mtime
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    Ok(format!("// Last update of XML file: {}", format_mtime(secs)))
}

/// Float-formatted timestamp; integral values keep a `.0` suffix so the
/// marker always reads as a float.
fn format_mtime(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{:.1}", secs)
    } else {
        format!("{}", secs)
    }
}

/// First line of a previously generated file, if one exists.
pub fn recorded_marker(output: &Path) -> Option<String> {
    let file = File::open(output).ok()?;
    BufReader::new(file).lines().next()?.ok()
}

/// True iff the recorded first line matches the freshly built marker.
///
/// Pure decision — the file reads and writes live with the callers.
pub fn is_current(first_line: Option<&str>, marker: &str) -> bool {
    first_line.is_some_and(|line| line.trim() == marker.trim())
}
