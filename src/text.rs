//! Text normalization for docstring display.
//!
//! Doxygen hands us C++ type and description text; Python users should not
//! see `std::`, pointer sigils, or LaTeX math commands. Normalization is an
//! ordered list of literal substitutions — later rules run on the output of
//! earlier ones (`::` → `.` must come after the namespace prefixes are
//! dropped), so the order of this table is part of the behavior.

const NORMALIZE_RULES: &[(&str, &str)] = &[
    ("const", ""),
    ("std::", ""),
    ("ibex::", ""),
    ("tubex::", ""),
    ("< ", "<"),
    (" >", ">"),
    ("*", ""),
    ("\\cdot", "·"),
    ("\\infty", "∞"),
    ("\\forall", "∀"),
    ("\\in[", "∈["),
    ("\\in ", "∈ "),
    ("\\int", "∫"),
    ("\\tau", "τ"),
    ("\\exists ", "∃ "),
    ("\\mid ", " | "),
    ("\\delta", "δ"),
    ("::", "."),
    ("  ", " "),
    ("$", ""),
    ("\n", ""),
    ("&", ""),
];

/// Turn raw XML text into plain display text suitable for a docstring line.
pub fn normalize(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in NORMALIZE_RULES {
        out = out.replace(pattern, replacement);
    }
    out.trim().to_string()
}

/// Terminate `text` with exactly one period.
///
/// Appends a `.` and collapses the double period that results when the
/// input was already terminated. Idempotent.
pub fn sentence(text: &str) -> String {
    format!("{}.", text).replace("..", ".")
}
