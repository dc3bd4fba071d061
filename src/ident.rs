//! Identifier construction — the generated constant name for a member.
//!
//! The name is derived from (source file, return type, member name,
//! parameter types), so overloads of the same function get distinct
//! constants. The accumulated string then goes through a fixed substitution
//! table to become a legal C identifier. Order in the table is semantic:
//! `==` must be handled before `=`, `&=` before the bare `&` removal,
//! `()` before the single parentheses.

use crate::model::Member;

const IDENT_RULES: &[(&str, &str)] = &[
    ("<", ""),
    (">", ""),
    (",", ""),
    (" ", ""),
    (".", ""),
    ("std::", ""),
    ("ibex::", ""),
    ("tubex::", ""),
    ("::", ""),
    ("@", "_"),
    ("|=", "UNIEQ"),
    ("&=", "INTEQ"),
    ("/=", "DIVEQ"),
    ("*=", "MULEQ"),
    ("+=", "ADDEQ"),
    ("-=", "MINEQ"),
    ("==", "EQ"),
    ("!=", "NEQ"),
    ("=", "AFF"),
    ("()", "P"),
    ("(", ""),
    (")", ""),
    ("&", ""),
    ("[]", "B"),
    ("friend", ""),
    ("~", "destruct_"),
    ("__", "_"),
    ("*", ""),
];

/// Build the constant name for `member`, documented in `filename`.
///
/// Malformed type text never fails here — it just yields a garbled but
/// still valid identifier.
pub fn anchor_id(member: &Member, filename: &str) -> String {
    let mut id = filename
        .replace(".h", "")
        .replace(".cpp", "")
        .replace("tubex_", "");

    id.push('_');
    id.push_str(&member.return_type.replace('_', ""));

    id.push('_');
    id.push_str(&member.name);

    for param in &member.params {
        id.push('_');
        id.push_str(&param.ty.replace('_', ""));
    }

    for (pattern, replacement) in IDENT_RULES {
        id = id.replace(pattern, replacement);
    }
    id.to_uppercase()
}
