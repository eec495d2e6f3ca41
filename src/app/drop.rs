// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/drop.rs
//
// Drag-and-drop payload parsing.

use std::path::PathBuf;

/// Extract the first file path from a drop payload.
///
/// Paths containing spaces arrive wrapped in braces (`{/a b/c.png}`); bare
/// paths are separated by whitespace. Only the first path of a multi-file
/// drop is used. Returns `None` for an empty drop.
pub fn parse_drop_payload(data: &str) -> Option<PathBuf> {
    let raw = data.trim();

    let first = match raw.strip_prefix('{') {
        Some(rest) => rest.split('}').next().unwrap_or_default(),
        None => raw.split_whitespace().next()?,
    };

    if first.is_empty() {
        None
    } else {
        Some(PathBuf::from(first))
    }
}
