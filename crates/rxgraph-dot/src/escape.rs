//! Escaping for Graphviz quoted strings and record labels.

use std::borrow::Cow;

use rxgraph_core::{AsCodeUnit, CodeUnit};

/// Escape text for a double-quoted DOT string.
///
/// Backslashes and double quotes get a backslash; everything else passes
/// through. Strings without either are returned as-is.
pub fn escape_label(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '"']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        if matches!(ch, '\\' | '"') {
            out.push('\\');
        }
        out.push(ch);
    }
    Cow::Owned(out)
}

/// Render a code unit as a literal inside a record label field.
///
/// Record syntax characters and spaces are backslash-escaped, as is the
/// backslash of a `\uXXXX` escape.
pub fn escape_record(unit: CodeUnit) -> String {
    let text = AsCodeUnit(unit).to_string();
    let mut out = String::with_capacity(text.len() + 1);
    for ch in text.chars() {
        if matches!(ch, '{' | '}' | '|' | '<' | '>' | '"' | '\\' | ' ') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
