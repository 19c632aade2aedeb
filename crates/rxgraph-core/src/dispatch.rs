//! Dispatch tables: code-unit ranges mapped to viable alternatives.

use std::fmt;

use crate::code_unit::{AsCodeUnit, CharacterRange, CodeUnit};
use crate::out_set::OutSet;

/// One table entry covering `[from, to]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub from: CodeUnit,
    pub to: CodeUnit,
    pub out_set: OutSet,
}

impl Entry {
    fn new(from: u32, to: u32, out_set: OutSet) -> Self {
        Self {
            from: from as CodeUnit,
            to: to as CodeUnit,
            out_set,
        }
    }

    pub fn range(&self) -> CharacterRange {
        CharacterRange::new(self.from, self.to)
    }
}

/// Ordered, non-overlapping ranges, each tagged with the alternatives that
/// can start there.
///
/// Entries are kept sorted by `from`. Code units not covered by any entry
/// have no viable alternative.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchTable {
    entries: Vec<Entry>,
}

impl DispatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark alternative `value` as viable over `range`.
    ///
    /// Existing entries that partially overlap `range` are split so every
    /// entry keeps a uniform out-set.
    pub fn add_range(&mut self, range: CharacterRange, value: u32) {
        let from = u32::from(range.from);
        let to = u32::from(range.to);
        let mut result = Vec::with_capacity(self.entries.len() + 2);
        // First unit of `range` not yet covered by `result`.
        let mut cursor = from;

        for entry in self.entries.drain(..) {
            let entry_from = u32::from(entry.from);
            let entry_to = u32::from(entry.to);

            if entry_to < cursor || entry_from > to {
                if entry_from > to && cursor <= to {
                    result.push(Entry::new(cursor, to, OutSet::singleton(value)));
                    cursor = to + 1;
                }
                result.push(entry);
                continue;
            }

            if entry_from < cursor {
                result.push(Entry::new(entry_from, cursor - 1, entry.out_set.clone()));
            } else if entry_from > cursor {
                result.push(Entry::new(cursor, entry_from - 1, OutSet::singleton(value)));
            }

            let start = entry_from.max(cursor);
            let end = entry_to.min(to);
            let mut joined = entry.out_set.clone();
            joined.set(value);
            result.push(Entry::new(start, end, joined));

            if entry_to > to {
                result.push(Entry::new(to + 1, entry_to, entry.out_set));
            }
            cursor = end + 1;
        }

        if cursor <= to {
            result.push(Entry::new(cursor, to, OutSet::singleton(value)));
        }
        self.entries = result;
    }

    /// Call `f(from, entry)` once per entry in ascending range order.
    pub fn for_each(&self, mut f: impl FnMut(CodeUnit, &Entry)) {
        for entry in &self.entries {
            f(entry.from, entry);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "[{}-{}]: {{", AsCodeUnit(entry.from), AsCodeUnit(entry.to))?;
            for (i, member) in entry.out_set.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{member}")?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}
