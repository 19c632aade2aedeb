//! UTF-16 code units and inclusive code-unit ranges.

use std::fmt;
use std::sync::LazyLock;

/// A single UTF-16 code unit, the alphabet of the automaton.
pub type CodeUnit = u16;

/// Largest code unit; ranges never extend past it.
pub const MAX_CODE_UNIT: CodeUnit = 0xFFFF;

/// Display adapter: printable ASCII as itself, everything else as `\uXXXX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AsCodeUnit(pub CodeUnit);

impl AsCodeUnit {
    pub fn is_printable(self) -> bool {
        (0x20..=0x7E).contains(&self.0)
    }
}

impl fmt::Display for AsCodeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_printable() {
            write!(f, "{}", self.0 as u8 as char)
        } else {
            write!(f, "\\u{:04x}", self.0)
        }
    }
}

/// Inclusive range of code units `[from, to]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharacterRange {
    pub from: CodeUnit,
    pub to: CodeUnit,
}

impl CharacterRange {
    pub fn new(from: CodeUnit, to: CodeUnit) -> Self {
        debug_assert!(from <= to, "inverted range {from:#x}..{to:#x}");
        Self { from, to }
    }

    pub fn single(unit: CodeUnit) -> Self {
        Self::new(unit, unit)
    }

    /// The whole alphabet.
    pub fn everything() -> Self {
        Self::new(0, MAX_CODE_UNIT)
    }

    pub fn contains(&self, unit: CodeUnit) -> bool {
        self.from <= unit && unit <= self.to
    }

    pub fn len(&self) -> u32 {
        u32::from(self.to) - u32::from(self.from) + 1
    }

    /// Sort ranges and merge the overlapping or adjacent ones.
    pub fn canonicalize(ranges: &mut Vec<CharacterRange>) {
        if ranges.len() < 2 {
            return;
        }
        ranges.sort_unstable();
        let mut merged: Vec<CharacterRange> = Vec::with_capacity(ranges.len());
        for range in ranges.drain(..) {
            match merged.last_mut() {
                Some(last) if u32::from(range.from) <= u32::from(last.to) + 1 => {
                    last.to = last.to.max(range.to);
                }
                _ => merged.push(range),
            }
        }
        *ranges = merged;
    }

    /// Complement of `ranges` over the whole alphabet.
    pub fn negate(ranges: &[CharacterRange]) -> Vec<CharacterRange> {
        let mut sorted = ranges.to_vec();
        Self::canonicalize(&mut sorted);

        let mut result = Vec::with_capacity(sorted.len() + 1);
        let mut next: u32 = 0;
        for range in &sorted {
            if u32::from(range.from) > next {
                result.push(Self::new(next as CodeUnit, range.from - 1));
            }
            next = u32::from(range.to) + 1;
        }
        if next <= u32::from(MAX_CODE_UNIT) {
            result.push(Self::new(next as CodeUnit, MAX_CODE_UNIT));
        }
        result
    }

    /// Widen `ranges` with the simple case equivalents of every unit they cover.
    ///
    /// Only mappings that land on a single BMP code unit are added. The
    /// result is canonical.
    pub fn add_case_equivalents(ranges: &mut Vec<CharacterRange>) {
        Self::canonicalize(ranges);
        if ranges.first() == Some(&Self::everything()) {
            return;
        }

        let pairs = &*CASE_PAIRS;
        let mut extra = Vec::new();
        for range in ranges.iter() {
            let start = pairs.partition_point(|&(unit, _)| unit < range.from);
            extra.extend(
                pairs[start..]
                    .iter()
                    .take_while(|&&(unit, _)| unit <= range.to)
                    .map(|&(_, equivalent)| CharacterRange::single(equivalent)),
            );
        }
        ranges.extend(extra);
        Self::canonicalize(ranges);
    }
}

/// `(unit, equivalent)` for every BMP unit whose simple lower or upper case
/// mapping is a different single BMP unit, sorted by `unit`.
static CASE_PAIRS: LazyLock<Vec<(CodeUnit, CodeUnit)>> = LazyLock::new(|| {
    let mut pairs = Vec::new();
    for unit in 0..=MAX_CODE_UNIT {
        let Some(ch) = char::from_u32(u32::from(unit)) else {
            continue;
        };
        for mapped in [single_mapping(ch.to_lowercase()), single_mapping(ch.to_uppercase())] {
            if let Some(equivalent) = mapped.filter(|&m| m != unit) {
                pairs.push((unit, equivalent));
            }
        }
    }
    pairs
});

fn single_mapping(mut mapped: impl Iterator<Item = char>) -> Option<CodeUnit> {
    let (Some(ch), None) = (mapped.next(), mapped.next()) else {
        return None;
    };
    CodeUnit::try_from(u32::from(ch)).ok()
}

impl fmt::Display for CharacterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", AsCodeUnit(self.from), AsCodeUnit(self.to))
    }
}
