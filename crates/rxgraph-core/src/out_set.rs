//! Compact set of alternative indices.

/// Set of small non-negative integers (alternative indices of a choice).
///
/// Indices below [`OutSet::FIRST_LIMIT`] live in an inline bitmask. Larger
/// indices go to an overflow list that renderers never consult.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutSet {
    first: u32,
    remaining: Option<Vec<u32>>,
}

impl OutSet {
    /// Capacity of the inline portion.
    pub const FIRST_LIMIT: u32 = 32;

    pub fn new() -> Self {
        Self::default()
    }

    /// Set containing exactly `index`.
    pub fn singleton(index: u32) -> Self {
        let mut set = Self::new();
        set.set(index);
        set
    }

    pub fn set(&mut self, index: u32) {
        if index < Self::FIRST_LIMIT {
            self.first |= 1 << index;
            return;
        }
        let remaining = self.remaining.get_or_insert_with(Vec::new);
        if let Err(pos) = remaining.binary_search(&index) {
            remaining.insert(pos, index);
        }
    }

    /// Membership test.
    pub fn get(&self, index: u32) -> bool {
        if index < Self::FIRST_LIMIT {
            return self.first & (1 << index) != 0;
        }
        self.remaining
            .as_ref()
            .is_some_and(|r| r.binary_search(&index).is_ok())
    }

    /// Union `other` into `self`.
    pub fn extend_from(&mut self, other: &OutSet) {
        self.first |= other.first;
        for &index in other.remaining.iter().flatten() {
            self.set(index);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first == 0 && self.remaining.as_ref().is_none_or(|r| r.is_empty())
    }

    /// Inline members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..Self::FIRST_LIMIT).filter(move |&i| self.get(i))
    }
}
