//! Insertion-order-preserving grouping for the carrier and stage
//! aggregations.

use std::collections::HashMap;

/// Multimap that remembers the order in which keys were first seen.
///
/// The carrier and stage groupings promise "ties keep first-seen order"
/// downstream, so the ordering is part of this type's contract rather than
/// an accident of the underlying map.
#[derive(Debug)]
pub struct OrderedGroups<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, Vec<V>)>,
}

impl<V> OrderedGroups<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Append `value` to the group for `key`; a key seen for the first time
    /// opens a new group at the end of the ordering.
    pub fn push(&mut self, key: &str, value: V) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1.push(value),
            None => {
                self.index.insert(key.to_owned(), self.entries.len());
                self.entries.push((key.to_owned(), vec![value]));
            }
        }
    }

    /// Groups in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[V])> + '_ {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedGroups<V> {
    fn default() -> Self {
        Self::new()
    }
}
