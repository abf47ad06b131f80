//! Ordered store of intervals that survived conflict resolution.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::interval::Interval;

/// Surviving intervals keyed by start-of-day.
///
/// Two intervals occupy the same slot when their start times are equal,
/// whatever their other fields. The first interval inserted into a slot
/// stays there until the slot is explicitly vacated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultStore {
    slots: BTreeMap<u32, Interval>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the interval if its start slot is free.
    ///
    /// Returns `false` and leaves the current occupant in place otherwise.
    pub fn insert(&mut self, interval: Interval) -> bool {
        match self.slots.entry(interval.start_of_day()) {
            Entry::Vacant(slot) => {
                slot.insert(interval);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Vacates the slot at `start_of_day`, returning whichever interval held it.
    pub fn remove_by_start(&mut self, start_of_day: u32) -> Option<Interval> {
        self.slots.remove(&start_of_day)
    }

    /// Intervals in ascending start order.
    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.slots.values()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResultStore {
    type Item = &'a Interval;
    type IntoIter = std::collections::btree_map::Values<'a, u32, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.values()
    }
}
