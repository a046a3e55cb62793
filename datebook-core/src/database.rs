//! The in-memory event store.

use std::collections::{BTreeMap, BTreeSet};

use crate::date::Date;

/// Ordered mapping from [`Date`] to a set of event names.
///
/// Dates iterate in ascending order and events within a date in
/// lexicographic order, so output built from [`Database::iter`] is
/// deterministic. Every stored date holds at least one event: deleting the
/// last event for a date drops the date itself.
#[derive(Debug, Default)]
pub struct Database {
    events: BTreeMap<Date, BTreeSet<String>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `event` on `date`, creating the date entry if needed.
    /// Adding an event that is already present is a silent no-op.
    pub fn add_event(&mut self, date: Date, event: impl Into<String>) {
        self.events.entry(date).or_default().insert(event.into());
    }

    /// Remove one event from `date`, reporting whether it was present.
    /// An absent date or event leaves the store untouched.
    pub fn delete_event(&mut self, date: Date, event: &str) -> bool {
        let Some(set) = self.events.get_mut(&date) else {
            return false;
        };
        let removed = set.remove(event);
        if set.is_empty() {
            self.events.remove(&date);
        }
        removed
    }

    /// Remove every event on `date`, returning how many there were.
    pub fn delete_date(&mut self, date: Date) -> usize {
        self.events.remove(&date).map_or(0, |set| set.len())
    }

    /// The events recorded on `date`, in lexicographic order.
    pub fn find(&self, date: Date) -> impl Iterator<Item = &str> {
        self.events
            .get(&date)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Every (date, event) pair: dates ascending, events within a date
    /// ascending.
    pub fn iter(&self) -> impl Iterator<Item = (&Date, &str)> {
        self.events
            .iter()
            .flat_map(|(date, set)| set.iter().map(move |event| (date, event.as_str())))
    }
}
