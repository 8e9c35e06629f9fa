//! The working set of derived events and the filters applied before summarizing.

use std::collections::BTreeSet;

use super::event::{AlarmEvent, DerivedEvent};
use super::metrics::{summarize, Metrics};

/// Events that survived load, in sheet order. Every event has a defined,
/// non-negative recovery time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    events: Vec<DerivedEvent>,
    has_center_column: bool,
    discarded: usize,
}

impl Dataset {
    #[cfg(test)]
    pub(crate) fn new(events: Vec<DerivedEvent>, has_center_column: bool) -> Self {
        Self {
            events,
            has_center_column,
            discarded: 0,
        }
    }

    /// Derive recovery times, keeping a count of the rows that had to be dropped.
    pub fn from_events<I>(events: I, has_center_column: bool) -> Self
    where
        I: IntoIterator<Item = AlarmEvent>,
    {
        let mut kept = Vec::new();
        let mut discarded = 0usize;
        for event in events {
            match DerivedEvent::derive(event) {
                Some(derived) => kept.push(derived),
                None => discarded += 1,
            }
        }

        Self {
            events: kept,
            has_center_column,
            discarded,
        }
    }

    pub fn events(&self) -> &[DerivedEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether the uploaded sheet had a center column at all.
    pub fn has_center_column(&self) -> bool {
        self.has_center_column
    }

    /// Rows dropped during load for a missing or negative recovery time.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Exact match on the center label. `None` keeps every row.
    pub fn filter_by_center(&self, center: Option<&str>) -> Dataset {
        match center {
            None => self.clone(),
            Some(center) => self.retain(|event| event.center.as_deref() == Some(center)),
        }
    }

    /// Rows with a registered incident ticket.
    pub fn ticketed_subset(&self) -> Dataset {
        self.retain(DerivedEvent::has_ticket)
    }

    /// Sorted distinct center labels, for the center picker.
    pub fn centers(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| event.center.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn summarize(&self) -> Metrics {
        summarize(self)
    }

    fn retain(&self, keep: impl Fn(&DerivedEvent) -> bool) -> Dataset {
        Dataset {
            events: self.events.iter().filter(|event| keep(*event)).cloned().collect(),
            has_center_column: self.has_center_column,
            discarded: self.discarded,
        }
    }
}
