use crate::events::{Event, EventId, EventStore};
use std::collections::BTreeSet;

/// Events marked for export, kept regardless of what the filters currently show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    ids: BTreeSet<EventId>,
}

impl SelectionState {
    /// Returns whether the event is selected after the toggle.
    pub fn toggle(&mut self, id: EventId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn remove_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a EventId>) {
        for id in ids {
            self.ids.remove(id);
        }
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = EventId> + '_ {
        self.ids.iter().copied()
    }

    /// Selected events present in the store, in store order.
    pub fn selected_events<'a>(&self, store: &'a EventStore) -> Vec<&'a Event> {
        store
            .iter()
            .filter(|event| self.ids.contains(&event.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn toggling_twice_should_leave_selection_unchanged() {
        let mut selection = SelectionState::default();
        selection.toggle(EventId(4));
        let before = selection.clone();

        assert!(selection.toggle(EventId(7)));
        assert!(!selection.toggle(EventId(7)));

        assert_eq!(selection, before);
    }

    #[test_log::test]
    fn toggling_one_two_one_should_leave_only_two() {
        let mut selection = SelectionState::default();

        selection.toggle(EventId(1));
        selection.toggle(EventId(2));
        selection.toggle(EventId(1));

        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![EventId(2)]);
    }

    #[test_log::test]
    fn selected_events_should_follow_store_order_and_skip_unknown_ids() {
        let store = EventStore::new(vec![
            Event::new(3, "Third", "met"),
            Event::new(1, "First", "moma"),
        ]);
        let mut selection = SelectionState::default();
        selection.toggle(EventId(1));
        selection.toggle(EventId(3));
        selection.toggle(EventId(99));

        let titles: Vec<&str> = selection
            .selected_events(&store)
            .into_iter()
            .map(|event| event.title.as_str())
            .collect();

        assert_eq!(titles, vec!["Third", "First"]);
    }

    #[test_log::test]
    fn clear_should_empty_the_selection() {
        let mut selection = SelectionState::default();
        selection.toggle(EventId(1));

        selection.clear();

        assert!(selection.is_empty());
    }
}
