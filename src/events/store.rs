use super::model::{Event, EventId, EventType};
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::warn;

/// Ordered, immutable sequence of loaded events with unique ids.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Keeps the first record of every id, dropping later duplicates.
    pub fn new(events: Vec<Event>) -> Self {
        let mut seen = HashSet::new();
        let events = events
            .into_iter()
            .filter(|event| {
                let unique = seen.insert(event.id);
                if !unique {
                    warn!(
                        "Duplicated event id {} ('{}'), keeping the first occurrence",
                        event.id, event.title
                    );
                }
                unique
            })
            .collect();

        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Data set shipped with the binary, used whenever no other source can be read.
    pub fn embedded() -> Self {
        Self::new(embedded_events())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn embedded_events() -> Vec<Event> {
    vec![
        Event::new(1, "Women in Science: A Historical Perspective", "ny_historical")
            .with_venue("NY Historical Society")
            .with_schedule(date(2025, 7, 20), "2:00 PM")
            .with_kind(EventType::Museums)
            .with_description("Explore the contributions of women scientists throughout history")
            .with_city("New York")
            .with_duration("90 minutes")
            .with_link("https://www.nyhistory.org/events"),
        Event::new(2, "Literary Salon: Contemporary Female Authors", "ny_society_library")
            .with_venue("NY Society Library")
            .with_schedule(date(2025, 7, 22), "6:30 PM")
            .with_kind(EventType::Discussions)
            .with_description("Discussion on modern women writers and their impact")
            .with_city("New York")
            .with_price("Free for members")
            .with_link("https://www.nysoclib.org/events"),
        Event::new(3, "The Art of Enlightenment", "met")
            .with_venue("Metropolitan Museum")
            .with_schedule(date(2025, 7, 25), "11:00 AM")
            .with_kind(EventType::Museums)
            .with_description("Guided tour of Enlightenment era artworks")
            .with_city("New York")
            .with_duration("2 hours")
            .with_link("https://www.metmuseum.org/events"),
        Event::new(4, "Ancient Egyptian Art: Symbols and Sacred Meanings", "met")
            .with_venue("Metropolitan Museum")
            .with_schedule(date(2025, 7, 27), "2:00 PM")
            .with_kind(EventType::Lectures)
            .with_description(
                "An Egyptologist explores the symbolic language of ancient Egyptian art and its religious significance.",
            )
            .with_city("New York")
            .with_price("$15")
            .with_duration("90 minutes")
            .with_link("https://www.metmuseum.org/events"),
        Event::new(5, "Contemporary Art in the Digital Age: Artist Panel", "moma")
            .with_venue("MoMA")
            .with_schedule(date(2025, 7, 30), "6:30 PM")
            .with_kind(EventType::Panels)
            .with_description(
                "Artists and curators discuss how digital technology is transforming artistic expression.",
            )
            .with_city("New York")
            .with_price("$18")
            .with_duration("2 hours")
            .with_link("https://www.moma.org/calendar"),
        Event::new(6, "Rare Books and the Printed Word", "grolier_club")
            .with_venue("Grolier Club")
            .with_schedule(date(2025, 8, 2), "5:00 PM")
            .with_kind(EventType::Talks)
            .with_description("A curator's talk on the history of fine printing")
            .with_city("New York")
            .with_duration("1 hour")
            .with_link("https://www.grolierclub.org/events"),
        Event::new(7, "Reading: New Voices in French Fiction", "albertine")
            .with_venue("Albertine Books")
            .with_schedule(date(2025, 8, 5), "7:00 PM")
            .with_kind(EventType::Readings)
            .with_description("Authors read from their latest novels, followed by a conversation")
            .with_city("New York")
            .with_link("https://www.albertine.com/events"),
        Event::new(8, "Expedition Stories: Polar Exploration", "explorers_club")
            .with_venue("The Explorers Club")
            .with_schedule(date(2025, 8, 8), "6:00 PM")
            .with_kind(EventType::Lectures)
            .with_description("First-hand accounts from the Arctic and Antarctic")
            .with_city("New York")
            .with_price("$25")
            .with_link("https://www.explorers.org/events"),
        Event::new(9, "Victorian Science for Everyone", "womens_history")
            .with_venue("Royal Institution")
            .with_schedule(date(2025, 8, 12), "7:30 PM")
            .with_kind(EventType::Lectures)
            .with_description("How popular science books opened laboratories to new readers")
            .with_city("London")
            .with_link("https://www.rigb.org/whats-on"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn when_ids_are_duplicated_should_keep_the_first_record() {
        let store = EventStore::new(vec![
            Event::new(1, "First", "moma"),
            Event::new(2, "Second", "met"),
            Event::new(1, "Shadow", "frick"),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(EventId(1)).unwrap().title, "First");
        assert_eq!(
            store.iter().map(|event| event.id).collect::<Vec<_>>(),
            vec![EventId(1), EventId(2)]
        );
    }

    #[test_log::test]
    fn embedded_data_should_have_unique_ids() {
        let events = embedded_events();
        let store = EventStore::embedded();

        assert!(!store.is_empty());
        assert_eq!(store.len(), events.len());
    }
}
