use super::state::{EventTypeFilter, FilterState};
use crate::events::Event;
use std::collections::BTreeSet;

/// Predicates derived once from a filter, then applied to every event.
struct Criteria<'f> {
    city: &'f str,
    query: String,
    event_type: EventTypeFilter,
    institutions: BTreeSet<&'f str>,
}

impl<'f> Criteria<'f> {
    fn new(filter: &'f FilterState) -> Self {
        Self {
            city: &filter.city,
            query: filter.query.to_lowercase(),
            event_type: filter.event_type,
            institutions: filter.active_institutions(),
        }
    }

    fn matches(&self, event: &Event) -> bool {
        self.matches_city(event)
            && self.matches_query(event)
            && self.matches_type(event)
            && self.matches_institution(event)
    }

    fn matches_city(&self, event: &Event) -> bool {
        event.city.as_deref() == Some(self.city)
    }

    fn matches_query(&self, event: &Event) -> bool {
        self.query.is_empty()
            || event.title.to_lowercase().contains(&self.query)
            || event.description.to_lowercase().contains(&self.query)
    }

    fn matches_type(&self, event: &Event) -> bool {
        match self.event_type {
            EventTypeFilter::All => true,
            EventTypeFilter::Only(kind) => event.kind == Some(kind),
        }
    }

    // Union across categories: any chosen institution lets the event through.
    fn matches_institution(&self, event: &Event) -> bool {
        self.institutions.is_empty() || self.institutions.contains(event.institution.as_str())
    }
}

/// Events matching every dimension of `filter`, in store order.
pub fn filter_events<'a>(events: &'a [Event], filter: &FilterState) -> Vec<&'a Event> {
    let criteria = Criteria::new(filter);

    events.iter().filter(|event| criteria.matches(event)).collect()
}

pub fn matches(event: &Event, filter: &FilterState) -> bool {
    Criteria::new(filter).matches(event)
}
