use culturalcalendar::events::{Event, EventId, EventStore, EventType};
use culturalcalendar::filter::engine::matches;
use culturalcalendar::filter::{filter_events, EventTypeFilter, FilterState};
use culturalcalendar::session::{Action, AppState};

fn example_store() -> EventStore {
    EventStore::new(vec![
        Event::new(1, "Contemporary Art Exhibition", "moma")
            .with_city("New York")
            .with_kind(EventType::Exhibitions),
        Event::new(2, "Ancient Egyptian Art Gallery Talk", "met")
            .with_city("New York")
            .with_kind(EventType::Talks),
    ])
}

fn filters() -> Vec<FilterState> {
    vec![
        FilterState::new("New York"),
        FilterState::new("London"),
        FilterState::new("New York").with_query("art"),
        FilterState::new("New York").with_query("SCIENCE"),
        FilterState::new("New York").with_event_type(EventTypeFilter::Only(EventType::Lectures)),
        FilterState::new("New York").with_institution("Art Museums", "met"),
        FilterState::new("New York")
            .with_institution("Art Museums", "all")
            .with_institution("Libraries & Literary", "grolier_club")
            .with_institution("Arts & Social Clubs", "explorers_club"),
        FilterState::new("New York")
            .with_query("a")
            .with_event_type(EventTypeFilter::Only(EventType::Museums))
            .with_institution("History & Culture", "ny_historical"),
    ]
}

fn ids(events: &[&Event]) -> Vec<EventId> {
    events.iter().map(|event| event.id).collect()
}

#[test_log::test]
fn default_filters_should_list_both_examples_in_order() {
    let store = example_store();

    let result = filter_events(store.events(), &FilterState::new("New York"));

    assert_eq!(ids(&result), vec![EventId(1), EventId(2)]);
}

#[test_log::test]
fn query_example_should_only_match_the_egyptian_talk() {
    let store = example_store();

    let result = filter_events(store.events(), &FilterState::new("New York").with_query("egyptian"));

    assert_eq!(ids(&result), vec![EventId(2)]);
}

#[test_log::test]
fn institution_example_should_only_match_moma() {
    let store = example_store();
    let filter = FilterState::new("New York").with_institution("Art Museums", "moma");

    let result = filter_events(store.events(), &filter);

    assert_eq!(ids(&result), vec![EventId(1)]);
}

#[test_log::test]
fn result_should_be_an_ordered_subsequence_of_the_store() {
    let store = EventStore::embedded();

    for filter in filters() {
        let result = filter_events(store.events(), &filter);
        let positions: Vec<usize> = result
            .iter()
            .map(|event| {
                store
                    .events()
                    .iter()
                    .position(|stored| stored.id == event.id)
                    .unwrap()
            })
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", filter);
    }
}

#[test_log::test]
fn filtering_should_be_idempotent() {
    let store = EventStore::embedded();

    for filter in filters() {
        assert_eq!(
            filter_events(store.events(), &filter),
            filter_events(store.events(), &filter)
        );
    }
}

#[test_log::test]
fn an_event_is_listed_iff_every_predicate_holds() {
    let store = EventStore::embedded();

    for filter in filters() {
        let result = ids(&filter_events(store.events(), &filter));

        for event in store.iter() {
            let active = filter.active_institutions();
            let query = filter.query.to_lowercase();
            let expected = event.city.as_deref() == Some(filter.city.as_str())
                && (query.is_empty()
                    || event.title.to_lowercase().contains(&query)
                    || event.description.to_lowercase().contains(&query))
                && match filter.event_type {
                    EventTypeFilter::All => true,
                    EventTypeFilter::Only(kind) => event.kind == Some(kind),
                }
                && (active.is_empty() || active.contains(event.institution.as_str()));

            assert_eq!(result.contains(&event.id), expected, "{:?} {:?}", event.id, filter);
            assert_eq!(matches(event, &filter), expected);
        }
    }
}

#[test_log::test]
fn embedded_store_should_list_lectures_in_london() {
    let store = EventStore::embedded();
    let filter = FilterState::new("London").with_event_type(EventTypeFilter::Only(EventType::Lectures));

    let result = filter_events(store.events(), &filter);

    assert_eq!(ids(&result), vec![EventId(9)]);
}

#[test_log::test]
fn selection_should_survive_filter_changes() {
    let store = EventStore::embedded();
    let state = AppState::default()
        .apply(Action::ToggleEvent(EventId(1)))
        .apply(Action::ToggleEvent(EventId(9)));
    let selection = state.selection.clone();

    let state = state
        .apply(Action::SelectCity("London".to_string()))
        .apply(Action::SetQuery("victorian".to_string()))
        .apply(Action::SetEventType(EventTypeFilter::Only(EventType::Lectures)))
        .apply(Action::ResetFilters);

    assert_eq!(state.selection, selection);
    assert!(state
        .visible_events(&store)
        .iter()
        .all(|event| event.city.as_deref() == Some("London")));
}

#[test_log::test]
fn toggling_example_should_leave_only_the_second_event() {
    let state = [1, 2, 1]
        .into_iter()
        .map(|id| Action::ToggleEvent(EventId(id)))
        .fold(AppState::default(), AppState::apply);

    assert_eq!(state.selection.iter().collect::<Vec<_>>(), vec![EventId(2)]);
}
