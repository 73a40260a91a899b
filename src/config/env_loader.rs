use crate::config::model::{Config, DebugConfig, FilterConfig};
use crate::events::api::{EventSource, MAX_RETRIES};
use crate::events::{EventId, EventType};
use crate::filter::EventTypeFilter;
use itertools::Itertools;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub fn load_config() -> Config {
    let events_source = load_events_source();
    let fetch_max_retries = load_u32_config("FETCH_MAX_RETRIES").unwrap_or(MAX_RETRIES);

    let filter = FilterConfig {
        city: load_str_config("CITY"),
        query: load_str_config("SEARCH_QUERY"),
        event_type: load_str_config("EVENT_TYPE").map(|value| parse_event_type(&value)),
        institutions: load_str_config("INSTITUTIONS")
            .map(|value| parse_institutions(&value))
            .unwrap_or_default(),
    };
    let selected_events = load_str_config("SELECTED_EVENTS")
        .map(|value| parse_event_ids(&value))
        .unwrap_or_default();
    let export_path = load_str_config("EXPORT_ICS_PATH").map(PathBuf::from);

    let debug_event_limit = load_i32_config("DEBUG_EVENT_LIMIT");

    Config {
        debug_config: DebugConfig {
            event_limit: debug_event_limit,
        },
        events_source,
        fetch_max_retries,
        filter,
        selected_events,
        export_path,
    }
}

fn load_events_source() -> EventSource {
    match (load_str_config("EVENTS_URL"), load_str_config("EVENTS_FILE")) {
        (Some(url), _) => EventSource::Url(url),
        (None, Some(path)) => EventSource::File(PathBuf::from(path)),
        (None, None) => EventSource::Embedded,
    }
}

fn load_str_config(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn load_i32_config(name: &str) -> Option<i32> {
    match env::var(name) {
        Ok(value) => {
            Some(value.parse().unwrap_or_else(|_| {
                panic!("Invalid config '{}'. Expected an integer number.", name)
            }))
        }
        Err(_) => None,
    }
}

fn load_u32_config(name: &str) -> Option<u32> {
    match env::var(name) {
        Ok(value) => Some(value.parse().unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected a non-negative integer number.",
                name
            )
        })),
        Err(_) => None,
    }
}

fn parse_event_type(value: &str) -> EventTypeFilter {
    if value.trim().eq_ignore_ascii_case("all") {
        return EventTypeFilter::All;
    }

    EventType::from_str(value.trim())
        .map(EventTypeFilter::Only)
        .unwrap_or_else(|_| panic!("Invalid config 'EVENT_TYPE'. Unknown event type '{}'", value))
}

/// `Category=id;Other category=id`
fn parse_institutions(value: &str) -> Vec<(String, String)> {
    value
        .split(';')
        .filter(|pair| !pair.trim().is_empty())
        .map(|pair| {
            let (category, id) = pair.split_once('=').unwrap_or_else(|| {
                panic!(
                    "Invalid config 'INSTITUTIONS'. Expected 'Category=institution' but got '{}'",
                    pair
                )
            });

            (category.trim().to_string(), id.trim().to_string())
        })
        .collect()
}

/// Repeated ids are kept once, so they don't toggle the event back off.
fn parse_event_ids(value: &str) -> Vec<EventId> {
    value
        .split(',')
        .filter(|id| !id.trim().is_empty())
        .map(|id| {
            EventId(id.trim().parse().unwrap_or_else(|_| {
                panic!("Invalid config 'SELECTED_EVENTS'. '{}' is not an event id", id)
            }))
        })
        .unique()
        .collect()
}
