use crate::events::api::EventSource;
use crate::events::EventId;
use crate::filter::EventTypeFilter;
use crate::session::Action;
use std::path::PathBuf;

#[derive(Debug)]
pub struct Config {
    pub debug_config: DebugConfig,
    pub events_source: EventSource,
    pub fetch_max_retries: u32,
    pub filter: FilterConfig,
    pub selected_events: Vec<EventId>,
    pub export_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct DebugConfig {
    pub event_limit: Option<i32>,
}

/// Filters applied before anything is listed. Unset values keep the defaults.
#[derive(Debug, Default)]
pub struct FilterConfig {
    pub city: Option<String>,
    pub query: Option<String>,
    pub event_type: Option<EventTypeFilter>,
    /// (category, institution id) pairs
    pub institutions: Vec<(String, String)>,
}

impl Config {
    pub fn initial_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();

        if let Some(city) = &self.filter.city {
            actions.push(Action::SelectCity(city.to_string()));
        }
        if let Some(query) = &self.filter.query {
            actions.push(Action::SetQuery(query.to_string()));
        }
        if let Some(event_type) = self.filter.event_type {
            actions.push(Action::SetEventType(event_type));
        }

        actions.extend(
            self.filter
                .institutions
                .iter()
                .map(|(category, id)| Action::SelectInstitution {
                    category: category.to_string(),
                    choice: id.as_str().into(),
                }),
        );
        actions.extend(self.selected_events.iter().copied().map(Action::ToggleEvent));

        actions
    }
}
