use crate::calendar::ExportReport;
use crate::catalog::defaults::SUPPORTED_CITIES;
use crate::events::{Event, EventId, EventStore};
use crate::filter::{filter_events, EventTypeFilter, FilterState, InstitutionChoice};
use crate::selection::SelectionState;
use tracing::{debug, info, warn};

/// User inputs that change the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectCity(String),
    SetQuery(String),
    SetEventType(EventTypeFilter),
    SelectInstitution {
        category: String,
        choice: InstitutionChoice,
    },
    ResetFilters,
    ToggleEvent(EventId),
    ClearSelection,
    CalendarConnected,
    CalendarDisconnected,
    ExportCompleted(ExportReport),
}

/// Everything a running session holds besides the loaded data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub filter: FilterState,
    pub selection: SelectionState,
    pub calendar_connected: bool,
}

impl AppState {
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::SelectCity(city) => {
                if !SUPPORTED_CITIES.contains(&city.as_str()) {
                    warn!("'{}' is not a supported city", city);
                }
                self.filter = self.filter.with_city(&city);
            }
            Action::SetQuery(query) => self.filter = self.filter.with_query(&query),
            Action::SetEventType(event_type) => {
                self.filter = self.filter.with_event_type(event_type)
            }
            Action::SelectInstitution { category, choice } => {
                self.filter = self.filter.with_institution(&category, choice)
            }
            Action::ResetFilters => self.filter = FilterState::new(&self.filter.city),
            Action::ToggleEvent(id) => {
                let selected = self.selection.toggle(id);
                debug!("Event {} selected: {}", id, selected);
            }
            Action::ClearSelection => self.selection.clear(),
            Action::CalendarConnected => self.calendar_connected = true,
            Action::CalendarDisconnected => self.calendar_connected = false,
            Action::ExportCompleted(report) => {
                self.selection.remove_all(&report.exported);

                if report.failed.is_empty() {
                    info!("Exported {} events", report.exported.len());
                } else {
                    warn!(
                        "Exported {} events, {} failed and stay selected",
                        report.exported.len(),
                        report.failed.len()
                    );
                }
            }
        }

        self
    }

    pub fn visible_events<'a>(&self, store: &'a EventStore) -> Vec<&'a Event> {
        filter_events(store.events(), &self.filter)
    }
}
