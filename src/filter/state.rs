use crate::catalog::defaults::default_city;
use crate::events::EventType;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventTypeFilter {
    #[default]
    All,
    Only(EventType),
}

impl Display for EventTypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventTypeFilter::All => write!(f, "all"),
            EventTypeFilter::Only(kind) => write!(f, "{}", kind),
        }
    }
}

/// Institution picked in one category's selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InstitutionChoice {
    #[default]
    All,
    Only(String),
}

impl From<&str> for InstitutionChoice {
    fn from(value: &str) -> Self {
        match value {
            "" | "all" => InstitutionChoice::All,
            id => InstitutionChoice::Only(id.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub city: String,
    pub query: String,
    pub event_type: EventTypeFilter,
    /// Category name to the institution chosen in that category
    pub institutions: BTreeMap<String, InstitutionChoice>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(default_city())
    }
}

impl FilterState {
    pub fn new(city: &str) -> Self {
        Self {
            city: city.to_string(),
            query: String::new(),
            event_type: EventTypeFilter::All,
            institutions: BTreeMap::new(),
        }
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = city.to_string();
        self
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    pub fn with_event_type(mut self, event_type: EventTypeFilter) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn with_institution(mut self, category: &str, choice: impl Into<InstitutionChoice>) -> Self {
        self.institutions.insert(category.to_string(), choice.into());
        self
    }

    /// Institutions chosen across every category; empty when nothing narrows the list.
    pub fn active_institutions(&self) -> BTreeSet<&str> {
        self.institutions
            .values()
            .filter_map(|choice| match choice {
                InstitutionChoice::All => None,
                InstitutionChoice::Only(id) => Some(id.as_str()),
            })
            .collect()
    }
}
