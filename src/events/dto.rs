use super::model::{Event, EventId, EventType};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_either::SingleOrVec;
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

/// Either `{"events": [...]}` or a bare array of events.
///
/// Records stay as raw values so a single malformed record cannot fail the document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EventsDocument {
    Wrapped { events: Vec<Value> },
    Bare(Vec<Value>),
}

impl EventsDocument {
    pub fn into_models(self) -> Vec<Event> {
        let records = match self {
            EventsDocument::Wrapped { events } => events,
            EventsDocument::Bare(events) => events,
        };

        records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<EventResponse>(record) {
                Ok(response) => response.to_model(),
                Err(e) => {
                    warn!("Skipping unreadable event record: {}", e);
                    None
                }
            })
            .collect()
    }
}

// Every field is lenient: a wrong type degrades to an empty value instead of failing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EventResponse {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Option<u64>,
    #[serde(deserialize_with = "deserialize_str")]
    pub title: String,
    #[serde(alias = "institution", deserialize_with = "deserialize_str")]
    pub museum: String,
    #[serde(deserialize_with = "deserialize_opt_str")]
    pub venue: Option<String>,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: Option<NaiveDate>,
    #[serde(deserialize_with = "deserialize_str")]
    pub time: String,
    #[serde(rename = "type", deserialize_with = "deserialize_str")]
    pub event_type: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub description: String,
    #[serde(deserialize_with = "deserialize_opt_str")]
    pub city: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_str")]
    pub price: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_str")]
    pub duration: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_str")]
    pub link: Option<String>,
}

impl EventResponse {
    #[tracing::instrument(skip(self), fields(self.title = %self.title))]
    pub fn to_model(&self) -> Option<Event> {
        let Some(id) = self.id else {
            warn!("Event has no usable id (skipping it)");
            return None;
        };

        let kind = EventType::from_str(self.event_type.trim()).ok();
        if kind.is_none() && !self.event_type.is_empty() {
            warn!("Unknown event type '{}'", self.event_type);
        }

        Some(Event {
            id: EventId(id),
            title: self.title.to_string(),
            institution: self.museum.to_string(),
            venue: self.venue.clone(),
            date: self.date,
            time: self.time.to_string(),
            kind,
            description: self.description.to_string(),
            city: self.city.clone(),
            price: self.price.clone(),
            duration: self.duration.clone(),
            link: self.link.clone(),
        })
    }
}

fn deserialize_id<'de, D>(d: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn deserialize_opt_str<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// Accepts a single paragraph or a list of paragraphs.
fn deserialize_text<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(d)?;
    Ok(match SingleOrVec::<String>::deserialize(value) {
        Ok(SingleOrVec::Single(text)) => text,
        Ok(SingleOrVec::Vec(paragraphs)) => paragraphs.join("\n\n"),
        Err(_) => String::new(),
    })
}

fn deserialize_date<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .inspect_err(|err| warn!("Failed to parse date '{}'. Err: {err}", s))
            .ok(),
        _ => None,
    })
}
