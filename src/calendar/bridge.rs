use crate::catalog::InstitutionCatalog;
use crate::events::{Event, EventId};
use chrono::{Duration, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::warn;

const MIN_EVENT_LENGTH_MINUTES: i64 = 60;
const MAX_EVENT_LENGTH_MINUTES: i64 = 120;
const TIME_FORMATS: [&str; 2] = ["%I:%M %p", "%H:%M"];
// Start assumed for events without a readable time
const DEFAULT_START_HOUR: u32 = 19;

lazy_static! {
    static ref DURATION_REGEX: Regex =
        Regex::new(r"(?i)(\d+)\s*(minutes?|mins?|hours?|hrs?|h)\b")
            .expect("Failed to create duration regex");
}

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("calendar authentication failed: {0}")]
    Unauthorized(String),
    #[error("could not insert event {0}: {1}")]
    Insert(EventId, String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// External calendar that selected events are exported to.
#[allow(async_fn_in_trait)]
pub trait CalendarBridge {
    async fn connect(&mut self) -> Result<(), BridgeError>;

    async fn insert_event(&mut self, entry: &CalendarEntry) -> Result<(), BridgeError>;

    /// Called once after every insert of an export.
    async fn finish(&mut self) -> Result<(), BridgeError> {
        Ok(())
    }
}

/// An event as it lands in a calendar, with a concrete time window.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub event_id: EventId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub link: Option<String>,
}

impl CalendarEntry {
    /// `None` when the event has no date to place it on.
    pub fn from_event(event: &Event, catalog: &InstitutionCatalog) -> Option<Self> {
        let date = event.date?;
        let start = date.and_time(parse_start_time(&event.time));
        let end = start + implied_length(event.duration.as_deref());

        let location = event
            .venue
            .clone()
            .unwrap_or_else(|| catalog.display_name(&event.institution).to_string());

        Some(Self {
            event_id: event.id,
            title: event.title.to_string(),
            description: event.description.to_string(),
            location,
            start,
            end,
            link: event.link.clone(),
        })
    }
}

fn parse_start_time(time: &str) -> NaiveTime {
    let time = time.trim();

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(time, format).ok())
        .unwrap_or_else(|| {
            if !time.is_empty() {
                warn!("Unrecognized start time '{}' (using the default)", time);
            }
            NaiveTime::from_hms_opt(DEFAULT_START_HOUR, 0, 0).unwrap_or_default()
        })
}

/// Length of the calendar slot, always between one and two hours.
fn implied_length(duration: Option<&str>) -> Duration {
    let minutes = duration
        .and_then(|duration| DURATION_REGEX.captures(duration))
        .and_then(|captures| {
            let amount: i64 = captures[1].parse().ok()?;
            let unit = captures[2].to_lowercase();

            if unit.starts_with('h') {
                Some(amount.checked_mul(60).unwrap_or(MAX_EVENT_LENGTH_MINUTES))
            } else {
                Some(amount)
            }
        })
        .unwrap_or(MAX_EVENT_LENGTH_MINUTES);

    Duration::minutes(minutes.clamp(MIN_EVENT_LENGTH_MINUTES, MAX_EVENT_LENGTH_MINUTES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event() -> Event {
        Event::new(4, "Ancient Egyptian Art", "met")
            .with_schedule(NaiveDate::from_ymd_opt(2025, 7, 27).unwrap(), "2:00 PM")
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 27)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test_log::test]
    fn should_start_at_event_time_and_default_to_two_hours() {
        let entry = CalendarEntry::from_event(&event(), &InstitutionCatalog::default()).unwrap();

        assert_eq!(entry.start, at(14, 0));
        assert_eq!(entry.end, at(16, 0));
        assert_eq!(entry.location, "The Met");
    }

    #[test_log::test]
    fn should_use_the_event_duration_within_bounds() {
        let catalog = InstitutionCatalog::default();

        let ninety = CalendarEntry::from_event(&event().with_duration("90 minutes"), &catalog).unwrap();
        let three_hours = CalendarEntry::from_event(&event().with_duration("3 hours"), &catalog).unwrap();
        let short = CalendarEntry::from_event(&event().with_duration("30 min"), &catalog).unwrap();
        let all_day = CalendarEntry::from_event(&event().with_duration("All day"), &catalog).unwrap();

        assert_eq!(ninety.end, at(15, 30));
        assert_eq!(three_hours.end, at(16, 0));
        assert_eq!(short.end, at(15, 0));
        assert_eq!(all_day.end, at(16, 0));
    }

    #[test_log::test]
    fn huge_durations_should_be_capped_at_two_hours() {
        let catalog = InstitutionCatalog::default();

        let hours =
            CalendarEntry::from_event(&event().with_duration("200000000000000000 hours"), &catalog)
                .unwrap();
        let minutes =
            CalendarEntry::from_event(&event().with_duration("99999999999999999999 minutes"), &catalog)
                .unwrap();

        assert_eq!(hours.end, at(16, 0));
        assert_eq!(minutes.end, at(16, 0));
    }

    #[test_log::test]
    fn should_accept_24_hour_times_and_fall_back_to_evening() {
        let catalog = InstitutionCatalog::default();
        let date = NaiveDate::from_ymd_opt(2025, 7, 27).unwrap();

        let evening = CalendarEntry::from_event(&event().with_schedule(date, "18:45"), &catalog).unwrap();
        let unknown = CalendarEntry::from_event(&event().with_schedule(date, "TBA"), &catalog).unwrap();

        assert_eq!(evening.start, at(18, 45));
        assert_eq!(unknown.start, at(19, 0));
    }

    #[test_log::test]
    fn when_event_has_no_date_should_not_build_an_entry() {
        let undated = Event::new(5, "Someday", "moma");

        assert!(CalendarEntry::from_event(&undated, &InstitutionCatalog::default()).is_none());
    }

    #[test_log::test]
    fn venue_should_take_precedence_over_institution_name() {
        let entry = CalendarEntry::from_event(
            &event().with_venue("Temple of Dendur"),
            &InstitutionCatalog::default(),
        )
        .unwrap();

        assert_eq!(entry.location, "Temple of Dendur");
    }
}
