use super::bridge::{BridgeError, CalendarBridge, CalendarEntry};
use icalendar::{Calendar, Component, EventLike};
use std::path::PathBuf;
use tracing::{debug, info};

const UID_DOMAIN: &str = "culturalcalendar";

/// Writes exported events to an iCalendar file that any calendar app can import.
pub struct IcsFileBridge {
    path: PathBuf,
    entries: Vec<icalendar::Event>,
    connected: bool,
}

impl IcsFileBridge {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
            connected: false,
        }
    }

    pub fn render(&self) -> String {
        let mut calendar = Calendar::new();

        for entry in &self.entries {
            calendar.push(entry.clone());
        }

        calendar.done().to_string()
    }

    fn to_ics_event(entry: &CalendarEntry) -> icalendar::Event {
        let mut event = icalendar::Event::new();

        event
            .uid(&format!("{}@{}", entry.event_id, UID_DOMAIN))
            .summary(&entry.title)
            .description(&entry.description)
            .location(&entry.location)
            .starts(entry.start)
            .ends(entry.end);

        if let Some(link) = &entry.link {
            event.add_property("URL", link);
        }

        event.done()
    }
}

impl CalendarBridge for IcsFileBridge {
    async fn connect(&mut self) -> Result<(), BridgeError> {
        self.connected = true;
        Ok(())
    }

    async fn insert_event(&mut self, entry: &CalendarEntry) -> Result<(), BridgeError> {
        if !self.connected {
            return Err(BridgeError::Unauthorized(
                "the calendar file was not opened".to_string(),
            ));
        }

        debug!("Adding '{}' to the calendar", entry.title);
        self.entries.push(Self::to_ics_event(entry));

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn finish(&mut self) -> Result<(), BridgeError> {
        tokio::fs::write(&self.path, self.render()).await?;

        info!("Wrote {} events", self.entries.len());
        self.entries.clear();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventId;
    use chrono::NaiveDate;

    fn entry() -> CalendarEntry {
        let day = NaiveDate::from_ymd_opt(2025, 7, 27).unwrap();

        CalendarEntry {
            event_id: EventId(4),
            title: "Ancient Egyptian Art".to_string(),
            description: "Symbols and sacred meanings".to_string(),
            location: "The Met".to_string(),
            start: day.and_hms_opt(14, 0, 0).unwrap(),
            end: day.and_hms_opt(15, 30, 0).unwrap(),
            link: Some("https://www.metmuseum.org/events".to_string()),
        }
    }

    #[test_log::test(tokio::test)]
    async fn should_render_inserted_entries() {
        let mut bridge = IcsFileBridge::new("unused.ics");
        bridge.connect().await.unwrap();

        bridge.insert_event(&entry()).await.unwrap();

        let ics = bridge.render();

        assert!(ics.contains("BEGIN:VEVENT"), "{}", ics);
        assert!(ics.contains("UID:4@culturalcalendar"), "{}", ics);
        assert!(ics.contains("SUMMARY:Ancient Egyptian Art"), "{}", ics);
        assert!(ics.contains("DTSTART:20250727T140000"), "{}", ics);
        assert!(ics.contains("DTEND:20250727T153000"), "{}", ics);
        assert!(ics.contains("URL:https://www.metmuseum.org/events"), "{}", ics);
    }

    #[test_log::test(tokio::test)]
    async fn when_not_connected_should_refuse_inserts() {
        let mut bridge = IcsFileBridge::new("unused.ics");

        let result = bridge.insert_event(&entry()).await;

        assert!(matches!(result, Err(BridgeError::Unauthorized(_))));
    }
}
