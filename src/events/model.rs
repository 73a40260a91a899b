use chrono::NaiveDate;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub u64);

impl Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    /// Id into the institution catalog
    pub institution: String,
    pub venue: Option<String>,
    pub date: Option<NaiveDate>,
    /// Local wall-clock time, as displayed (e.g. "2:00 PM")
    pub time: String,
    pub kind: Option<EventType>,
    pub description: String,
    pub city: Option<String>,
    pub price: Option<String>,
    pub duration: Option<String>,
    pub link: Option<String>,
}

impl Event {
    pub fn new(id: u64, title: &str, institution: &str) -> Self {
        Self {
            id: EventId(id),
            title: title.to_string(),
            institution: institution.to_string(),
            venue: None,
            date: None,
            time: String::new(),
            kind: None,
            description: String::new(),
            city: None,
            price: None,
            duration: None,
            link: None,
        }
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    pub fn with_kind(mut self, kind: EventType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_schedule(mut self, date: NaiveDate, time: &str) -> Self {
        self.date = Some(date);
        self.time = time.to_string();
        self
    }

    pub fn with_venue(mut self, venue: &str) -> Self {
        self.venue = Some(venue.to_string());
        self
    }

    pub fn with_duration(mut self, duration: &str) -> Self {
        self.duration = Some(duration.to_string());
        self
    }

    pub fn with_price(mut self, price: &str) -> Self {
        self.price = Some(price.to_string());
        self
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }
}

/// Tags are matched exactly: `"lecture"` or `"Lectures"` are not `lectures`.
#[derive(
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum EventType {
    Museums,
    Exhibitions,
    Lectures,
    Talks,
    Tours,
    Panels,
    Readings,
    Discussions,
    Music,
    Workshops,
}

impl EventType {
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Museums => "Museums",
            EventType::Exhibitions => "Exhibitions",
            EventType::Lectures => "Lectures",
            EventType::Talks => "Talks",
            EventType::Tours => "Tours",
            EventType::Panels => "Panels",
            EventType::Readings => "Readings",
            EventType::Discussions => "Discussions",
            EventType::Music => "Music & Performance",
            EventType::Workshops => "Workshops",
        }
    }
}
