use super::model::{Institution, InstitutionCatalog, InstitutionCategory};

/// Cities the city filter can select, the first one being the default.
pub const SUPPORTED_CITIES: [&str; 7] = [
    "New York",
    "Los Angeles",
    "San Francisco",
    "London",
    "Washington DC",
    "Boston",
    "Chicago",
];

pub fn default_city() -> &'static str {
    SUPPORTED_CITIES[0]
}

pub fn default_catalog() -> InstitutionCatalog {
    InstitutionCatalog::new(vec![
        InstitutionCategory::new(
            "Art Museums",
            "🖼️",
            vec![
                Institution::new("moma", "MoMA"),
                Institution::new("met", "The Met"),
                Institution::new("frick", "Frick Collection"),
            ],
        ),
        InstitutionCategory::new(
            "Libraries & Literary",
            "📚",
            vec![
                Institution::new("ny_society_library", "NY Society Library"),
                Institution::new("grolier_club", "Grolier Club"),
                Institution::new("poetry_society", "Poetry Society"),
                Institution::new("rizzoli", "Rizzoli Bookstore"),
            ],
        ),
        InstitutionCategory::new(
            "History & Culture",
            "🏛️",
            vec![
                Institution::new("womens_history", "Women's History"),
                Institution::new("ny_historical", "NY Historical Society"),
                Institution::new("asia_society", "Asia Society"),
                Institution::new("americas_society", "Americas Society"),
            ],
        ),
        InstitutionCategory::new(
            "Cultural Institutes",
            "🇫🇷",
            vec![
                Institution::new("albertine", "Albertine"),
                Institution::new("lalliance", "L'Alliance"),
            ],
        ),
        InstitutionCategory::new(
            "Arts & Social Clubs",
            "🎭",
            vec![
                Institution::new("national_arts_club", "National Arts Club"),
                Institution::new("explorers_club", "Explorer's Club"),
            ],
        ),
        InstitutionCategory::new(
            "Community",
            "🏘️",
            vec![Institution::new("morningside", "Morningside Institute")],
        ),
    ])
}
