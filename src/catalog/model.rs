use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Institution {
    pub id: String,
    pub name: String,
}

impl Institution {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InstitutionCategory {
    pub name: String,
    pub icon: String,
    pub institutions: Vec<Institution>,
}

impl InstitutionCategory {
    pub fn new(name: &str, icon: &str, institutions: Vec<Institution>) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            institutions,
        }
    }
}

/// Venues grouped into categories, in display order.
///
/// Lookups by institution id go through an index built once on construction,
/// so resolving a name does not rescan the nested categories.
#[derive(Debug, Clone)]
pub struct InstitutionCatalog {
    categories: Vec<InstitutionCategory>,
    index: HashMap<String, (usize, usize)>,
}

impl InstitutionCatalog {
    pub fn new(categories: Vec<InstitutionCategory>) -> Self {
        let mut index = HashMap::new();

        for (category_pos, category) in categories.iter().enumerate() {
            for (institution_pos, institution) in category.institutions.iter().enumerate() {
                if index.contains_key(&institution.id) {
                    warn!(
                        "Institution '{}' is listed more than once (keeping the first one)",
                        institution.id
                    );
                    continue;
                }

                index.insert(institution.id.clone(), (category_pos, institution_pos));
            }
        }

        Self { categories, index }
    }

    pub fn category(&self, name: &str) -> Option<&InstitutionCategory> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn institution(&self, id: &str) -> Option<&Institution> {
        self.index
            .get(id)
            .map(|&(category, institution)| &self.categories[category].institutions[institution])
    }

    /// Name of the category the institution belongs to.
    pub fn category_of(&self, id: &str) -> Option<&str> {
        self.index
            .get(id)
            .map(|&(category, _)| self.categories[category].name.as_str())
    }

    /// Display name of an institution, or the raw id when it is not catalogued.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.institution(id)
            .map(|institution| institution.name.as_str())
            .unwrap_or(id)
    }

    /// `icon name (category)` for catalogued institutions, the raw id otherwise.
    pub fn describe(&self, id: &str) -> String {
        let category = self.category_of(id).and_then(|name| self.category(name));

        match category {
            Some(category) => format!("{} {} ({})", category.icon, self.display_name(id), category.name),
            None => id.to_string(),
        }
    }
}

impl Default for InstitutionCatalog {
    fn default() -> Self {
        super::defaults::default_catalog()
    }
}
