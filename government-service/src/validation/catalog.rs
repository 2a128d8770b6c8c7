/// Vaccines accepted when no catalog is configured.
pub const DEFAULT_VACCINES: [&str; 4] = ["Pfizer", "Astra", "Sinopharm", "Sinovac"];

/// Fixed set of vaccine names a reservation may request. Matching is exact
/// and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaccineCatalog {
    names: Vec<String>,
}

impl VaccineCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self { names: Vec::new() };
        for name in names {
            let name = name.into().trim().to_string();
            if !name.is_empty() && !catalog.names.contains(&name) {
                catalog.names.push(name);
            }
        }
        catalog
    }

    /// Parse a comma separated list such as `Pfizer,Astra`.
    pub fn parse_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn contains(&self, vaccine_name: &str) -> bool {
        self.names.iter().any(|name| name == vaccine_name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for VaccineCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_VACCINES)
    }
}
