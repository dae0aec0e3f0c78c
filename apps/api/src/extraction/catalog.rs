//! Section catalog — the fixed list of canonical CV section names and the
//! header synonyms that identify each one in free-form text.

/// One catalog entry: a canonical section name plus the ordered header
/// synonyms that count as that section's heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub synonyms: Vec<String>,
}

impl CatalogEntry {
    pub fn new(name: &str, synonyms: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered, immutable list of the sections the extractor looks for.
///
/// Order is significant: extraction results echo the catalog back
/// key-for-key in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCatalog {
    entries: Vec<CatalogEntry>,
}

impl SectionCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The built-in catalog used by the service.
    pub fn standard() -> Self {
        Self::new(vec![
            CatalogEntry::new("Education", &["Education", "Qualifications"]),
            CatalogEntry::new("Experience", &["Experience", "Work History"]),
            CatalogEntry::new("Projects", &["Projects", "Portfolio"]),
            CatalogEntry::new("Achievements", &["Achievements", "Awards"]),
            CatalogEntry::new("Skills", &["Skills", "Competencies"]),
        ])
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
