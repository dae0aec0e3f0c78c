//! Section scanner — partitions free-form CV text into labeled section
//! bodies.
//!
//! A section starts at a case-insensitive occurrence of one of its header
//! synonyms and ends at the next line that begins with a capital letter
//! (the start of an unrelated header), or at end of input if no such line
//! follows. The scan is two-phase: keyword occurrences and boundary
//! positions are each located in a single regex pass, then paired up.
//! Absence of a section is a normal return value, never an error.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::extraction::catalog::SectionCatalog;

/// A line beginning with an ASCII capital marks the start of the next
/// section; the offset of the preceding newline is the cut point.
static BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n[A-Z]").expect("Failed to compile BOUNDARY_RE")
});

/// Outcome of extracting a single section: the trimmed body, or absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    Found(String),
    NotFound,
}

impl SectionContent {
    pub fn body(&self) -> Option<&str> {
        match self {
            SectionContent::Found(body) => Some(body),
            SectionContent::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SectionContent::Found(_))
    }
}

// Found serializes as the body string, NotFound as null.
impl Serialize for SectionContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SectionContent::Found(body) => serializer.serialize_str(body),
            SectionContent::NotFound => serializer.serialize_none(),
        }
    }
}

/// Extraction result: one entry per catalog entry, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSections {
    sections: Vec<(String, SectionContent)>,
}

impl ExtractedSections {
    pub fn get(&self, name: &str) -> Option<&SectionContent> {
        self.sections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, content)| content)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SectionContent)> {
        self.sections.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn found_count(&self) -> usize {
        self.sections.iter().filter(|(_, c)| c.is_found()).count()
    }
}

// Serializes as a JSON object whose keys keep catalog order.
impl Serialize for ExtractedSections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, content) in &self.sections {
            map.serialize_entry(name, content)?;
        }
        map.end()
    }
}

/// Extracts every catalog section from `text` independently.
///
/// Extraction never consumes text, so the same span may back more than one
/// section when synonyms overlap; that is accepted behavior.
pub fn extract_all(text: &str, catalog: &SectionCatalog) -> ExtractedSections {
    let boundaries = boundary_offsets(text);
    ExtractedSections {
        sections: catalog
            .entries()
            .iter()
            .map(|entry| {
                (
                    entry.name.clone(),
                    scan(text, &entry.synonyms, &boundaries),
                )
            })
            .collect(),
    }
}

/// Extracts a single section identified by any of `keywords`.
pub fn extract_one<S: AsRef<str>>(text: &str, keywords: &[S]) -> SectionContent {
    scan(text, keywords, &boundary_offsets(text))
}

/// Offsets of every `\n` that is followed by an ASCII capital, ascending.
fn boundary_offsets(text: &str) -> Vec<usize> {
    BOUNDARY_RE.find_iter(text).map(|m| m.start()).collect()
}

/// Case-insensitive alternation over the literal keywords, in the given
/// order (leftmost-first). None when no usable keyword remains.
fn keyword_pattern<S: AsRef<str>>(keywords: &[S]) -> Option<Regex> {
    let alternation = keywords
        .iter()
        .map(|k| k.as_ref())
        .filter(|k| !k.is_empty())
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    if alternation.is_empty() {
        return None;
    }
    RegexBuilder::new(&alternation)
        .case_insensitive(true)
        .build()
        .ok()
}

/// Walks keyword occurrences in text order. For each occurrence, spans to
/// successive boundaries are tried until one trims non-empty; with no
/// boundary left the span runs to end of input. The first non-empty span
/// wins. Whitespace-only spans are skipped, never returned — this is what
/// keeps a body whose own first line starts with a capital (e.g.
/// "Skills\nPython, ...") from collapsing to an empty capture.
fn scan<S: AsRef<str>>(text: &str, keywords: &[S], boundaries: &[usize]) -> SectionContent {
    let Some(pattern) = keyword_pattern(keywords) else {
        return SectionContent::NotFound;
    };

    for occurrence in pattern.find_iter(text) {
        let start = occurrence.end();
        let next = boundaries.partition_point(|&b| b < start);
        for &cut in &boundaries[next..] {
            let span = text[start..cut].trim();
            if !span.is_empty() {
                return SectionContent::Found(span.to_string());
            }
        }
        let tail = text[start..].trim();
        if !tail.is_empty() {
            return SectionContent::Found(tail.to_string());
        }
    }

    SectionContent::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    // Résumé-shaped fixture in the form the heuristic targets: headers at
    // column 0, bodies on the following lines.
    const SAMPLE_CV: &str = "Education\n\
        Bachelor of Science in Computer Science\n\
        XYZ University, 2020\n\
        \n\
        Experience\n\
        Software Engineer at ABC Corp\n\
        Worked on distributed inference pipelines.\n\
        \n\
        Projects\n\
        AI-powered chatbot development\n\
        \n\
        Achievements\n\
        Employee of the Year, 2021\n\
        \n\
        Skills\n\
        Python, Machine Learning, NLP, Swift\n";

    fn body(content: &SectionContent) -> &str {
        content.body().expect("expected Found")
    }

    #[test]
    fn education_body_stops_before_the_next_section() {
        let result = extract_one(SAMPLE_CV, &["Education", "Qualifications"]);
        let body = body(&result);
        assert!(body.contains("Bachelor of Science in Computer Science"));
        assert!(!body.contains("Software Engineer at ABC Corp"));
    }

    #[test]
    fn absent_keywords_yield_not_found() {
        let result = extract_one(SAMPLE_CV, &["Certifications", "Licenses"]);
        assert_eq!(result, SectionContent::NotFound);
    }

    #[test]
    fn body_whose_first_line_is_capitalized_is_still_extracted() {
        let result = extract_one("Skills\nPython, Machine Learning", &["Skills"]);
        assert_eq!(
            result,
            SectionContent::Found("Python, Machine Learning".to_string())
        );
    }

    #[test]
    fn last_section_with_no_later_boundary_runs_to_end_of_input() {
        let result = extract_one(SAMPLE_CV, &["Skills", "Competencies"]);
        assert_eq!(
            result,
            SectionContent::Found("Python, Machine Learning, NLP, Swift".to_string())
        );
    }

    #[test]
    fn keyword_followed_by_content_and_no_boundary_at_all() {
        let result = extract_one("skills: python, rust and sql", &["Skills"]);
        assert_eq!(
            result,
            SectionContent::Found(": python, rust and sql".to_string())
        );
    }

    #[test]
    fn keyword_matching_is_case_insensitive() {
        let result = extract_one("EDUCATION\nself-taught, mostly", &["Education"]);
        assert_eq!(
            result,
            SectionContent::Found("self-taught, mostly".to_string())
        );
    }

    #[test]
    fn whitespace_only_tail_is_not_returned() {
        let result = extract_one("intro text\nSkills   \n   ", &["Skills"]);
        assert_eq!(result, SectionContent::NotFound);
    }

    #[test]
    fn empty_text_yields_not_found() {
        assert_eq!(extract_one("", &["Education"]), SectionContent::NotFound);
    }

    #[test]
    fn empty_keyword_list_yields_not_found() {
        let none: [&str; 0] = [];
        assert_eq!(extract_one(SAMPLE_CV, &none), SectionContent::NotFound);
        assert_eq!(extract_one(SAMPLE_CV, &["", ""]), SectionContent::NotFound);
    }

    #[test]
    fn keywords_are_matched_literally_without_word_boundaries() {
        // "experience" mid-sentence wins over the later header line; the
        // heuristic accepts this kind of sloppiness.
        let text = "Ten years of experience across teams\nExperience\nEngineer at Initech";
        let result = extract_one(text, &["Experience"]);
        assert_eq!(
            result,
            SectionContent::Found("across teams".to_string())
        );
    }

    #[test]
    fn extract_all_returns_exactly_the_catalog_names_in_order() {
        let catalog = SectionCatalog::standard();
        let sections = extract_all(SAMPLE_CV, &catalog);
        let names: Vec<&str> = sections.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["Education", "Experience", "Projects", "Achievements", "Skills"]
        );

        // Same key set even when nothing matches.
        let empty = extract_all("", &catalog);
        let empty_names: Vec<&str> = empty.iter().map(|(n, _)| n).collect();
        assert_eq!(names, empty_names);
        assert_eq!(empty.found_count(), 0);
    }

    #[test]
    fn extract_all_finds_every_sample_section() {
        let sections = extract_all(SAMPLE_CV, &SectionCatalog::standard());
        assert_eq!(sections.found_count(), 5);
        assert!(body(sections.get("Education").unwrap())
            .contains("Bachelor of Science in Computer Science"));
        assert!(body(sections.get("Experience").unwrap()).contains("Software Engineer at ABC Corp"));
        assert!(body(sections.get("Projects").unwrap()).contains("AI-powered chatbot development"));
        assert!(body(sections.get("Achievements").unwrap()).contains("Employee of the Year"));
        assert!(body(sections.get("Skills").unwrap()).contains("Python"));
    }

    #[test]
    fn sections_may_overlap_across_catalog_entries() {
        // "projects" also occurs inside the Experience body; both entries
        // extract from the same region without interfering.
        let text = "Experience\nLed projects at ABC Corp\n";
        let sections = extract_all(text, &SectionCatalog::standard());
        assert!(body(sections.get("Experience").unwrap()).contains("Led projects at ABC Corp"));
        assert!(sections.get("Projects").unwrap().is_found());
    }

    #[test]
    fn extraction_is_idempotent() {
        let catalog = SectionCatalog::standard();
        let first = extract_all(SAMPLE_CV, &catalog);
        let second = extract_all(SAMPLE_CV, &catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn serializes_as_an_ordered_object_with_null_for_missing() {
        let catalog = SectionCatalog::new(vec![
            crate::extraction::catalog::CatalogEntry::new("Skills", &["Skills"]),
            crate::extraction::catalog::CatalogEntry::new("Awards", &["Awards"]),
        ]);
        let sections = extract_all("Skills\nrust, go", &catalog);
        let json = serde_json::to_string(&sections).unwrap();
        assert_eq!(json, r#"{"Skills":"rust, go","Awards":null}"#);
    }
}
