//! Heuristic CV section extraction.
//!
//! Pure, synchronous, stateless: raw text plus a section catalog in,
//! ordered name → content mapping out. No I/O, no errors — a section that
//! cannot be found is reported as [`SectionContent::NotFound`].

pub mod catalog;
pub mod scanner;

pub use catalog::{CatalogEntry, SectionCatalog};
pub use scanner::{extract_all, extract_one, ExtractedSections, SectionContent};
