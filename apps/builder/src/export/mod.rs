//! Document Exporter: lays a record snapshot out on pages and writes a PDF.
//!
//! Flow: `compose_pages` (flowing layout) → `pdf::write_pdf` (in-memory bytes).
//! Nothing is handed to the caller until the whole document has been built.

pub mod handlers;
pub mod pdf;

use thiserror::Error;

use crate::layout::{FontFace, LaidOutPage, PageFlow, PageLayout, TextStyle};
use crate::models::resume::ResumeRecord;
use crate::preview::format_date_range;

const NAME: TextStyle = TextStyle::new(FontFace::HelveticaBold, 18.0);
const CONTACT: TextStyle = TextStyle::new(FontFace::Helvetica, 12.0);
const HEADING: TextStyle = TextStyle::new(FontFace::HelveticaBold, 14.0);
const ENTRY_TITLE: TextStyle = TextStyle::new(FontFace::HelveticaBold, 12.0);
const BODY: TextStyle = TextStyle::new(FontFace::Helvetica, 11.0);

const SECTION_GAP_PT: f32 = 12.0;
const ENTRY_GAP_PT: f32 = 6.0;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF construction failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("PDF serialization failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export task failed: {0}")]
    Task(String),
}

/// Builds the complete PDF for `record`.
pub fn export_pdf(record: &ResumeRecord, layout: &PageLayout) -> Result<Vec<u8>, ExportError> {
    let pages = compose_pages(record, layout);
    pdf::write_pdf(&pages, layout)
}

/// Lays out the personal block, then experience, education and skills.
///
/// The personal block is always present; list sections are skipped when empty.
pub fn compose_pages(record: &ResumeRecord, layout: &PageLayout) -> Vec<LaidOutPage> {
    let mut flow = PageFlow::new(layout);
    let info = &record.personal_info;

    if !info.name.trim().is_empty() {
        flow.text(&info.name, NAME);
        flow.gap(ENTRY_GAP_PT);
    }
    flow.text(&format!("Email: {}", info.email), CONTACT);
    flow.text(&format!("Phone: {}", info.phone), CONTACT);
    flow.text(&format!("Location: {}", info.location), CONTACT);
    flow.text(&format!("Title: {}", info.title), CONTACT);
    flow.text(&format!("Summary: {}", info.summary), CONTACT);

    if !record.experience.is_empty() {
        flow.gap(SECTION_GAP_PT);
        flow.text("Experience", HEADING);
        for entry in &record.experience {
            flow.gap(ENTRY_GAP_PT);
            flow.text(&joined(&entry.position, " at ", &entry.company), ENTRY_TITLE);
            if let Some(range) = format_date_range(&entry.start_date, &entry.end_date, entry.current) {
                flow.text(&range, BODY);
            }
            if !entry.description.trim().is_empty() {
                flow.text(&entry.description, BODY);
            }
        }
    }

    if !record.education.is_empty() {
        flow.gap(SECTION_GAP_PT);
        flow.text("Education", HEADING);
        for entry in &record.education {
            flow.gap(ENTRY_GAP_PT);
            flow.text(&joined(&entry.degree, " in ", &entry.field), ENTRY_TITLE);
            if !entry.institution.trim().is_empty() {
                flow.text(&format!("at {}", entry.institution), BODY);
            }
            if let Some(range) = format_date_range(&entry.start_date, &entry.end_date, entry.current) {
                flow.text(&range, BODY);
            }
        }
    }

    if !record.skills.is_empty() {
        flow.gap(SECTION_GAP_PT);
        flow.text("Skills", HEADING);
        flow.text(&record.skills.join(", "), BODY);
    }

    flow.finish()
}

/// `"{left}{sep}{right}"`, or whichever side is non-empty.
fn joined(left: &str, sep: &str, right: &str) -> String {
    match (left.trim().is_empty(), right.trim().is_empty()) {
        (false, false) => format!("{left}{sep}{right}"),
        (false, true) => left.to_string(),
        (true, false) => right.to_string(),
        (true, true) => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_page_layout;
    use crate::models::resume::{EducationEntry, EntryId, ExperienceEntry, PersonalInfo};

    fn all_text(pages: &[LaidOutPage]) -> Vec<String> {
        pages
            .iter()
            .flat_map(|p| p.lines.iter().map(|l| l.text.clone()))
            .collect()
    }

    fn personal_only() -> ResumeRecord {
        ResumeRecord {
            personal_info: PersonalInfo {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-0100".to_string(),
                location: "Berlin".to_string(),
                title: "Engineer".to_string(),
                summary: "Builds reliable systems.".to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_personal_block_only_when_lists_are_empty() {
        let layout = default_page_layout();
        let pages = compose_pages(&personal_only(), &layout);
        let text = all_text(&pages);

        assert_eq!(pages.len(), 1);
        assert_eq!(text[0], "Jane Doe");
        assert!(text.contains(&"Email: jane@example.com".to_string()));
        assert!(text.contains(&"Summary: Builds reliable systems.".to_string()));
        assert!(!text.contains(&"Experience".to_string()));
        assert!(!text.contains(&"Education".to_string()));
        assert!(!text.contains(&"Skills".to_string()));
    }

    #[test]
    fn test_sections_in_order_with_present_for_current() {
        let mut record = personal_only();
        record.experience.push(ExperienceEntry {
            id: EntryId::from("1"),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2022-03".to_string(),
            end_date: "2021-01".to_string(),
            current: true,
            description: "Owned the billing service.".to_string(),
        });
        record.education.push(EducationEntry {
            id: EntryId::from("2"),
            institution: "MIT".to_string(),
            degree: "BSc".to_string(),
            field: String::new(),
            start_date: "2015-09".to_string(),
            end_date: "2019-06".to_string(),
            current: false,
        });
        record.skills = vec!["Rust".to_string(), "SQL".to_string()];

        let text = all_text(&compose_pages(&record, &default_page_layout()));
        let pos = |needle: &str| text.iter().position(|t| t == needle).unwrap();

        assert!(pos("Experience") < pos("Engineer at Acme"));
        assert!(pos("Mar 2022 – Present") > pos("Engineer at Acme"));
        assert!(pos("Education") > pos("Owned the billing service."));
        assert!(pos("BSc") < pos("at MIT"));
        assert!(pos("Sep 2015 – Jun 2019") > pos("at MIT"));
        assert_eq!(text.last().unwrap(), "Rust, SQL");
        assert!(!text.iter().any(|t| t.contains("Jan 2021")));
    }

    #[test]
    fn test_many_entries_paginate_without_overlap() {
        let mut record = personal_only();
        for i in 0..40 {
            record.experience.push(ExperienceEntry {
                id: EntryId::from(i.to_string()),
                company: format!("Company {i}"),
                position: "Engineer".to_string(),
                start_date: "2020-01".to_string(),
                end_date: "2020-12".to_string(),
                current: false,
                description: "Worked on things.".to_string(),
            });
        }
        let layout = default_page_layout();
        let pages = compose_pages(&record, &layout);

        assert!(pages.len() > 1);
        for page in &pages {
            assert!(page.lines.windows(2).all(|w| w[0].y_pt > w[1].y_pt));
        }
    }

    #[test]
    fn test_joined_handles_missing_sides() {
        assert_eq!(joined("BSc", " in ", "Physics"), "BSc in Physics");
        assert_eq!(joined("BSc", " in ", ""), "BSc");
        assert_eq!(joined("", " at ", "Acme"), "Acme");
        assert_eq!(joined(" ", " at ", ""), "");
    }

    #[test]
    fn test_export_pdf_produces_loadable_document() {
        let bytes = export_pdf(&ResumeRecord::default(), &default_page_layout()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
