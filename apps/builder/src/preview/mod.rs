//! Preview Renderer: a pure projection from a [`ResumeRecord`] to HTML.
//!
//! Rules:
//! - Header elements and whole sections appear only when their data is non-empty.
//! - Dates render as short month + full year ("Mar 2022"); a current entry ends in "Present".
//! - Skills render as chips in sequence order.
//! - All user text is escaped.
//!
//! Output depends on nothing but the record passed in.

pub mod handlers;

use chrono::NaiveDate;

use crate::models::resume::{date_range, EducationEntry, ExperienceEntry, PersonalInfo, ResumeRecord};

/// Separator between the two ends of a date range.
pub const RANGE_SEPARATOR: &str = " – ";

const PAGE_STYLE: &str = r#"
body { font-family: Arial, sans-serif; margin: 20px; color: #374151; }
h1 { color: #1e40af; margin-bottom: 4px; }
h2 { color: #9333ea; margin-top: 0; }
h3 { color: #1e40af; border-bottom: 2px solid #bfdbfe; padding-bottom: 5px; }
h4 { color: #7e22ce; margin: 0; }
h5 { color: #4b5563; margin: 0; font-weight: normal; }
.resume-header { text-align: center; margin-bottom: 24px; }
.contact span { margin: 0 8px; }
.resume-section { margin-bottom: 20px; }
.entry { background: #f9fafb; padding: 12px; border-radius: 8px; margin-bottom: 12px; }
.entry-heading { display: flex; justify-content: space-between; }
.entry-dates { color: #4b5563; font-size: 0.9em; }
.entry-description { white-space: pre-line; }
.skill-chips { display: flex; flex-wrap: wrap; gap: 6px; list-style: none; padding: 0; }
.skill { background: #dbeafe; color: #1e40af; padding: 4px 10px; border-radius: 12px; }
"#;

/// Renders the preview fragment for `record`.
pub fn render_preview(record: &ResumeRecord) -> String {
    let mut html = String::from("<div class=\"resume\">");

    render_header(&mut html, &record.personal_info);

    if !is_blank(&record.personal_info.summary) {
        html.push_str("<section class=\"resume-section summary\"><h3>Professional Summary</h3>");
        html.push_str(&format!("<p>{}</p>", escape_html(&record.personal_info.summary)));
        html.push_str("</section>");
    }

    if !record.experience.is_empty() {
        html.push_str("<section class=\"resume-section experience\"><h3>Work Experience</h3>");
        for entry in &record.experience {
            render_experience(&mut html, entry);
        }
        html.push_str("</section>");
    }

    if !record.education.is_empty() {
        html.push_str("<section class=\"resume-section education\"><h3>Education</h3>");
        for entry in &record.education {
            render_education(&mut html, entry);
        }
        html.push_str("</section>");
    }

    if !record.skills.is_empty() {
        html.push_str("<section class=\"resume-section skills\"><h3>Skills</h3><ul class=\"skill-chips\">");
        for skill in &record.skills {
            html.push_str(&format!("<li class=\"skill\">{}</li>", escape_html(skill)));
        }
        html.push_str("</ul></section>");
    }

    html.push_str("</div>");
    html
}

/// Renders a standalone page around the preview fragment, for opening in its
/// own browser tab.
pub fn render_preview_page(record: &ResumeRecord) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Resume Preview</title>\
         <style>{PAGE_STYLE}</style></head><body><div id=\"resume-preview\">{}</div></body></html>",
        render_preview(record)
    )
}

fn render_header(html: &mut String, info: &PersonalInfo) {
    let contact: Vec<(&str, &str)> = [
        ("email", info.email.as_str()),
        ("phone", info.phone.as_str()),
        ("location", info.location.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !is_blank(value))
    .collect();

    if is_blank(&info.name) && is_blank(&info.title) && contact.is_empty() {
        return;
    }

    html.push_str("<header class=\"resume-header\">");
    if !is_blank(&info.name) {
        html.push_str(&format!("<h1>{}</h1>", escape_html(&info.name)));
    }
    if !is_blank(&info.title) {
        html.push_str(&format!("<h2>{}</h2>", escape_html(&info.title)));
    }
    if !contact.is_empty() {
        html.push_str("<div class=\"contact\">");
        for (kind, value) in contact {
            html.push_str(&format!(
                "<span class=\"contact-{kind}\">{}</span>",
                escape_html(value)
            ));
        }
        html.push_str("</div>");
    }
    html.push_str("</header>");
}

fn render_experience(html: &mut String, entry: &ExperienceEntry) {
    html.push_str("<article class=\"entry\"><div class=\"entry-heading\"><div>");
    html.push_str(&format!(
        "<h4>{}</h4><h5>{}</h5></div>",
        escape_html(&entry.position),
        escape_html(&entry.company)
    ));
    render_dates(html, &entry.start_date, &entry.end_date, entry.current);
    html.push_str("</div>");
    if !is_blank(&entry.description) {
        html.push_str(&format!(
            "<p class=\"entry-description\">{}</p>",
            escape_html(&entry.description)
        ));
    }
    html.push_str("</article>");
}

fn render_education(html: &mut String, entry: &EducationEntry) {
    let mut subtitle = escape_html(&entry.degree);
    if !is_blank(&entry.field) {
        subtitle.push_str(", ");
        subtitle.push_str(&escape_html(&entry.field));
    }

    html.push_str("<article class=\"entry\"><div class=\"entry-heading\"><div>");
    html.push_str(&format!(
        "<h4>{}</h4><h5>{subtitle}</h5></div>",
        escape_html(&entry.institution)
    ));
    render_dates(html, &entry.start_date, &entry.end_date, entry.current);
    html.push_str("</div></article>");
}

fn render_dates(html: &mut String, start: &str, end: &str, current: bool) {
    html.push_str("<div class=\"entry-dates\">");
    if let Some(range) = format_date_range(start, end, current) {
        html.push_str(&escape_html(&range));
    }
    html.push_str("</div>");
}

/// `"Mar 2022 – Present"`, `"Mar 2022 – Jan 2024"`, or `"Mar 2022 – "` when
/// the end is unknown. `None` when there is no start date.
pub fn format_date_range(start: &str, end: &str, current: bool) -> Option<String> {
    let (start, end) = date_range(start, end, current)?;
    let end = if current {
        end.to_string()
    } else if is_blank(end) {
        String::new()
    } else {
        format_month(end)
    };
    Some(format!("{}{RANGE_SEPARATOR}{end}", format_month(start)))
}

/// Formats `YYYY-MM` or `YYYY-MM-DD` as `"Mar 2022"`. Anything else is
/// returned unchanged.
pub fn format_month(date: &str) -> String {
    let date = date.trim();
    NaiveDate::parse_from_str(&format!("{date}-01"), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date, "%Y-%m-%d"))
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::EntryId;

    fn jane_doe() -> ResumeRecord {
        ResumeRecord {
            personal_info: PersonalInfo {
                name: "Jane Doe".to_string(),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                id: EntryId::from("1"),
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                start_date: "2022-03".to_string(),
                end_date: "2023-09".to_string(),
                current: true,
                description: String::new(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_record_has_no_section_headers() {
        let html = render_preview(&ResumeRecord::default());
        assert!(!html.contains("<h3>"));
        assert!(!html.contains("Professional Summary"));
        assert!(!html.contains("Work Experience"));
        assert!(!html.contains("Education"));
        assert!(!html.contains("Skills"));
        assert!(!html.contains("<header"));
    }

    #[test]
    fn test_current_entry_ends_in_present_without_end_date() {
        let html = render_preview(&jane_doe());
        assert!(html.contains("<h1>Jane Doe</h1>"));
        assert!(html.contains("<h3>Work Experience</h3>"));
        assert!(html.contains("<h4>Engineer</h4><h5>Acme</h5>"));
        assert!(html.contains("Mar 2022 – Present"));
        assert!(!html.contains("Sep 2023"));
        assert!(!html.contains("<h3>Education</h3>"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let record = jane_doe();
        assert_eq!(render_preview(&record), render_preview(&record.clone()));
    }

    #[test]
    fn test_skills_render_as_chips_in_order() {
        let record = ResumeRecord {
            skills: vec!["Rust".to_string(), "C++".to_string(), "<script>".to_string()],
            ..Default::default()
        };
        let html = render_preview(&record);
        let rust = html.find("<li class=\"skill\">Rust</li>").unwrap();
        let cpp = html.find("<li class=\"skill\">C++</li>").unwrap();
        assert!(rust < cpp);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_education_subtitle_and_open_range() {
        let record = ResumeRecord {
            education: vec![
                EducationEntry {
                    id: EntryId::from("1"),
                    institution: "MIT".to_string(),
                    degree: "BSc".to_string(),
                    field: "Physics".to_string(),
                    start_date: "2015-09".to_string(),
                    end_date: "2019-06".to_string(),
                    current: false,
                },
                EducationEntry {
                    id: EntryId::from("2"),
                    institution: "Stanford".to_string(),
                    degree: "MSc".to_string(),
                    field: String::new(),
                    start_date: "2020-09".to_string(),
                    end_date: String::new(),
                    current: false,
                },
            ],
            ..Default::default()
        };
        let html = render_preview(&record);
        assert!(html.contains("<h5>BSc, Physics</h5>"));
        assert!(html.contains("Sep 2015 – Jun 2019"));
        assert!(html.contains("<h5>MSc</h5>"));
        assert!(html.contains("<div class=\"entry-dates\">Sep 2020 – </div>"));
    }

    #[test]
    fn test_no_dates_without_start() {
        assert_eq!(format_date_range("", "2020-01", false), None);
        assert_eq!(format_date_range("  ", "", true), None);
    }

    #[test]
    fn test_format_month_variants() {
        assert_eq!(format_month("2022-03"), "Mar 2022");
        assert_eq!(format_month("2019-12-25"), "Dec 2019");
        assert_eq!(format_month("last spring"), "last spring");
    }

    #[test]
    fn test_summary_and_contact_only_when_present() {
        let record = ResumeRecord {
            personal_info: PersonalInfo {
                title: "Data Scientist".to_string(),
                phone: "555-0100".to_string(),
                summary: "Builds models & pipelines.".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let html = render_preview(&record);
        assert!(!html.contains("<h1>"));
        assert!(html.contains("<h2>Data Scientist</h2>"));
        assert!(html.contains("contact-phone"));
        assert!(!html.contains("contact-email"));
        assert!(html.contains("<h3>Professional Summary</h3><p>Builds models &amp; pipelines.</p>"));
    }

    #[test]
    fn test_page_wraps_fragment() {
        let record = jane_doe();
        let page = render_preview_page(&record);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(&render_preview(&record)));
        assert!(page.contains("<title>Resume Preview</title>"));
    }
}
