//! Flowing page layout: a running cursor that places wrapped lines top-down
//! and starts a new page when the next line would cross the bottom margin.
//!
//! Coordinates are PDF user space: origin bottom-left, y grows upward.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::{get_metrics, FontFace, FontMetricTable, PageLayout};

/// One line of text at a fixed position on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    pub text: String,
    pub face: FontFace,
    pub size_pt: f32,
    pub x_pt: f32,
    /// Baseline position.
    pub y_pt: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaidOutPage {
    pub lines: Vec<PlacedLine>,
}

/// Text style for one call to [`PageFlow::text`].
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub face: FontFace,
    pub size_pt: f32,
    /// Extra left indent beyond the page margin.
    pub indent_pt: f32,
}

impl TextStyle {
    pub const fn new(face: FontFace, size_pt: f32) -> Self {
        Self {
            face,
            size_pt,
            indent_pt: 0.0,
        }
    }

    #[cfg(test)]
    pub const fn indented(self, indent_pt: f32) -> Self {
        Self { indent_pt, ..self }
    }
}

pub struct PageFlow<'a> {
    layout: &'a PageLayout,
    pages: Vec<LaidOutPage>,
    /// Top edge of the next line.
    cursor_y: f32,
}

impl<'a> PageFlow<'a> {
    pub fn new(layout: &'a PageLayout) -> Self {
        Self {
            layout,
            pages: vec![LaidOutPage::default()],
            cursor_y: layout.height_pt - layout.margin_top_pt,
        }
    }

    /// Wraps `text` to the available width and places every resulting line.
    /// Explicit newlines are kept; an empty line advances the cursor.
    pub fn text(&mut self, text: &str, style: TextStyle) {
        let metrics = get_metrics(style.face);
        let max_width = self.layout.text_width_pt() - style.indent_pt;
        for paragraph in text.lines() {
            if paragraph.trim().is_empty() {
                self.gap(style.size_pt * self.layout.line_spacing);
                continue;
            }
            for line in wrap_text(paragraph, metrics, style.size_pt, max_width) {
                self.place_line(line, style);
            }
        }
    }

    /// Moves the cursor down without placing anything.
    pub fn gap(&mut self, points: f32) {
        self.cursor_y -= points;
    }

    pub fn finish(self) -> Vec<LaidOutPage> {
        self.pages
    }

    fn place_line(&mut self, text: String, style: TextStyle) {
        let leading = style.size_pt * self.layout.line_spacing;
        if self.cursor_y - leading < self.layout.margin_bottom_pt {
            self.new_page();
        }

        let x_pt = self.layout.margin_left_pt + style.indent_pt;
        let y_pt = self.cursor_y - style.size_pt;
        self.current_page().lines.push(PlacedLine {
            text,
            face: style.face,
            size_pt: style.size_pt,
            x_pt,
            y_pt,
        });
        self.cursor_y -= leading;
    }

    fn new_page(&mut self) {
        self.pages.push(LaidOutPage::default());
        self.cursor_y = self.layout.height_pt - self.layout.margin_top_pt;
    }

    fn current_page(&mut self) -> &mut LaidOutPage {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

/// Greedy word wrap at `max_width` points.
///
/// Words wider than a whole line are broken between characters.
pub fn wrap_text(text: &str, metrics: &FontMetricTable, size_pt: f32, max_width: f32) -> Vec<String> {
    let space_w = metrics.space_width(size_pt);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_w = metrics.measure_str(word, size_pt);

        if word_w > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces = break_word(word, metrics, size_pt, max_width);
            // Last piece stays open so following words can join it.
            if let Some(last) = pieces.pop() {
                lines.extend(pieces);
                current_width = metrics.measure_str(&last, size_pt);
                current = last;
            }
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_w;
        } else if current_width + space_w + word_w > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_w + word_w;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn break_word(word: &str, metrics: &FontMetricTable, size_pt: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for c in word.chars() {
        let mut candidate = piece.clone();
        candidate.push(c);
        if !piece.is_empty() && metrics.measure_str(&candidate, size_pt) > max_width {
            pieces.push(std::mem::replace(&mut piece, c.to_string()));
        } else {
            piece = candidate;
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::default_page_layout;

    const BODY: TextStyle = TextStyle::new(FontFace::Helvetica, 11.0);

    #[test]
    fn test_short_text_is_one_line() {
        let metrics = get_metrics(FontFace::Helvetica);
        assert_eq!(wrap_text("Hello world", metrics, 12.0, 500.0), vec!["Hello world"]);
        assert!(wrap_text("   ", metrics, 12.0, 500.0).is_empty());
    }

    #[test]
    fn test_wrapped_lines_fit_width_and_keep_words() {
        let metrics = get_metrics(FontFace::Helvetica);
        let text = "Designed and operated a multi-region event pipeline handling \
                    two billion messages per day with strict ordering guarantees";
        let lines = wrap_text(text, metrics, 12.0, 200.0);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(metrics.measure_str(line, 12.0) <= 200.0, "too wide: {line}");
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_overlong_word_is_broken() {
        let metrics = get_metrics(FontFace::Helvetica);
        let word = "x".repeat(200);
        let lines = wrap_text(&word, metrics, 12.0, 100.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(metrics.measure_str(line, 12.0) <= 100.0);
        }
    }

    #[test]
    fn test_lines_flow_downward_within_margins() {
        let layout = default_page_layout();
        let mut flow = PageFlow::new(&layout);
        flow.text("First", BODY);
        flow.text("Second", BODY.indented(10.0));
        let pages = flow.finish();

        assert_eq!(pages.len(), 1);
        let lines = &pages[0].lines;
        assert!(lines[0].y_pt > lines[1].y_pt);
        assert!(lines[0].y_pt < layout.height_pt - layout.margin_top_pt);
        assert_eq!(lines[1].x_pt, layout.margin_left_pt + 10.0);
    }

    #[test]
    fn test_overflow_starts_new_page_instead_of_overlapping() {
        let layout = default_page_layout();
        let mut flow = PageFlow::new(&layout);
        for i in 0..150 {
            flow.text(&format!("Line {i}"), BODY);
        }
        let pages = flow.finish();

        assert!(pages.len() >= 3);
        for page in &pages {
            for line in &page.lines {
                assert!(line.y_pt >= layout.margin_bottom_pt);
                assert!(line.y_pt <= layout.height_pt - layout.margin_top_pt);
            }
            // Strictly descending baselines: no two lines share a position.
            assert!(page.lines.windows(2).all(|w| w[0].y_pt > w[1].y_pt));
        }
        let total: usize = pages.iter().map(|p| p.lines.len()).sum();
        assert_eq!(total, 150);
    }

    #[test]
    fn test_explicit_newlines_are_preserved() {
        let layout = default_page_layout();
        let mut flow = PageFlow::new(&layout);
        flow.text("- Led migrations\n\n- Cut costs", BODY);
        let pages = flow.finish();
        let texts: Vec<&str> = pages[0].lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["- Led migrations", "- Cut costs"]);
    }
}
