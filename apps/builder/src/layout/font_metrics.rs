//! Static font-metric tables for the two PDF base fonts the exporter uses.
//!
//! Widths are the Helvetica / Helvetica-Bold AFM advance widths in 1/1000 em.
//! Tables cover ASCII 0x20..=0x7E (95 printable characters), index = (char as usize) - 32.
//! Anything else falls back to `average_char_width`, which is close enough for
//! line wrapping of the occasional accented letter or dash.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font faces
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFace {
    /// Body text.
    Helvetica,
    /// Name, section headings and entry titles.
    HelveticaBold,
}

impl FontFace {
    /// The standard Type1 base font name.
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Name of the font in the page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Helvetica => "F1",
            FontFace::HelveticaBold => "F2",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page layout
// ────────────────────────────────────────────────────────────────────────────

/// Page geometry for the exported document, in PDF points (1/72 in).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLayout {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_left_pt: f32,
    pub margin_right_pt: f32,
    pub margin_top_pt: f32,
    pub margin_bottom_pt: f32,
    /// Baseline-to-baseline distance as a multiple of the font size.
    pub line_spacing: f32,
}

impl PageLayout {
    pub fn text_width_pt(&self) -> f32 {
        self.width_pt - self.margin_left_pt - self.margin_right_pt
    }
}

/// A4 portrait with 15mm margins.
pub fn default_page_layout() -> PageLayout {
    PageLayout {
        width_pt: 595.0,
        height_pt: 842.0,
        margin_left_pt: 42.5,
        margin_right_pt: 42.5,
        margin_top_pt: 42.5,
        margin_bottom_pt: 42.5,
        line_spacing: 1.3,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Width slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [u16; 95],
    /// Fallback width (1/1000 em) for characters outside printable ASCII.
    pub average_char_width: u16,
}

impl FontMetricTable {
    fn char_width(&self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else {
            self.average_char_width
        }
    }

    /// Rendered width of `s` in points at `size_pt`.
    pub fn measure_str(&self, s: &str, size_pt: f32) -> f32 {
        let units: u32 = s.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * size_pt / 1000.0
    }

    pub fn space_width(&self, size_pt: f32) -> f32 {
        self.char_width(' ') as f32 * size_pt / 1000.0
    }
}

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    average_char_width: 556,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    average_char_width: 611,
};

pub fn get_metrics(face: FontFace) -> &'static FontMetricTable {
    match face {
        FontFace::Helvetica => &HELVETICA_TABLE,
        FontFace::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}
