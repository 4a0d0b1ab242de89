//! PDF writer: turns laid-out pages into an in-memory PDF using `lopdf`.
//!
//! Fonts are the standard Type1 Helvetica faces with WinAnsi encoding, so no
//! font files are embedded. Characters outside WinAnsi are written as `?`.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use tracing::debug;

use crate::export::ExportError;
use crate::layout::{FontFace, LaidOutPage, PageLayout};

pub fn write_pdf(pages: &[LaidOutPage], layout: &PageLayout) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = lopdf::Dictionary::new();
    for face in [FontFace::Helvetica, FontFace::HelveticaBold] {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(face.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = Content {
            operations: page_operations(page),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let media_box: Vec<Object> = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(layout.width_pt.round() as i64),
        Object::Integer(layout.height_pt.round() as i64),
    ];
    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => media_box,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    debug!("Wrote PDF: {} pages, {} bytes", page_count, bytes.len());
    Ok(bytes)
}

fn page_operations(page: &LaidOutPage) -> Vec<Operation> {
    let mut ops = Vec::with_capacity(page.lines.len() * 5);
    for line in &page.lines {
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![
                Object::Name(line.face.resource_name().as_bytes().to_vec()),
                Object::Integer(line.size_pt.round() as i64),
            ],
        ));
        ops.push(Operation::new(
            "Td",
            vec![
                Object::Integer(line.x_pt.round() as i64),
                Object::Integer(line.y_pt.round() as i64),
            ],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(&line.text), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
    }
    ops
}

/// Encodes `text` as WinAnsi (CP1252) bytes.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8a,
            '‹' => 0x8b,
            'Œ' => 0x8c,
            'Ž' => 0x8e,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9a,
            '›' => 0x9b,
            'œ' => 0x9c,
            'ž' => 0x9e,
            'Ÿ' => 0x9f,
            '\t' => b' ',
            _ => b'?',
        })
        .collect()
}
