//! PDF serialization on top of `pdf-writer`.
//!
//! Object numbering is fixed: 1 catalog, 2 page tree, 3 and 4 the two
//! standard fonts, then a page object and its content stream for every page.
//! Fonts are the non-embedded base-14 Helvetica faces with WinAnsiEncoding,
//! so text is written as single bytes; see [`encode_text`].

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use tracing::debug;

use crate::error::{CustbookError, Result};
use crate::layout::{Document, Font, PageGeometry, PlacedLine};

const FIRST_PAGE_OBJECT: i32 = 5;

pub fn write_pdf(doc: &Document) -> Result<Vec<u8>> {
    let geometry = &doc.geometry;
    if !(geometry.width > 0.0 && geometry.height > 0.0) {
        return Err(CustbookError::InvalidPageSize);
    }

    let page_count = doc.pages.len().max(1);
    let page_ids: Vec<Ref> = (0..page_count).map(page_object).collect();

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let regular_font_id = Ref::new(3);
    let bold_font_id = Ref::new(4);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(page_count as i32);

    for (font, id) in [
        (Font::Helvetica, regular_font_id),
        (Font::HelveticaBold, bold_font_id),
    ] {
        pdf.type1_font(id)
            .base_font(Name(font.base_name().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    for (i, page_id) in page_ids.iter().copied().enumerate() {
        let contents_id = Ref::new(page_id.get() + 1);
        let lines = doc.pages.get(i).map(|p| p.lines.as_slice()).unwrap_or(&[]);

        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, geometry.width, geometry.height))
            .parent(page_tree_id)
            .contents(contents_id);
        {
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(font_resource(Font::Helvetica), regular_font_id);
            fonts.pair(font_resource(Font::HelveticaBold), bold_font_id);
        }
        page.finish();

        pdf.stream(contents_id, &content_stream(lines, geometry));
    }

    let output = pdf.finish();
    debug!(pages = page_count, bytes = output.len(), "wrote pdf");
    Ok(output)
}

fn page_object(page: usize) -> Ref {
    Ref::new(FIRST_PAGE_OBJECT + page as i32 * 2)
}

fn font_resource(font: Font) -> Name<'static> {
    match font {
        Font::Helvetica => Name(b"F1"),
        Font::HelveticaBold => Name(b"F2"),
    }
}

fn content_stream(lines: &[PlacedLine], geometry: &PageGeometry) -> Vec<u8> {
    let mut content = Content::new();
    for line in lines.iter().filter(|l| !l.text.is_empty()) {
        let size = line.style.font_size(geometry);
        // Layout offsets grow downward from the top edge; PDF user space grows
        // upward from the bottom edge. The baseline sits one font size below
        // the top of the line box.
        let baseline = geometry.height - (line.y + size);
        content
            .begin_text()
            .set_font(font_resource(line.style.font()), size)
            .next_line(line.x, baseline)
            .show(Str(&encode_text(&line.text)))
            .end_text();
    }
    content.finish()
}

/// Maps text to WinAnsi bytes. Latin-1 passes through, the euro sign maps to
/// its WinAnsi slot, everything else becomes `?`.
pub fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            c if (c as u32) >= 0x20 && (c as u32) < 0x7F => c as u8,
            c if (c as u32) >= 0xA0 && (c as u32) <= 0xFF => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout, DateFormat, LayoutOptions, PageSize};
    use crate::model::{Entry, NewCustomer};

    fn as_text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    fn page_objects(text: &str) -> usize {
        text.matches("/Type /Page").count() - text.matches("/Type /Pages").count()
    }

    #[test]
    fn test_single_page_document_structure() {
        let customer = NewCustomer::new("Acme Co").validate().unwrap();
        let doc = layout(&customer, &LayoutOptions::default());
        let pdf = write_pdf(&doc).unwrap();
        let text = as_text(&pdf);

        assert!(text.starts_with("%PDF-"));
        assert!(text.contains("/Count 1"));
        assert!(text.contains("(Acme Co) Tj"));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/Encoding /WinAnsiEncoding"));
        assert!(text.contains("startxref"));
        assert!(text.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_page_count_matches_layout() {
        let mut customer = NewCustomer::new("Acme").validate().unwrap();
        let long = vec!["lorem ipsum dolor"; 600].join(" ");
        customer
            .received
            .push(Entry::new("Long".into(), long, None));

        let doc = layout(&customer, &LayoutOptions::default());
        assert!(doc.page_count() > 1);

        let text = as_text(&write_pdf(&doc).unwrap());
        assert!(text.contains(&format!("/Count {}", doc.page_count())));
        assert_eq!(page_objects(&text), doc.page_count());
    }

    #[test]
    fn test_media_box_matches_page_size() {
        let customer = NewCustomer::new("Acme").validate().unwrap();
        let doc = layout(&customer, &LayoutOptions::new(PageSize::Letter, DateFormat::Iso));
        let text = as_text(&write_pdf(&doc).unwrap());
        assert!(text.contains("/MediaBox [0 0 612 792]"));
    }

    #[test]
    fn test_every_page_gets_its_own_content_stream() {
        let customer = NewCustomer::new("Acme").with_phone("1").validate().unwrap();
        let doc = layout(&customer, &LayoutOptions::default());
        let text = as_text(&write_pdf(&doc).unwrap());

        assert!(text.contains("5 0 obj"));
        assert!(text.contains("/Contents 6 0 R"));
        assert!(text.contains("/F1 3 0 R"));
        assert!(text.contains("/F2 4 0 R"));
        assert_eq!(text.matches("endstream").count(), 1);
    }

    #[test]
    fn test_invalid_page_size_errors() {
        let customer = NewCustomer::new("Acme").validate().unwrap();
        let mut doc = layout(&customer, &LayoutOptions::default());
        doc.geometry.width = 0.0;
        assert!(matches!(write_pdf(&doc), Err(CustbookError::InvalidPageSize)));
    }

    #[test]
    fn test_unencodable_text_is_replaced() {
        let customer = NewCustomer::new("Acme علی").validate().unwrap();
        let doc = layout(&customer, &LayoutOptions::default());
        let text = as_text(&write_pdf(&doc).unwrap());
        assert!(text.contains("(Acme ???) Tj"));
    }

    #[test]
    fn test_encoding() {
        assert_eq!(encode_text("café €5"), vec![b'c', b'a', b'f', 0xE9, b' ', 0x80, b'5']);
        assert_eq!(encode_text("علی"), b"???".to_vec());
    }
}
