//! Minimal PDF 1.4 writer: base-14 Helvetica text, filled and stroked
//! rectangles, any number of US-Letter pages.

/// Every PDF starts with these bytes.
pub const PDF_MAGIC: &[u8; 5] = b"%PDF-";

/// Version line written at the top of each document.
pub const PDF_HEADER: &[u8] = b"%PDF-1.4\n";

/// US-Letter size in points.
pub const PAGE_WIDTH: f64 = 612.0;
pub const PAGE_HEIGHT: f64 = 792.0;

/// Objects 1..=5 are fixed: catalog, page tree, two fonts, info.
const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const FONT_REGULAR_ID: usize = 3;
const FONT_BOLD_ID: usize = 4;
const INFO_ID: usize = 5;
const FIRST_PAGE_ID: usize = 6;

/// RGB colour with components in `0.0..=1.0`.
pub type Rgb = (f64, f64, f64);

pub const BLACK: Rgb = (0.0, 0.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource_name(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }
}

/// Drawing operations for one page, accumulated as a content stream.
#[derive(Debug, Clone, Default)]
pub struct PageCanvas {
    content: Vec<u8>,
}

impl PageCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw `text` with its baseline starting at (`x`, `y`).
    pub fn text(&mut self, font: Font, size: f64, x: f64, y: f64, text: &str, color: Rgb) {
        let (r, g, b) = color;
        self.op(&format!("{r:.3} {g:.3} {b:.3} rg\n"));
        self.op(&format!(
            "BT /{} {size:.1} Tf {x:.2} {y:.2} Td (",
            font.resource_name()
        ));
        self.content.extend(encode_text(text));
        self.op(") Tj ET\n");
    }

    /// Fill a rectangle whose lower-left corner is (`x`, `y`).
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb) {
        let (r, g, b) = color;
        self.op(&format!(
            "{r:.3} {g:.3} {b:.3} rg {x:.2} {y:.2} {width:.2} {height:.2} re f\n"
        ));
    }

    /// Outline a rectangle with a 1pt black line.
    pub fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.op(&format!(
            "0 0 0 RG 1 w {x:.2} {y:.2} {width:.2} {height:.2} re S\n"
        ));
    }

    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    fn op(&mut self, s: &str) {
        self.content.extend_from_slice(s.as_bytes());
    }
}

/// A multi-page document.
#[derive(Debug, Clone, Default)]
pub struct PdfDocument {
    title: String,
    pages: Vec<PageCanvas>,
}

impl PdfDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: Vec::new(),
        }
    }

    pub fn push_page(&mut self, page: PageCanvas) {
        self.pages.push(page);
    }

    /// Pages that will be written (a blank one if none were pushed).
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len().max(1)
    }

    /// Assemble the complete file.
    ///
    /// Layout:
    /// ```text
    /// %PDF-1.4
    /// 1 catalog | 2 page tree | 3,4 fonts | 5 info | (page, contents) pairs
    /// xref table (one 20-byte entry per object)
    /// trailer, startxref, %%EOF
    /// ```
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let blank = [PageCanvas::new()];
        let pages: &[PageCanvas] = if self.pages.is_empty() {
            &blank
        } else {
            &self.pages
        };

        let page_ids: Vec<usize> = (0..pages.len()).map(|i| FIRST_PAGE_ID + 2 * i).collect();
        let object_count = FIRST_PAGE_ID - 1 + 2 * pages.len();

        let mut buf: Vec<u8> = Vec::new();
        let mut offsets = vec![0usize; object_count + 1];

        buf.extend_from_slice(PDF_HEADER);
        // Binary marker so transfer tools treat the file as binary.
        buf.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        let kids = page_ids
            .iter()
            .map(|id| format!("{id} 0 R"))
            .collect::<Vec<_>>()
            .join(" ");

        let mut object = |buf: &mut Vec<u8>, id: usize, body: &[u8]| {
            offsets[id] = buf.len();
            buf.extend_from_slice(format!("{id} 0 obj\n").as_bytes());
            buf.extend_from_slice(body);
            buf.extend_from_slice(b"\nendobj\n");
        };

        object(
            &mut buf,
            CATALOG_ID,
            format!("<< /Type /Catalog /Pages {PAGES_ID} 0 R >>").as_bytes(),
        );
        object(
            &mut buf,
            PAGES_ID,
            format!("<< /Type /Pages /Kids [{kids}] /Count {} >>", pages.len()).as_bytes(),
        );
        object(&mut buf, FONT_REGULAR_ID, font_dict("Helvetica").as_bytes());
        object(
            &mut buf,
            FONT_BOLD_ID,
            font_dict("Helvetica-Bold").as_bytes(),
        );

        let mut info = b"<< /Title (".to_vec();
        info.extend(encode_text(&self.title));
        info.extend_from_slice(b") /Producer (portfolio-tracker-core) >>");
        object(&mut buf, INFO_ID, &info);

        for (page, &page_id) in pages.iter().zip(&page_ids) {
            let contents_id = page_id + 1;
            object(
                &mut buf,
                page_id,
                format!(
                    "<< /Type /Page /Parent {PAGES_ID} 0 R /MediaBox [0 0 {PAGE_WIDTH:.0} {PAGE_HEIGHT:.0}] \
                     /Resources << /Font << /F1 {FONT_REGULAR_ID} 0 R /F2 {FONT_BOLD_ID} 0 R >> >> \
                     /Contents {contents_id} 0 R >>"
                )
                .as_bytes(),
            );

            let length = page.content().len();
            let mut stream = format!("<< /Length {length} >>\nstream\n").into_bytes();
            stream.extend_from_slice(page.content());
            stream.extend_from_slice(b"\nendstream");
            object(&mut buf, contents_id, &stream);
        }

        let xref_offset = buf.len();
        buf.extend_from_slice(format!("xref\n0 {}\n", object_count + 1).as_bytes());
        buf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets[1..] {
            buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        buf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root {CATALOG_ID} 0 R /Info {INFO_ID} 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
                object_count + 1
            )
            .as_bytes(),
        );

        buf
    }
}

fn font_dict(base_font: &str) -> String {
    format!(
        "<< /Type /Font /Subtype /Type1 /BaseFont /{base_font} /Encoding /WinAnsiEncoding >>"
    )
}

/// Encode text for a literal string in WinAnsi.
///
/// Delimiters are backslash-escaped; Latin-1 characters pass through as
/// single bytes; anything the base fonts cannot show becomes `?`.
fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(ch as u8);
            }
            ' '..='~' => out.push(ch as u8),
            '\u{A0}'..='\u{FF}' => out.push(ch as u32 as u8),
            _ => out.push(b'?'),
        }
    }
    out
}
