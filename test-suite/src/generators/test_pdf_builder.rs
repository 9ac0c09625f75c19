//! Test PDF Builder
//!
//! A builder for creating test PDFs with specific characteristics. Besides the
//! bytes, the builder reports where it put things (object offsets, the xref
//! table, stream bodies) so lexer tests can check navigation against them.

use std::collections::BTreeMap;

/// PDF version to generate
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum PdfVersion {
    V1_0,
    V1_1,
    V1_2,
    V1_3,
    V1_4,
    V1_5,
    V1_6,
    V1_7,
    V2_0,
}

impl std::fmt::Display for PdfVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let version = match self {
            PdfVersion::V1_0 => "1.0",
            PdfVersion::V1_1 => "1.1",
            PdfVersion::V1_2 => "1.2",
            PdfVersion::V1_3 => "1.3",
            PdfVersion::V1_4 => "1.4",
            PdfVersion::V1_5 => "1.5",
            PdfVersion::V1_6 => "1.6",
            PdfVersion::V1_7 => "1.7",
            PdfVersion::V2_0 => "2.0",
        };
        write!(f, "{version}")
    }
}

/// End-of-line convention used between lines of file structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }

    /// End-of-line after the `stream` keyword; a lone CR is not allowed there
    fn after_stream_keyword(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf | LineEnding::Cr => "\r\n",
        }
    }

    /// Two-byte terminator of a 20-byte xref entry
    fn xref_entry_terminator(self) -> &'static str {
        match self {
            LineEnding::Lf => " \n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => " \r",
        }
    }
}

/// Where the body of a generated stream landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamLayout {
    pub object: u32,
    pub origin: usize,
    pub length: usize,
}

/// A generated PDF together with the offsets the builder recorded
#[derive(Debug, Clone)]
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    /// `(object number, offset of "N G obj")` in file order
    pub object_offsets: Vec<(u32, usize)>,
    pub xref_offset: usize,
    pub streams: Vec<StreamLayout>,
}

/// Builder for creating test PDFs
pub struct TestPdfBuilder {
    version: PdfVersion,
    pages: Vec<PageContent>,
    binary_streams: Vec<Vec<u8>>,
    info: BTreeMap<String, String>,
    include_binary_marker: bool,
    document_id: Option<Vec<u8>>,
    line_ending: LineEnding,
}

#[derive(Clone)]
struct PageContent {
    width: f32,
    height: f32,
    content_stream: String,
    resources: BTreeMap<String, String>,
}

impl TestPdfBuilder {
    /// Create a new PDF builder with default settings
    pub fn new() -> Self {
        Self {
            version: PdfVersion::V1_4,
            pages: Vec::new(),
            binary_streams: Vec::new(),
            info: BTreeMap::new(),
            include_binary_marker: true,
            document_id: None,
            line_ending: LineEnding::Lf,
        }
    }

    /// Create a minimal valid PDF
    pub fn minimal() -> Self {
        let mut builder = Self::new();
        builder.add_empty_page(612.0, 792.0);
        builder
    }

    /// Set PDF version
    pub fn with_version(mut self, version: PdfVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn with_binary_marker(mut self, include: bool) -> Self {
        self.include_binary_marker = include;
        self
    }

    /// Add document info
    pub fn with_info(mut self, key: &str, value: &str) -> Self {
        self.info.insert(key.to_string(), value.to_string());
        self
    }

    /// Add title
    pub fn with_title(self, title: &str) -> Self {
        self.with_info("Title", title)
    }

    /// Add author
    pub fn with_author(self, author: &str) -> Self {
        self.with_info("Author", author)
    }

    /// Add an empty page
    pub fn add_empty_page(&mut self, width: f32, height: f32) -> &mut Self {
        self.pages.push(PageContent {
            width,
            height,
            content_stream: String::new(),
            resources: BTreeMap::new(),
        });
        self
    }

    /// Add a page with text
    pub fn add_text_page(&mut self, text: &str, font_size: f32) -> &mut Self {
        let content = format!(
            "BT\n/F1 {} Tf\n100 700 Td\n({}) Tj\nET",
            font_size,
            escape_pdf_string(text)
        );

        let mut resources = BTreeMap::new();
        resources.insert(
            "Font".to_string(),
            "<< /F1 << /Type /Font /Subtype /Type1 /BaseFont /Helvetica >> >>".to_string(),
        );

        self.pages.push(PageContent {
            width: 612.0,
            height: 792.0,
            content_stream: content,
            resources,
        });
        self
    }

    /// Add a page with graphics
    pub fn add_graphics_page(&mut self) -> &mut Self {
        let content = "q\n\
                      1 0 0 RG\n\
                      2 w\n\
                      100 100 400 600 re\n\
                      S\n\
                      0 0 1 RG\n\
                      200 200 200 200 re\n\
                      f\n\
                      Q"
        .to_string();

        self.pages.push(PageContent {
            width: 612.0,
            height: 792.0,
            content_stream: content,
            resources: BTreeMap::new(),
        });
        self
    }

    /// Write `/ID` into the trailer, both entries set to `id`
    pub fn with_document_id(mut self, id: &[u8]) -> Self {
        self.document_id = Some(id.to_vec());
        self
    }

    /// Add a stream object with an arbitrary (possibly binary) body
    pub fn add_binary_stream(&mut self, data: Vec<u8>) -> &mut Self {
        self.binary_streams.push(data);
        self
    }

    /// Build the PDF
    pub fn build(&self) -> Vec<u8> {
        self.build_with_layout().bytes
    }

    /// Build the PDF and report the offsets of its parts
    pub fn build_with_layout(&self) -> GeneratedPdf {
        let eol = self.line_ending.as_str();
        let mut pdf = Vec::new();
        let mut object_offsets = Vec::new();
        let mut streams = Vec::new();

        // Header
        pdf.extend_from_slice(format!("%PDF-{}{eol}", self.version).as_bytes());

        // Binary marker
        if self.include_binary_marker {
            pdf.extend_from_slice(b"%\xE2\xE3\xCF\xD3");
            pdf.extend_from_slice(eol.as_bytes());
        }

        let catalog_obj = 1u32;
        let pages_obj = 2u32;
        let first_page_obj = pages_obj + 1;
        let mut object_num = first_page_obj;

        // Catalog object
        object_offsets.push((catalog_obj, pdf.len()));
        pdf.extend_from_slice(
            format!(
                "{catalog_obj} 0 obj{eol}<< /Type /Catalog /Pages {pages_obj} 0 R >>{eol}endobj{eol}"
            )
            .as_bytes(),
        );

        // Pages object
        let page_refs: Vec<String> = (0..self.pages.len())
            .map(|i| format!("{} 0 R", first_page_obj + i as u32))
            .collect();

        object_offsets.push((pages_obj, pdf.len()));
        pdf.extend_from_slice(
            format!(
                "{pages_obj} 0 obj{eol}<< /Type /Pages /Kids [{}] /Count {} >>{eol}endobj{eol}",
                page_refs.join(" "),
                self.pages.len()
            )
            .as_bytes(),
        );

        // Individual pages; content streams follow all pages
        let mut content_obj = first_page_obj + self.pages.len() as u32;
        for page in &self.pages {
            let mut page_dict = format!(
                "<< /Type /Page /Parent {pages_obj} 0 R /MediaBox [0 0 {} {}]",
                page.width, page.height
            );

            if !page.resources.is_empty() {
                page_dict.push_str(" /Resources <<");
                for (key, value) in &page.resources {
                    page_dict.push_str(&format!(" /{key} {value}"));
                }
                page_dict.push_str(" >>");
            }

            if !page.content_stream.is_empty() {
                page_dict.push_str(&format!(" /Contents {content_obj} 0 R"));
                content_obj += 1;
            }
            page_dict.push_str(" >>");

            object_offsets.push((object_num, pdf.len()));
            pdf.extend_from_slice(
                format!("{object_num} 0 obj{eol}{page_dict}{eol}endobj{eol}").as_bytes(),
            );
            object_num += 1;
        }

        // Content streams, then binary streams
        let bodies = self
            .pages
            .iter()
            .filter(|page| !page.content_stream.is_empty())
            .map(|page| page.content_stream.as_bytes())
            .chain(self.binary_streams.iter().map(Vec::as_slice));
        for body in bodies {
            object_offsets.push((object_num, pdf.len()));
            pdf.extend_from_slice(
                format!(
                    "{object_num} 0 obj{eol}<< /Length {} >>{eol}stream{}",
                    body.len(),
                    self.line_ending.after_stream_keyword()
                )
                .as_bytes(),
            );
            streams.push(StreamLayout {
                object: object_num,
                origin: pdf.len(),
                length: body.len(),
            });
            pdf.extend_from_slice(body);
            pdf.extend_from_slice(format!("{eol}endstream{eol}endobj{eol}").as_bytes());
            object_num += 1;
        }

        // Info dictionary
        let mut info_obj = 0;
        if !self.info.is_empty() {
            info_obj = object_num;
            let mut info_dict = "<< ".to_string();
            for (key, value) in &self.info {
                info_dict.push_str(&format!("/{} ({}) ", key, escape_pdf_string(value)));
            }
            info_dict.push_str(">>");

            object_offsets.push((info_obj, pdf.len()));
            pdf.extend_from_slice(
                format!("{info_obj} 0 obj{eol}{info_dict}{eol}endobj{eol}").as_bytes(),
            );
            object_num += 1;
        }

        // Cross-reference table
        let xref_offset = pdf.len();
        self.write_traditional_xref(&mut pdf, &object_offsets, object_num);

        // Trailer
        let mut trailer_dict = format!("<< /Size {object_num} /Root {catalog_obj} 0 R");
        if info_obj > 0 {
            trailer_dict.push_str(&format!(" /Info {info_obj} 0 R"));
        }
        if let Some(id) = &self.document_id {
            let id = hex::encode_upper(id);
            trailer_dict.push_str(&format!(" /ID [<{id}> <{id}>]"));
        }
        trailer_dict.push_str(" >>");

        pdf.extend_from_slice(
            format!("trailer{eol}{trailer_dict}{eol}startxref{eol}{xref_offset}{eol}%%EOF")
                .as_bytes(),
        );

        GeneratedPdf {
            bytes: pdf,
            object_offsets,
            xref_offset,
            streams,
        }
    }

    /// Write traditional cross-reference table
    fn write_traditional_xref(&self, pdf: &mut Vec<u8>, offsets: &[(u32, usize)], size: u32) {
        let eol = self.line_ending.as_str();
        let terminator = self.line_ending.xref_entry_terminator();
        pdf.extend_from_slice(format!("xref{eol}0 {size}{eol}").as_bytes());

        // Entry for object 0 (always free)
        pdf.extend_from_slice(format!("0000000000 65535 f{terminator}").as_bytes());

        for &(_, pos) in offsets {
            pdf.extend_from_slice(format!("{pos:010} 00000 n{terminator}").as_bytes());
        }
    }
}

/// Escape special characters in PDF strings
pub fn escape_pdf_string(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '(' => "\\(".to_string(),
            ')' => "\\)".to_string(),
            '\\' => "\\\\".to_string(),
            '\n' => "\\n".to_string(),
            '\r' => "\\r".to_string(),
            '\t' => "\\t".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

impl Default for TestPdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}
