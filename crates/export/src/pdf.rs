//! PDF rendering of an [`ExportDocument`].
//!
//! Pages are A4 with the built-in Helvetica family, so no font files are
//! needed. The whole document is rendered in memory and written in one go;
//! a failed write leaves no partial document behind from this crate's side.

use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};

use crate::document::ExportDocument;
use crate::error::{ExportError, Result};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;
const LINE_HEIGHT: f32 = 10.0;

const HEADING_SIZE: f32 = 14.0;
const ENTRY_SIZE: f32 = 12.0;
const NOTE_SIZE: f32 = 11.0;

/// Average Helvetica glyph width as a fraction of the font size.
const AVERAGE_GLYPH_WIDTH: f32 = 0.5;
const MM_PER_POINT: f32 = 0.352_778;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Heading,
    Entry,
    Note,
}

impl Style {
    const fn size(self) -> f32 {
        match self {
            Self::Heading => HEADING_SIZE,
            Self::Entry => ENTRY_SIZE,
            Self::Note => NOTE_SIZE,
        }
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self> {
        let add = |font| {
            doc.add_builtin_font(font)
                .map_err(|e| ExportError::Render(e.to_string()))
        };
        Ok(Self {
            regular: add(BuiltinFont::Helvetica)?,
            bold: add(BuiltinFont::HelveticaBold)?,
            italic: add(BuiltinFont::HelveticaOblique)?,
        })
    }

    const fn get(&self, style: Style) -> &IndirectFontRef {
        match style {
            Style::Heading => &self.bold,
            Style::Entry => &self.regular,
            Style::Note => &self.italic,
        }
    }
}

/// One wrapped line with its baseline on the page, in mm from the bottom.
#[derive(Debug, Clone, PartialEq)]
struct PlacedLine {
    text: String,
    style: Style,
    y: f32,
}

/// Places lines top to bottom, starting a new page when one fills up.
struct Cursor {
    pages: Vec<Vec<PlacedLine>>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn write(&mut self, text: &str, style: Style) {
        for text in wrap(&winansi(text), max_chars(style.size())) {
            if self.y - LINE_HEIGHT < MARGIN {
                self.pages.push(Vec::new());
                self.y = PAGE_HEIGHT - MARGIN;
            }
            self.y -= LINE_HEIGHT;
            if let Some(page) = self.pages.last_mut() {
                page.push(PlacedLine { text, style, y: self.y });
            }
        }
    }

    fn skip_line(&mut self) {
        self.y -= LINE_HEIGHT;
    }
}

/// Lays the document out into pages of positioned lines.
fn layout(document: &ExportDocument) -> Vec<Vec<PlacedLine>> {
    let mut cursor = Cursor::new();
    for section in &document.sections {
        cursor.write(&section.heading, Style::Heading);
        for entry in &section.entries {
            cursor.write(&entry.line, Style::Entry);
            if let Some(note) = &entry.note {
                cursor.write(note, Style::Note);
            }
        }
        cursor.skip_line();
    }
    cursor.pages
}

/// Renders the document and writes it to `path`.
///
/// Returns the number of pages written.
///
/// # Errors
///
/// Returns [`ExportError::Render`] if the PDF cannot be built and
/// [`ExportError::Io`] if the file cannot be written.
pub fn write_pdf(document: &ExportDocument, path: &Path) -> Result<usize> {
    let (bytes, pages) = render_pdf(document)?;
    std::fs::write(path, bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), pages, entries = document.entry_count(), "exported board");
    Ok(pages)
}

/// Renders the document into PDF bytes and returns them with the page count.
///
/// # Errors
///
/// Returns [`ExportError::Render`] if the PDF library fails.
pub fn render_pdf(document: &ExportDocument) -> Result<(Vec<u8>, usize)> {
    let pages = layout(document);
    let (doc, first_page, first_layer) =
        PdfDocument::new(&document.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let fonts = Fonts::load(&doc)?;

    for (i, lines) in pages.iter().enumerate() {
        let (page, layer) = if i == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1")
        };
        let layer = doc.get_page(page).get_layer(layer);
        for line in lines {
            layer.use_text(
                line.text.as_str(),
                line.style.size(),
                Mm(MARGIN),
                Mm(line.y),
                fonts.get(line.style),
            );
        }
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ExportError::Render(e.to_string()))?;
    Ok((bytes, pages.len()))
}

fn max_chars(font_size: f32) -> usize {
    let glyph_mm = font_size * MM_PER_POINT * AVERAGE_GLYPH_WIDTH;
    let usable = PAGE_WIDTH - 2.0 * MARGIN;
    // Truncation is fine here, it only errs towards shorter lines.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let chars = (usable / glyph_mm) as usize;
    chars.max(1)
}

/// Replaces characters the built-in fonts cannot encode.
fn winansi(text: &str) -> String {
    text.chars()
        .flat_map(|c| match c {
            '→' => "->".chars().collect::<Vec<_>>(),
            '–' | '—' => vec!['-'],
            '•' => vec!['*'],
            c if u32::from(c) <= 0xFF => vec![c],
            _ => vec!['?'],
        })
        .collect()
}

/// Greedy word wrap. Words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let word: String = word.into_iter().collect();
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
