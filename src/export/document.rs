//! Printable results document
//!
//! One page per contest. Pages are produced by a `DocumentRenderer`; the
//! bundled renderer draws plain-text tables and separates pages with a form
//! feed so the file prints one contest per sheet.

use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Alignment, Modify, Style};

use crate::error::ScoringResult;

use super::rows::ExportSection;

/// Column headings of every document page
pub const DOCUMENT_COLUMNS: [&str; 5] = ["Rank", "Name", "Score", "Time (min)", "Note"];

/// Page break between contests
pub const PAGE_BREAK: char = '\u{0C}';

/// One contest's page
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPage {
    pub heading: String,
    pub rows: Vec<[String; 5]>,
}

/// Turns pages into the bytes of a printable document
pub trait DocumentRenderer {
    /// `title` belongs on the first page only
    fn render(&self, title: &str, columns: &[&str], pages: &[DocumentPage])
        -> ScoringResult<Vec<u8>>;

    /// File extension of the produced document
    fn extension(&self) -> &'static str;
}

/// Page contents for every section, in section order
pub fn document_pages(sections: &[ExportSection]) -> Vec<DocumentPage> {
    sections
        .iter()
        .map(|section| DocumentPage {
            heading: section.contest_name.clone(),
            rows: section
                .rows
                .iter()
                .map(|row| {
                    [
                        row.rank.to_string(),
                        row.contestant.clone(),
                        row.score.to_string(),
                        row.time.clone(),
                        row.note.clone(),
                    ]
                })
                .collect(),
        })
        .collect()
}

/// Plain-text renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDocumentRenderer;

impl TextDocumentRenderer {
    fn render_page(columns: &[&str], page: &DocumentPage) -> String {
        let mut builder = Builder::default();
        builder.push_record(columns.iter().copied());
        for row in &page.rows {
            builder.push_record(row.iter().map(String::as_str));
        }

        let mut table = builder.build();
        table
            .with(Style::ascii())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n\n{}\n", page.heading, table)
    }
}

impl DocumentRenderer for TextDocumentRenderer {
    fn render(
        &self,
        title: &str,
        columns: &[&str],
        pages: &[DocumentPage],
    ) -> ScoringResult<Vec<u8>> {
        let mut out = String::new();
        for (index, page) in pages.iter().enumerate() {
            if index == 0 {
                out.push_str(title);
                out.push_str("\n\n");
            } else {
                out.push(PAGE_BREAK);
            }
            out.push_str(&Self::render_page(columns, page));
        }
        Ok(out.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}
