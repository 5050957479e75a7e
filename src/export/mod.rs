//! Export module for contest scoring
//!
//! Ranked results of every contest in the formats the administrator hands
//! out:
//! - CSV: spreadsheet import
//! - Spreadsheet (`.xls`): tab-separated with a byte-order mark
//! - Document: one printable page per contest
//! - Clipboard: tab-separated, ready to paste

pub mod clipboard;
pub mod delimited;
pub mod document;
pub mod rows;

pub use clipboard::{export_to_clipboard, Clipboard, ClipboardStatus, SystemClipboard};
pub use delimited::{to_csv, to_spreadsheet, to_tsv, HEADERS};
pub use document::{
    document_pages, DocumentPage, DocumentRenderer, TextDocumentRenderer, DOCUMENT_COLUMNS,
};
pub use rows::{build_all_contests, build_rows, over_time_note, ExportRow, ExportSection};

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::settings::Settings;
use crate::error::{ScoringError, ScoringResult};
use crate::storage::{write_bytes_atomic, DataStore};

/// File name shared by every exported file
pub const EXPORT_FILE_STEM: &str = "results-all-contests";

/// Builds and writes exports from the current store
pub struct ResultsExporter<'a> {
    store: &'a DataStore,
    over_time_threshold: f64,
    document_title: String,
}

impl<'a> ResultsExporter<'a> {
    pub fn new(store: &'a DataStore, settings: &Settings) -> Self {
        Self {
            store,
            over_time_threshold: settings.over_time_threshold_minutes,
            document_title: settings.document_title.clone(),
        }
    }

    /// Ranked rows of a single contest
    pub fn rows(&self, contest_id: &str) -> Vec<ExportRow> {
        build_rows(
            &self.store.load(),
            self.store.catalog(),
            contest_id,
            self.over_time_threshold,
        )
    }

    /// One section per contest, ordered by contest name
    pub fn sections(&self) -> Vec<ExportSection> {
        build_all_contests(
            &self.store.load(),
            self.store.catalog(),
            self.over_time_threshold,
        )
    }

    pub fn write_csv(&self, dir: &Path) -> ScoringResult<PathBuf> {
        let path = export_path(dir, "csv");
        write_export(&path, to_csv(&self.sections()).as_bytes())?;
        Ok(path)
    }

    pub fn write_spreadsheet(&self, dir: &Path) -> ScoringResult<PathBuf> {
        let path = export_path(dir, "xls");
        write_export(&path, to_spreadsheet(&self.sections()).as_bytes())?;
        Ok(path)
    }

    /// Render the printable document; nothing is written if rendering fails
    pub fn write_document(
        &self,
        dir: &Path,
        renderer: &dyn DocumentRenderer,
    ) -> ScoringResult<PathBuf> {
        let pages = document_pages(&self.sections());
        let bytes = renderer
            .render(&self.document_title, &DOCUMENT_COLUMNS, &pages)
            .map_err(|e| ScoringError::Export(format!("Failed to render document: {}", e)))?;

        let path = export_path(dir, renderer.extension());
        write_export(&path, &bytes)?;
        Ok(path)
    }

    pub fn copy_to_clipboard<F>(&self, clipboard: &dyn Clipboard, on_status: F)
    where
        F: FnOnce(ClipboardStatus),
    {
        export_to_clipboard(&self.sections(), clipboard, on_status);
    }
}

fn export_path(dir: &Path, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", EXPORT_FILE_STEM, extension))
}

fn write_export(path: &Path, bytes: &[u8]) -> ScoringResult<()> {
    write_bytes_atomic(path, bytes)
        .map_err(|e| ScoringError::Export(format!("Failed to write {}: {}", path.display(), e)))?;
    info!(path = %path.display(), bytes = bytes.len(), "export written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::clipboard::testing::FakeClipboard;
    use super::*;
    use crate::config::paths::ScoringPaths;
    use crate::models::ContestantFields;
    use std::fs;
    use tempfile::TempDir;

    struct BrokenRenderer;

    impl DocumentRenderer for BrokenRenderer {
        fn render(&self, _: &str, _: &[&str], _: &[DocumentPage]) -> ScoringResult<Vec<u8>> {
            Err(ScoringError::Export("renderer unavailable".into()))
        }

        fn extension(&self) -> &'static str {
            "pdf"
        }
    }

    fn setup() -> (DataStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ScoringPaths::with_base_dir(temp_dir.path().join("store"));
        let store = DataStore::local(paths).unwrap();
        for (name, score, minutes) in [("Asha", 15.0, 12.0), ("Ravi", 18.0, 25.0)] {
            store
                .add_contestant(
                    "iq",
                    ContestantFields {
                        contestant_name: name.into(),
                        age_group: "Group 2".into(),
                        score,
                        total_time_minutes: minutes,
                        ..Default::default()
                    },
                )
                .unwrap();
        }
        (store, temp_dir)
    }

    #[test]
    fn test_write_csv_file() {
        let (store, temp) = setup();
        let exporter = ResultsExporter::new(&store, &Settings::default());

        let path = exporter.write_csv(temp.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "results-all-contests.csv");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("\u{feff}Contest: IQ Quiz Contest\r\n"));
        assert!(content.contains("IQ Quiz Contest,Group 2,1,\"Asha\",15,12,\r\n"));
        assert!(content.contains("IQ Quiz Contest,Group 2,2,\"Ravi\",18,25,Over 23 min"));
    }

    #[test]
    fn test_write_spreadsheet_file() {
        let (store, temp) = setup();
        let exporter = ResultsExporter::new(&store, &Settings::default());

        let path = exporter.write_spreadsheet(temp.path()).unwrap();
        assert_eq!(path.extension().unwrap(), "xls");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with('\u{feff}'));
        assert!(content.contains("Contest\tAge Group\tRank"));
    }

    #[test]
    fn test_threshold_comes_from_settings() {
        let (store, _temp) = setup();
        let settings = Settings {
            over_time_threshold_minutes: 30.0,
            ..Settings::default()
        };
        let rows = ResultsExporter::new(&store, &settings).rows("iq");
        assert_eq!(rows[0].contestant, "Ravi");
        assert!(rows.iter().all(|r| r.note.is_empty()));
    }

    #[test]
    fn test_write_document_file() {
        let (store, temp) = setup();
        let exporter = ResultsExporter::new(&store, &Settings::default());

        let path = exporter
            .write_document(temp.path(), &TextDocumentRenderer)
            .unwrap();
        assert_eq!(path.file_name().unwrap(), "results-all-contests.txt");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Sanskriti RKT 2026"));
        assert_eq!(content.matches('\u{0C}').count(), 3);
    }

    #[test]
    fn test_renderer_failure_writes_nothing() {
        let (store, temp) = setup();
        let exporter = ResultsExporter::new(&store, &Settings::default());

        let err = exporter
            .write_document(temp.path(), &BrokenRenderer)
            .unwrap_err();
        assert!(matches!(err, ScoringError::Export(_)));
        assert!(!temp.path().join("results-all-contests.pdf").exists());
    }

    #[test]
    fn test_clipboard_receives_all_sections() {
        let (store, _temp) = setup();
        let exporter = ResultsExporter::new(&store, &Settings::default());
        let clipboard = FakeClipboard::default();

        let mut status = None;
        exporter.copy_to_clipboard(&clipboard, |s| status = Some(s));

        assert_eq!(status, Some(ClipboardStatus::Copied));
        let text = clipboard.contents.borrow().clone().unwrap();
        assert_eq!(text.matches("Contest: ").count(), 4);
        assert!(text.contains("\tAsha\t"));
    }
}
