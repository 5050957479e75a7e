//! Export CLI commands
//!
//! Every export covers all contests, ordered by contest name.

use clap::Subcommand;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{ScoringError, ScoringResult};
use crate::export::{ClipboardStatus, ResultsExporter, SystemClipboard, TextDocumentRenderer};
use crate::storage::DataStore;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Write results-all-contests.csv
    Csv {
        /// Directory to write into (defaults to the current directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Write results-all-contests.xls (tab-separated, opens in spreadsheets)
    Xls {
        /// Directory to write into (defaults to the current directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Write a printable document with one page per contest
    Document {
        /// Directory to write into (defaults to the current directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Copy tab-separated results to the clipboard
    Clipboard,
}

/// Handle an export command
pub fn handle_export_command(
    store: &DataStore,
    settings: &Settings,
    cmd: ExportCommands,
) -> ScoringResult<()> {
    let exporter = ResultsExporter::new(store, settings);

    let written = match cmd {
        ExportCommands::Csv { output_dir } => exporter.write_csv(&output_dir_or_cwd(output_dir))?,
        ExportCommands::Xls { output_dir } => {
            exporter.write_spreadsheet(&output_dir_or_cwd(output_dir))?
        }
        ExportCommands::Document { output_dir } => {
            exporter.write_document(&output_dir_or_cwd(output_dir), &TextDocumentRenderer)?
        }
        ExportCommands::Clipboard => {
            let mut outcome = ClipboardStatus::Unsupported;
            exporter.copy_to_clipboard(&SystemClipboard::detect(), |status| outcome = status);
            if !outcome.is_success() {
                return Err(ScoringError::Clipboard(outcome.message().to_string()));
            }
            println!("{}", outcome);
            return Ok(());
        }
    };

    println!("Exported results to {}", written.display());
    Ok(())
}

fn output_dir_or_cwd(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| PathBuf::from("."))
}
