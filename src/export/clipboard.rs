//! Clipboard export
//!
//! The tab-separated encoding goes to the clipboard so it can be pasted
//! straight into a spreadsheet. The outcome is reported once through a
//! status callback; there is no retry.

use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::{ScoringError, ScoringResult};

use super::delimited::to_tsv;
use super::rows::ExportSection;

/// Outcome of a clipboard export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardStatus {
    Copied,
    Failed,
    Unsupported,
}

impl ClipboardStatus {
    pub fn message(self) -> &'static str {
        match self {
            Self::Copied => "Copied to clipboard. Paste into Google Sheets.",
            Self::Failed => "Copy failed. Use Export CSV and import into Google Sheets.",
            Self::Unsupported => {
                "Copy not supported. Use Export CSV and import into Google Sheets."
            }
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Copied
    }
}

impl fmt::Display for ClipboardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Destination for copied text
pub trait Clipboard {
    /// Whether a clipboard is available at all
    fn is_supported(&self) -> bool;

    fn write_text(&self, text: &str) -> ScoringResult<()>;
}

/// Copy every section's rows and report the outcome through `on_status`
pub fn export_to_clipboard<F>(sections: &[ExportSection], clipboard: &dyn Clipboard, on_status: F)
where
    F: FnOnce(ClipboardStatus),
{
    if !clipboard.is_supported() {
        on_status(ClipboardStatus::Unsupported);
        return;
    }

    let status = match clipboard.write_text(&to_tsv(sections)) {
        Ok(()) => ClipboardStatus::Copied,
        Err(e) => {
            warn!(error = %e, "clipboard write failed");
            ClipboardStatus::Failed
        }
    };
    on_status(status);
}

/// Clipboard backed by the platform's copy utility
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    command: Option<(&'static str, &'static [&'static str])>,
}

const CANDIDATES: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

impl SystemClipboard {
    /// Use the first copy utility found on `PATH`
    pub fn detect() -> Self {
        let command = CANDIDATES
            .iter()
            .copied()
            .find(|(program, _)| on_path(program));
        debug!(program = ?command.map(|(p, _)| p), "clipboard utility");
        Self { command }
    }
}

impl Clipboard for SystemClipboard {
    fn is_supported(&self) -> bool {
        self.command.is_some()
    }

    fn write_text(&self, text: &str) -> ScoringResult<()> {
        let (program, args) = self
            .command
            .ok_or_else(|| ScoringError::Clipboard("No clipboard utility found".into()))?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ScoringError::Clipboard(format!("Failed to start {}: {}", program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                // Reap the child so it does not linger
                let _ = child.kill();
                let _ = child.wait();
                return Err(ScoringError::Clipboard(format!(
                    "Failed to write to {}: {}",
                    program, e
                )));
            }
        }

        let status = child
            .wait()
            .map_err(|e| ScoringError::Clipboard(format!("{} did not finish: {}", program, e)))?;
        if !status.success() {
            return Err(ScoringError::Clipboard(format!(
                "{} exited with {}",
                program, status
            )));
        }
        Ok(())
    }
}

fn on_path(program: &str) -> bool {
    let Some(path) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&path).any(|dir| {
        let candidate = dir.join(program);
        candidate.is_file() || (cfg!(windows) && candidate.with_extension("exe").is_file())
    })
}
