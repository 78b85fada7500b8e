//! JSONL file writer for captured answers.
//!
//! Each [`AnswerRecord`] is serialized as a single JSON line and appended
//! via a buffered writer. The store honors the port contract: failures are
//! logged and swallowed, never surfaced into the screening flow.

use navigator_application::{AnswerRecord, AnswerStore};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Answer store that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`; each record is flushed as it
/// is written so an interrupted screening still leaves its answers on disk.
pub struct JsonlAnswerStore {
    writer: Mutex<BufWriter<std::fs::File>>,
    path: PathBuf,
}

impl JsonlAnswerStore {
    /// Open (or create) the log at the given path, appending to existing
    /// content. Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create answer log directory {}: {}", parent.display(), e);
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open answer log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnswerStore for JsonlAnswerStore {
    fn record(&self, record: AnswerRecord) {
        let line = match serde_json::to_string(&record) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not serialize answer record: {}", e);
                return;
            }
        };

        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(writer, "{}", line).and_then(|()| writer.flush()) {
            warn!("Could not write answer record to {}: {}", self.path.display(), e);
        }
    }
}
