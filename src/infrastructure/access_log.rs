//! Append-only diagnostic file for request/response traffic.

use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::error;

/// Line-oriented append-only log file.
///
/// Writes are serialized through a mutex so lines from concurrent requests
/// never interleave. Write failures are reported via `tracing` and otherwise
/// ignored.
#[derive(Debug)]
pub struct AccessLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl AccessLog {
    /// Opens (creating if needed) the file at `path` in append mode.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened.
    pub async fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one line; a trailing newline is added.
    pub async fn append(&self, line: &str) {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        let mut file = self.file.lock().await;
        if let Err(e) = file.write_all(buf.as_bytes()).await {
            error!(path = %self.path.display(), "Failed to write access log: {}", e);
            return;
        }
        if let Err(e) = file.flush().await {
            error!(path = %self.path.display(), "Failed to flush access log: {}", e);
        }
    }
}
