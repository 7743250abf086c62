use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::entry::DecisionEntry;

/// Errors that can occur during decision-log I/O.
#[derive(Debug, thiserror::Error)]
pub enum LogWriteError {
    #[error("failed to open decision log {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode decision entry: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to append to decision log: {0}")]
    Append(std::io::Error),

    #[error("failed to sync decision log: {0}")]
    Sync(std::io::Error),
}

/// Append-only JSON-lines writer over the decision log file.
///
/// Entries are encoded into one in-memory buffer per batch and appended
/// with a single write, so a burst of verdicts costs one syscall instead
/// of one per entry.
#[derive(Debug)]
pub struct LogWriter {
    file: tokio::fs::File,
    buf: Vec<u8>,
}

impl LogWriter {
    /// Open (or create) the log file at `path` in append mode, creating
    /// missing parent directories.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, LogWriteError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| LogWriteError::Open {
                    path: path.to_path_buf(),
                    source,
                })?;
        }

        let file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|source| LogWriteError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            file,
            buf: Vec::with_capacity(1024),
        })
    }

    /// Encode every entry in `batch` as a newline-terminated JSON object
    /// and append them to the file in a single write.
    ///
    /// An encode failure aborts the whole batch before anything reaches
    /// the file, so the log never carries a torn line.
    pub async fn append(&mut self, batch: &[DecisionEntry]) -> Result<(), LogWriteError> {
        self.buf.clear();
        for entry in batch {
            serde_json::to_writer(&mut self.buf, entry)?;
            self.buf.push(b'\n');
        }

        self.file
            .write_all(&self.buf)
            .await
            .map_err(LogWriteError::Append)?;

        Ok(())
    }

    /// Flush buffered data down to the file.
    pub async fn sync(&mut self) -> Result<(), LogWriteError> {
        self.file.flush().await.map_err(LogWriteError::Sync)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::DecisionEvent;

    fn entry(component: &str) -> DecisionEntry {
        DecisionEntry::new(
            DecisionEvent::PolicyStored,
            component,
            serde_json::json!({}),
        )
    }

    #[tokio::test]
    async fn batch_append_writes_one_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.jsonl");

        let mut writer = LogWriter::open(&path).await.unwrap();
        writer
            .append(&[entry("a"), entry("b"), entry("c")])
            .await
            .unwrap();
        writer.sync().await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        let parsed: DecisionEntry = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(parsed.component, "c");
    }

    #[tokio::test]
    async fn consecutive_batches_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.jsonl");

        let mut writer = LogWriter::open(&path).await.unwrap();
        writer.append(&[entry("first")]).await.unwrap();
        writer.append(&[entry("second")]).await.unwrap();
        writer.sync().await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[tokio::test]
    async fn empty_batch_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.jsonl");

        let mut writer = LogWriter::open(&path).await.unwrap();
        writer.append(&[]).await.unwrap();
        writer.sync().await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[tokio::test]
    async fn open_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/log.jsonl");
        LogWriter::open(&path).await.unwrap();
        assert!(path.parent().unwrap().is_dir());
    }

    #[tokio::test]
    async fn open_failure_names_the_path() {
        // A directory cannot be opened for appending.
        let dir = tempfile::tempdir().unwrap();
        let err = LogWriter::open(dir.path()).await.unwrap_err();
        assert!(matches!(err, LogWriteError::Open { .. }));
        assert!(err.to_string().contains("failed to open decision log"));
    }
}
