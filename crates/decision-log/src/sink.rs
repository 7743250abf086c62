use std::path::Path;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::entry::DecisionEntry;
use crate::writer::{LogWriteError, LogWriter};

/// Channel buffer between producers and the background writer task.
const CHANNEL_BUFFER: usize = 256;

/// Upper bound on entries folded into a single append.
const BATCH_SIZE: usize = 64;

/// Cheap, cloneable handle used to submit [`DecisionEntry`] values to the
/// background decision-log writer.
///
/// `DecisionSink` is `Clone + Send + Sync`, so one sink can be shared
/// across request handlers and components.
#[derive(Clone)]
pub struct DecisionSink {
    tx: mpsc::Sender<DecisionEntry>,
}

impl DecisionSink {
    /// Spawn the background writer task and return a `(sink, join_handle)`
    /// pair.
    ///
    /// The task gathers whatever entries are queued (up to [`BATCH_SIZE`])
    /// and appends them as one batch, syncing whenever the channel runs
    /// empty, so the file is current as soon as the producers go quiet.
    /// When the last sink clone is dropped the channel closes and the task
    /// syncs once more and exits.
    ///
    /// I/O errors inside the task are logged via `tracing::error` and the
    /// affected batch is skipped; the task never panics.
    pub async fn start(
        path: impl AsRef<Path>,
    ) -> Result<(Self, JoinHandle<()>), LogWriteError> {
        let (tx, rx) = mpsc::channel::<DecisionEntry>(CHANNEL_BUFFER);
        let writer = LogWriter::open(path).await?;

        let handle = tokio::spawn(drain_loop(writer, rx));

        Ok((Self { tx }, handle))
    }

    /// Send an entry to the background writer.
    ///
    /// Waits asynchronously when the channel is full.  If the background
    /// task has already exited the entry is dropped with a warning.
    pub async fn record(&self, entry: DecisionEntry) {
        if let Err(err) = self.tx.send(entry).await {
            tracing::warn!(
                event = ?err.0.event,
                "decision sink channel closed; entry dropped"
            );
        }
    }
}

/// Batch-drain loop executed inside the background task.
async fn drain_loop(mut writer: LogWriter, mut rx: mpsc::Receiver<DecisionEntry>) {
    let mut batch = Vec::with_capacity(BATCH_SIZE);

    loop {
        batch.clear();
        if rx.recv_many(&mut batch, BATCH_SIZE).await == 0 {
            // Channel closed and fully drained.
            if let Err(err) = writer.sync().await {
                tracing::error!(%err, "failed to sync decision log on shutdown");
            }
            tracing::debug!("decision-log writer task shutting down");
            return;
        }

        if let Err(err) = writer.append(&batch).await {
            tracing::error!(%err, count = batch.len(), "failed to append decision batch");
            continue;
        }

        // Producers have gone quiet; make the file current.
        if rx.is_empty() {
            if let Err(err) = writer.sync().await {
                tracing::error!(%err, "failed to sync decision log");
            }
        }
    }
}
