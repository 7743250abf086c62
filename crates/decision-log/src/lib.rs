//! Append-only JSON-lines trail of policy compilation and evaluation
//! events for the lexguard pipeline.
//!
//! Every compile, store, and evaluation outcome is serialised as one
//! newline-terminated JSON object and appended to a log file, producing a
//! [JSON Lines](https://jsonlines.org/) stream that is easy to ship,
//! parse, and replay when reviewing access decisions.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use decision_log::{DecisionEntry, DecisionEvent, DecisionSink};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (sink, _handle) = DecisionSink::start("decisions.jsonl").await?;
//!
//! sink.record(DecisionEntry::new(
//!     DecisionEvent::ProcessStarted,
//!     "lexguard",
//!     serde_json::json!({"version": "0.1.0"}),
//! ))
//! .await;
//! # Ok(())
//! # }
//! ```

pub mod entry;
pub mod sink;
pub mod writer;

// Re-export primary public types at the crate root for convenience.
pub use entry::{DecisionEntry, DecisionEvent, Verdict};
pub use sink::DecisionSink;
pub use writer::{LogWriteError, LogWriter};
