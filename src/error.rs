use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while turning solver logs into summaries, tables and plots.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The log file could not be opened or read
    #[error("failed to read {path:?}: {source}")]
    UnreadableFile {
        /// File that failed
        path: PathBuf,
        /// Underlying io error
        #[source]
        source: io::Error,
    },

    /// No instance identifier could be extracted from the file name
    #[error("no instance id in file name {0:?}")]
    UnparsableFilename(PathBuf),

    /// The log lines are not in the order the collector expects
    #[error("malformed log at line {line}: {detail}")]
    MalformedLogOrdering {
        /// 1-based line number
        line: usize,
        /// What is out of order
        detail: String,
    },

    /// The log file is empty, so there is no solver name
    #[error("no solver name in {0:?}")]
    MissingSolverName(PathBuf),

    /// Statistics or plots requested over zero runs or samples
    #[error("no data: {0}")]
    EmptyResultSet(String),

    /// A table was requested for two result sets without common instances
    #[error("no common instances between {left} and {right}")]
    DisjointInstanceSets {
        /// Solver of the first result set
        left: String,
        /// Solver of the second result set
        right: String,
    },

    /// An instance id does not follow `<class><vehicles>-<requests>`
    #[error("invalid instance id {0:?}")]
    InvalidInstanceId(String),

    /// The deadline of a plotted run lies before its last sample
    #[error("max run time {max_run_time} is before sample at {time}")]
    DeadlineBeforeSample {
        /// Time of the last sample
        time: f64,
        /// Run time limit of the run
        max_run_time: f64,
    },

    /// Failed to (de)serialize a figure or a table
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write output
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
