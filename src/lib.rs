#![warn(missing_docs)]
//! Turn solver log files into run trajectories, summary statistics,
//! comparison tables and convergence plot data.
//!
//! Every log file holds the runs of one solver on one DARP instance. The
//! first line names the solver, each best-result checkpoint
//! (`Time: <elapsed> / <limit> ... Best objective: <value>`) opens a run and
//! the following `t = <time> ... obj = <value>` lines are the improvements
//! found during that run. The instance is taken from the file name
//! (`<class><vehicles>-<requests>_<tag>.txt`).
//!
//! The crate also ships 2 executables: `solver_log_stats`, which prints a
//! LaTeX table per solver against a baseline and writes plot data, and
//! `best_known_table`, which lists the instances where a better solution
//! than the best known one was found.
//!
//! Example
//! ```rust
//! use solver_log_stats::baseline::BaselineTable;
//! use solver_log_stats::instance_index::MergePolicy;
//! use solver_log_stats::{run_collector, summary, table};
//! # use std::path::PathBuf;
//! # use anyhow::Result;
//!
//! fn example() -> Result<()> {
//!     let paths = [PathBuf::from("a5-48_insertion_0.txt")];
//!     // unreadable or badly named files are logged and skipped
//!     let index = run_collector::collect_files(&paths, MergePolicy::default());
//!
//!     for summary in summary::summarize_index(&index) {
//!         println!("{summary}");
//!     }
//!
//!     let values = summary::result_set(&index, "insertion_0");
//!     let comparison = table::build_table_vs_baseline(
//!         "insertion_0",
//!         &values,
//!         &BaselineTable::lns_ffpa(),
//!         Some('a'), // only compare instances of class a
//!     )?;
//!     println!("{}", comparison.to_latex("5 minutes run", 2));
//!     Ok(())
//! }
//! ```

/// Reference (mean, best) results to compare against.
pub mod baseline;

/// Best found vs. best known solutions.
pub mod best_known;

/// Command line and json configuration of the executables.
pub mod config;

/// Data structures shared by the parsing and reporting modules.
pub mod datastructures;

/// Error type of the library.
pub mod error;

/// Grouping of parsed logs by instance and solver.
pub mod instance_index;

/// Classification of single log lines and log file names.
pub mod log_parser;

/// Convergence plot series and figures for an external renderer.
pub mod plot;

/// Reconstruction of runs from the lines of a log file.
pub mod run_collector;

/// Best, mean, best run and first solution per solver and instance.
pub mod summary;

/// Head-to-head tables with highlighted best values.
pub mod table;

/// Checks of solutions reported by an external checker.
pub mod validation;
