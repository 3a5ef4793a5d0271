use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, error, warn};

use crate::datastructures::*;
use crate::error::{ReportError, Result};
use crate::instance_index::{InstanceIndex, MergePolicy};
use crate::log_parser::{self, LogLine};

/// Everything parsed from one solver log file.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedLog {
    /// Parsed from the file name
    pub instance: InstanceId,
    /// Solver variant suffix of the file name, e.g. `insertion_0`
    pub tag: String,
    /// Header line of the file
    pub solver: Solver,
    /// Runs in log order
    pub result: SolverResult,
}

/// Rebuilds the runs of a single log from its lines, fed in order.
#[derive(Debug, Default)]
pub struct RunCollector {
    solver: Option<Solver>,
    runs: Vec<Run>,
    max_run_time: Option<f64>,
    line: usize,
}

impl RunCollector {
    /// A collector waiting for the header line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the next line. Samples outside a run or going back in time
    /// are rejected with [`ReportError::MalformedLogOrdering`].
    pub fn feed(&mut self, line: &str) -> Result<()> {
        self.line += 1;
        let parsed = match self.solver {
            None => log_parser::parse_header(line),
            Some(_) => log_parser::parse_line(line),
        };
        match parsed {
            LogLine::Header(name) => self.solver = Some(name),
            LogLine::Checkpoint {
                max_run_time,
                objective,
            } => {
                self.runs.push(Run::new(objective));
                self.max_run_time = Some(max_run_time);
            }
            LogLine::Sample { time, objective } => {
                let line = self.line;
                let run = self.runs.last_mut().ok_or_else(|| {
                    ReportError::MalformedLogOrdering {
                        line,
                        detail: "solution found before any best result"
                            .to_string(),
                    }
                })?;
                if let Some(previous) = run.last_sample() {
                    if time < previous.time {
                        return Err(ReportError::MalformedLogOrdering {
                            line,
                            detail: format!(
                                "sample at {time} after sample at {}",
                                previous.time
                            ),
                        });
                    }
                }
                run.samples.push(Sample::new(time, objective));
            }
            LogLine::Unmatched => (),
        }
        Ok(())
    }

    /// The solver name and the collected runs, `None` if no line was fed.
    pub fn finish(self) -> Option<(Solver, SolverResult)> {
        let solver = self.solver?;
        Some((
            solver,
            SolverResult {
                runs: self.runs,
                max_run_time: self.max_run_time,
            },
        ))
    }
}

/// Parse the content of a log file whose name identifies the instance.
pub fn collect_str(path: &Path, content: &str) -> Result<CollectedLog> {
    let (instance, tag) = log_parser::instance_from_filename(path)?;
    let mut collector = RunCollector::new();
    for line in content.lines() {
        collector.feed(line)?;
    }
    let (solver, result) = collector
        .finish()
        .ok_or_else(|| ReportError::MissingSolverName(path.to_path_buf()))?;
    Ok(CollectedLog {
        instance,
        tag,
        solver,
        result,
    })
}

/// Read and parse one log file.
pub fn collect_file(path: &Path) -> Result<CollectedLog> {
    // the file name is checked before touching the file system
    log_parser::instance_from_filename(path)?;
    let content = fs::read_to_string(path).map_err(|source| {
        ReportError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let collected = collect_str(path, &content)?;
    debug!(
        "{:?}: {} runs of {} on {}",
        path,
        collected.result.runs.len(),
        collected.solver,
        collected.instance
    );
    Ok(collected)
}

/// Parse all files into an index. Files that fail are reported and skipped.
pub fn collect_files(paths: &[PathBuf], policy: MergePolicy) -> InstanceIndex {
    let mut index = InstanceIndex::new(policy);
    for path in paths {
        match collect_file(path) {
            Ok(CollectedLog {
                instance,
                solver,
                result,
                ..
            }) => index.insert(instance, solver, result),
            Err(err @ ReportError::MalformedLogOrdering { .. }) => {
                error!("skipping {:?}: {err}", path)
            }
            Err(err) => warn!("skipping {:?}: {err}", path),
        }
    }
    index
}
