use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::datastructures::InstanceId;
use crate::error::{ReportError, Result};

static BEST_RESULT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"Time:\s*\d+(?:\.\d+)?\s*/\s*(\d+(?:\.\d+)?).*Best objective:\s*(\d+(?:\.\d+)?)",
    )
    .expect("valid best result pattern")
});

static SOLUTION_FOUND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"t\s*=\s*(\d+(?:\.\d+)?).*obj\s*=\s*(\d+(?:\.\d+)?)")
        .expect("valid solution found pattern")
});

static INSTANCE_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-z])(\d+)-(\d+)_(.+)\.txt$")
        .expect("valid instance file pattern")
});

/// A classified line of a solver log.
#[derive(Debug, Clone, PartialEq)]
pub enum LogLine {
    /// First line of a file: the solver's display name
    Header(String),
    /// `Time: <elapsed> / <max> ... Best objective: <value>`, opens a run
    Checkpoint {
        /// Run time limit, the value after the slash
        max_run_time: f64,
        /// Best objective of the run
        objective: f64,
    },
    /// `t = <time> ... obj = <value>`, an improvement in the open run
    Sample {
        /// Seconds since the start of the run
        time: f64,
        /// Objective of the solution found
        objective: f64,
    },
    /// Anything else
    Unmatched,
}

/// Classify a line that follows the header.
///
/// Checkpoints are tried before samples since a checkpoint line may also
/// contain `t = ... obj = ...` fragments.
pub fn parse_line(line: &str) -> LogLine {
    if let Some((max_run_time, objective)) = capture_pair(&BEST_RESULT, line)
    {
        return LogLine::Checkpoint {
            max_run_time,
            objective,
        };
    }
    if let Some((time, objective)) = capture_pair(&SOLUTION_FOUND, line) {
        return LogLine::Sample { time, objective };
    }
    LogLine::Unmatched
}

/// Classify the first line of a file.
pub fn parse_header(line: &str) -> LogLine {
    LogLine::Header(line.trim_end_matches(['\r', '\n']).to_string())
}

fn capture_pair(pattern: &Regex, line: &str) -> Option<(f64, f64)> {
    let captures = pattern.captures(line)?;
    let first = captures.get(1)?.as_str().parse().ok()?;
    let second = captures.get(2)?.as_str().parse().ok()?;
    Some((first, second))
}

/// Extract the instance id and the solver variant tag from a file named
/// `<class><vehicles>-<requests>_<tag>.txt`, optionally prefixed (e.g. by
/// a date).
pub fn instance_from_filename(path: &Path) -> Result<(InstanceId, String)> {
    let unparsable = || ReportError::UnparsableFilename(path.to_path_buf());
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(unparsable)?;
    let captures = INSTANCE_FILE.captures(file_name).ok_or_else(unparsable)?;
    let class = captures[1].chars().next().ok_or_else(unparsable)?;
    let vehicles = captures[2].parse().map_err(|_| unparsable())?;
    let requests = captures[3].parse().map_err(|_| unparsable())?;
    Ok((
        InstanceId::new(class, vehicles, requests),
        captures[4].to_string(),
    ))
}

#[cfg(test)]
mod tests;
