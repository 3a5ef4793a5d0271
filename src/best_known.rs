use core::fmt;
use std::{
    collections::{btree_map::Entry, BTreeMap},
    fs,
    path::Path,
};

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ReportError, Result};

static IMPROVED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"improved.*\|\s+(\d+\.\d+)\s+\|\s+(\d+\.\d+)\s+\|")
        .expect("valid improved pattern")
});

static BEST_KNOWN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\S+)\W+(\d+\.?\d*)").expect("valid best known pattern")
});

/// `<instance> <value>` line of a best-known-solutions file.
pub fn parse_best_known_line(line: &str) -> Option<(String, f64)> {
    let captures = BEST_KNOWN.captures(line)?;
    let value = captures[2].parse().ok()?;
    Some((captures[1].to_string(), value))
}

/// Instance, objective and time of a line reporting an improved solution.
pub fn parse_improved_line(line: &str) -> Option<(String, f64, f64)> {
    if !line.contains("improved") {
        return None;
    }
    let instance = line.split(' ').next()?.to_string();
    let captures = IMPROVED.captures(line)?;
    let objective = captures[1].parse().ok()?;
    let time = captures[2].parse().ok()?;
    Some((instance, objective, time))
}

/// All parsable lines of a best-known-solutions file.
pub fn read_best_known(path: &Path) -> Result<BTreeMap<String, f64>> {
    Ok(read_lines(path)?
        .lines()
        .filter_map(parse_best_known_line)
        .collect())
}

fn read_lines(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ReportError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Best solution found per instance over several result files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestFound {
    solutions: BTreeMap<String, (f64, f64)>,
}

impl BestFound {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the lower objective, the earlier time on equal objectives.
    pub fn record(&mut self, instance: String, objective: f64, time: f64) {
        match self.solutions.entry(instance) {
            Entry::Vacant(entry) => {
                entry.insert((objective, time));
            }
            Entry::Occupied(mut entry) => {
                let (best, best_time) = *entry.get();
                if objective < best || (objective == best && time < best_time)
                {
                    entry.insert((objective, time));
                }
            }
        }
    }

    /// Record every improved-solution line of `content`.
    pub fn record_str(&mut self, content: &str) {
        for (instance, objective, time) in
            content.lines().filter_map(parse_improved_line)
        {
            self.record(instance, objective, time);
        }
    }

    /// [`BestFound::record_str`] on the content of a file.
    pub fn record_file(&mut self, path: &Path) -> Result<()> {
        self.record_str(&read_lines(path)?);
        Ok(())
    }

    /// Objective and time of the best solution found on `instance`.
    pub fn get(&self, instance: &str) -> Option<(f64, f64)> {
        self.solutions.get(instance).copied()
    }

    /// Number of instances with a solution.
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

/// An instance on which a better solution than the best known one was
/// found.
#[derive(Debug, Clone, PartialEq)]
pub struct ImprovementRow {
    /// Directory of the instance, e.g. `Cordeau`
    pub instance_set: String,
    /// File stem of the instance
    pub instance: String,
    /// Best known objective
    pub best_known: f64,
    /// Best objective found, unscaled
    pub found: f64,
    /// Seconds until `found` was reached
    pub time: f64,
}

impl fmt::Display for ImprovementRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {} & ", self.instance_set, self.instance)?;
        if self.best_known.fract() == 0.0 && self.found.fract() == 0.0 {
            let (known, found) = (self.best_known as i64, self.found as i64);
            write!(f, "${known}$ & ${found}$")?;
        } else {
            write!(f, "${}$ & ${}$", self.best_known, self.found)?;
        }
        write!(f, " & ${:.2}$ \\\\ ", self.time)
    }
}

// drops the representation error of the scaling, e.g. 123.4 * 10.0
fn round_scaled(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Rows of the improvement table, `found` objectives multiplied by `scale`.
/// Instances are named `<set>/<file>`; instances missing from `best_known`
/// are reported and skipped.
pub fn improvement_rows(
    best_found: &BestFound,
    best_known: &BTreeMap<String, f64>,
    scale: f64,
) -> Vec<ImprovementRow> {
    best_found
        .solutions
        .iter()
        .filter_map(|(instance, &(objective, time))| {
            let Some((instance_set, file)) = instance.split_once('/') else {
                warn!("{instance} is not named <set>/<instance>");
                return None;
            };
            let Some(&known) = best_known.get(file) else {
                warn!("no best known solution for {file}");
                return None;
            };
            let name = match file.rsplit_once('.') {
                Some((stem, _)) => stem,
                None => file,
            };
            Some(ImprovementRow {
                instance_set: instance_set.to_string(),
                instance: name.to_string(),
                best_known: known,
                found: round_scaled(objective * scale),
                time,
            })
        })
        .collect()
}
