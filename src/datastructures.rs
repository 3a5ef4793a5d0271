use core::fmt;
use std::{collections::BTreeMap, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Display name of a solver, the first line of its logs.
pub type Solver = String;

/// Objective value of a solution reported at `time` seconds into a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Seconds since the start of the run
    pub time: f64,
    /// Objective of the solution
    pub objective: f64,
}

impl Sample {
    /// A sample at `time` with `objective`.
    pub fn new(time: f64, objective: f64) -> Self {
        Self { time, objective }
    }
}

/// One independent solver execution.
///
/// `best_objective` is the value of the best-result checkpoint that opened
/// the run, `samples` the improvements found afterwards in time order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Run {
    /// Value of the best-result checkpoint that opened the run
    pub best_objective: f64,
    /// Improvements, ascending in time
    pub samples: Vec<Sample>,
}

impl Run {
    /// A run without samples yet.
    pub fn new(best_objective: f64) -> Self {
        Self {
            best_objective,
            samples: vec![],
        }
    }

    /// The final, best sample of the run.
    pub fn last_sample(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// True if the run has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// All runs of one solver on one instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolverResult {
    /// Runs in log order
    pub runs: Vec<Run>,
    /// Run time limit of the last checkpoint parsed, `None` without runs.
    pub max_run_time: Option<f64>,
}

impl SolverResult {
    /// Values of the best-result checkpoints, in log order.
    pub fn checkpoints(&self) -> impl Iterator<Item = f64> + '_ {
        self.runs.iter().map(|run| run.best_objective)
    }
}

/// Identifier of a problem instance such as `a5-48`: class letter, number
/// of vehicles and number of requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId {
    /// Instance class letter
    pub class: char,
    /// Number of vehicles (m)
    pub vehicles: u32,
    /// Number of requests (n)
    pub requests: u32,
}

impl InstanceId {
    /// An id such as `a5-48` from its parts.
    pub fn new(class: char, vehicles: u32, requests: u32) -> Self {
        Self {
            class,
            vehicles,
            requests,
        }
    }
}

impl FromStr for InstanceId {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ReportError::InvalidInstanceId(s.to_string());
        let mut chars = s.chars();
        let class = chars
            .next()
            .filter(|c| c.is_ascii_alphabetic())
            .ok_or_else(invalid)?;
        let (m, n) = chars.as_str().split_once('-').ok_or_else(invalid)?;
        let vehicles = m.parse().map_err(|_| invalid())?;
        let requests = n.parse().map_err(|_| invalid())?;
        Ok(Self::new(class, vehicles, requests))
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}", self.class, self.vehicles, self.requests)
    }
}

/// Mean and best objective of a solver on one instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanBest {
    /// Average over all runs
    pub mean: f64,
    /// Lowest over all runs
    pub best: f64,
}

impl MeanBest {
    /// Pair `mean` with `best`.
    pub fn new(mean: f64, best: f64) -> Self {
        Self { mean, best }
    }
}

/// Instance id → (mean, best) of one solver.
pub type ResultSet = BTreeMap<String, MeanBest>;
