use core::fmt;

use log::warn;

use crate::datastructures::*;
use crate::error::{ReportError, Result};
use crate::instance_index::InstanceIndex;

/// Aggregated statistics of one solver on one instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Instance the runs were made on
    pub instance: InstanceId,
    /// Display name of the solver
    pub solver: Solver,
    /// Runs in the log, including runs without samples
    pub num_runs: usize,
    /// Lowest best-result checkpoint
    pub best: f64,
    /// Average of the best-result checkpoints
    pub mean: f64,
    /// Index of the run with the lowest final sample
    pub best_run: usize,
    /// Earliest sample over all runs
    pub first_solution: Sample,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "instance {} solver {}: best result = {:.3} mean result = {:.3}. \
             first sol = {:.3} at {:.3} [s]",
            self.instance,
            self.solver,
            self.best,
            self.mean,
            self.first_solution.objective,
            self.first_solution.time
        )
    }
}

/// Lowest and average best-result checkpoint value.
pub fn best_and_mean(result: &SolverResult) -> Result<MeanBest> {
    let (count, sum, best) = result.checkpoints().fold(
        (0_usize, 0.0, f64::INFINITY),
        |(count, sum, best), value| (count + 1, sum + value, best.min(value)),
    );
    if count == 0 {
        return Err(ReportError::EmptyResultSet(
            "no best result reported".to_string(),
        ));
    }
    Ok(MeanBest::new(sum / count as f64, best))
}

/// Index of the run whose last sample has the lowest objective. Runs
/// without samples are ignored, ties go to the earliest run.
pub fn best_run(runs: &[Run]) -> Result<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, run) in runs.iter().enumerate() {
        let Some(last) = run.last_sample() else {
            continue;
        };
        match best {
            Some((_, objective)) if last.objective >= objective => (),
            _ => best = Some((idx, last.objective)),
        }
    }
    best.map(|(idx, _)| idx).ok_or_else(|| {
        ReportError::EmptyResultSet("no run with a solution".to_string())
    })
}

/// Earliest sample over all runs, the first one seen on ties.
pub fn first_solution(runs: &[Run]) -> Result<Sample> {
    runs.iter()
        .flat_map(|run| run.samples.iter())
        .min_by(|a, b| a.time.total_cmp(&b.time))
        .copied()
        .ok_or_else(|| {
            ReportError::EmptyResultSet("no solution found".to_string())
        })
}

/// All statistics of `solver` on `instance`, an error if it has no run or
/// no sample.
pub fn summarize(
    instance: InstanceId,
    solver: &str,
    result: &SolverResult,
) -> Result<Summary> {
    if result.runs.is_empty() {
        return Err(ReportError::EmptyResultSet(format!(
            "{solver} has no run on {instance}"
        )));
    }
    let MeanBest { mean, best } = best_and_mean(result)?;
    Ok(Summary {
        instance,
        solver: solver.to_string(),
        num_runs: result.runs.len(),
        best,
        mean,
        best_run: best_run(&result.runs)?,
        first_solution: first_solution(&result.runs)?,
    })
}

/// Summaries of every (instance, solver) pair with data, in index order.
pub fn summarize_index(index: &InstanceIndex) -> Vec<Summary> {
    index
        .iter()
        .flat_map(|(instance, solvers)| {
            solvers.iter().filter_map(move |(solver, result)| {
                summarize(*instance, solver, result)
                    .map_err(|err| warn!("{instance} {solver}: {err}"))
                    .ok()
            })
        })
        .collect()
}

/// The (mean, best) of `solver` on every instance it has results for.
pub fn result_set(index: &InstanceIndex, solver: &str) -> ResultSet {
    index
        .iter()
        .filter_map(|(instance, solvers)| {
            let result = solvers.get(solver)?;
            match best_and_mean(result) {
                Ok(values) => Some((instance.to_string(), values)),
                Err(err) => {
                    warn!("dropping {instance} for {solver}: {err}");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests;
