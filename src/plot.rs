use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::datastructures::*;
use crate::error::{ReportError, Result};
use crate::summary;

const TIME_LABEL: &str = "time [s]";
const OBJECTIVE_LABEL: &str = "objective";

/// One line of a convergence plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    /// Legend entry, `None` for unlabeled runs
    pub label: Option<String>,
    /// (time, objective) steps
    pub points: Vec<(f64, f64)>,
}

/// Data handed to the external plotting backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Instance id, plus solver and run count for all-runs figures
    pub title: String,
    /// Always `time [s]`
    pub x_label: String,
    /// Always `objective`
    pub y_label: String,
    /// One line per solver or run
    pub series: Vec<PlotSeries>,
}

impl Figure {
    pub(crate) fn new(title: String, series: Vec<PlotSeries>) -> Self {
        Self {
            title,
            x_label: TIME_LABEL.to_string(),
            y_label: OBJECTIVE_LABEL.to_string(),
            series,
        }
    }
}

/// Step series of a run: the samples, then the last objective held until
/// `max_run_time`.
pub fn convergence_series(
    run: &Run,
    max_run_time: f64,
) -> Result<Vec<(f64, f64)>> {
    let last = run.last_sample().ok_or_else(|| {
        ReportError::EmptyResultSet("cannot plot a run without samples".into())
    })?;
    if max_run_time < last.time {
        return Err(ReportError::DeadlineBeforeSample {
            time: last.time,
            max_run_time,
        });
    }
    let mut points = run
        .samples
        .iter()
        .map(|sample| (sample.time, sample.objective))
        .collect::<Vec<_>>();
    points.push((max_run_time, last.objective));
    Ok(points)
}

/// The run whose final sample is the lowest, the first one on ties.
pub fn best_run_selector(runs: &[Run]) -> Result<&Run> {
    Ok(&runs[summary::best_run(runs)?])
}

fn max_run_time_of(result: &SolverResult) -> Result<f64> {
    result.max_run_time.ok_or_else(|| {
        ReportError::EmptyResultSet("no run time limit reported".into())
    })
}

fn label_of<'a>(
    labels: &'a BTreeMap<String, String>,
    solver: &'a str,
) -> &'a str {
    labels.get(solver).map(String::as_str).unwrap_or(solver)
}

/// The best run of every solver on one instance. Solvers without a
/// plottable run are reported and left out.
pub fn best_run_figure(
    instance: &InstanceId,
    solvers: &BTreeMap<Solver, SolverResult>,
    labels: &BTreeMap<String, String>,
) -> Result<Figure> {
    let mut series = Vec::with_capacity(solvers.len());
    for (solver, result) in solvers {
        let points = best_run_selector(&result.runs).and_then(|run| {
            convergence_series(run, max_run_time_of(result)?)
        });
        match points {
            Ok(points) => series.push(PlotSeries {
                label: Some(label_of(labels, solver).to_string()),
                points,
            }),
            Err(err) => warn!("leaving {solver} out of {instance}: {err}"),
        }
    }
    if series.is_empty() {
        return Err(ReportError::EmptyResultSet(format!(
            "no solver found a solution on {instance}"
        )));
    }
    Ok(Figure::new(instance.to_string(), series))
}

/// Every run of one solver on one instance. Runs without samples are left
/// out of the plot but still counted in the title.
pub fn all_runs_figure(
    instance: &InstanceId,
    solver: &str,
    result: &SolverResult,
    labels: &BTreeMap<String, String>,
) -> Result<Figure> {
    let max_run_time = max_run_time_of(result)?;
    let series = result
        .runs
        .iter()
        .filter(|run| !run.is_empty())
        .map(|run| -> Result<PlotSeries> {
            Ok(PlotSeries {
                label: None,
                points: convergence_series(run, max_run_time)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    if series.is_empty() {
        return Err(ReportError::EmptyResultSet(format!(
            "{solver} found no solution on {instance}"
        )));
    }
    Ok(Figure::new(
        format!(
            "{instance} {} ({} runs)",
            label_of(labels, solver),
            result.runs.len()
        ),
        series,
    ))
}

/// File name stem of the all-runs figure of `label` on `instance`.
pub fn figure_file_name(instance: &InstanceId, label: &str) -> String {
    format!("{instance}_{}", label.replace("+ ", "").replace(' ', "_"))
}

/// Write `figure` as pretty JSON to `<out_dir>/<name>.json`.
pub fn write_figure(
    out_dir: &Path,
    name: &str,
    figure: &Figure,
) -> Result<PathBuf> {
    let path = out_dir.join(format!("{name}.json"));
    serde_json::to_writer_pretty(fs::File::create(&path)?, figure)?;
    Ok(path)
}
