use crate::datastructures::*;
use crate::error::ReportError;
use crate::instance_index::{InstanceIndex, MergePolicy};

use super::*;

fn run(best: f64, samples: &[(f64, f64)]) -> Run {
    Run {
        best_objective: best,
        samples: samples.iter().map(|&(t, o)| Sample::new(t, o)).collect(),
    }
}

fn three_runs() -> SolverResult {
    SolverResult {
        runs: vec![
            run(310.0, &[(2.0, 400.0), (50.0, 310.0)]),
            run(303.0, &[(1.5, 380.0), (90.0, 303.0)]),
            run(303.0, &[(3.0, 390.0), (120.0, 303.0)]),
        ],
        max_run_time: Some(300.0),
    }
}

#[test]
fn test_single_run_scenario() {
    let result = SolverResult {
        runs: vec![run(190.77, &[(5.0, 250.0), (80.0, 190.77)])],
        max_run_time: Some(300.0),
    };
    let summary =
        summarize(InstanceId::new('a', 3, 24), "MySolver", &result).unwrap();
    assert_eq!(summary.best, 190.77);
    assert_eq!(summary.mean, 190.77);
    assert_eq!(summary.best_run, 0);
    assert_eq!(summary.first_solution, Sample::new(5.0, 250.0));
    assert_eq!(
        summary.to_string(),
        "instance a3-24 solver MySolver: best result = 190.770 \
         mean result = 190.770. first sol = 250.000 at 5.000 [s]"
    );
}

#[test]
fn test_best_and_mean_over_checkpoints() {
    let values = best_and_mean(&three_runs()).unwrap();
    assert_eq!(values.best, 303.0);
    assert!((values.mean - 305.333_333).abs() < 1e-5);
}

#[test]
fn test_best_run_ties_go_to_first() {
    let runs = three_runs().runs;
    assert_eq!(best_run(&runs).unwrap(), 1);
    // selection is stable when repeated
    assert_eq!(best_run(&runs).unwrap(), best_run(&runs).unwrap());
}

#[test]
fn test_best_run_skips_empty_runs() {
    let runs = vec![run(10.0, &[]), run(12.0, &[(1.0, 12.0)])];
    assert_eq!(best_run(&runs).unwrap(), 1);
}

#[test]
fn test_first_solution_is_earliest() {
    assert_eq!(
        first_solution(&three_runs().runs).unwrap(),
        Sample::new(1.5, 380.0)
    );
}

#[test]
fn test_no_data() {
    let empty = SolverResult::default();
    assert!(matches!(
        best_and_mean(&empty),
        Err(ReportError::EmptyResultSet(_))
    ));
    assert!(matches!(
        best_run(&empty.runs),
        Err(ReportError::EmptyResultSet(_))
    ));
    assert!(matches!(
        first_solution(&[run(10.0, &[])]),
        Err(ReportError::EmptyResultSet(_))
    ));
    assert!(matches!(
        summarize(InstanceId::new('a', 5, 48), "solver", &empty),
        Err(ReportError::EmptyResultSet(_))
    ));
}

#[test]
fn test_result_set_skips_instances_without_data() {
    let mut index = InstanceIndex::new(MergePolicy::default());
    index.insert(InstanceId::new('a', 5, 48), "s".into(), three_runs());
    index.insert(
        InstanceId::new('a', 6, 72),
        "s".into(),
        SolverResult::default(),
    );
    index.insert(InstanceId::new('a', 7, 72), "t".into(), three_runs());
    let set = result_set(&index, "s");
    assert_eq!(set.len(), 1);
    assert_eq!(set["a5-48"].best, 303.0);
    assert_eq!(summarize_index(&index).len(), 2);
}
