use solver_log_stats::{
    datastructures::{InstanceId, Sample},
    instance_index::MergePolicy,
    run_collector, summary,
};
use std::path::PathBuf;

#[test]
fn test_summaries_from_log_files() {
    let files = vec![
        PathBuf::from("data/test/a5-48_insertion_0.txt"),
        "data/test/2022-01-17_18:50_a5-48_insertion_1.txt".into(),
        "data/test/a13-144_insertion_0.txt".into(),
    ];
    let index = run_collector::collect_files(&files, MergePolicy::default());
    let summaries = summary::summarize_index(&index);
    assert_eq!(summaries.len(), 3);

    let node = &summaries[0];
    assert_eq!(node.instance, InstanceId::new('a', 5, 48));
    assert_eq!(node.solver, "insertion_0");
    assert_eq!(node.best, 303.03);
    assert!((node.mean - 304.075).abs() < 1e-9);
    assert_eq!(node.best_run, 1);
    assert_eq!(node.first_solution, Sample::new(0.498, 398.1));

    let request = &summaries[1];
    assert_eq!(request.solver, "insertion_1");
    assert_eq!(request.best_run, 0);
    assert_eq!(request.mean, 305.25);

    let values = summary::result_set(&index, "insertion_0");
    assert_eq!(values.keys().collect::<Vec<_>>(), vec!["a13-144", "a5-48"]);
}
