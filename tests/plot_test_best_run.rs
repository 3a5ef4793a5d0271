use solver_log_stats::{
    datastructures::InstanceId, instance_index::MergePolicy, plot,
    run_collector,
};
use std::{collections::BTreeMap, path::PathBuf};

#[test]
fn test_best_run_figure_from_logs() {
    let files = vec![
        PathBuf::from("data/test/a5-48_insertion_0.txt"),
        "data/test/2022-01-17_18:50_a5-48_insertion_1.txt".into(),
    ];
    let index = run_collector::collect_files(&files, MergePolicy::default());
    let instance = InstanceId::new('a', 5, 48);
    let labels = BTreeMap::from([
        ("insertion_0".to_string(), "node + LNS node".to_string()),
        ("insertion_1".to_string(), "node + LNS request".to_string()),
    ]);
    let figure = plot::best_run_figure(
        &instance,
        index.solvers_of(&instance).unwrap(),
        &labels,
    )
    .unwrap();
    assert_eq!(figure.series.len(), 2);
    let node = &figure.series[0];
    assert_eq!(node.label.as_deref(), Some("node + LNS node"));
    assert_eq!(
        node.points,
        vec![(0.498, 398.1), (140.22, 303.03), (300.0, 303.03)]
    );
    for series in &figure.series {
        assert!(series.points.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(series.points.last().unwrap().0, 300.0);
    }
}
