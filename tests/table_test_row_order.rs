use solver_log_stats::{
    baseline::BaselineTable,
    datastructures::{MeanBest, ResultSet},
    table::{build_table, Extremum},
};

fn improved_means(baseline: &ResultSet) -> ResultSet {
    baseline
        .iter()
        .map(|(id, v)| (id.clone(), MeanBest::new(v.mean - 1.0, v.best)))
        .collect()
}

#[test]
fn test_rows_sorted_by_vehicles_and_requests() {
    // ids iterate lexicographically: a10-144, a11-120, a13-144, a3-24, ...
    let baseline = BaselineTable::lns_ffpa().restrict_to_class('a');
    let tested = improved_means(&baseline.values);
    let table = build_table(
        "tested",
        &tested,
        "LNS-FFPA",
        &baseline.values,
        Extremum::Min,
    )
    .unwrap();
    let order = table
        .rows
        .iter()
        .map(|row| (row.vehicles, row.requests))
        .collect::<Vec<_>>();
    assert_eq!(
        order,
        vec![
            (3, 24),
            (4, 36),
            (5, 48),
            (6, 72),
            (7, 72),
            (8, 108),
            (9, 96),
            (10, 144),
            (11, 120),
            (13, 144)
        ]
    );
    // swapping the sides only swaps the columns
    let swapped = build_table(
        "LNS-FFPA",
        &baseline.values,
        "tested",
        &tested,
        Extremum::Min,
    )
    .unwrap();
    for (row, swapped_row) in table.rows.iter().zip(&swapped.rows) {
        assert_eq!(row.instance, swapped_row.instance);
        assert_eq!(row.mean[0], swapped_row.mean[1]);
        assert_eq!(row.best[1], swapped_row.best[0]);
    }
}

#[test]
fn test_every_row_highlights_tested_mean() {
    let baseline = BaselineTable::lns_ffpa().restrict_to_class('b');
    let tested = improved_means(&baseline.values);
    let table = build_table(
        "tested",
        &tested,
        "LNS-FFPA",
        &baseline.values,
        Extremum::Min,
    )
    .unwrap();
    assert_eq!(table.rows.len(), 10);
    assert_eq!(table.instance_classes, vec!['b']);
    for row in &table.rows {
        assert!(row.mean[0].highlighted && !row.mean[1].highlighted);
        assert!(row.best[0].highlighted && row.best[1].highlighted);
    }
    assert!(table.average.mean[0].highlighted);
    assert!(!table.average.mean[1].highlighted);
}
