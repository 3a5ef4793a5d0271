use std::path::PathBuf;

use crate::datastructures::InstanceId;
use crate::error::ReportError;

use super::*;

#[test]
fn test_checkpoint_line() {
    assert_eq!(
        parse_line("Time: 120.5 / 300.0 [s] Best objective: 190.77"),
        LogLine::Checkpoint {
            max_run_time: 300.0,
            objective: 190.77
        }
    );
}

#[test]
fn test_sample_line() {
    assert_eq!(
        parse_line("\tt = 5.000 [s] \t obj = 250.000"),
        LogLine::Sample {
            time: 5.0,
            objective: 250.0
        }
    );
}

#[test]
fn test_unmatched_lines() {
    assert_eq!(parse_line("#Solutions found: 12"), LogLine::Unmatched);
    assert_eq!(parse_line("Time: 12.3 [s]"), LogLine::Unmatched);
    assert_eq!(parse_line(""), LogLine::Unmatched);
}

#[test]
fn test_header_is_kept_verbatim() {
    assert_eq!(
        parse_header("insertion_0\n"),
        LogLine::Header("insertion_0".to_string())
    );
}

#[test]
fn test_instance_from_dated_filename() {
    let path = PathBuf::from(
        "data/darp/results/2022-01-17_18:50_a13-144_insertion_2.txt",
    );
    let (instance, tag) = instance_from_filename(&path).unwrap();
    assert_eq!(instance, InstanceId::new('a', 13, 144));
    assert_eq!(tag, "insertion_2");
    assert_eq!(instance.to_string(), "a13-144");
}

#[test]
fn test_unparsable_filename() {
    let path = PathBuf::from("results/summary.csv");
    assert!(matches!(
        instance_from_filename(&path),
        Err(ReportError::UnparsableFilename(_))
    ));
}
