use super::*;

#[test]
fn test_parse_checker_output() {
    assert_eq!(
        parse_checker_output("tourcost = 387.0 , constraint violations = 0"),
        Some(CheckerVerdict {
            cost: 387.0,
            violations: 0
        })
    );
    assert_eq!(parse_checker_output("Segmentation fault"), None);
}

#[test]
fn test_scaled_costs_match() {
    let comparison = CostComparison::default();
    assert!(comparison.matches(38.7, 387.0));
    assert!(comparison.matches(387.0, 38.7));
    assert!(comparison.matches(444.54, 444.54));
}

#[test]
fn test_different_costs_do_not_match() {
    let comparison = CostComparison::default();
    assert!(!comparison.matches(100.0, 1.5));
    assert!(!comparison.matches(38.7, 38.8));
}

#[test]
fn test_trailing_zeros_are_not_a_scale() {
    let comparison = CostComparison::default();
    assert!(!comparison.matches(100.0, 1.0));
    assert!(!comparison.matches(1000.0, 1.0));
    assert!(!comparison.matches(5.0, 500.0));
    let hundredfold = CostComparison {
        scale_factors: vec![1.0, 100.0],
        tolerance: 1e-6,
    };
    assert!(hundredfold.matches(100.0, 1.0));
}

#[test]
fn test_verify() {
    let verdict = CheckerVerdict {
        cost: 387.0,
        violations: 2,
    };
    assert_eq!(
        verify(38.7, &verdict, &CostComparison::default()),
        Verification {
            valid: false,
            same_cost: true
        }
    );
}
