use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::datastructures::*;
use crate::error::{ReportError, Result};

const LNS_FFPA: &str = "LNS-FFPA";

const LNS_FFPA_VALUES: [(&str, f64, f64); 20] = [
    ("a3-24", 190.77, 190.02),
    ("a4-36", 292.86, 291.71),
    ("a5-48", 304.45, 303.03),
    ("a6-72", 505.15, 494.91),
    ("a7-72", 547.39, 542.83),
    ("a8-108", 711.60, 696.51),
    ("a9-96", 595.05, 588.80),
    ("a10-144", 911.18, 891.98),
    ("a11-120", 662.56, 653.57),
    ("a13-144", 832.74, 816.79),
    ("b3-24", 164.46, 164.46),
    ("b4-36", 248.31, 248.21),
    ("b5-48", 301.67, 299.27),
    ("b6-72", 477.75, 469.73),
    ("b7-72", 504.69, 494.01),
    ("b8-108", 633.51, 620.54),
    ("b9-96", 566.48, 557.61),
    ("b10-144", 857.95, 838.65),
    ("b11-120", 610.33, 602.19),
    ("b13-144", 785.13, 771.69),
];

/// Precomputed (mean, best) results of a reference solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineTable {
    /// Name shown in the table header
    pub solver: Solver,
    /// (mean, best) per instance id
    pub values: ResultSet,
}

impl BaselineTable {
    /// Published LNS-FFPA results on the DARP instances of classes a and b.
    pub fn lns_ffpa() -> Self {
        Self {
            solver: LNS_FFPA.to_string(),
            values: LNS_FFPA_VALUES
                .iter()
                .map(|&(id, mean, best)| {
                    (id.to_string(), MeanBest::new(mean, best))
                })
                .collect(),
        }
    }

    /// Load a `{"solver": ..., "values": {...}}` file.
    pub fn from_json(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| {
            ReportError::UnreadableFile {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Only the instances whose id starts with `class`.
    pub fn restrict_to_class(&self, class: char) -> Self {
        Self {
            solver: self.solver.clone(),
            values: self
                .values
                .iter()
                .filter(|(id, _)| id.starts_with(class))
                .map(|(id, values)| (id.clone(), *values))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BaselineTable;

    #[test]
    fn test_lns_ffpa_classes() {
        let baseline = BaselineTable::lns_ffpa();
        assert_eq!(baseline.values.len(), 20);
        let class_a = baseline.restrict_to_class('a');
        assert_eq!(class_a.values.len(), 10);
        assert!(class_a.values.keys().all(|id| id.starts_with('a')));
        assert_eq!(class_a.values["a5-48"].mean, 304.45);
        assert_eq!(baseline.restrict_to_class('b').values["b3-24"].best, 164.46);
    }

    #[test]
    fn test_baseline_json() {
        let baseline: BaselineTable = serde_json::from_str(
            r#"{"solver": "ref", "values": {"a5-48": {"mean": 1.5, "best": 1.0}}}"#,
        )
        .unwrap();
        assert_eq!(baseline.solver, "ref");
        assert_eq!(baseline.values["a5-48"].best, 1.0);
    }
}
