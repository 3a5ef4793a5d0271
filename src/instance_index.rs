use std::collections::BTreeMap;

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::datastructures::*;

/// What to do when the same (instance, solver) pair is inserted twice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// The later result replaces the earlier one
    #[default]
    LastWriteWins,
    /// The earlier result is kept, later ones are dropped
    KeepFirst,
}

/// instance → solver → runs, built once per batch.
#[derive(Debug, Clone, Default)]
pub struct InstanceIndex {
    policy: MergePolicy,
    instances: BTreeMap<InstanceId, BTreeMap<Solver, SolverResult>>,
}

impl InstanceIndex {
    /// An empty index resolving duplicates with `policy`.
    pub fn new(policy: MergePolicy) -> Self {
        Self {
            policy,
            instances: BTreeMap::new(),
        }
    }

    /// How duplicate (instance, solver) pairs are resolved.
    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Add the runs of `solver` on `instance`, a duplicate is resolved by
    /// the merge policy.
    pub fn insert(
        &mut self,
        instance: InstanceId,
        solver: Solver,
        result: SolverResult,
    ) {
        let solvers = self.instances.entry(instance).or_default();
        match (self.policy, solvers.contains_key(&solver)) {
            (MergePolicy::KeepFirst, true) => {
                debug!("keeping first result of {solver} on {instance}")
            }
            (MergePolicy::LastWriteWins, true) => {
                debug!("replacing result of {solver} on {instance}");
                solvers.insert(solver, result);
            }
            (_, false) => {
                solvers.insert(solver, result);
            }
        }
    }

    /// Runs of `solver` on `instance`, if parsed.
    pub fn get(
        &self,
        instance: &InstanceId,
        solver: &str,
    ) -> Option<&SolverResult> {
        self.instances.get(instance)?.get(solver)
    }

    /// All solvers with results on `instance`.
    pub fn solvers_of(
        &self,
        instance: &InstanceId,
    ) -> Option<&BTreeMap<Solver, SolverResult>> {
        self.instances.get(instance)
    }

    /// Run time limit of `solver` on `instance`.
    pub fn max_run_time(
        &self,
        instance: &InstanceId,
        solver: &str,
    ) -> Option<f64> {
        self.get(instance, solver)?.max_run_time
    }

    /// Instances in ascending id order.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&InstanceId, &BTreeMap<Solver, SolverResult>)>
    {
        self.instances.iter()
    }

    /// Distinct solver names over all instances, sorted.
    pub fn solvers(&self) -> Vec<&Solver> {
        self.instances
            .values()
            .flat_map(|solvers| solvers.keys())
            .unique()
            .sorted()
            .collect_vec()
    }

    /// Number of instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// True if no file was inserted.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
