use indexmap::IndexMap;
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::card::Card;
use crate::solver::builder::build_expressions;
use crate::solver::constants::{DEFAULT_TARGETS, MAX_HAND_SIZE};
use crate::solver::errors::SolverError;
use crate::utils::{distinct_permutations, validate_hand};

/// An expression text together with the value it evaluates to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub expression: String,
    pub value: f64,
}

/// Closest solution found for one target, if any expression was valid at all
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetMatch {
    pub target: f64,
    pub best: Option<Solution>,
}

impl TargetMatch {
    pub fn distance(&self) -> Option<f64> {
        self.best.as_ref().map(|s| (s.value - self.target).abs())
    }
}

/// Configuration for the hand search
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub targets: Vec<f64>,
    pub max_hand_size: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            targets: DEFAULT_TARGETS.to_vec(),
            max_hand_size: MAX_HAND_SIZE,
        }
    }
}

/// Searches every ordering and parenthesization of a hand
pub struct HandSolver {
    config: SolverConfig,
}

impl HandSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Distinct `(text, value)` pairs reachable from any ordering of the hand.
    ///
    /// Pairs are kept in the order they were first found. Orderings are
    /// evaluated in parallel, then merged in permutation order.
    pub fn enumerate(&self, hand: &[Card]) -> Vec<Solution> {
        let permutations = distinct_permutations(hand);
        info!(
            "Enumerating {} distinct orderings of {} cards",
            permutations.len(),
            hand.len()
        );

        let per_ordering: Vec<Vec<Solution>> = permutations
            .par_iter()
            .map(|ordering| solve_ordering(ordering))
            .collect();

        let mut seen: IndexMap<String, f64> = IndexMap::new();
        for solution in per_ordering.into_iter().flatten() {
            seen.entry(solution.expression).or_insert(solution.value);
        }

        info!("Found {} distinct valid expressions", seen.len());
        seen.into_iter()
            .map(|(expression, value)| Solution { expression, value })
            .collect()
    }

    /// For every configured target, the solution closest to it. Ties keep the
    /// solution found first.
    pub fn best_matches(&self, solutions: &[Solution]) -> Vec<TargetMatch> {
        self.config
            .targets
            .iter()
            .map(|&target| {
                let mut best: Option<(&Solution, f64)> = None;
                for solution in solutions {
                    let distance = (solution.value - target).abs();
                    if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                        best = Some((solution, distance));
                    }
                }
                if let Some((solution, distance)) = best {
                    debug!(
                        "Target {}: {} = {} (off by {})",
                        target, solution.expression, solution.value, distance
                    );
                }
                TargetMatch {
                    target,
                    best: best.map(|(solution, _)| solution.clone()),
                }
            })
            .collect()
    }

    /// Validate the hand, enumerate it, and pick the best match per target
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is empty or larger than the configured limit.
    pub fn find_best(&self, hand: &[Card]) -> Result<Vec<TargetMatch>, SolverError> {
        validate_hand(hand, self.config.max_hand_size)?;
        let solutions = self.enumerate(hand);
        Ok(self.best_matches(&solutions))
    }
}

impl Default for HandSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

fn solve_ordering(ordering: &[Card]) -> Vec<Solution> {
    build_expressions(ordering)
        .into_iter()
        .filter_map(|expr| {
            let value = expr.evaluate().ok()?;
            Some(Solution {
                expression: expr.to_string(),
                value,
            })
        })
        .collect()
}
