//! Exhaustive depth-first search for a vaccination schedule.
//!
//! The search walks states with an explicit stack and skips any state
//! whose key has been seen before. It stops at the first goal it reaches,
//! which is not necessarily the shortest schedule.
//!
//! A solver owns its visited set and clears it at the start of every
//! `solve`. It takes `&mut self`, so a shared instance cannot be searched
//! from two threads at once; use one solver per thread.

use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;

use crate::config::ProblemConfig;
use crate::moves::Transition;
use crate::state::{StateKey, VaccinationState};

/// One step of a solution: the move taken and the state it led to
pub type SolutionStep = Transition;

/// Counters from the most recent search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Distinct states expanded
    pub visited_states: usize,
}

/// Summary of a complete run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionStatistics {
    pub visited_states: usize,
    pub solution_length: usize,
    pub time_elapsed_ms: u64,
}

/// Result of [`solve_problem`]
#[derive(Debug, Clone)]
pub struct SolverResult {
    /// Steps after the initial state up to the goal, `None` if the search
    /// space was exhausted without reaching it
    pub solution: Option<Vec<SolutionStep>>,
    pub statistics: SolutionStatistics,
}

impl SolverResult {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// A pending state on the search stack
#[derive(Debug, Clone, Copy)]
struct SearchFrame {
    state: VaccinationState,
    /// Move that produced this state, absent for the start state
    step: Option<SolutionStep>,
    /// Number of path steps leading to the parent
    depth: usize,
}

impl SearchFrame {
    fn root(state: VaccinationState) -> Self {
        Self {
            state,
            step: None,
            depth: 0,
        }
    }

    fn child(step: SolutionStep, depth: usize) -> Self {
        Self {
            state: step.state,
            step: Some(step),
            depth,
        }
    }
}

/// Depth-first solver with memoization on state keys
#[derive(Debug, Clone)]
pub struct VaccinationSolver {
    config: ProblemConfig,
    visited: HashSet<StateKey>,
}

impl Default for VaccinationSolver {
    fn default() -> Self {
        Self::new(ProblemConfig::default())
    }
}

impl VaccinationSolver {
    pub fn new(config: ProblemConfig) -> Self {
        Self {
            config,
            visited: HashSet::new(),
        }
    }

    pub fn config(&self) -> &ProblemConfig {
        &self.config
    }

    /// Statistics of the last `solve` call
    pub fn search_stats(&self) -> SearchStats {
        SearchStats {
            visited_states: self.visited.len(),
        }
    }

    /// Search from the configured initial state, everyone waiting.
    pub fn solve(&mut self) -> Option<Vec<SolutionStep>> {
        self.solve_from(VaccinationState::initial(&self.config))
    }

    /// Search from an arbitrary start state.
    ///
    /// The returned path excludes `start` itself; if `start` is already a
    /// goal the path is empty.
    pub fn solve_from(&mut self, start: VaccinationState) -> Option<Vec<SolutionStep>> {
        self.visited.clear();
        log::debug!("Starting search from {}", start.key());

        let solution = self.search(start);

        log::info!(
            "Search finished: {} after {} visited states",
            match &solution {
                Some(path) => format!("solution with {} steps", path.len()),
                None => "no solution".to_string(),
            },
            self.visited.len()
        );
        solution
    }

    fn search(&mut self, start: VaccinationState) -> Option<Vec<SolutionStep>> {
        let mut stack = vec![SearchFrame::root(start)];
        let mut path: Vec<SolutionStep> = Vec::new();

        while let Some(frame) = stack.pop() {
            path.truncate(frame.depth);
            if let Some(step) = frame.step {
                path.push(step);
            }

            if frame.state.is_goal(&self.config) {
                return Some(path);
            }

            // Goal test comes first, so only non-goal states are recorded
            if !self.visited.insert(frame.state.key()) {
                continue;
            }
            log::trace!("Expanding {} at depth {}", frame.state.key(), path.len());

            // Reverse push so the first generated successor is explored first
            let depth = path.len();
            for step in frame.state.next_states(&self.config).into_iter().rev() {
                stack.push(SearchFrame::child(step, depth));
            }
        }

        None
    }
}

/// Run a fresh solver over `config` and time it.
pub fn solve_problem(config: &ProblemConfig) -> SolverResult {
    let start_time = Instant::now();
    let mut solver = VaccinationSolver::new(*config);
    let solution = solver.solve();

    SolverResult {
        statistics: SolutionStatistics {
            visited_states: solver.search_stats().visited_states,
            solution_length: solution.as_ref().map_or(0, Vec::len),
            time_elapsed_ms: start_time.elapsed().as_millis() as u64,
        },
        solution,
    }
}
