//! Replays a schedule of moves against the rules.
//!
//! Used to check solutions coming from the solver or from a file: every
//! move must be one the generator would offer from the current state, and
//! the goal must be reached exactly at the last move.

use crate::config::ProblemConfig;
use crate::moves::VaccinationMove;
use crate::solver::SolutionStep;
use crate::state::VaccinationState;

/// Outcome of replaying a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStatus {
    /// Goal reached on the last move
    Solved,
    /// Ran out of moves before reaching the goal
    Incomplete,
    /// Goal reached with moves still left over
    GoalBeforeEnd { step: usize },
    /// Move is not available from the current state, or leads somewhere unsafe
    IllegalMove { step: usize },
}

/// Result of running a schedule
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub status: ReplayStatus,
    /// States reached after each applied move
    pub states: Vec<VaccinationState>,
}

impl ReplayResult {
    pub fn solved(&self) -> bool {
        self.status == ReplayStatus::Solved
    }

    /// State the replay stopped in
    pub fn final_state(&self, config: &ProblemConfig) -> VaccinationState {
        self.states
            .last()
            .copied()
            .unwrap_or_else(|| VaccinationState::initial(config))
    }
}

/// Apply `moves` in order, starting with everyone waiting.
pub fn execute(config: &ProblemConfig, moves: &[VaccinationMove]) -> ReplayResult {
    let mut state = VaccinationState::initial(config);
    let mut states = Vec::with_capacity(moves.len());

    for (step, action) in moves.iter().enumerate() {
        if state.is_goal(config) {
            return ReplayResult {
                status: ReplayStatus::GoalBeforeEnd { step },
                states,
            };
        }

        let next = state
            .next_states(config)
            .into_iter()
            .find(|t| t.action == *action);
        match next {
            Some(t) => {
                state = t.state;
                states.push(state);
            }
            None => {
                log::debug!("Move {} rejected from {}: {}", step + 1, state.key(), action);
                return ReplayResult {
                    status: ReplayStatus::IllegalMove { step },
                    states,
                };
            }
        }
    }

    let status = if state.is_goal(config) {
        ReplayStatus::Solved
    } else {
        ReplayStatus::Incomplete
    };
    ReplayResult { status, states }
}

/// Does the path solve the problem, with every listed state matching the
/// one its move actually produces?
pub fn verify_solution(config: &ProblemConfig, path: &[SolutionStep]) -> bool {
    let moves: Vec<VaccinationMove> = path.iter().map(|s| s.action).collect();
    let result = execute(config, &moves);
    result.solved() && result.states.iter().eq(path.iter().map(|s| &s.state))
}
