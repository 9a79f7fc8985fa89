//! Solver library for the pets vaccination puzzle.
//!
//! Chihuahuas and cats wait to be vaccinated two at a time. After each
//! surgery one animal of the pair goes back to the waiting room and the
//! other to recovery, and chihuahuas must never outnumber cats in a room
//! that holds any cats. The solver runs an exhaustive depth-first search
//! for a safe schedule that vaccinates everyone.

pub mod config;
pub mod error;
pub mod moves;
pub mod replay;
pub mod report;
pub mod solver;
pub mod state;

// Re-export main types
pub use config::{AnimalCount, ProblemConfig};
pub use error::{AppError, ConfigError};
pub use moves::{next_states, Transition, VaccinationMove};
pub use replay::{execute, verify_solution, ReplayResult, ReplayStatus};
pub use solver::{
    solve_problem, SearchStats, SolutionStatistics, SolutionStep, SolverResult, VaccinationSolver,
};
pub use state::{StateKey, VaccinationState};
