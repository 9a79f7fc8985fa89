//! Text rendering for the command line driver.

use std::fmt::Write;

use crate::config::ProblemConfig;
use crate::solver::{SolutionStatistics, SolutionStep};
use crate::state::VaccinationState;

pub const TITLE: &str = "Pets Vaccination Problem Solver";
pub const ERROR_PREFIX: &str = "[ERROR]";
pub const SUCCESS_PREFIX: &str = "[SUCCESS]";
const STEP_PREFIX: &str = "Step";

pub fn separator() -> String {
    "=".repeat(60)
}

/// Title banner with the starting population and the goal
pub fn header(config: &ProblemConfig) -> String {
    let initial = config.initial();
    format!(
        "{TITLE}\n{}\nInitial state: {} Chihuahuas and {} cats in waiting room\nGoal: Vaccinate all animals safely without attacks\n",
        separator(),
        initial.chihuahuas,
        initial.cats
    )
}

pub fn rules(config: &ProblemConfig) -> String {
    format!(
        "Game Rules:\n\
         - Only {} animals can go to surgery at the same time\n\
         - After vaccination: 1 returns to waiting room, 1 goes to recovery room\n\
         - Chihuahuas attack cats if they outnumber cats in any room\n\
         - All animals must be vaccinated before going home\n",
        config.batch_size()
    )
}

/// Step-by-step listing, starting from the initial state
pub fn solution(config: &ProblemConfig, path: Option<&[SolutionStep]>) -> String {
    let Some(path) = path else {
        return format!("{ERROR_PREFIX} No solution found!\n");
    };

    let mut out = format!("{SUCCESS_PREFIX} Solution found!\n\n");
    let _ = writeln!(
        out,
        "{STEP_PREFIX} 0: {}",
        VaccinationState::initial(config)
    );
    for (i, step) in path.iter().enumerate() {
        let _ = writeln!(out, "{STEP_PREFIX} {}: {}", i + 1, step.action);
        let _ = writeln!(out, "        {}", step.state);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{SUCCESS_PREFIX} All animals have been safely vaccinated!");
    out
}

pub fn statistics(stats: &SolutionStatistics) -> String {
    format!(
        "\nSearch Statistics:\n- States explored: {}\n- Solution steps: {}\n- Time: {} ms\n\n{}\n",
        stats.visited_states,
        stats.solution_length,
        stats.time_elapsed_ms,
        separator()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve_problem;

    #[test]
    fn test_solution_listing() {
        let config = ProblemConfig::default();
        let result = solve_problem(&config);
        let text = solution(&config, result.solution.as_deref());

        assert!(text.starts_with("[SUCCESS] Solution found!"));
        assert!(text.contains(
            "Step 0: Waiting: 3Chihuahua 3Cat | Recovery: 0Chihuahua 0Cat | Vaccinated: 0Chihuahua 0Cat"
        ));
        assert!(text.contains("Step 3: Vaccinate 1 chihuahua(s) and 1 cat(s)."));
        assert!(!text.contains("Step 4"));
    }

    #[test]
    fn test_no_solution_listing() {
        let config = ProblemConfig::with_population(5, 1);
        assert_eq!(solution(&config, None), "[ERROR] No solution found!\n");
    }

    #[test]
    fn test_header_mentions_population() {
        let text = header(&ProblemConfig::with_population(4, 2));
        assert!(text.starts_with(TITLE));
        assert!(text.contains("4 Chihuahuas and 2 cats"));
    }
}
