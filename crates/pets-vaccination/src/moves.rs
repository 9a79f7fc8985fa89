//! Move generation for the vaccination search.
//!
//! A move picks a batch from the waiting room, vaccinates it, sends one
//! animal of the batch back to the waiting room and the rest to recovery.
//! Generation order is fixed (chihuahuas in the batch, then chihuahuas
//! returned, then cats returned, all ascending) because the solver
//! reports the first solution it reaches.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::{AnimalCount, ProblemConfig, RETURNED_PER_BATCH};
use crate::state::VaccinationState;

/// A batch of two has at most 3 compositions with 2 return splits each.
pub type Moves = SmallVec<[VaccinationMove; 8]>;
pub type Transitions = SmallVec<[Transition; 8]>;

/// One surgery: which animals go in and which come back to waiting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationMove {
    pub vaccinate: AnimalCount,
    pub to_waiting: AnimalCount,
}

impl VaccinationMove {
    pub const fn new(vaccinate: AnimalCount, to_waiting: AnimalCount) -> Self {
        Self {
            vaccinate,
            to_waiting,
        }
    }

    /// Animals of the batch that end up in the recovery room
    pub fn to_recovery(&self) -> AnimalCount {
        AnimalCount::new(
            self.vaccinate.chihuahuas.saturating_sub(self.to_waiting.chihuahuas),
            self.vaccinate.cats.saturating_sub(self.to_waiting.cats),
        )
    }

    /// True if the returned animals are part of the batch
    pub fn is_consistent(&self) -> bool {
        self.to_waiting.chihuahuas <= self.vaccinate.chihuahuas
            && self.to_waiting.cats <= self.vaccinate.cats
    }

    /// Apply the move to a state.
    ///
    /// The whole batch counts as vaccinated, including the animal sent back
    /// to the waiting room. Returns `None` if the move is inconsistent, the
    /// batch is not available in the waiting room or a count would overflow.
    pub fn apply(&self, state: &VaccinationState) -> Option<VaccinationState> {
        if !self.is_consistent() {
            return None;
        }
        let to_recovery = self.to_recovery();
        let waiting = AnimalCount::new(
            state
                .waiting
                .chihuahuas
                .checked_sub(self.vaccinate.chihuahuas)?
                .checked_add(self.to_waiting.chihuahuas)?,
            state
                .waiting
                .cats
                .checked_sub(self.vaccinate.cats)?
                .checked_add(self.to_waiting.cats)?,
        );
        let recovery = AnimalCount::new(
            state.recovery.chihuahuas.checked_add(to_recovery.chihuahuas)?,
            state.recovery.cats.checked_add(to_recovery.cats)?,
        );
        let vaccinated = AnimalCount::new(
            state.vaccinated.chihuahuas.checked_add(self.vaccinate.chihuahuas)?,
            state.vaccinated.cats.checked_add(self.vaccinate.cats)?,
        );
        Some(VaccinationState::new(waiting, recovery, vaccinated))
    }
}

impl fmt::Display for VaccinationMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vaccinate {} chihuahua(s) and {} cat(s). Return {} chihuahua(s) and {} cat(s) to waiting room.",
            self.vaccinate.chihuahuas, self.vaccinate.cats, self.to_waiting.chihuahuas, self.to_waiting.cats
        )
    }
}

/// A legal successor together with the move that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub state: VaccinationState,
    pub action: VaccinationMove,
}

/// Every batch/return combination that can be drawn from the waiting room,
/// in generation order, before any safety filtering.
pub fn candidate_moves(waiting: AnimalCount, batch_size: u32) -> Moves {
    let mut moves = Moves::new();

    for chihuahuas in 0..=batch_size.min(waiting.chihuahuas) {
        let cats = batch_size - chihuahuas;
        if cats > waiting.cats {
            continue;
        }

        for chihuahuas_back in 0..=chihuahuas {
            for cats_back in 0..=cats {
                if chihuahuas_back + cats_back != RETURNED_PER_BATCH {
                    continue;
                }
                moves.push(VaccinationMove::new(
                    AnimalCount::new(chihuahuas, cats),
                    AnimalCount::new(chihuahuas_back, cats_back),
                ));
            }
        }
    }

    moves
}

/// Legal one-move successors of `state`, unsafe results already dropped.
pub fn next_states(state: &VaccinationState, config: &ProblemConfig) -> Transitions {
    candidate_moves(state.waiting, config.batch_size())
        .into_iter()
        .filter_map(|action| {
            let next = action.apply(state)?;
            next.is_valid().then_some(Transition {
                state: next,
                action,
            })
        })
        .collect()
}

impl VaccinationState {
    pub fn next_states(&self, config: &ProblemConfig) -> Transitions {
        next_states(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(counts: [u32; 6]) -> VaccinationState {
        VaccinationState::new(
            AnimalCount::new(counts[0], counts[1]),
            AnimalCount::new(counts[2], counts[3]),
            AnimalCount::new(counts[4], counts[5]),
        )
    }

    #[test]
    fn test_candidate_order() {
        let moves = candidate_moves(AnimalCount::new(3, 3), 2);
        let flat: Vec<[u32; 4]> = moves
            .iter()
            .map(|m| {
                [
                    m.vaccinate.chihuahuas,
                    m.vaccinate.cats,
                    m.to_waiting.chihuahuas,
                    m.to_waiting.cats,
                ]
            })
            .collect();
        assert_eq!(
            flat,
            vec![
                [0, 2, 0, 1],
                [1, 1, 0, 1],
                [1, 1, 1, 0],
                [2, 0, 1, 0],
            ]
        );
    }

    #[test]
    fn test_candidates_limited_by_waiting_room() {
        // Only one cat waiting: two cats can't be drawn
        let moves = candidate_moves(AnimalCount::new(0, 1), 2);
        assert!(moves.is_empty());

        let moves = candidate_moves(AnimalCount::new(1, 1), 2);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.vaccinate == AnimalCount::new(1, 1)));
    }

    #[test]
    fn test_every_candidate_returns_one() {
        for m in candidate_moves(AnimalCount::new(4, 5), 2) {
            assert_eq!(m.to_waiting.total(), 1);
            assert_eq!(m.vaccinate.total(), 2);
            assert_eq!(m.to_recovery().total(), 1);
        }
    }

    #[test]
    fn test_next_states_from_initial() {
        let config = ProblemConfig::default();
        let initial = VaccinationState::initial(&config);
        let next = initial.next_states(&config);

        // Any move that sends a cat to recovery leaves 3 chihuahuas with
        // 2 cats in the waiting room
        let keys: Vec<String> = next.iter().map(|t| t.state.key().to_string()).collect();
        assert_eq!(keys, vec!["2-3-1-0-1-1", "2-3-1-0-2-0"]);
        assert_eq!(
            next[0].action,
            VaccinationMove::new(AnimalCount::new(1, 1), AnimalCount::new(0, 1))
        );
    }

    #[test]
    fn test_next_states_filters_unsafe() {
        let config = ProblemConfig::default();
        let s = state([2, 2, 1, 1, 1, 3]);
        assert!(s.next_states(&config).is_empty());
    }

    #[test]
    fn test_apply_move() {
        let s = state([2, 3, 1, 0, 1, 1]);
        let m = VaccinationMove::new(AnimalCount::new(1, 1), AnimalCount::new(0, 1));
        assert_eq!(m.apply(&s), Some(state([1, 3, 2, 0, 2, 2])));

        // Batch larger than the waiting room
        let m = VaccinationMove::new(AnimalCount::new(0, 2), AnimalCount::new(0, 1));
        assert_eq!(m.apply(&state([1, 1, 0, 0, 0, 0])), None);

        // Returns an animal that never went in
        let m = VaccinationMove::new(AnimalCount::new(2, 0), AnimalCount::new(0, 1));
        assert!(!m.is_consistent());
        assert_eq!(m.apply(&s), None);
    }

    #[test]
    fn test_action_label() {
        let m = VaccinationMove::new(AnimalCount::new(1, 1), AnimalCount::new(0, 1));
        assert_eq!(
            m.to_string(),
            "Vaccinate 1 chihuahua(s) and 1 cat(s). Return 0 chihuahua(s) and 1 cat(s) to waiting room."
        );
    }
}
