// rules.rs - Per-cell transition, computed on demand rather than per grid tick

use crate::cell::{CellState, ParseCellError};

/// Number of live entries, whatever the length of the list.
pub fn alive_count<I>(neighbors: I) -> usize
where
    I: IntoIterator<Item = CellState>,
{
    neighbors.into_iter().filter(|n| n.is_alive()).count()
}

pub fn next_state<I>(current: CellState, neighbors: I) -> CellState
where
    I: IntoIterator<Item = CellState>,
{
    current.evolve(alive_count(neighbors))
}

/// Token-level entry point: `"1"`/`"0"` in, `"1"`/`"0"` out.
///
/// Placeholder entries must already be filtered out by the caller; an empty
/// token reaching this function is a parse error like any other garbage.
pub fn compute_next_state<S>(state: &str, neighbors: &[S]) -> Result<&'static str, ParseCellError>
where
    S: AsRef<str>,
{
    let current = CellState::from_token(state)?;
    let parsed = neighbors
        .iter()
        .map(|n| CellState::from_token(n.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(next_state(current, parsed).as_token())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn neighbors(alive: usize) -> Vec<&'static str> {
        let mut v = vec!["1"; alive];
        v.resize(8, "0");
        v
    }

    #[test]
    fn isolation_death() {
        assert_eq!(compute_next_state("1", &neighbors(0)), Ok("0"));
    }

    #[test]
    fn one_neighbor_still_dies() {
        assert_eq!(compute_next_state("1", &neighbors(1)), Ok("0"));
    }

    #[test]
    fn two_neighbors_survives() {
        assert_eq!(compute_next_state("1", &neighbors(2)), Ok("1"));
    }

    #[test]
    fn three_neighbors_survives() {
        assert_eq!(compute_next_state("1", &neighbors(3)), Ok("1"));
    }

    #[test]
    fn birth_on_exactly_three() {
        assert_eq!(compute_next_state("0", &neighbors(3)), Ok("1"));
        assert_eq!(compute_next_state("0", &neighbors(2)), Ok("0"));
        assert_eq!(compute_next_state("0", &neighbors(4)), Ok("0"));
    }

    #[test]
    fn overpopulation_death() {
        assert_eq!(compute_next_state("1", &neighbors(4)), Ok("0"));
    }

    #[test]
    fn neighbor_count_agnostic() {
        let none: [&str; 0] = [];
        assert_eq!(compute_next_state("1", &none), Ok("0"));
        assert_eq!(compute_next_state("0", &["1", "1", "1"]), Ok("1"));
        // Only live entries count, not the list length.
        let long = ["0"; 20];
        assert_eq!(compute_next_state("0", &long), Ok("0"));
    }

    #[test]
    fn garbage_neighbor_is_rejected() {
        let err = compute_next_state("1", &["1", "1", "abc"]).unwrap_err();
        assert_eq!(err, ParseCellError::InvalidToken("abc".to_string()));
    }

    #[test]
    fn garbage_state_is_rejected() {
        assert!(compute_next_state("yes", &neighbors(2)).is_err());
    }

    #[test]
    fn unfiltered_placeholder_is_rejected() {
        assert!(compute_next_state("1", &["1", "", "1"]).is_err());
    }

    proptest! {
        #[test]
        fn live_cell_survives_iff_two_or_three(alive in 0usize..=8, dead in 0usize..=8) {
            let mut list = vec![CellState::Alive; alive];
            list.extend(std::iter::repeat_n(CellState::Dead, dead));
            let next = next_state(CellState::Alive, list);
            prop_assert_eq!(next.is_alive(), alive == 2 || alive == 3);
        }

        #[test]
        fn dead_cell_born_iff_three(alive in 0usize..=8, dead in 0usize..=8) {
            let mut list = vec![CellState::Alive; alive];
            list.extend(std::iter::repeat_n(CellState::Dead, dead));
            let next = next_state(CellState::Dead, list);
            prop_assert_eq!(next.is_alive(), alive == 3);
        }

        #[test]
        fn order_does_not_matter(cells in proptest::collection::vec(any::<bool>(), 0..=8), alive in any::<bool>()) {
            let current = CellState::from_alive(alive);
            let forward: Vec<_> = cells.iter().copied().map(CellState::from_alive).collect();
            let mut reversed = forward.clone();
            reversed.reverse();
            prop_assert_eq!(next_state(current, forward.clone()), next_state(current, reversed));
            // Deterministic: same snapshot, same answer.
            prop_assert_eq!(next_state(current, forward.clone()), next_state(current, forward));
        }
    }
}
