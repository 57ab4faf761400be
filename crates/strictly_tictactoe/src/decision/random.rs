//! Easy tier: any empty cell, uniformly.

use crate::board::Board;
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks a uniformly random empty cell, or `None` on a full board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.empty_indices().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    #[test]
    fn test_only_empty_cells_are_chosen() {
        let mut board = Board::new();
        for index in [0, 2, 4, 6, 8] {
            board.place(index, Player::First).unwrap();
        }
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..100 {
            let choice = random_move(&board, &mut rng).unwrap();
            assert!(board.is_empty(choice));
        }
    }

    #[test]
    fn test_every_empty_cell_is_reachable() {
        let board = Board::new();
        let mut rng = SmallRng::seed_from_u64(11);
        let seen: HashSet<_> = (0..500)
            .filter_map(|_| random_move(&board, &mut rng))
            .collect();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_last_cell_is_forced() {
        let mut board = Board::new();
        for index in 0..8 {
            board.place(index, Player::Second).unwrap();
        }
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(random_move(&board, &mut rng), Some(8));
    }
}
