//! Medium tier: one-ply win/block lookahead.

use super::random::random_move;
use crate::board::{Board, WinLine};
use crate::types::{Cell, Player};
use rand::Rng;

/// Empty cell that would complete a line for `player`.
///
/// Scans lines in [`WinLine::ALL`] order and returns the empty cell of the
/// first line holding exactly two of `player`'s marks and one empty cell.
pub fn completing_cell(board: &Board, player: Player) -> Option<usize> {
    WinLine::ALL.iter().find_map(|line| {
        let cells = line.cells();
        let owned = cells
            .iter()
            .filter(|&&i| board.get(i).and_then(Cell::mark) == Some(player))
            .count();
        let mut empty = cells.iter().copied().filter(|&i| board.is_empty(i));
        match (owned, empty.next(), empty.next()) {
            (2, Some(index), None) => Some(index),
            _ => None,
        }
    })
}

/// Wins if possible, otherwise blocks the opponent, otherwise plays randomly.
///
/// Greedy and one ply deep, so a fork beats it.
pub fn heuristic_move<R: Rng + ?Sized>(board: &Board, player: Player, rng: &mut R) -> Option<usize> {
    completing_cell(board, player)
        .or_else(|| completing_cell(board, player.opponent()))
        .or_else(|| random_move(board, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn board_of(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(index, player) in marks {
            board.place(index, player).unwrap();
        }
        board
    }

    #[test]
    fn test_completes_own_line() {
        let board = board_of(&[(0, Player::First), (1, Player::First), (4, Player::Second)]);
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(heuristic_move(&board, Player::First, &mut rng), Some(2));
    }

    #[test]
    fn test_blocks_opponent_line() {
        // X threatens the top row; O has no line of its own.
        let board = board_of(&[(0, Player::First), (4, Player::Second), (1, Player::First)]);
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(heuristic_move(&board, Player::Second, &mut rng), Some(2));
    }

    #[test]
    fn test_win_preferred_over_block() {
        // X threatens 2, O threatens 5; O to move must win at 5.
        let board = board_of(&[
            (0, Player::First),
            (3, Player::Second),
            (1, Player::First),
            (4, Player::Second),
            (8, Player::First),
        ]);
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(heuristic_move(&board, Player::Second, &mut rng), Some(5));
    }

    #[test]
    fn test_first_line_in_enumeration_order_wins() {
        // X can complete the top row (2) or the left column (6).
        let board = board_of(&[(0, Player::First), (1, Player::First), (3, Player::First)]);
        assert_eq!(completing_cell(&board, Player::First), Some(2));
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        let board = board_of(&[(0, Player::First), (1, Player::First), (2, Player::Second)]);
        assert_eq!(completing_cell(&board, Player::First), None);
    }

    #[test]
    fn test_falls_back_to_random_empty_cell() {
        let board = board_of(&[(4, Player::First)]);
        let mut rng = SmallRng::seed_from_u64(5);
        let choice = heuristic_move(&board, Player::Second, &mut rng).unwrap();
        assert!(board.is_empty(choice));
    }

    #[test]
    fn test_opponent_marks_do_not_count_as_own() {
        // O holds two of the top row; X must not see a winning cell there.
        let board = board_of(&[(4, Player::First), (0, Player::Second), (1, Player::Second)]);
        assert_eq!(completing_cell(&board, Player::First), None);
        assert_eq!(completing_cell(&board, Player::Second), Some(2));
    }
}
