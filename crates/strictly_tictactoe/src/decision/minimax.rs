//! Hard tier: exhaustive minimax over the full game tree.
//!
//! No pruning and no depth discount: a leaf scores +10 for an acting-player
//! win, -10 for an opponent win and 0 for a draw. Children are tried in
//! ascending index order and only a strictly better score replaces the
//! current best, so the first best move wins ties.

use crate::board::{Board, GameStatus};
use crate::types::Player;
use tracing::{debug, instrument};

/// Score of a leaf won by the acting player.
pub const WIN_SCORE: i32 = 10;

/// Outcome of a search from one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimax value from the acting player's perspective.
    pub score: i32,
    /// Chosen index, `None` if the board has no empty cell.
    pub index: Option<usize>,
    /// Number of positions visited below the root.
    pub nodes: u64,
}

fn leaf_score(status: GameStatus, acting: Player) -> Option<i32> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Drawn => Some(0),
        GameStatus::Won(winner, _) if winner == acting => Some(WIN_SCORE),
        GameStatus::Won(_, _) => Some(-WIN_SCORE),
    }
}

/// Picks the best child of `board` for `to_move`, scored for `acting`.
///
/// Maximises when `to_move == acting`, minimises otherwise. Each child is
/// searched on its own copy of the board.
fn select(board: &Board, to_move: Player, acting: Player, nodes: &mut u64) -> (i32, Option<usize>) {
    let maximizing = to_move == acting;
    let mut best: Option<(i32, usize)> = None;

    for index in board.empty_indices() {
        let child = board.with_mark(index, to_move);
        let score = search(&child, to_move.opponent(), acting, nodes);
        let better = match best {
            None => true,
            Some((best_score, _)) if maximizing => score > best_score,
            Some((best_score, _)) => score < best_score,
        };
        if better {
            best = Some((score, index));
        }
    }

    match best {
        Some((score, index)) => (score, Some(index)),
        None => (leaf_score(board.evaluate(), acting).unwrap_or(0), None),
    }
}

fn search(board: &Board, to_move: Player, acting: Player, nodes: &mut u64) -> i32 {
    *nodes += 1;
    match leaf_score(board.evaluate(), acting) {
        Some(score) => score,
        None => select(board, to_move, acting, nodes).0,
    }
}

/// Searches the complete game tree below `board`.
///
/// The root always expands its children, so any board with an empty cell
/// yields an index even if a line is already complete.
pub fn minimax(board: &Board, to_move: Player, acting: Player) -> SearchResult {
    let mut nodes = 0;
    let (score, index) = select(board, to_move, acting, &mut nodes);
    SearchResult {
        score,
        index,
        nodes,
    }
}

/// Optimal move for `player` on `board`.
#[instrument(skip(board))]
pub fn best_move(board: &Board, player: Player) -> Option<usize> {
    let result = minimax(board, player, player);
    debug!(score = result.score, nodes = result.nodes, index = ?result.index, "Search complete");
    result.index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(index, player) in marks {
            board.place(index, player).unwrap();
        }
        board
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = board_of(&[
            (0, Player::First),
            (3, Player::Second),
            (1, Player::First),
            (4, Player::Second),
        ]);
        let result = minimax(&board, Player::First, Player::First);
        assert_eq!(result.index, Some(2));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_immediate_threat() {
        let board = board_of(&[(0, Player::First), (4, Player::Second), (1, Player::First)]);
        assert_eq!(best_move(&board, Player::Second), Some(2));
    }

    #[test]
    fn test_answers_corner_opening_with_center() {
        let board = board_of(&[(0, Player::First)]);
        let result = minimax(&board, Player::Second, Player::Second);
        assert_eq!(result.index, Some(4));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_equal_wins_break_ties_by_lowest_index() {
        // X: 1, 4  O: 0, 2. Playing 3 forks (5 and 7) and wins as surely as 7
        // does, and 3 comes first.
        let board = board_of(&[
            (1, Player::First),
            (0, Player::Second),
            (4, Player::First),
            (2, Player::Second),
        ]);
        let result = minimax(&board, Player::First, Player::First);
        assert_eq!(result.score, WIN_SCORE);
        assert_eq!(result.index, Some(3));
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let result = minimax(&Board::new(), Player::First, Player::First);
        assert_eq!(result.score, 0);
        assert_eq!(result.index, Some(0));
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_of(&[
            (0, Player::First),
            (1, Player::Second),
            (2, Player::First),
            (3, Player::Second),
            (4, Player::First),
            (6, Player::Second),
            (5, Player::First),
            (8, Player::Second),
            (7, Player::First),
        ]);
        let result = minimax(&board, Player::Second, Player::Second);
        assert_eq!(result.index, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = board_of(&[(4, Player::First)]);
        let before = board;
        best_move(&board, Player::Second);
        assert_eq!(board, before);
    }
}
