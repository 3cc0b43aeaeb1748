//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// The eight winning lines: rows, columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player();
        }
    }

    None
}

/// Checks whether the mark at `pos` completes three in a row.
///
/// Only the row, the column and the diagonals running through `pos` are
/// inspected: a win can only be completed by the square just played.
/// An empty square never wins.
pub fn is_winning_move(board: &Board, pos: Position) -> bool {
    let Square::Occupied(player) = board.get(pos) else {
        return false;
    };
    let (row, col) = (pos.row(), pos.col());
    let owned = |r: usize, c: usize| {
        Position::from_row_col(r, c).is_some_and(|p| board.get(p) == Square::Occupied(player))
    };

    if (0..3).all(|c| owned(row, c)) {
        return true;
    }
    if (0..3).all(|r| owned(r, col)) {
        return true;
    }
    if row == col && (0..3).all(|i| owned(i, i)) {
        return true;
    }
    row + col == 2 && (0..3).all(|i| owned(i, 2 - i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X);
        board.place(Position::TopCenter, Player::X);
        board.place(Position::TopRight, Player::X);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::O);
        board.place(Position::Center, Player::O);
        board.place(Position::BottomRight, Player::O);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X);
        board.place(Position::TopCenter, Player::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winning_move_checks_lines_through_cell() {
        // X X X / O O _ / _ _ _
        let board = Board::parse("XXXOO____").unwrap();
        assert!(is_winning_move(&board, Position::TopRight));
        assert!(is_winning_move(&board, Position::TopLeft));
        assert!(!is_winning_move(&board, Position::Center));
        assert!(!is_winning_move(&board, Position::BottomRight));
    }

    #[test]
    fn test_winning_move_anti_diagonal() {
        // _ _ O / X O _ / O X X
        let board = Board::parse("__OXO_OXX").unwrap();
        assert!(is_winning_move(&board, Position::BottomLeft));
        assert!(is_winning_move(&board, Position::Center));
        assert!(!is_winning_move(&board, Position::BottomRight));
    }

    #[test]
    fn test_winning_move_agrees_with_full_scan() {
        // Every occupied cell on a winning line reports a win, and the
        // full scan finds the same player.
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.place(pos, Player::O);
            }
            for pos in Position::ALL {
                assert_eq!(is_winning_move(&board, pos), line.contains(&pos));
            }
            assert_eq!(check_winner(&board), Some(Player::O));
        }
    }
}
