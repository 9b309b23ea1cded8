//! Integration tests for tictac-rust
//!
//! Board properties, move selection scenarios, the game session, and the
//! text shell, exercised through the public API.

use tictac_rust::board::{Board, Move, Outcome, Player};
use tictac_rust::constants::LINES;
use tictac_rust::game::Game;
use tictac_rust::search::Strategy;
use tictac_rust::selector::{select_move, select_move_named};
use tictac_rust::shell::Shell;
use tictac_rust::Error;

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Parse a board written row-major, e.g. "OO./XX./...".
fn setup_board(cells: &str) -> Board {
    cells.parse().unwrap()
}

/// Decode a base-3 number into a board: digit `i` is cell `i` (0 empty, 1 X, 2 O).
fn board_from_code(mut code: u32) -> Board {
    let mut board = Board::new();
    for i in 0..9 {
        let mv = Move::new(i / 3, i % 3);
        match code % 3 {
            1 => board = board.apply_move(mv, Player::X).unwrap(),
            2 => board = board.apply_move(mv, Player::O).unwrap(),
            _ => {}
        }
        code /= 3;
    }
    board
}

/// Number of possible cell assignments (3^9).
const ALL_CODES: u32 = 19_683;

/// Reference winner check straight from the line table.
fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.cells()[i] == Some(player)))
}

// =============================================================================
// Board model properties
// =============================================================================

#[test]
fn test_is_winner_matches_line_table_for_every_board() {
    for code in 0..ALL_CODES {
        let board = board_from_code(code);
        assert_eq!(board.key(), code);
        assert_eq!(board.is_winner(Player::X), has_line(&board, Player::X));
        assert_eq!(board.is_winner(Player::O), has_line(&board, Player::O));
    }
}

#[test]
fn test_legal_moves_count_and_distinct_empty_cells() {
    for code in 0..ALL_CODES {
        let board = board_from_code(code);
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 9 - board.occupied());
        for (i, mv) in moves.iter().enumerate() {
            assert_eq!(board.get(mv.row, mv.col), None);
            assert!(!moves[i + 1..].contains(mv));
        }
    }
}

#[test]
fn test_apply_move_does_not_mutate_input() {
    let original = setup_board("X../.O./...");
    let snapshot = original;
    let next = original.apply_move(Move::new(2, 2), Player::X).unwrap();

    assert_eq!(original, snapshot);
    assert_eq!(original.get(2, 2), None);
    assert_eq!(next.get(2, 2), Some(Player::X));
    assert_eq!(next.occupied(), original.occupied() + 1);
}

#[test]
fn test_apply_move_rejects_contract_violations() {
    let board = setup_board("X../.O./...");
    assert_eq!(
        board.apply_move(Move::new(1, 1), Player::X),
        Err(Error::Occupied { row: 1, col: 1 })
    );
    assert_eq!(
        board.apply_move(Move::new(0, 3), Player::X),
        Err(Error::OutOfRange { row: 0, col: 3 })
    );
}

#[test]
fn test_outcomes() {
    assert_eq!(Board::new().outcome(), Outcome::InProgress);
    assert_eq!(setup_board("XXX/OO./...").outcome(), Outcome::Won(Player::X));
    assert_eq!(setup_board("O.X/OX./O..").outcome(), Outcome::Won(Player::O));
    assert_eq!(setup_board("XOX/XOO/OXX").outcome(), Outcome::Draw);
    assert!(setup_board("XOX/XOO/OXX").is_full());
}

// =============================================================================
// Move selection scenarios
// =============================================================================

#[test]
fn test_x_blocks_open_row() {
    // O threatens the top row; X must take (0, 2).
    let board = setup_board("OO./X../...");
    let selection = select_move(&board, Player::X, Strategy::Dfs);
    assert_eq!(selection.best, Some(Move::new(0, 2)));
    assert_eq!(selection.value, Some(7));
}

#[test]
fn test_x_prefers_own_win_to_block() {
    let board = setup_board("OO./XX./...");
    let selection = select_move(&board, Player::X, Strategy::Dfs);
    assert_eq!(selection.best, Some(Move::new(1, 2)));
    assert_eq!(selection.value, Some(-10));
}

#[test]
fn test_o_answers_corner_with_centre() {
    let board = setup_board("X../.../...");
    let selection = select_move(&board, Player::O, Strategy::Dfs);
    assert_eq!(selection.best, Some(Move::new(1, 1)));
    assert_eq!(selection.value, Some(0));
}

#[test]
fn test_ties_go_to_first_move() {
    // Every reply to a centre opening except the edges draws; the first
    // corner in row-major order is kept.
    let board = setup_board(".../.X./...");
    let selection = select_move(&board, Player::O, Strategy::Dfs);
    assert_eq!(selection.best, Some(Move::new(0, 0)));
}

#[test]
fn test_select_move_named() {
    let board = setup_board("OO./X../X..");
    let selection = select_move_named(&board, Player::O, "UCS").unwrap();
    assert_eq!(selection.best, Some(Move::new(0, 2)));
    assert!(matches!(
        select_move_named(&board, Player::O, "minimax"),
        Err(Error::UnsupportedStrategy(name)) if name == "minimax"
    ));
}

#[test]
fn test_selection_on_full_board_is_empty() {
    let selection = select_move(&setup_board("XOX/XOO/OXX"), Player::X, Strategy::Ucs);
    assert_eq!(selection.best, None);
    assert_eq!(selection.value, None);
}

// =============================================================================
// Game session
// =============================================================================

#[test]
fn test_human_can_beat_bfs() {
    // BFS values positions by the first terminal it meets, so it walks into
    // this left-column win.
    let mut game = Game::new(Strategy::Bfs);

    let turn = game.human_move(Move::new(0, 0)).unwrap();
    assert_eq!(turn.reply, Some(Move::new(0, 1)));
    let turn = game.human_move(Move::new(1, 0)).unwrap();
    assert_eq!(turn.reply, Some(Move::new(0, 2)));
    let turn = game.human_move(Move::new(1, 1)).unwrap();
    assert_eq!(turn.reply, Some(Move::new(1, 2)));

    let turn = game.human_move(Move::new(2, 0)).unwrap();
    assert_eq!(turn.reply, None);
    assert_eq!(turn.elapsed, None);
    assert_eq!(turn.outcome, Outcome::Won(Player::X));

    assert_eq!(game.human_move(Move::new(2, 2)), Err(Error::GameOver));
}

#[test]
fn test_dfs_opponent_never_loses_to_scripted_human() {
    // The human takes the first free cell from a fixed preference list.
    let preference = [
        Move::new(1, 1),
        Move::new(0, 2),
        Move::new(2, 1),
        Move::new(1, 0),
        Move::new(2, 2),
        Move::new(0, 0),
        Move::new(2, 0),
        Move::new(1, 2),
        Move::new(0, 1),
    ];
    let mut game = Game::new(Strategy::Dfs);
    while !game.outcome().is_terminal() {
        let board = *game.board();
        let mv = preference
            .into_iter()
            .find(|mv| board.get(mv.row, mv.col).is_none())
            .unwrap();
        game.human_move(mv).unwrap();
    }
    assert_ne!(game.outcome(), Outcome::Won(Player::X));
}

// =============================================================================
// Shell
// =============================================================================

#[test]
fn test_shell_session_to_human_win() {
    let mut shell = Shell::new(Strategy::Bfs);
    let mut out = Vec::new();
    shell
        .run(
            "play 0 0\nplay 1 0\nplay 1 1\nplay 2 0\nplay 2 2\nquit\n".as_bytes(),
            &mut out,
        )
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("O plays (0, 1)"));
    assert!(out.contains("Player X Wins!"));
    assert!(out.contains("? game already over"));
}
