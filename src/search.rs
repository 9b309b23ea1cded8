//! Position valuation by exhaustive game-tree search.
//!
//! Three interchangeable strategies reduce a board to a score where X wins
//! are negative, O wins positive, and draws zero:
//!
//! - [`dfs`]: full minimax over the unpruned tree. Scores are biased by
//!   depth so faster wins and slower losses are preferred.
//! - [`bfs`]: level-by-level exploration that stops at the first terminal
//!   position dequeued and reports its flat score.
//! - [`ucs`]: the same FIFO traversal carrying a unit path cost, reporting
//!   the first terminal score adjusted by that cost.
//!
//! BFS and UCS answer "which terminal is reached first in traversal order",
//! not "what is the value under optimal play". Their results therefore
//! differ from DFS on most positions.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Outcome, Player};
use crate::constants::{DRAW_SCORE, WIN_SCORE};
use crate::error::{Error, Result};

/// A move-valuation procedure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Dfs,
    Bfs,
    Ucs,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Dfs, Strategy::Bfs, Strategy::Ucs];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Dfs => "DFS",
            Strategy::Bfs => "BFS",
            Strategy::Ucs => "UCS",
        }
    }

    /// Value of `board` with `to_move` playing next.
    pub fn evaluate(self, board: &Board, to_move: Player) -> i32 {
        match self {
            Strategy::Dfs => dfs(board, 0, to_move),
            Strategy::Bfs => bfs(board, to_move),
            Strategy::Ucs => ucs(board, to_move),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnsupportedStrategy(s.to_string()))
    }
}

/// Terminal score with a path-length adjustment, or `None` if play continues.
fn terminal_score(board: &Board, depth: i32) -> Option<i32> {
    match board.outcome() {
        Outcome::Won(Player::X) => Some(-WIN_SCORE + depth),
        Outcome::Won(Player::O) => Some(WIN_SCORE - depth),
        Outcome::Draw => Some(DRAW_SCORE),
        Outcome::InProgress => None,
    }
}

/// Depth-first minimax over the complete game tree.
///
/// X minimizes, O maximizes. `depth` is the number of plies already played
/// below the evaluation root and shrinks the magnitude of later wins.
pub fn dfs(board: &Board, depth: i32, to_move: Player) -> i32 {
    if let Some(score) = terminal_score(board, depth) {
        return score;
    }

    let values = board
        .successors(to_move)
        .map(|(_, child)| dfs(&child, depth + 1, to_move.opponent()));

    let best = match to_move {
        Player::X => values.min(),
        Player::O => values.max(),
    };
    // A non-terminal board always has at least one empty cell.
    best.unwrap_or(DRAW_SCORE)
}

/// Breadth-first exploration; the first terminal dequeued decides the result.
pub fn bfs(board: &Board, to_move: Player) -> i32 {
    first_terminal(board, to_move, |board, _| terminal_score(board, 0))
}

/// FIFO exploration with unit move costs; the first terminal dequeued decides
/// the result, adjusted by the number of moves taken to reach it.
///
/// With unit costs and a FIFO frontier this visits positions in the same
/// order as [`bfs`].
pub fn ucs(board: &Board, to_move: Player) -> i32 {
    first_terminal(board, to_move, terminal_score)
}

/// Shared FIFO traversal for [`bfs`] and [`ucs`].
///
/// Positions are deduplicated by [`Board::key`], so a position reached by
/// several move orders is expanded once, with whichever side was to move on
/// the first path that found it.
fn first_terminal<F>(board: &Board, to_move: Player, score: F) -> i32
where
    F: Fn(&Board, i32) -> Option<i32>,
{
    let mut queue = VecDeque::from([(*board, 0, to_move)]);
    let mut visited = HashSet::from([board.key()]);

    while let Some((current, cost, player)) = queue.pop_front() {
        if let Some(value) = score(&current, cost) {
            return value;
        }

        for (_, child) in current.successors(player) {
            if visited.insert(child.key()) {
                queue.push_back((child, cost + 1, player.opponent()));
            }
        }
    }

    DRAW_SCORE
}
