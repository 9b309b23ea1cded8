//! Top-level move selection.
//!
//! Every legal move is simulated and the resulting position is valued by the
//! chosen [`Strategy`] with the opponent to move. O keeps the strictly
//! greatest value, X the strictly least; the earliest move in row-major
//! order wins ties.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::board::{Board, Move, Player};
use crate::error::Result;
use crate::search::Strategy;

/// The chosen move together with its value and how long the search took.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// `None` when the board has no empty cell.
    pub best: Option<Move>,
    pub value: Option<i32>,
    pub elapsed: Duration,
}

/// Pick the move for `player` on `board` using `strategy`.
pub fn select_move(board: &Board, player: Player, strategy: Strategy) -> Selection {
    let start = Instant::now();
    let mut best: Option<(i32, Move)> = None;

    for (mv, child) in board.successors(player) {
        let value = strategy.evaluate(&child, player.opponent());
        trace!(%strategy, %player, %mv, value, "candidate");

        let improves = match best {
            None => true,
            Some((best_value, _)) => match player {
                Player::O => value > best_value,
                Player::X => value < best_value,
            },
        };
        if improves {
            best = Some((value, mv));
        }
    }

    let elapsed = start.elapsed();
    match best {
        Some((value, mv)) => debug!(
            %strategy, %player, %mv, value,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "selected move"
        ),
        None => debug!(%strategy, %player, "no legal move"),
    }

    Selection {
        best: best.map(|(_, mv)| mv),
        value: best.map(|(value, _)| value),
        elapsed,
    }
}

/// Like [`select_move`], with the strategy given by name ("DFS", "BFS", "UCS").
pub fn select_move_named(board: &Board, player: Player, name: &str) -> Result<Selection> {
    let strategy: Strategy = name.parse()?;
    Ok(select_move(board, player, strategy))
}
