//! Whole-game simulations between two move policies.
//!
//! A playout alternates moves from the starting position until someone wins
//! or the board fills. Each side follows its own [`Policy`]: uniformly random
//! legal moves, or the move picked by a search strategy.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::board::{Board, Move, Outcome, Player};
use crate::error::{Error, Result};
use crate::search::Strategy;
use crate::selector::select_move;

/// How one side picks its moves during a playout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Policy {
    Random,
    Search(Strategy),
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Random => f.write_str("random"),
            Policy::Search(strategy) => write!(f, "{strategy}"),
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("random") {
            return Ok(Policy::Random);
        }
        s.parse()
            .map(Policy::Search)
            .map_err(|_| Error::UnknownPolicy(s.to_string()))
    }
}

/// The record of one finished game.
#[derive(Clone, Debug)]
pub struct Playout {
    pub moves: Vec<(Player, Move)>,
    pub board: Board,
    pub outcome: Outcome,
}

/// Pick a uniformly random empty cell.
pub fn random_move(board: &Board, rng: &mut fastrand::Rng) -> Option<Move> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}

fn choose(policy: Policy, board: &Board, player: Player, rng: &mut fastrand::Rng) -> Option<Move> {
    match policy {
        Policy::Random => random_move(board, rng),
        Policy::Search(strategy) => select_move(board, player, strategy).best,
    }
}

/// Play from `start` with `to_move` first until the game ends.
pub fn playout(
    start: &Board,
    to_move: Player,
    x_policy: Policy,
    o_policy: Policy,
    rng: &mut fastrand::Rng,
) -> Playout {
    let mut board = *start;
    let mut player = to_move;
    let mut moves = Vec::new();

    while !board.outcome().is_terminal() {
        let policy = match player {
            Player::X => x_policy,
            Player::O => o_policy,
        };
        let Some(mv) = choose(policy, &board, player, rng) else {
            break;
        };
        // Policies only return empty cells.
        let Ok(next) = board.apply_move(mv, player) else {
            break;
        };
        board = next;
        moves.push((player, mv));
        player = player.opponent();
    }

    let outcome = board.outcome();
    debug!(x = %x_policy, o = %o_policy, plies = moves.len(), ?outcome, "playout finished");

    Playout {
        moves,
        board,
        outcome,
    }
}
