//! A single human-versus-computer game.
//!
//! `Game` owns the authoritative board between moves. The human plays X and
//! always moves first; after each human move the computer answers as O with
//! the currently selected strategy.

use std::time::Duration;

use tracing::info;

use crate::board::{Board, Move, Outcome, Player};
use crate::error::{Error, Result};
use crate::search::Strategy;
use crate::selector::select_move;

/// What happened during one call to [`Game::human_move`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    /// The computer's answer, if the game was still running after the human move.
    pub reply: Option<Move>,
    /// Time spent choosing the reply.
    pub elapsed: Option<Duration>,
    pub outcome: Outcome,
}

pub struct Game {
    board: Board,
    strategy: Strategy,
    human: Player,
    computer: Player,
}

impl Game {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            board: Board::new(),
            strategy,
            human: Player::X,
            computer: Player::O,
        }
    }

    /// Start over with an empty board, keeping the strategy.
    pub fn reset(&mut self) {
        self.board = Board::new();
        info!(strategy = %self.strategy, "new game");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Play the human's move, then let the computer reply if the game goes on.
    ///
    /// An illegal move leaves the board unchanged.
    pub fn human_move(&mut self, mv: Move) -> Result<Turn> {
        if self.outcome().is_terminal() {
            return Err(Error::GameOver);
        }
        self.board = self.board.apply_move(mv, self.human)?;
        info!(player = %self.human, %mv, "human move");

        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Ok(Turn {
                reply: None,
                elapsed: None,
                outcome,
            });
        }

        let selection = select_move(&self.board, self.computer, self.strategy);
        if let Some(reply) = selection.best {
            self.board = self.board.apply_move(reply, self.computer)?;
            info!(player = %self.computer, mv = %reply, strategy = %self.strategy, "computer move");
        }

        Ok(Turn {
            reply: selection.best,
            elapsed: Some(selection.elapsed),
            outcome: self.outcome(),
        })
    }
}

/// Dialog text for a finished game, or `None` while play continues.
pub fn outcome_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Won(Player::X) => Some("Player X Wins!"),
        Outcome::Won(Player::O) => Some("Player O (AI) Wins!"),
        Outcome::Draw => Some("It's a Draw!"),
    }
}
