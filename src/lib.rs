//! Tic-Tac-Toe against a computer opponent driven by exhaustive game-tree search.
//!
//! The computer values candidate moves with one of three interchangeable
//! strategies over the full 3x3 game tree: depth-first minimax, breadth-first
//! exploration, or uniform-cost exploration.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, scores, and display text
//! - [`board`] - Board model, terminal checks, and pure move application
//! - [`search`] - The three valuation strategies
//! - [`selector`] - Best-move selection with timing
//! - [`game`] - A human-versus-computer game session
//! - [`playout`] - Whole-game simulations between move policies
//! - [`shell`] - Line-oriented text front end
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use tictac_rust::board::{Board, Move, Player};
//! use tictac_rust::search::Strategy;
//! use tictac_rust::selector::select_move;
//!
//! // The human opens in the centre
//! let board = Board::new().apply_move(Move::new(1, 1), Player::X).unwrap();
//!
//! // Ask the computer for its reply
//! let selection = select_move(&board, Player::O, Strategy::Dfs);
//! println!("O plays {:?} after {:?}", selection.best, selection.elapsed);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod playout;
pub mod search;
pub mod selector;
pub mod shell;

pub use error::{Error, Result};
