//! Board model: a fixed 3x3 grid with pure move application.
//!
//! `Board` is `Copy`, so applying a move always produces a fresh value and
//! leaves the input untouched. Searches rely on this to recurse without
//! any undo bookkeeping.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CELLS, LINES, N};
use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// The human side; minimizes the score.
    X,
    /// The computer side; maximizes the score.
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(Error::InvalidPlayer(other.to_string())),
        }
    }
}

/// A cell is either empty (`None`) or holds a player's mark.
pub type Cell = Option<Player>;

/// A (row, column) coordinate, both in `0..3`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn from_index(idx: usize) -> Self {
        Self {
            row: idx / N,
            col: idx % N,
        }
    }

    /// Row-major cell index, or `None` when the move is off the board.
    pub fn index(self) -> Option<usize> {
        (self.row < N && self.col < N).then(|| self.row * N + self.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Terminal status of a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Player),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// An all-empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        Move::new(row, col).index().and_then(|i| self.cells[i])
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True iff one of the eight lines is entirely `player`.
    pub fn is_winner(&self, player: Player) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == Some(player)))
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// X wins are checked before O wins, then fullness.
    pub fn outcome(&self) -> Outcome {
        if self.is_winner(Player::X) {
            Outcome::Won(Player::X)
        } else if self.is_winner(Player::O) {
            Outcome::Won(Player::O)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// All empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| Move::from_index(i))
            .collect()
    }

    /// Return a new board with `player` placed at `mv`.
    ///
    /// Fails when the move is off the board or the cell is taken; `self` is
    /// never modified.
    pub fn apply_move(&self, mv: Move, player: Player) -> Result<Board> {
        let idx = mv.index().ok_or(Error::OutOfRange {
            row: mv.row,
            col: mv.col,
        })?;
        if self.cells[idx].is_some() {
            return Err(Error::Occupied {
                row: mv.row,
                col: mv.col,
            });
        }
        Ok(self.place(idx, player))
    }

    /// Every legal move paired with the board it produces, in row-major order.
    pub fn successors(&self, player: Player) -> impl Iterator<Item = (Move, Board)> {
        let board = *self;
        (0..CELLS)
            .filter(move |&i| board.cells[i].is_none())
            .map(move |i| (Move::from_index(i), board.place(i, player)))
    }

    /// Base-3 packing of the cells (cell 0 least significant).
    ///
    /// Distinct boards always get distinct keys.
    pub fn key(&self) -> u32 {
        self.cells.iter().rev().fold(0, |acc, cell| {
            let digit = match cell {
                None => 0,
                Some(Player::X) => 1,
                Some(Player::O) => 2,
            };
            acc * 3 + digit
        })
    }

    fn place(mut self, idx: usize, player: Player) -> Board {
        self.cells[idx] = Some(player);
        self
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine row-major cells, e.g. `"OO./XX./..."` or `"OO.XX...."`.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(CELLS);
        for ch in s.chars().filter(|c| *c != '/' && !c.is_ascii_whitespace()) {
            let cell = match ch {
                'X' | 'x' => Some(Player::X),
                'O' | 'o' => Some(Player::O),
                '.' | '-' | '_' => None,
                other => {
                    return Err(Error::InvalidCell {
                        character: other,
                        context: s.to_string(),
                    });
                }
            };
            cells.push(cell);
        }
        let cells: [Cell; CELLS] =
            cells
                .try_into()
                .map_err(|v: Vec<Cell>| Error::InvalidBoardLength {
                    got: v.len(),
                    context: s.to_string(),
                })?;
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            for col in 0..N {
                let ch = match self.get(row, col) {
                    Some(Player::X) => 'X',
                    Some(Player::O) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
