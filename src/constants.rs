//! Constants for board geometry, scoring, and display text.
//!
//! The board is a fixed 3x3 grid stored row-major in a flat array, so a
//! cell at `(row, col)` lives at index `row * N + col`.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = N * N;

/// The eight winning lines as flat cell indices: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

// =============================================================================
// Scoring
// =============================================================================

/// Magnitude of a won position. X wins score negative, O wins positive.
pub const WIN_SCORE: i32 = 10;

/// Score of a drawn (full, no winner) position.
pub const DRAW_SCORE: i32 = 0;

// =============================================================================
// Defaults and Display Text
// =============================================================================

/// Strategy used when none is chosen.
pub const DEFAULT_STRATEGY: &str = "DFS";

/// Complexity note shown next to the timing line after each computer move.
pub const COMPLEXITY_LABEL: &str = "Time Complexity: O(b^d) | Space Complexity: O(b^d)";
