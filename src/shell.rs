//! Line-oriented text shell for playing against the computer.
//!
//! Each input line is one command. Responses start with `=` on success or
//! `?` on failure, followed by the response text and a blank line, in the
//! style of the Go Text Protocol.
//!
//! ## Supported Commands
//!
//! - `new` / `clear_board` - Start a new game
//! - `play <row> <col>` - Place an X at the given cell (rows and columns 0-2)
//! - `strategy [<name>]` - Show or choose the computer's strategy (DFS, BFS, UCS)
//! - `show` - Print the board
//! - `help` / `list_commands` - List commands
//! - `quit` - Exit
//!
//! ## Example
//!
//! ```
//! use tictac_rust::search::Strategy;
//! use tictac_rust::shell::Shell;
//!
//! let mut shell = Shell::new(Strategy::Bfs);
//! let mut out = Vec::new();
//! shell.run("play 1 1\nquit\n".as_bytes(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("O plays"));
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing::warn;

use crate::board::Move;
use crate::constants::COMPLEXITY_LABEL;
use crate::game::{Game, outcome_message};
use crate::search::Strategy;

/// The list of known shell commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "help",
    "list_commands",
    "new",
    "play",
    "quit",
    "show",
    "strategy",
];

pub struct Shell {
    game: Game,
}

impl Shell {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            game: Game::new(strategy),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let written = match self.execute(&command, args) {
                Ok(message) => writeln!(output, "= {message}\n"),
                Err(err) => {
                    warn!(%command, error = %err, "command failed");
                    writeln!(output, "? {err:#}\n")
                }
            };
            written.context("failed to write response")?;
            output.flush().context("failed to flush response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command and return the response text.
    fn execute(&mut self, command: &str, args: &[&str]) -> Result<String> {
        match command {
            "new" | "clear_board" => {
                self.game.reset();
                Ok(format!("\n{}", self.game.board()))
            }

            "play" => {
                let [row, col] = args else {
                    bail!("usage: play <row> <col>");
                };
                let row: usize = row.parse().context("invalid row")?;
                let col: usize = col.parse().context("invalid column")?;
                self.play(Move::new(row, col))
            }

            "strategy" => match args.first() {
                None => Ok(self.game.strategy().to_string()),
                Some(name) => {
                    let strategy: Strategy = name.parse()?;
                    self.game.set_strategy(strategy);
                    Ok(strategy.to_string())
                }
            },

            "show" => Ok(format!("\n{}", self.game.board())),

            "help" | "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "quit" => Ok(String::new()),

            _ => bail!("unknown command: {command}"),
        }
    }

    fn play(&mut self, mv: Move) -> Result<String> {
        let turn = self.game.human_move(mv)?;

        let mut response = format!("\n{}", self.game.board());
        if let Some(reply) = turn.reply {
            response.push_str(&format!("O plays {reply}\n"));
        }
        if let Some(elapsed) = turn.elapsed {
            response.push_str(&format!(
                "Elapsed Time: {:.4} seconds\n{COMPLEXITY_LABEL}\n",
                elapsed.as_secs_f64()
            ));
        }
        if let Some(message) = outcome_message(turn.outcome) {
            response.push_str(message);
        }
        Ok(response.trim_end().to_string())
    }
}
