//! Tic-Tac-Toe against a search-driven computer opponent.
//!
//! ## Usage
//!
//! - `tictac-rust` - Play in the terminal (same as `tictac-rust play`)
//! - `tictac-rust eval --board OO./XX./... --to-move X` - Value a position
//! - `tictac-rust selfplay --x random --o DFS` - Simulate whole games

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictac_rust::board::{Board, Outcome, Player};
use tictac_rust::constants::DEFAULT_STRATEGY;
use tictac_rust::playout::{Policy, playout};
use tictac_rust::search::Strategy;
use tictac_rust::selector::select_move;
use tictac_rust::shell::Shell;

/// Tic-Tac-Toe against DFS, BFS or UCS game-tree search
#[derive(Parser)]
#[command(name = "tictac-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search strategy for the computer (DFS, BFS or UCS)
    #[arg(short, long, global = true, default_value = DEFAULT_STRATEGY)]
    strategy: Strategy,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on stdin/stdout
    Play,
    /// Value a position and show the move each strategy would pick
    Eval {
        /// Nine cells row-major, X/O/. with optional '/' row separators
        #[arg(short, long)]
        board: Board,

        /// Side to move
        #[arg(short = 't', long, default_value = "O")]
        to_move: Player,

        /// Run all three strategies instead of only --strategy
        #[arg(short, long)]
        all: bool,
    },
    /// Play whole games from the empty board, X first
    Selfplay {
        /// Policy for X (random, DFS, BFS or UCS)
        #[arg(long, default_value = "random")]
        x: Policy,

        /// Policy for O (random, DFS, BFS or UCS)
        #[arg(long, default_value = "DFS")]
        o: Policy,

        /// Number of games
        #[arg(short, long, default_value = "10")]
        games: usize,

        /// Seed for random policies
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            info!(strategy = %cli.strategy, "starting shell");
            let mut shell = Shell::new(cli.strategy);
            shell
                .run(io::stdin().lock(), io::stdout().lock())
                .context("shell failed")
        }
        Commands::Eval {
            board,
            to_move,
            all,
        } => {
            let strategies = if all {
                Strategy::ALL.to_vec()
            } else {
                vec![cli.strategy]
            };
            run_eval(&board, to_move, &strategies);
            Ok(())
        }
        Commands::Selfplay { x, o, games, seed } => {
            run_selfplay(x, o, games, seed);
            Ok(())
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_eval(board: &Board, to_move: Player, strategies: &[Strategy]) {
    println!("{board}");
    println!("{to_move} to move, outcome so far: {:?}\n", board.outcome());

    for &strategy in strategies {
        let value = strategy.evaluate(board, to_move);
        let selection = select_move(board, to_move, strategy);
        let choice = match selection.best {
            Some(mv) => format!("{mv} (value {})", selection.value.unwrap_or_default()),
            None => "no move".to_string(),
        };
        println!(
            "{strategy}: position value {value}, best move {choice}, Elapsed Time: {:.4} seconds",
            selection.elapsed.as_secs_f64()
        );
    }
}

fn run_selfplay(x: Policy, o: Policy, games: usize, seed: u64) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let (mut x_wins, mut o_wins, mut draws) = (0, 0, 0);

    for game in 1..=games {
        let result = playout(&Board::new(), Player::X, x, o, &mut rng);
        let moves: Vec<String> = result
            .moves
            .iter()
            .map(|(player, mv)| format!("{player}{mv}"))
            .collect();
        println!("game {game}: {} -> {:?}", moves.join(" "), result.outcome);

        match result.outcome {
            Outcome::Won(Player::X) => x_wins += 1,
            Outcome::Won(Player::O) => o_wins += 1,
            Outcome::Draw | Outcome::InProgress => draws += 1,
        }
    }

    println!("\nX ({x}) wins: {x_wins}, O ({o}) wins: {o_wins}, draws: {draws}");
}
