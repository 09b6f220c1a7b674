//! igo: replay a sequence of Go moves and report the result.
//!
//! ## Usage
//!
//! - `igo` - Show a demo game
//! - `igo play --moves "B D4; W Q16"` - Apply moves given on the command line
//! - `igo play --file game.txt` - Apply moves from a file (stdin if omitted)

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::warn;

use igo_rules::constants::DEFAULT_SIZE;
use igo_rules::game::{Command, Game};
use igo_rules::logging::setup_logging;
use igo_rules::notation::{format_point, parse_commands};

/// Moves used by the demo: Black D4, White Q16, Black passes, White F3.
const DEMO_MOVES: &str = "B|D4//P|Q16//B|PASSA//P|F3//";

/// igo: a Go rule engine
#[derive(Parser)]
#[command(name = "igo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level or filter spec (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a sequence of moves and print the final board and score
    Play {
        /// Board size
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        /// Read moves from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
        /// Moves given inline, e.g. "B D4; W Q16"
        #[arg(long, conflicts_with = "file")]
        moves: Option<String>,
        /// Print the board after every accepted move
        #[arg(long)]
        show_each: bool,
        /// Stop at the first illegal move
        #[arg(long)]
        strict: bool,
    },
    /// Replay a short sample game
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = setup_logging(&cli.log_level).context("failed to start logger")?;

    match cli.command {
        Some(Commands::Play {
            size,
            file,
            moves,
            show_each,
            strict,
        }) => {
            let text = match (moves, file) {
                (Some(moves), _) => moves,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                (None, None) => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read moves from stdin")?;
                    buf
                }
            };
            run_game(size, &text, show_each, strict)
        }
        Some(Commands::Demo) | None => {
            println!("igo: Go rule engine demo\n");
            run_game(DEFAULT_SIZE, DEMO_MOVES, true, true)
        }
    }
}

fn run_game(size: usize, text: &str, show_each: bool, strict: bool) -> Result<()> {
    let commands = parse_commands(text).context("failed to decode moves")?;
    let mut game = Game::new(size)?;

    for command in commands {
        match game.play(command) {
            Ok(outcome) => {
                println!("{}", describe(&command));
                if outcome.captures() > 0 {
                    println!("  captures {}", outcome.captures());
                }
                if show_each {
                    println!("{}", game.board());
                }
            }
            Err(err) if strict => bail!("{}: {err}", describe(&command)),
            Err(err) => {
                warn!("rejected {command:?}: {err}");
                eprintln!("{}: {err}", describe(&command));
            }
        }
        if game.is_finished() {
            println!("Both players passed.");
            break;
        }
    }

    if !show_each {
        println!("{}", game.board());
    }
    let score = game.score();
    println!("{score}");
    match score.leader() {
        Some(player) => println!("Leader: {player}"),
        None => println!("Tie"),
    }
    Ok(())
}

fn describe(command: &Command) -> String {
    match *command {
        Command::Place { player, x, y } => match format_point((x, y)) {
            Some(vertex) => format!("{player} {vertex}"),
            None => format!("{player} ({x}, {y})"),
        },
        Command::Pass { player } => format!("{player} pass"),
    }
}
