//! Terminal chessboard - two players share one board in a terminal.
//!
//! The board is drawn on stdout after every line of input. Type a square
//! name to select a piece, then a highlighted square to move it there.

mod config;
mod input;
mod terminal;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chessboard_core::Color;
use chessboard_engine::{CaptureLedger, Game, GameOutcome, Session, SessionStats};
use clap::Parser;
use config::Config;
use input::LineEvents;
use serde::Serialize;
use terminal::{Style, TerminalRenderer};
use tracing_subscriber::EnvFilter;

/// Terminal chessboard for two players.
#[derive(Parser)]
#[command(name = "chessboard")]
#[command(about = "Two-player chessboard in the terminal")]
struct Args {
    /// Path to a config file (default: ./chessboard.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Draw without colors
    #[arg(long)]
    plain: bool,

    /// Start from this placement instead of the standard layout
    #[arg(long)]
    placement: Option<String>,

    /// Player to move when starting from --placement
    #[arg(long, default_value = "black", value_parser = parse_color)]
    turn: Color,

    /// Print the starting board as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Print the end-of-session summary as JSON
    #[arg(long)]
    json: bool,
}

fn parse_color(s: &str) -> Result<Color, String> {
    match s.to_ascii_lowercase().as_str() {
        "black" | "b" => Ok(Color::Black),
        "white" | "w" => Ok(Color::White),
        other => Err(format!("unknown player '{other}', expected black or white")),
    }
}

#[derive(Serialize)]
struct Summary<'a> {
    events: usize,
    turn: Color,
    outcome: Option<GameOutcome>,
    captures: &'a CaptureLedger,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).context("loading configuration")?;
    if args.plain {
        config.plain = true;
    }
    init_tracing(&config.log_level)?;

    let mut game = match &args.placement {
        Some(placement) => Game::from_placement(placement, args.turn)
            .with_context(|| format!("invalid placement '{placement}'"))?,
        None => Game::new(),
    };

    if args.dump {
        println!("{}", serde_json::to_string_pretty(&game.board().snapshot())?);
        return Ok(());
    }

    let stats = play(&mut game, &config, args.placement.is_some())?;
    report(&game, stats, args.json)
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .with_context(|| format!("invalid log level '{default_level}'"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn play(game: &mut Game, config: &Config, resume: bool) -> anyhow::Result<SessionStats> {
    let mut renderer = TerminalRenderer::new(io::stdout().lock(), Style::from(config));
    let mut events = LineEvents::new(io::stdin().lock());
    let session = Session::new(game, &mut renderer, &mut events);

    let stats = if resume {
        session.resume()?
    } else {
        session.run()?
    };
    tracing::info!(events = stats.events, "session finished");
    Ok(stats)
}

fn report(game: &Game, stats: SessionStats, json: bool) -> anyhow::Result<()> {
    if json {
        let summary = Summary {
            events: stats.events,
            turn: game.turn(),
            outcome: game.outcome(),
            captures: game.captures(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    match game.outcome() {
        Some(outcome) => println!("{} wins by capturing the king.", outcome.winner()),
        None => println!("Game abandoned with {} to move.", game.turn()),
    }
    for color in Color::ALL {
        let taken: Vec<String> = game
            .captures()
            .captured_by(color)
            .iter()
            .map(|piece| piece.to_char().to_string())
            .collect();
        if !taken.is_empty() {
            println!("{color} captured: {}", taken.join(" "));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_placement_and_turn() {
        let args = Args::try_parse_from([
            "chessboard",
            "--plain",
            "--placement",
            "8/8/8/3r4/8/3K4/8/8",
            "--turn",
            "White",
        ])
        .unwrap();
        assert!(args.plain);
        assert_eq!(args.placement.as_deref(), Some("8/8/8/3r4/8/3K4/8/8"));
        assert_eq!(args.turn, Color::White);
        assert!(!args.json);
    }

    #[test]
    fn turn_defaults_to_black() {
        let args = Args::try_parse_from(["chessboard"]).unwrap();
        assert_eq!(args.turn, Color::Black);
        assert!(args.config.is_none());
    }

    #[test]
    fn bad_turn_is_rejected() {
        assert!(Args::try_parse_from(["chessboard", "--turn", "red"]).is_err());
    }

    #[test]
    fn summary_serializes_outcome() {
        let mut game = Game::from_placement("8/8/8/3r4/8/3K4/8/8", Color::Black).unwrap();
        let mut log = chessboard_engine::CommandLog::new();
        game.activate(chessboard_core::Coord::new(3, 3), &mut log);
        game.activate(chessboard_core::Coord::new(3, 5), &mut log);

        let summary = Summary {
            events: 2,
            turn: game.turn(),
            outcome: game.outcome(),
            captures: game.captures(),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["outcome"]["reason"], "king_captured");
        assert_eq!(value["outcome"]["winner"], "black");
        assert_eq!(value["turn"], "white");
    }
}
