//! Terminal Cluedo runner (default binary).
//!
//! Players share one terminal and take turns answering prompts on stdin.
//! The board is redrawn before every question; logs go to stderr.

use std::io::{self, BufRead, ErrorKind, Write};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use log::{info, LevelFilter};

use cluedo::engine::{Game, GameConfig};
use cluedo::input::{answer, Console};
use cluedo::term::{BoardView, TerminalRenderer};
use cluedo::types::{MAX_PLAYERS, MIN_PLAYERS};

#[derive(Parser)]
#[command(name = "cluedo")]
#[command(about = "Text-based Cluedo for 3 to 6 players at one terminal")]
#[command(version)]
struct Cli {
    /// Number of players (3-6); asked for when omitted
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(3..=6))]
    players: Option<u8>,

    /// Seed for dice, dealing and placement, to replay a game
    #[arg(long, env = "CLUEDO_SEED")]
    seed: Option<u64>,

    /// Plain text: no colours, no screen clearing
    #[arg(long)]
    plain: bool,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let Some(players) = player_count(&mut console, cli.players)? else {
        info!("input closed before the game started");
        return Ok(());
    };

    let config = GameConfig::new(players, cli.seed)?;
    let mut game = Game::new(&config).context("setting up the board")?;

    let color = !cli.plain && io::stdout().is_tty();
    let mut term = TerminalRenderer::stdout(color);
    run(&mut game, &mut console, &mut term)
}

/// Players from the command line, or asked for. `None` when input closes.
fn player_count<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    given: Option<u8>,
) -> Result<Option<u8>> {
    if given.is_some() {
        return Ok(given);
    }
    let prompt = format!("How many players ({}-{})? ", MIN_PLAYERS, MAX_PLAYERS);
    match console.ask_number(&prompt, MIN_PLAYERS as u32, MAX_PLAYERS as u32) {
        Ok(n) => Ok(Some(n as u8)),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e).context("reading the player count"),
    }
}

fn run<R: BufRead, W: Write, T: Write>(
    game: &mut Game,
    console: &mut Console<R, W>,
    term: &mut TerminalRenderer<T>,
) -> Result<()> {
    let view = BoardView::default();
    let mut fb = BoardView::framebuffer();

    let mut events = game.start()?;
    while let Some(request) = game.pending() {
        view.render_into(game.board(), &mut fb);
        term.draw(&fb)?;
        term.narrate(&events)?;

        let reply = match answer(console, game, &request) {
            Ok(reply) => reply,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                info!("input closed on turn {}, leaving the game", game.turn());
                return Ok(());
            }
            Err(e) => return Err(e).context("reading an answer"),
        };
        events = game.respond(reply)?;
    }

    term.narrate(&events)?;
    Ok(())
}

fn init_logging(verbosity: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbosity {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.target(env_logger::Target::Stderr).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_player_count_from_flag_skips_prompt() {
        let mut console = scripted("");
        assert_eq!(player_count(&mut console, Some(5)).unwrap(), Some(5));
        assert!(console.out().is_empty());
    }

    #[test]
    fn test_player_count_retries_out_of_range() {
        let mut console = scripted("2\nfour\n4\n");
        assert_eq!(player_count(&mut console, None).unwrap(), Some(4));
    }

    #[test]
    fn test_player_count_closed_input_is_not_an_error() {
        let mut console = scripted("");
        assert_eq!(player_count(&mut console, None).unwrap(), None);

        let mut console = scripted("7\n");
        assert_eq!(player_count(&mut console, None).unwrap(), None);
    }
}
