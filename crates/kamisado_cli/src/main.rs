//! Console Kamisado: a human plays White against the negamax engine.
//!
//! Usage: `kamisado [depth] [--no-color]`

mod input;
mod render;

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use kamisado_core::{Engine, Game, Outcome, Player, SearchLimits, Skip};
use negamax_engine::NegamaxEngine;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use input::{parse_command, play_human, rejection, Command};
use render::render_board;

const HUMAN: Player = Player::White;

struct Options {
    depth: u8,
    use_color: bool,
}

fn parse_args(args: &[String]) -> anyhow::Result<Options> {
    let mut options = Options {
        depth: SearchLimits::default().depth,
        use_color: env::var_os("NO_COLOR").is_none(),
    };
    for arg in args {
        match arg.as_str() {
            "--no-color" => options.use_color = false,
            "-h" | "--help" => {
                println!("Usage: kamisado [depth] [--no-color]");
                std::process::exit(0);
            }
            other if other.starts_with('-') => bail!("unknown flag {other:?}"),
            other => {
                options.depth = other
                    .parse()
                    .with_context(|| format!("invalid depth {other:?}"))?;
            }
        }
    }
    Ok(options)
}

fn announce_skips(skips: &[Skip]) {
    for skip in skips {
        let who = if skip.player == HUMAN { "Your" } else { "The engine's" };
        println!("{who} {} piece is blocked, turn skipped.", skip.color);
    }
}

fn announce_outcome(outcome: Outcome) {
    if let Outcome::Deadlock { loser } = outcome {
        let who = if loser == HUMAN { "your" } else { "the engine's" };
        println!("Deadlock: both sides are blocked after {who} move.");
    }
    if outcome.winner() == HUMAN {
        println!("You win!");
    } else {
        println!("The engine wins.");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;
    let limits = SearchLimits::depth(options.depth);

    let mut game = Game::new();
    let mut engine = NegamaxEngine::new();
    engine.new_game();

    println!("Kamisado: you are X (White), moving up the board. Depth {}.", limits.depth);
    println!("Enter `q` to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    let mut redraw = true;
    loop {
        if redraw {
            println!();
            print!("{}", render_board(game.state(), HUMAN, options.use_color));
            redraw = false;
        }

        if let Some(outcome) = game.outcome() {
            announce_outcome(outcome);
            break;
        }

        if game.side_to_move() != HUMAN {
            let result = engine.search(&game, limits);
            debug!(nodes = result.nodes, score = result.score, "engine searched");
            let Some(mv) = result.best_move else {
                bail!("engine found no move");
            };
            let skips = game.play(mv.color, mv.to)?;
            println!("The engine moves {} to {}.", mv.color, mv.to);
            announce_skips(&skips);
            redraw = true;
            continue;
        }

        let opening = game.forced_color().is_none();
        match game.forced_color() {
            Some(color) => print!("Move your {color} piece to: "),
            None => print!("Your move (e.g. a1 d4): "),
        }
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let (from, to) = match parse_command(&line, opening) {
            Ok(Command::Quit) => break,
            Ok(Command::Move { from, to }) => (from, to),
            Err(err) => {
                println!("{}", rejection(&err));
                continue;
            }
        };
        match play_human(&mut game, from, to) {
            Ok(skips) => {
                announce_skips(&skips);
                redraw = true;
            }
            Err(err) => println!("{}", rejection(&err)),
        }
    }
    Ok(())
}
