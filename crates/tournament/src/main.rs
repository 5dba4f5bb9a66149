//! Tournament CLI
//!
//! Run matches between Kamisado engines and report the results.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use tournament::{MatchConfig, MatchRunner, TournamentResults, create_engine};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Kamisado Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [options]");
    println!();
    println!("Options:");
    println!("  --games N, -g N      Number of games (default 10)");
    println!("  --depth D, -d D      Search depth (default 3)");
    println!("  --config FILE, -c    Load match settings from a TOML file");
    println!("  --out FILE, -o       Write a JSON report");
    println!();
    println!("Engines:");
    println!("  negamax       - Fixed-depth negamax");
    println!("  random        - Uniformly random legal moves");
    println!("  random:SEED   - Random engine with a fixed seed");
    println!();
    println!("Examples:");
    println!("  tournament match negamax random --games 20 --depth 2");
    println!("  tournament match negamax negamax --config match.toml --out results.json");
}

fn run_match(args: &[String]) -> anyhow::Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine specifications");
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    let mut config = MatchConfig::default();
    let mut games: Option<u32> = None;
    let mut depth: Option<u8> = None;
    let mut out: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--games" | "-g", Some(v)) => {
                games = Some(v.parse().with_context(|| format!("invalid game count {v:?}"))?);
                i += 1;
            }
            ("--depth" | "-d", Some(v)) => {
                depth = Some(v.parse().with_context(|| format!("invalid depth {v:?}"))?);
                i += 1;
            }
            ("--config" | "-c", Some(v)) => {
                config = MatchConfig::from_toml_file(Path::new(v))?;
                i += 1;
            }
            ("--out" | "-o", Some(v)) => {
                out = Some(PathBuf::from(v));
                i += 1;
            }
            (flag, _) => bail!("unexpected argument {flag:?}"),
        }
        i += 1;
    }
    // Flags override the config file.
    if let Some(g) = games {
        config.num_games = g;
    }
    if let Some(d) = depth {
        config.depth = d;
    }

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}, Depth: {}", config.num_games, config.depth);
    println!();

    let mut engine1 = create_engine(engine1_spec)?;
    let mut engine2 = create_engine(engine2_spec)?;

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut results = TournamentResults::new(
        &format!("{engine1_spec} vs {engine2_spec}"),
        vec![engine1_spec.to_string(), engine2_spec.to_string()],
        config,
    );
    results.add_match(engine1_spec, engine2_spec, result);
    results.print_report();

    if let Some(path) = out {
        results.save(&path)?;
        println!("Results written to {}", path.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command {other:?}")
        }
    }
}
