//! Command-line scorer (default binary).
//!
//! Scores one encoded game string and prints a one-line summary, or the
//! JSON rendering of the result with `--json`. Domain errors are reported
//! by kind on stderr and never escape unformatted.

use std::process::ExitCode;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use ten_pin::core::Game;
use ten_pin::types::RuleSet;

const USAGE: &str = "usage: ten-pin [--rules <national|international|0|1>] [--json] <GAME>";

struct Cli {
    game: String,
    rules: RuleSet,
    json: bool,
}

fn parse_args(args: &[String]) -> Result<Cli> {
    let mut rules = RuleSet::default();
    let mut json = false;
    let mut game: Option<String> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--rules" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --rules"))?;
                rules = v.parse::<RuleSet>()?;
            }
            "--json" => json = true,
            other if other.starts_with("--") => {
                return Err(anyhow!("unknown argument: {}", other));
            }
            other => {
                if game.replace(other.to_string()).is_some() {
                    return Err(anyhow!("expected exactly one game string\n{}", USAGE));
                }
            }
        }
        i += 1;
    }

    let game = game.ok_or_else(|| anyhow!("{}", USAGE))?;
    Ok(Cli { game, rules, json })
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    let game = Game::new(&cli.game, cli.rules);
    match game.score() {
        Ok(result) => {
            if cli.json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!(
                    "game: {}  rules: {}  frames: {}  score: {}",
                    game.encoded(),
                    game.rules(),
                    result.total_frames,
                    result.total_score
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("score error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
