// SPDX-License-Identifier: MIT

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use autocomplete::config::Config;
use autocomplete::input::{Command, apply_suggestion, pick, suggestions};
use autocomplete::{Vocabulary, elapsed_secs};
use clap::Parser;
use tracing::{info, info_span};
use tracing_subscriber::EnvFilter;

/// Suggest words that start with what you type.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
	/// Prefixes to complete; starts an interactive session when empty
	#[arg(name = "PREFIX")]
	prefixes: Vec<String>,

	/// Word list with one word per line
	#[arg(short, long, value_name = "FILE")]
	words: Option<PathBuf>,

	/// Show at most this many suggestions
	#[arg(short, long)]
	limit: Option<usize>,
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(io::stderr)
		.init();

	let Cli {
		prefixes,
		words,
		limit,
	} = Cli::parse();
	let config = Config {
		vocabulary: words,
		limit,
	};
	let vocabulary = config.load_vocabulary()?;

	if prefixes.is_empty() {
		repl(&vocabulary, &config)
	} else {
		let mut stdout = io::stdout().lock();
		for prefix in &prefixes {
			let found = suggestions(&vocabulary, prefix, config.limit);
			writeln!(stdout, "{prefix}: {}", found.join(", "))?;
		}
		Ok(())
	}
}

/// Reads lines from stdin and prints numbered suggestions for the last token.
///
/// `:N` picks suggestion `N` for the previous line, `:q` quits.
fn repl(vocabulary: &Vocabulary, config: &Config) -> anyhow::Result<()> {
	let stdin = io::stdin();
	let mut stdout = io::stdout().lock();
	let mut line = String::new();
	let mut shown: Vec<String> = Vec::new();

	writeln!(
		stdout,
		"{} words from {}. Type to search, :N to pick, :q to quit",
		vocabulary.len(),
		vocabulary.name
	)?;

	for input in stdin.lock().lines() {
		let input = input.context("failed to read stdin")?;

		match Command::parse(&input) {
			Command::Quit => break,
			Command::Pick(index) => {
				match pick(&shown, index) {
					Some(choice) => {
						line = apply_suggestion(&line, choice);
						shown.clear();
						writeln!(stdout, "{line}")?;
					}
					None => writeln!(stdout, "no suggestion {index}")?,
				}
				continue;
			}
			Command::Search(_) => {}
		}

		let _span = info_span!("search").entered();
		let t0 = Instant::now();
		line = input;
		shown = suggestions(vocabulary, &line, config.limit);
		for (i, word) in shown.iter().enumerate() {
			writeln!(stdout, "{:>4}. {word}", i + 1)?;
		}
		info!("{} suggestions in {:.3}s", shown.len(), elapsed_secs(t0));
	}

	Ok(())
}
