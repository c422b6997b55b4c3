use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use log::{LevelFilter, debug, info};

use rs_chain_core::io::{STDIN_PATH, read_sample};
use rs_chain_core::model::{Chain, DEFAULT_TERMINATORS, GenerationInput};
use rs_chain_core::text;

/// Command line arguments of `rs-chain`.
#[derive(Parser, Debug)]
#[command(name = "rs-chain")]
#[command(version, about = "Generate sentences from a Markov chain learned on sample text")]
struct Cli {
	/// How many sentences should be produced, n < 1 for unlimited
	#[arg(short = 'n', long = "sentences", default_value_t = 1, allow_negative_numbers = true)]
	sentences: i64,

	/// Tokens which start and end a sentence, use -- before FILES if given last
	#[arg(short, long = "start", value_name = "TOKEN", num_args = 1.., default_values_t = DEFAULT_TERMINATORS.map(String::from))]
	start: Vec<String>,

	/// Show tokens while parsing
	#[arg(short, long)]
	verbose: bool,

	/// Seed of the random generator, for reproducible output
	#[arg(long)]
	seed: Option<u64>,

	/// Files to read sample text from, - represents stdin
	#[arg(value_name = "FILES", default_values_t = [STDIN_PATH.to_owned()])]
	files: Vec<String>,
}

impl Cli {
	/// Converts the arguments into generation parameters.
	fn generation_input(&self) -> Result<GenerationInput> {
		let mut input = GenerationInput::default();
		input.sentence_count = self.sentences;
		input.seed = self.seed;
		input.set_terminators(self.start.iter().cloned())?;
		Ok(input)
	}
}

/// Configures logging from `env`; verbose mode always shows the tokens.
fn logger(env: Env, verbose: bool) -> Builder {
	let mut builder = Builder::from_env(env);
	if verbose {
		builder.filter_module("tokens", LevelFilter::Debug);
	}
	builder
}

/// Passes tokens through unchanged, logging each one.
fn trace_tokens<I: Iterator<Item = String>>(tokens: I) -> impl Iterator<Item = String> {
	tokens.inspect(|token| debug!(target: "tokens", "{token}"))
}

/// Learns a chain from every sample file, as one continuous token stream.
fn build_chain(files: &[String], verbose: bool) -> Result<Chain> {
	let mut samples = Vec::with_capacity(files.len());
	for path in files {
		let sample = read_sample(path).with_context(|| format!("failed to read sample '{path}'"))?;
		info!("read {} bytes from '{path}'", sample.len());
		samples.push(sample);
	}

	let tokens = samples.iter().flat_map(|sample| text::tokens(sample));
	let mut chain = Chain::new();
	if verbose {
		chain.add_transitions(trace_tokens(tokens));
	} else {
		chain.add_transitions(tokens);
	}
	info!("chain built with {} nodes", chain.len());
	Ok(chain)
}

/// Writes the sentences, one per line with tokens joined by spaces.
fn write_sentences<W: Write>(chain: &Chain, input: &GenerationInput, out: &mut W) -> Result<()> {
	let sentences = input.sentences(chain)?;
	let limit = input.limit().unwrap_or(usize::MAX);
	for sentence in sentences.take(limit) {
		writeln!(out, "{}", sentence?.join(" "))?;
	}
	out.flush()?;
	Ok(())
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
	let input = cli.generation_input()?;
	let chain = build_chain(&cli.files, cli.verbose)?;
	write_sentences(&chain, &input, out)
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	let default_filter = if cli.verbose { "debug" } else { "warn" };
	logger(Env::default().default_filter_or(default_filter), cli.verbose).init();

	let stdout = io::stdout();
	let mut out = BufWriter::new(stdout.lock());
	run(&cli, &mut out)
}
