use rand::SeedableRng;
use rand::rngs::StdRng;

use super::chain::Chain;
use super::walk::{DEFAULT_TERMINATORS, Sentences};
use crate::error::{ChainError, Result};

/// Input parameters for generating sentences from a chain.
///
/// # Responsibilities
/// - Track how many sentences to produce (non-positive means unlimited)
/// - Track the terminator tokens starting and ending every sentence
/// - Build the random source, seeded for reproducible output if requested
///
/// # Invariants
/// - `terminators` is never empty
#[derive(Debug, Clone)]
pub struct GenerationInput {
	/// Number of sentences to generate, `<= 0` for no limit.
	pub sentence_count: i64,

	/// Seed of the random source, `None` to seed from the OS.
	pub seed: Option<u64>,

	/// Tokens starting and ending a sentence.
	terminators: Vec<String>,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			sentence_count: 1,
			seed: None,
			terminators: DEFAULT_TERMINATORS.iter().map(|&t| t.to_owned()).collect(),
		}
	}
}

impl GenerationInput {
	pub fn terminators(&self) -> impl Iterator<Item = &str> {
		self.terminators.iter().map(String::as_str)
	}

	/// Replaces the terminator tokens.
	///
	/// # Errors
	/// Returns `ChainError::NoTerminators` if `terminators` is empty.
	pub fn set_terminators<I, S>(&mut self, terminators: I) -> Result<()>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let terminators: Vec<String> = terminators.into_iter().map(Into::into).collect();
		if terminators.is_empty() {
			return Err(ChainError::NoTerminators);
		}
		self.terminators = terminators;
		Ok(())
	}

	/// Maximum number of sentences, `None` if unlimited.
	pub fn limit(&self) -> Option<usize> {
		usize::try_from(self.sentence_count).ok().filter(|&count| count > 0)
	}

	/// Builds the random source for a generation run.
	pub fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}

	/// Starts generating sentences from `chain` with these parameters.
	///
	/// The result is endless; apply `limit` to bound it.
	///
	/// # Errors
	/// Fails with `ChainError::NoStartNode` before producing anything if no
	/// terminator occurs in the chain.
	pub fn sentences<'a>(&self, chain: &'a Chain) -> Result<Sentences<'a, StdRng>> {
		Sentences::new(chain, &self.terminators, self.rng())
	}
}
