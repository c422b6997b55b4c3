use std::collections::HashSet;

use log::{trace, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::chain::Chain;
use super::node::NodeId;
use crate::error::{ChainError, Result};

/// Tokens ending a sentence when none are configured.
pub const DEFAULT_TERMINATORS: [&str; 4] = [".", "?", "!", "‽"];

/// Random walk through a `Chain`.
///
/// Yields the value of the current node, then moves along one of its
/// transitions picked by weight. The walk ends after yielding a node
/// without transitions.
///
/// # Notes
/// - The walk borrows the chain, so the chain cannot change while walking.
/// - A sampling error is yielded once, then the walk ends.
pub struct Walk<'a, R> {
	chain: &'a Chain,
	next: Option<NodeId>,
	rng: R,
}

impl<'a, R: Rng> Walk<'a, R> {
	pub(crate) fn new(chain: &'a Chain, start: NodeId, rng: R) -> Self {
		Self { chain, next: Some(start), rng }
	}
}

impl<'a, R: Rng> Iterator for Walk<'a, R> {
	type Item = Result<&'a str>;

	fn next(&mut self) -> Option<Self::Item> {
		let node = self.chain.node(self.next.take()?)?;
		match node.try_transition(&mut self.rng) {
			Ok(next) => {
				self.next = next;
				Some(Ok(node.value()))
			}
			Err(e) => Some(Err(e)),
		}
	}
}

/// Endless generator of sentences.
///
/// Each sentence starts on a terminator node chosen uniformly among the
/// terminators present in the chain. The starting terminator itself is
/// skipped; the walk then runs until it yields a terminator (kept as the
/// last token) or reaches a node without transitions.
///
/// # Responsibilities
/// - Validate the terminators against the chain before generating
/// - Produce sentences lazily, one per `next` call, forever
///
/// # Notes
/// - Limit the output with `Iterator::take`.
/// - The same chain, terminators and seeded random source always produce
///   the same sentences.
pub struct Sentences<'a, R> {
	chain: &'a Chain,
	starts: Vec<NodeId>,
	terminators: HashSet<String>,
	rng: R,
}

impl<'a, R: Rng> Sentences<'a, R> {
	/// Prepares sentence generation over `chain`.
	///
	/// # Errors
	/// Returns `ChainError::NoStartNode` if none of `terminators` is a node
	/// of the chain.
	pub fn new<I, S>(chain: &'a Chain, terminators: I, rng: R) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut ordered: Vec<String> = Vec::new();
		for terminator in terminators {
			let terminator = terminator.as_ref();
			if !ordered.iter().any(|known| known == terminator) {
				ordered.push(terminator.to_owned());
			}
		}

		let mut starts = Vec::new();
		for terminator in &ordered {
			match chain.node_id(terminator) {
				Some(id) => starts.push(id),
				None => warn!("terminator '{terminator}' does not occur in the sample text"),
			}
		}
		if starts.is_empty() {
			return Err(ChainError::NoStartNode(ordered));
		}

		Ok(Self {
			chain,
			starts,
			terminators: ordered.into_iter().collect(),
			rng,
		})
	}

	fn sentence(&mut self, start: NodeId) -> Result<Vec<&'a str>> {
		let chain = self.chain;
		let mut walk = chain.walk(start, &mut self.rng);

		// The starting terminator closes the previous sentence
		if let Some(Err(e)) = walk.next() {
			return Err(e);
		}

		let mut sentence = Vec::new();
		for token in walk {
			let token = token?;
			sentence.push(token);
			if self.terminators.contains(token) {
				break;
			}
		}
		Ok(sentence)
	}
}

impl<'a, R: Rng> Iterator for Sentences<'a, R> {
	type Item = Result<Vec<&'a str>>;

	fn next(&mut self) -> Option<Self::Item> {
		let start = *self.starts.choose(&mut self.rng)?;
		let sentence = self.sentence(start);
		if let Err(e) = &sentence {
			trace!("sentence generation failed: {e}");
		}
		Some(sentence)
	}
}
