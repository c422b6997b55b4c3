use std::collections::HashMap;

use log::trace;
use rand::Rng;

use crate::error::{ChainError, Result};

/// Handle of a node inside its `Chain`.
///
/// Handles stay valid until the chain is cleared; a removed node's
/// handle is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Represents a state of the chain.
///
/// A `Node` corresponds to one token value and stores all observed
/// transitions from this token to the next ones.
///
/// Conceptually, this is a vertex of the transition graph where outgoing
/// edges are weighted by how often they were observed.
///
/// ## Responsibilities:
/// - Accumulate transition weights during learning
/// - Pick the next node using weighted random sampling
/// - Reduce or remove transitions
///
/// ## Invariants
/// - Each target appears at most once in `edges`
/// - `edges` keeps insertion order, sampling scans it in that order
/// - `positions` maps every target to its index in `edges`
#[derive(Clone, Debug)]
pub struct Node {
	/// Token value of the state.
	value: String,
	/// Outgoing transitions with their weight, in insertion order.
	edges: Vec<(NodeId, i64)>,
	/// Index of each target in `edges`.
	positions: HashMap<NodeId, usize>,
}

impl Node {
	/// Creates a new state without transitions.
	pub(crate) fn new(value: &str) -> Self {
		Self {
			value: value.to_owned(),
			edges: Vec::new(),
			positions: HashMap::new(),
		}
	}

	/// The token value of this node.
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Number of outgoing transitions.
	pub fn transitions(&self) -> usize {
		self.edges.len()
	}

	/// Returns whether a walk ends on this node.
	pub fn is_terminal(&self) -> bool {
		self.edges.is_empty()
	}

	/// Outgoing transitions with their weight, in insertion order.
	pub fn edges(&self) -> impl Iterator<Item = (NodeId, i64)> + '_ {
		self.edges.iter().copied()
	}

	/// Weight of the transition toward `to`, if any.
	pub fn weight(&self, to: NodeId) -> Option<i64> {
		self.positions.get(&to).map(|&position| self.edges[position].1)
	}

	pub fn has_transition(&self, to: NodeId) -> bool {
		self.positions.contains_key(&to)
	}

	/// Sum of all transition weights, `None` if it overflows.
	pub fn total_weight(&self) -> Option<i64> {
		self.edges.iter().try_fold(0i64, |total, &(_, weight)| total.checked_add(weight))
	}

	/// Records `weight` more observations of the transition toward `to`.
	///
	/// - If the transition already exists, its weight is increased,
	///   saturating at the bounds of `i64`.
	/// - Otherwise, a new transition is appended with `weight`.
	pub(crate) fn add_transition(&mut self, to: NodeId, weight: i64) {
		match self.positions.get(&to) {
			Some(&position) => {
				let current = &mut self.edges[position].1;
				*current = current.saturating_add(weight);
			}
			None => {
				self.positions.insert(to, self.edges.len());
				self.edges.push((to, weight));
			}
		}
	}

	/// Removes the transition toward `to` entirely.
	///
	/// Returns `false` if there was no such transition.
	pub fn remove_edge(&mut self, to: NodeId) -> bool {
		let Some(position) = self.positions.remove(&to) else {
			return false;
		};
		self.edges.remove(position);
		for (target, _) in &self.edges[position..] {
			if let Some(shifted) = self.positions.get_mut(target) {
				*shifted -= 1;
			}
		}
		true
	}

	/// Lowers the weight of the transition toward `to` by `weight`.
	///
	/// The transition is kept even if its weight drops to zero or below;
	/// the weight saturates at the bounds of `i64`.
	/// Returns `false` if there was no such transition.
	pub fn reduce_edge(&mut self, to: NodeId, weight: i64) -> bool {
		match self.positions.get(&to) {
			Some(&position) => {
				let current = &mut self.edges[position].1;
				*current = current.saturating_sub(weight);
				true
			}
			None => false,
		}
	}

	/// Picks the next node using weighted random sampling.
	///
	/// A sample is drawn in `0..=total` (inclusive) and the transitions are
	/// scanned in insertion order, subtracting each weight until the sample
	/// fits.
	///
	/// Returns `Ok(None)` if the node has no transitions.
	///
	/// # Errors
	/// - `ChainError::WeightOverflow` if the weights do not fit in an `i64` sum.
	/// - `ChainError::NegativeWeightSum` if the weights sum below zero.
	/// - `ChainError::InvalidSample` if the scan runs past the sum.
	pub fn try_transition<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<NodeId>> {
		if self.edges.is_empty() {
			return Ok(None);
		}

		let total = self
			.total_weight()
			.ok_or_else(|| ChainError::WeightOverflow { value: self.value.clone() })?;
		if total < 0 {
			return Err(ChainError::NegativeWeightSum { value: self.value.clone(), total });
		}

		let sample = rng.random_range(0..=total);
		pick_weighted(&self.edges, total, sample).map(Some)
	}
}

/// Scans `edges` for the bucket containing `sample`.
///
/// `total` is the weight sum observed when the sample was drawn; running
/// past it means the edges changed in between.
pub(crate) fn pick_weighted(edges: &[(NodeId, i64)], total: i64, sample: i64) -> Result<NodeId> {
	let mut remaining = sample;
	for &(target, weight) in edges {
		if remaining <= weight {
			return Ok(target);
		}
		remaining = remaining.saturating_sub(weight);
	}

	trace!("weight scan exhausted: sample {sample}, observed sum {total}");
	Err(ChainError::InvalidSample { sample, total })
}
