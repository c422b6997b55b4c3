use std::collections::HashMap;

use log::debug;
use rand::Rng;

use super::node::{Node, NodeId};
use super::walk::{Sentences, Walk};
use crate::error::Result;

/// Weighted transition graph between token values.
///
/// The `Chain` owns every `Node` in an arena and maps each token value to
/// the handle of its node. Transitions reference nodes by handle, so the
/// graph may freely contain cycles.
///
/// # Responsibilities
/// - Build the graph from single transitions or whole token sequences
/// - Look nodes up by value or by handle
/// - Start random walks and sentence generation
///
/// # Invariants
/// - Each token value has exactly one node
/// - `ids` and the occupied slots of `nodes` describe the same nodes
#[derive(Clone, Debug, Default)]
pub struct Chain {
	/// Node arena; removed nodes leave an empty slot.
	nodes: Vec<Option<Node>>,
	/// Mapping from a token value to its node handle.
	ids: HashMap<String, NodeId>,
}

impl Chain {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of nodes in the chain.
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	pub fn contains(&self, value: &str) -> bool {
		self.ids.contains_key(value)
	}

	/// Removes every node.
	pub fn clear(&mut self) {
		self.nodes.clear();
		self.ids.clear();
	}

	/// Iterates over the token values of the chain, in no particular order.
	pub fn values(&self) -> impl Iterator<Item = &str> {
		self.ids.keys().map(String::as_str)
	}

	/// Iterates over the nodes of the chain, in creation order.
	pub fn nodes(&self) -> impl Iterator<Item = &Node> {
		self.nodes.iter().flatten()
	}

	/// Adds an empty node for `value` if it does not exist yet.
	///
	/// Returns whether a node was created.
	pub fn try_add_node(&mut self, value: &str) -> bool {
		if self.contains(value) {
			return false;
		}
		self.resolve(value);
		true
	}

	pub fn node_id(&self, value: &str) -> Option<NodeId> {
		self.ids.get(value).copied()
	}

	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.get(id.0)?.as_ref()
	}

	/// Looks a node up by its token value.
	pub fn get_node(&self, value: &str) -> Option<&Node> {
		self.node(self.node_id(value)?)
	}

	/// Mutable access to a node, to reduce or remove its transitions.
	pub fn node_mut(&mut self, value: &str) -> Option<&mut Node> {
		let id = self.node_id(value)?;
		self.nodes.get_mut(id.0)?.as_mut()
	}

	/// Removes the node of `value` and every transition leading to it.
	///
	/// Returns `false` if the value was not in the chain.
	pub fn remove_node(&mut self, value: &str) -> bool {
		let Some(id) = self.ids.remove(value) else {
			return false;
		};
		self.nodes[id.0] = None;
		for node in self.nodes.iter_mut().flatten() {
			node.remove_edge(id);
		}
		true
	}

	/// Adds one observation of the transition `from -> to`.
	pub fn add_transition(&mut self, from: &str, to: &str) {
		self.add_weighted_transition(from, to, 1);
	}

	/// Adds the transition `from -> to` with `weight`.
	///
	/// Both nodes are created if missing; an existing transition has its
	/// weight increased instead of being duplicated.
	pub fn add_weighted_transition(&mut self, from: &str, to: &str, weight: i64) {
		let to = self.resolve(to);
		let from = self.resolve(from);
		self.link(from, to, weight);
	}

	/// Adds a path of weighted values to the chain.
	///
	/// Each value is linked to the previous one with its weight; the weight
	/// of the first value is ignored since nothing precedes it.
	///
	/// # Notes
	/// - More efficient than repeated `add_weighted_transition` calls, the
	///   previous node is reused instead of being looked up again.
	pub fn add_weighted_transitions<I, S>(&mut self, transitions: I)
	where
		I: IntoIterator<Item = (S, i64)>,
		S: AsRef<str>,
	{
		let mut transitions = transitions.into_iter();
		let Some((first, _)) = transitions.next() else {
			return;
		};

		let mut last = self.resolve(first.as_ref());
		let mut count = 1usize;
		for (value, weight) in transitions {
			let next = self.resolve(value.as_ref());
			self.link(last, next, weight);
			last = next;
			count += 1;
		}
		debug!("ingested {count} values, chain has {} nodes", self.len());
	}

	/// Adds a path of values, each transition with a weight of 1.
	pub fn add_transitions<I, S>(&mut self, values: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.add_weighted_transitions(values.into_iter().map(|value| (value, 1)));
	}

	/// Starts a random walk on the node `start`.
	///
	/// The walk yields the value of `start` first.
	pub fn walk<R: Rng>(&self, start: NodeId, rng: R) -> Walk<'_, R> {
		Walk::new(self, start, rng)
	}

	/// Starts generating sentences delimited by `terminators`.
	///
	/// # Errors
	/// Fails with `ChainError::NoStartNode` if none of the terminators is a
	/// node of the chain.
	pub fn sentences<R, I, S>(&self, terminators: I, rng: R) -> Result<Sentences<'_, R>>
	where
		R: Rng,
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Sentences::new(self, terminators, rng)
	}

	/// Returns the node of `value`, creating it if needed.
	fn resolve(&mut self, value: &str) -> NodeId {
		if let Some(&id) = self.ids.get(value) {
			return id;
		}
		let id = NodeId(self.nodes.len());
		self.nodes.push(Some(Node::new(value)));
		self.ids.insert(value.to_owned(), id);
		id
	}

	fn link(&mut self, from: NodeId, to: NodeId, weight: i64) {
		if let Some(node) = self.nodes.get_mut(from.0).and_then(Option::as_mut) {
			node.add_transition(to, weight);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ChainError;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn weight(chain: &Chain, from: &str, to: &str) -> Option<i64> {
		chain.get_node(from)?.weight(chain.node_id(to)?)
	}

	#[test]
	fn count_and_try_add() {
		let mut chain = Chain::new();
		assert_eq!(chain.len(), 0);
		assert!(chain.try_add_node("0"));
		assert!(chain.try_add_node("1"));
		assert!(!chain.try_add_node("0"));
		assert_eq!(chain.len(), 2);
		assert_eq!(chain.get_node("1").map(Node::value), Some("1"));
		assert!(chain.get_node("42").is_none());
	}

	#[test]
	fn remove_and_clear() {
		let mut chain = Chain::new();
		chain.add_transition("a", "b");
		chain.add_transition("b", "a");
		assert!(chain.remove_node("a"));
		assert!(!chain.remove_node("a"));
		assert_eq!(chain.len(), 1);
		assert!(chain.get_node("b").unwrap().is_terminal());

		chain.clear();
		assert!(chain.is_empty());
		assert_eq!(chain.nodes().count(), 0);
	}

	#[test]
	fn node_ids_are_not_reused_after_removal() {
		let mut chain = Chain::new();
		chain.try_add_node("a");
		chain.try_add_node("b");
		let a = chain.node_id("a").unwrap();
		let b = chain.node_id("b").unwrap();

		chain.remove_node("a");
		chain.try_add_node("c");
		assert_ne!(chain.node_id("c"), Some(a));
		assert!(chain.node(a).is_none());
		assert_eq!(chain.node(b).map(Node::value), Some("b"));
	}

	#[test]
	fn add_transition_merges_weights() {
		let mut chain = Chain::new();
		chain.add_transition("x", "y");
		chain.add_weighted_transition("x", "y", 42);
		assert_eq!(weight(&chain, "x", "y"), Some(43));
		assert_eq!(chain.get_node("x").unwrap().transitions(), 1);
		assert_eq!(chain.get_node("y").unwrap().transitions(), 0);
	}

	#[test]
	fn paths_share_nodes() {
		let mut chain = Chain::new();
		chain.add_transitions(["a", "b", "c", "d"]);
		chain.add_transitions(["a", "b", "1", "2"]);
		chain.add_transitions(["a", "b", "3", "4", "a", "b", "5", "6"]);

		assert_eq!(chain.values().filter(|&value| value == "a").count(), 1);
		assert_eq!(chain.values().filter(|&value| value == "b").count(), 1);
		// The third path crosses a -> b twice
		assert_eq!(weight(&chain, "a", "b"), Some(4));

		let b = chain.get_node("b").unwrap();
		let targets: Vec<(&str, i64)> = b
			.edges()
			.map(|(id, weight)| (chain.node(id).unwrap().value(), weight))
			.collect();
		assert_eq!(targets, vec![("c", 1), ("1", 1), ("3", 1), ("5", 1)]);
	}

	#[test]
	fn weighted_path_ignores_first_weight() {
		let mut chain = Chain::new();
		chain.add_weighted_transitions(Vec::<(&str, i64)>::new());
		assert!(chain.is_empty());

		chain.add_transition("2", "42");
		chain.add_weighted_transitions([("3", 42), ("2", 1), ("1", 9)]);
		assert_eq!(chain.len(), 4);
		assert_eq!(weight(&chain, "3", "2"), Some(1));
		assert_eq!(weight(&chain, "2", "42"), Some(1));
		assert_eq!(weight(&chain, "2", "1"), Some(9));
		assert!(chain.get_node("1").unwrap().is_terminal());
	}

	#[test]
	fn node_mut_reduces_weights() {
		let mut chain = Chain::new();
		chain.add_weighted_transition("a", "b", 5);
		let b = chain.node_id("b").unwrap();
		assert!(chain.node_mut("a").unwrap().reduce_edge(b, 2));
		assert_eq!(weight(&chain, "a", "b"), Some(3));
		assert!(chain.node_mut("a").unwrap().remove_edge(b));
		assert_eq!(weight(&chain, "a", "b"), None);
	}

	#[test]
	fn huge_weights_do_not_panic() {
		let mut chain = Chain::new();
		chain.add_weighted_transition("a", "b", i64::MAX);
		chain.add_weighted_transition("a", "b", i64::MAX);
		assert_eq!(weight(&chain, "a", "b"), Some(i64::MAX));

		chain.add_transition("a", "c");
		let start = chain.node_id("a").unwrap();
		let mut walk = chain.walk(start, StdRng::seed_from_u64(0));
		assert!(matches!(walk.next(), Some(Err(ChainError::WeightOverflow { .. }))));
		assert!(walk.next().is_none());
	}
}
