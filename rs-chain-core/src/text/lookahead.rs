use crate::error::{ChainError, Result};

/// A cursor over a sequence which can look one element ahead.
///
/// The cursor starts *before* the first element: `current` is `None`
/// until `advance` succeeded once.
pub trait Lookahead {
	type Item;

	/// Moves to the next element.
	///
	/// Returns `false` once the sequence is exhausted.
	fn advance(&mut self) -> bool;

	/// The element reached by the last successful `advance`.
	fn current(&self) -> Option<&Self::Item>;

	/// The element the next `advance` would move to, without consuming it.
	fn peek(&self) -> Option<&Self::Item>;

	/// Rewinds to before the first element.
	///
	/// # Errors
	/// Returns `ChainError::RewindUnsupported` if the source is forward-only.
	fn reset(&mut self) -> Result<()>;
}

/// Native lookahead over an in-memory slice.
///
/// Peeking is an index lookup and rewinding is always possible.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
	items: &'a [T],
	next: usize,
	current: Option<usize>,
}

impl<'a, T> SliceCursor<'a, T> {
	pub fn new(items: &'a [T]) -> Self {
		Self { items, next: 0, current: None }
	}
}

impl<T> Lookahead for SliceCursor<'_, T> {
	type Item = T;

	fn advance(&mut self) -> bool {
		if self.next < self.items.len() {
			self.current = Some(self.next);
			self.next += 1;
			true
		} else {
			false
		}
	}

	fn current(&self) -> Option<&T> {
		self.items.get(self.current?)
	}

	fn peek(&self) -> Option<&T> {
		self.items.get(self.next)
	}

	fn reset(&mut self) -> Result<()> {
		self.next = 0;
		self.current = None;
		Ok(())
	}
}

/// Adapter giving lookahead to any iterator.
///
/// The wrapped iterator is advanced once on creation and the pulled
/// element is kept as the peek buffer.
///
/// # Rewinding
/// - `PeekAdapter::new` wraps a forward-only source, `reset` fails
/// - `PeekAdapter::rewindable` keeps a copy of a cloneable source and
///   restarts from it on `reset`
pub struct PeekAdapter<I: Iterator> {
	source: I,
	origin: Option<(I, fn(&I) -> I)>,
	current: Option<I::Item>,
	next: Option<I::Item>,
}

impl<I> Clone for PeekAdapter<I>
where
	I: Iterator + Clone,
	I::Item: Clone,
{
	fn clone(&self) -> Self {
		Self {
			source: self.source.clone(),
			origin: self.origin.clone(),
			current: self.current.clone(),
			next: self.next.clone(),
		}
	}
}

impl<I: Iterator> PeekAdapter<I> {
	/// Wraps a forward-only source.
	pub fn new(mut source: I) -> Self {
		let next = source.next();
		Self { source, origin: None, current: None, next }
	}
}

impl<I: Iterator + Clone> PeekAdapter<I> {
	/// Wraps a source which can be restarted by `reset`.
	pub fn rewindable(source: I) -> Self {
		let origin = source.clone();
		let restart: fn(&I) -> I = I::clone;
		let mut adapter = Self::new(source);
		adapter.origin = Some((origin, restart));
		adapter
	}
}

impl<I: Iterator> Lookahead for PeekAdapter<I> {
	type Item = I::Item;

	fn advance(&mut self) -> bool {
		match self.next.take() {
			Some(item) => {
				self.current = Some(item);
				self.next = self.source.next();
				true
			}
			None => false,
		}
	}

	fn current(&self) -> Option<&I::Item> {
		self.current.as_ref()
	}

	fn peek(&self) -> Option<&I::Item> {
		self.next.as_ref()
	}

	fn reset(&mut self) -> Result<()> {
		let (origin, restart) = self.origin.as_ref().ok_or(ChainError::RewindUnsupported)?;
		self.source = restart(origin);
		self.current = None;
		self.next = self.source.next();
		Ok(())
	}
}
