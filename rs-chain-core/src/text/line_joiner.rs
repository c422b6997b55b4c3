use unicode_general_category::{GeneralCategory, get_general_category};

use super::lookahead::{Lookahead, PeekAdapter};
use crate::error::Result;

/// Returns whether `c` ends a line (`\n`, `\r` or a Unicode line separator).
pub fn is_end_of_line(c: char) -> bool {
	c == '\n' || c == '\r' || get_general_category(c) == GeneralCategory::LineSeparator
}

/// Character filter joining words hyphenated across line breaks.
///
/// A `-` directly followed by end-of-line characters is dropped together
/// with the whole run of line breaks, so `"end-\nings"` reads `"endings"`.
/// Every other character passes through unchanged.
///
/// # Notes
/// - A `-` at the very end of the source is yielded as is.
/// - If the source ends inside the run of line breaks, the stream ends.
#[derive(Clone)]
pub struct LineJoiner<C> {
	cursor: C,
}

impl<C: Lookahead<Item = char>> LineJoiner<C> {
	pub fn new(cursor: C) -> Self {
		Self { cursor }
	}

	/// Rewinds the wrapped cursor.
	pub fn reset(&mut self) -> Result<()> {
		self.cursor.reset()
	}
}

impl<I: Iterator<Item = char> + Clone> LineJoiner<PeekAdapter<I>> {
	/// Joins lines of a plain (rewindable) character iterator.
	pub fn from_chars(chars: I) -> Self {
		Self::new(PeekAdapter::rewindable(chars))
	}
}

impl<C: Lookahead<Item = char>> Iterator for LineJoiner<C> {
	type Item = char;

	fn next(&mut self) -> Option<char> {
		if !self.cursor.advance() {
			return None;
		}
		let c = *self.cursor.current()?;
		if c == '-' && self.cursor.peek().is_some_and(|&next| is_end_of_line(next)) {
			// Drop the hyphen and the first break, then the rest of the run
			self.cursor.advance();
			loop {
				if !self.cursor.advance() {
					return None;
				}
				let c = *self.cursor.current()?;
				if !is_end_of_line(c) {
					return Some(c);
				}
			}
		}
		Some(c)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::text::lookahead::SliceCursor;

	#[test]
	fn joins_hyphenated_lines() {
		let text = "This is a Test.\n\rWe test multiple line end-\rings and multiple lin-\n\n\r\n\n\r\u{2028}es.\n";
		let joined: String = LineJoiner::from_chars(text.chars()).collect();
		assert_eq!(joined, "This is a Test.\n\rWe test multiple line endings and multiple lines.\n");
	}

	#[test]
	fn end_of_line_characters() {
		assert!(is_end_of_line('\n'));
		assert!(is_end_of_line('\r'));
		assert!(is_end_of_line('\u{2028}'));
		assert!(!is_end_of_line('X'));
		assert!(!is_end_of_line(' '));
	}

	#[test]
	fn keeps_plain_hyphens() {
		let joined: String = LineJoiner::from_chars("Test-Case -".chars()).collect();
		assert_eq!(joined, "Test-Case -");
	}

	#[test]
	fn source_ending_in_break_run_ends_stream() {
		let joined: String = LineJoiner::from_chars("word-\n\r".chars()).collect();
		assert_eq!(joined, "word");
	}

	#[test]
	fn works_over_native_cursor_and_resets() {
		let chars: Vec<char> = "a-\nb".chars().collect();
		let mut joiner = LineJoiner::new(SliceCursor::new(&chars));
		assert_eq!(joiner.by_ref().collect::<String>(), "ab");
		joiner.reset().unwrap();
		assert_eq!(joiner.collect::<String>(), "ab");
	}
}
