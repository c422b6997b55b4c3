//! Text pipeline turning raw characters into tokens.
//!
//! - `Lookahead` cursors (`SliceCursor`, `PeekAdapter`)
//! - `LineJoiner`, removing hyphenated line wraps
//! - `Tokenizer`, splitting characters into word and punctuation tokens

/// One-element lookahead over a sequence.
pub mod lookahead;

/// Filter joining words hyphenated across line breaks.
pub mod line_joiner;

/// Character classification and tokenization.
pub mod tokenizer;

use std::str::Chars;

use line_joiner::LineJoiner;
use lookahead::PeekAdapter;
use tokenizer::Tokenizer;

/// Tokens of a sample text, with hyphenated line wraps joined first.
pub type Tokens<'a> = Tokenizer<PeekAdapter<LineJoiner<PeekAdapter<Chars<'a>>>>>;

/// Builds the full pipeline over `text`: line joining, then tokenization.
pub fn tokens(text: &str) -> Tokens<'_> {
	Tokenizer::from_chars(LineJoiner::from_chars(text.chars()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn joins_lines_before_tokenizing() {
		let tokens: Vec<String> = tokens("A hyphen-\nated word, re-\r\nstored.").collect();
		assert_eq!(tokens, ["A", "hyphenated", "word", ",", "restored", "."]);
	}

	#[test]
	fn pipeline_can_be_reset() {
		let mut stream = tokens("one two");
		assert_eq!(stream.by_ref().count(), 2);
		stream.reset().unwrap();
		assert_eq!(stream.next().as_deref(), Some("one"));
	}
}
