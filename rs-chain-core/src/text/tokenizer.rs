use unicode_general_category::{GeneralCategory, get_general_category};

use super::lookahead::{Lookahead, PeekAdapter};
use crate::error::Result;

/// How the tokenizer treats a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharCategory {
	/// The character is a token on its own (punctuation, math symbols).
	Single,
	/// The character separates tokens and is dropped (spaces, controls, separators).
	Delimiter,
	/// The character is part of a longer token.
	Other,
}

impl CharCategory {
	/// Classifies `c` by its Unicode general category.
	pub fn of(c: char) -> Self {
		match get_general_category(c) {
			GeneralCategory::OpenPunctuation
			| GeneralCategory::ClosePunctuation
			| GeneralCategory::InitialPunctuation
			| GeneralCategory::FinalPunctuation
			| GeneralCategory::OtherPunctuation
			| GeneralCategory::MathSymbol => Self::Single,
			GeneralCategory::Control
			| GeneralCategory::SpaceSeparator
			| GeneralCategory::LineSeparator
			| GeneralCategory::ParagraphSeparator => Self::Delimiter,
			_ => Self::Other,
		}
	}
}

/// Splits a character stream into word and punctuation tokens.
///
/// Token boundaries are decided with one character of lookahead:
/// - delimiters are never part of a token
/// - a `Single` character is always a token of its own
/// - `Other` characters accumulate until the next character is a
///   delimiter or a `Single` character
///
/// # Example
/// `"Test-Case nr. 24a (12*2)"` yields
/// `Test-Case`, `nr`, `.`, `24a`, `(`, `12`, `*`, `2`, `)`.
#[derive(Clone)]
pub struct Tokenizer<C> {
	cursor: C,
}

impl<C: Lookahead<Item = char>> Tokenizer<C> {
	pub fn new(cursor: C) -> Self {
		Self { cursor }
	}

	/// Rewinds the wrapped cursor, restarting tokenization.
	///
	/// # Errors
	/// Fails if the character source cannot be rewound.
	pub fn reset(&mut self) -> Result<()> {
		self.cursor.reset()
	}
}

impl<I: Iterator<Item = char> + Clone> Tokenizer<PeekAdapter<I>> {
	/// Tokenizes a plain character iterator.
	pub fn from_chars(chars: I) -> Self {
		Self::new(PeekAdapter::rewindable(chars))
	}
}

impl<C: Lookahead<Item = char>> Iterator for Tokenizer<C> {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		let mut buffer = String::new();
		while self.cursor.advance() {
			let Some(&c) = self.cursor.current() else { break };
			let category = CharCategory::of(c);
			if category == CharCategory::Delimiter {
				continue;
			}

			buffer.push(c);
			if category == CharCategory::Single {
				break;
			}
			if let Some(&next) = self.cursor.peek() {
				if CharCategory::of(next) != CharCategory::Other {
					break;
				}
			}
		}

		(!buffer.is_empty()).then_some(buffer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::text::lookahead::SliceCursor;

	fn tokenize(text: &str) -> Vec<String> {
		Tokenizer::from_chars(text.chars()).collect()
	}

	#[test]
	fn splits_words_and_punctuation() {
		assert_eq!(
			tokenize("Hello, I _would_ like to know your \"name\"."),
			["Hello", ",", "I", "_would_", "like", "to", "know", "your", "\"", "name", "\"", "."]
		);
	}

	#[test]
	fn keeps_dashes_and_digits_inside_words() {
		assert_eq!(
			tokenize("Test-Case nr. 24a (12*2)"),
			["Test-Case", "nr", ".", "24a", "(", "12", "*", "2", ")"]
		);
	}

	#[test]
	fn only_delimiters_yield_nothing() {
		assert!(tokenize(" \t\r\n\u{2028}\u{2029} ").is_empty());
		assert!(tokenize("").is_empty());
	}

	#[test]
	fn quote_punctuation_is_single() {
		assert_eq!(tokenize("«oui»"), ["«", "oui", "»"]);
		assert_eq!(tokenize("a+b=c"), ["a", "+", "b", "=", "c"]);
	}

	#[test]
	fn categories() {
		assert_eq!(CharCategory::of('.'), CharCategory::Single);
		assert_eq!(CharCategory::of('('), CharCategory::Single);
		assert_eq!(CharCategory::of('<'), CharCategory::Single);
		assert_eq!(CharCategory::of(' '), CharCategory::Delimiter);
		assert_eq!(CharCategory::of('\n'), CharCategory::Delimiter);
		assert_eq!(CharCategory::of('\u{2029}'), CharCategory::Delimiter);
		assert_eq!(CharCategory::of('_'), CharCategory::Other);
		assert_eq!(CharCategory::of('-'), CharCategory::Other);
		assert_eq!(CharCategory::of('$'), CharCategory::Other);
		assert_eq!(CharCategory::of('é'), CharCategory::Other);
	}

	#[test]
	fn reset_restarts_from_the_first_token() {
		let mut tokens = Tokenizer::from_chars("Test-Case nr. 24a (12*2)".chars());
		tokens.next();
		assert_eq!(tokens.next().as_deref(), Some("nr"));

		tokens.reset().unwrap();
		assert_eq!(tokens.next().as_deref(), Some("Test-Case"));
	}

	#[test]
	fn reset_fails_on_forward_only_source() {
		let mut tokens = Tokenizer::new(PeekAdapter::new("a b".chars()));
		assert_eq!(tokens.next().as_deref(), Some("a"));
		assert!(tokens.reset().is_err());
	}

	#[test]
	fn native_cursor_source() {
		let chars: Vec<char> = "to be.".chars().collect();
		let tokens: Vec<String> = Tokenizer::new(SliceCursor::new(&chars)).collect();
		assert_eq!(tokens, ["to", "be", "."]);
	}
}
