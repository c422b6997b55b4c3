use thiserror::Error;

/// Errors returned by the chain and its text pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
	/// None of the terminator tokens is a node of the chain.
	#[error("none of the terminator tokens {0:?} occur in the chain")]
	NoStartNode(Vec<String>),

	/// The weight scan ran past the sum observed before sampling.
	#[error("sample '{sample}' exceeds weight sum of '{total}', node was modified while sampling")]
	InvalidSample { sample: i64, total: i64 },

	/// The weights of a node do not describe a probability mass.
	#[error("weight sum '{total}' of node '{value}' is negative")]
	NegativeWeightSum { value: String, total: i64 },

	/// The weights of a node sum past the range of `i64`.
	#[error("weight sum of node '{value}' overflows")]
	WeightOverflow { value: String },

	/// `reset` was called on a cursor over a forward-only source.
	#[error("the underlying source cannot be rewound")]
	RewindUnsupported,

	/// A generation input was given an empty terminator set.
	#[error("at least one terminator token is required")]
	NoTerminators,
}

pub type Result<T> = std::result::Result<T, ChainError>;
