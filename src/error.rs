//! Errors returned by generated ids at runtime.

use thiserror::Error;

/// An error that can occur when parsing a string into an entity id.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("`{input}` is not a valid {entity} id: {source}")]
pub struct ParseIdError
{
	/// Name of the entity whose id was being parsed.
	pub entity: &'static str,

	/// The rejected input.
	pub input: String,

	/// Why the input was rejected.
	pub source: uuid::Error,
}

impl ParseIdError
{
	pub(crate) fn new(entity: &'static str, input: &str, source: uuid::Error) -> Self
	{
		Self { entity, input: input.to_owned(), source }
	}
}
