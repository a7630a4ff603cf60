use proc_macro2::Span;
use thiserror::Error;

/// Errors that abort macro expansion.
///
/// Every variant remembers the span it should be reported at; the message is
/// what ends up in the compiler's diagnostic.
#[derive(Debug, Error)]
pub enum Error
{
	/// The marker's arguments could not be parsed.
	#[error(
		"invalid `#[entity_id]` arguments: {reason}; expected `#[entity_id]`, \
		 `#[entity_id(<bool>)]` or `#[entity_id(sqlx = <bool>)]`"
	)]
	Config
	{
		span: Span,
		reason: String,
	},

	/// The marker was applied to something other than a named module.
	#[error("`#[entity_id]` can only be applied to a named module with an inline body{}", detail(.reason))]
	Shape
	{
		span: Span,
		reason: Option<String>,
	},

	/// A literal passed to `id!` is not a valid UUID.
	#[error("invalid id literal `{text}`: {source}; expected a UUID such as `67e55044-10b1-426f-9247-bb680e5fe0c8`")]
	LiteralFormat
	{
		span: Span,
		text: String,
		source: uuid::Error,
	},
}

impl Error
{
	pub fn config(span: Span, reason: impl Into<String>) -> Self
	{
		Self::Config { span, reason: reason.into() }
	}

	pub fn shape(span: Span) -> Self
	{
		Self::Shape { span, reason: None }
	}

	pub fn shape_with(span: Span, reason: impl Into<String>) -> Self
	{
		Self::Shape { span, reason: Some(reason.into()) }
	}

	pub const fn span(&self) -> Span
	{
		match *self {
			Self::Config { span, .. } | Self::Shape { span, .. } | Self::LiteralFormat { span, .. } => {
				span
			}
		}
	}
}

fn detail(reason: &Option<String>) -> String
{
	reason
		.as_deref()
		.map(|reason| format!(" ({reason})"))
		.unwrap_or_default()
}

impl From<Error> for syn::Error
{
	fn from(error: Error) -> Self
	{
		syn::Error::new(error.span(), error)
	}
}
