//! Arguments of the `#[entity_id]` attribute.

use syn::parse::{Parse, ParseStream};
use syn::{Ident, Lit, LitBool, Token};

use crate::error::Error;

/// The only named argument the attribute accepts.
const SQLX: &str = "sqlx";

/// Parsed `#[entity_id(...)]` arguments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config
{
	/// Whether to generate the `sqlx` adapter.
	pub sqlx: bool,
}

impl Parse for Config
{
	fn parse(input: ParseStream<'_>) -> syn::Result<Self>
	{
		if input.is_empty() {
			return Ok(Self::default());
		}

		let sqlx = if input.peek(LitBool) {
			input.parse::<LitBool>()?.value
		} else if input.peek(Ident) {
			let name = input.parse::<Ident>()?;

			if name != SQLX {
				return Err(Error::config(name.span(), format!("unknown argument `{name}`")).into());
			}

			if !input.peek(Token![=]) {
				return Err(Error::config(name.span(), format!("`{name}` requires a value")).into());
			}

			input.parse::<Token![=]>()?;
			parse_bool(input)?
		} else {
			parse_bool(input)?
		};

		if !input.is_empty() {
			return Err(Error::config(input.span(), "expected a single argument").into());
		}

		Ok(Self { sqlx })
	}
}

fn parse_bool(input: ParseStream<'_>) -> syn::Result<bool>
{
	if input.is_empty() {
		return Err(Error::config(input.span(), "missing value").into());
	}

	if !input.peek(Lit) {
		return Err(Error::config(input.span(), "value must be a boolean literal").into());
	}

	match input.parse::<Lit>()? {
		Lit::Bool(LitBool { value, .. }) => Ok(value),
		other => Err(Error::config(other.span(), "value must be `true` or `false`").into()),
	}
}
