//! Compile-time validation of id literals.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned as _;
use syn::{Expr, ExprLit, Lit, LitStr, Token, Type};

use crate::error::Error;

/// `id!(Type, "literal")`
#[derive(Debug)]
pub struct IdLiteral
{
	/// The generated `Id` type to construct.
	pub ty: Type,

	/// The UUID text.
	pub text: LitStr,
}

impl Parse for IdLiteral
{
	fn parse(input: ParseStream<'_>) -> syn::Result<Self>
	{
		let ty = input.parse::<Type>()?;
		input.parse::<Token![,]>()?;

		let text = match input.parse::<Expr>()? {
			Expr::Lit(ExprLit { lit: Lit::Str(text), .. }) => text,
			expr => {
				return Err(syn::Error::new(
					expr.span(),
					"`id!` only accepts string literals; use `str::parse` to parse ids at runtime",
				));
			}
		};

		// trailing comma
		if input.peek(Token![,]) {
			input.parse::<Token![,]>()?;
		}

		if !input.is_empty() {
			return Err(input.error("unexpected tokens after the id literal"));
		}

		Ok(Self { ty, text })
	}
}

/// Parses the literal with the same grammar [`uuid::Uuid`]'s `FromStr` uses and emits a
/// constant expression built from the parsed bytes.
///
/// The expression is not wrapped in a `const` item, so `ty` may be `Self`.
pub fn expand(IdLiteral { ty, text }: &IdLiteral) -> Result<TokenStream, Error>
{
	let uuid = uuid::Uuid::parse_str(&text.value()).map_err(|source| Error::LiteralFormat {
		span: text.span(),
		text: text.value(),
		source,
	})?;

	let bytes = uuid.as_bytes();

	Ok(quote! {
		<#ty>::from_uuid(::entity_id::__private::Uuid::from_bytes([#(#bytes),*]))
	})
}
