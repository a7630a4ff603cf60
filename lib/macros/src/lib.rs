//! Procedural macros for the `entity-id` crate.
//!
//! Use these through the re-exports in `entity-id`; the generated code refers to items in
//! `::entity_id`.

use proc_macro::TokenStream;
use proc_macro_error::proc_macro_error;
use syn::parse_macro_input;

mod config;
mod error;
mod expand;
mod literal;
mod shape;


/// Turns a module into the home of a strongly-typed entity id.
///
/// See the `entity-id` crate for documentation.
#[proc_macro_error]
#[proc_macro_attribute]
pub fn entity_id(args: TokenStream, item: TokenStream) -> TokenStream
{
	let config = parse_macro_input!(args as config::Config);
	let shape = parse_macro_input!(item as shape::Shape);

	expand::expand(&config, &shape).into()
}

/// Constructs an id from a UUID literal that is validated at compile time.
///
/// See the `entity-id` crate for documentation.
#[proc_macro_error]
#[proc_macro]
pub fn id(input: TokenStream) -> TokenStream
{
	let input = parse_macro_input!(input as literal::IdLiteral);

	match literal::expand(&input) {
		Ok(tokens) => tokens.into(),
		Err(error) => syn::Error::from(error).into_compile_error().into(),
	}
}
