//! Deferred computations for generating ids.
//!
//! `Id::random()` does not draw a UUID by itself. Instead it hands a thunk to an [`Effect`],
//! which decides how and when the draw happens. This keeps id generation independent of any
//! particular async runtime: [`Deferred`] works with every executor, [`Boxed`] erases the
//! future's type, [`Immediate`] skips the future entirely, and callers can implement their
//! own effects.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{self, BoxFuture, FutureExt as _};

#[cfg(feature = "tokio")]
mod tokio;

#[cfg(feature = "tokio")]
pub use self::tokio::Blocking;

/// An abstraction over "a computation producing a `T`, potentially deferred".
///
/// # Example
///
/// ```
/// use entity_id::Effect;
///
/// /// Runs the computation immediately and remembers how often it did so.
/// struct Counted;
///
/// impl Effect for Counted {
///     type Output<T: Send + 'static> = (T, usize);
///
///     fn suspend<T: Send + 'static>(thunk: fn() -> T) -> Self::Output<T> {
///         (thunk(), 1)
///     }
/// }
///
/// #[entity_id::entity_id]
/// mod user {}
///
/// let (_id, draws) = user::Id::random::<Counted>();
///
/// assert_eq!(draws, 1);
/// ```
pub trait Effect
{
	/// The computation's type.
	type Output<T: Send + 'static>;

	/// Wraps `thunk` in this effect.
	///
	/// Implementations should call `thunk` at most once.
	fn suspend<T: Send + 'static>(thunk: fn() -> T) -> Self::Output<T>;
}

/// A lazy [`Future`] that does not depend on any particular runtime.
///
/// The computation runs the first time the future is polled.
#[derive(Debug, Clone, Copy)]
pub enum Deferred {}

impl Effect for Deferred
{
	type Output<T: Send + 'static> = Suspended<T>;

	fn suspend<T: Send + 'static>(thunk: fn() -> T) -> Self::Output<T>
	{
		Suspended { thunk: Some(thunk) }
	}
}

/// Runs the computation right away, on the current thread.
///
/// No executor is involved, so this is safe to use from inside async code. `Unsafe::random()`
/// is `Id::random::<Immediate>()`.
#[derive(Debug, Clone, Copy)]
pub enum Immediate {}

impl Effect for Immediate
{
	type Output<T: Send + 'static> = T;

	fn suspend<T: Send + 'static>(thunk: fn() -> T) -> Self::Output<T>
	{
		tracing::trace!("running id computation on the current thread");
		thunk()
	}
}

/// Like [`Deferred`], but the future is boxed.
///
/// Useful when the future needs to be stored next to futures of other types.
#[derive(Debug, Clone, Copy)]
pub enum Boxed {}

impl Effect for Boxed
{
	type Output<T: Send + 'static> = BoxFuture<'static, T>;

	fn suspend<T: Send + 'static>(thunk: fn() -> T) -> Self::Output<T>
	{
		future::lazy(move |_| thunk()).boxed()
	}
}

/// The [`Future`] returned by [`Deferred`].
#[must_use = "futures do nothing unless polled"]
pub struct Suspended<T>
{
	/// `None` once the future has completed.
	thunk: Option<fn() -> T>,
}

impl<T> Future for Suspended<T>
{
	type Output = T;

	fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output>
	{
		let Some(thunk) = self.thunk.take() else {
			panic!("`Suspended` polled after completion");
		};

		Poll::Ready(thunk())
	}
}

impl<T> fmt::Debug for Suspended<T>
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("Suspended")
			.field("completed", &self.thunk.is_none())
			.finish()
	}
}
