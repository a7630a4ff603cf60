//! [`Effect`] implementation for the [`tokio`] runtime.

use tokio::task::{self, JoinHandle};

use super::Effect;

/// Runs the computation on tokio's blocking thread pool.
///
/// The draw starts as soon as the effect is created, and the returned [`JoinHandle`] yields
/// the result (or a [`JoinError`] if the computation panicked).
///
/// # Panics
///
/// Creating the effect panics if called outside of a tokio runtime.
///
/// [`JoinError`]: tokio::task::JoinError
#[derive(Debug, Clone, Copy)]
pub enum Blocking {}

impl Effect for Blocking
{
	type Output<T: Send + 'static> = JoinHandle<T>;

	fn suspend<T: Send + 'static>(thunk: fn() -> T) -> Self::Output<T>
	{
		tracing::trace!("spawning id computation on the blocking pool");
		task::spawn_blocking(thunk)
	}
}
