//! Generating ids inside tokio.

use std::collections::HashSet;

use entity_id::{entity_id, Blocking, Deferred};

/// Users.
#[entity_id]
pub mod user {}

#[tokio::test]
async fn deferred_works_in_tokio()
{
	let first = user::Id::random::<Deferred>().await;
	let second = user::Id::random::<Deferred>().await;

	assert_ne!(first, second, "random ids collided");
}

#[tokio::test]
async fn blocking_pool() -> Result<(), tokio::task::JoinError>
{
	let handles = (0..16)
		.map(|_| user::Id::random::<Blocking>())
		.collect::<Vec<_>>();

	let mut ids = HashSet::new();

	for handle in handles {
		ids.insert(handle.await?);
	}

	assert_eq!(ids.len(), 16, "random ids collided");

	Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn futures_are_send()
{
	let id = tokio::spawn(user::Id::random::<Deferred>()).await.unwrap();

	assert_eq!(id.as_uuid().get_version_num(), 4, "expected a v4 uuid");
}
