//! `sqlx` support for generated ids.

use entity_id::{entity_id, id, Uuid};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Users, stored with the adapter.
#[entity_id(sqlx = true)]
pub mod user {}

/// Posts, stored with the adapter.
#[entity_id(true)]
pub mod post {}

async fn database() -> sqlx::Result<SqlitePool>
{
	// every in-memory connection is its own database
	let pool = SqlitePoolOptions::new()
		.max_connections(1)
		.connect("sqlite::memory:")
		.await?;

	sqlx::query("CREATE TABLE users (id BLOB NOT NULL PRIMARY KEY, name TEXT NOT NULL)")
		.execute(&pool)
		.await?;

	Ok(pool)
}

#[tokio::test]
async fn round_trip() -> sqlx::Result<()>
{
	let pool = database().await?;
	let id = user::Unsafe::random();

	sqlx::query("INSERT INTO users (id, name) VALUES (?, ?)")
		.bind(id)
		.bind("alice")
		.execute(&pool)
		.await?;

	let stored = sqlx::query_scalar::<_, user::Id>("SELECT id FROM users WHERE name = ?")
		.bind("alice")
		.fetch_one(&pool)
		.await?;

	assert_eq!(stored, id, "id changed on its way through the database");

	Ok(())
}

#[tokio::test]
async fn same_representation_as_uuid() -> sqlx::Result<()>
{
	let pool = database().await?;
	let id = id!(post::Id, "67e55044-10b1-426f-9247-bb680e5fe0c8");

	sqlx::query("INSERT INTO users (id, name) VALUES (?, ?)")
		.bind(id)
		.bind("bob")
		.execute(&pool)
		.await?;

	let uuid = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE name = ?")
		.bind("bob")
		.fetch_one(&pool)
		.await?;

	let by_uuid = sqlx::query_scalar::<_, String>("SELECT name FROM users WHERE id = ?")
		.bind(id.into_uuid())
		.fetch_one(&pool)
		.await?;

	assert_eq!(uuid, id.into_uuid(), "id was stored differently than its uuid");
	assert_eq!(by_uuid, "bob");

	Ok(())
}
