//! Database schema initialization.

use sqlx::SqlitePool;

/// Create the tables and indexes if they do not exist yet.
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Preference records
	//********************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS records (
		record_key text NOT NULL,
		field text NOT NULL,
		value text,
		PRIMARY KEY(record_key, field)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Scored membership sets
	//************************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS sorted_sets (
		set_key text NOT NULL,
		member integer NOT NULL,
		score integer NOT NULL,
		PRIMARY KEY(set_key, member)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_sorted_sets_score ON sorted_sets(set_key, score)")
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;
	Ok(())
}
