//! Repository for the `ceremonies` table.

use sqlx::{PgPool, Postgres, Transaction};
use vowplan_core::types::DbId;

use crate::models::ceremony::{Ceremony, CreateCeremony};

/// Column list for `ceremonies` queries.
const COLUMNS: &str = "id, event_id, name, location, date, start_time, end_time, \
    description, attire_code, ceremony_type, created_at, updated_at";

/// Provides read and replace-all operations for an event's ceremonies.
pub struct CeremonyRepo;

impl CeremonyRepo {
    /// List an event's ceremonies in insertion order.
    pub async fn list_by_event(pool: &PgPool, event_id: DbId) -> Result<Vec<Ceremony>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ceremonies \
             WHERE event_id = $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, Ceremony>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Replace all ceremonies of an event.
    ///
    /// Deletes the existing rows and inserts the new set in one
    /// transaction, so readers never observe an empty list mid-save.
    pub async fn replace_for_event(
        pool: &PgPool,
        event_id: DbId,
        ceremonies: &[CreateCeremony],
    ) -> Result<Vec<Ceremony>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM ceremonies WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await?;

        let mut inserted = Vec::with_capacity(ceremonies.len());
        for input in ceremonies {
            inserted.push(Self::insert_inner(&mut tx, event_id, input).await?);
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn insert_inner(
        tx: &mut Transaction<'_, Postgres>,
        event_id: DbId,
        input: &CreateCeremony,
    ) -> Result<Ceremony, sqlx::Error> {
        let query = format!(
            "INSERT INTO ceremonies \
                (event_id, name, location, date, start_time, end_time, \
                 description, attire_code, ceremony_type) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ceremony>(&query)
            .bind(event_id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(input.date)
            .bind(&input.start_time)
            .bind(&input.end_time)
            .bind(&input.description)
            .bind(&input.attire_code)
            .bind(&input.ceremony_type)
            .fetch_one(&mut **tx)
            .await
    }
}
