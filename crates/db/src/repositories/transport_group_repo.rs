//! Repository for the `transport_groups` table.

use sqlx::{PgPool, Postgres, Transaction};
use vowplan_core::setup_payload::TRANSPORT_GROUP_DRAFT;
use vowplan_core::types::DbId;

use crate::models::transport_group::{CreateTransportGroup, TransportGroup};

/// Column list for `transport_groups` queries.
const COLUMNS: &str = "id, event_id, name, transport_mode, vehicle_type, vehicle_capacity, \
    vehicle_count, pickup_location, pickup_location_details, pickup_date, pickup_time_slot, \
    dropoff_location, dropoff_location_details, status, special_instructions, \
    created_at, updated_at";

/// Provides read and replace-all operations for an event's transport groups.
pub struct TransportGroupRepo;

impl TransportGroupRepo {
    pub async fn list_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<TransportGroup>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM transport_groups \
             WHERE event_id = $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, TransportGroup>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Replace all transport groups of an event in one transaction.
    /// Every inserted group starts in `draft` status.
    pub async fn replace_for_event(
        pool: &PgPool,
        event_id: DbId,
        groups: &[CreateTransportGroup],
    ) -> Result<Vec<TransportGroup>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM transport_groups WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await?;

        let mut inserted = Vec::with_capacity(groups.len());
        for input in groups {
            inserted.push(Self::insert_inner(&mut tx, event_id, input).await?);
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn insert_inner(
        tx: &mut Transaction<'_, Postgres>,
        event_id: DbId,
        input: &CreateTransportGroup,
    ) -> Result<TransportGroup, sqlx::Error> {
        let query = format!(
            "INSERT INTO transport_groups \
                (event_id, name, transport_mode, vehicle_type, vehicle_capacity, vehicle_count, \
                 pickup_location, pickup_location_details, pickup_date, pickup_time_slot, \
                 dropoff_location, dropoff_location_details, status, special_instructions) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TransportGroup>(&query)
            .bind(event_id)
            .bind(&input.name)
            .bind(&input.transport_mode)
            .bind(&input.vehicle_type)
            .bind(input.vehicle_capacity)
            .bind(input.vehicle_count)
            .bind(&input.pickup_location)
            .bind(&input.pickup_location_details)
            .bind(input.pickup_date)
            .bind(&input.pickup_time_slot)
            .bind(&input.dropoff_location)
            .bind(&input.dropoff_location_details)
            .bind(TRANSPORT_GROUP_DRAFT)
            .bind(&input.special_instructions)
            .fetch_one(&mut **tx)
            .await
    }
}
