//! Transport group entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use vowplan_core::types::{Date, DbId, Timestamp};

/// A row from the `transport_groups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportGroup {
    pub id: DbId,
    pub event_id: DbId,
    pub name: String,
    pub transport_mode: String,
    pub vehicle_type: Option<String>,
    pub vehicle_capacity: i32,
    pub vehicle_count: i32,
    pub pickup_location: Option<String>,
    pub pickup_location_details: Option<String>,
    pub pickup_date: Option<Date>,
    pub pickup_time_slot: Option<String>,
    pub dropoff_location: Option<String>,
    pub dropoff_location_details: Option<String>,
    pub status: String,
    pub special_instructions: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a transport group. New groups always start as drafts.
#[derive(Debug, Clone)]
pub struct CreateTransportGroup {
    pub name: String,
    pub transport_mode: String,
    pub vehicle_type: Option<String>,
    pub vehicle_capacity: i32,
    pub vehicle_count: i32,
    pub pickup_location: Option<String>,
    pub pickup_location_details: Option<String>,
    pub pickup_date: Option<Date>,
    pub pickup_time_slot: Option<String>,
    pub dropoff_location: Option<String>,
    pub dropoff_location_details: Option<String>,
    pub special_instructions: Option<String>,
}
