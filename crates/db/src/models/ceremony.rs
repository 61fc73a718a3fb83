//! Ceremony (venue) entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use vowplan_core::types::{Date, DbId, Timestamp};

/// A row from the `ceremonies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ceremony {
    pub id: DbId,
    pub event_id: DbId,
    pub name: String,
    pub location: String,
    pub date: Option<Date>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
    pub attire_code: Option<String>,
    pub ceremony_type: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a ceremony. The owning event is passed separately.
#[derive(Debug, Clone)]
pub struct CreateCeremony {
    pub name: String,
    pub location: String,
    pub date: Option<Date>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
    pub attire_code: Option<String>,
    pub ceremony_type: Option<String>,
}
