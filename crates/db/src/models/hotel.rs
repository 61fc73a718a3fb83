//! Hotel and room type (`accommodations`) models and DTOs.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use vowplan_core::types::{DbId, Timestamp};

/// A row from the `hotels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: DbId,
    pub event_id: DbId,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub amenities: Option<String>,
    pub is_default: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `accommodations` table: one room type at one hotel.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub id: DbId,
    pub event_id: DbId,
    pub hotel_id: DbId,
    pub name: String,
    pub room_type: String,
    pub bed_type: Option<String>,
    pub max_occupancy: i32,
    pub total_rooms: i32,
    pub price_per_night: Option<Decimal>,
    pub special_features: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A hotel together with its room types.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRoomTypes {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub room_types: Vec<RoomType>,
}

/// DTO for inserting a hotel.
#[derive(Debug, Clone)]
pub struct CreateHotel {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub amenities: Option<String>,
    pub is_default: bool,
}

/// DTO for inserting a room type. The hotel id is assigned on insert.
#[derive(Debug, Clone)]
pub struct CreateRoomType {
    pub name: String,
    pub room_type: String,
    pub bed_type: Option<String>,
    pub max_occupancy: i32,
    pub total_rooms: i32,
    pub price_per_night: Option<Decimal>,
    pub special_features: Option<String>,
}

/// A hotel to insert and the room types that belong to it.
#[derive(Debug, Clone)]
pub struct CreateHotelWithRoomTypes {
    pub hotel: CreateHotel,
    pub room_types: Vec<CreateRoomType>,
}
