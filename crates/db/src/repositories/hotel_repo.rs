//! Repository for the `hotels` and `accommodations` (room type) tables.

use std::collections::HashMap;

use sqlx::{PgPool, Postgres, Transaction};
use vowplan_core::types::DbId;

use crate::models::hotel::{
    CreateHotel, CreateHotelWithRoomTypes, CreateRoomType, Hotel, HotelWithRoomTypes, RoomType,
};

/// Column list for the `hotels` table.
const COLUMNS: &str = "id, event_id, name, address, phone, website, description, \
    amenities, is_default, created_at, updated_at";

/// Column list for the `accommodations` table.
const ROOM_COLUMNS: &str = "id, event_id, hotel_id, name, room_type, bed_type, \
    max_occupancy, total_rooms, price_per_night, special_features, created_at, updated_at";

/// Provides read and replace-all operations for an event's hotels and
/// their room types.
pub struct HotelRepo;

impl HotelRepo {
    /// List an event's hotels, each with its room types.
    pub async fn list_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<HotelWithRoomTypes>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotels WHERE event_id = $1 ORDER BY id");
        let hotels = sqlx::query_as::<_, Hotel>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await?;

        let room_query = format!(
            "SELECT {ROOM_COLUMNS} FROM accommodations WHERE event_id = $1 ORDER BY id"
        );
        let rooms = sqlx::query_as::<_, RoomType>(&room_query)
            .bind(event_id)
            .fetch_all(pool)
            .await?;

        let mut by_hotel: HashMap<DbId, Vec<RoomType>> = HashMap::new();
        for room in rooms {
            by_hotel.entry(room.hotel_id).or_default().push(room);
        }

        Ok(hotels
            .into_iter()
            .map(|hotel| {
                let room_types = by_hotel.remove(&hotel.id).unwrap_or_default();
                HotelWithRoomTypes { hotel, room_types }
            })
            .collect())
    }

    /// Replace all hotels and room types of an event.
    ///
    /// Room types are inserted against the id of the hotel row created in
    /// the same call. Everything runs in one transaction.
    pub async fn replace_for_event(
        pool: &PgPool,
        event_id: DbId,
        hotels: &[CreateHotelWithRoomTypes],
    ) -> Result<Vec<HotelWithRoomTypes>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM accommodations WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM hotels WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await?;

        let mut inserted = Vec::with_capacity(hotels.len());
        for input in hotels {
            let hotel = Self::insert_hotel_inner(&mut tx, event_id, &input.hotel).await?;
            let mut room_types = Vec::with_capacity(input.room_types.len());
            for room in &input.room_types {
                room_types.push(Self::insert_room_inner(&mut tx, event_id, hotel.id, room).await?);
            }
            inserted.push(HotelWithRoomTypes { hotel, room_types });
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn insert_hotel_inner(
        tx: &mut Transaction<'_, Postgres>,
        event_id: DbId,
        input: &CreateHotel,
    ) -> Result<Hotel, sqlx::Error> {
        let query = format!(
            "INSERT INTO hotels \
                (event_id, name, address, phone, website, description, amenities, is_default) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hotel>(&query)
            .bind(event_id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.description)
            .bind(&input.amenities)
            .bind(input.is_default)
            .fetch_one(&mut **tx)
            .await
    }

    async fn insert_room_inner(
        tx: &mut Transaction<'_, Postgres>,
        event_id: DbId,
        hotel_id: DbId,
        input: &CreateRoomType,
    ) -> Result<RoomType, sqlx::Error> {
        let query = format!(
            "INSERT INTO accommodations \
                (event_id, hotel_id, name, room_type, bed_type, max_occupancy, \
                 total_rooms, price_per_night, special_features) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {ROOM_COLUMNS}"
        );
        sqlx::query_as::<_, RoomType>(&query)
            .bind(event_id)
            .bind(hotel_id)
            .bind(&input.name)
            .bind(&input.room_type)
            .bind(&input.bed_type)
            .bind(input.max_occupancy)
            .bind(input.total_rooms)
            .bind(input.price_per_night)
            .bind(&input.special_features)
            .fetch_one(&mut **tx)
            .await
    }
}
