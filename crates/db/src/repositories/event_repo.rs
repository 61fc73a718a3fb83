//! Repository for the `events` table.
//!
//! Each wizard step that writes event columns has its own `update_*`
//! method so a step can only ever touch its own group of columns. Every
//! update bumps `updated_at` and returns `None` if the event is gone.

use sqlx::PgPool;
use vowplan_core::types::DbId;

use crate::models::event::{
    CreateEvent, Event, UpdateEventAccommodation, UpdateEventBasicInfo, UpdateEventCommunication,
    UpdateEventDesign, UpdateEventRsvp, UpdateEventTransport, UpdateEventWhatsapp,
};

/// Column list for `events` queries.
const COLUMNS: &str = "id, title, couple_names, bride_name, groom_name, start_date, end_date, \
    location, description, \
    allow_plus_ones, allow_children_details, rsvp_deadline, \
    accommodation_mode, accommodation_instructions, accommodation_special_deals, \
    transport_mode, transport_instructions, transportation_provided, \
    transport_provider_name, transport_provider_contact, transport_provider_email, \
    transport_provider_website, send_travel_updates, notify_guests, \
    provides_airport_pickup, provides_venue_transfers, transport_pickup_note, \
    transport_return_note, transport_special_deals, default_arrival_location, \
    default_departure_location, offer_travel_assistance, flight_mode, \
    flight_special_deals, flight_instructions, recommended_airlines, \
    airline_discount_codes, departure_buffer_time, arrival_buffer_time, \
    email_provider, send_rsvp_reminders, send_rsvp_confirmations, \
    whatsapp_business_number, whatsapp_enabled, \
    primary_color, secondary_color, font_family, design_template, custom_css, \
    created_at, updated_at";

/// Provides CRUD operations for wedding events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events \
                (title, couple_names, bride_name, groom_name, start_date, end_date, \
                 location, description) \
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''), $5, $6, \
                 COALESCE($7, ''), $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(input.title.trim())
            .bind(&input.couple_names)
            .bind(&input.bride_name)
            .bind(&input.groom_name)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.location)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an event by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether an event with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM events WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// List events, most recently created first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete an event and, through cascades, its progress and children.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Wizard step updates
    // -----------------------------------------------------------------------

    pub async fn update_basic_info(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEventBasicInfo,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                title = COALESCE($2, title), \
                couple_names = COALESCE($3, couple_names), \
                bride_name = COALESCE($4, bride_name), \
                groom_name = COALESCE($5, groom_name), \
                start_date = COALESCE($6, start_date), \
                end_date = COALESCE($7, end_date), \
                location = COALESCE($8, location), \
                description = $9, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.couple_names)
            .bind(&input.bride_name)
            .bind(&input.groom_name)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.location)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn update_rsvp(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEventRsvp,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                allow_plus_ones = $2, \
                allow_children_details = $3, \
                rsvp_deadline = $4, \
                accommodation_mode = $5, \
                transport_mode = $6, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(input.allow_plus_ones)
            .bind(input.allow_children_details)
            .bind(input.rsvp_deadline)
            .bind(&input.accommodation_mode)
            .bind(&input.transport_mode)
            .fetch_optional(pool)
            .await
    }

    pub async fn update_accommodation(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEventAccommodation,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                accommodation_mode = COALESCE($2, accommodation_mode), \
                accommodation_special_deals = $3, \
                accommodation_instructions = $4, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.accommodation_mode)
            .bind(&input.accommodation_special_deals)
            .bind(&input.accommodation_instructions)
            .fetch_optional(pool)
            .await
    }

    pub async fn update_transport(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEventTransport,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                transport_mode = $2, \
                transport_instructions = $3, \
                transportation_provided = $4, \
                transport_provider_name = $5, \
                transport_provider_contact = $6, \
                transport_provider_email = $7, \
                transport_provider_website = $8, \
                send_travel_updates = $9, \
                notify_guests = $10, \
                provides_airport_pickup = $11, \
                provides_venue_transfers = $12, \
                transport_pickup_note = $13, \
                transport_return_note = $14, \
                transport_special_deals = $15, \
                default_arrival_location = $16, \
                default_departure_location = $17, \
                offer_travel_assistance = $18, \
                flight_mode = $19, \
                flight_special_deals = $20, \
                flight_instructions = $21, \
                recommended_airlines = $22, \
                airline_discount_codes = $23, \
                departure_buffer_time = $24, \
                arrival_buffer_time = $25, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.transport_mode)
            .bind(&input.transport_instructions)
            .bind(input.transportation_provided)
            .bind(&input.transport_provider_name)
            .bind(&input.transport_provider_contact)
            .bind(&input.transport_provider_email)
            .bind(&input.transport_provider_website)
            .bind(input.send_travel_updates)
            .bind(input.notify_guests)
            .bind(input.provides_airport_pickup)
            .bind(input.provides_venue_transfers)
            .bind(&input.transport_pickup_note)
            .bind(&input.transport_return_note)
            .bind(&input.transport_special_deals)
            .bind(&input.default_arrival_location)
            .bind(&input.default_departure_location)
            .bind(input.offer_travel_assistance)
            .bind(&input.flight_mode)
            .bind(&input.flight_special_deals)
            .bind(&input.flight_instructions)
            .bind(&input.recommended_airlines)
            .bind(&input.airline_discount_codes)
            .bind(&input.departure_buffer_time)
            .bind(&input.arrival_buffer_time)
            .fetch_optional(pool)
            .await
    }

    pub async fn update_communication(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEventCommunication,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                email_provider = $2, \
                send_rsvp_reminders = COALESCE($3, send_rsvp_reminders), \
                send_rsvp_confirmations = COALESCE($4, send_rsvp_confirmations), \
                send_travel_updates = COALESCE($5, send_travel_updates), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.email_provider)
            .bind(input.send_rsvp_reminders)
            .bind(input.send_rsvp_confirmations)
            .bind(input.send_travel_updates)
            .fetch_optional(pool)
            .await
    }

    pub async fn update_whatsapp(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEventWhatsapp,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                whatsapp_business_number = $2, \
                whatsapp_enabled = COALESCE($3, whatsapp_enabled), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.whatsapp_business_number)
            .bind(input.whatsapp_enabled)
            .fetch_optional(pool)
            .await
    }

    pub async fn update_design(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEventDesign,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                primary_color = $2, \
                secondary_color = $3, \
                font_family = $4, \
                design_template = $5, \
                custom_css = $6, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.primary_color)
            .bind(&input.secondary_color)
            .bind(&input.font_family)
            .bind(&input.design_template)
            .bind(&input.custom_css)
            .fetch_optional(pool)
            .await
    }
}
