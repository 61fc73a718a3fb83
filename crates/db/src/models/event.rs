//! Wedding event entity model and DTOs.
//!
//! Besides the create DTO, this module holds one update DTO per group of
//! event columns the setup wizard writes. Update DTOs carry values that
//! have already been resolved against the step's defaults.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vowplan_core::types::{Date, DbId, Timestamp};

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub couple_names: String,
    pub bride_name: String,
    pub groom_name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub location: String,
    pub description: Option<String>,

    pub allow_plus_ones: bool,
    pub allow_children_details: bool,
    pub rsvp_deadline: Option<Date>,

    pub accommodation_mode: String,
    pub accommodation_instructions: Option<String>,
    pub accommodation_special_deals: Option<String>,

    pub transport_mode: String,
    pub transport_instructions: Option<String>,
    pub transportation_provided: bool,
    pub transport_provider_name: Option<String>,
    pub transport_provider_contact: Option<String>,
    pub transport_provider_email: Option<String>,
    pub transport_provider_website: Option<String>,
    pub send_travel_updates: bool,
    pub notify_guests: bool,
    pub provides_airport_pickup: bool,
    pub provides_venue_transfers: bool,
    pub transport_pickup_note: Option<String>,
    pub transport_return_note: Option<String>,
    pub transport_special_deals: Option<String>,
    pub default_arrival_location: Option<String>,
    pub default_departure_location: Option<String>,
    pub offer_travel_assistance: bool,
    pub flight_mode: String,
    pub flight_special_deals: Option<String>,
    pub flight_instructions: Option<String>,
    pub recommended_airlines: Option<String>,
    pub airline_discount_codes: Option<String>,
    pub departure_buffer_time: String,
    pub arrival_buffer_time: String,

    pub email_provider: Option<String>,
    pub send_rsvp_reminders: bool,
    pub send_rsvp_confirmations: bool,
    pub whatsapp_business_number: Option<String>,
    pub whatsapp_enabled: bool,

    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub font_family: Option<String>,
    pub design_template: Option<String>,
    pub custom_css: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub title: String,
    pub couple_names: Option<String>,
    pub bride_name: Option<String>,
    pub groom_name: Option<String>,
    pub start_date: Date,
    pub end_date: Date,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// `basic_info` step. `None` keeps the current value for required columns;
/// `description` is overwritten (with null when `None`).
#[derive(Debug, Clone, Default)]
pub struct UpdateEventBasicInfo {
    pub title: Option<String>,
    pub couple_names: Option<String>,
    pub bride_name: Option<String>,
    pub groom_name: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// `rsvp_config` step. All values are written as given.
#[derive(Debug, Clone)]
pub struct UpdateEventRsvp {
    pub allow_plus_ones: bool,
    pub allow_children_details: bool,
    pub rsvp_deadline: Option<Date>,
    pub accommodation_mode: String,
    pub transport_mode: String,
}

/// `hotels` step. `accommodation_mode: None` keeps the current mode.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventAccommodation {
    pub accommodation_mode: Option<String>,
    pub accommodation_special_deals: Option<String>,
    pub accommodation_instructions: Option<String>,
}

/// `transport` step. All values are written as given.
#[derive(Debug, Clone)]
pub struct UpdateEventTransport {
    pub transport_mode: String,
    pub transport_instructions: Option<String>,
    pub transportation_provided: bool,
    pub transport_provider_name: Option<String>,
    pub transport_provider_contact: Option<String>,
    pub transport_provider_email: Option<String>,
    pub transport_provider_website: Option<String>,
    pub send_travel_updates: bool,
    pub notify_guests: bool,
    pub provides_airport_pickup: bool,
    pub provides_venue_transfers: bool,
    pub transport_pickup_note: Option<String>,
    pub transport_return_note: Option<String>,
    pub transport_special_deals: Option<String>,
    pub default_arrival_location: Option<String>,
    pub default_departure_location: Option<String>,
    pub offer_travel_assistance: bool,
    pub flight_mode: String,
    pub flight_special_deals: Option<String>,
    pub flight_instructions: Option<String>,
    pub recommended_airlines: Option<String>,
    pub airline_discount_codes: Option<String>,
    pub departure_buffer_time: String,
    pub arrival_buffer_time: String,
}

/// `communication` step. Boolean `None`s keep the current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventCommunication {
    pub email_provider: Option<String>,
    pub send_rsvp_reminders: Option<bool>,
    pub send_rsvp_confirmations: Option<bool>,
    pub send_travel_updates: Option<bool>,
}

/// `whatsapp` side-channel step. `whatsapp_enabled: None` keeps the flag.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventWhatsapp {
    pub whatsapp_business_number: Option<String>,
    pub whatsapp_enabled: Option<bool>,
}

/// `design` step. All values are written as given.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventDesign {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub font_family: Option<String>,
    pub design_template: Option<String>,
    pub custom_css: Option<String>,
}
