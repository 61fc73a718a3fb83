//! Typed request payloads for each wizard step.
//!
//! The front-end posts one JSON object per step in camelCase. Every field
//! is optional: an absent field, or one of the wrong JSON type, resolves to
//! `None` or to the step's default (see the accessor methods). Only values
//! that cannot be stored are a validation error, raised before any write.

use chrono::Days;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::CoreError;
use crate::setup_wizard::WizardStep;
use crate::types::Date;

/// Default accommodation / transport / flight mode.
pub const MODE_NONE: &str = "none";

/// Default transport mode for a transport group.
pub const DEFAULT_GROUP_TRANSPORT_MODE: &str = "bus";

/// Default seats per vehicle for a transport group.
pub const DEFAULT_VEHICLE_CAPACITY: i32 = 50;

/// Default number of vehicles in a transport group.
pub const DEFAULT_VEHICLE_COUNT: i32 = 1;

/// Default guests per room type.
pub const DEFAULT_MAX_OCCUPANCY: i32 = 2;

/// Default rooms per room type.
pub const DEFAULT_TOTAL_ROOMS: i32 = 1;

/// Status every transport group is created with.
pub const TRANSPORT_GROUP_DRAFT: &str = "draft";

pub const DEFAULT_DEPARTURE_BUFFER: &str = "03:00";
pub const DEFAULT_ARRIVAL_BUFFER: &str = "00:30";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Treat an empty string the same as a missing value.
pub fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

/// A zero count falls back to the default; negative counts are rejected.
fn count_or(value: Option<i32>, default: i32, field: &str) -> Result<i32, CoreError> {
    match value {
        None | Some(0) => Ok(default),
        Some(n) if n < 0 => Err(CoreError::Validation(format!(
            "{field} must not be negative, got {n}"
        ))),
        Some(n) => Ok(n),
    }
}

/// Field deserializer: a value of the wrong JSON type reads as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn require_name(name: &Option<String>, what: &str, index: usize) -> Result<(), CoreError> {
    if name.as_deref().map_or(true, |n| n.trim().is_empty()) {
        return Err(CoreError::Validation(format!(
            "{what} #{} is missing a name",
            index + 1
        )));
    }
    Ok(())
}

/// Validate a `HH:MM` buffer duration (hours unbounded, minutes 0-59).
pub fn validate_buffer_time(value: &str) -> Result<(), CoreError> {
    let invalid = || CoreError::Validation(format!("Invalid buffer time '{value}', expected HH:MM"));
    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
    if hours.is_empty()
        || minutes.len() != 2
        || !hours.bytes().all(|b| b.is_ascii_digit())
        || !minutes.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }
    let m: u32 = minutes.parse().map_err(|_| invalid())?;
    if m >= 60 {
        return Err(invalid());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// basic_info
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicInfoPayload {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub couple_names: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub bride_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub groom_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub start_date: Option<Date>,
    #[serde(deserialize_with = "lenient")]
    pub end_date: Option<Date>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
}

impl BasicInfoPayload {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(CoreError::Validation(format!(
                    "End date {end} is before start date {start}"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// venues
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VenuesPayload {
    /// `None` leaves the existing ceremonies untouched.
    #[serde(deserialize_with = "lenient")]
    pub venues: Option<Vec<VenueInput>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VenueInput {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub date: Option<Date>,
    #[serde(deserialize_with = "lenient")]
    pub start_time: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub end_time: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub attire_code: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub ceremony_type: Option<String>,
}

impl VenuesPayload {
    pub fn validate(&self) -> Result<(), CoreError> {
        for (i, venue) in self.venues.iter().flatten().enumerate() {
            require_name(&venue.name, "Venue", i)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// rsvp_config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RsvpConfigPayload {
    #[serde(deserialize_with = "lenient")]
    pub enable_plus_one: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub enable_children_details: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub rsvp_deadline_days: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub accommodation_mode: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub transport_mode: Option<String>,
}

impl RsvpConfigPayload {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(days) = self.rsvp_deadline_days {
            if days < 0 {
                return Err(CoreError::Validation(format!(
                    "rsvpDeadlineDays must not be negative, got {days}"
                )));
            }
        }
        Ok(())
    }

    pub fn allow_plus_ones(&self) -> bool {
        self.enable_plus_one.unwrap_or(true)
    }

    pub fn allow_children_details(&self) -> bool {
        self.enable_children_details.unwrap_or(true)
    }

    pub fn accommodation_mode(&self) -> String {
        non_empty(&self.accommodation_mode).unwrap_or_else(|| MODE_NONE.to_string())
    }

    pub fn transport_mode(&self) -> String {
        non_empty(&self.transport_mode).unwrap_or_else(|| MODE_NONE.to_string())
    }

    /// RSVP deadline: the event's start date minus `rsvpDeadlineDays`.
    ///
    /// `None` when no day count (or zero) was given, or the event has no
    /// start date.
    pub fn rsvp_deadline(&self, event_start: Option<Date>) -> Option<Date> {
        let days = self.rsvp_deadline_days.filter(|d| *d > 0)?;
        event_start?.checked_sub_days(Days::new(days as u64))
    }
}

// ---------------------------------------------------------------------------
// hotels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelsPayload {
    #[serde(deserialize_with = "lenient")]
    pub accommodation_mode: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub accommodation_special_deals: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub accommodation_instructions: Option<String>,
    /// `None` leaves the existing hotels and room types untouched.
    #[serde(deserialize_with = "lenient")]
    pub hotels: Option<Vec<HotelInput>>,
    #[serde(deserialize_with = "lenient")]
    pub room_types: Option<Vec<RoomTypeInput>>,
}

/// A hotel as posted by the client.
///
/// `id` is the client's own identifier, used only to match room types to
/// their hotel inside this payload. It is never stored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelInput {
    pub id: Option<serde_json::Value>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub contact_phone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub website: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub amenities: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_default: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomTypeInput {
    /// Client id of the owning hotel in the same payload.
    pub hotel_id: Option<serde_json::Value>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub bed_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub max_occupancy: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    pub total_rooms: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    pub negotiated_rate: Option<Decimal>,
    #[serde(deserialize_with = "lenient")]
    pub special_features: Option<String>,
}

impl RoomTypeInput {
    pub fn max_occupancy(&self) -> Result<i32, CoreError> {
        count_or(self.max_occupancy, DEFAULT_MAX_OCCUPANCY, "maxOccupancy")
    }

    pub fn total_rooms(&self) -> Result<i32, CoreError> {
        count_or(self.total_rooms, DEFAULT_TOTAL_ROOMS, "totalRooms")
    }
}

/// One hotel together with the room types that reference it.
#[derive(Debug, Clone)]
pub struct HotelPlan<'a> {
    pub hotel: &'a HotelInput,
    pub room_types: Vec<&'a RoomTypeInput>,
}

impl HotelsPayload {
    pub fn validate(&self) -> Result<(), CoreError> {
        for (i, hotel) in self.hotels.iter().flatten().enumerate() {
            require_name(&hotel.name, "Hotel", i)?;
        }
        for (i, room) in self.room_types.iter().flatten().enumerate() {
            require_name(&room.name, "Room type", i)?;
            room.max_occupancy()?;
            room.total_rooms()?;
            if room.negotiated_rate.is_some_and(|r| r.is_sign_negative()) {
                return Err(CoreError::Validation(format!(
                    "Room type #{} has a negative rate",
                    i + 1
                )));
            }
        }
        Ok(())
    }

    /// Pair each hotel with its room types by client id.
    ///
    /// Room types without a `hotelId`, or whose `hotelId` matches no hotel,
    /// are dropped. A hotel without an `id` gets no room types.
    pub fn hotel_plans(&self) -> Vec<HotelPlan<'_>> {
        let rooms = self.room_types.as_deref().unwrap_or_default();
        self.hotels
            .iter()
            .flatten()
            .map(|hotel| HotelPlan {
                hotel,
                room_types: match &hotel.id {
                    Some(id) => rooms
                        .iter()
                        .filter(|r| r.hotel_id.as_ref() == Some(id))
                        .collect(),
                    None => Vec::new(),
                },
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// transport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportPayload {
    #[serde(deserialize_with = "lenient")]
    pub transport_mode: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub transport_instructions: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub transportation_provided: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub transport_provider_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub transport_provider_phone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub transport_provider_contact: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub transport_provider_email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub transport_provider_website: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub send_travel_updates: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub notify_guests: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub provides_airport_pickup: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub provides_venue_transfers: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub transport_pickup_note: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub transport_return_note: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub transport_special_deals: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub default_arrival_location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub default_departure_location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub offer_travel_assistance: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub flight_mode: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub flight_special_deals: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub flight_instructions: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub recommended_airlines: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub airline_discount_codes: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub departure_buffer_time: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub arrival_buffer_time: Option<String>,
    /// `None` leaves the existing transport groups untouched.
    #[serde(deserialize_with = "lenient")]
    pub transport_groups: Option<Vec<TransportGroupInput>>,
    // `transportVendors` is accepted by the client form but not stored yet.
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportGroupInput {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub transport_mode: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub vehicle_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub vehicle_capacity: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    pub vehicle_count: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    pub pickup_location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub pickup_location_details: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub pickup_date: Option<Date>,
    #[serde(deserialize_with = "lenient")]
    pub pickup_time_slot: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub dropoff_location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub dropoff_location_details: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub special_instructions: Option<String>,
}

impl TransportGroupInput {
    pub fn transport_mode(&self) -> String {
        non_empty(&self.transport_mode).unwrap_or_else(|| DEFAULT_GROUP_TRANSPORT_MODE.to_string())
    }

    pub fn vehicle_capacity(&self) -> Result<i32, CoreError> {
        count_or(self.vehicle_capacity, DEFAULT_VEHICLE_CAPACITY, "vehicleCapacity")
    }

    pub fn vehicle_count(&self) -> Result<i32, CoreError> {
        count_or(self.vehicle_count, DEFAULT_VEHICLE_COUNT, "vehicleCount")
    }
}

impl TransportPayload {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(t) = &self.departure_buffer_time {
            validate_buffer_time(t)?;
        }
        if let Some(t) = &self.arrival_buffer_time {
            validate_buffer_time(t)?;
        }
        for (i, group) in self.transport_groups.iter().flatten().enumerate() {
            require_name(&group.name, "Transport group", i)?;
            group.vehicle_capacity()?;
            group.vehicle_count()?;
        }
        Ok(())
    }

    pub fn transport_mode(&self) -> String {
        non_empty(&self.transport_mode).unwrap_or_else(|| MODE_NONE.to_string())
    }

    pub fn flight_mode(&self) -> String {
        non_empty(&self.flight_mode).unwrap_or_else(|| MODE_NONE.to_string())
    }

    /// Provider contact, preferring the phone number field.
    pub fn provider_contact(&self) -> Option<String> {
        non_empty(&self.transport_provider_phone)
            .or_else(|| self.transport_provider_contact.clone())
    }

    pub fn departure_buffer_time(&self) -> String {
        self.departure_buffer_time
            .clone()
            .unwrap_or_else(|| DEFAULT_DEPARTURE_BUFFER.to_string())
    }

    pub fn arrival_buffer_time(&self) -> String {
        self.arrival_buffer_time
            .clone()
            .unwrap_or_else(|| DEFAULT_ARRIVAL_BUFFER.to_string())
    }
}

// ---------------------------------------------------------------------------
// communication / whatsapp / design
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommunicationPayload {
    #[serde(deserialize_with = "lenient")]
    pub email_provider: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub send_rsvp_reminders: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub send_rsvp_confirmations: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub send_travel_updates: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhatsappPayload {
    #[serde(deserialize_with = "lenient")]
    pub whatsapp_business_number: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub whatsapp_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignPayload {
    #[serde(deserialize_with = "lenient")]
    pub primary_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub secondary_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub font_family: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub design_template: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub custom_css: Option<String>,
}

// ---------------------------------------------------------------------------
// Tagged payload
// ---------------------------------------------------------------------------

/// A parsed step body, one variant per wizard step.
#[derive(Debug, Clone)]
pub enum StepPayload {
    BasicInfo(BasicInfoPayload),
    Venues(VenuesPayload),
    RsvpConfig(RsvpConfigPayload),
    Hotels(HotelsPayload),
    Transport(TransportPayload),
    Communication(CommunicationPayload),
    Whatsapp(WhatsappPayload),
    AiAssistant,
    Design(DesignPayload),
}

fn decode<T: serde::de::DeserializeOwned>(
    step: WizardStep,
    body: &serde_json::Value,
) -> Result<T, CoreError> {
    T::deserialize(body)
        .map_err(|e| CoreError::Validation(format!("Invalid {step} payload: {e}")))
}

impl StepPayload {
    /// Parse and validate the body posted for `step`.
    ///
    /// Returns `Ok(None)` when the body is not a JSON object: the step is
    /// still recorded in progress but nothing else is written.
    pub fn from_json(step: WizardStep, body: &serde_json::Value) -> Result<Option<Self>, CoreError> {
        if !body.is_object() {
            return Ok(None);
        }

        let payload = match step {
            WizardStep::BasicInfo => {
                let p: BasicInfoPayload = decode(step, body)?;
                p.validate()?;
                Self::BasicInfo(p)
            }
            WizardStep::Venues => {
                let p: VenuesPayload = decode(step, body)?;
                p.validate()?;
                Self::Venues(p)
            }
            WizardStep::RsvpConfig => {
                let p: RsvpConfigPayload = decode(step, body)?;
                p.validate()?;
                Self::RsvpConfig(p)
            }
            WizardStep::Hotels => {
                let p: HotelsPayload = decode(step, body)?;
                p.validate()?;
                Self::Hotels(p)
            }
            WizardStep::Transport => {
                let p: TransportPayload = decode(step, body)?;
                p.validate()?;
                Self::Transport(p)
            }
            WizardStep::Communication => Self::Communication(decode(step, body)?),
            WizardStep::Whatsapp => Self::Whatsapp(decode(step, body)?),
            WizardStep::AiAssistant => Self::AiAssistant,
            WizardStep::Design => Self::Design(decode(step, body)?),
        };
        Ok(Some(payload))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn non_object_body_yields_no_payload() {
        assert!(StepPayload::from_json(WizardStep::Venues, &json!(null))
            .unwrap()
            .is_none());
        assert!(StepPayload::from_json(WizardStep::BasicInfo, &json!([1, 2]))
            .unwrap()
            .is_none());
    }

    #[test]
    fn empty_object_parses_for_every_step() {
        for step in [
            WizardStep::BasicInfo,
            WizardStep::Venues,
            WizardStep::RsvpConfig,
            WizardStep::Hotels,
            WizardStep::Transport,
            WizardStep::Communication,
            WizardStep::Whatsapp,
            WizardStep::AiAssistant,
            WizardStep::Design,
        ] {
            let payload = StepPayload::from_json(step, &json!({})).unwrap();
            assert!(payload.is_some(), "{step}");
        }
    }

    #[test]
    fn wrong_field_type_reads_as_absent() {
        let payload = StepPayload::from_json(WizardStep::Venues, &json!({ "venues": "garden" }))
            .unwrap()
            .unwrap();
        assert_matches!(payload, StepPayload::Venues(p) if p.venues.is_none());

        let body = json!({ "rsvpDeadlineDays": "30", "enablePlusOne": false });
        let payload = StepPayload::from_json(WizardStep::RsvpConfig, &body).unwrap().unwrap();
        assert_matches!(
            payload,
            StepPayload::RsvpConfig(p) if p.rsvp_deadline_days.is_none() && !p.allow_plus_ones()
        );

        let payload = StepPayload::from_json(WizardStep::Design, &json!({ "primaryColor": 123 }))
            .unwrap()
            .unwrap();
        assert_matches!(payload, StepPayload::Design(d) if d.primary_color.is_none());
    }

    #[test]
    fn wrong_typed_nested_field_keeps_the_rest_of_the_item() {
        let body = json!({ "venues": [{ "name": "Temple", "date": 20260612, "location": "Goa" }] });
        let p: VenuesPayload = serde_json::from_value(body).unwrap();
        let venue = &p.venues.unwrap()[0];
        assert_eq!(venue.name.as_deref(), Some("Temple"));
        assert_eq!(venue.date, None);
        assert_eq!(venue.location.as_deref(), Some("Goa"));
    }

    #[test]
    fn wrong_typed_buffer_time_falls_back_to_default() {
        let payload = StepPayload::from_json(WizardStep::Transport, &json!({ "departureBufferTime": 3 }))
            .unwrap()
            .unwrap();
        assert_matches!(payload, StepPayload::Transport(t) if t.departure_buffer_time() == "03:00");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = json!({ "primaryColor": "#fff", "somethingElse": 1 });
        let payload = StepPayload::from_json(WizardStep::Design, &body).unwrap().unwrap();
        assert_matches!(payload, StepPayload::Design(d) if d.primary_color.as_deref() == Some("#fff"));
    }

    // -- basic_info --

    #[test]
    fn basic_info_rejects_end_before_start() {
        let body = json!({ "startDate": "2026-06-10", "endDate": "2026-06-09" });
        assert!(StepPayload::from_json(WizardStep::BasicInfo, &body).is_err());

        let body = json!({ "startDate": "2026-06-10", "endDate": "2026-06-10" });
        assert!(StepPayload::from_json(WizardStep::BasicInfo, &body).is_ok());
    }

    // -- venues --

    #[test]
    fn venues_require_names() {
        let body = json!({ "venues": [{ "name": "Temple" }, { "location": "Beach" }] });
        let err = StepPayload::from_json(WizardStep::Venues, &body).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("#2"));
    }

    #[test]
    fn venues_absent_means_untouched() {
        let p: VenuesPayload = serde_json::from_value(json!({})).unwrap();
        assert!(p.venues.is_none());
    }

    // -- rsvp_config --

    #[test]
    fn rsvp_defaults() {
        let p = RsvpConfigPayload::default();
        assert!(p.allow_plus_ones());
        assert!(p.allow_children_details());
        assert_eq!(p.accommodation_mode(), "none");
        assert_eq!(p.transport_mode(), "none");
    }

    #[test]
    fn rsvp_empty_mode_falls_back_to_none() {
        let p = RsvpConfigPayload {
            transport_mode: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(p.transport_mode(), "none");
    }

    #[test]
    fn rsvp_deadline_subtracts_days_from_start() {
        let p = RsvpConfigPayload {
            rsvp_deadline_days: Some(30),
            ..Default::default()
        };
        assert_eq!(
            p.rsvp_deadline(Some(date("2026-06-30"))),
            Some(date("2026-05-31"))
        );
    }

    #[test]
    fn rsvp_deadline_absent_without_days_or_start() {
        let zero = RsvpConfigPayload {
            rsvp_deadline_days: Some(0),
            ..Default::default()
        };
        assert_eq!(zero.rsvp_deadline(Some(date("2026-06-30"))), None);
        assert_eq!(RsvpConfigPayload::default().rsvp_deadline(Some(date("2026-06-30"))), None);

        let days = RsvpConfigPayload {
            rsvp_deadline_days: Some(10),
            ..Default::default()
        };
        assert_eq!(days.rsvp_deadline(None), None);
    }

    #[test]
    fn rsvp_rejects_negative_days() {
        let body = json!({ "rsvpDeadlineDays": -3 });
        assert!(StepPayload::from_json(WizardStep::RsvpConfig, &body).is_err());
    }

    // -- hotels --

    #[test]
    fn hotel_plans_correlate_by_client_id() {
        let body = json!({
            "hotels": [
                { "id": "h-a", "name": "Alpha" },
                { "id": 7, "name": "Bravo" }
            ],
            "roomTypes": [
                { "hotelId": 7, "name": "Suite" },
                { "hotelId": "h-a", "name": "Deluxe" },
                { "hotelId": "h-a", "name": "Twin" },
                { "hotelId": "7", "name": "String seven" },
                { "name": "Orphan" }
            ]
        });
        let p: HotelsPayload = serde_json::from_value(body).unwrap();
        let plans = p.hotel_plans();

        assert_eq!(plans.len(), 2);
        let alpha: Vec<_> = plans[0].room_types.iter().filter_map(|r| r.name.as_deref()).collect();
        let bravo: Vec<_> = plans[1].room_types.iter().filter_map(|r| r.name.as_deref()).collect();
        assert_eq!(alpha, vec!["Deluxe", "Twin"]);
        assert_eq!(bravo, vec!["Suite"]);
    }

    #[test]
    fn hotel_without_id_gets_no_rooms() {
        let body = json!({
            "hotels": [{ "name": "Nameless" }],
            "roomTypes": [{ "name": "Room" }]
        });
        let p: HotelsPayload = serde_json::from_value(body).unwrap();
        assert!(p.hotel_plans()[0].room_types.is_empty());
    }

    #[test]
    fn room_type_counts_default_when_zero_or_absent() {
        let room = RoomTypeInput {
            max_occupancy: Some(0),
            ..Default::default()
        };
        assert_eq!(room.max_occupancy().unwrap(), DEFAULT_MAX_OCCUPANCY);
        assert_eq!(room.total_rooms().unwrap(), DEFAULT_TOTAL_ROOMS);

        let negative = RoomTypeInput {
            total_rooms: Some(-1),
            ..Default::default()
        };
        assert!(negative.total_rooms().is_err());
    }

    #[test]
    fn negotiated_rate_accepts_numbers_and_strings() {
        let p: RoomTypeInput =
            serde_json::from_value(json!({ "negotiatedRate": "189.50" })).unwrap();
        assert_eq!(p.negotiated_rate, Some(Decimal::new(18950, 2)));

        let p: RoomTypeInput = serde_json::from_value(json!({ "negotiatedRate": 120 })).unwrap();
        assert_eq!(p.negotiated_rate, Some(Decimal::new(120, 0)));
    }

    // -- transport --

    #[test]
    fn transport_defaults() {
        let p = TransportPayload::default();
        assert_eq!(p.transport_mode(), "none");
        assert_eq!(p.flight_mode(), "none");
        assert_eq!(p.departure_buffer_time(), "03:00");
        assert_eq!(p.arrival_buffer_time(), "00:30");
        assert_eq!(p.provider_contact(), None);
    }

    #[test]
    fn provider_phone_wins_over_contact() {
        let p = TransportPayload {
            transport_provider_phone: Some("+1 555".into()),
            transport_provider_contact: Some("Jo".into()),
            ..Default::default()
        };
        assert_eq!(p.provider_contact().as_deref(), Some("+1 555"));

        let p = TransportPayload {
            transport_provider_phone: Some(String::new()),
            transport_provider_contact: Some("Jo".into()),
            ..Default::default()
        };
        assert_eq!(p.provider_contact().as_deref(), Some("Jo"));
    }

    #[test]
    fn transport_group_defaults() {
        let g = TransportGroupInput::default();
        assert_eq!(g.transport_mode(), "bus");
        assert_eq!(g.vehicle_capacity().unwrap(), 50);
        assert_eq!(g.vehicle_count().unwrap(), 1);
    }

    #[test]
    fn buffer_time_format() {
        assert!(validate_buffer_time("03:00").is_ok());
        assert!(validate_buffer_time("120:45").is_ok());
        assert!(validate_buffer_time("3").is_err());
        assert!(validate_buffer_time("03:60").is_err());
        assert!(validate_buffer_time("aa:00").is_err());
        assert!(validate_buffer_time(":30").is_err());
    }

    #[test]
    fn transport_rejects_bad_buffer_time() {
        let body = json!({ "departureBufferTime": "soon" });
        assert!(StepPayload::from_json(WizardStep::Transport, &body).is_err());
    }
}
