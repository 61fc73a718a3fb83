//! Writes a parsed wizard step to event-scoped storage.
//!
//! Each payload type implements [`PersistStep`], turning the client's
//! camelCase body into the repository DTOs of its step. [`save_step`] is
//! the single write path shared by the generic step endpoint and the
//! current-event transport endpoint: persist the payload, then record the
//! step in the progress tracker.

use serde_json::Value;
use sqlx::PgPool;
use vowplan_core::error::CoreError;
use vowplan_core::setup_payload::{
    non_empty, BasicInfoPayload, CommunicationPayload, DesignPayload, HotelsPayload,
    RsvpConfigPayload, StepPayload, TransportGroupInput, TransportPayload, VenuesPayload,
    WhatsappPayload,
};
use vowplan_core::setup_wizard::WizardStep;
use vowplan_core::types::DbId;
use vowplan_db::models::ceremony::CreateCeremony;
use vowplan_db::models::event::{
    Event, UpdateEventAccommodation, UpdateEventBasicInfo, UpdateEventCommunication,
    UpdateEventDesign, UpdateEventRsvp, UpdateEventTransport, UpdateEventWhatsapp,
};
use vowplan_db::models::hotel::{CreateHotel, CreateHotelWithRoomTypes, CreateRoomType};
use vowplan_db::models::setup_progress::SetupProgress;
use vowplan_db::models::transport_group::CreateTransportGroup;
use vowplan_db::repositories::{
    CeremonyRepo, EventRepo, HotelRepo, SetupProgressRepo, TransportGroupRepo,
};

use crate::error::{AppError, AppResult};

/// Apply one step's payload to the event and its child tables.
pub(crate) trait PersistStep {
    async fn persist(&self, pool: &PgPool, event: &Event) -> AppResult<()>;
}

/// Parse `body` for `step`, persist it, and record progress.
///
/// The body is validated before anything is written. Returns the updated
/// progress record, or `None` for `whatsapp`.
pub async fn save_step(
    pool: &PgPool,
    event: &Event,
    step: WizardStep,
    body: &Value,
) -> AppResult<Option<SetupProgress>> {
    let payload = StepPayload::from_json(step, body)?;

    match &payload {
        Some(payload) => payload.persist(pool, event).await?,
        None => {
            tracing::debug!(event_id = event.id, %step, "Non-object step body, skipping persistence")
        }
    }

    let progress = SetupProgressRepo::record_step(pool, event.id, step).await?;

    tracing::info!(
        event_id = event.id,
        %step,
        all_complete = progress.as_ref().is_some_and(|p| p.flags().all_complete()),
        "Setup step saved"
    );

    Ok(progress)
}

fn event_gone(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Event", id })
}

/// Turn a repository `Option` into `NotFound` when the event vanished
/// between the existence check and the write.
fn require_updated<T>(updated: Option<T>, id: DbId) -> AppResult<T> {
    updated.ok_or_else(|| event_gone(id))
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

impl PersistStep for StepPayload {
    async fn persist(&self, pool: &PgPool, event: &Event) -> AppResult<()> {
        match self {
            StepPayload::BasicInfo(p) => p.persist(pool, event).await,
            StepPayload::Venues(p) => p.persist(pool, event).await,
            StepPayload::RsvpConfig(p) => p.persist(pool, event).await,
            StepPayload::Hotels(p) => p.persist(pool, event).await,
            StepPayload::Transport(p) => p.persist(pool, event).await,
            StepPayload::Communication(p) => p.persist(pool, event).await,
            StepPayload::Whatsapp(p) => p.persist(pool, event).await,
            StepPayload::Design(p) => p.persist(pool, event).await,
            // The assistant step has no stored settings.
            StepPayload::AiAssistant => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Event columns
// ---------------------------------------------------------------------------

impl PersistStep for BasicInfoPayload {
    async fn persist(&self, pool: &PgPool, event: &Event) -> AppResult<()> {
        let input = UpdateEventBasicInfo {
            title: non_empty(&self.title),
            couple_names: self.couple_names.clone(),
            bride_name: self.bride_name.clone(),
            groom_name: self.groom_name.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location.clone(),
            description: non_empty(&self.description),
        };
        require_updated(EventRepo::update_basic_info(pool, event.id, &input).await?, event.id)?;
        Ok(())
    }
}

impl PersistStep for RsvpConfigPayload {
    async fn persist(&self, pool: &PgPool, event: &Event) -> AppResult<()> {
        let input = UpdateEventRsvp {
            allow_plus_ones: self.allow_plus_ones(),
            allow_children_details: self.allow_children_details(),
            rsvp_deadline: self.rsvp_deadline(Some(event.start_date)),
            accommodation_mode: self.accommodation_mode(),
            transport_mode: self.transport_mode(),
        };
        require_updated(EventRepo::update_rsvp(pool, event.id, &input).await?, event.id)?;
        Ok(())
    }
}

impl PersistStep for CommunicationPayload {
    async fn persist(&self, pool: &PgPool, event: &Event) -> AppResult<()> {
        let input = UpdateEventCommunication {
            email_provider: self.email_provider.clone(),
            send_rsvp_reminders: self.send_rsvp_reminders,
            send_rsvp_confirmations: self.send_rsvp_confirmations,
            send_travel_updates: self.send_travel_updates,
        };
        require_updated(
            EventRepo::update_communication(pool, event.id, &input).await?,
            event.id,
        )?;
        Ok(())
    }
}

impl PersistStep for WhatsappPayload {
    async fn persist(&self, pool: &PgPool, event: &Event) -> AppResult<()> {
        let input = UpdateEventWhatsapp {
            whatsapp_business_number: self.whatsapp_business_number.clone(),
            whatsapp_enabled: self.whatsapp_enabled,
        };
        require_updated(EventRepo::update_whatsapp(pool, event.id, &input).await?, event.id)?;
        Ok(())
    }
}

impl PersistStep for DesignPayload {
    async fn persist(&self, pool: &PgPool, event: &Event) -> AppResult<()> {
        let input = UpdateEventDesign {
            primary_color: self.primary_color.clone(),
            secondary_color: self.secondary_color.clone(),
            font_family: self.font_family.clone(),
            design_template: self.design_template.clone(),
            custom_css: self.custom_css.clone(),
        };
        require_updated(EventRepo::update_design(pool, event.id, &input).await?, event.id)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Replace-all collections
// ---------------------------------------------------------------------------

impl PersistStep for VenuesPayload {
    async fn persist(&self, pool: &PgPool, event: &Event) -> AppResult<()> {
        let Some(venues) = &self.venues else {
            return Ok(());
        };

        let ceremonies: Vec<CreateCeremony> = venues
            .iter()
            .map(|v| CreateCeremony {
                name: v.name.clone().unwrap_or_default(),
                location: v.location.clone().unwrap_or_default(),
                date: v.date,
                start_time: v.start_time.clone(),
                end_time: v.end_time.clone(),
                description: non_empty(&v.description),
                attire_code: non_empty(&v.attire_code),
                ceremony_type: v.ceremony_type.clone(),
            })
            .collect();

        let saved = CeremonyRepo::replace_for_event(pool, event.id, &ceremonies).await?;
        tracing::info!(event_id = event.id, count = saved.len(), "Ceremonies replaced");
        Ok(())
    }
}

impl PersistStep for HotelsPayload {
    async fn persist(&self, pool: &PgPool, event: &Event) -> AppResult<()> {
        let input = UpdateEventAccommodation {
            accommodation_mode: non_empty(&self.accommodation_mode),
            accommodation_special_deals: self.accommodation_special_deals.clone(),
            accommodation_instructions: self.accommodation_instructions.clone(),
        };
        require_updated(
            EventRepo::update_accommodation(pool, event.id, &input).await?,
            event.id,
        )?;

        if self.hotels.is_none() {
            return Ok(());
        }

        let mut hotels = Vec::new();
        for plan in self.hotel_plans() {
            let hotel = plan.hotel;
            let mut room_types = Vec::with_capacity(plan.room_types.len());
            for room in plan.room_types {
                let name = room.name.clone().unwrap_or_default();
                room_types.push(CreateRoomType {
                    room_type: name.clone(),
                    name,
                    bed_type: non_empty(&room.bed_type),
                    max_occupancy: room.max_occupancy()?,
                    total_rooms: room.total_rooms()?,
                    price_per_night: room.negotiated_rate,
                    special_features: non_empty(&room.special_features),
                });
            }
            hotels.push(CreateHotelWithRoomTypes {
                hotel: CreateHotel {
                    name: hotel.name.clone().unwrap_or_default(),
                    address: hotel.location.clone().unwrap_or_default(),
                    phone: non_empty(&hotel.contact_phone),
                    website: non_empty(&hotel.website),
                    description: non_empty(&hotel.description),
                    amenities: non_empty(&hotel.amenities),
                    is_default: hotel.is_default.unwrap_or(false),
                },
                room_types,
            });
        }

        let saved = HotelRepo::replace_for_event(pool, event.id, &hotels).await?;
        tracing::info!(
            event_id = event.id,
            hotels = saved.len(),
            room_types = saved.iter().map(|h| h.room_types.len()).sum::<usize>(),
            "Hotels replaced"
        );
        Ok(())
    }
}

impl PersistStep for TransportPayload {
    async fn persist(&self, pool: &PgPool, event: &Event) -> AppResult<()> {
        let input = UpdateEventTransport {
            transport_mode: self.transport_mode(),
            transport_instructions: self.transport_instructions.clone(),
            transportation_provided: self.transportation_provided.unwrap_or(false),
            transport_provider_name: self.transport_provider_name.clone(),
            transport_provider_contact: self.provider_contact(),
            transport_provider_email: self.transport_provider_email.clone(),
            transport_provider_website: self.transport_provider_website.clone(),
            send_travel_updates: self.send_travel_updates.unwrap_or(true),
            notify_guests: self.notify_guests.unwrap_or(true),
            provides_airport_pickup: self.provides_airport_pickup.unwrap_or(false),
            provides_venue_transfers: self.provides_venue_transfers.unwrap_or(false),
            transport_pickup_note: self.transport_pickup_note.clone(),
            transport_return_note: self.transport_return_note.clone(),
            transport_special_deals: self.transport_special_deals.clone(),
            default_arrival_location: self.default_arrival_location.clone(),
            default_departure_location: self.default_departure_location.clone(),
            offer_travel_assistance: self.offer_travel_assistance.unwrap_or(false),
            flight_mode: self.flight_mode(),
            flight_special_deals: self.flight_special_deals.clone(),
            flight_instructions: self.flight_instructions.clone(),
            recommended_airlines: self.recommended_airlines.clone(),
            airline_discount_codes: self.airline_discount_codes.clone(),
            departure_buffer_time: self.departure_buffer_time(),
            arrival_buffer_time: self.arrival_buffer_time(),
        };
        require_updated(EventRepo::update_transport(pool, event.id, &input).await?, event.id)?;

        let Some(groups) = &self.transport_groups else {
            return Ok(());
        };
        let groups = groups
            .iter()
            .map(transport_group_row)
            .collect::<Result<Vec<_>, _>>()?;

        let saved = TransportGroupRepo::replace_for_event(pool, event.id, &groups).await?;
        tracing::info!(event_id = event.id, count = saved.len(), "Transport groups replaced");
        Ok(())
    }
}

fn transport_group_row(group: &TransportGroupInput) -> Result<CreateTransportGroup, CoreError> {
    Ok(CreateTransportGroup {
        name: group.name.clone().unwrap_or_default(),
        transport_mode: group.transport_mode(),
        vehicle_type: non_empty(&group.vehicle_type),
        vehicle_capacity: group.vehicle_capacity()?,
        vehicle_count: group.vehicle_count()?,
        pickup_location: group.pickup_location.clone(),
        pickup_location_details: non_empty(&group.pickup_location_details),
        pickup_date: group.pickup_date,
        pickup_time_slot: group.pickup_time_slot.clone(),
        dropoff_location: group.dropoff_location.clone(),
        dropoff_location_details: non_empty(&group.dropoff_location_details),
        special_instructions: non_empty(&group.special_instructions),
    })
}
