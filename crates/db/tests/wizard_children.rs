//! Integration tests for the event columns and child collections written
//! by the setup wizard.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use vowplan_db::models::ceremony::CreateCeremony;
use vowplan_db::models::event::{
    CreateEvent, UpdateEventAccommodation, UpdateEventBasicInfo, UpdateEventCommunication,
};
use vowplan_db::models::hotel::{CreateHotel, CreateHotelWithRoomTypes, CreateRoomType};
use vowplan_db::models::transport_group::CreateTransportGroup;
use vowplan_db::repositories::{CeremonyRepo, EventRepo, HotelRepo, TransportGroupRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_event(title: &str) -> CreateEvent {
    CreateEvent {
        title: title.to_string(),
        couple_names: Some("Mira & Tom".to_string()),
        bride_name: Some("Mira".to_string()),
        groom_name: Some("Tom".to_string()),
        start_date: date(2026, 9, 12),
        end_date: date(2026, 9, 13),
        location: Some("Udaipur".to_string()),
        description: Some("Lakeside".to_string()),
    }
}

fn ceremony(name: &str) -> CreateCeremony {
    CreateCeremony {
        name: name.to_string(),
        location: "Palace lawn".to_string(),
        date: Some(date(2026, 9, 12)),
        start_time: Some("18:00".to_string()),
        end_time: None,
        description: None,
        attire_code: None,
        ceremony_type: None,
    }
}

fn hotel(name: &str) -> CreateHotel {
    CreateHotel {
        name: name.to_string(),
        address: String::new(),
        phone: None,
        website: None,
        description: None,
        amenities: None,
        is_default: false,
    }
}

fn room(name: &str) -> CreateRoomType {
    CreateRoomType {
        name: name.to_string(),
        room_type: name.to_string(),
        bed_type: Some("king".to_string()),
        max_occupancy: 2,
        total_rooms: 10,
        price_per_night: Some(Decimal::new(12_500, 2)),
        special_features: None,
    }
}

fn group(name: &str) -> CreateTransportGroup {
    CreateTransportGroup {
        name: name.to_string(),
        transport_mode: "bus".to_string(),
        vehicle_type: None,
        vehicle_capacity: 50,
        vehicle_count: 1,
        pickup_location: Some("Airport".to_string()),
        pickup_location_details: None,
        pickup_date: None,
        pickup_time_slot: None,
        dropoff_location: None,
        dropoff_location_details: None,
        special_instructions: None,
    }
}

// ---------------------------------------------------------------------------
// Test: events
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_event_applies_column_defaults(pool: PgPool) {
    let event = EventRepo::create(&pool, &new_event("Defaults")).await.unwrap();

    assert!(event.allow_plus_ones);
    assert_eq!(event.accommodation_mode, "none");
    assert_eq!(event.transport_mode, "none");
    assert_eq!(event.departure_buffer_time, "03:00");
    assert_eq!(event.arrival_buffer_time, "00:30");
    assert!(!event.whatsapp_enabled);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_basic_info_keeps_required_columns(pool: PgPool) {
    let event = EventRepo::create(&pool, &new_event("Keep")).await.unwrap();

    let update = UpdateEventBasicInfo {
        title: Some("Renamed".to_string()),
        ..Default::default()
    };
    let updated = EventRepo::update_basic_info(&pool, event.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.couple_names, "Mira & Tom");
    assert_eq!(updated.location, "Udaipur");
    assert_eq!(updated.start_date, event.start_date);
    assert!(updated.description.is_none());
    assert!(updated.updated_at >= event.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_event_returns_none(pool: PgPool) {
    let result = EventRepo::update_accommodation(&pool, 424_242, &UpdateEventAccommodation::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_communication_keeps_omitted_flags(pool: PgPool) {
    let event = EventRepo::create(&pool, &new_event("Comms")).await.unwrap();

    let update = UpdateEventCommunication {
        email_provider: Some("resend".to_string()),
        send_rsvp_reminders: Some(false),
        ..Default::default()
    };
    let updated = EventRepo::update_communication(&pool, event.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.email_provider.as_deref(), Some("resend"));
    assert!(!updated.send_rsvp_reminders);
    assert!(updated.send_rsvp_confirmations);
    assert!(updated.send_travel_updates);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inverted_date_range_is_check_violation(pool: PgPool) {
    let event = EventRepo::create(&pool, &new_event("Dates")).await.unwrap();

    let update = UpdateEventBasicInfo {
        end_date: Some(date(2026, 1, 1)),
        ..Default::default()
    };
    let err = EventRepo::update_basic_info(&pool, event.id, &update)
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_events_newest_first(pool: PgPool) {
    let a = EventRepo::create(&pool, &new_event("A")).await.unwrap();
    let b = EventRepo::create(&pool, &new_event("B")).await.unwrap();

    let events = EventRepo::list(&pool, 10, 0).await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, b.id);
    assert_eq!(events[1].id, a.id);

    let page = EventRepo::list(&pool, 1, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, a.id);
}

// ---------------------------------------------------------------------------
// Test: replace-all collections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_ceremonies_is_not_append(pool: PgPool) {
    let event = EventRepo::create(&pool, &new_event("Venues")).await.unwrap();

    CeremonyRepo::replace_for_event(&pool, event.id, &[ceremony("Mehndi"), ceremony("Sangeet")])
        .await
        .unwrap();
    CeremonyRepo::replace_for_event(&pool, event.id, &[ceremony("Reception")])
        .await
        .unwrap();

    let ceremonies = CeremonyRepo::list_by_event(&pool, event.id).await.unwrap();
    assert_eq!(ceremonies.len(), 1);
    assert_eq!(ceremonies[0].name, "Reception");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_with_empty_list_clears(pool: PgPool) {
    let event = EventRepo::create(&pool, &new_event("Clear")).await.unwrap();
    TransportGroupRepo::replace_for_event(&pool, event.id, &[group("Shuttle")])
        .await
        .unwrap();

    TransportGroupRepo::replace_for_event(&pool, event.id, &[])
        .await
        .unwrap();
    assert!(TransportGroupRepo::list_by_event(&pool, event.id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_transport_groups_start_as_draft(pool: PgPool) {
    let event = EventRepo::create(&pool, &new_event("Draft")).await.unwrap();

    let groups = TransportGroupRepo::replace_for_event(&pool, event.id, &[group("Airport run")])
        .await
        .unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].status, "draft");
    assert_eq!(groups[0].vehicle_capacity, 50);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_hotels_links_rooms_to_their_hotel(pool: PgPool) {
    let event = EventRepo::create(&pool, &new_event("Hotels")).await.unwrap();

    let input = vec![
        CreateHotelWithRoomTypes {
            hotel: hotel("Lake Palace"),
            room_types: vec![room("Deluxe"), room("Suite")],
        },
        CreateHotelWithRoomTypes {
            hotel: hotel("City Inn"),
            room_types: vec![room("Standard")],
        },
    ];
    HotelRepo::replace_for_event(&pool, event.id, &input).await.unwrap();

    let hotels = HotelRepo::list_by_event(&pool, event.id).await.unwrap();
    assert_eq!(hotels.len(), 2);

    let palace = hotels.iter().find(|h| h.hotel.name == "Lake Palace").unwrap();
    let names: Vec<_> = palace.room_types.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Deluxe", "Suite"]);
    assert!(palace.room_types.iter().all(|r| r.hotel_id == palace.hotel.id));

    let inn = hotels.iter().find(|h| h.hotel.name == "City Inn").unwrap();
    assert_eq!(inn.room_types.len(), 1);
    assert_eq!(inn.room_types[0].hotel_id, inn.hotel.id);
    assert_eq!(inn.room_types[0].price_per_night, Some(Decimal::new(12_500, 2)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_replace_rolls_back(pool: PgPool) {
    let event = EventRepo::create(&pool, &new_event("Rollback")).await.unwrap();
    HotelRepo::replace_for_event(
        &pool,
        event.id,
        &[CreateHotelWithRoomTypes {
            hotel: hotel("Original"),
            room_types: vec![room("Twin")],
        }],
    )
    .await
    .unwrap();

    let mut bad_room = room("Broken");
    bad_room.total_rooms = 0;
    let result = HotelRepo::replace_for_event(
        &pool,
        event.id,
        &[CreateHotelWithRoomTypes {
            hotel: hotel("Replacement"),
            room_types: vec![bad_room],
        }],
    )
    .await;
    assert!(result.is_err());

    let hotels = HotelRepo::list_by_event(&pool, event.id).await.unwrap();
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].hotel.name, "Original");
    assert_eq!(hotels[0].room_types.len(), 1);
}
