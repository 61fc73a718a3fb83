//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod ceremony_repo;
pub mod event_repo;
pub mod hotel_repo;
pub mod setup_progress_repo;
pub mod transport_group_repo;

pub use ceremony_repo::CeremonyRepo;
pub use event_repo::EventRepo;
pub use hotel_repo::HotelRepo;
pub use setup_progress_repo::SetupProgressRepo;
pub use transport_group_repo::TransportGroupRepo;
