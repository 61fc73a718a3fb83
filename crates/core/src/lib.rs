pub mod error;
pub mod pagination;
pub mod setup_payload;
pub mod setup_wizard;
pub mod types;
pub mod wedding_event;
