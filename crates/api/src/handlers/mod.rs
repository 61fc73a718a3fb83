pub mod events;
pub mod session;
pub mod setup_wizard;
