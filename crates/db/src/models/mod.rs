//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Create / update DTOs consumed by the matching repository

pub mod ceremony;
pub mod event;
pub mod hotel;
pub mod setup_progress;
pub mod transport_group;
