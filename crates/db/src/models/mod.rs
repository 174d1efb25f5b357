//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - Aggregate structs where a listing joins across tables

pub mod code_summary;
pub mod comment;
pub mod drawing;
pub mod example_package;
pub mod project;
pub mod proof;
pub mod rom_pricing;
pub mod session;
pub mod sign;
pub mod sign_type;
pub mod spec_page;
pub mod takeoff_marker;
pub mod user;
pub mod vendor;
