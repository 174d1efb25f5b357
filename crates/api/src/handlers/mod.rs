//! HTTP handlers, one module per resource.

pub mod auth;
pub mod code_summary;
pub mod comment;
pub mod drawing;
pub mod example_package;
pub mod project;
pub mod proof;
pub mod rfq;
pub mod rom;
pub mod sign;
pub mod sign_type;
pub mod takeoff;
pub mod vendor;
