//! Domain model and form validation for the CineWeb console.
//!
//! Everything here is pure logic: records exchanged with the backend,
//! raw form drafts, and the rules that turn a draft into a payload.

pub mod datetime;
pub mod error;
pub mod models;
pub mod types;
pub mod validation;
