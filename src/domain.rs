//! Domain data and pure helpers
//!
//! - Claim records and the sample claim
//! - Text formatting for notes and field blocks

pub mod claim;
pub mod text;
