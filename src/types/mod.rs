//! Core type definitions using newtype patterns for type safety.
//!
//! These types keep out-of-range scores unrepresentable and give the
//! persisted record a single, stable JSON shape.

mod record;
mod score;

pub use record::{ScoreRecord, Trend};
pub use score::{Rating, Score, ScoreValueError};
