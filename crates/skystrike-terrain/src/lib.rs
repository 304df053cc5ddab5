//! Terrain heightfield and ground collision queries.
//!
//! Provides the `GroundQuery` capability consumed by the impact predictor:
//! "does this segment cross the ground, and if so approximately where."

pub mod heightfield;
pub mod query;

pub use heightfield::HeightField;
pub use query::{FlatGround, GroundQuery};
