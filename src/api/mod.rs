//! Photoshoot API surface
//!
//! Payload types and the client seam the runner talks through.

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiRequest, ApiResponse, HttpApiClient};
pub use types::{CreatedShoot, Location, PhotoId, ShootId, ShootRecord};
