//! Route handlers for the crucible content API
//!
//! Organized by resource type:
//! - workshops: Bookable casting workshops
//! - examples: Workshop example showcase pieces
//! - journal: Foundry journal entries
//! - about: About page sections
//! - bookings: Public booking intake
//! - artists: Represented artists
//! - artworks: Artist portfolio pieces
//! - auth: Admin login
//! - health: Health check endpoint

pub mod about;
pub mod artists;
pub mod artworks;
pub mod auth;
pub mod bookings;
pub mod examples;
pub mod health;
pub mod journal;
pub mod workshops;

pub use about::*;
pub use artists::*;
pub use artworks::*;
pub use auth::*;
pub use bookings::*;
pub use examples::*;
pub use health::*;
pub use journal::*;
pub use workshops::*;

use serde::Deserialize;

/// `?slug=` addressing for single-item reads
#[derive(Debug, Default, Deserialize)]
pub struct SlugQuery {
    pub slug: Option<String>,
}

/// `?id=` addressing for deletes
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<i64>,
}
