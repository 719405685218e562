//! Content model for the crucible API
//!
//! Entity structs mirror the database rows one-to-one; the `Create*` /
//! `Update*` structs are the JSON payloads the admin endpoints accept.
//! Updates carry the id in the body and always replace the full field set.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

// ============================================================================
// Workshops
// ============================================================================

/// A casting workshop or foundry open day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workshop {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Workshops without a confirmed date sort after dated ones.
    pub date: Option<NaiveDate>,
    pub location: String,
    pub image_url: String,
    pub is_upcoming: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkshop {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub location: String,
    pub image_url: String,
    #[serde(default)]
    pub is_upcoming: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWorkshop {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub location: String,
    pub image_url: String,
    #[serde(default)]
    pub is_upcoming: bool,
}

// ============================================================================
// Workshop examples
// ============================================================================

/// A past casting project shown on the bespoke-casting pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkshopExample {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image_url: String,
    /// Ordered gallery of additional image URLs; absent when none recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_images: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExample {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image_url: String,
    pub gallery_images: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateExample {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image_url: String,
    pub gallery_images: Option<Vec<String>>,
}

// ============================================================================
// Journal
// ============================================================================

/// A journal entry; drafts stay hidden from the public listing until
/// published.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJournalEntry {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateJournalEntry {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    #[serde(default)]
    pub published: bool,
}

// ============================================================================
// About content
// ============================================================================

/// A named block of copy for the about/history/bespoke pages. Writes are
/// upserts keyed on the section name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub id: i64,
    pub section: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertAbout {
    pub section: String,
    pub content: String,
}

// ============================================================================
// Bookings
// ============================================================================

/// A workshop booking request submitted from the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    /// Soft reference to a workshop; not enforced by the schema.
    pub workshop_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Public intake payload. Fields are optional at the serde level so that
/// missing and blank values share one validation path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub workshop_id: Option<i64>,
}

impl CreateBooking {
    /// Presence check for the required intake fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            match value {
                Some(v) if !v.trim().is_empty() => {}
                _ => return Err(ValidationError::Required { field }),
            }
        }
        Ok(())
    }
}

// ============================================================================
// Artists
// ============================================================================

/// An artist the foundry casts for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub bio: String,
    pub profile_image_url: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    pub slug: String,
    pub bio: String,
    pub profile_image_url: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateArtist {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub bio: String,
    pub profile_image_url: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub email: Option<String>,
}

/// An artist detail payload: the artist row plus their artworks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistProfile {
    #[serde(flatten)]
    pub artist: Artist,
    pub artworks: Vec<Artwork>,
}

// ============================================================================
// Artworks
// ============================================================================

/// A piece cast at the foundry, owned by an artist. Deleting the artist
/// removes its artworks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artwork {
    pub id: i64,
    pub artist_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    /// Free text; ranges like "2019-2021" appear in practice.
    pub year: Option<String>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArtwork {
    pub artist_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub year: Option<String>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateArtwork {
    pub id: i64,
    pub artist_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub year: Option<String>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
