//! SQLite database layer for the crucible content service
//!
//! Uses rusqlite with automatic schema creation on startup. One
//! connection guards the single database file; every entity gets its
//! own method group in a submodule.

pub mod about;
pub mod artists;
pub mod artworks;
pub mod bookings;
pub mod examples;
pub mod journal;
pub mod workshops;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Connection;

use crate::error::ServerResult;

/// Thread-safe database wrapper
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl Database {
    /// Open or create the database at the given path
    pub fn open(path: impl Into<PathBuf>) -> ServerResult<Self> {
        let path = path.into();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(&path)?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        };

        db.run_migrations()?;
        Ok(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> ServerResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
            path: PathBuf::from(":memory:"),
        };
        db.run_migrations()?;
        Ok(db)
    }

    /// Get the database file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Get database file size in bytes
    pub fn size_bytes(&self) -> Option<u64> {
        std::fs::metadata(&self.path).ok().map(|m| m.len())
    }

    /// Run schema migrations
    fn run_migrations(&self) -> ServerResult<()> {
        let conn = self.conn.lock().unwrap();

        // SQLite leaves foreign keys off per connection; artworks rely
        // on the cascade from artists.
        conn.pragma_update(None, "foreign_keys", true)?;

        conn.execute_batch(SCHEMA)?;

        // Create indexes
        conn.execute_batch(INDEXES)?;

        Ok(())
    }
}

// ============================================================================
// Schema
// ============================================================================

const SCHEMA: &str = r#"
-- Workshops table
CREATE TABLE IF NOT EXISTS workshops (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL,
    date TEXT,
    location TEXT NOT NULL,
    image_url TEXT NOT NULL,
    is_upcoming INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

-- Workshop examples table (showcase pieces, not bookable)
CREATE TABLE IF NOT EXISTS workshop_examples (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL,
    image_url TEXT NOT NULL,
    gallery_images TEXT,
    created_at TEXT NOT NULL
);

-- Journal entries table
CREATE TABLE IF NOT EXISTS journal_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    content TEXT NOT NULL,
    excerpt TEXT NOT NULL,
    image_url TEXT NOT NULL,
    published INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- About page content, one row per section
CREATE TABLE IF NOT EXISTS about_content (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    section TEXT NOT NULL UNIQUE,
    content TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Booking requests table (public intake)
CREATE TABLE IF NOT EXISTS booking_requests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    message TEXT NOT NULL,
    workshop_id INTEGER,
    created_at TEXT NOT NULL
);

-- Artists table
CREATE TABLE IF NOT EXISTS artists (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    bio TEXT NOT NULL,
    profile_image_url TEXT,
    website TEXT,
    instagram TEXT,
    twitter TEXT,
    email TEXT,
    created_at TEXT NOT NULL
);

-- Artworks table, removed together with their artist
CREATE TABLE IF NOT EXISTS artworks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    artist_id INTEGER NOT NULL REFERENCES artists(id) ON DELETE CASCADE,
    title TEXT NOT NULL,
    description TEXT,
    image_url TEXT NOT NULL,
    year TEXT,
    medium TEXT,
    dimensions TEXT,
    created_at TEXT NOT NULL
);
"#;

const INDEXES: &str = r#"
-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_workshops_upcoming ON workshops(is_upcoming);
CREATE INDEX IF NOT EXISTS idx_journal_published ON journal_entries(published);
CREATE INDEX IF NOT EXISTS idx_artworks_artist ON artworks(artist_id);
CREATE INDEX IF NOT EXISTS idx_bookings_created ON booking_requests(created_at DESC);
"#;

// ============================================================================
// Helpers
// ============================================================================

fn parse_datetime(s: String) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Dates are stored as ISO `YYYY-MM-DD` text so lexicographic order is
/// chronological order.
fn parse_date(s: Option<String>) -> Option<NaiveDate> {
    s.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok())
}

fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.to_string())
}

/// Gallery images are stored as a JSON array in a single TEXT column.
fn decode_gallery(raw: Option<String>) -> Option<Vec<String>> {
    raw.and_then(|s| serde_json::from_str(&s).ok())
}

fn encode_gallery(images: &Option<Vec<String>>) -> ServerResult<Option<String>> {
    match images {
        Some(list) => Ok(Some(serde_json::to_string(list)?)),
        None => Ok(None),
    }
}
