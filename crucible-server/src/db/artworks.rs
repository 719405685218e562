//! Artwork persistence

use chrono::Utc;
use rusqlite::{params, Row};

use crucible_core::models::{Artwork, CreateArtwork, UpdateArtwork};

use super::{format_datetime, parse_datetime, Database};
use crate::error::ServerResult;

const COLUMNS: &str =
    "id, artist_id, title, description, image_url, year, medium, dimensions, created_at";

fn row_to_artwork(row: &Row<'_>) -> rusqlite::Result<Artwork> {
    Ok(Artwork {
        id: row.get(0)?,
        artist_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        image_url: row.get(4)?,
        year: row.get(5)?,
        medium: row.get(6)?,
        dimensions: row.get(7)?,
        created_at: parse_datetime(row.get::<_, String>(8)?),
    })
}

impl Database {
    /// List artworks newest first, optionally for a single artist
    pub fn list_artworks(&self, artist_id: Option<i64>) -> ServerResult<Vec<Artwork>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT {COLUMNS}
            FROM artworks
            WHERE (?1 IS NULL OR artist_id = ?1)
            ORDER BY created_at DESC
            "#,
        ))?;

        let artworks = stmt
            .query_map(params![artist_id], row_to_artwork)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(artworks)
    }

    /// Insert an artwork; fails if the artist does not exist
    pub fn create_artwork(&self, req: &CreateArtwork) -> ServerResult<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO artworks (artist_id, title, description, image_url, year, medium, dimensions, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                req.artist_id,
                req.title,
                req.description,
                req.image_url,
                req.year,
                req.medium,
                req.dimensions,
                format_datetime(Utc::now()),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    pub fn update_artwork(&self, req: &UpdateArtwork) -> ServerResult<usize> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute(
            "UPDATE artworks
             SET artist_id = ?, title = ?, description = ?, image_url = ?, year = ?, medium = ?, dimensions = ?
             WHERE id = ?",
            params![
                req.artist_id,
                req.title,
                req.description,
                req.image_url,
                req.year,
                req.medium,
                req.dimensions,
                req.id,
            ],
        )?;

        Ok(rows)
    }

    pub fn delete_artwork(&self, id: i64) -> ServerResult<usize> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute("DELETE FROM artworks WHERE id = ?", params![id])?;
        Ok(rows)
    }
}
