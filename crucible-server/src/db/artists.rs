//! Artist persistence

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use crucible_core::models::{Artist, ArtistProfile, CreateArtist, UpdateArtist};

use super::{format_datetime, parse_datetime, Database};
use crate::error::ServerResult;

const COLUMNS: &str =
    "id, name, slug, bio, profile_image_url, website, instagram, twitter, email, created_at";

fn row_to_artist(row: &Row<'_>) -> rusqlite::Result<Artist> {
    Ok(Artist {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        bio: row.get(3)?,
        profile_image_url: row.get(4)?,
        website: row.get(5)?,
        instagram: row.get(6)?,
        twitter: row.get(7)?,
        email: row.get(8)?,
        created_at: parse_datetime(row.get::<_, String>(9)?),
    })
}

impl Database {
    /// List artists alphabetically by name
    pub fn list_artists(&self) -> ServerResult<Vec<Artist>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM artists ORDER BY name"))?;

        let artists = stmt
            .query_map([], row_to_artist)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(artists)
    }

    pub fn get_artist_by_slug(&self, slug: &str) -> ServerResult<Option<Artist>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM artists WHERE slug = ?"))?;

        let artist = stmt.query_row([slug], row_to_artist).optional()?;

        Ok(artist)
    }

    /// Fetch an artist together with their artworks, newest work first
    pub fn get_artist_profile(&self, slug: &str) -> ServerResult<Option<ArtistProfile>> {
        let artist = match self.get_artist_by_slug(slug)? {
            Some(artist) => artist,
            None => return Ok(None),
        };

        let artworks = self.list_artworks(Some(artist.id))?;

        Ok(Some(ArtistProfile { artist, artworks }))
    }

    pub fn create_artist(&self, req: &CreateArtist) -> ServerResult<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO artists (name, slug, bio, profile_image_url, website, instagram, twitter, email, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                req.name,
                req.slug,
                req.bio,
                req.profile_image_url,
                req.website,
                req.instagram,
                req.twitter,
                req.email,
                format_datetime(Utc::now()),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    pub fn update_artist(&self, req: &UpdateArtist) -> ServerResult<usize> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute(
            "UPDATE artists
             SET name = ?, slug = ?, bio = ?, profile_image_url = ?, website = ?, instagram = ?, twitter = ?, email = ?
             WHERE id = ?",
            params![
                req.name,
                req.slug,
                req.bio,
                req.profile_image_url,
                req.website,
                req.instagram,
                req.twitter,
                req.email,
                req.id,
            ],
        )?;

        Ok(rows)
    }

    /// Delete an artist; the cascade removes their artworks
    pub fn delete_artist(&self, id: i64) -> ServerResult<usize> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute("DELETE FROM artists WHERE id = ?", params![id])?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crucible_core::models::CreateArtwork;

    fn artist(name: &str, slug: &str) -> CreateArtist {
        CreateArtist {
            name: name.to_string(),
            slug: slug.to_string(),
            bio: "Works in cast bronze.".to_string(),
            profile_image_url: None,
            website: Some("https://example.com".to_string()),
            instagram: None,
            twitter: None,
            email: None,
        }
    }

    fn artwork(artist_id: i64, title: &str) -> CreateArtwork {
        CreateArtwork {
            artist_id,
            title: title.to_string(),
            description: None,
            image_url: "/images/work.jpg".to_string(),
            year: Some("2024".to_string()),
            medium: Some("Bronze".to_string()),
            dimensions: None,
        }
    }

    #[test]
    fn artists_list_alphabetically() {
        let db = Database::open_in_memory().unwrap();
        db.create_artist(&artist("Rory Whitfield", "rory-whitfield"))
            .unwrap();
        db.create_artist(&artist("Elena Marsh", "elena-marsh"))
            .unwrap();

        let names: Vec<String> = db
            .list_artists()
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Elena Marsh", "Rory Whitfield"]);
    }

    #[test]
    fn profile_bundles_artworks() {
        let db = Database::open_in_memory().unwrap();
        let id = db.create_artist(&artist("Elena Marsh", "elena-marsh")).unwrap();
        db.create_artwork(&artwork(id, "Heron")).unwrap();
        db.create_artwork(&artwork(id, "Otter")).unwrap();

        let profile = db.get_artist_profile("elena-marsh").unwrap().unwrap();
        assert_eq!(profile.artist.slug, "elena-marsh");
        assert_eq!(profile.artworks.len(), 2);

        assert!(db.get_artist_profile("nobody").unwrap().is_none());
    }

    #[test]
    fn deleting_an_artist_cascades_to_artworks() {
        let db = Database::open_in_memory().unwrap();
        let keep = db.create_artist(&artist("Elena Marsh", "elena-marsh")).unwrap();
        let gone = db.create_artist(&artist("Rory Whitfield", "rory-whitfield")).unwrap();
        db.create_artwork(&artwork(keep, "Heron")).unwrap();
        db.create_artwork(&artwork(gone, "Vessel")).unwrap();
        db.create_artwork(&artwork(gone, "Gate")).unwrap();

        assert_eq!(db.delete_artist(gone).unwrap(), 1);

        assert!(db.list_artworks(Some(gone)).unwrap().is_empty());
        assert_eq!(db.list_artworks(Some(keep)).unwrap().len(), 1);
        assert_eq!(db.list_artworks(None).unwrap().len(), 1);
    }

    #[test]
    fn update_rewrites_social_links() {
        let db = Database::open_in_memory().unwrap();
        let id = db.create_artist(&artist("Elena Marsh", "elena-marsh")).unwrap();

        let rows = db
            .update_artist(&UpdateArtist {
                id,
                name: "Elena Marsh".to_string(),
                slug: "elena-marsh".to_string(),
                bio: "Works in cast bronze and steel.".to_string(),
                profile_image_url: Some("/images/elena.jpg".to_string()),
                website: None,
                instagram: Some("@elenamarsh".to_string()),
                twitter: None,
                email: None,
            })
            .unwrap();
        assert_eq!(rows, 1);

        let updated = db.get_artist_by_slug("elena-marsh").unwrap().unwrap();
        assert_eq!(updated.website, None);
        assert_eq!(updated.instagram, Some("@elenamarsh".to_string()));
    }
}
