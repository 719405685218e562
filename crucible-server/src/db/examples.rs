//! Workshop example persistence (showcase pieces)

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use crucible_core::models::{CreateExample, UpdateExample, WorkshopExample};

use super::{decode_gallery, encode_gallery, format_datetime, parse_datetime, Database};
use crate::error::ServerResult;

const COLUMNS: &str = "id, title, slug, description, image_url, gallery_images, created_at";

fn row_to_example(row: &Row<'_>) -> rusqlite::Result<WorkshopExample> {
    Ok(WorkshopExample {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        image_url: row.get(4)?,
        gallery_images: decode_gallery(row.get::<_, Option<String>>(5)?),
        created_at: parse_datetime(row.get::<_, String>(6)?),
    })
}

impl Database {
    pub fn list_examples(&self) -> ServerResult<Vec<WorkshopExample>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM workshop_examples ORDER BY created_at DESC"
        ))?;

        let examples = stmt
            .query_map([], row_to_example)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(examples)
    }

    pub fn get_example_by_slug(&self, slug: &str) -> ServerResult<Option<WorkshopExample>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare(&format!("SELECT {COLUMNS} FROM workshop_examples WHERE slug = ?"))?;

        let example = stmt.query_row([slug], row_to_example).optional()?;

        Ok(example)
    }

    pub fn create_example(&self, req: &CreateExample) -> ServerResult<i64> {
        let gallery = encode_gallery(&req.gallery_images)?;

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO workshop_examples (title, slug, description, image_url, gallery_images, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                req.title,
                req.slug,
                req.description,
                req.image_url,
                gallery,
                format_datetime(Utc::now()),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    pub fn update_example(&self, req: &UpdateExample) -> ServerResult<usize> {
        let gallery = encode_gallery(&req.gallery_images)?;

        let conn = self.conn.lock().unwrap();
        let rows = conn.execute(
            "UPDATE workshop_examples
             SET title = ?, slug = ?, description = ?, image_url = ?, gallery_images = ?
             WHERE id = ?",
            params![
                req.title,
                req.slug,
                req.description,
                req.image_url,
                gallery,
                req.id,
            ],
        )?;

        Ok(rows)
    }

    pub fn delete_example(&self, id: i64) -> ServerResult<usize> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute("DELETE FROM workshop_examples WHERE id = ?", params![id])?;
        Ok(rows)
    }
}
