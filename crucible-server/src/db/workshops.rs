//! Workshop persistence

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use crucible_core::models::{CreateWorkshop, UpdateWorkshop, Workshop};

use super::{format_date, format_datetime, parse_date, parse_datetime, Database};
use crate::error::ServerResult;

/// Filters accepted by the workshop listing
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkshopFilter {
    /// Restrict to upcoming (or past) workshops when set
    pub upcoming: Option<bool>,
}

const COLUMNS: &str =
    "id, title, slug, description, date, location, image_url, is_upcoming, created_at";

fn row_to_workshop(row: &Row<'_>) -> rusqlite::Result<Workshop> {
    Ok(Workshop {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        date: parse_date(row.get::<_, Option<String>>(4)?),
        location: row.get(5)?,
        image_url: row.get(6)?,
        is_upcoming: row.get(7)?,
        created_at: parse_datetime(row.get::<_, String>(8)?),
    })
}

impl Database {
    /// List workshops, dated ones newest first and undated ones last
    pub fn list_workshops(&self, filter: WorkshopFilter) -> ServerResult<Vec<Workshop>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT {COLUMNS}
            FROM workshops
            WHERE (?1 IS NULL OR is_upcoming = ?1)
            ORDER BY date IS NULL, date DESC
            "#,
        ))?;

        let workshops = stmt
            .query_map(params![filter.upcoming], row_to_workshop)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(workshops)
    }

    pub fn get_workshop_by_slug(&self, slug: &str) -> ServerResult<Option<Workshop>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM workshops WHERE slug = ?"))?;

        let workshop = stmt.query_row([slug], row_to_workshop).optional()?;

        Ok(workshop)
    }

    pub fn create_workshop(&self, req: &CreateWorkshop) -> ServerResult<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO workshops (title, slug, description, date, location, image_url, is_upcoming, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                req.title,
                req.slug,
                req.description,
                format_date(req.date),
                req.location,
                req.image_url,
                req.is_upcoming,
                format_datetime(Utc::now()),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Update a workshop in place; returns the number of rows touched
    pub fn update_workshop(&self, req: &UpdateWorkshop) -> ServerResult<usize> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute(
            "UPDATE workshops
             SET title = ?, slug = ?, description = ?, date = ?, location = ?, image_url = ?, is_upcoming = ?
             WHERE id = ?",
            params![
                req.title,
                req.slug,
                req.description,
                format_date(req.date),
                req.location,
                req.image_url,
                req.is_upcoming,
                req.id,
            ],
        )?;

        Ok(rows)
    }

    pub fn delete_workshop(&self, id: i64) -> ServerResult<usize> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute("DELETE FROM workshops WHERE id = ?", params![id])?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn workshop(title: &str, slug: &str, date: Option<&str>, upcoming: bool) -> CreateWorkshop {
        CreateWorkshop {
            title: title.to_string(),
            slug: slug.to_string(),
            description: "Hands-on casting".to_string(),
            date: date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
            location: "The foundry floor".to_string(),
            image_url: "/images/workshop.jpg".to_string(),
            is_upcoming: upcoming,
        }
    }

    #[test]
    fn list_orders_dated_first_newest_to_oldest() {
        let db = Database::open_in_memory().unwrap();
        db.create_workshop(&workshop("Old", "old", Some("2024-01-10"), false))
            .unwrap();
        db.create_workshop(&workshop("Undated", "undated", None, true))
            .unwrap();
        db.create_workshop(&workshop("New", "new", Some("2025-03-01"), true))
            .unwrap();

        let all = db.list_workshops(WorkshopFilter::default()).unwrap();
        let slugs: Vec<&str> = all.iter().map(|w| w.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "old", "undated"]);
    }

    #[test]
    fn list_filters_on_upcoming_flag() {
        let db = Database::open_in_memory().unwrap();
        db.create_workshop(&workshop("Past", "past", Some("2023-05-01"), false))
            .unwrap();
        db.create_workshop(&workshop("Next", "next", Some("2025-09-01"), true))
            .unwrap();

        let upcoming = db
            .list_workshops(WorkshopFilter {
                upcoming: Some(true),
            })
            .unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].slug, "next");

        let past = db
            .list_workshops(WorkshopFilter {
                upcoming: Some(false),
            })
            .unwrap();
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].slug, "past");
    }

    #[test]
    fn slug_fetch_round_trips_fields() {
        let db = Database::open_in_memory().unwrap();
        let id = db
            .create_workshop(&workshop("Bronze Pour", "bronze-pour", Some("2025-06-14"), true))
            .unwrap();

        let found = db.get_workshop_by_slug("bronze-pour").unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.title, "Bronze Pour");
        assert_eq!(found.date, NaiveDate::from_ymd_opt(2025, 6, 14));
        assert!(found.is_upcoming);

        assert!(db.get_workshop_by_slug("missing").unwrap().is_none());
    }

    #[test]
    fn duplicate_slug_is_rejected_and_original_survives() {
        let db = Database::open_in_memory().unwrap();
        db.create_workshop(&workshop("First", "clash", None, true))
            .unwrap();

        let err = db.create_workshop(&workshop("Second", "clash", None, true));
        assert!(err.is_err());

        let kept = db.get_workshop_by_slug("clash").unwrap().unwrap();
        assert_eq!(kept.title, "First");
        assert_eq!(db.list_workshops(WorkshopFilter::default()).unwrap().len(), 1);
    }

    #[test]
    fn update_missing_id_touches_no_rows() {
        let db = Database::open_in_memory().unwrap();
        let rows = db
            .update_workshop(&UpdateWorkshop {
                id: 999,
                title: "Ghost".to_string(),
                slug: "ghost".to_string(),
                description: String::new(),
                date: None,
                location: String::new(),
                image_url: String::new(),
                is_upcoming: false,
            })
            .unwrap();
        assert_eq!(rows, 0);
    }

    #[test]
    fn update_and_delete_round_trip() {
        let db = Database::open_in_memory().unwrap();
        let id = db
            .create_workshop(&workshop("Draft", "draft", None, false))
            .unwrap();

        let rows = db
            .update_workshop(&UpdateWorkshop {
                id,
                title: "Final".to_string(),
                slug: "final".to_string(),
                description: "Reworked".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 10, 2),
                location: "Annex".to_string(),
                image_url: "/images/final.jpg".to_string(),
                is_upcoming: true,
            })
            .unwrap();
        assert_eq!(rows, 1);

        assert!(db.get_workshop_by_slug("draft").unwrap().is_none());
        let renamed = db.get_workshop_by_slug("final").unwrap().unwrap();
        assert_eq!(renamed.title, "Final");
        assert_eq!(renamed.location, "Annex");

        assert_eq!(db.delete_workshop(id).unwrap(), 1);
        assert_eq!(db.delete_workshop(id).unwrap(), 0);
    }
}
