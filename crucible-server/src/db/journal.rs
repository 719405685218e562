//! Journal entry persistence

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use crucible_core::models::{CreateJournalEntry, JournalEntry, UpdateJournalEntry};

use super::{format_datetime, parse_datetime, Database};
use crate::error::ServerResult;

const COLUMNS: &str = "id, title, slug, content, excerpt, image_url, published, created_at, updated_at";

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<JournalEntry> {
    Ok(JournalEntry {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        content: row.get(3)?,
        excerpt: row.get(4)?,
        image_url: row.get(5)?,
        published: row.get(6)?,
        created_at: parse_datetime(row.get::<_, String>(7)?),
        updated_at: parse_datetime(row.get::<_, String>(8)?),
    })
}

impl Database {
    /// List entries newest first; drafts only when asked for
    pub fn list_journal_entries(&self, include_unpublished: bool) -> ServerResult<Vec<JournalEntry>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT {COLUMNS}
            FROM journal_entries
            WHERE (?1 OR published = 1)
            ORDER BY created_at DESC
            "#,
        ))?;

        let entries = stmt
            .query_map(params![include_unpublished], row_to_entry)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    pub fn get_journal_entry_by_slug(&self, slug: &str) -> ServerResult<Option<JournalEntry>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare(&format!("SELECT {COLUMNS} FROM journal_entries WHERE slug = ?"))?;

        let entry = stmt.query_row([slug], row_to_entry).optional()?;

        Ok(entry)
    }

    pub fn create_journal_entry(&self, req: &CreateJournalEntry) -> ServerResult<i64> {
        let now = format_datetime(Utc::now());

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO journal_entries (title, slug, content, excerpt, image_url, published, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                req.title,
                req.slug,
                req.content,
                req.excerpt,
                req.image_url,
                req.published,
                now,
                now,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Update an entry; `updated_at` moves, `created_at` stays put
    pub fn update_journal_entry(&self, req: &UpdateJournalEntry) -> ServerResult<usize> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute(
            "UPDATE journal_entries
             SET title = ?, slug = ?, content = ?, excerpt = ?, image_url = ?, published = ?, updated_at = ?
             WHERE id = ?",
            params![
                req.title,
                req.slug,
                req.content,
                req.excerpt,
                req.image_url,
                req.published,
                format_datetime(Utc::now()),
                req.id,
            ],
        )?;

        Ok(rows)
    }

    pub fn delete_journal_entry(&self, id: i64) -> ServerResult<usize> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute("DELETE FROM journal_entries WHERE id = ?", params![id])?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slug: &str, published: bool) -> CreateJournalEntry {
        CreateJournalEntry {
            title: "Firing the Furnace".to_string(),
            slug: slug.to_string(),
            content: "Full account of the first pour.".to_string(),
            excerpt: "First pour notes".to_string(),
            image_url: "/images/furnace.jpg".to_string(),
            published,
        }
    }

    #[test]
    fn drafts_are_hidden_unless_requested() {
        let db = Database::open_in_memory().unwrap();
        db.create_journal_entry(&entry("live", true)).unwrap();
        db.create_journal_entry(&entry("draft", false)).unwrap();

        let public = db.list_journal_entries(false).unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].slug, "live");

        let all = db.list_journal_entries(true).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn slug_fetch_ignores_published_flag() {
        // The slug endpoint serves preview links, so drafts resolve too
        let db = Database::open_in_memory().unwrap();
        db.create_journal_entry(&entry("draft", false)).unwrap();

        let found = db.get_journal_entry_by_slug("draft").unwrap().unwrap();
        assert!(!found.published);
    }

    #[test]
    fn update_refreshes_updated_at_only() {
        let db = Database::open_in_memory().unwrap();
        let id = db.create_journal_entry(&entry("post", false)).unwrap();
        let before = db.get_journal_entry_by_slug("post").unwrap().unwrap();

        std::thread::sleep(std::time::Duration::from_millis(5));

        let rows = db
            .update_journal_entry(&UpdateJournalEntry {
                id,
                title: "Firing the Furnace".to_string(),
                slug: "post".to_string(),
                content: "Expanded account.".to_string(),
                excerpt: "First pour notes".to_string(),
                image_url: "/images/furnace.jpg".to_string(),
                published: true,
            })
            .unwrap();
        assert_eq!(rows, 1);

        let after = db.get_journal_entry_by_slug("post").unwrap().unwrap();
        assert!(after.published);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }

    #[test]
    fn update_missing_id_touches_no_rows() {
        let db = Database::open_in_memory().unwrap();
        let rows = db
            .update_journal_entry(&UpdateJournalEntry {
                id: 42,
                title: String::new(),
                slug: "none".to_string(),
                content: String::new(),
                excerpt: String::new(),
                image_url: String::new(),
                published: false,
            })
            .unwrap();
        assert_eq!(rows, 0);
    }
}
