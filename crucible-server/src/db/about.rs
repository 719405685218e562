//! About page content persistence

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use crucible_core::models::{AboutContent, UpsertAbout};

use super::{format_datetime, parse_datetime, Database};
use crate::error::ServerResult;

fn row_to_about(row: &Row<'_>) -> rusqlite::Result<AboutContent> {
    Ok(AboutContent {
        id: row.get(0)?,
        section: row.get(1)?,
        content: row.get(2)?,
        updated_at: parse_datetime(row.get::<_, String>(3)?),
    })
}

impl Database {
    pub fn list_about_content(&self) -> ServerResult<Vec<AboutContent>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT id, section, content, updated_at FROM about_content ORDER BY section")?;

        let sections = stmt
            .query_map([], row_to_about)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(sections)
    }

    pub fn get_about_section(&self, section: &str) -> ServerResult<Option<AboutContent>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT id, section, content, updated_at FROM about_content WHERE section = ?")?;

        let about = stmt.query_row([section], row_to_about).optional()?;

        Ok(about)
    }

    /// Insert the section or replace its content if it already exists
    pub fn upsert_about_section(&self, req: &UpsertAbout) -> ServerResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            INSERT INTO about_content (section, content, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(section) DO UPDATE SET
                content = excluded.content,
                updated_at = excluded.updated_at
            "#,
            params![req.section, req.content, format_datetime(Utc::now())],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upsert(section: &str, content: &str) -> UpsertAbout {
        UpsertAbout {
            section: section.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn upsert_keeps_one_row_per_section() {
        let db = Database::open_in_memory().unwrap();
        db.upsert_about_section(&upsert("history", "Founded in 1987."))
            .unwrap();
        db.upsert_about_section(&upsert("history", "Founded in 1987, rebuilt in 2003."))
            .unwrap();

        let all = db.list_about_content().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].content, "Founded in 1987, rebuilt in 2003.");
    }

    #[test]
    fn upsert_refreshes_updated_at() {
        let db = Database::open_in_memory().unwrap();
        db.upsert_about_section(&upsert("visit", "Open Saturdays."))
            .unwrap();
        let before = db.get_about_section("visit").unwrap().unwrap();

        std::thread::sleep(std::time::Duration::from_millis(5));
        db.upsert_about_section(&upsert("visit", "Open weekends."))
            .unwrap();

        let after = db.get_about_section("visit").unwrap().unwrap();
        assert_eq!(after.id, before.id);
        assert!(after.updated_at > before.updated_at);
    }

    #[test]
    fn sections_list_alphabetically() {
        let db = Database::open_in_memory().unwrap();
        db.upsert_about_section(&upsert("process", "Lost wax.")).unwrap();
        db.upsert_about_section(&upsert("history", "Old barn.")).unwrap();

        let sections: Vec<String> = db
            .list_about_content()
            .unwrap()
            .into_iter()
            .map(|a| a.section)
            .collect();
        assert_eq!(sections, vec!["history", "process"]);

        assert!(db.get_about_section("missing").unwrap().is_none());
    }
}
