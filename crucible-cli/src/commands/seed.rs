//! Seed command
//!
//! Opens (or creates) the database file and fills empty tables with
//! sample content so a fresh install has something to show.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crucible_server::Database;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// SQLite database file
    #[arg(long, env = "CRUCIBLE_DB", default_value = "data/crucible.db")]
    pub db: PathBuf,
}

/// Run the seeder
pub fn run_seed(args: SeedArgs) -> Result<()> {
    let db = Database::open(args.db.as_path())
        .with_context(|| format!("Failed to open database at {}", args.db.display()))?;

    let report = crucible_server::seed::run(&db).context("Failed to seed database")?;

    if report.total() == 0 {
        println!("Database already has content; nothing to do.");
    } else {
        println!(
            "Seeded {} rows: {} workshops, {} examples, {} journal entries, {} about sections, {} artists, {} artworks.",
            report.total(),
            report.workshops,
            report.examples,
            report.journal_entries,
            report.about_sections,
            report.artists,
            report.artworks,
        );
    }

    Ok(())
}
