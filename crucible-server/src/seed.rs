//! Sample content for a fresh database
//!
//! Fills every table the public site reads. Tables that already hold
//! rows are left alone, so re-running against a live database is safe.

use tracing::info;

use crucible_core::models::{
    CreateArtist, CreateArtwork, CreateExample, CreateJournalEntry, CreateWorkshop, UpsertAbout,
};
use crucible_core::slugify;

use crate::db::workshops::WorkshopFilter;
use crate::db::Database;
use crate::error::ServerResult;

/// Rows inserted per table
#[derive(Debug, Default)]
pub struct SeedReport {
    pub workshops: usize,
    pub examples: usize,
    pub journal_entries: usize,
    pub about_sections: usize,
    pub artists: usize,
    pub artworks: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.workshops
            + self.examples
            + self.journal_entries
            + self.about_sections
            + self.artists
            + self.artworks
    }
}

/// Populate empty tables with sample content
pub fn run(db: &Database) -> ServerResult<SeedReport> {
    let report = SeedReport {
        workshops: seed_workshops(db)?,
        examples: seed_examples(db)?,
        journal_entries: seed_journal(db)?,
        about_sections: seed_about(db)?,
        artists: 0,
        artworks: 0,
    };

    let (artists, artworks) = seed_artists(db)?;

    Ok(SeedReport {
        artists,
        artworks,
        ..report
    })
}

fn workshop(
    title: &str,
    description: &str,
    date: Option<&str>,
    location: &str,
    upcoming: bool,
) -> CreateWorkshop {
    CreateWorkshop {
        title: title.to_string(),
        slug: slugify(title),
        description: description.to_string(),
        date: date.and_then(|d| d.parse().ok()),
        location: location.to_string(),
        image_url: format!("/images/workshops/{}.jpg", slugify(title)),
        is_upcoming: upcoming,
    }
}

fn seed_workshops(db: &Database) -> ServerResult<usize> {
    if !db.list_workshops(WorkshopFilter::default())?.is_empty() {
        info!("Workshops already present, skipping");
        return Ok(0);
    }

    let samples = [
        workshop(
            "Lost-Wax Casting Weekend",
            "Two days taking a small wax original through investment, burnout and pour.",
            Some("2025-11-08"),
            "Main foundry floor",
            true,
        ),
        workshop(
            "Bronze Pouring Open Day",
            "Watch a full crucible pour up close and try finishing work on a cast piece.",
            Some("2025-09-20"),
            "Main foundry floor",
            true,
        ),
        workshop(
            "Sand Casting Taster",
            "An introduction to green-sand moulds. Date to be confirmed.",
            None,
            "The pattern shop",
            true,
        ),
        workshop(
            "Patination Masterclass",
            "Heat and chemical patinas on bronze with our finishing team.",
            Some("2024-03-16"),
            "Finishing studio",
            false,
        ),
    ];

    for sample in &samples {
        db.create_workshop(sample)?;
    }

    info!("Seeded {} workshops", samples.len());
    Ok(samples.len())
}

fn seed_examples(db: &Database) -> ServerResult<usize> {
    if !db.list_examples()?.is_empty() {
        info!("Workshop examples already present, skipping");
        return Ok(0);
    }

    let samples = [
        CreateExample {
            title: "Monumental Garden Stag".to_string(),
            slug: slugify("Monumental Garden Stag"),
            description: "Life-size stag built up in sections over a steel armature."
                .to_string(),
            image_url: "/images/examples/monumental-garden-stag.jpg".to_string(),
            gallery_images: Some(vec![
                "/images/examples/stag-armature.jpg".to_string(),
                "/images/examples/stag-wax.jpg".to_string(),
                "/images/examples/stag-installed.jpg".to_string(),
            ]),
        },
        CreateExample {
            title: "Portrait Bust in Silicon Bronze".to_string(),
            slug: slugify("Portrait Bust in Silicon Bronze"),
            description: "A commissioned portrait taken from clay to metal in six weeks."
                .to_string(),
            image_url: "/images/examples/portrait-bust.jpg".to_string(),
            gallery_images: None,
        },
    ];

    for sample in &samples {
        db.create_example(sample)?;
    }

    info!("Seeded {} workshop examples", samples.len());
    Ok(samples.len())
}

fn seed_journal(db: &Database) -> ServerResult<usize> {
    if !db.list_journal_entries(true)?.is_empty() {
        info!("Journal entries already present, skipping");
        return Ok(0);
    }

    let samples = [
        CreateJournalEntry {
            title: "Firing Up the New Induction Furnace".to_string(),
            slug: slugify("Firing Up the New Induction Furnace"),
            content: "After a winter of rewiring, the induction furnace took its first \
                      charge of ingots this week. Melt times are down from ninety minutes \
                      to twenty, and the pour window is far easier to hit."
                .to_string(),
            excerpt: "First melt in the new induction furnace.".to_string(),
            image_url: "/images/journal/induction-furnace.jpg".to_string(),
            published: true,
        },
        CreateJournalEntry {
            title: "Notes from the Chasing Bench".to_string(),
            slug: slugify("Notes from the Chasing Bench"),
            content: "Draft notes on matting tools and where we source them.".to_string(),
            excerpt: "Work in progress.".to_string(),
            image_url: "/images/journal/chasing-bench.jpg".to_string(),
            published: false,
        },
    ];

    for sample in &samples {
        db.create_journal_entry(sample)?;
    }

    info!("Seeded {} journal entries", samples.len());
    Ok(samples.len())
}

fn seed_about(db: &Database) -> ServerResult<usize> {
    if !db.list_about_content()?.is_empty() {
        info!("About content already present, skipping");
        return Ok(0);
    }

    let samples = [
        UpsertAbout {
            section: "history".to_string(),
            content: "The foundry has run continuously since 1987, when two sculptors \
                      took over a disused agricultural barn and built the first furnace \
                      from salvaged firebrick."
                .to_string(),
        },
        UpsertAbout {
            section: "process".to_string(),
            content: "Every piece passes through the same stations: mouldmaking, wax, \
                      investment, burnout, pour, fettling and patina. Visitors are \
                      welcome to follow a piece through all seven."
                .to_string(),
        },
        UpsertAbout {
            section: "visit".to_string(),
            content: "Open Saturdays, 10am to 4pm. Pours most third weekends; check the \
                      journal for dates."
                .to_string(),
        },
    ];

    for sample in &samples {
        db.upsert_about_section(sample)?;
    }

    info!("Seeded {} about sections", samples.len());
    Ok(samples.len())
}

fn seed_artists(db: &Database) -> ServerResult<(usize, usize)> {
    if !db.list_artists()?.is_empty() {
        info!("Artists already present, skipping");
        return Ok((0, 0));
    }

    let elena = db.create_artist(&CreateArtist {
        name: "Elena Marsh".to_string(),
        slug: slugify("Elena Marsh"),
        bio: "Elena casts wading birds and river mammals from life studies made on \
              the estuary near her studio."
            .to_string(),
        profile_image_url: Some("/images/artists/elena-marsh.jpg".to_string()),
        website: Some("https://elenamarsh.example.com".to_string()),
        instagram: Some("@elenamarsh.bronze".to_string()),
        twitter: None,
        email: None,
    })?;

    let rory = db.create_artist(&CreateArtist {
        name: "Rory Whitfield".to_string(),
        slug: slugify("Rory Whitfield"),
        bio: "Rory's vessels start on the lathe as turned patterns and finish as \
              sand-cast bronze, patinated near-black."
            .to_string(),
        profile_image_url: None,
        website: None,
        instagram: None,
        twitter: None,
        email: Some("rory@example.com".to_string()),
    })?;

    let artworks = [
        CreateArtwork {
            artist_id: elena,
            title: "River Heron".to_string(),
            description: Some("Single-pour heron on a slate plinth.".to_string()),
            image_url: "/images/artworks/river-heron.jpg".to_string(),
            year: Some("2023".to_string()),
            medium: Some("Bronze".to_string()),
            dimensions: Some("64 x 28 cm".to_string()),
        },
        CreateArtwork {
            artist_id: elena,
            title: "Otter Pair".to_string(),
            description: None,
            image_url: "/images/artworks/otter-pair.jpg".to_string(),
            year: Some("2024".to_string()),
            medium: Some("Bronze".to_string()),
            dimensions: None,
        },
        CreateArtwork {
            artist_id: rory,
            title: "Torsion Vessel".to_string(),
            description: Some("Sand-cast vessel, twisted pattern, blackened finish.".to_string()),
            image_url: "/images/artworks/torsion-vessel.jpg".to_string(),
            year: Some("2022".to_string()),
            medium: Some("Sand-cast bronze".to_string()),
            dimensions: Some("31 x 18 cm".to_string()),
        },
    ];

    for artwork in &artworks {
        db.create_artwork(artwork)?;
    }

    info!("Seeded 2 artists with {} artworks", artworks.len());
    Ok((2, artworks.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_fills_every_table() {
        let db = Database::open_in_memory().unwrap();
        let report = run(&db).unwrap();

        assert_eq!(report.workshops, 4);
        assert_eq!(report.examples, 2);
        assert_eq!(report.journal_entries, 2);
        assert_eq!(report.about_sections, 3);
        assert_eq!(report.artists, 2);
        assert_eq!(report.artworks, 3);
        assert_eq!(report.total(), 16);
    }

    #[test]
    fn seed_skips_populated_tables() {
        let db = Database::open_in_memory().unwrap();
        run(&db).unwrap();

        let again = run(&db).unwrap();
        assert_eq!(again.total(), 0);

        // Still exactly one copy of everything
        assert_eq!(db.list_artists().unwrap().len(), 2);
        assert_eq!(db.list_workshops(WorkshopFilter::default()).unwrap().len(), 4);
    }

    #[test]
    fn seeded_slugs_resolve() {
        let db = Database::open_in_memory().unwrap();
        run(&db).unwrap();

        assert!(db
            .get_workshop_by_slug("lost-wax-casting-weekend")
            .unwrap()
            .is_some());
        assert!(db
            .get_journal_entry_by_slug("firing-up-the-new-induction-furnace")
            .unwrap()
            .is_some());

        let profile = db.get_artist_profile("elena-marsh").unwrap().unwrap();
        assert_eq!(profile.artworks.len(), 2);
    }
}
