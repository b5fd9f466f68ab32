//! Test fixture creation for catalogs and submissions
#![allow(dead_code)]

use super::constants::*;
use anyhow::Result;
use score_analyzer::score::{ChordEvent, ChordQuality, ChordRoot, Key, Scale, Section};
use score_analyzer::{CatalogEntry, ScoreData, TrackFacts};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn named(root: &str, quality: ChordQuality, beat: f64) -> ChordEvent {
    ChordEvent::new(ChordRoot::Name(root.to_string()), quality, beat)
}

fn pop_chords() -> Vec<ChordEvent> {
    vec![
        named("C", ChordQuality::MAJOR, 0.0),
        named("G", ChordQuality::MAJOR, 4.0),
        named("A", ChordQuality::MINOR, 8.0),
        named("F", ChordQuality::MAJOR, 12.0),
    ]
}

fn verse_chorus() -> Vec<Section> {
    vec![Section::new("Verse", 0.0), Section::new("Chorus", 8.0)]
}

fn track(id: &str, name: &str, duration_ms: u64, release_date: &str) -> TrackFacts {
    TrackFacts {
        spotify_id: id.to_string(),
        name: name.to_string(),
        artist_name: "The Test Band".to_string(),
        image_url: Some(format!("https://img.example/{id}.jpg")),
        duration_ms: Some(duration_ms),
        release_date: Some(release_date.to_string()),
        ..Default::default()
    }
}

fn scored(mut track: TrackFacts, score: ScoreData) -> CatalogEntry {
    let key = score.active_key().cloned().unwrap_or_default();
    track.key = key.tonic.clone();
    track.scale = key.scale.map(|scale| scale.as_str().to_string());
    track.sections = score
        .sections
        .iter()
        .map(|section| section.name.clone())
        .collect();
    CatalogEntry {
        track,
        score: Some(score),
    }
}

/// Five tracks: two near-identical pop songs, a blues, a partial match and
/// an unscored track.
pub fn test_catalog_entries() -> Vec<CatalogEntry> {
    let c_major = vec![Key::new("C", Scale::Major)];

    let pop = ScoreData {
        chords: pop_chords(),
        sections: verse_chorus(),
        keys: c_major.clone(),
        ..Default::default()
    };

    let mut twin_chords = pop_chords();
    twin_chords.push(named("C", ChordQuality::MAJOR, 16.0));
    let twin = ScoreData {
        chords: twin_chords,
        sections: verse_chorus(),
        keys: c_major.clone(),
        ..Default::default()
    };

    let blues = ScoreData {
        chords: vec![
            named("A", ChordQuality::MINOR, 0.0),
            named("D", ChordQuality::MINOR, 16.0),
            named("E", ChordQuality::MAJOR, 32.0),
        ],
        sections: vec![Section::new("Head", 0.0), Section::new("Solo", 48.0)],
        keys: vec![Key::new("A", Scale::Minor)],
        ..Default::default()
    };

    let partial = ScoreData {
        chords: vec![
            named("C", ChordQuality::MAJOR, 0.0),
            named("G", ChordQuality::MAJOR, 4.0),
            named("D", ChordQuality::MINOR, 8.0),
            named("E", ChordQuality::MAJOR, 12.0),
        ],
        sections: vec![Section::new("Verse", 0.0)],
        keys: c_major,
        ..Default::default()
    };

    vec![
        scored(track(TRACK_POP_ID, "Four Chords", 200_000, "2011-05-02"), pop),
        scored(
            track(TRACK_POP_TWIN_ID, "Four Chords Again", 215_000, "2011"),
            twin,
        ),
        scored(track(TRACK_BLUES_ID, "Blue Walk", 300_000, "1964-01-10"), blues),
        scored(track(TRACK_PARTIAL_ID, "Borrowed Time", 180_000, "2012-11"), partial),
        CatalogEntry {
            track: track(TRACK_UNSCORED_ID, "Liner Notes", 90_000, "1999"),
            score: None,
        },
    ]
}

/// 250 notes, 120 chords over 4 sections in C major.
pub fn reference_submission() -> ScoreData {
    let roots = ["C", "G", "A", "F"];
    ScoreData {
        notes: (0..REFERENCE_NOTES)
            .map(|i| serde_json::json!({ "pitch": 60 + (i % 12), "beat": i }))
            .collect(),
        chords: (0..REFERENCE_CHORDS)
            .map(|i| named(roots[i % roots.len()], ChordQuality::MAJOR, i as f64))
            .collect(),
        sections: vec![
            Section::new("Intro", 0.0),
            Section::new("Verse", 30.0),
            Section::new("Chorus", 60.0),
            Section::new("Outro", 90.0),
        ],
        keys: vec![Key::new("C", Scale::Major)],
        relative_chords: Vec::new(),
    }
}

/// Catalog and submission written as JSON into a temporary directory.
pub struct TestCatalog {
    pub catalog_path: PathBuf,
    pub submission_path: PathBuf,
    pub config_path: PathBuf,
    _dir: TempDir,
}

impl TestCatalog {
    pub fn create() -> Result<Self> {
        let dir = TempDir::new()?;

        let catalog_path = dir.path().join("catalog.json");
        fs::write(
            &catalog_path,
            serde_json::to_string_pretty(&test_catalog_entries())?,
        )?;

        let submission_path = dir.path().join("submission.json");
        fs::write(
            &submission_path,
            serde_json::to_string(&reference_submission())?,
        )?;

        let config_path = dir.path().join("analyzer.toml");
        fs::write(
            &config_path,
            "logging_level = \"warn\"\n\n[progression]\nmax_results = 1\n",
        )?;

        Ok(Self {
            catalog_path,
            submission_path,
            config_path,
            _dir: dir,
        })
    }
}
