//! Catalog-level recommendations built on the chord scorers.
//!
//! The catalog is a plain list of tracks, each optionally carrying its
//! submitted score. Nothing here mutates the catalog.

pub mod relations;

pub use relations::{release_year, same_key, same_structure, same_year, similar_duration};

use crate::config::{ProgressionSettings, RelationSettings, SimilaritySettings};
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::score::{ChordEvent, ScoreData};
use crate::similarity::{quick_chord_similarity, ProgressionMatch};
use crate::theory::chord_names;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Track metadata as synced from the streaming catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackFacts {
    pub spotify_id: String,
    pub name: String,
    pub artist_name: String,
    pub image_url: Option<String>,
    pub duration_ms: Option<u64>,
    /// Release date as given by the source, `YYYY`, `YYYY-MM` or `YYYY-MM-DD`
    pub release_date: Option<String>,
    pub key: Option<String>,
    pub scale: Option<String>,
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub track: TrackFacts,
    #[serde(default)]
    pub score: Option<ScoreData>,
}

impl CatalogEntry {
    pub fn chords(&self) -> &[ChordEvent] {
        self.score
            .as_ref()
            .map(|score| score.chords.as_slice())
            .unwrap_or_default()
    }

    /// Distinct chord names of the track's score, empty if it has none.
    pub fn chord_names(&self) -> Vec<String> {
        chord_names(self.chords())
    }
}

pub fn parse_catalog(json: &str) -> AnalyzerResult<Vec<CatalogEntry>> {
    Ok(serde_json::from_str(json)?)
}

pub fn find_entry<'a>(catalog: &'a [CatalogEntry], spotify_id: &str) -> Option<&'a CatalogEntry> {
    catalog.iter().find(|entry| entry.track.spotify_id == spotify_id)
}

/// Parses a comma separated progression such as `"C, G, Am, F"`.
pub fn parse_progression(input: &str) -> AnalyzerResult<Vec<String>> {
    let chords: Vec<String> = input.split(',').map(|chord| chord.trim().to_string()).collect();
    if chords.iter().any(String::is_empty) {
        return Err(AnalyzerError::InvalidChordSequence(input.to_string()));
    }
    Ok(chords)
}

/// Tracks whose opening chords closely match `chords`.
///
/// Only the first `max_candidates` scored tracks other than the target are
/// looked at. Results keep catalog order.
pub fn similar_tracks<'a>(
    target_id: &str,
    chords: &[ChordEvent],
    catalog: &'a [CatalogEntry],
    settings: &SimilaritySettings,
) -> Vec<&'a TrackFacts> {
    let similar: Vec<&TrackFacts> = catalog
        .iter()
        .filter(|entry| entry.score.is_some() && entry.track.spotify_id != target_id)
        .take(settings.max_candidates)
        .filter(|entry| {
            let similarity = quick_chord_similarity(chords, entry.chords(), settings.quick_window);
            debug!(
                "Quick similarity {} -> {}: {:.3}",
                target_id, entry.track.spotify_id, similarity
            );
            similarity > settings.quick_threshold
        })
        .take(settings.max_similar)
        .map(|entry| &entry.track)
        .collect();

    info!("Found {} tracks similar to {}", similar.len(), target_id);
    similar
}

/// Everything shown next to a track: chord-similar tracks plus the relation
/// queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedTracks<'a> {
    pub similar: Vec<&'a TrackFacts>,
    pub same_key: Vec<&'a TrackFacts>,
    pub similar_duration: Vec<&'a TrackFacts>,
    pub same_year: Vec<&'a TrackFacts>,
    pub same_structure: Vec<&'a TrackFacts>,
}

/// `None` when `target_id` is not in the catalog.
pub fn related_tracks<'a>(
    target_id: &str,
    catalog: &'a [CatalogEntry],
    similarity: &SimilaritySettings,
    relations: &RelationSettings,
) -> Option<RelatedTracks<'a>> {
    let target = find_entry(catalog, target_id)?;
    Some(RelatedTracks {
        similar: similar_tracks(target_id, target.chords(), catalog, similarity),
        same_key: same_key(&target.track, catalog),
        similar_duration: similar_duration(&target.track, catalog, relations),
        same_year: same_year(&target.track, catalog),
        same_structure: same_structure(&target.track, catalog),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionHit {
    pub spotify_id: String,
    pub name: String,
    pub artist_name: String,
    pub chords: Vec<String>,
    #[serde(flatten)]
    pub matched: ProgressionMatch,
}

impl ProgressionHit {
    pub fn score(&self) -> f64 {
        self.matched.score
    }
}

/// Tracks whose chord names best cover `query`, best first. Tracks without
/// any nameable chord are never returned.
pub fn search_progressions(
    query: &[String],
    catalog: &[CatalogEntry],
    settings: &ProgressionSettings,
) -> Vec<ProgressionHit> {
    if query.is_empty() {
        return Vec::new();
    }

    let scorer = settings.scorer();
    let mut hits: Vec<ProgressionHit> = catalog
        .par_iter()
        .filter_map(|entry| {
            let chords = entry.chord_names();
            if chords.is_empty() {
                return None;
            }
            let matched = scorer.compare(query, &chords);
            if matched.score < settings.min_score {
                return None;
            }
            Some(ProgressionHit {
                spotify_id: entry.track.spotify_id.clone(),
                name: entry.track.name.clone(),
                artist_name: entry.track.artist_name.clone(),
                chords,
                matched,
            })
        })
        .collect();

    hits.sort_by(|a, b| {
        b.score()
            .total_cmp(&a.score())
            .then_with(|| a.spotify_id.cmp(&b.spotify_id))
    });
    hits.truncate(settings.max_results);

    info!(
        "Progression search for {:?} matched {} tracks",
        query,
        hits.len()
    );
    hits
}
