//! Track relation queries: same key, similar duration, same release year and
//! same section structure.
//!
//! Every query skips the target itself and keeps catalog order. A target
//! missing the relevant fact relates to nothing.

use super::{CatalogEntry, TrackFacts};
use crate::config::RelationSettings;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RELEASE_YEAR: Regex = Regex::new(r"^\d{4}").expect("Invalid release year pattern");
}

/// Leading four-digit year of a release date.
pub fn release_year(release_date: &str) -> Option<&str> {
    RELEASE_YEAR.find(release_date).map(|m| m.as_str())
}

fn others<'a>(
    target: &'a TrackFacts,
    catalog: &'a [CatalogEntry],
) -> impl Iterator<Item = &'a TrackFacts> + 'a {
    catalog
        .iter()
        .map(|entry| &entry.track)
        .filter(move |track| track.spotify_id != target.spotify_id)
}

pub fn same_key<'a>(target: &'a TrackFacts, catalog: &'a [CatalogEntry]) -> Vec<&'a TrackFacts> {
    let (Some(key), Some(scale)) = (target.key.as_deref(), target.scale.as_deref()) else {
        return Vec::new();
    };
    others(target, catalog)
        .filter(|track| track.key.as_deref() == Some(key) && track.scale.as_deref() == Some(scale))
        .collect()
}

pub fn similar_duration<'a>(
    target: &'a TrackFacts,
    catalog: &'a [CatalogEntry],
    settings: &RelationSettings,
) -> Vec<&'a TrackFacts> {
    let Some(duration_ms) = target.duration_ms else {
        return Vec::new();
    };
    let range_ms = settings.duration_range_secs.saturating_mul(1000);
    others(target, catalog)
        .filter(|track| {
            track
                .duration_ms
                .is_some_and(|other| other.abs_diff(duration_ms) <= range_ms)
        })
        .collect()
}

pub fn same_year<'a>(target: &'a TrackFacts, catalog: &'a [CatalogEntry]) -> Vec<&'a TrackFacts> {
    let Some(year) = target.release_date.as_deref().and_then(release_year) else {
        return Vec::new();
    };
    others(target, catalog)
        .filter(|track| track.release_date.as_deref().and_then(release_year) == Some(year))
        .collect()
}

pub fn same_structure<'a>(
    target: &'a TrackFacts,
    catalog: &'a [CatalogEntry],
) -> Vec<&'a TrackFacts> {
    if target.sections.is_empty() {
        return Vec::new();
    }
    others(target, catalog)
        .filter(|track| track.sections == target.sections)
        .collect()
}
