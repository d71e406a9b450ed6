//! The episode source: a catalog document embedded at build time.

use once_cell::sync::Lazy;
use tracing::{info, warn};

use crate::api::models::{Episode, EpisodeRecord};
use crate::error::CatalogError;

const CATALOG_JSON: &str = include_str!("../../assets/episodes.json");

static CATALOG: Lazy<Vec<Episode>> = Lazy::new(|| match parse_catalog(CATALOG_JSON) {
    Ok(episodes) => {
        info!(count = episodes.len(), "loaded episode catalog");
        episodes
    }
    Err(err) => {
        warn!(%err, "episode catalog unavailable");
        Vec::new()
    }
});

/// All episodes, newest first.
pub fn episodes() -> &'static [Episode] {
    &CATALOG
}

/// Parses a catalog document into episodes sorted newest first. Records
/// without a publication date sort last.
pub fn parse_catalog(raw: &str) -> Result<Vec<Episode>, CatalogError> {
    let records: Vec<EpisodeRecord> = serde_json::from_str(raw)?;
    let mut episodes: Vec<Episode> = records.into_iter().map(Episode::from).collect();
    episodes.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    Ok(episodes)
}

pub fn find_by_slug<'a>(episodes: &'a [Episode], slug: &str) -> Option<&'a Episode> {
    episodes.iter().find(|episode| episode.slug() == slug)
}
