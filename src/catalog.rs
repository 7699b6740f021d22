//! Demo movie catalog embedded at build time.
//!
//! The UI is purely client-side; the catalog stands in for whatever backend
//! would normally serve movie metadata.

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_CATALOG: &str = include_str!("../data/movies.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed movie catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub year: u16,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Average community rating on the five-star scale; may carry a half step.
    #[serde(default)]
    pub avg_rating: f32,
}

/// Parse a catalog document.
///
/// # Errors
/// Returns [`CatalogError::Parse`] when the document is not valid catalog JSON.
pub fn parse_catalog(raw: &str) -> Result<Vec<Movie>, CatalogError> {
    Ok(serde_json::from_str(raw)?)
}

static CATALOG: Lazy<Vec<Movie>> = Lazy::new(|| match parse_catalog(EMBEDDED_CATALOG) {
    Ok(movies) => movies,
    Err(e) => {
        log::error!("failed to load embedded movie catalog: {e}");
        Vec::new()
    }
});

/// All movies in the embedded catalog.
#[must_use]
pub fn movies() -> &'static [Movie] {
    &CATALOG
}

/// Sorted, deduplicated genre names across the catalog, for the filter bar.
#[must_use]
pub fn genres() -> Vec<String> {
    let mut genres: Vec<String> = movies()
        .iter()
        .flat_map(|movie| movie.genres.iter().cloned())
        .collect();
    genres.sort();
    genres.dedup();
    genres
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let movies = parse_catalog(EMBEDDED_CATALOG).expect("embedded catalog should be valid");
        assert!(!movies.is_empty());
        assert!(movies.iter().all(|m| m.avg_rating >= 0.0 && m.avg_rating <= 5.0));
    }

    #[test]
    fn malformed_document_reports_parse_error() {
        let err = parse_catalog("{not json").expect_err("should reject junk");
        assert!(format!("{err}").contains("malformed movie catalog"));
    }

    #[test]
    fn genres_are_sorted_and_unique() {
        let genres = genres();
        let mut sorted = genres.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(genres, sorted);
        assert!(!genres.is_empty());
    }
}
