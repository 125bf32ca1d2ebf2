use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use super::data::Movie;

/// Catalog shipped inside the binary
const BUNDLED_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Errors raised while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog contains no movies")]
    Empty,
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The Catalog is the fixed, ordered list of movies available for picking.
///
/// It is built once at startup and never changes afterwards. An empty
/// catalog cannot be constructed, so every index handed out by the store
/// points at a real movie.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Arc<[Movie]>,
}

impl Catalog {
    /// Build a catalog from a list of movies, rejecting an empty list
    pub fn new(movies: Vec<Movie>) -> Result<Self, CatalogError> {
        if movies.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Catalog { movies: movies.into() })
    }

    /// The catalog embedded in the binary at build time
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parse a JSON array of movie records
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let movies: Vec<Movie> = serde_json::from_str(json)?;
        Self::new(movies)
    }

    /// Load a replacement catalog from disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;

        tracing::info!(path = %path.display(), movies = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Number of movies in the catalog (always at least one)
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// Check whether a movie belongs to this catalog (by identifier)
    pub fn contains(&self, movie: &Movie) -> bool {
        self.movies.iter().any(|m| m.id() == movie.id())
    }
}

/// A source of random catalog positions.
///
/// Returning `None`, or an index outside `0..len`, counts as a failure of
/// the source. The store absorbs it by falling back to the first movie.
pub trait RandomSource {
    fn next_index(&mut self, len: usize) -> Option<usize>;
}

/// Random source backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    /// Production source seeded from the operating system
    pub fn from_entropy() -> Self {
        RngSource(StdRng::from_entropy())
    }

    /// Deterministic source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.0.gen_range(0..len))
    }
}

/// The CatalogStore pairs an immutable catalog with a random source
/// and answers "pick me a movie".
pub struct CatalogStore<R = RngSource<StdRng>> {
    catalog: Catalog,
    rng: R,
}

impl CatalogStore {
    /// Create a store with an entropy-seeded random source
    pub fn new(catalog: Catalog) -> Self {
        Self::with_source(catalog, RngSource::from_entropy())
    }
}

impl<R: RandomSource> CatalogStore<R> {
    pub fn with_source(catalog: Catalog, rng: R) -> Self {
        CatalogStore { catalog, rng }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Pick a uniformly random position in the catalog.
    ///
    /// Falls back to position 0 when the random source fails.
    pub fn pick_random_index(&mut self) -> usize {
        let len = self.catalog.len();

        match self.rng.next_index(len) {
            Some(index) if index < len => index,
            other => {
                tracing::warn!(?other, len, "random source failed, falling back to first movie");
                0
            }
        }
    }

    /// Pick a uniformly random movie from the catalog
    pub fn pick_random(&mut self) -> &Movie {
        let index = self.pick_random_index();
        &self.catalog.movies[index]
    }
}

impl<R> std::fmt::Debug for CatalogStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("movies", &self.catalog.len())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    /// Four-movie catalog used across state tests
    pub(crate) fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Movie::new("A", "Drama", 2001, 7.1, "first", "a"),
            Movie::new("B", "Comedy", 2002, 6.2, "second", "b"),
            Movie::new("C", "Horror", 2003, 5.3, "third", "c"),
            Movie::new("D", "Western", 2004, 8.4, "fourth", "d"),
        ])
        .unwrap()
    }

    /// Random source that replays a fixed script, then fails
    pub(crate) struct Scripted(pub Vec<Option<usize>>);

    impl RandomSource for Scripted {
        fn next_index(&mut self, _len: usize) -> Option<usize> {
            if self.0.is_empty() {
                None
            } else {
                self.0.remove(0)
            }
        }
    }

    #[test]
    fn test_bundled_catalog_is_well_formed() {
        let catalog = Catalog::bundled().unwrap();

        assert_eq!(catalog.len(), 4);
        let keys: Vec<&str> = catalog.movies().iter().map(|m| m.image_key()).collect();
        assert_eq!(keys, ["interstellar", "inception", "green_mile", "shawshank"]);
        assert!(catalog
            .movies()
            .iter()
            .all(|m| (0.0..=10.0).contains(&m.rating())));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title":"Solo","genre":"Drama","year":1990,"rating":7.5,"synopsis":"x","image":"solo"}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.movies()[0].title(), "Solo");

        let missing = file.path().with_extension("missing");
        assert!(matches!(Catalog::load(&missing), Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_pick_random_always_returns_a_member() {
        for size in 1..=8 {
            let movies = (0..size)
                .map(|i| Movie::new(format!("M{i}"), "Drama", 2000 + i, 5.0, "", format!("m{i}")))
                .collect();
            let catalog = Catalog::new(movies).unwrap();
            let mut store = CatalogStore::with_source(catalog.clone(), RngSource::seeded(size as u64));

            for _ in 0..200 {
                let movie = store.pick_random();
                assert!(catalog.contains(movie));
            }
        }
    }

    #[test]
    fn test_pick_random_covers_every_movie() {
        let catalog = sample_catalog();
        let mut store = CatalogStore::with_source(catalog.clone(), RngSource::seeded(42));

        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            seen.insert(store.pick_random().id());
        }

        assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn test_failed_source_falls_back_to_first_movie() {
        let catalog = sample_catalog();
        let first = catalog.movies()[0].id();
        let mut store = CatalogStore::with_source(catalog, Scripted(vec![None, Some(99), Some(2)]));

        // No value, then out of range, then a real pick
        assert_eq!(store.pick_random().id(), first);
        assert_eq!(store.pick_random().id(), first);
        assert_eq!(store.pick_random_index(), 2);
        // Script exhausted
        assert_eq!(store.pick_random_index(), 0);
    }
}
