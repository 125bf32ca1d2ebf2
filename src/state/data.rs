/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog layer and the UI layer.

use serde::Deserialize;
use uuid::Uuid;

/// Represents a single movie in the catalog
///
/// Movies are immutable once built. The identifier is never read from
/// catalog data; every deserialized record gets a fresh one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    /// Unique identifier generated at construction
    #[serde(skip_deserializing, default = "Uuid::new_v4")]
    id: Uuid,
    /// Display title (e.g., "Interstellar")
    title: String,
    /// Genre label (e.g., "Science Fiction")
    genre: String,
    /// Release year
    year: i32,
    /// Rating on a 0.0 to 10.0 scale
    rating: f32,
    /// Plot summary shown in the detail view
    synopsis: String,
    /// Asset key used to find the bundled poster (e.g., "interstellar")
    #[serde(rename = "image")]
    image_key: String,
}

impl Movie {
    /// Create a new movie with a freshly generated identifier
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
        rating: f32,
        synopsis: impl Into<String>,
        image_key: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            genre: genre.into(),
            year,
            rating,
            synopsis: synopsis.into(),
            image_key: image_key.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }

    pub fn image_key(&self) -> &str {
        &self.image_key
    }

    /// Rating with one decimal place (e.g., "8.6")
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}
