use iced::widget::image::Handle;
use std::collections::HashMap;

use super::poster::{Poster, PosterError};

/// Load state of a single poster
#[derive(Debug, Clone)]
pub enum PosterSlot {
    Loading,
    Ready(Handle),
    /// Lookup or decode failed; the UI shows the placeholder
    Missing,
}

/// In-memory poster cache keyed by image key
#[derive(Debug, Default)]
pub struct PosterCache {
    slots: HashMap<String, PosterSlot>,
}

impl PosterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as loading. Returns false if it is already known,
    /// so each poster is requested at most once.
    pub fn begin(&mut self, key: &str) -> bool {
        if self.slots.contains_key(key) {
            return false;
        }
        self.slots.insert(key.to_string(), PosterSlot::Loading);
        true
    }

    /// Store the outcome of a poster load
    pub fn finish(&mut self, key: String, result: Result<Poster, PosterError>) {
        let slot = match result {
            Ok(poster) => PosterSlot::Ready(Handle::from_rgba(poster.width, poster.height, poster.pixels)),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "poster unavailable, using placeholder");
                PosterSlot::Missing
            }
        };
        self.slots.insert(key, slot);
    }

    /// Ready handle for a key, if one has been decoded
    pub fn handle(&self, key: &str) -> Option<&Handle> {
        match self.slots.get(key) {
            Some(PosterSlot::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    pub fn slot(&self, key: &str) -> Option<&PosterSlot> {
        self.slots.get(key)
    }
}
