use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extensions tried, in order, when resolving a poster key
const POSTER_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

#[derive(Debug, Clone, Error)]
pub enum PosterError {
    #[error("no poster found for key {0:?}")]
    Missing(String),
    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("poster task failed: {0}")]
    Join(String),
}

/// Decoded poster pixels, ready to hand to the renderer
#[derive(Debug, Clone)]
pub struct Poster {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major
    pub pixels: Vec<u8>,
}

/// Finds poster files for catalog image keys
#[derive(Debug, Clone)]
pub struct PosterLibrary {
    dir: PathBuf,
}

impl PosterLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        PosterLibrary { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve an image key to a poster file on disk.
    ///
    /// Keys must be plain file stems; anything that could escape the poster
    /// directory never resolves.
    pub fn resolve(&self, key: &str) -> Option<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return None;
        }

        POSTER_EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{key}.{ext}")))
            .find(|path| path.is_file())
    }

    /// Resolve and decode the poster for a key
    pub async fn load(&self, key: String, max_height: u32) -> Result<Poster, PosterError> {
        let path = self.resolve(&key).ok_or(PosterError::Missing(key))?;
        load_poster(path, max_height).await
    }
}

/// Decode a poster file off the UI thread
pub async fn load_poster(path: PathBuf, max_height: u32) -> Result<Poster, PosterError> {
    // Spawn blocking because decoding and resampling are CPU-bound
    tokio::task::spawn_blocking(move || decode_poster(&path, max_height))
        .await
        .map_err(|e| PosterError::Join(e.to_string()))?
}

/// Decode a poster and shrink it to at most `max_height` pixels tall.
/// Smaller images are left at their native size.
pub fn decode_poster(path: &Path, max_height: u32) -> Result<Poster, PosterError> {
    let img = image::open(path).map_err(|e| PosterError::Decode {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let img = if max_height > 0 && img.height() > max_height {
        let width = (u64::from(img.width()) * u64::from(max_height) / u64::from(img.height())).max(1);
        img.resize_exact(width as u32, max_height, FilterType::Lanczos3)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    tracing::debug!(path = %path.display(), width, height, "decoded poster");

    Ok(Poster {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
