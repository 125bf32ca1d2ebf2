/// Poster asset module
///
/// This module handles:
/// - Resolving catalog image keys to poster files
/// - Decoding and downscaling posters off the UI thread
/// - Caching decoded posters for the card and detail views

pub mod cache;
pub mod poster;
