/// State management module
///
/// This module handles all application state, including:
/// - The movie model (data.rs)
/// - The immutable catalog and random picking (catalog.rs)
/// - The on-screen presentation state machine (presentation.rs)
/// - Startup settings (settings.rs)

pub mod catalog;
pub mod data;
pub mod presentation;
pub mod settings;
