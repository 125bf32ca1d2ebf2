/// Widgets for the movie screen
pub mod card;
pub mod detail;
pub mod placeholder;
pub mod spin;
pub mod style;
