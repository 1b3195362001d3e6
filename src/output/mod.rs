//! Output rendering for all entity views
//!
//! Each entity gets a render function taking a writer, a slice and a
//! format; table layouts are fixed-width box drawings, JSON is pretty
//! printed and YAML/CSV go through their serializers. Renderers never
//! touch the network or the clock.

pub mod brackets;
pub mod format;
pub mod games;
pub mod matches;
pub mod table;
pub mod tournaments;

pub use brackets::render_brackets;
pub use format::{Format, TournamentFormat};
pub use games::render_games;
pub use matches::render_matches;
pub use tournaments::render_tournaments;
