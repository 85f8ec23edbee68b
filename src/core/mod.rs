//! Core-Domänentypen: Features, Editor-Modi, Tile-Quelle.

pub mod editor_mode;
pub mod feature;
pub mod tile_source;

pub use editor_mode::EditorMode;
pub use feature::{Feature, FeatureCollection};
pub use tile_source::TileSourceConfig;
