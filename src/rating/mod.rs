pub mod loader;
pub mod resolver;
pub mod surface;
pub mod table;
pub mod types;

pub use loader::load_tables;
pub use resolver::{normalize, resolve, resolve_with_rule, MatchRule, Resolution};
pub use surface::SurfaceClassifier;
pub use table::{RatingTable, RatingTables};
pub use types::{RatingRecord, RatingRow, RatingValue, Surface, Tour, DEFAULT_RATING};
