pub mod settings;
pub mod surfaces;

pub use settings::AppConfig;
pub use surfaces::SurfaceKeywords;
