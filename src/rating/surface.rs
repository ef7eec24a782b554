use super::types::Surface;
use crate::config::surfaces::SurfaceKeywords;

/// Maps tournament names to a court surface
#[derive(Debug, Clone, Default)]
pub struct SurfaceClassifier {
    keywords: SurfaceKeywords,
}

impl SurfaceClassifier {
    pub fn new(keywords: SurfaceKeywords) -> Self {
        Self { keywords }
    }

    /// Hard court unless a clay or grass keyword appears in the name
    pub fn classify(&self, tournament_name: &str) -> Surface {
        let name = tournament_name.to_lowercase();
        if name.trim().is_empty() {
            return Surface::Hard;
        }

        if contains_any(&name, &self.keywords.clay) {
            Surface::Clay
        } else if contains_any(&name, &self.keywords.grass) {
            Surface::Grass
        } else {
            Surface::Hard
        }
    }
}

fn contains_any(name: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| name.contains(keyword.as_str()))
}
