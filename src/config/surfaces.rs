/// Keyword lists used to guess the court surface from a tournament name.
///
/// Keywords are matched as lowercase substrings. Clay is checked first, so a
/// name matching both lists is treated as clay.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceKeywords {
    pub clay: Vec<String>,
    pub grass: Vec<String>,
}

impl SurfaceKeywords {
    pub fn new(clay: &[&str], grass: &[&str]) -> Self {
        Self {
            clay: clay.iter().map(|k| k.to_lowercase()).collect(),
            grass: grass.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Append extra keywords, e.g. from a comma-separated environment value
    pub fn extend_clay<I: IntoIterator<Item = String>>(&mut self, keywords: I) {
        extend_unique(&mut self.clay, keywords);
    }

    pub fn extend_grass<I: IntoIterator<Item = String>>(&mut self, keywords: I) {
        extend_unique(&mut self.grass, keywords);
    }
}

impl Default for SurfaceKeywords {
    fn default() -> Self {
        Self::new(
            &[
                "roland",
                "garros",
                "french",
                "rome",
                "madrid",
                "monte carlo",
                "barcelona",
                "clay",
            ],
            &["wimbledon", "queens", "queen's", "halle", "eastbourne", "grass"],
        )
    }
}

fn extend_unique<I: IntoIterator<Item = String>>(target: &mut Vec<String>, keywords: I) {
    for keyword in keywords {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && !target.contains(&keyword) {
            target.push(keyword);
        }
    }
}

/// Split a comma-separated keyword list
pub fn parse_keyword_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_skips_duplicates_and_blanks() {
        let mut keywords = SurfaceKeywords::default();
        let before = keywords.clay.len();

        keywords.extend_clay(parse_keyword_list(" Hamburg , clay,, "));

        assert_eq!(keywords.clay.len(), before + 1);
        assert_eq!(keywords.clay.last().map(String::as_str), Some("hamburg"));
    }
}
