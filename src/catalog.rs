//! Fixed catalog of well-known AI-powered products for the surprise flow.

use rand::seq::SliceRandom;

/// Well-known consumer products, used by `tellme surprise`.
///
/// Names picked from here skip validation: the list is curated, so the
/// yes/no round trip would be wasted.
pub const POPULAR_TOOLS: [&str; 8] = [
    "Netflix",
    "Spotify",
    "Gmail",
    "Google Maps",
    "YouTube",
    "TikTok",
    "Amazon",
    "Grammarly",
];

/// Pick a random product from the catalog.
pub fn surprise() -> &'static str {
    POPULAR_TOOLS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(POPULAR_TOOLS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surprise_picks_from_catalog() {
        for _ in 0..100 {
            let pick = surprise();
            assert!(POPULAR_TOOLS.contains(&pick));
        }
    }

    #[test]
    fn test_catalog_has_eight_entries() {
        assert_eq!(POPULAR_TOOLS.len(), 8);
    }
}
