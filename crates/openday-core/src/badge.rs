//! Decorative badge draw for survey submissions.
//!
//! The image list is fixed and element-uniform: green appears three times,
//! so a draw lands on green with probability 3/8 while every other color
//! sits at 1/8. The duplicate entries are intentional, carried over from
//! the live site's asset list.

use rand::Rng;
use rand::seq::SliceRandom;

/// Badge image paths, drawn from uniformly on submit.
pub const BADGE_IMAGES: [&str; 8] = [
    "/badges/green-badge.png",
    "/badges/blue-badge.png",
    "/badges/green-badge.png",
    "/badges/yellow-badge.png",
    "/badges/green-badge.png",
    "/badges/red-badge.png",
    "/badges/pink-badge.png",
    "/badges/cyan-badge.png",
];

/// Draw one badge image path uniformly from [`BADGE_IMAGES`].
pub fn draw_badge<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // The list is non-empty, so choose never returns None.
    BADGE_IMAGES.choose(rng).copied().unwrap_or(BADGE_IMAGES[0])
}

/// Derive the badge color name from an image path: the final path segment
/// up to (excluding) its first hyphen.
///
/// `/badges/green-badge.png` → `green`. A path with no hyphen in its final
/// segment yields the whole segment.
pub fn badge_name(path: &str) -> &str {
    let segment = path.rsplit('/').next().unwrap_or(path);
    segment.split('-').next().unwrap_or(segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn name_derivation_for_every_fixed_path() {
        let expected = [
            "green", "blue", "green", "yellow", "green", "red", "pink", "cyan",
        ];
        for (path, want) in BADGE_IMAGES.iter().zip(expected) {
            assert_eq!(badge_name(path), want, "path {path}");
        }
    }

    #[test]
    fn name_derivation_without_hyphen() {
        assert_eq!(badge_name("/badges/gold.png"), "gold.png");
        assert_eq!(badge_name("plain"), "plain");
    }

    #[test]
    fn name_derivation_ignores_earlier_segments() {
        assert_eq!(badge_name("/some-dir/with-hyphens/red-badge.png"), "red");
    }

    #[test]
    fn draw_is_element_uniform() {
        // 10,000 seeded draws; each of the 8 slots should land near 1/8.
        // Green occupies three slots, so it aggregates to ~3/8.
        let mut rng = StdRng::seed_from_u64(0x0bad_5eed);
        let trials = 10_000usize;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(draw_badge(&mut rng)).or_default() += 1;
        }

        let expected_green = trials as f64 * 3.0 / 8.0;
        let expected_other = trials as f64 / 8.0;
        // 4 sigma for a binomial with p=1/8: ~132 over 10k trials.
        let tolerance = 200.0;

        for color in ["blue", "yellow", "red", "pink", "cyan"] {
            let path = format!("/badges/{color}-badge.png");
            let n = counts.get(path.as_str()).copied().unwrap_or(0) as f64;
            assert!(
                (n - expected_other).abs() < tolerance,
                "{color}: {n} draws, expected ~{expected_other}"
            );
        }
        let green = counts.get("/badges/green-badge.png").copied().unwrap_or(0) as f64;
        assert!(
            (green - expected_green).abs() < tolerance * 2.0,
            "green: {green} draws, expected ~{expected_green}"
        );
    }

    #[test]
    fn draw_only_returns_known_paths() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let path = draw_badge(&mut rng);
            assert!(BADGE_IMAGES.contains(&path));
        }
    }
}
