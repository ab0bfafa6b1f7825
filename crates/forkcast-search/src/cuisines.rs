//! The standing cuisine list backing "any cuisine" searches.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Cuisine terms drawn from when the caller expresses no preference.
pub const TOP_CUISINES: [&str; 15] = [
    "American",
    "Mexican",
    "Italian",
    "Chinese",
    "Japanese",
    "Indian",
    "Thai",
    "Mediterranean",
    "French",
    "Korean",
    "Vietnamese",
    "Spanish",
    "Middle Eastern",
    "Greek",
    "Caribbean",
];

/// Draws `count` terms from the standing list. Draws are independent, so
/// the same cuisine can come up more than once.
pub fn draw_any_cuisine_terms<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count)
        .filter_map(|_| TOP_CUISINES.choose(rng))
        .map(|term| (*term).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn draws_requested_number_of_terms() {
        let mut rng = StdRng::seed_from_u64(7);
        let terms = draw_any_cuisine_terms(&mut rng, 3);
        assert_eq!(terms.len(), 3);
    }

    #[test]
    fn drawn_terms_come_from_the_standing_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for term in draw_any_cuisine_terms(&mut rng, 50) {
            assert!(
                TOP_CUISINES.contains(&term.as_str()),
                "unexpected term: {term}"
            );
        }
    }

    #[test]
    fn same_seed_draws_same_terms() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            draw_any_cuisine_terms(&mut a, 3),
            draw_any_cuisine_terms(&mut b, 3)
        );
    }
}
