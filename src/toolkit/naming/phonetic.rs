

use rand::Rng;
use strum::{EnumIter, IntoEnumIterator};

use crate::capitalize;

/// How two words are spliced. Lengths are in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum BlendStrategy {
    /// First half of one, second half of the other.
    HalfSplit,
    /// First two thirds of one, last two thirds of the other.
    TwoThirds,
    /// Merge on a shared 3/2/1 character overlap, else half split.
    Portmanteau,
    /// Half split that keeps one extra character of the first word.
    ConsonantKeep,
}

/// Blends with a uniformly chosen strategy.
pub fn blend<R: Rng + ?Sized>(w1: &str, w2: &str, rng: &mut R) -> String {
    let strategies: Vec<BlendStrategy> = BlendStrategy::iter().collect();
    let strategy = strategies[rng.gen_range(0..strategies.len())];
    blend_with(strategy, w1, w2)
}


pub fn blend_with(strategy: BlendStrategy, w1: &str, w2: &str) -> String {
    let a: Vec<char> = w1.chars().collect();
    let b: Vec<char> = w2.chars().collect();

    let joined = match strategy {
        BlendStrategy::HalfSplit => splice(&a, a.len() / 2, &b, b.len() / 2),
        BlendStrategy::TwoThirds => splice(&a, 2 * a.len() / 3, &b, b.len() / 3),
        BlendStrategy::Portmanteau => return portmanteau(w1, w2),
        BlendStrategy::ConsonantKeep => {
            splice(&a, (a.len() / 2 + 1).min(a.len()), &b, b.len() / 2)
        }
    };
    capitalize(&joined)
}

/// `portmanteau("Tech", "Chain") == "Techain"`.
pub fn portmanteau(w1: &str, w2: &str) -> String {
    let a: Vec<char> = w1.to_lowercase().chars().collect();
    let b: Vec<char> = w2.to_lowercase().chars().collect();

    for overlap in (1..=3).rev() {
        if a.len() >= overlap && b.len() >= overlap && a[a.len() - overlap..] == b[..overlap] {
            let tail: String = w2.chars().skip(overlap).collect();
            return capitalize(&format!("{w1}{tail}"));
        }
    }
    blend_with(BlendStrategy::HalfSplit, w1, w2)
}

fn splice(a: &[char], head: usize, b: &[char], tail_from: usize) -> String {
    a[..head].iter().chain(b[tail_from..].iter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_portmanteau_overlap() {
        assert_eq!(portmanteau("Tech", "Chain"), "Techain");
        assert_eq!(portmanteau("smog", "fog"), "Smog");
        assert_eq!(portmanteau("Nova", "Axis"), "Novaxis");
    }

    #[test]
    fn test_portmanteau_without_overlap_falls_back() {
        assert_eq!(portmanteau("Mesh", "Pulse"), blend_with(BlendStrategy::HalfSplit, "Mesh", "Pulse"));
    }

    #[test]
    fn test_strategies() {
        assert_eq!(blend_with(BlendStrategy::HalfSplit, "Smart", "Sensor"), "Smsor");
        assert_eq!(blend_with(BlendStrategy::TwoThirds, "Smart", "Sensor"), "Smansor");
        assert_eq!(blend_with(BlendStrategy::ConsonantKeep, "Smart", "Sensor"), "Smasor");
    }

    #[test]
    fn test_consonant_keep_clamps() {
        assert_eq!(blend_with(BlendStrategy::ConsonantKeep, "a", "bc"), "Ac");
        assert_eq!(blend_with(BlendStrategy::HalfSplit, "", ""), "");
    }

    #[test]
    fn test_char_based_slicing() {
        assert_eq!(blend_with(BlendStrategy::HalfSplit, "Café", "Über"), "Caer");
    }

    #[test]
    fn test_random_blend_is_one_of_the_strategies() {
        let mut rng = StdRng::seed_from_u64(7);
        let options: Vec<String> = BlendStrategy::iter()
            .map(|s| blend_with(s, "Neural", "Mesh"))
            .collect();
        for _ in 0..20 {
            assert!(options.contains(&blend("Neural", "Mesh", &mut rng)));
        }
    }

    #[test]
    fn test_output_capitalized() {
        assert_eq!(blend_with(BlendStrategy::HalfSplit, "nEURAL", "MESH"), "Neush");
    }
}
