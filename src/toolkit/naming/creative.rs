

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::meaningful::select_shortest;
use super::models::{parse_domain_parts, Tone};
use super::validator::is_valid_name;
use super::vocabulary::{domain_theme_words, PREFIXES, SUFFIXES, THEME_WORDS};

const PREFIX_SAMPLE: usize = 10;
const WORD_SAMPLE: usize = 10;
const PARTNER_SAMPLE: usize = 5;
const DOMAIN_PARTNER_SAMPLE: usize = 3;
const RANDOM_MIN_LEN: usize = 5;
const RANDOM_MAX_LEN: usize = 18;
const MAX_RANDOM_COMBINATIONS: usize = 1000;

/// Bank-driven names that ignore the request's concepts.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreativeGenerator;

impl CreativeGenerator {
    pub fn new() -> Self {
        Self
    }


    pub fn generate<R: Rng + ?Sized>(
        &self,
        domain: Option<&str>,
        tone: &Tone,
        count: usize,
        rng: &mut R,
    ) -> Vec<String> {
        let mut names: HashSet<String> = HashSet::new();

        for prefix in sample(PREFIXES, PREFIX_SAMPLE, rng) {
            for word in sample(THEME_WORDS, PARTNER_SAMPLE, rng) {
                names.insert(format!("{prefix}{word}"));
            }
        }

        for word in sample(THEME_WORDS, WORD_SAMPLE, rng) {
            for suffix in sample(SUFFIXES, PARTNER_SAMPLE, rng) {
                names.insert(format!("{word}{suffix}"));
            }
        }

        if let Some(domain) = domain {
            for tag in parse_domain_parts(domain) {
                for dword in domain_theme_words(tag) {
                    for prefix in sample(PREFIXES, DOMAIN_PARTNER_SAMPLE, rng) {
                        names.insert(format!("{prefix}{dword}"));
                    }
                    for suffix in sample(SUFFIXES, DOMAIN_PARTNER_SAMPLE, rng) {
                        names.insert(format!("{dword}{suffix}"));
                    }
                }
            }
        }

        for _ in 0..count.saturating_mul(2).min(MAX_RANDOM_COMBINATIONS) {
            let name = match rng.gen_range(0..3) {
                0 => format!("{}{}", pick(PREFIXES, rng), pick(THEME_WORDS, rng)),
                1 => format!("{}{}", pick(THEME_WORDS, rng), pick(SUFFIXES, rng)),
                _ => format!("{}{}", pick(THEME_WORDS, rng), pick(THEME_WORDS, rng)),
            };
            if (RANDOM_MIN_LEN..=RANDOM_MAX_LEN).contains(&name.chars().count()) {
                names.insert(name);
            }
        }

        let total = names.len();
        names.retain(|name| is_valid_name(name, tone));
        debug!("Creative: {} combinations, {} valid", total, names.len());

        select_shortest(names, count)
    }
}

fn sample<'a, R: Rng + ?Sized>(bank: &'a [&'static str], amount: usize, rng: &mut R) -> Vec<&'a str> {
    bank.choose_multiple(rng, amount).copied().collect()
}

fn pick<R: Rng + ?Sized>(bank: &[&'static str], rng: &mut R) -> &'static str {
    bank[rng.gen_range(0..bank.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::naming::models::DomainTag;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_names_are_valid_and_capped() {
        let mut rng = StdRng::seed_from_u64(1);
        let tone = Tone::Professional;
        let names = CreativeGenerator::new().generate(None, &tone, 5, &mut rng);
        assert_eq!(names.len(), 5);
        assert!(names.iter().all(|n| is_valid_name(n, &tone)));
    }

    #[test]
    fn test_domain_words_used() {
        let mut rng = StdRng::seed_from_u64(2);
        let names = CreativeGenerator::new().generate(Some("IoT"), &Tone::Cool, 1000, &mut rng);
        let iot = domain_theme_words(DomainTag::Iot);
        assert!(names.iter().any(|n| iot.iter().any(|w| n.contains(w))));
    }

    #[test]
    fn test_compound_domain_activates_both_banks() {
        let mut rng = StdRng::seed_from_u64(4);
        let names = CreativeGenerator::new().generate(Some("AI and IoT"), &Tone::Cool, 1000, &mut rng);
        let has = |tag| names.iter().any(|n| domain_theme_words(tag).iter().any(|w| n.contains(w)));
        assert!(has(DomainTag::Ai));
        assert!(has(DomainTag::Iot));
    }

    #[test]
    fn test_oversized_count_is_bounded() {
        let mut rng = StdRng::seed_from_u64(16);
        let tone = Tone::Funny;
        let names = CreativeGenerator::new().generate(None, &tone, usize::MAX, &mut rng);
        assert!(!names.is_empty());
        assert!(names.iter().all(|n| is_valid_name(n, &tone)));
    }

    #[test]
    fn test_minimal_tone() {
        let mut rng = StdRng::seed_from_u64(8);
        let names = CreativeGenerator::new().generate(Some("Gaming"), &Tone::Minimal, 10, &mut rng);
        assert!(!names.is_empty());
        assert!(names.iter().all(|n| n.chars().count() <= 10));
    }

    #[test]
    fn test_sorted_and_unique() {
        let mut rng = StdRng::seed_from_u64(13);
        let names = CreativeGenerator::new().generate(None, &Tone::Funny, 20, &mut rng);
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        for pair in names.windows(2) {
            assert!((pair[0].len(), &pair[0]) <= (pair[1].len(), &pair[1]));
        }
    }
}
