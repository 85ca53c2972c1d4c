

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::expander::SemanticExpander;
use super::models::Tone;
use super::phonetic::blend;
use super::validator::is_valid_name;
use super::vocabulary::tone_words;
use crate::capitalize;

const SEED_CONCEPTS: usize = 3;
const SEED_WORDS: usize = 10;
const MAX_BLEND_ATTEMPTS: usize = 1000;
const COMPOUND_MIN_LEN: usize = 5;
const COMPOUND_MAX_LEN: usize = 15;

/// Names derived from the request's own concepts.
pub struct MeaningfulGenerator {
    expander: SemanticExpander,
}

impl MeaningfulGenerator {
    pub fn new(expander: SemanticExpander) -> Self {
        Self { expander }
    }

    /// Concept-led blends and compounds first, then random pool blends until
    /// three times `count` candidates exist. Shortest names win.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        concepts: &[String],
        domain: Option<&str>,
        custom_prompt: Option<&str>,
        tone: &Tone,
        count: usize,
        rng: &mut R,
    ) -> Vec<String> {
        let mut pool = self.expander.expand(concepts, domain, custom_prompt);
        pool.extend(tone_words(tone).iter().map(|w| (*w).to_string()));

        let mut names: HashSet<String> = HashSet::new();

        for concept in concepts.iter().take(SEED_CONCEPTS) {
            let lowered = concept.to_lowercase();
            let head = capitalize(concept);
            for word in pool.iter().take(SEED_WORDS) {
                if *word == lowered {
                    continue;
                }
                let tail = capitalize(word);

                let blended = blend(&head, &tail, rng);
                if is_valid_name(&blended, tone) {
                    names.insert(blended);
                }

                let compound = format!("{head}{tail}");
                let len = compound.chars().count();
                if (COMPOUND_MIN_LEN..=COMPOUND_MAX_LEN).contains(&len)
                    && is_valid_name(&compound, tone)
                {
                    names.insert(compound);
                }
            }
        }
        let seeded = names.len();

        let mut attempts = 0;
        while names.len() < count.saturating_mul(3) && attempts < MAX_BLEND_ATTEMPTS {
            if pool.len() >= 2 {
                let pair: Vec<&String> = pool.choose_multiple(rng, 2).collect();
                let blended = blend(pair[0], pair[1], rng);
                if is_valid_name(&blended, tone) {
                    names.insert(blended);
                }
            }
            attempts += 1;
        }

        debug!(
            "Meaningful: pool={}, seeded={}, total={}, attempts={}",
            pool.len(),
            seeded,
            names.len(),
            attempts
        );
        select_shortest(names, count)
    }
}

/// Sorted by (length, text), first `count`.
pub(crate) fn select_shortest(names: HashSet<String>, count: usize) -> Vec<String> {
    let mut names: Vec<String> = names.into_iter().collect();
    names.sort_by(|a, b| a.chars().count().cmp(&b.chars().count()).then_with(|| a.cmp(b)));
    names.truncate(count);
    names
}
