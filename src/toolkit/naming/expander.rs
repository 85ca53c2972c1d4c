

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use super::models::parse_domain_parts;
use super::thesaurus::SynonymSource;
use super::vocabulary::{domain_words, tech_words};

const LEMMAS_PER_SENSE: usize = 3;
const PROMPT_WORD_LIMIT: usize = 5;

/// Grows concepts into a word pool for blending.
pub struct SemanticExpander {
    synonyms: Arc<dyn SynonymSource>,
}

impl SemanticExpander {
    pub fn new(synonyms: Arc<dyn SynonymSource>) -> Self {
        Self { synonyms }
    }

    /// Concepts, their short single-word synonyms, domain vocabulary, the
    /// tech slice and up to five salient prompt words. Sorted, no duplicates.
    pub fn expand(
        &self,
        concepts: &[String],
        domain: Option<&str>,
        custom_prompt: Option<&str>,
    ) -> Vec<String> {
        let mut words: BTreeSet<String> = BTreeSet::new();

        for concept in concepts {
            let concept = concept.to_lowercase();
            for sense in self.synonyms.synsets(&concept) {
                for lemma in sense.iter().take(LEMMAS_PER_SENSE) {
                    let lemma = lemma.replace(['_', '-'], " ").to_lowercase();
                    if is_usable_synonym(&lemma) {
                        words.insert(lemma);
                    }
                }
            }
            words.insert(concept);
        }

        if let Some(domain) = domain {
            for tag in parse_domain_parts(domain) {
                words.extend(domain_words(tag).iter().map(|w| (*w).to_string()));
            }
        }

        words.extend(tech_words().iter().map(|w| (*w).to_string()));

        if let Some(prompt) = custom_prompt {
            words.extend(prompt_keywords(prompt));
        }

        debug!("Expanded {} concepts into {} words", concepts.len(), words.len());
        words.into_iter().collect()
    }
}

fn is_usable_synonym(lemma: &str) -> bool {
    lemma.chars().count() > 2 && lemma.chars().all(char::is_alphabetic)
}

fn prompt_keywords(prompt: &str) -> Vec<String> {
    prompt
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > 3 && w.chars().all(char::is_alphabetic))
        .take(PROMPT_WORD_LIMIT)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::naming::thesaurus::Thesaurus;
    use crate::toolkit::naming::vocabulary::TECH_WORDS;

    fn expander() -> SemanticExpander {
        SemanticExpander::new(Arc::new(Thesaurus::builtin()))
    }

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_concepts_yield_tech_slice() {
        let words = expander().expand(&[], None, None);
        let mut expected = owned(&TECH_WORDS[..10]);
        expected.sort();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_domain_words_included() {
        let words = expander().expand(&owned(&["learn"]), Some("AI"), None);
        assert!(words.contains(&"learn".to_string()));
        for word in domain_words(crate::toolkit::naming::models::DomainTag::Ai) {
            assert!(words.contains(&word.to_string()), "missing {word}");
        }
    }

    #[test]
    fn test_compound_domain() {
        let words = expander().expand(&[], Some("AI and IoT"), None);
        assert!(words.contains(&"cognito".to_string()));
        assert!(words.contains(&"sensor".to_string()));
    }

    #[test]
    fn test_multiword_synonyms_dropped() {
        let words = expander().expand(&owned(&["home"]), None, None);
        assert!(words.contains(&"dwelling".to_string()));
        assert!(words.contains(&"base".to_string()));
        assert!(!words.iter().any(|w| w.contains(' ')));
        assert!(!words.contains(&"rest home".to_string()));
    }

    #[test]
    fn test_only_first_three_lemmas_per_sense() {
        let mut thesaurus = Thesaurus::empty();
        thesaurus.insert("swift", vec![owned(&["quick", "fast", "rapid", "speedy"])]);
        let expander = SemanticExpander::new(Arc::new(thesaurus));
        let words = expander.expand(&owned(&["swift"]), None, None);
        assert!(words.contains(&"rapid".to_string()));
        assert!(!words.contains(&"speedy".to_string()));
    }

    #[test]
    fn test_prompt_keywords() {
        let words = expander().expand(
            &[],
            None,
            Some("Make it bold and futuristic with energy, speed vivid glowing colors"),
        );
        for word in ["make", "bold", "futuristic", "with", "speed"] {
            assert!(words.contains(&word.to_string()), "missing {word}");
        }
        assert!(!words.contains(&"energy,".to_string()));
        assert!(!words.contains(&"vivid".to_string()));
    }

    #[test]
    fn test_output_sorted_and_unique() {
        let words = expander().expand(&owned(&["smart", "Smart"]), Some("IoT, AI"), Some("pulse"));
        let mut sorted = words.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(words, sorted);
    }
}
