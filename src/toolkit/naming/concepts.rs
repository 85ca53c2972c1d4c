

use std::collections::{BTreeSet, HashSet};

use lazy_static::lazy_static;

lazy_static! {
    static ref STOPWORDS: HashSet<&'static str> = [
        "the", "a", "an", "and", "or", "but", "for", "with", "to", "in", "on",
    ]
    .into_iter()
    .collect();
}


pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Lowercased whitespace tokens minus stopwords, deduplicated and sorted.
/// Punctuation stays attached to its token.
pub fn extract_concepts(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|token| !is_stopword(token))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Joins the present, non-blank parts of a request into one concept source.
pub fn concept_text(description: &str, extras: &[Option<&str>]) -> String {
    let mut text = description.to_string();
    for extra in extras.iter().flatten() {
        if !extra.trim().is_empty() {
            text.push(' ');
            text.push_str(extra);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords_removed() {
        let concepts = extract_concepts("A smart home monitoring platform");
        assert_eq!(concepts, vec!["home", "monitoring", "platform", "smart"]);
    }

    #[test]
    fn test_dedup_and_lowercase() {
        let concepts = extract_concepts("Mesh mesh MESH and the Edge");
        assert_eq!(concepts, vec!["edge", "mesh"]);
    }

    #[test]
    fn test_punctuation_kept() {
        let concepts = extract_concepts("sensors, cloud.");
        assert_eq!(concepts, vec!["cloud.", "sensors,"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_concepts("").is_empty());
        assert!(extract_concepts("  the a an  ").is_empty());
    }

    #[test]
    fn test_concept_text_skips_blank_parts() {
        let text = concept_text("smart home", &[Some("energy meter"), None, Some("  ")]);
        assert_eq!(text, "smart home energy meter");
    }
}
