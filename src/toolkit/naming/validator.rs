

use super::models::Tone;

pub const MIN_NAME_LEN: usize = 4;
pub const MAX_NAME_LEN: usize = 18;
pub const MAX_CONSONANT_RUN: usize = 4;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Length bounds, tone ceiling, letters only, no long consonant clusters.
/// 'y' counts as a consonant.
pub fn is_valid_name(name: &str, tone: &Tone) -> bool {
    let len = name.chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return false;
    }
    if tone.max_name_len().is_some_and(|max| len > max) {
        return false;
    }
    if !name.chars().all(char::is_alphabetic) {
        return false;
    }
    longest_consonant_run(name) <= MAX_CONSONANT_RUN
}

fn longest_consonant_run(name: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for c in name.chars().flat_map(char::to_lowercase) {
        if VOWELS.contains(&c) {
            run = 0;
        } else {
            run += 1;
            longest = longest.max(run);
        }
    }
    longest
}
