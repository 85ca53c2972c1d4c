

use std::collections::HashSet;

use super::base::{non_blank, RankingContext};


pub const SYSTEM_PROMPT: &str = "You are a creative team name expert.";


pub fn build_ranking_prompt(context: &RankingContext, candidates: &[String], top_k: usize) -> String {
    let project = non_blank(&context.project_context);
    let custom = non_blank(&context.custom_prompt);
    let domain = context.domain.as_deref().filter(|d| !d.trim().is_empty()).unwrap_or("General");
    let tone = context.tone.as_deref().filter(|t| !t.trim().is_empty()).unwrap_or("Professional");

    let mut lines: Vec<String> = Vec::new();
    if let Some(project) = project {
        lines.push(format!("PROJECT CONTEXT: {project}"));
    }
    if let Some(custom) = custom {
        lines.push(format!("CUSTOM REQUIREMENTS: {custom}"));
    }
    lines.push(format!("DOMAIN: {domain}"));
    lines.push(format!("TONE: {tone}"));
    lines.push(format!("KEY CONCEPTS: {}", context.concepts.join(", ")));
    lines.push(String::new());
    lines.push("CANDIDATE NAMES:".to_string());
    lines.push(candidates.join(", "));
    lines.push(String::new());
    lines.push("Task: Rank these names from BEST to WORST based on:".to_string());

    let mut criteria: Vec<String> = Vec::new();
    if project.is_some() {
        criteria.push("Relevance to the project context".to_string());
    }
    criteria.push("Memorability and pronunciation".to_string());
    criteria.push(format!("Appropriateness for the tone ({tone})"));
    criteria.push(format!("Domain fit ({domain})"));
    if let Some(custom) = custom {
        criteria.push(format!("Alignment with custom requirements: {custom}"));
    }
    lines.extend(
        criteria
            .into_iter()
            .enumerate()
            .map(|(i, criterion)| format!("{}. {criterion}", i + 1)),
    );

    lines.push(String::new());
    lines.push(format!(
        "Return ONLY the top {top_k} names as a comma-separated list, nothing else."
    ));

    lines.join("\n")
}

/// Keeps reply names that are real candidates, in reply order, then pads
/// with the remaining candidates in their original order up to `top_k`.
/// A reply naming no candidate degrades to the unranked order.
pub fn parse_ranked_names(response: &str, candidates: &[String], top_k: usize) -> Vec<String> {
    let known: HashSet<&str> = candidates.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::new();

    let mut ranked: Vec<String> = Vec::new();
    for name in response.split(',').map(str::trim) {
        if let Some(&candidate) = known.get(name) {
            if seen.insert(candidate) {
                ranked.push(candidate.to_string());
            }
        }
    }

    if ranked.is_empty() {
        return super::base::passthrough(candidates, top_k);
    }

    for candidate in candidates {
        if ranked.len() >= top_k {
            break;
        }
        if seen.insert(candidate.as_str()) {
            ranked.push(candidate.clone());
        }
    }

    ranked.truncate(top_k);
    ranked
}
