//! Curated word banks for expansion and creative generation.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::models::{DomainTag, Tone};

/// Generic tech words; expansion only ever uses the first [`TECH_SLICE`].
pub const TECH_WORDS: &[&str] = &[
    "nexus", "quantum", "neural", "cyber", "forge", "vertex", "synapse", "zenith", "apex",
    "prime", "pulse", "spark", "flux", "nova", "matrix", "core", "byte", "pixel",
];

pub const TECH_SLICE: usize = 10;

pub const PREFIXES: &[&str] = &[
    "Neo", "Hyper", "Ultra", "Meta", "Quantum", "Cyber", "Infinity", "Alpha", "Beta", "Gamma",
    "Delta", "Omega", "Prime", "Apex", "Nexus", "Zenith", "Vertex", "Vortex", "Eclipse",
    "Phoenix", "Nova", "Stellar", "Cosmic", "Astro", "Lunar", "Solar",
];

pub const SUFFIXES: &[&str] = &[
    "Labs", "Tech", "Dynamics", "Systems", "Solutions", "Innovations", "Squad", "Crew", "Force",
    "Guild", "Collective", "Alliance", "Hub", "Core", "Forge", "Works", "Studio", "Vector",
    "Pulse", "Wave", "Flow", "Spark", "Flux", "Matrix",
];

pub const THEME_WORDS: &[&str] = &[
    "Titan", "Phantom", "Storm", "Thunder", "Lightning", "Blaze", "Shadow", "Ghost", "Raven",
    "Wolf", "Dragon", "Phoenix", "Pulse", "Echo", "Fusion", "Synergy", "Catalyst", "Impulse",
    "Velocity", "Momentum", "Orbit", "Gravity", "Photon", "Electron",
];

lazy_static! {
    /// Lowercase vocabulary merged into the expanded pool.
    static ref DOMAIN_WORDS: HashMap<DomainTag, Vec<&'static str>> = {
        let mut m = HashMap::new();
        m.insert(DomainTag::Ai, vec!["neural", "cognito", "brain", "smart", "logic", "learn", "predict", "vision"]);
        m.insert(DomainTag::Iot, vec!["sensor", "connect", "mesh", "node", "edge", "device", "stream", "pulse"]);
        m.insert(DomainTag::Cybersecurity, vec!["shield", "guard", "secure", "crypto", "vault", "cipher", "defend"]);
        m.insert(DomainTag::Healthcare, vec!["care", "heal", "vital", "pulse", "life", "med", "cure", "wellness"]);
        m.insert(DomainTag::Fintech, vec!["coin", "trade", "capital", "fund", "wealth", "asset", "ledger", "mint"]);
        m.insert(DomainTag::Sustainability, vec!["green", "eco", "renew", "earth", "pure", "clean", "grow", "leaf"]);
        m.insert(DomainTag::Gaming, vec!["pixel", "quest", "hero", "level", "arcade", "play", "arena", "nexus"]);
        m.insert(DomainTag::EdTech, vec!["learn", "study", "mentor", "skill", "bright", "knowledge", "scholar"]);
        m
    };

    /// Capitalized words the creative generator splices with prefixes and suffixes.
    static ref DOMAIN_THEME_WORDS: HashMap<DomainTag, Vec<&'static str>> = {
        let mut m = HashMap::new();
        m.insert(DomainTag::Ai, vec!["Neural", "Cognito", "Synapse", "Logic", "Vision", "Mind"]);
        m.insert(DomainTag::Iot, vec!["Mesh", "Node", "Signal", "Beacon", "Stream", "Link"]);
        m.insert(DomainTag::Cybersecurity, vec!["Cipher", "Vault", "Shield", "Guard", "Sentinel"]);
        m.insert(DomainTag::Healthcare, vec!["Vital", "Remedy", "Cure", "Heal", "Pulse", "Life"]);
        m.insert(DomainTag::Sustainability, vec!["Terra", "Eco", "Green", "Pure", "Verdant"]);
        m.insert(DomainTag::Gaming, vec!["Pixel", "Arena", "Quest", "Hero", "Legend", "Epic"]);
        m
    };

    static ref TONE_WORDS: HashMap<Tone, Vec<&'static str>> = {
        let mut m = HashMap::new();
        m.insert(Tone::Professional, vec!["pro", "tech", "solutions", "systems", "group", "labs", "enterprise"]);
        m.insert(Tone::Cool, vec!["nexus", "vibe", "squad", "collective", "crew", "alliance", "wave"]);
        m.insert(Tone::Funny, vec!["ninja", "wizard", "guru", "maverick", "pirates", "bandits", "legends"]);
        m.insert(Tone::Aggressive, vec!["force", "dominate", "titan", "warrior", "storm", "thunder", "conquer"]);
        m.insert(Tone::Minimal, vec!["dot", "dash", "line", "edge", "core", "arc", "node"]);
        m
    };
}


pub fn tech_words() -> &'static [&'static str] {
    &TECH_WORDS[..TECH_SLICE]
}


pub fn domain_words(tag: DomainTag) -> &'static [&'static str] {
    DOMAIN_WORDS.get(&tag).map(Vec::as_slice).unwrap_or(&[])
}

/// Empty for tags without a curated creative bank (Fintech, EdTech).
pub fn domain_theme_words(tag: DomainTag) -> &'static [&'static str] {
    DOMAIN_THEME_WORDS.get(&tag).map(Vec::as_slice).unwrap_or(&[])
}


pub fn tone_words(tone: &Tone) -> &'static [&'static str] {
    TONE_WORDS.get(tone).map(Vec::as_slice).unwrap_or(&[])
}
