

use std::collections::HashMap;
use std::path::Path;

use lazy_static::lazy_static;
use tracing::{debug, info};

use crate::core::error::{BraionError, Result};

/// Read-only synonym lookup. Each inner list is one sense, lemmas in
/// relevance order; lemmas may contain '_' or '-' as word separators.
pub trait SynonymSource: Send + Sync {
    fn synsets(&self, word: &str) -> Vec<Vec<String>>;
}

lazy_static! {
    static ref BUILTIN_SENSES: HashMap<&'static str, Vec<Vec<&'static str>>> = {
        let mut m = HashMap::new();
        m.insert("smart", vec![
            vec!["smart", "bright", "clever"],
            vec!["chic", "smart", "voguish"],
            vec!["smart", "ache", "smarting"],
            vec!["hurt", "ache", "suffer"],
        ]);
        m.insert("home", vec![
            vec!["home", "place", "dwelling"],
            vec!["home", "home_base", "base"],
            vec!["home", "nursing_home", "rest_home"],
            vec!["abode", "domicile", "dwelling"],
        ]);
        m.insert("monitoring", vec![
            vec!["monitoring", "supervising", "oversight"],
            vec!["monitor", "supervise", "watch"],
        ]);
        m.insert("platform", vec![
            vec!["platform", "program", "political_platform"],
            vec!["platform", "stage", "podium"],
            vec!["platform", "weapons_platform"],
        ]);
        m.insert("data", vec![vec!["data", "information", "datum"]]);
        m.insert("cloud", vec![
            vec!["cloud", "mist", "haze"],
            vec!["obscure", "blur", "befog"],
        ]);
        m.insert("network", vec![
            vec!["network", "web", "mesh"],
            vec!["network", "electronic_network"],
            vec!["net", "network", "lattice"],
        ]);
        m.insert("learn", vec![
            vec!["learn", "larn", "acquire"],
            vec!["learn", "hear", "get_word"],
            vec!["study", "read", "learn"],
            vec!["teach", "learn", "instruct"],
        ]);
        m.insert("team", vec![
            vec!["team", "squad", "crew"],
            vec!["team", "team_up"],
        ]);
        m.insert("fast", vec![
            vec!["fast", "quick", "rapid"],
            vec!["fast", "firm", "steady"],
            vec!["fast", "fasting"],
        ]);
        m.insert("secure", vec![
            vec!["secure", "safe", "guarded"],
            vec!["procure", "secure", "obtain"],
            vec!["fasten", "fix", "secure"],
        ]);
        m.insert("health", vec![
            vec!["health", "wellness", "wellbeing"],
            vec!["health", "fitness", "vigor"],
        ]);
        m.insert("energy", vec![
            vec!["energy", "vigor", "vitality"],
            vec!["energy", "free_energy"],
            vec!["energy", "zip", "pep"],
        ]);
        m.insert("game", vec![
            vec!["game", "play", "sport"],
            vec!["game", "biz", "plot"],
            vec!["crippled", "game", "halt"],
        ]);
        m.insert("money", vec![
            vec!["money", "cash", "funds"],
            vec!["money", "wealth", "riches"],
        ]);
        m.insert("bank", vec![
            vec!["bank", "depository", "vault"],
            vec!["bank", "side", "shore"],
            vec!["bank", "rely", "trust"],
        ]);
        m.insert("green", vec![
            vec!["green", "verdant", "leafy"],
            vec!["green", "park", "common"],
            vec!["green", "putting_green"],
        ]);
        m.insert("city", vec![
            vec!["city", "metropolis", "urban_center"],
            vec!["city", "metro", "town"],
        ]);
        m.insert("sensor", vec![
            vec!["sensor", "detector", "sensing_element"],
            vec!["sensor", "probe", "scanner"],
        ]);
        m.insert("device", vec![
            vec!["device", "gadget", "gizmo"],
            vec!["device", "twist", "gimmick"],
            vec!["device", "emblem", "motif"],
        ]);
        m.insert("app", vec![vec!["application", "app", "software"]]);
        m.insert("tool", vec![
            vec!["tool", "instrument", "implement"],
            vec!["tool", "creature", "puppet"],
        ]);
        m.insert("student", vec![
            vec!["student", "pupil", "educatee"],
            vec!["scholar", "scholarly_person", "bookman"],
        ]);
        m.insert("school", vec![
            vec!["school", "schoolhouse", "academy"],
            vec!["school", "shoal", "pod"],
        ]);
        m.insert("care", vec![
            vec!["care", "attention", "aid"],
            vec!["care", "caution", "forethought"],
            vec!["concern", "care", "fear"],
        ]);
        m.insert("power", vec![
            vec!["power", "force", "might"],
            vec!["power", "energy", "drive"],
            vec!["ability", "power", "potency"],
        ]);
        m.insert("light", vec![
            vec!["light", "glow", "beam"],
            vec!["light", "lighter", "igniter"],
            vec!["light", "airy", "buoyant"],
        ]);
        m.insert("vision", vec![
            vec!["vision", "sight", "seeing"],
            vec!["vision", "imagination", "insight"],
        ]);
        m.insert("mind", vec![
            vec!["mind", "brain", "intellect"],
            vec!["mind", "head", "psyche"],
        ]);
        m.insert("brain", vec![
            vec!["brain", "encephalon"],
            vec!["brain", "mentality", "wit"],
        ]);
        m.insert("robot", vec![vec!["robot", "automaton", "android"]]);
        m.insert("travel", vec![
            vec!["travel", "journey", "trip"],
            vec!["travel", "go", "move"],
            vec!["trip", "voyage", "tour"],
        ]);
        m.insert("food", vec![
            vec!["food", "nutrient", "fare"],
            vec!["food", "solid_food", "provisions"],
        ]);
        m.insert("music", vec![
            vec!["music", "melody", "tune"],
            vec!["music", "euphony", "harmony"],
        ]);
        m.insert("community", vec![
            vec!["community", "society", "fellowship"],
            vec!["community", "residential_district"],
        ]);
        m.insert("market", vec![
            vec!["market", "marketplace", "mart"],
            vec!["market", "securities_market", "trade"],
        ]);
        m.insert("tracker", vec![vec!["tracker", "tracer", "hunter"]]);
        m.insert("track", vec![
            vec!["track", "path", "trail"],
            vec!["track", "trace", "follow"],
        ]);
        m.insert("chain", vec![
            vec!["chain", "concatenation", "string"],
            vec!["chain", "series", "sequence"],
            vec!["chain", "irons", "chains"],
        ]);
        m.insert("space", vec![
            vec!["space", "infinite", "cosmos"],
            vec!["space", "room", "blank_space"],
            vec!["outer_space", "space", "orbit"],
        ]);
        m.insert("build", vec![
            vec!["build", "construct", "make"],
            vec!["build", "progress", "develop"],
        ]);
        m.insert("connect", vec![
            vec!["connect", "link", "tie"],
            vec!["connect", "join", "unite"],
        ]);
        m.insert("weather", vec![
            vec!["weather", "atmospheric_condition", "climate"],
            vec!["weather", "endure", "brave"],
        ]);
        m.insert("wild", vec![
            vec!["wild", "untamed", "feral"],
            vec!["wild", "barbaric", "savage"],
        ]);
        m.insert("assistant", vec![
            vec!["assistant", "helper", "supporter"],
            vec!["aide", "adjutant", "assistant"],
        ]);
        m.insert("chat", vec![
            vec!["chat", "chitchat", "gossip"],
            vec!["chat", "confab", "natter"],
        ]);
        m.insert("code", vec![
            vec!["code", "codification", "cipher"],
            vec!["code", "computer_code", "program"],
            vec!["code", "encode", "encrypt"],
        ]);
        m.insert("doctor", vec![
            vec!["doctor", "physician", "medico"],
            vec!["doctor", "repair", "fix"],
        ]);
        m.insert("finance", vec![
            vec!["finance", "funding", "capital"],
            vec!["finance", "fund", "bankroll"],
        ]);
        m.insert("farm", vec![
            vec!["farm", "ranch", "grange"],
            vec!["farm", "cultivate", "grow"],
        ]);
        m.insert("ocean", vec![
            vec!["ocean", "sea", "main"],
            vec!["ocean", "sea", "abundance"],
        ]);
        m.insert("sport", vec![
            vec!["sport", "athletics", "game"],
            vec!["sport", "play", "frolic"],
        ]);
        m.insert("fitness", vec![
            vec!["fitness", "condition", "shape"],
            vec!["fitness", "suitability", "fittingness"],
        ]);
        m.insert("voice", vec![
            vec!["voice", "vocalization", "speech"],
            vec!["voice", "articulate", "express"],
        ]);
        m.insert("search", vec![
            vec!["search", "hunt", "quest"],
            vec!["search", "explore", "seek"],
        ]);
        m.insert("share", vec![
            vec!["share", "portion", "part"],
            vec!["share", "divvy_up", "portion_out"],
        ]);
        m.insert("future", vec![
            vec!["future", "hereafter", "futurity"],
            vec!["future", "prospective", "next"],
        ]);
        m.insert("shop", vec![
            vec!["shop", "store", "boutique"],
            vec!["shop", "browse", "buy"],
        ]);
        m.insert("story", vec![
            vec!["story", "narrative", "tale"],
            vec!["story", "account", "chronicle"],
        ]);
        m
    };
}


#[derive(Debug, Clone, Default)]
pub struct Thesaurus {
    entries: HashMap<String, Vec<Vec<String>>>,
}

impl Thesaurus {

    pub fn empty() -> Self {
        Self::default()
    }

    /// The compiled-in table. It covers a few dozen headwords common in
    /// project descriptions; any other concept expands only through the
    /// tech, domain and tone banks. Point `thesaurus_path` at a tab-separated
    /// file to cover more vocabulary.
    pub fn builtin() -> Self {
        let entries = BUILTIN_SENSES
            .iter()
            .map(|(word, senses)| {
                let senses = senses
                    .iter()
                    .map(|sense| sense.iter().map(|l| (*l).to_string()).collect())
                    .collect();
                ((*word).to_string(), senses)
            })
            .collect();
        Self { entries }
    }

    /// Built-in table extended with the senses in `path`.
    ///
    /// One entry per line, `word<TAB>lemma,lemma|lemma`; `|` separates senses
    /// and lines starting with `#` are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BraionError::ResourceUnavailable(format!("thesaurus {}: {}", path.display(), e))
        })?;

        let mut thesaurus = Self::builtin();
        let mut added = 0usize;
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, senses) = parse_line(line).ok_or_else(|| {
                BraionError::ResourceUnavailable(format!(
                    "thesaurus {}: malformed line {}",
                    path.display(),
                    index + 1
                ))
            })?;
            thesaurus.insert(&word, senses);
            added += 1;
        }

        info!("Thesaurus loaded from {}: {} entries added", path.display(), added);
        Ok(thesaurus)
    }

    /// Built-in table, or the file one when a path is configured.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Appends senses to `word`, after any it already has.
    pub fn insert(&mut self, word: &str, senses: Vec<Vec<String>>) {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .extend(senses.into_iter().filter(|s| !s.is_empty()));
    }


    pub fn len(&self) -> usize {
        self.entries.len()
    }


    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SynonymSource for Thesaurus {
    fn synsets(&self, word: &str) -> Vec<Vec<String>> {
        let senses = self.entries.get(&word.to_lowercase()).cloned().unwrap_or_default();
        debug!("Thesaurus lookup '{}': {} senses", word, senses.len());
        senses
    }
}

fn parse_line(line: &str) -> Option<(String, Vec<Vec<String>>)> {
    let (word, rest) = line.split_once('\t')?;
    let word = word.trim();
    if word.is_empty() {
        return None;
    }

    let senses: Vec<Vec<String>> = rest
        .split('|')
        .map(|sense| {
            sense
                .split(',')
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|sense| !sense.is_empty())
        .collect();

    if senses.is_empty() {
        return None;
    }
    Some((word.to_string(), senses))
}
