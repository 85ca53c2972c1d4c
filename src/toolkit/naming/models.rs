

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::DEFAULT_NAME_COUNT;


#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tone {

    #[default]
    Professional,

    Cool,

    Funny,

    Aggressive,

    Minimal,
    /// Any other label; no vocabulary, no length ceiling.
    #[strum(default)]
    Other(String),
}

impl Tone {

    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        Self::from_str(label).unwrap_or_else(|_| Self::Other(label.to_string()))
    }


    pub fn as_str(&self) -> &str {
        match self {
            Self::Other(label) => label.as_str(),
            known => <&'static str>::from(known),
        }
    }


    pub fn max_name_len(&self) -> Option<usize> {
        match self {
            Self::Minimal => Some(10),
            _ => None,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Tone {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tone {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::parse(&label))
    }
}

/// Industry tags that unlock curated vocabulary. Matching is exact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr, EnumIter,
)]
pub enum DomainTag {
    #[strum(serialize = "AI")]
    #[serde(rename = "AI")]
    Ai,
    #[strum(serialize = "IoT")]
    #[serde(rename = "IoT")]
    Iot,
    Cybersecurity,
    Healthcare,
    Fintech,
    Sustainability,
    Gaming,
    #[strum(serialize = "EdTech")]
    #[serde(rename = "EdTech")]
    EdTech,
}

lazy_static! {
    static ref DOMAIN_SEPARATOR: Regex = Regex::new(r",| and ").expect("static regex");
}

/// Splits "AI and IoT" or "Fintech, Gaming" into recognized tags, in order,
/// without duplicates. Unrecognized parts are ignored.
pub fn parse_domain_parts(domain: &str) -> Vec<DomainTag> {
    let mut tags: Vec<DomainTag> = Vec::new();
    for part in DOMAIN_SEPARATOR.split(domain) {
        if let Ok(tag) = DomainTag::from_str(part.trim()) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePool {
    pub meaningful: Vec<String>,
    pub creative: Vec<String>,
}

impl NamePool {

    pub fn is_empty(&self) -> bool {
        self.meaningful.is_empty() && self.creative.is_empty()
    }


    pub fn combined(&self) -> Vec<String> {
        self.meaningful.iter().chain(self.creative.iter()).cloned().collect()
    }
}


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub count: usize,
    pub use_llm: bool,
    pub tone: Tone,
    pub domain: Option<String>,
    pub project_context: Option<String>,
    pub custom_prompt: Option<String>,
}

impl GenerationOptions {

    pub fn per_bucket(&self) -> usize {
        self.count / 2
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_NAME_COUNT,
            use_llm: false,
            tone: Tone::default(),
            domain: None,
            project_context: None,
            custom_prompt: None,
        }
    }
}
