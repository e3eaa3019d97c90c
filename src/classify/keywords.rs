use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::Category;

// Statutory vocabulary used to tag catalog sections.
const CATALOG_TRIGGERS: [(Category, &[&str]); 7] = [
    (
        Category::Theft,
        &["theft", "stealing", "dishonestly takes", "movable property"],
    ),
    (
        Category::Assault,
        &[
            "hurt",
            "assault",
            "voluntarily causing",
            "grievous hurt",
            "violence",
        ],
    ),
    (
        Category::Fraud,
        &[
            "cheating",
            "deceives",
            "fraud",
            "dishonestly induces",
            "false pretence",
        ],
    ),
    (
        Category::Robbery,
        &["robbery", "extortion", "dacoity", "criminal force"],
    ),
    (
        Category::BreachOfTrust,
        &[
            "criminal breach of trust",
            "entrusted",
            "misappropriation",
            "embezzle",
            "misuse",
        ],
    ),
    (
        Category::Mischief,
        &["mischief", "destroys", "damages", "property damage"],
    ),
    (
        Category::Trespass,
        &["house-trespass", "house trespass", "burglary", "house-breaking"],
    ),
];

// Colloquial vocabulary a complainant uses when describing an incident.
const INCIDENT_TRIGGERS: [(Category, &[&str]); 7] = [
    (
        Category::Theft,
        &[
            "theft", "steal", "stole", "stolen", "rob", "wallet", "money", "phone", "purse", "bag",
            "laptop", "jewelry", "watch",
        ],
    ),
    (
        Category::Assault,
        &[
            "assault", "attack", "hit", "beat", "violence", "hurt", "punch", "kick", "slap",
            "fight",
        ],
    ),
    (
        Category::Fraud,
        &[
            "fraud", "cheat", "deceive", "fake", "scam", "false", "lie", "trick", "con",
        ],
    ),
    (
        Category::Robbery,
        &[
            "robbery",
            "rob",
            "extortion",
            "force",
            "threat",
            "intimidate",
            "demand money",
        ],
    ),
    (
        Category::BreachOfTrust,
        &["trust", "entrusted", "misappropriation", "embezzle", "misuse"],
    ),
    (
        Category::Mischief,
        &[
            "damage",
            "destroy",
            "break",
            "vandalism",
            "mischief",
            "property damage",
        ],
    ),
    (
        Category::Trespass,
        &[
            "trespass",
            "break in",
            "burglary",
            "enter",
            "house breaking",
            "unauthorized entry",
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordConfig {
    #[serde(default)]
    pub catalog: BTreeMap<Category, Vec<String>>,
    #[serde(default)]
    pub incident: BTreeMap<Category, Vec<String>>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            catalog: trigger_table(&CATALOG_TRIGGERS),
            incident: trigger_table(&INCIDENT_TRIGGERS),
        }
    }
}

impl KeywordConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path)
            .with_context(|| format!("failed to read keyword config: {}", path.display()))?;
        let overrides: KeywordConfig = serde_json::from_slice(&raw)
            .with_context(|| format!("failed to parse keyword config: {}", path.display()))?;

        let mut config = Self::default();
        config.merge(overrides);

        info!(
            path = %path.display(),
            catalog_categories = config.catalog.len(),
            incident_categories = config.incident.len(),
            "loaded keyword config"
        );

        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn catalog_triggers(&self, category: Category) -> &[String] {
        self.catalog
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn incident_triggers(&self, category: Category) -> &[String] {
        self.incident
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn merge(&mut self, overrides: KeywordConfig) {
        for (category, words) in overrides.catalog {
            self.catalog.insert(category, normalize_triggers(words));
        }
        for (category, words) in overrides.incident {
            self.incident.insert(category, normalize_triggers(words));
        }
    }
}

pub fn contains_any(lowered_text: &str, triggers: &[String]) -> bool {
    triggers
        .iter()
        .any(|trigger| lowered_text.contains(trigger.as_str()))
}

fn trigger_table(table: &[(Category, &[&str])]) -> BTreeMap<Category, Vec<String>> {
    table
        .iter()
        .map(|(category, words)| {
            (
                *category,
                words.iter().map(|word| (*word).to_string()).collect(),
            )
        })
        .collect()
}

fn normalize_triggers(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}
