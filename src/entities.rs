use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex::Regex;

use crate::model::Entities;

const MAX_ACCUSED: usize = 2;

const OBJECT_VOCABULARY: [&str; 10] = [
    "wallet", "phone", "money", "bag", "purse", "laptop", "watch", "jewelry", "car", "bike",
];

pub trait EntityExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Entities;
}

// Sentence-initial words such as "Someone" count as accused candidates.
#[derive(Debug, Clone)]
pub struct HeuristicEntityExtractor {
    name_pattern: Regex,
    object_pattern: Regex,
}

impl HeuristicEntityExtractor {
    pub fn new() -> Result<Self> {
        let name_pattern =
            Regex::new(r"\b[A-Z][a-z]+\b").context("failed to compile accused name regex")?;
        let object_pattern = Regex::new(&format!(r"\b(?:{})\b", OBJECT_VOCABULARY.join("|")))
            .context("failed to compile object vocabulary regex")?;

        Ok(Self {
            name_pattern,
            object_pattern,
        })
    }
}

impl EntityExtractor for HeuristicEntityExtractor {
    fn extract(&self, text: &str) -> Entities {
        let mut accused = Vec::<String>::with_capacity(MAX_ACCUSED);
        for found in self.name_pattern.find_iter(text) {
            if accused.len() == MAX_ACCUSED {
                break;
            }
            if accused.iter().all(|name| name != found.as_str()) {
                accused.push(found.as_str().to_string());
            }
        }

        let lowered = text.to_lowercase();
        let objects = self
            .object_pattern
            .find_iter(&lowered)
            .map(|found| found.as_str().to_string())
            .collect::<BTreeSet<String>>();

        Entities {
            accused,
            objects,
            location: String::new(),
            time: String::new(),
        }
    }
}
