use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Category, CategoryMatch};
use crate::reasoning::explain;
use crate::util::truncate_excerpt;

use super::EXCERPT_CHARS;

const EMBEDDED_FALLBACK_INDEX: &str = include_str!("../../data/fallback_index.json");

#[derive(Debug, Deserialize)]
struct FallbackEntry {
    section: String,
    title: String,
    content: String,
    #[serde(default)]
    reasoning: Option<String>,
    chapter: String,
}

#[derive(Debug, Clone, Default)]
pub struct FallbackIndex {
    categories: BTreeMap<Category, Vec<CategoryMatch>>,
}

impl FallbackIndex {
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_FALLBACK_INDEX).context("failed to parse embedded fallback index")
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: BTreeMap<Category, Vec<FallbackEntry>> = serde_json::from_str(raw)?;

        let categories = parsed
            .into_iter()
            .map(|(category, entries)| {
                let matches = entries
                    .into_iter()
                    .map(|entry| {
                        let reasoning = entry
                            .reasoning
                            .unwrap_or_else(|| explain(&entry.title, &entry.content));
                        CategoryMatch {
                            section_label: entry.section,
                            title: entry.title,
                            content_excerpt: truncate_excerpt(&entry.content, EXCERPT_CHARS),
                            reasoning,
                            chapter: entry.chapter,
                            category: Some(category),
                        }
                    })
                    .collect::<Vec<CategoryMatch>>();
                (category, matches)
            })
            .collect();

        Ok(Self { categories })
    }

    pub fn categories(&self) -> impl Iterator<Item = (Category, &[CategoryMatch])> {
        self.categories
            .iter()
            .map(|(category, matches)| (*category, matches.as_slice()))
    }
}
