use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::model::{Category, CategoryMatch, CatalogEntry};
use crate::reasoning::explain;
use crate::util::truncate_excerpt;

mod fallback;
mod keywords;

pub use fallback::FallbackIndex;
pub use keywords::{KeywordConfig, contains_any};

pub const EXCERPT_CHARS: usize = 200;
pub const MAX_IDENTIFIED_SECTIONS: usize = 5;
const MIN_POPULATED_CATEGORIES: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    buckets: HashMap<Category, Vec<CategoryMatch>>,
    fallback_merged: bool,
}

impl KeywordIndex {
    pub fn matches(&self, category: Category) -> &[CategoryMatch] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn populated_categories(&self) -> usize {
        self.buckets
            .values()
            .filter(|matches| !matches.is_empty())
            .count()
    }

    pub fn fallback_merged(&self) -> bool {
        self.fallback_merged
    }

    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|category| (*category, self.matches(*category).len()))
            .collect()
    }
}

pub fn build_index(
    catalog: &Catalog,
    keywords: &KeywordConfig,
    fallback: &FallbackIndex,
) -> KeywordIndex {
    let mut buckets: HashMap<Category, Vec<CategoryMatch>> = HashMap::new();

    for entry in catalog.entries() {
        let lowered = format!("{} {}", entry.title, entry.body).to_lowercase();
        let mut derived: Option<CategoryMatch> = None;

        for category in Category::ALL {
            if !contains_any(&lowered, keywords.catalog_triggers(category)) {
                continue;
            }

            let base = derived.get_or_insert_with(|| category_match(entry));
            buckets.entry(category).or_default().push(CategoryMatch {
                category: Some(category),
                ..base.clone()
            });
        }
    }

    let mut index = KeywordIndex {
        buckets,
        fallback_merged: false,
    };

    let populated = index.populated_categories();
    if populated < MIN_POPULATED_CATEGORIES {
        for (category, matches) in fallback.categories() {
            if index.matches(category).is_empty() {
                index.buckets.insert(category, matches.to_vec());
                index.fallback_merged = true;
            }
        }
        info!(
            catalog_categories = populated,
            populated_categories = index.populated_categories(),
            fallback_merged = index.fallback_merged,
            "keyword index below coverage threshold; merged fallback sections"
        );
    } else {
        info!(
            populated_categories = populated,
            "keyword index built from reference catalog"
        );
    }

    index
}

fn category_match(entry: &CatalogEntry) -> CategoryMatch {
    CategoryMatch {
        section_label: entry.section_label(),
        title: entry.title.clone(),
        content_excerpt: truncate_excerpt(&entry.body, EXCERPT_CHARS),
        reasoning: explain(&entry.title, &entry.body),
        chapter: entry.chapter_title.clone(),
        category: None,
    }
}

#[derive(Debug, Clone)]
pub struct Classifier {
    index: KeywordIndex,
    keywords: KeywordConfig,
}

impl Classifier {
    pub fn new(catalog: &Catalog, keywords: KeywordConfig, fallback: &FallbackIndex) -> Self {
        let index = build_index(catalog, &keywords, fallback);
        Self { index, keywords }
    }

    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    pub fn identify(&self, incident_text: &str) -> Vec<CategoryMatch> {
        identify(incident_text, &self.index, &self.keywords)
    }
}

pub fn identify(
    incident_text: &str,
    index: &KeywordIndex,
    keywords: &KeywordConfig,
) -> Vec<CategoryMatch> {
    let lowered = incident_text.to_lowercase();
    let mut seen = HashSet::<String>::new();
    let mut sections = Vec::<CategoryMatch>::new();

    for category in Category::ALL {
        if !contains_any(&lowered, keywords.incident_triggers(category)) {
            continue;
        }

        debug!(category = category.as_str(), "incident matched category");
        for candidate in index.matches(category) {
            if seen.insert(candidate.section_label.clone()) {
                sections.push(candidate.clone());
            }
        }
    }

    sections.truncate(MAX_IDENTIFIED_SECTIONS);

    if sections.is_empty() {
        sections.push(CategoryMatch::undetermined());
    }

    sections
}
