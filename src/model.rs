use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogChapter {
    #[serde(default)]
    pub chapter_title: String,
    #[serde(default)]
    pub sections: Vec<CatalogSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSection {
    #[serde(default)]
    pub section_number: SectionNumber,
    #[serde(default)]
    pub section_title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SectionNumber {
    Text(String),
    Integer(i64),
}

impl Default for SectionNumber {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl SectionNumber {
    pub fn into_string(self) -> String {
        match self {
            Self::Text(value) => value.trim().to_string(),
            Self::Integer(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub section_number: String,
    pub title: String,
    pub body: String,
    pub chapter_title: String,
}

impl CatalogEntry {
    pub fn section_label(&self) -> String {
        format!("Section {}", self.section_number)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Theft,
    Assault,
    Fraud,
    Robbery,
    BreachOfTrust,
    Mischief,
    Trespass,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Self::Theft,
        Self::Assault,
        Self::Fraud,
        Self::Robbery,
        Self::BreachOfTrust,
        Self::Mischief,
        Self::Trespass,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Theft => "theft",
            Self::Assault => "assault",
            Self::Fraud => "fraud",
            Self::Robbery => "robbery",
            Self::BreachOfTrust => "breach_of_trust",
            Self::Mischief => "mischief",
            Self::Trespass => "trespass",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    #[serde(rename = "section")]
    pub section_label: String,
    pub title: String,
    #[serde(rename = "content")]
    pub content_excerpt: String,
    pub reasoning: String,
    pub chapter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl CategoryMatch {
    pub fn undetermined() -> Self {
        Self {
            section_label: "To be determined".to_string(),
            title: "Requires further investigation and legal analysis".to_string(),
            content_excerpt:
                "The specific sections will be determined after detailed investigation."
                    .to_string(),
            reasoning:
                "Further investigation is required to determine the applicable legal sections."
                    .to_string(),
            chapter: "GENERAL".to_string(),
            category: None,
        }
    }

    pub fn is_undetermined(&self) -> bool {
        self.category.is_none() && self.section_label == "To be determined"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entities {
    pub accused: Vec<String>,
    pub objects: BTreeSet<String>,
    pub location: String,
    pub time: String,
}
