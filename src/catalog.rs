use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::model::{CatalogChapter, CatalogEntry};
use crate::util::sha256_hex;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    chapter_count: usize,
    source_path: Option<PathBuf>,
    source_sha256: Option<String>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_chapters(chapters: Vec<CatalogChapter>) -> Self {
        let chapter_count = chapters.len();
        let mut entries = Vec::new();

        for chapter in chapters {
            for section in chapter.sections {
                entries.push(CatalogEntry {
                    section_number: section.section_number.into_string(),
                    title: section.section_title,
                    body: section.content,
                    chapter_title: chapter.chapter_title.clone(),
                });
            }
        }

        Self {
            entries,
            chapter_count,
            source_path: None,
            source_sha256: None,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn chapter_count(&self) -> usize {
        self.chapter_count
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn source_sha256(&self) -> Option<&str> {
        self.source_sha256.as_deref()
    }

    pub fn section(&self, section_number: &str) -> Option<&CatalogEntry> {
        let wanted = section_number.trim();
        self.entries
            .iter()
            .find(|entry| entry.section_number == wanted)
    }
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read(path)
        .with_context(|| format!("failed to read reference catalog: {}", path.display()))?;
    let chapters: Vec<CatalogChapter> = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse reference catalog: {}", path.display()))?;
    let sha256 = sha256_hex(&raw);

    let mut catalog = Catalog::from_chapters(chapters);
    catalog.source_path = Some(path.to_path_buf());
    catalog.source_sha256 = Some(sha256);

    info!(
        path = %path.display(),
        chapters = catalog.chapter_count,
        sections = catalog.entries.len(),
        "loaded reference catalog"
    );

    Ok(catalog)
}

pub fn load_catalog_or_empty(path: &Path) -> Catalog {
    match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %format!("{err:#}"),
                "reference catalog unavailable; continuing with fallback analysis"
            );
            Catalog::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::{Catalog, load_catalog, load_catalog_or_empty};
    use crate::model::CatalogChapter;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fir-intake-{}-{name}", std::process::id()))
    }

    #[test]
    fn from_chapters_flattens_sections_in_order() {
        let raw = r#"
        [
          {
            "chapter_title": "OF OFFENCES AGAINST PROPERTY",
            "sections": [
              {"section_number": "303", "section_title": "Theft", "content": "Whoever dishonestly takes."},
              {"section_number": 304, "section_title": "Snatching", "content": "Theft is snatching."}
            ]
          },
          {"chapter_title": "PRELIMINARY"}
        ]
        "#;
        let chapters: Vec<CatalogChapter> =
            serde_json::from_str(raw).expect("catalog fixture should deserialize");

        let catalog = Catalog::from_chapters(chapters);
        assert_eq!(catalog.chapter_count(), 2);
        assert_eq!(catalog.entries().len(), 2);
        assert_eq!(catalog.entries()[0].section_number, "303");
        assert_eq!(catalog.entries()[1].section_number, "304");
        assert_eq!(
            catalog.entries()[1].chapter_title,
            "OF OFFENCES AGAINST PROPERTY"
        );
        assert_eq!(
            catalog.section(" 304 ").map(|entry| entry.title.as_str()),
            Some("Snatching")
        );
        assert!(catalog.section("999").is_none());
    }

    #[test]
    fn load_catalog_records_source_hash() {
        let path = scratch_path("catalog.json");
        fs::write(
            &path,
            r#"[{"chapter_title": "GENERAL", "sections": [{"section_number": "1", "section_title": "Short title", "content": "This Act may be called the Sanhita."}]}]"#,
        )
        .expect("scratch catalog should be writable");

        let catalog = load_catalog(&path).expect("catalog should load");
        assert_eq!(catalog.entries().len(), 1);
        let written = fs::read(&path).expect("scratch catalog should be readable");
        assert_eq!(
            catalog.source_sha256(),
            Some(crate::util::sha256_hex(&written).as_str())
        );
        assert_eq!(catalog.source_path(), Some(path.as_path()));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_catalog_falls_back_to_empty() {
        let catalog = load_catalog_or_empty(&scratch_path("does-not-exist.json"));
        assert!(catalog.is_empty());
        assert_eq!(catalog.chapter_count(), 0);
    }

    #[test]
    fn malformed_catalog_falls_back_to_empty() {
        let path = scratch_path("malformed.json");
        fs::write(&path, "{not json").expect("scratch catalog should be writable");

        let error = load_catalog(&path).expect_err("malformed catalog should fail to parse");
        assert!(
            format!("{error:#}").contains("failed to parse reference catalog"),
            "unexpected error: {error:#}"
        );
        assert!(load_catalog_or_empty(&path).is_empty());

        let _ = fs::remove_file(&path);
    }
}
