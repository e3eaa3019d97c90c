use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::classify::{FallbackIndex, KeywordIndex, build_index};
use crate::cli::CatalogArgs;
use crate::model::{Category, CatalogEntry};
use crate::reasoning::explain;

#[derive(Debug, Serialize)]
struct CatalogReport {
    path: Option<String>,
    sha256: Option<String>,
    chapters: usize,
    sections: usize,
    fallback_merged: bool,
    categories: Vec<CategoryCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    section: Option<SectionView>,
}

#[derive(Debug, Serialize)]
struct CategoryCount {
    category: Category,
    sections: usize,
}

#[derive(Debug, Serialize)]
struct SectionView {
    section: String,
    title: String,
    chapter: String,
    reasoning: String,
    content: String,
}

pub fn run(args: CatalogArgs) -> Result<()> {
    let (catalog, keywords) = super::load_sources(&args.source)?;
    let fallback = FallbackIndex::embedded()?;
    let index = build_index(&catalog, &keywords, &fallback);

    if catalog.is_empty() {
        warn!(
            path = %args.source.catalog_path.display(),
            "reference catalog is empty; classification relies on the fallback index"
        );
    }

    for (category, sections) in index.category_counts() {
        info!(
            category = category.as_str(),
            sections,
            triggers = keywords.catalog_triggers(category).len(),
            "category coverage"
        );
    }

    let section = match args.section.as_deref() {
        Some(number) => match catalog.section(number) {
            Some(entry) => Some(section_view(entry)),
            None => bail!("section {number} not found in reference catalog"),
        },
        None => None,
    };

    let report = catalog_report(&catalog, &index, section);

    info!(
        chapters = report.chapters,
        sections = report.sections,
        sha256 = %report.sha256.as_deref().unwrap_or("-"),
        fallback_merged = report.fallback_merged,
        "catalog status"
    );

    if args.json {
        write_json_report(&report)
    } else {
        write_text_report(&report)
    }
}

fn catalog_report(
    catalog: &Catalog,
    index: &KeywordIndex,
    section: Option<SectionView>,
) -> CatalogReport {
    CatalogReport {
        path: catalog
            .source_path()
            .map(|path| path.display().to_string()),
        sha256: catalog.source_sha256().map(str::to_string),
        chapters: catalog.chapter_count(),
        sections: catalog.entries().len(),
        fallback_merged: index.fallback_merged(),
        categories: index
            .category_counts()
            .into_iter()
            .map(|(category, sections)| CategoryCount { category, sections })
            .collect(),
        section,
    }
}

fn section_view(entry: &CatalogEntry) -> SectionView {
    SectionView {
        section: entry.section_label(),
        title: entry.title.clone(),
        chapter: entry.chapter_title.clone(),
        reasoning: explain(&entry.title, &entry.body),
        content: entry.body.clone(),
    }
}

fn write_json_report(report: &CatalogReport) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, report)
        .context("failed to serialize catalog json output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn write_text_report(report: &CatalogReport) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    writeln!(
        output,
        "Catalog: {}",
        report.path.as_deref().unwrap_or("(unavailable)")
    )?;
    if let Some(sha256) = &report.sha256 {
        writeln!(output, "SHA-256: {sha256}")?;
    }
    writeln!(
        output,
        "Chapters: {} Sections: {} fallback_merged={}",
        report.chapters, report.sections, report.fallback_merged
    )?;
    for count in &report.categories {
        writeln!(output, "\t{}\t{}", count.category.as_str(), count.sections)?;
    }

    if let Some(section) = &report.section {
        writeln!(output)?;
        writeln!(output, "{}: {}", section.section, section.title)?;
        writeln!(output, "\tchapter: {}", section.chapter)?;
        writeln!(output, "\treasoning: {}", section.reasoning)?;
        writeln!(output, "\t{}", section.content)?;
    }

    output.flush()?;
    Ok(())
}
