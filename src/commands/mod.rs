pub mod catalog;
pub mod classify;
pub mod draft;
pub mod serve;

use anyhow::Result;

use crate::catalog::{Catalog, load_catalog_or_empty};
use crate::classify::KeywordConfig;
use crate::cli::CatalogSourceArgs;
use crate::intake::IntakeEngine;

pub(crate) fn load_sources(args: &CatalogSourceArgs) -> Result<(Catalog, KeywordConfig)> {
    let catalog = load_catalog_or_empty(&args.catalog_path);
    let keywords = KeywordConfig::load_or_default(args.keywords_path.as_deref())?;
    Ok((catalog, keywords))
}

pub(crate) fn build_engine(args: &CatalogSourceArgs) -> Result<IntakeEngine> {
    let (catalog, keywords) = load_sources(args)?;
    IntakeEngine::from_catalog(&catalog, keywords)
}
