use anyhow::Result;
use chrono::Local;
use tracing::debug;

use crate::catalog::Catalog;
use crate::classify::{Classifier, FallbackIndex, KeywordConfig, KeywordIndex};
use crate::conversation::{Answers, QuestionKey};
use crate::entities::{EntityExtractor, HeuristicEntityExtractor};
use crate::model::{CategoryMatch, Entities};
use crate::report::{
    FirDocument, ReportStatus, compose_document, compose_narrative, mint_report_id,
};

#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub entities: Entities,
    pub sections: Vec<CategoryMatch>,
}

pub struct IntakeEngine {
    classifier: Classifier,
    extractor: Box<dyn EntityExtractor>,
    catalog_sections: usize,
}

impl IntakeEngine {
    pub fn new(
        classifier: Classifier,
        extractor: Box<dyn EntityExtractor>,
        catalog_sections: usize,
    ) -> Self {
        Self {
            classifier,
            extractor,
            catalog_sections,
        }
    }

    pub fn from_catalog(catalog: &Catalog, keywords: KeywordConfig) -> Result<Self> {
        let fallback = FallbackIndex::embedded()?;
        let classifier = Classifier::new(catalog, keywords, &fallback);
        let extractor = HeuristicEntityExtractor::new()?;
        Ok(Self::new(
            classifier,
            Box::new(extractor),
            catalog.entries().len(),
        ))
    }

    pub fn index(&self) -> &KeywordIndex {
        self.classifier.index()
    }

    pub fn catalog_sections(&self) -> usize {
        self.catalog_sections
    }

    pub fn analyze(&self, incident_text: &str) -> Analysis {
        let entities = self.extractor.extract(incident_text);
        let sections = self.classifier.identify(incident_text);
        debug!(
            accused = entities.accused.len(),
            objects = entities.objects.len(),
            sections = sections.len(),
            "analyzed incident description"
        );
        Analysis { entities, sections }
    }

    pub fn snapshot(&self, answers: &Answers, status: ReportStatus) -> FirDocument {
        let analysis = answers
            .get(QuestionKey::IncidentDescription)
            .map(|description| self.analyze(description))
            .unwrap_or_default();

        let now = Local::now();
        compose_document(
            answers,
            &analysis.entities,
            &analysis.sections,
            mint_report_id(now),
            status,
            now,
        )
    }

    pub fn final_report(&self, answers: &Answers, status: ReportStatus) -> FirDocument {
        let mut document = self.snapshot(answers, status);
        if document.narrative.is_empty() {
            document.narrative = compose_narrative(answers, &document.entities);
        }
        document
    }
}
