use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::conversation::{Answers, QuestionKey};
use crate::model::{CategoryMatch, Entities};
use crate::util::registration_timestamp;

use super::narrative::compose_narrative;

pub const PLACEHOLDER: &str = "[प्रदान किया जाना है / To be provided]";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReportStatus {
    InProgress,
    Completed,
}

impl ReportStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "प्रगति में / In Progress",
            Self::Completed => "पूर्ण / Completed",
        }
    }
}

impl Serialize for ReportStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplainantDetails {
    pub name: String,
    pub contact: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IncidentDetails {
    pub description: String,
    pub date_time: String,
    pub location: String,
    pub witnesses: String,
    pub evidence: String,
    pub additional_info: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FirDocument {
    pub fir_number: String,
    pub date_registered: String,
    pub status: ReportStatus,
    pub complainant: ComplainantDetails,
    pub incident: IncidentDetails,
    pub applicable_sections: Vec<CategoryMatch>,
    pub entities: Entities,
    pub narrative: String,
}

pub fn mint_report_id(now: DateTime<Local>) -> String {
    let suffix = Uuid::new_v4().simple().to_string()[..8].to_uppercase();
    format!("FIR/{}/{suffix}", now.format("%Y"))
}

pub fn report_filename(report_id: &str) -> String {
    format!("FIR_{}.html", report_id.replace('/', "_"))
}

pub fn compose_document(
    answers: &Answers,
    entities: &Entities,
    sections: &[CategoryMatch],
    report_id: String,
    status: ReportStatus,
    registered_at: DateTime<Local>,
) -> FirDocument {
    let field = |key: QuestionKey| answers.raw(key).unwrap_or(PLACEHOLDER).to_string();

    // Sections only exist once an incident description has been given.
    let narrative = if sections.is_empty() {
        String::new()
    } else {
        compose_narrative(answers, entities)
    };

    FirDocument {
        fir_number: report_id,
        date_registered: registration_timestamp(registered_at),
        status,
        complainant: ComplainantDetails {
            name: field(QuestionKey::Name),
            contact: field(QuestionKey::Contact),
            address: field(QuestionKey::Address),
        },
        incident: IncidentDetails {
            description: field(QuestionKey::IncidentDescription),
            date_time: field(QuestionKey::DateTime),
            location: field(QuestionKey::Location),
            witnesses: field(QuestionKey::Witnesses),
            evidence: field(QuestionKey::Evidence),
            additional_info: field(QuestionKey::AdditionalInfo),
        },
        applicable_sections: sections.to_vec(),
        entities: entities.clone(),
        narrative,
    }
}
