use crate::conversation::{Answers, QuestionKey};
use crate::model::Entities;

const HEADER: &str = "घटना का विवरण: / DETAILS OF THE INCIDENT:";
const CLOSING: &str = "उपरोक्त तथ्य एक अपराध का गठन करते हैं और शिकायतकर्ता उचित कानूनी कार्रवाई का अनुरोध करता है। / The above facts constitute an offence and the complainant requests for appropriate legal action.";

pub fn compose_narrative(answers: &Answers, entities: &Entities) -> String {
    let mut lines = vec![HEADER.to_string(), String::new()];

    if let Some(name) = answers.get(QuestionKey::Name) {
        lines.push(format!(
            "शिकायतकर्ता, {name}, बताते हैं कि: / The complainant, {name}, states that:"
        ));
    }

    if let Some(description) = answers.get(QuestionKey::IncidentDescription) {
        lines.push(description.to_string());
        lines.push(String::new());
    }

    if let Some(date_time) = answers.get(QuestionKey::DateTime) {
        lines.push(format!(
            "घटना की तारीख और समय: {date_time} / Date and Time of Incident: {date_time}"
        ));
    }

    if let Some(location) = answers.get(QuestionKey::Location) {
        lines.push(format!(
            "घटनास्थल: {location} / Place of Incident: {location}"
        ));
    }

    if let Some(witnesses) = answers.get(QuestionKey::Witnesses) {
        lines.push(format!("गवाह: {witnesses} / Witnesses: {witnesses}"));
    }

    if let Some(evidence) = answers.get(QuestionKey::Evidence) {
        lines.push(format!("सबूत: {evidence} / Evidence: {evidence}"));
    }

    lines.push(String::new());

    if !entities.accused.is_empty() {
        let accused = entities.accused.join(", ");
        lines.push(format!(
            "आरोपी व्यक्ति: {accused} / Accused person(s): {accused}"
        ));
    }

    if !entities.objects.is_empty() {
        let objects = entities
            .objects
            .iter()
            .map(String::as_str)
            .collect::<Vec<&str>>()
            .join(", ");
        lines.push(format!(
            "शामिल वस्तुएं: {objects} / Objects involved: {objects}"
        ));
    }

    lines.push(String::new());
    lines.push(CLOSING.to_string());

    lines.join("\n")
}
