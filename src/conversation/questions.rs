use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKey {
    Name,
    Contact,
    Address,
    IncidentDescription,
    DateTime,
    Location,
    Witnesses,
    Evidence,
    AdditionalInfo,
}

pub const QUESTIONS: [(QuestionKey, &str); 9] = [
    (
        QuestionKey::Name,
        "आपका पूरा नाम क्या है? / What is your full name?",
    ),
    (
        QuestionKey::Contact,
        "आपका संपर्क नंबर क्या है? / What is your contact number?",
    ),
    (
        QuestionKey::Address,
        "आपका पता क्या है? / What is your address?",
    ),
    (
        QuestionKey::IncidentDescription,
        "कृपया घटना का विस्तार से वर्णन करें। / Please describe the incident that occurred in detail.",
    ),
    (
        QuestionKey::DateTime,
        "यह घटना कब हुई? (तारीख और समय) / When did this incident happen? (Date and time)",
    ),
    (
        QuestionKey::Location,
        "यह घटना कहाँ हुई? / Where did this incident take place?",
    ),
    (
        QuestionKey::Witnesses,
        "क्या कोई गवाह हैं? अगर हाँ, तो उनके नाम बताएं। / Are there any witnesses? If yes, please provide their names.",
    ),
    (
        QuestionKey::Evidence,
        "क्या आपके पास इस घटना से संबंधित कोई सबूत या दस्तावेज हैं? / Do you have any evidence or documents related to this incident?",
    ),
    (
        QuestionKey::AdditionalInfo,
        "क्या आप अपनी रिपोर्ट में कुछ और जोड़ना चाहते हैं? / Is there anything else you would like to add to your report?",
    ),
];

pub const QUESTION_COUNT: usize = QUESTIONS.len();

impl QuestionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Contact => "contact",
            Self::Address => "address",
            Self::IncidentDescription => "incident_description",
            Self::DateTime => "date_time",
            Self::Location => "location",
            Self::Witnesses => "witnesses",
            Self::Evidence => "evidence",
            Self::AdditionalInfo => "additional_info",
        }
    }

    pub fn at(index: usize) -> Option<QuestionKey> {
        QUESTIONS.get(index).map(|(key, _)| *key)
    }
}

pub fn prompt_at(index: usize) -> Option<&'static str> {
    QUESTIONS.get(index).map(|(_, prompt)| *prompt)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    values: BTreeMap<QuestionKey, String>,
}

impl Answers {
    pub fn insert(&mut self, key: QuestionKey, answer: impl Into<String>) {
        self.values.insert(key, answer.into());
    }

    // Empty answers count as not given; whitespace-only answers do not.
    pub fn get(&self, key: QuestionKey) -> Option<&str> {
        self.raw(key).filter(|value| !value.is_empty())
    }

    pub fn raw(&self, key: QuestionKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }
}
