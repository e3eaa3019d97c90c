use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use super::*;
use crate::catalog::Catalog;
use crate::classify::KeywordConfig;
use crate::intake::IntakeEngine;
use crate::model::Category;
use crate::report::{PLACEHOLDER, ReportStatus};

const EXAMPLE_ANSWERS: [&str; 9] = [
    "Rahul Sharma",
    "9876543210",
    "Delhi",
    "Someone stole my wallet and phone near the market",
    "2024-01-01 10:00",
    "Connaught Place",
    "Amit Verma",
    "CCTV footage",
    "",
];

fn engine() -> IntakeEngine {
    IntakeEngine::from_catalog(&Catalog::empty(), KeywordConfig::default())
        .expect("engine should build from the fallback index")
}

#[test]
fn question_table_is_index_aligned() {
    let keys = QUESTIONS
        .iter()
        .map(|(key, _)| key.as_str())
        .collect::<Vec<&str>>();
    assert_eq!(
        keys,
        vec![
            "name",
            "contact",
            "address",
            "incident_description",
            "date_time",
            "location",
            "witnesses",
            "evidence",
            "additional_info",
        ]
    );
    assert_eq!(QUESTION_COUNT, 9);

    for (index, (key, prompt)) in QUESTIONS.iter().enumerate() {
        assert_eq!(QuestionKey::at(index), Some(*key));
        assert_eq!(prompt_at(index), Some(*prompt));
    }
    assert_eq!(QuestionKey::at(QUESTION_COUNT), None);
    assert_eq!(prompt_at(QUESTION_COUNT), None);
}

#[test]
fn empty_answers_read_back_as_absent() {
    let mut answers = Answers::default();
    answers.insert(QuestionKey::AdditionalInfo, "");
    answers.insert(QuestionKey::Witnesses, "   ");
    answers.insert(QuestionKey::Name, "Rahul Sharma");

    assert_eq!(answers.get(QuestionKey::AdditionalInfo), None);
    assert_eq!(answers.raw(QuestionKey::AdditionalInfo), Some(""));
    assert_eq!(answers.get(QuestionKey::Witnesses), Some("   "));
    assert_eq!(answers.get(QuestionKey::Name), Some("Rahul Sharma"));
    assert_eq!(answers.get(QuestionKey::Contact), None);
    assert_eq!(answers.raw(QuestionKey::Contact), None);
}

#[test]
fn new_session_starts_at_first_question() {
    let engine = engine();
    let session = ConversationSession::new("s-1");

    assert_eq!(session.current_question_index(), 0);
    assert!(!session.is_done());
    assert_eq!(session.answers(), &Answers::default());

    let turn = session.opening_turn(&engine);
    assert_eq!(turn.next_question, Some(QUESTIONS[0].1));
    assert!(!turn.completed);
    assert_eq!(turn.progress, Progress { current: 0, total: 9 });
    assert!(turn.fir_content.applicable_sections.is_empty());
    assert!(turn.fir_content.narrative.is_empty());
    assert_eq!(turn.fir_content.complainant.name, PLACEHOLDER);
    assert_eq!(turn.fir_content.status, ReportStatus::InProgress);
}

#[test]
fn example_interview_classifies_theft_and_completes() {
    let engine = engine();
    let mut session = ConversationSession::new("s-example");

    let turns = EXAMPLE_ANSWERS
        .iter()
        .map(|answer| session.submit(answer, &engine))
        .collect::<Vec<Turn>>();

    let before_description = &turns[2];
    assert!(before_description.fir_content.applicable_sections.is_empty());
    assert_eq!(before_description.fir_content.complainant.address, "Delhi");

    let fourth = &turns[3];
    assert!(!fourth.fir_content.applicable_sections.is_empty());
    assert!(
        fourth
            .fir_content
            .applicable_sections
            .iter()
            .any(|section| section.category == Some(Category::Theft))
    );
    assert!(fourth.fir_content.entities.objects.contains("wallet"));
    assert!(fourth.fir_content.narrative.contains("Rahul Sharma"));
    assert_eq!(fourth.progress, Progress { current: 4, total: 9 });
    assert_eq!(fourth.next_question, Some(QUESTIONS[4].1));

    assert_eq!(turns[7].fir_content.status, ReportStatus::InProgress);

    let last = &turns[8];
    assert!(last.completed);
    assert_eq!(last.next_question, None);
    assert_eq!(last.progress, Progress { current: 9, total: 9 });
    assert_eq!(last.fir_content.status, ReportStatus::Completed);
    assert_eq!(last.fir_content.incident.additional_info, "");
    assert_eq!(last.fir_content.incident.location, "Connaught Place");
    assert_eq!(turns[7].fir_content.incident.additional_info, PLACEHOLDER);
    assert!(session.is_done());
}

#[test]
fn whitespace_description_still_triggers_analysis() {
    let engine = engine();
    let mut session = ConversationSession::new("s-whitespace");
    for answer in ["Rahul Sharma", "9876543210", "Delhi"] {
        session.submit(answer, &engine);
    }

    let turn = session.submit("   ", &engine);

    assert_eq!(turn.fir_content.applicable_sections.len(), 1);
    assert!(turn.fir_content.applicable_sections[0].is_undetermined());
    assert!(turn.fir_content.narrative.contains("Rahul Sharma"));
    assert_eq!(turn.fir_content.incident.description, "   ");
}

#[test]
fn downloadable_report_carries_narrative_before_any_description() {
    let engine = engine();
    let mut session = ConversationSession::new("s-early");
    let turn = session.submit("Rahul Sharma", &engine);
    assert!(turn.fir_content.narrative.is_empty());

    let report = session.render_report(&engine);
    assert!(report.narrative.contains("The complainant, Rahul Sharma, states that:"));
    assert!(report.applicable_sections.is_empty());
}

#[test]
fn submit_after_completion_leaves_answers_untouched() {
    let engine = engine();
    let mut session = ConversationSession::new("s-done");
    for answer in EXAMPLE_ANSWERS {
        session.submit(answer, &engine);
    }
    let answers_before = session.answers().clone();

    let turn = session.submit("one more thing", &engine);

    assert!(turn.completed);
    assert_eq!(turn.next_question, None);
    assert_eq!(session.current_question_index(), QUESTION_COUNT);
    assert_eq!(session.answers(), &answers_before);
    assert_eq!(turn.progress, Progress { current: 9, total: 9 });
}

#[test]
fn rendered_reports_mint_fresh_identifiers() {
    let engine = engine();
    let mut session = ConversationSession::new("s-report");
    session.submit("Rahul Sharma", &engine);

    let first = session.render_report(&engine);
    let second = session.render_report(&engine);
    assert!(first.fir_number.starts_with("FIR/"));
    assert_ne!(first.fir_number, second.fir_number);
    assert_eq!(first.status, ReportStatus::InProgress);
}

#[test]
fn store_returns_same_session_for_same_id() {
    let store = InMemorySessionStore::new(None);

    let first = store.get_or_create("abc");
    let second = store.get_or_create("abc");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(store.len(), 1);

    let fetched = store.get("abc").expect("session should exist");
    assert!(Arc::ptr_eq(&first, &fetched));
    assert!(store.get("missing").is_none());
}

#[test]
fn store_put_replaces_and_evict_removes() {
    let store = InMemorySessionStore::new(None);
    let original = store.get_or_create("abc");

    let replacement = store.put(ConversationSession::new("abc"));
    assert!(!Arc::ptr_eq(&original, &replacement));
    assert_eq!(store.len(), 1);

    assert!(store.evict("abc"));
    assert!(!store.evict("abc"));
    assert!(store.is_empty());
}

#[test]
fn store_without_ttl_never_expires_sessions() {
    let store = InMemorySessionStore::new(None);
    store.get_or_create("abc");

    let far_future = Instant::now() + Duration::from_secs(365 * 24 * 3600);
    assert_eq!(store.evict_expired(far_future), 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn store_evicts_sessions_idle_past_ttl() {
    let store = InMemorySessionStore::new(Some(Duration::from_secs(60)));
    store.get_or_create("first");
    store.get_or_create("second");

    assert_eq!(store.evict_expired(Instant::now()), 0);

    let later = Instant::now() + Duration::from_secs(120);
    assert_eq!(store.evict_expired(later), 2);
    assert!(store.is_empty());
}

#[test]
fn concurrent_submissions_to_one_session_are_serialized() {
    let engine = Arc::new(engine());
    let store = InMemorySessionStore::new(None);

    thread::scope(|scope| {
        for worker in 0..16 {
            let engine = Arc::clone(&engine);
            let store = &store;
            scope.spawn(move || {
                let handle = store.get_or_create("shared");
                let mut session = handle.lock().expect("session lock should not be poisoned");
                session.submit(&format!("answer {worker}"), &engine);
            });
        }
    });

    let handle = store.get("shared").expect("shared session should exist");
    let session = handle.lock().expect("session lock should not be poisoned");
    assert!(session.is_done());
    assert_eq!(session.current_question_index(), QUESTION_COUNT);
    assert!(
        QUESTIONS
            .iter()
            .all(|(key, _)| session.answers().get(*key).is_some())
    );
    assert_eq!(store.len(), 1);
}
