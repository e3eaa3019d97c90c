use serde::Serialize;
use tracing::debug;

use crate::intake::IntakeEngine;
use crate::report::{FirDocument, ReportStatus};

use super::questions::{Answers, QUESTION_COUNT, QuestionKey, prompt_at};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct Turn {
    pub next_question: Option<&'static str>,
    pub completed: bool,
    pub fir_content: FirDocument,
    pub progress: Progress,
}

#[derive(Debug, Clone)]
pub struct ConversationSession {
    session_id: String,
    current_question_index: usize,
    answers: Answers,
}

impl ConversationSession {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            current_question_index: 0,
            answers: Answers::default(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn is_done(&self) -> bool {
        self.current_question_index >= QUESTION_COUNT
    }

    pub fn current_question(&self) -> Option<&'static str> {
        prompt_at(self.current_question_index)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            current: self.current_question_index,
            total: QUESTION_COUNT,
        }
    }

    pub fn status(&self) -> ReportStatus {
        if self.is_done() {
            ReportStatus::Completed
        } else {
            ReportStatus::InProgress
        }
    }

    pub fn opening_turn(&self, engine: &IntakeEngine) -> Turn {
        Turn {
            next_question: self.current_question(),
            completed: self.is_done(),
            fir_content: engine.snapshot(&self.answers, self.status()),
            progress: self.progress(),
        }
    }

    // A finished session reports completion again without touching its answers.
    pub fn submit(&mut self, answer: &str, engine: &IntakeEngine) -> Turn {
        let Some(key) = QuestionKey::at(self.current_question_index) else {
            debug!(
                session_id = %self.session_id,
                "submission ignored; conversation already complete"
            );
            return self.opening_turn(engine);
        };

        self.answers.insert(key, answer);

        let answering_last = self.current_question_index + 1 >= QUESTION_COUNT;
        let status = if answering_last {
            ReportStatus::Completed
        } else {
            ReportStatus::InProgress
        };
        let fir_content = engine.snapshot(&self.answers, status);

        self.current_question_index += 1;

        debug!(
            session_id = %self.session_id,
            question = key.as_str(),
            progress = self.current_question_index,
            "recorded answer"
        );

        Turn {
            next_question: self.current_question(),
            completed: self.is_done(),
            fir_content,
            progress: self.progress(),
        }
    }

    pub fn render_report(&self, engine: &IntakeEngine) -> FirDocument {
        engine.final_report(&self.answers, self.status())
    }
}
