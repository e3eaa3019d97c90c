mod questions;
mod session;
mod store;
#[cfg(test)]
mod tests;

pub use questions::{Answers, QUESTION_COUNT, QUESTIONS, QuestionKey, prompt_at};
pub use session::{ConversationSession, Progress, Turn};
pub use store::{InMemorySessionStore, SessionHandle, SessionStore};
