use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::cli::DraftArgs;
use crate::conversation::{ConversationSession, QUESTION_COUNT, QUESTIONS, QuestionKey};
use crate::intake::IntakeEngine;
use crate::report::{FirDocument, render_html};
use crate::util::{write_json_pretty, write_text};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerFile {
    Ordered(Vec<String>),
    Keyed(BTreeMap<QuestionKey, String>),
}

impl AnswerFile {
    fn into_sequence(self) -> Vec<String> {
        match self {
            Self::Ordered(answers) => answers,
            Self::Keyed(mut answers) => QUESTIONS
                .iter()
                .map(|(key, _)| answers.remove(key).unwrap_or_default())
                .collect(),
        }
    }
}

pub fn run(args: DraftArgs) -> Result<()> {
    let answers = read_answer_file(&args.answers_path)?;
    let engine = super::build_engine(&args.source)?;

    let document = play_answers(&engine, &answers);

    info!(
        fir_number = %document.fir_number,
        status = document.status.label(),
        sections = document.applicable_sections.len(),
        "drafted report"
    );

    match &args.output {
        Some(path) => {
            write_json_pretty(path, &document)?;
            info!(path = %path.display(), "wrote report json");
        }
        None => write_json_stdout(&document)?,
    }

    if let Some(path) = &args.html {
        write_text(path, &render_html(&document))?;
        info!(path = %path.display(), "wrote report html");
    }

    Ok(())
}

fn read_answer_file(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read(path)
        .with_context(|| format!("failed to read answers file: {}", path.display()))?;
    let file: AnswerFile = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse answers file: {}", path.display()))?;
    Ok(file.into_sequence())
}

fn play_answers(engine: &IntakeEngine, answers: &[String]) -> FirDocument {
    if answers.len() > QUESTION_COUNT {
        warn!(
            provided = answers.len(),
            questions = QUESTION_COUNT,
            "ignoring answers past the last question"
        );
    }

    let mut session = ConversationSession::new("draft");
    for answer in answers.iter().take(QUESTION_COUNT) {
        session.submit(answer, engine);
    }
    session.render_report(engine)
}

fn write_json_stdout(document: &FirDocument) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, document)
        .context("failed to serialize report json output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
