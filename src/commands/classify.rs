use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::ClassifyArgs;
use crate::intake::Analysis;
use crate::model::{CategoryMatch, Entities};

#[derive(Debug, Serialize)]
struct ClassifyResponse {
    text: String,
    returned: usize,
    fallback_used: bool,
    entities: Entities,
    sections: Vec<CategoryMatch>,
}

pub fn run(args: ClassifyArgs) -> Result<()> {
    let engine = super::build_engine(&args.source)?;
    let Analysis { entities, sections } = engine.analyze(&args.text);

    info!(
        sections = sections.len(),
        accused = entities.accused.len(),
        objects = entities.objects.len(),
        undetermined = sections.first().is_some_and(CategoryMatch::is_undetermined),
        "classified incident text"
    );

    let response = ClassifyResponse {
        text: args.text,
        returned: sections.len(),
        fallback_used: engine.index().fallback_merged(),
        entities,
        sections,
    };

    if args.json {
        write_json_response(&response)
    } else {
        write_text_response(&response)
    }
}

fn write_json_response(response: &ClassifyResponse) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, response)
        .context("failed to serialize classify json output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn write_text_response(response: &ClassifyResponse) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    writeln!(output, "Text: {}", response.text)?;
    writeln!(
        output,
        "Entities: accused=[{}] objects=[{}]",
        response.entities.accused.join(", "),
        response
            .entities
            .objects
            .iter()
            .map(String::as_str)
            .collect::<Vec<&str>>()
            .join(", ")
    )?;
    writeln!(
        output,
        "Sections: {} fallback_used={}",
        response.returned, response.fallback_used
    )?;

    for (rank, section) in response.sections.iter().enumerate() {
        let category = section
            .category
            .map(|category| category.as_str())
            .unwrap_or("-");
        writeln!(
            output,
            "{}.\t{}\t{}\t{}",
            rank + 1,
            section.section_label,
            category,
            section.title
        )?;
        writeln!(output, "\tchapter: {}", section.chapter)?;
        writeln!(output, "\treasoning: {}", section.reasoning)?;
    }

    output.flush()?;
    Ok(())
}
