use super::document::FirDocument;

const STYLE: &str = r#"
        body { font-family: 'Times New Roman', serif; line-height: 1.6; margin: 40px; background: white; color: #000; }
        .header { text-align: center; border-bottom: 3px solid #000; padding-bottom: 20px; margin-bottom: 30px; }
        .title { font-size: 24px; font-weight: bold; margin-bottom: 10px; }
        .fir-info { margin-bottom: 20px; }
        .section { margin-bottom: 25px; }
        .section h3 { color: #000; border-bottom: 2px solid #dc3545; padding-bottom: 5px; margin-bottom: 15px; font-size: 18px; }
        .field { margin-bottom: 10px; display: flex; flex-wrap: wrap; }
        .label { font-weight: bold; min-width: 150px; margin-right: 10px; }
        .value { flex: 1; }
        .sections-list { background: #f8f9fa; padding: 15px; border: 2px solid #dc3545; border-radius: 8px; }
        .section-item { margin-bottom: 10px; padding: 10px; background: white; border: 1px solid #ddd; border-radius: 5px; }
        .narrative { background: #f8f9fa; padding: 20px; border: 2px solid #dc3545; border-radius: 8px; white-space: pre-line; }
        @media print { body { margin: 20px; } .header { page-break-after: avoid; } }
"#;

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for character in input.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn render_html(document: &FirDocument) -> String {
    let fir_number = escape_html(&document.fir_number);
    let mut html = String::with_capacity(8 * 1024);

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>FIR Document - {fir_number}</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="header">
        <div class="title">FIRST INFORMATION REPORT (FIR)</div>
        <div class="fir-info">
            <strong>FIR Number:</strong> {fir_number}<br>
            <strong>Date Registered:</strong> {registered}<br>
            <strong>Status:</strong> {status}
        </div>
    </div>
"#,
        registered = escape_html(&document.date_registered),
        status = escape_html(document.status.label()),
    ));

    let complainant = &document.complainant;
    push_block(
        &mut html,
        "Complainant Information",
        &[
            ("Name", &complainant.name),
            ("Contact Number", &complainant.contact),
            ("Address", &complainant.address),
        ],
    );

    let incident = &document.incident;
    push_block(
        &mut html,
        "Incident Details",
        &[
            ("Description", &incident.description),
            ("Date &amp; Time", &incident.date_time),
            ("Location", &incident.location),
            ("Witnesses", &incident.witnesses),
            ("Evidence", &incident.evidence),
            ("Additional Information", &incident.additional_info),
        ],
    );

    if !document.applicable_sections.is_empty() {
        html.push_str(
            r#"
    <div class="section">
        <h3>Applicable Legal Sections</h3>
        <div class="sections-list">
"#,
        );
        for section in &document.applicable_sections {
            let reasoning = if section.reasoning.is_empty() {
                "No specific reasoning provided."
            } else {
                section.reasoning.as_str()
            };
            html.push_str(&format!(
                r#"            <div class="section-item">
                <strong>{label}:</strong> {title}<br>
                <em>{excerpt}</em><br>
                <strong>Reasoning:</strong> <em>{reasoning}</em>
            </div>
"#,
                label = escape_html(&section.section_label),
                title = escape_html(&section.title),
                excerpt = escape_html(&section.content_excerpt),
                reasoning = escape_html(reasoning),
            ));
        }
        html.push_str("        </div>\n    </div>\n");
    }

    if !document.narrative.is_empty() {
        html.push_str(&format!(
            r#"
    <div class="section">
        <h3>Incident Narrative</h3>
        <div class="narrative">{}</div>
    </div>
"#,
            escape_html(&document.narrative)
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

// Labels are trusted literals; values are escaped.
fn push_block(html: &mut String, heading: &str, fields: &[(&str, &String)]) {
    html.push_str(&format!(
        "\n    <div class=\"section\">\n        <h3>{heading}</h3>\n"
    ));
    for (label, value) in fields {
        html.push_str(&format!(
            r#"        <div class="field">
            <span class="label">{label}:</span>
            <span class="value">{}</span>
        </div>
"#,
            escape_html(value)
        ));
    }
    html.push_str("    </div>\n");
}
