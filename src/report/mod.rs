mod document;
mod html;
mod narrative;

pub use document::{
    FirDocument, PLACEHOLDER, ReportStatus, compose_document, mint_report_id, report_filename,
};
pub use html::{escape_html, render_html};
pub use narrative::compose_narrative;
