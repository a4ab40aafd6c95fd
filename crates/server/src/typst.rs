use std::sync::LazyLock;

use chrono::Datelike;
use ecow::EcoVec;
use shared_types::AppError;
use typst::diag::{FileError, FileResult, SourceDiagnostic};
use typst::foundations::{Bytes, Datetime};
use typst::layout::PagedDocument;
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};

/// Parameters for generating a complaint PDF.
pub struct ComplaintParams {
    pub complainant_name: String,
    pub defendant_name: String,
    pub legal_category: String,
    pub claim_amount: String,
    pub incident_date: String,
    pub grievance_statement: String,
    pub legal_sections: String,
    pub courtroom_statement: String,
    pub document_date: String,
}

/// Escape special Typst characters inside string literals (`\`, `"`, `#`).
pub fn escape_typst(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('#', "\\#")
}

/// Build a complete Typst source by prepending `#let` variable bindings
/// to the `complaint.typ` template.
pub fn build_complaint_source(params: &ComplaintParams) -> String {
    let bindings = format!(
        r##"#let complainant_name = "{complainant_name}"
#let defendant_name = "{defendant_name}"
#let legal_category = "{legal_category}"
#let claim_amount = "{claim_amount}"
#let incident_date = "{incident_date}"
#let grievance_statement = "{grievance_statement}"
#let legal_sections = "{legal_sections}"
#let courtroom_statement = "{courtroom_statement}"
#let document_date = "{document_date}"

"##,
        complainant_name = escape_typst(&params.complainant_name),
        defendant_name = escape_typst(&params.defendant_name),
        legal_category = escape_typst(&params.legal_category),
        claim_amount = escape_typst(&params.claim_amount),
        incident_date = escape_typst(&params.incident_date),
        grievance_statement = escape_typst(&params.grievance_statement),
        legal_sections = escape_typst(&params.legal_sections),
        courtroom_statement = escape_typst(&params.courtroom_statement),
        document_date = escape_typst(&params.document_date),
    );

    let template = include_str!("../../../templates/complaint.typ");
    format!("{bindings}{template}")
}

// ---------------------------------------------------------------------------
// Static singletons — initialized once, reused across all requests
// ---------------------------------------------------------------------------

static FONTS: LazyLock<Vec<Font>> = LazyLock::new(|| {
    typst_assets::fonts()
        .flat_map(|data| Font::iter(Bytes::new(data)))
        .collect()
});

static FONT_BOOK: LazyLock<LazyHash<FontBook>> =
    LazyLock::new(|| LazyHash::new(FontBook::from_fonts(FONTS.iter())));

static LIBRARY: LazyLock<LazyHash<Library>> = LazyLock::new(|| LazyHash::new(Library::default()));

// ---------------------------------------------------------------------------
// World implementation for in-process Typst compilation
// ---------------------------------------------------------------------------

struct CourtmateWorld {
    source: Source,
}

impl CourtmateWorld {
    fn new(source_text: &str) -> Self {
        Self {
            source: Source::detached(source_text),
        }
    }
}

impl World for CourtmateWorld {
    fn library(&self) -> &LazyHash<Library> {
        &LIBRARY
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &FONT_BOOK
    }

    fn main(&self) -> FileId {
        self.source.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.source.id() {
            Ok(self.source.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rooted_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rooted_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        FONTS.get(index).cloned()
    }

    fn today(&self, offset: Option<i64>) -> Option<Datetime> {
        let now = chrono::Utc::now();
        let naive = if let Some(hours) = offset {
            let tz = chrono::FixedOffset::east_opt((hours as i32) * 3600)?;
            now.with_timezone(&tz).naive_local()
        } else {
            now.naive_utc()
        };
        Datetime::from_ymd(
            naive.year(),
            (naive.month0() + 1) as u8,
            (naive.day0() + 1) as u8,
        )
    }
}

// ---------------------------------------------------------------------------
// Public compilation entry point
// ---------------------------------------------------------------------------

/// Compile a Typst source string into PDF bytes using the in-process library.
///
/// Compilation is offloaded to a blocking thread since it is CPU-bound.
pub async fn compile_typst(source: &str) -> Result<Vec<u8>, AppError> {
    let source = source.to_owned();

    tokio::task::spawn_blocking(move || compile_typst_sync(&source))
        .await
        .map_err(|e| AppError::internal(format!("Typst task panicked: {e}")))?
}

fn compile_typst_sync(source: &str) -> Result<Vec<u8>, AppError> {
    let world = CourtmateWorld::new(source);

    let warned = typst::compile::<PagedDocument>(&world);
    let document = warned
        .output
        .map_err(|diagnostics| format_diagnostics("Typst compilation failed", &diagnostics))?;

    typst_pdf::pdf(&document, &typst_pdf::PdfOptions::default())
        .map_err(|diagnostics| format_diagnostics("PDF export failed", &diagnostics))
}

fn format_diagnostics(prefix: &str, diagnostics: &EcoVec<SourceDiagnostic>) -> AppError {
    let msgs: Vec<String> = diagnostics.iter().map(|d| d.message.to_string()).collect();
    AppError::internal(format!("{prefix}: {}", msgs.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_special_chars() {
        assert_eq!(escape_typst(r#"a "quoted" #tag \path"#), r#"a \"quoted\" \#tag \\path"#);
    }

    #[test]
    fn complaint_source_contains_bindings_and_template() {
        let params = ComplaintParams {
            complainant_name: "Asha Patil".to_string(),
            defendant_name: "Acme Appliances".to_string(),
            legal_category: "Consumer Fraud".to_string(),
            claim_amount: "500".to_string(),
            incident_date: "2026-03-14".to_string(),
            grievance_statement: "The refrigerator failed within a week.".to_string(),
            legal_sections: "Section 2(47), CPA 2019".to_string(),
            courtroom_statement: "Your Honour, I am filing this complaint against...".to_string(),
            document_date: "2026-04-01".to_string(),
        };
        let source = build_complaint_source(&params);
        assert!(source.contains(r#"#let defendant_name = "Acme Appliances""#));
        assert!(source.contains("CONSUMER COMPLAINT"));
    }
}
