//! Multi-statement export.
//!
//! A batch export renders the statements for offsets `0..count` one page at a
//! time into a [`StatementSink`]. Each page is described by a [`RenderInput`]
//! whose display override holds the historical statement; the live statement
//! for the configuration stays untouched.

use tracing::debug;

use super::markdown::generate_markdown;
use crate::calculation::calculate_paystub;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculatedPaystub, EmploymentConfiguration};

/// Largest number of statements a single export may contain.
pub const MAX_STATEMENT_COUNT: u32 = 52;

/// Document title of a combined export.
pub const DOCUMENT_TITLE: &str = "Payroll Checks";

/// Document subject of a combined export.
pub const DOCUMENT_SUBJECT: &str = "Statement of Earnings and Deductions";

/// What a statement view should show.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    /// The configuration the statement belongs to.
    pub configuration: &'a EmploymentConfiguration,
    /// The live (offset 0) statement for the configuration.
    pub live: &'a CalculatedPaystub,
    /// A statement to show instead of the live one.
    pub display_override: Option<&'a CalculatedPaystub>,
}

impl<'a> RenderInput<'a> {
    /// A view of the live statement.
    pub fn live(configuration: &'a EmploymentConfiguration, live: &'a CalculatedPaystub) -> Self {
        Self {
            configuration,
            live,
            display_override: None,
        }
    }

    /// The same view showing `paystub` instead of the live statement.
    pub fn with_override(self, paystub: &'a CalculatedPaystub) -> Self {
        Self {
            display_override: Some(paystub),
            ..self
        }
    }

    /// The statement to render: the override when set, else the live one.
    pub fn displayed(&self) -> &'a CalculatedPaystub {
        self.display_override.unwrap_or(self.live)
    }
}

/// Metadata attached to a combined export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentProperties {
    /// Document title.
    pub title: String,
    /// Document subject.
    pub subject: String,
    /// Document author (the employer).
    pub author: String,
    /// Suggested file name for the combined document.
    pub file_name: String,
}

impl DocumentProperties {
    /// Builds the properties for a configuration's combined export.
    pub fn for_configuration(config: &EmploymentConfiguration) -> Self {
        Self {
            title: DOCUMENT_TITLE.to_string(),
            subject: DOCUMENT_SUBJECT.to_string(),
            author: config.company_name.clone(),
            file_name: combined_file_name(&config.employee_name),
        }
    }
}

/// Receives rendered statements, one page at a time.
///
/// Pages arrive strictly in offset order and a page is never requested
/// before the previous one has been accepted.
pub trait StatementSink {
    /// The finished artifact.
    type Output;

    /// Called once before the first page.
    fn begin(&mut self, properties: &DocumentProperties) -> EngineResult<()>;

    /// Renders page `index` (equal to the statement's offset).
    fn add_page(&mut self, index: u32, input: &RenderInput<'_>) -> EngineResult<()>;

    /// Completes the artifact after the last page.
    fn finish(self) -> EngineResult<Self::Output>;
}

/// Checks that a batch of `count` statements is within `1..=MAX_STATEMENT_COUNT`.
pub fn validate_statement_count(count: u32) -> EngineResult<()> {
    if count == 0 || count > MAX_STATEMENT_COUNT {
        return Err(EngineError::InvalidRequest {
            field: "count".to_string(),
            message: format!(
                "must be between 1 and {}, got {}",
                MAX_STATEMENT_COUNT, count
            ),
        });
    }
    Ok(())
}

/// Renders the `count` most recent statements into `sink`, newest first.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRequest`] when `count` is not in
/// `1..=MAX_STATEMENT_COUNT`, and propagates calculation and sink errors.
/// Nothing is produced on error.
pub fn export_statements<S: StatementSink>(
    config: &EmploymentConfiguration,
    count: u32,
    mut sink: S,
) -> EngineResult<S::Output> {
    validate_statement_count(count)?;

    let live = calculate_paystub(config, 0)?;
    let view = RenderInput::live(config, &live);

    sink.begin(&DocumentProperties::for_configuration(config))?;

    for offset in 0..count {
        let paystub = calculate_paystub(config, offset)?;
        debug!(
            offset,
            check_number = paystub.check_number,
            "rendering statement page"
        );
        sink.add_page(offset, &view.with_override(&paystub))?;
    }

    sink.finish()
}

/// A combined Markdown document with one statement per page.
#[derive(Debug, Default)]
pub struct MarkdownDocument {
    properties: Option<DocumentProperties>,
    pages: Vec<String>,
}

/// Separator placed between pages of a [`MarkdownDocument`].
pub const PAGE_SEPARATOR: &str = "\n---\n\n";

impl MarkdownDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatementSink for MarkdownDocument {
    type Output = String;

    fn begin(&mut self, properties: &DocumentProperties) -> EngineResult<()> {
        self.properties = Some(properties.clone());
        Ok(())
    }

    fn add_page(&mut self, _index: u32, input: &RenderInput<'_>) -> EngineResult<()> {
        self.pages
            .push(generate_markdown(input.configuration, input.displayed()));
        Ok(())
    }

    fn finish(self) -> EngineResult<String> {
        if self.properties.is_none() {
            return Err(EngineError::ExportError {
                message: "document finished before it was started".to_string(),
            });
        }
        Ok(self.pages.join(PAGE_SEPARATOR))
    }
}

fn underscore_whitespace(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }
    out
}

/// File stem for a single statement, e.g. `paystub_Jane_Smith`.
///
/// Every run of whitespace in the name becomes one underscore.
///
/// # Example
///
/// ```
/// use paystub_engine::export::statement_file_stem;
///
/// assert_eq!(statement_file_stem("Jane  Smith"), "paystub_Jane_Smith");
/// ```
pub fn statement_file_stem(employee_name: &str) -> String {
    format!("paystub_{}", underscore_whitespace(employee_name))
}

/// File name for a combined export, e.g. `paystubs_Jane_Smith_portrait.pdf`.
pub fn combined_file_name(employee_name: &str) -> String {
    format!("paystubs_{}_portrait.pdf", underscore_whitespace(employee_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::hourly_configuration;

    #[derive(Default)]
    struct RecordingSink {
        properties: Vec<DocumentProperties>,
        pages: Vec<(u32, i64, i64)>,
        fail_on: Option<u32>,
    }

    impl StatementSink for RecordingSink {
        type Output = Vec<(u32, i64, i64)>;

        fn begin(&mut self, properties: &DocumentProperties) -> EngineResult<()> {
            self.properties.push(properties.clone());
            Ok(())
        }

        fn add_page(&mut self, index: u32, input: &RenderInput<'_>) -> EngineResult<()> {
            if self.fail_on == Some(index) {
                return Err(EngineError::ExportError {
                    message: format!("page {} failed", index),
                });
            }
            self.pages
                .push((index, input.displayed().check_number, input.live.check_number));
            Ok(())
        }

        fn finish(self) -> EngineResult<Self::Output> {
            assert_eq!(self.properties.len(), 1);
            Ok(self.pages)
        }
    }

    #[test]
    fn test_pages_arrive_in_offset_order() {
        let config = hourly_configuration();
        let pages = export_statements(&config, 3, RecordingSink::default()).unwrap();

        let indices: Vec<u32> = pages.iter().map(|p| p.0).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_each_page_shows_its_own_statement() {
        let config = hourly_configuration();
        let pages = export_statements(&config, 3, RecordingSink::default()).unwrap();

        for (offset, displayed, live) in pages {
            assert_eq!(displayed, calculate_paystub(&config, offset).unwrap().check_number);
            assert_eq!(live, 18183);
        }
    }

    #[test]
    fn test_count_must_be_in_range() {
        let config = hourly_configuration();

        for count in [0, MAX_STATEMENT_COUNT + 1] {
            let result = export_statements(&config, count, RecordingSink::default());
            match result {
                Err(EngineError::InvalidRequest { field, .. }) => assert_eq!(field, "count"),
                other => panic!("Expected InvalidRequest, got {:?}", other.map(|p| p.len())),
            }
        }
        assert!(export_statements(&config, MAX_STATEMENT_COUNT, RecordingSink::default()).is_ok());
    }

    #[test]
    fn test_sink_error_stops_export() {
        let config = hourly_configuration();
        let sink = RecordingSink {
            fail_on: Some(1),
            ..RecordingSink::default()
        };

        let result = export_statements(&config, 4, sink);
        assert!(matches!(result, Err(EngineError::ExportError { .. })));
    }

    #[test]
    fn test_document_properties() {
        let config = hourly_configuration();
        let properties = DocumentProperties::for_configuration(&config);

        assert_eq!(properties.title, "Payroll Checks");
        assert_eq!(properties.subject, "Statement of Earnings and Deductions");
        assert_eq!(properties.author, "Tech Solutions Inc.");
        assert_eq!(properties.file_name, "paystubs_Jane_Smith_portrait.pdf");
    }

    #[test]
    fn test_markdown_document_has_one_page_per_statement() {
        let config = hourly_configuration();
        let document = export_statements(&config, 3, MarkdownDocument::new()).unwrap();

        assert_eq!(document.matches("# PAY STATEMENT - ").count(), 3);
        assert_eq!(document.matches(PAGE_SEPARATOR).count(), 2);
        assert!(document.contains("**Check #:** 18183"));
        assert!(document.contains("**Check #:** 18172"));
    }

    #[test]
    fn test_markdown_document_requires_begin() {
        let result = MarkdownDocument::new().finish();
        assert!(matches!(result, Err(EngineError::ExportError { .. })));
    }

    #[test]
    fn test_render_input_prefers_override() {
        let config = hourly_configuration();
        let live = calculate_paystub(&config, 0).unwrap();
        let older = calculate_paystub(&config, 2).unwrap();

        let view = RenderInput::live(&config, &live);
        assert_eq!(view.displayed(), &live);
        assert_eq!(view.with_override(&older).displayed(), &older);
        // the live view is unchanged
        assert_eq!(view.displayed(), &live);
    }

    #[test]
    fn test_file_names_collapse_whitespace() {
        assert_eq!(statement_file_stem("Jane Smith"), "paystub_Jane_Smith");
        assert_eq!(statement_file_stem("Mary \t Ann  Lee"), "paystub_Mary_Ann_Lee");
        assert_eq!(combined_file_name("Jane Smith"), "paystubs_Jane_Smith_portrait.pdf");
    }
}
