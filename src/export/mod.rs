//! Statement rendering and export.
//!
//! Statements render as Markdown, either one at a time with
//! [`generate_markdown`] or as a batch of historical statements through
//! [`export_statements`] and a [`StatementSink`].

mod currency;
mod markdown;
mod statements;

pub use currency::{format_amount, format_currency, format_fixed};
pub use markdown::{export_markdown, generate_markdown};
pub use statements::{
    DOCUMENT_SUBJECT, DOCUMENT_TITLE, DocumentProperties, MAX_STATEMENT_COUNT, MarkdownDocument,
    PAGE_SEPARATOR, RenderInput, StatementSink, combined_file_name, export_statements,
    statement_file_stem, validate_statement_count,
};
