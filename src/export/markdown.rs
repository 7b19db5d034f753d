//! Markdown rendering of a single pay statement.

use std::fmt::Write as _;
use std::io::Write;

use tracing::debug;

use rust_decimal::Decimal;

use super::currency::{format_currency, format_fixed};
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculatedPaystub, EmploymentConfiguration, TaxAmount, format_statement_date};

fn money_row(out: &mut String, label: &str, current: &str, ytd: &str) {
    let _ = writeln!(out, "| {} | {} | {} |", label, current, ytd);
}

fn tax_row(out: &mut String, label: &str, tax: &TaxAmount) {
    money_row(out, label, &format_currency(tax.current), &format_currency(tax.ytd));
}

/// Renders one statement as a Markdown document.
///
/// The document has a header block identifying employer, employee and check,
/// followed by Earnings, Taxes, Deductions and Summary tables. The State Tax
/// row appears only when the current or year-to-date state amount is
/// positive, and the Deductions table is omitted when there are no deductions.
pub fn generate_markdown(config: &EmploymentConfiguration, paystub: &CalculatedPaystub) -> String {
    // Writing to a String cannot fail.
    let mut md = String::new();

    let _ = writeln!(md, "# PAY STATEMENT - {}\n", config.company_name);
    let _ = writeln!(md, "**Employee:** {}  ", config.employee_name);
    let _ = writeln!(md, "**Address:** {}  ", config.employee_address.single_line());
    let _ = writeln!(
        md,
        "**ID:** {} | **Pay Date:** {} | **Check #:** {}\n",
        config.employee_id,
        format_statement_date(paystub.pay_date),
        paystub.check_number
    );

    md.push_str("## Earnings\n");
    md.push_str("| Item | Rate | Hours | Current | YTD |\n");
    md.push_str("|---|---:|---:|---:|---:|\n");
    for item in &paystub.earnings {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} | {} |",
            item.name,
            format_fixed(item.rate),
            format_fixed(item.hours),
            format_currency(item.current),
            format_currency(item.ytd)
        );
    }
    let _ = writeln!(
        md,
        "| **Total** | | | **{}** | **{}** |\n",
        format_currency(paystub.gross_pay_current),
        format_currency(paystub.gross_pay_ytd)
    );

    md.push_str("## Taxes\n");
    md.push_str("| Tax | Current | YTD |\n");
    md.push_str("|---|---:|---:|\n");
    let taxes = &paystub.taxes;
    tax_row(&mut md, "Federal Tax", &taxes.federal);
    tax_row(&mut md, "Social Security", &taxes.social_security);
    tax_row(&mut md, "Medicare", &taxes.medicare);
    if taxes.state.current > Decimal::ZERO || taxes.state.ytd > Decimal::ZERO {
        tax_row(&mut md, "State Tax", &taxes.state);
    }
    md.push('\n');

    if !paystub.deductions.is_empty() {
        md.push_str("## Deductions\n");
        md.push_str("| Item | Current | YTD |\n");
        md.push_str("|---|---:|---:|\n");
        for deduction in &paystub.deductions {
            money_row(
                &mut md,
                &deduction.name,
                &format_currency(deduction.current),
                &format_currency(deduction.ytd),
            );
        }
        md.push('\n');
    }

    md.push_str("## Summary\n");
    md.push_str("| Category | Current | YTD |\n");
    md.push_str("|---|---:|---:|\n");
    money_row(
        &mut md,
        "**Gross Pay**",
        &format!("**{}**", format_currency(paystub.gross_pay_current)),
        &format!("**{}**", format_currency(paystub.gross_pay_ytd)),
    );
    money_row(
        &mut md,
        "Total Taxes",
        &format_currency(paystub.total_taxes_current()),
        &format_currency(paystub.total_taxes_ytd()),
    );
    money_row(
        &mut md,
        "Total Deductions",
        &format_currency(paystub.deductions_only_current()),
        &format_currency(paystub.deductions_only_ytd()),
    );
    money_row(
        &mut md,
        "**Net Pay**",
        &format!("**{}**", format_currency(paystub.net_pay_current)),
        &format!("**{}**", format_currency(paystub.net_pay_ytd)),
    );

    md
}

/// Renders a statement as Markdown into `writer`.
///
/// # Errors
///
/// Returns [`EngineError::ExportError`] if the writer fails.
pub fn export_markdown<W: Write>(
    writer: &mut W,
    config: &EmploymentConfiguration,
    paystub: &CalculatedPaystub,
) -> EngineResult<()> {
    let markdown = generate_markdown(config, paystub);
    debug!(
        check_number = paystub.check_number,
        bytes = markdown.len(),
        "writing markdown statement"
    );

    writer
        .write_all(markdown.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| EngineError::ExportError {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_paystub;
    use crate::test_fixtures::{hourly_configuration, salaried_configuration};
    use std::io;

    fn hourly_markdown() -> String {
        let config = hourly_configuration();
        let paystub = calculate_paystub(&config, 0).unwrap();
        generate_markdown(&config, &paystub)
    }

    #[test]
    fn test_header_block() {
        let md = hourly_markdown();

        assert!(md.starts_with("# PAY STATEMENT - Tech Solutions Inc.\n\n"));
        assert!(md.contains("**Employee:** Jane Smith  \n"));
        assert!(md.contains("**Address:** 42 Wallaby Way, Sydney, TX 76000  \n"));
        assert!(md.contains("**ID:** EMP-9921 | **Pay Date:** 06/14/2024 | **Check #:** 18183\n"));
    }

    #[test]
    fn test_earnings_table() {
        let md = hourly_markdown();

        assert!(md.contains("| Item | Rate | Hours | Current | YTD |\n"));
        assert!(md.contains("| Regular Pay | 25.00 | 40.00 | $1,000.00 | $12,000.00 |\n"));
        assert!(md.contains("| **Total** | | | **$1,000.00** | **$12,000.00** |\n"));
    }

    #[test]
    fn test_taxes_without_state_row() {
        let md = hourly_markdown();

        assert!(md.contains("| Federal Tax | $120.00 | $1,440.00 |\n"));
        assert!(md.contains("| Social Security | $62.00 | $744.00 |\n"));
        assert!(md.contains("| Medicare | $14.50 | $174.00 |\n"));
        assert!(!md.contains("State Tax"));
    }

    #[test]
    fn test_state_row_when_withheld() {
        let mut config = hourly_configuration();
        config.state_tax_rate = Decimal::new(5, 0);
        let paystub = calculate_paystub(&config, 0).unwrap();
        let md = generate_markdown(&config, &paystub);

        assert!(md.contains("| State Tax | $50.00 | $600.00 |\n"));
    }

    #[test]
    fn test_negative_state_tax_has_no_row() {
        let mut config = hourly_configuration();
        config.state_tax_rate = Decimal::new(-5, 0);
        let paystub = calculate_paystub(&config, 0).unwrap();
        let md = generate_markdown(&config, &paystub);

        assert!(paystub.taxes.state.current < Decimal::ZERO);
        assert!(!md.contains("State Tax"));
    }

    #[test]
    fn test_salaried_rate_is_not_grouped() {
        let config = salaried_configuration();
        let paystub = calculate_paystub(&config, 0).unwrap();
        let md = generate_markdown(&config, &paystub);

        assert!(md.contains("| Salary | 85000.00 | 86.67 | $3,269.23 | $39,230.77 |\n"));
        assert!(!md.contains("85,000.00"));
    }

    #[test]
    fn test_deductions_table_only_with_package() {
        assert!(!hourly_markdown().contains("## Deductions"));

        let config = salaried_configuration();
        let paystub = calculate_paystub(&config, 0).unwrap();
        let md = generate_markdown(&config, &paystub);

        assert!(md.contains("## Deductions\n"));
        assert!(md.contains("| Medical | $98.00 | $1,176.00 |\n"));
        assert!(md.contains("| Critical Illness | $12.50 | $150.00 |\n"));
        assert!(md.contains("| Holiday | 0.00 | 0.00 | $0.00 | $0.00 |\n"));
    }

    #[test]
    fn test_summary_table() {
        let md = hourly_markdown();

        assert!(md.contains("| **Gross Pay** | **$1,000.00** | **$12,000.00** |\n"));
        assert!(md.contains("| Total Taxes | $196.50 | $2,358.00 |\n"));
        assert!(md.contains("| Total Deductions | $0.00 | $0.00 |\n"));
        assert!(md.contains("| **Net Pay** | **$803.50** | **$9,642.00** |\n"));
    }

    #[test]
    fn test_export_writes_same_content() {
        let config = hourly_configuration();
        let paystub = calculate_paystub(&config, 0).unwrap();

        let mut buffer = Vec::new();
        export_markdown(&mut buffer, &config, &paystub).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), generate_markdown(&config, &paystub));
    }

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_failure_is_export_error() {
        let config = hourly_configuration();
        let paystub = calculate_paystub(&config, 0).unwrap();

        let result = export_markdown(&mut FailingWriter, &config, &paystub);
        match result {
            Err(EngineError::ExportError { message }) => assert!(message.contains("disk full")),
            other => panic!("Expected ExportError, got {:?}", other),
        }
    }
}
