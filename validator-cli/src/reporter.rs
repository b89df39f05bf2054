//! Console output for validation reports.

use board_validator::report::ValidationReport;

/// Prints the report, either as a human-readable summary or as JSON.
pub fn print(report: &ValidationReport, as_json: bool) {
    if as_json {
        let rendered =
            serde_json::to_string_pretty(report).expect("a report always serializes to JSON");
        println!("{rendered}");
    } else {
        print!("{}", format_summary(report));
    }
}

/// The human-readable form: a PASSED/FAILED verdict, then every error and
/// warning on its own line.
fn format_summary(report: &ValidationReport) -> String {
    let mut summary = if report.is_valid() {
        String::from("Validation PASSED!\n")
    } else {
        String::from("Validation FAILED!\n")
    };

    if !report.errors().is_empty() {
        summary.push_str(&format!("\nErrors ({}):\n", report.errors().len()));
        for error in report.errors() {
            summary.push_str(&format!("  - {error}\n"));
        }
    }

    if !report.warnings().is_empty() {
        summary.push_str(&format!("\nWarnings ({}):\n", report.warnings().len()));
        for warning in report.warnings() {
            summary.push_str(&format!("  - {warning}\n"));
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn passing_report_is_a_single_line() {
        let report = ValidationReport::new();

        assert_eq!(format_summary(&report), "Validation PASSED!\n");
    }

    #[test]
    fn errors_and_warnings_are_listed_under_their_counts() {
        let mut report = ValidationReport::new();
        report.error("Expected 36 cities, found 35");
        report.error("Connection 2: id must be a valid UUID: nope");
        report.warning(r#"Unexpected players found: ["orange"]"#);

        assert_eq!(
            format_summary(&report),
            "Validation FAILED!\n\
             \n\
             Errors (2):\n\
             \x20 - Expected 36 cities, found 35\n\
             \x20 - Connection 2: id must be a valid UUID: nope\n\
             \n\
             Warnings (1):\n\
             \x20 - Unexpected players found: [\"orange\"]\n"
        );
    }

    #[test]
    fn warnings_alone_still_pass() {
        let mut report = ValidationReport::new();
        report.warning(r#"Unexpected players found: ["pink"]"#);

        let summary = format_summary(&report);

        assert!(summary.starts_with("Validation PASSED!\n"));
        assert!(summary.contains("Warnings (1):"));
    }
}
