use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Outcome of one validation run.
///
/// Validators record every violation they find and keep going; a report is
/// only invalid once at least one error has been recorded. Warnings never
/// affect validity.
///
/// # Examples
/// ```
/// use board_validator::report::ValidationReport;
///
/// let mut report = ValidationReport::new();
/// assert!(report.is_valid());
///
/// report.warning("unexpected players found: [\"orange\"]");
/// assert!(report.is_valid());
///
/// report.error("Expected 36 cities, found 35");
/// assert!(!report.is_valid());
/// ```
///
/// # JSON
/// Serializes as `{ "valid": bool, "errors": [...], "warnings": [...] }`,
/// with `valid` computed from the error list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationReport {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationReport {
    /// An empty, valid report.
    pub fn new() -> Self {
        Self::default()
    }

    /// A report holding a single fatal error.
    ///
    /// Used by callers for file-level failures (missing file, malformed
    /// JSON) that preempt validation entirely.
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
            warnings: Vec::new(),
        }
    }

    /// Records an error. The report is invalid from this point on.
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Records a warning. Warnings are advisory and never fail a run.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Whether the run passed, i.e. no error was recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 3)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("warnings", &self.warnings)?;
        state.end()
    }
}
