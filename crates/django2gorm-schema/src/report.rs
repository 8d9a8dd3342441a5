use serde::Serialize;

///
/// ErrorRecord
/// One recoverable problem found during parsing or mapping. Every record
/// rendered to the sidecar log has exactly one paired inline comment in the
/// generated code, produced from `inline_comment()`.
///

#[derive(Clone, Debug, Serialize)]
pub struct ErrorRecord {
    pub line: usize,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorRecord {
    #[must_use]
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            model: None,
            field: None,
        }
    }

    #[must_use]
    pub fn for_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn for_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Sidecar log line.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}: {}", self.line, self.message)
    }

    /// Text of the paired inline comment (emitted behind `// `).
    #[must_use]
    pub fn inline_comment(&self) -> String {
        format!("!! {} (line {})", self.message, self.line)
    }
}

///
/// Report
/// Ordered collection of every recoverable problem in one run.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    pub records: Vec<ErrorRecord>,
}

impl Report {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn add(&mut self, record: ErrorRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Error-log file contents, one line per record, encounter order.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&record.render());
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_renders_in_encounter_order() {
        let mut report = Report::new();
        report.add(ErrorRecord::new(12, "Unknown/unhandled field type 'TreeForeignKey'"));
        report.add(ErrorRecord::new(3, "could not read related model name"));

        assert_eq!(report.len(), 2);
        assert_eq!(
            report.render(),
            "12: Unknown/unhandled field type 'TreeForeignKey'\n3: could not read related model name\n"
        );
    }

    #[test]
    fn inline_comment_carries_the_source_line() {
        let record = ErrorRecord::new(7, "boom").for_model("Author").for_field("name");

        assert_eq!(record.inline_comment(), "!! boom (line 7)");
        assert_eq!(record.model.as_deref(), Some("Author"));
    }
}
