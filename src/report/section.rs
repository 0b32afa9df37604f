use std::io::Write;

/// Body line printed when a report has nothing to show.
pub const NO_RESULTS: &str = "No results";

/// One printed block of the report: header, dashed underline, body lines,
/// then a blank separator line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub header: String,
    pub lines: Vec<String>,
}

impl ReportSection {
    pub fn new(header: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            header: header.into(),
            lines,
        }
    }

    /// Replaces an empty body with the single `No results` line.
    pub fn or_no_results(mut self) -> Self {
        if self.lines.is_empty() {
            self.lines.push(NO_RESULTS.to_string());
        }
        self
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.header)?;
        writeln!(out, "{}", "-".repeat(self.header.chars().count()))?;
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        writeln!(out)
    }

    #[cfg(test)]
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
