use crate::error::VerifyError;
use std::io::{self, Write};

/// Human-readable progress markers, one line per check
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self) {
        self.line("Running tests...");
    }

    pub fn export_ok(&mut self) {
        self.line("✓ App exports correctly");
    }

    pub fn health_passed(&mut self) {
        self.line("✓ Health endpoint test passed");
    }

    pub fn all_passed(&mut self) {
        self.line("✓ All tests passed!");
    }

    /// Print the failure marker for `err` and hand it back
    pub fn fail(&mut self, err: VerifyError) -> VerifyError {
        let marker = match &err {
            VerifyError::ExportInvalid => "✗ App export failed".to_string(),
            VerifyError::Bind(_) | VerifyError::Transport(_) => {
                format!("✗ Request failed: {}", err)
            }
            VerifyError::Timeout(limit) => format!("✗ Request timed out after {:?}", limit),
            VerifyError::ParseError(_) => "✗ Health endpoint response parsing failed".to_string(),
            VerifyError::AssertionMismatch(_) => "✗ Health endpoint test failed".to_string(),
        };
        self.line(&marker);
        err
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to write progress line: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn printed(reporter: Reporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_success_markers() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.banner();
        reporter.export_ok();
        reporter.health_passed();
        reporter.all_passed();

        assert_eq!(
            printed(reporter),
            "Running tests...\n\
             ✓ App exports correctly\n\
             ✓ Health endpoint test passed\n\
             ✓ All tests passed!\n"
        );
    }

    #[test]
    fn test_failure_markers() {
        let cases = [
            (VerifyError::ExportInvalid, "✗ App export failed\n"),
            (
                VerifyError::Transport("connection refused".to_string()),
                "✗ Request failed: connection refused\n",
            ),
            (
                VerifyError::Timeout(Duration::from_secs(2)),
                "✗ Request timed out after 2s\n",
            ),
            (
                VerifyError::AssertionMismatch("status is \"degraded\"".to_string()),
                "✗ Health endpoint test failed\n",
            ),
        ];

        for (err, expected) in cases {
            let mut reporter = Reporter::new(Vec::new());
            let _ = reporter.fail(err);
            assert_eq!(printed(reporter), expected);
        }
    }

    #[test]
    fn test_parse_failure_marker_is_distinct() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();

        let mut reporter = Reporter::new(Vec::new());
        let err = reporter.fail(VerifyError::ParseError(json_err));

        assert!(matches!(err, VerifyError::ParseError(_)));
        assert_eq!(
            printed(reporter),
            "✗ Health endpoint response parsing failed\n"
        );
    }
}
