use colored::Color;
use std::io::{self, Write};

use crate::report::PreflightReport;
use crate::types::ProbeResult;

/// Renders preflight progress as plain or coloured console lines.
pub struct Reporter<W: Write> {
    out: W,
    colorize: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, colorize: bool) -> Self {
        Self { out, colorize }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Only `colorize` decides; `colored`'s own terminal and env detection is bypassed.
    fn paint(&self, text: &str, color: Color) -> String {
        if self.colorize {
            format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
        } else {
            text.to_string()
        }
    }

    pub fn header(&mut self) -> io::Result<()> {
        writeln!(self.out, "--- Running Pre-flight Deployment Validation Script ---")
    }

    pub fn probe(&mut self, result: &ProbeResult) -> io::Result<()> {
        let status = if result.passed {
            self.paint("PASS", Color::Green)
        } else {
            self.paint("FAIL", Color::Red)
        };
        writeln!(self.out, "[{}] {}", status, result.description)?;

        for line in &result.diagnostics {
            if result.kind.is_critical() {
                writeln!(self.out, "  └─> Error: {}", line)?;
            } else {
                let warning = self.paint(&format!("WARN: {}", line), Color::Yellow);
                writeln!(self.out, "  └─> {}", warning)?;
            }
        }
        Ok(())
    }

    pub fn summary(&mut self, report: &PreflightReport) -> io::Result<()> {
        writeln!(self.out, "--- Validation Summary ---")?;
        if report.critical_passed() {
            let line = self.paint("All essential pre-flight checks passed.", Color::Green);
            writeln!(self.out, "{}", line)?;
            writeln!(self.out, "You can proceed with the Ansible deployment.")
        } else {
            let line = self.paint("One or more critical pre-flight checks failed.", Color::Red);
            writeln!(self.out, "{}", line)?;
            writeln!(self.out, "Please review the errors above before proceeding.")
        }
    }
}
