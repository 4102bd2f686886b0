//! Day callback that writes each report to stdout.
//!
//! Reports go to stdout one line per day, in day order, in the configured
//! [`ReportFormat`]. Logs go to stderr, so stdout can be piped or diffed.

use std::io::Write;

use tracing::warn;
use village_core::config::ReportFormat;
use village_core::report;
use village_core::runner::DayCallback;
use village_types::DayReport;

/// Callback that prints every day report.
pub struct ReportCallback<W: Write> {
    format: ReportFormat,
    out: W,
}

impl<W: Write> ReportCallback<W> {
    /// Create a callback writing `format`-encoded reports to `out`.
    pub const fn new(format: ReportFormat, out: W) -> Self {
        Self { format, out }
    }
}

impl<W: Write> DayCallback for ReportCallback<W> {
    fn on_day(&mut self, day_report: &DayReport) {
        let line = match report::render(day_report, self.format) {
            Ok(line) => line,
            Err(e) => {
                warn!(day = day_report.day, error = %e, "failed to encode day report");
                return;
            }
        };
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!(day = day_report.day, error = %e, "failed to write day report");
        }
    }
}
