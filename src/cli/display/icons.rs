//! Status icons for CLI output

/// Status icons for build and scaffold results
pub struct StatusIcon;

impl StatusIcon {
    /// Every step succeeded
    pub const SUCCESS: &'static str = "✓";

    /// Finished with some per-file failures
    pub const WARNING: &'static str = "⚠";

    /// Nothing succeeded
    pub const ERROR: &'static str = "✗";

    /// Step skipped by choice
    pub const SKIPPED: &'static str = "-";

    /// Icon for a scaffolding pass from its copied/failed counts
    pub fn get_scaffold_icon(copied: usize, failed: usize) -> &'static str {
        if failed == 0 {
            Self::SUCCESS
        } else if copied > 0 {
            Self::WARNING
        } else {
            Self::ERROR
        }
    }

    pub fn get_scaffold_text(copied: usize, failed: usize) -> &'static str {
        if failed == 0 {
            "Complete"
        } else if copied > 0 {
            "Partial"
        } else {
            "Failed"
        }
    }
}
