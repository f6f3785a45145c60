//! Table rendering for CLI output

use super::{ColorTheme, StatusIcon};
use crate::domain::flavor::AppFlavor;
use crate::domain::metadata::AppInfo;
use crate::domain::project::ScaffoldReport;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render the app metadata record as a two-column table
    pub fn render_app_info(&self, info: &AppInfo, flavor: AppFlavor) -> String {
        let entries = info.entries();

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("FIELD").set_alignment(CellAlignment::Left),
                Cell::new("VALUE").set_alignment(CellAlignment::Left),
            ]);

        for (index, (key, value)) in entries.iter().enumerate() {
            let service_field = index >= AppInfo::BASE_FIELD_COUNT;
            table.add_row(vec![
                Cell::new(key).fg(self.theme.get_field_color(service_field)),
                Cell::new(value),
            ]);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ {} {} {} ─╮\n",
            StatusIcon::SUCCESS.green(),
            info.app_name.bold(),
            format!(
                "[{} | {}]",
                flavor,
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
            )
            .bright_black()
        ));
        output.push_str(&table.to_string());
        output.push('\n');

        if let Some(service) = &info.service {
            output.push_str(&format!(
                "Endpoint: {} ({})\n",
                service.endpoint_url.cyan(),
                service.ip_address
            ));
        }

        output
    }

    /// One-line scaffolding summary
    pub fn render_scaffold_report(&self, report: Option<&ScaffoldReport>) -> String {
        let Some(report) = report else {
            return format!("{} Base project: skipped", StatusIcon::SKIPPED);
        };

        let copied = report.copied.len();
        let failed = report.failed.len();
        let line = format!(
            "{} Base project: {} ({} copied, {} removed, {} failed)",
            StatusIcon::get_scaffold_icon(copied, failed),
            StatusIcon::get_scaffold_text(copied, failed),
            copied,
            report.removed.len(),
            failed
        );

        let mut table = Table::new();
        table.load_preset(UTF8_FULL).add_row(vec![Cell::new(line)
            .fg(self.theme.get_scaffold_color(copied, failed))
            .set_alignment(CellAlignment::Left)]);

        table.to_string()
    }
}
