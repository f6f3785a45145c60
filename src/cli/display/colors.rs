//! Color theme for CLI output

use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub error: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            error: TableColor::Red,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    /// Color for a scaffolding pass from its copied/failed counts
    pub fn get_scaffold_color(&self, copied: usize, failed: usize) -> TableColor {
        if failed == 0 {
            self.success
        } else if copied > 0 {
            self.warning
        } else {
            self.error
        }
    }

    /// Service-only rows stand out from the base record
    pub fn get_field_color(&self, service_field: bool) -> TableColor {
        if service_field {
            self.info
        } else {
            self.muted
        }
    }
}
