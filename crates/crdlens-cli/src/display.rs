//! Display formatting for CLI output
//!
//! Status lines use the same glyph vocabulary across commands; everything is
//! suppressed when the user asked for quiet output or disabled notifications.

use console::style;
use crdlens_core::CrdInfo;

/// Terminal reporter honoring the quiet flag and notification setting.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    enabled: bool,
}

impl Reporter {
    pub fn new(quiet: bool, show_notifications: bool) -> Self {
        Self {
            enabled: !quiet && show_notifications,
        }
    }

    /// A progress line
    pub fn step(&self, message: &str) {
        if self.enabled {
            println!("{} {}", style("→").blue(), message);
        }
    }

    /// A success line
    pub fn success(&self, message: &str) {
        if self.enabled {
            println!("{} {}", style("✓").green(), message);
        }
    }

    /// A cautionary line
    pub fn warn(&self, message: &str) {
        if self.enabled {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }
}

/// Render a classification result for human eyes.
pub fn print_crd_info(info: &CrdInfo) {
    println!("{} Custom Resource Definition", style("✓").green().bold());
    println!("  {} {}", style("Kind:").bold(), info.kind);
    println!("  {} {}", style("Group:").bold(), info.group);
    println!("  {} {}", style("Name:").bold(), info.name);
    println!(
        "  {} {}",
        style("Versions:").bold(),
        if info.versions.is_empty() {
            info.primary_version().to_string()
        } else {
            info.versions.join(", ")
        }
    );
}
