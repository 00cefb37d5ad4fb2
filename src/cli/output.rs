//! CLI output formatting

use crate::{
    core::{ConfigStats, ParseError},
    fetch::FetchError,
};
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Write;
use std::time::Duration;

// Re-export style
pub use console::style;

pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "!");

/// Printed before anything else
pub const BANNER: &str = "go-go-stats!";

/// Label shown for pipelines without a template
pub const NO_TEMPLATE_LABEL: &str = "No template";

/// Spinner shown on stderr while the config is being fetched
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Display label for a template key
pub fn template_label(template: &str) -> &str {
    if template.is_empty() {
        NO_TEMPLATE_LABEL
    } else {
        template
    }
}

/// Render the pipeline counts
pub fn render_report(stats: &ConfigStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Number of pipelines: {}", stats.pipelines);
    out.push('\n');
    for (template, count) in &stats.by_template {
        let _ = writeln!(out, "{}\t{}", count, template_label(template));
    }
    out
}

pub fn print_fetch_failure(error: &FetchError) {
    println!("{}{}", CROSS, style("Couldn't get config file").red());
    println!("  Error: {}", style(error).dim());
}

pub fn print_decode_failure(error: &ParseError) {
    println!("{}error: {}", WARN, style(error).yellow());
}
