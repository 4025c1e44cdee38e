use colored::{ColoredString, Colorize};

use crate::report::{FileReport, PatchReport, PatchStatus};

/// Turns colour off when stdout cannot render it.
pub fn setup_colors() {
    if supports_color::on(supports_color::Stream::Stdout).is_none() {
        colored::control::set_override(false);
    }
}

fn status_line(report: &FileReport) -> Option<ColoredString> {
    match report.status {
        PatchStatus::Missing => None,
        PatchStatus::AlreadyPresent => {
            Some(format!("✅ {} already has the import", report.path).green())
        }
        PatchStatus::Inserted => Some(
            format!(
                "✨ {} updated with {}",
                report.path,
                report.import_line.as_deref().unwrap_or("import")
            )
            .cyan(),
        ),
        PatchStatus::NoAnchor => {
            Some(format!("⚠️  {} has no anchor line, left unchanged", report.path).yellow())
        }
    }
}

/// Prints the per-file line for `report`. Missing files print nothing.
pub fn print_file_report(report: &FileReport) {
    if let Some(line) = status_line(report) {
        println!("{line}");
    }
}

pub fn print_summary(report: &PatchReport) {
    println!();
    println!("{}", format!("✅ {}", report.summary()).bold());
}
