mod console;
mod file_report;

pub use console::{print_file_report, print_summary, setup_colors};
pub use file_report::{FileReport, PatchReport, PatchStatus};
