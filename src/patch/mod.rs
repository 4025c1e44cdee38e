//! Inserting the configured import into source files.
//!
//! `text_patch` works purely on strings; `file_patcher` is the thin I/O layer
//! that reads a manifest entry, applies the text patch and writes it back.

mod file_patcher;
mod import_statement;
mod text_patch;

pub use file_patcher::{PatchFileError, patch_file};
pub use text_patch::{ContentPatch, patch_content};
