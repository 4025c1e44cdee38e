use std::path::{Path, PathBuf};

use compio::fs;
use snafu::{ResultExt, Snafu};
use tracing::{debug, info, warn};

use crate::config::ImportSpec;
use crate::ext::{BestEffortPathExt, ManifestPathExt};
use crate::patch::{ContentPatch, patch_content};
use crate::report::{FileReport, PatchStatus};

/// Brings the manifest entry `file` under `root` up to date with `import`.
///
/// A missing file is reported, never created. The file is only rewritten when
/// an import line was inserted.
pub async fn patch_file(
    root: &Path,
    file: &str,
    import: &ImportSpec,
) -> Result<FileReport, PatchFileError> {
    let path = file.under_root(root);

    let exists = path.try_exists().context(InspectSnafu { path: path.clone() })?;
    if !exists {
        debug!("Skipping missing file: {}", path.best_effort_path_display());
        return Ok(FileReport::new(file, PatchStatus::Missing));
    }

    let bytes = fs::read(&path).await.context(ReadSnafu { path: path.clone() })?;
    let content = String::from_utf8(bytes).context(DecodeSnafu { path: path.clone() })?;
    debug!("Read {} bytes from {}", content.len(), file);

    match patch_content(&content, import, file) {
        ContentPatch::AlreadyPresent => {
            debug!("'{}' already imports {}", file, import.symbol);
            Ok(FileReport::new(file, PatchStatus::AlreadyPresent))
        }
        ContentPatch::NoAnchor => {
            warn!(
                "No line containing '{}' in '{}', leaving it unchanged",
                import.anchor, file
            );
            Ok(FileReport::new(file, PatchStatus::NoAnchor))
        }
        ContentPatch::Inserted {
            content,
            line,
            line_index,
        } => {
            fs::write(&path, content.into_bytes())
                .await
                .0
                .context(WriteSnafu { path: path.clone() })?;
            info!("Inserted '{}' at line {} of '{}'", line, line_index + 1, file);
            Ok(FileReport::inserted(file, line))
        }
    }
}

#[derive(Debug, Snafu)]
pub enum PatchFileError {
    #[snafu(display("Failed to check whether {} exists", path.best_effort_path_display()))]
    InspectError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read {}", path.best_effort_path_display()))]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("{} is not valid UTF-8 text", path.best_effort_path_display()))]
    DecodeError {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to write {}", path.best_effort_path_display()))]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}
