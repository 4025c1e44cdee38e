use crate::config::ImportSpec;

/// Result of patching a file's text in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPatch {
    AlreadyPresent,
    NoAnchor,
    Inserted {
        content: String,
        line: String,
        /// Zero-based index of the new line.
        line_index: usize,
    },
}

/// Ensures `content` of the file at `file_path` imports the configured symbol.
pub fn patch_content(content: &str, import: &ImportSpec, file_path: &str) -> ContentPatch {
    if import.is_present_in(content) {
        return ContentPatch::AlreadyPresent;
    }

    let line = import.render_for(file_path);
    match insert_after_anchor(content, &import.anchor, &line) {
        Some((content, line_index)) => ContentPatch::Inserted {
            content,
            line,
            line_index,
        },
        None => ContentPatch::NoAnchor,
    }
}

/// Inserts `new_line` after the first line containing `anchor`.
///
/// Lines are split and rejoined on `\n` only, so everything else in the
/// text is kept byte for byte. A CRLF anchor line gives a CRLF new line.
fn insert_after_anchor(content: &str, anchor: &str, new_line: &str) -> Option<(String, usize)> {
    let anchor_index = content.split('\n').position(|line| line.contains(anchor))?;
    let anchor_is_crlf = content
        .split('\n')
        .nth(anchor_index)
        .is_some_and(|line| line.ends_with('\r'));
    let new_line = if anchor_is_crlf {
        format!("{new_line}\r")
    } else {
        new_line.to_string()
    };

    let mut lines: Vec<&str> = content.split('\n').collect();
    lines.insert(anchor_index + 1, &new_line);
    Some((lines.join("\n"), anchor_index + 1))
}
