use crate::config::ImportSpec;
use crate::ext::ManifestPathExt;

/// Directories to climb from `file_path` to reach the source root.
///
/// Manifest paths start with the source directory (`src/...`), so a file
/// `src/a/B.jsx` sits one level below it.
pub fn import_depth(file_path: &str) -> usize {
    file_path.separator_count().saturating_sub(1)
}

/// Module specifier for `module` as seen from `file_path`.
pub fn relative_module_path(file_path: &str, module: &str) -> String {
    match import_depth(file_path) {
        0 => format!("./{module}"),
        depth => format!("{}{module}", "../".repeat(depth)),
    }
}

impl ImportSpec {
    /// Whether `content` already imports the symbol, with or without
    /// padding inside the braces.
    pub fn is_present_in(&self, content: &str) -> bool {
        let padded = format!("import {{ {} }}", self.symbol);
        let compact = format!("import {{{}}}", self.symbol);
        content.contains(&padded) || content.contains(&compact)
    }

    /// The import line to insert into `file_path`.
    pub fn render_for(&self, file_path: &str) -> String {
        format!(
            "import {{ {} }} from \"{}\";",
            self.symbol,
            relative_module_path(file_path, &self.module)
        )
    }
}
