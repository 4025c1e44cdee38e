use std::path::{Component, Path, PathBuf};

/// Renders `path` for log and error messages.
///
/// Existing paths are canonicalized; missing ones are made absolute and
/// lexically cleaned of `.` and `..` so messages stay readable either way.
pub fn best_effort_path_display(path: &Path) -> String {
    if let Ok(canonical) = path.canonicalize() {
        return canonical.display().to_string();
    }

    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    absolute
        .components()
        .fold(Vec::new(), |mut kept: Vec<Component>, component| {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if matches!(kept.last(), Some(Component::Normal(_))) {
                        kept.pop();
                    }
                }
                other => kept.push(other),
            }
            kept
        })
        .iter()
        .collect::<PathBuf>()
        .display()
        .to_string()
}

pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl BestEffortPathExt for Path {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }
}

impl BestEffortPathExt for PathBuf {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self)
    }
}

/// Helpers for the `/`-separated paths listed in a manifest.
pub trait ManifestPathExt {
    /// Number of `/` separators in the path as written.
    fn separator_count(&self) -> usize;

    /// Resolves the manifest path against the project root.
    fn under_root(&self, root: &Path) -> PathBuf;
}

impl ManifestPathExt for str {
    fn separator_count(&self) -> usize {
        self.matches('/').count()
    }

    fn under_root(&self, root: &Path) -> PathBuf {
        self.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(root.to_path_buf(), |path, segment| path.join(segment))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    #[case("App.jsx", 0)]
    #[case("src/App.jsx", 1)]
    #[case("src/empresas/CadastroPrato.jsx", 2)]
    #[case("src/finalizarPedido/components/EnderecoEntrega.jsx", 3)]
    fn counts_separators(#[case] path: &str, #[case] expected: usize) {
        assert_eq!(path.separator_count(), expected);
    }

    #[test]
    fn resolves_under_root() {
        let root = Path::new("project");
        assert_eq!(
            "src/empresas/CadastroPrato.jsx".under_root(root),
            Path::new("project").join("src").join("empresas").join("CadastroPrato.jsx")
        );
    }

    #[test]
    fn display_canonicalizes_existing_paths() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let nested = dir.path().join(".").join("file.jsx");
        std::fs::write(&nested, "").expect("Failed to write file");

        let expected = dir
            .path()
            .join("file.jsx")
            .canonicalize()
            .expect("Failed to canonicalize");
        assert_eq!(nested.best_effort_path_display(), expected.display().to_string());
    }

    #[test]
    fn display_normalizes_missing_paths() {
        let path = Path::new("/does/not/../exist/./file.jsx");
        assert_eq!(
            path.best_effort_path_display(),
            Path::new("/does/exist/file.jsx").display().to_string()
        );
    }
}
