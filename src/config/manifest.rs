use std::{borrow::Cow, path::Path};

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::ext::BestEffortPathExt;

pub const DEFAULT_SYMBOL: &str = "API_BASE_URL";
pub const DEFAULT_MODULE: &str = "config/api";
pub const DEFAULT_ANCHOR: &str = "import React";

pub const DEFAULT_FILES: [&str; 11] = [
    "src/cadastroRestaurante/CadastroRestaurante.jsx",
    "src/empresas/AceitarRecusarPedidos.jsx",
    "src/empresas/CadastroPrato.jsx",
    "src/empresas/GerenciarCardapio.jsx",
    "src/empresas/PainelChamadas.jsx",
    "src/finalizarPedido/components/EnderecoEntrega.jsx",
    "src/finalizarPedido/finalizarPedido.jsx",
    "src/loginPage/FacebookLoginButton.jsx",
    "src/loginpagerestaurante/LoginPageRestaurante.jsx",
    "src/pageCliente/perfilCliente.jsx",
    "src/pageCliente/GerenciarPerfil.jsx",
];

fn key(name: &str) -> Yaml<'_> {
    Yaml::Value(Scalar::String(Cow::Borrowed(name)))
}

/// The import every listed file should carry, and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Name imported from the module, e.g. `API_BASE_URL`.
    pub symbol: String,
    /// Module path relative to the source root, without extension.
    pub module: String,
    /// Substring identifying the line the import is inserted after.
    pub anchor: String,
}

impl Default for ImportSpec {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            module: DEFAULT_MODULE.to_string(),
            anchor: DEFAULT_ANCHOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchManifest {
    pub import: ImportSpec,
    /// `/`-separated paths relative to the project root, processed in order.
    pub files: Vec<String>,
}

impl Default for PatchManifest {
    fn default() -> Self {
        Self {
            import: ImportSpec::default(),
            files: DEFAULT_FILES.iter().map(|file| file.to_string()).collect(),
        }
    }
}

impl PatchManifest {
    /// Loads the manifest at `path`, or the built-in one when no path is given.
    pub async fn load(path: Option<&Path>) -> Result<Self, ManifestError> {
        match path {
            Some(path) => Self::from_path(path).await,
            None => {
                debug!("No manifest supplied, using the built-in file list");
                Ok(Self::default())
            }
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self, ManifestError> {
        debug!("Reading manifest file: {}", path.best_effort_path_display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        debug!("Successfully read manifest file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        contents.as_str().try_into()
    }

    fn parse_import(top_level: &LinkedHashMap<Yaml, Yaml>) -> Result<ImportSpec, ManifestError> {
        let mut import = ImportSpec::default();
        let Some(section) = top_level.get(&key("import")) else {
            return Ok(import);
        };
        let section = section.as_mapping().ok_or(ManifestError::ImportNotMap)?;

        let field = |name: &'static str| {
            section
                .get(&key(name))
                .and_then(|value| value.as_str())
                .map(str::to_string)
        };
        if let Some(symbol) = field("symbol") {
            import.symbol = symbol;
        }
        if let Some(module) = field("module") {
            import.module = module;
        }
        if let Some(anchor) = field("anchor") {
            import.anchor = anchor;
        }

        Ok(import)
    }

    fn parse_files(top_level: &LinkedHashMap<Yaml, Yaml>) -> Result<Vec<String>, ManifestError> {
        let Some(section) = top_level.get(&key("files")) else {
            return Ok(Self::default().files);
        };

        let files = section
            .as_sequence()
            .ok_or(ManifestError::FilesNotSequence)?
            .iter()
            .filter_map(|entry| match entry.as_str() {
                Some(file) => Some(file.to_string()),
                None => {
                    debug!("Skipping invalid file entry: {:?}", entry);
                    None
                }
            })
            .collect();

        Ok(files)
    }
}

impl TryFrom<&str> for PatchManifest {
    type Error = ManifestError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents
            .first()
            .ok_or(ManifestError::MalformedManifest)?;

        let top_level = document
            .as_mapping()
            .ok_or(ManifestError::TopLevelNotMap)?;

        Ok(PatchManifest {
            import: Self::parse_import(top_level)?,
            files: Self::parse_files(top_level)?,
        })
    }
}

#[derive(Debug, Snafu)]
pub enum ManifestError {
    #[snafu(display("Failed to read the manifest file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Manifest file is not valid UTF-8: {}", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the manifest file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted manifest file"))]
    MalformedManifest,
    #[snafu(display("Top level of the manifest should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Import section should be a map"))]
    ImportNotMap,
    #[snafu(display("Files section should be a list of paths"))]
    FilesNotSequence,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_manifest_lists_builtin_files() {
        let manifest = PatchManifest::default();
        assert_eq!(manifest.files.len(), 11);
        assert_eq!(manifest.files[0], "src/cadastroRestaurante/CadastroRestaurante.jsx");
        assert_eq!(manifest.import.symbol, "API_BASE_URL");
        assert_eq!(manifest.import.module, "config/api");
        assert_eq!(manifest.import.anchor, "import React");
    }

    #[compio::test]
    async fn load_without_path_uses_defaults() {
        let manifest = PatchManifest::load(None).await.unwrap();
        assert_eq!(manifest, PatchManifest::default());
    }

    #[compio::test]
    async fn manifest_returns_error_on_nonexistent_file() {
        let result = PatchManifest::from_path(Path::new("nonexistent.yaml")).await;
        assert!(matches!(result, Err(ManifestError::ReadError { .. })));
    }

    #[compio::test]
    async fn manifest_is_read_from_disk() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "files:\n  - src/App.jsx").expect("Failed to write manifest");

        let manifest = PatchManifest::load(Some(file.path())).await.unwrap();
        assert_eq!(manifest.files, vec!["src/App.jsx".to_string()]);
        assert_eq!(manifest.import, ImportSpec::default());
    }

    #[compio::test]
    async fn manifest_returns_error_on_invalid_utf8() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(&[0x66, 0x69, 0xff, 0xfe])
            .expect("Failed to write manifest");

        let result = PatchManifest::from_path(file.path()).await;
        assert!(matches!(result, Err(ManifestError::EncodingError { .. })));
    }

    #[test]
    fn manifest_returns_error_on_invalid_yaml() {
        let result: Result<PatchManifest, _> = "invalid: yaml: content: [unclosed".try_into();
        assert!(matches!(result, Err(ManifestError::ParseError { .. })));
    }

    #[test]
    fn manifest_returns_error_on_empty_file() {
        let result: Result<PatchManifest, _> = "".try_into();
        assert!(matches!(result, Err(ManifestError::MalformedManifest)));
    }

    #[test]
    fn manifest_returns_error_when_top_level_is_not_map() {
        let result: Result<PatchManifest, _> = "- src/App.jsx\n- src/Home.jsx".try_into();
        assert!(matches!(result, Err(ManifestError::TopLevelNotMap)));
    }

    #[test]
    fn manifest_returns_error_when_import_is_not_map() {
        let result: Result<PatchManifest, _> = "import: API_BASE_URL".try_into();
        assert!(matches!(result, Err(ManifestError::ImportNotMap)));
    }

    #[test]
    fn manifest_returns_error_when_files_is_not_sequence() {
        let result: Result<PatchManifest, _> = "files: src/App.jsx".try_into();
        assert!(matches!(result, Err(ManifestError::FilesNotSequence)));
    }

    #[test]
    fn manifest_without_sections_falls_back_to_defaults() {
        let manifest: PatchManifest = "other: value".try_into().unwrap();
        assert_eq!(manifest, PatchManifest::default());
    }

    #[test]
    fn manifest_overrides_import_fields_individually() {
        let yaml = r#"
import:
  symbol: SOCKET_URL
  anchor: "import { useState"
files: []
"#;
        let manifest: PatchManifest = yaml.try_into().unwrap();
        assert_eq!(manifest.import.symbol, "SOCKET_URL");
        assert_eq!(manifest.import.module, DEFAULT_MODULE);
        assert_eq!(manifest.import.anchor, "import { useState");
        assert!(manifest.files.is_empty());
    }

    #[test]
    fn manifest_skips_non_string_file_entries() {
        let yaml = r#"
files:
  - src/pages/Home.jsx
  - 42
  - nested: map
  - src/pages/Cart.jsx
"#;
        let manifest: PatchManifest = yaml.try_into().unwrap();
        assert_eq!(
            manifest.files,
            vec![
                "src/pages/Home.jsx".to_string(),
                "src/pages/Cart.jsx".to_string()
            ]
        );
    }

    #[test]
    fn manifest_keeps_file_order() {
        let yaml = "files:\n  - b.jsx\n  - a.jsx\n  - c.jsx";
        let manifest: PatchManifest = yaml.try_into().unwrap();
        assert_eq!(manifest.files, vec!["b.jsx", "a.jsx", "c.jsx"]);
    }
}
