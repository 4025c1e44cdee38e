mod manifest;

pub use manifest::{ImportSpec, ManifestError, PatchManifest};
