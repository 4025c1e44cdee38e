use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::config::{ManifestError, PatchManifest};
use crate::ext::BestEffortPathExt;
use crate::patch::{PatchFileError, patch_file};
use crate::report::{self, PatchReport};

pub struct Application;

impl Application {
    /// Patches every manifest entry in order, stopping at the first I/O failure.
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<PatchReport, ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let manifest = PatchManifest::load(app_config.manifest_path.as_deref())
            .await
            .context(ManifestSnafu)?;
        debug!("Loaded manifest: {:?}", manifest);
        info!(
            "Checking {} files under {}",
            manifest.files.len(),
            app_config.root.best_effort_path_display()
        );

        let mut patch_report = PatchReport::default();
        for file in &manifest.files {
            let file_report = patch_file(&app_config.root, file, &manifest.import)
                .await
                .context(PatchSnafu)?;
            report::print_file_report(&file_report);
            patch_report.push(file_report);
        }

        info!("{}", patch_report.summary());
        Ok(patch_report)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the manifest"))]
    ManifestError { source: ManifestError },
    #[snafu(display("Critical failure encountered while patching files"))]
    PatchError { source: PatchFileError },
}
