use crate::asset::AssetKind;
use crate::codec::CodecRegistry;
use crate::options::ImportOptions;
use crate::report::BatchReport;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that abort an import batch before any file is considered
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("no codec registered for asset kind: {0}")]
    NoCodec(AssetKind),

    #[error("no file selected")]
    NoFilesSelected,
}

/// Import batch engine
pub struct Importer {
    registry: CodecRegistry,
}

impl Importer {
    pub fn new(registry: CodecRegistry) -> Self {
        Self { registry }
    }

    /// Import every file in the list as assets of the given kind
    ///
    /// Empty placeholder entries are dropped; a list with nothing left is
    /// rejected before the batch starts. Files failing the codec's type
    /// check are counted incompatible and never handed to the deserializer.
    /// A failing file is counted and logged, and the batch moves on.
    pub fn import_files(
        &self,
        paths: &[PathBuf],
        kind: AssetKind,
        options: &ImportOptions,
    ) -> Result<BatchReport, ImportError> {
        let codec = self
            .registry
            .get(kind)
            .ok_or(ImportError::NoCodec(kind))?;

        let paths: Vec<&Path> = paths
            .iter()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::as_path)
            .collect();
        if paths.is_empty() {
            return Err(ImportError::NoFilesSelected);
        }

        let mut report = BatchReport::new();
        info!(
            session = %report.session_id,
            "Starting import of {} file(s) as {}",
            paths.len(),
            kind
        );

        for path in paths {
            let label = file_label(path);

            match codec.check_file(path, kind.subtype()) {
                Ok(true) => {}
                Ok(false) => {
                    warn!("{} is not of type '{}'.", label, kind);
                    report.record_incompatible();
                    continue;
                }
                Err(e) => {
                    warn!("{} could not be recognized as '{}': {}", label, kind, e);
                    report.record_incompatible();
                    continue;
                }
            }

            info!("Initiating import of {}", label);
            match codec.import(path, options) {
                Ok(()) => {
                    info!("'{}' imported successfully.", label);
                    report.record_success();
                }
                Err(e) => {
                    warn!("{} failed to import, with the following error: {}", label, e);
                    report.record_failure(label);
                }
            }
        }

        info!("{}", report.import_summary(kind.display_name()));
        Ok(report)
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
