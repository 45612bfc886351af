use crate::asset::{AssetKind, AssetRoster, AssetSource};
use crate::codec::CodecRegistry;
use crate::conflict::{resolve, target_path, ExportPolicy};
use crate::options::ExportOptions;
use crate::report::BatchReport;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort an export batch before any asset is considered
///
/// Per-asset codec failures are not among these; they become report counts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no codec registered for asset kind: {0}")]
    NoCodec(AssetKind),

    #[error("no assets selected for export")]
    EmptySelection,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export batch engine
pub struct Exporter {
    registry: CodecRegistry,
}

impl Exporter {
    pub fn new(registry: CodecRegistry) -> Self {
        Self { registry }
    }

    /// Export every selected asset in the roster to `dir`
    ///
    /// Target names follow `<base>_<asset>.blib`; collisions are resolved
    /// per `policy`, which is fixed for the whole batch. A failing asset is
    /// counted and logged, and the batch moves on to the next one.
    pub fn export_assets<S>(
        &self,
        source: &S,
        roster: &AssetRoster,
        kind: AssetKind,
        dir: &Path,
        base: &str,
        policy: ExportPolicy,
        options: &ExportOptions,
    ) -> Result<BatchReport, ExportError>
    where
        S: AssetSource + ?Sized,
    {
        let codec = self
            .registry
            .get(kind)
            .ok_or(ExportError::NoCodec(kind))?;

        if roster.selected_count() == 0 {
            return Err(ExportError::EmptySelection);
        }

        fs::create_dir_all(dir)?;

        let mut report = BatchReport::new();
        info!(
            session = %report.session_id,
            "Starting export of {} {} asset(s) to {} (policy: {})",
            roster.selected_count(),
            kind,
            dir.display(),
            policy
        );

        for name in roster.selected() {
            let candidate = target_path(dir, base, name);
            let path = match resolve(candidate, policy) {
                Some(path) => path,
                None => {
                    debug!("'{}' skipped, target exists and policy is ignore", name);
                    report.record_skipped();
                    continue;
                }
            };

            let block = match source.block(kind, name) {
                Some(block) => block,
                None => {
                    warn!("'{}' failed to export: no such data block", name);
                    report.record_failure(name);
                    continue;
                }
            };

            info!("Initiating export of '{}'", name);
            match codec.export(&block, &path, options) {
                Ok(()) => {
                    info!("'{}' exported successfully.", name);
                    report.record_success();
                }
                Err(e) => {
                    warn!("'{}' failed to export, with the following error: {}", name, e);
                    report.record_failure(name);
                }
            }
        }

        info!("{}", report.export_summary());
        Ok(report)
    }
}
