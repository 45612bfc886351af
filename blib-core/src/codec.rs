use crate::asset::{AssetBlock, AssetKind};
use crate::options::{ExportOptions, ImportOptions};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::info;

/// Errors raised by a .blib codec
///
/// These are always caught at the batch loop and converted into report
/// counts; they never abort a batch.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a valid .blib container: {0}")]
    InvalidContainer(String),

    #[error("checksum mismatch: {0}")]
    Checksum(String),

    #[error("unsupported feature: {0}")]
    Unsupported(String),

    #[error("{0}")]
    Other(String),
}

/// Serializer/deserializer for one family of .blib assets
///
/// The container format itself lives behind this trait; the batch engines
/// only drive it.
pub trait BlibCodec: Send + Sync {
    /// Codec name, for listings and log lines
    fn name(&self) -> &str;

    /// Codec version string
    fn version(&self) -> &str;

    /// Whether a host data block is exportable by this codec
    fn check_asset(&self, block: &AssetBlock) -> bool;

    /// Whether the file at `path` holds an asset of the given subtype
    fn check_file(&self, path: &Path, subtype: &str) -> Result<bool, CodecError>;

    /// Pack a data block into a .blib file at `path`
    fn export(
        &self,
        block: &AssetBlock,
        path: &Path,
        options: &ExportOptions,
    ) -> Result<(), CodecError>;

    /// Unpack the .blib file at `path` into the host
    fn import(&self, path: &Path, options: &ImportOptions) -> Result<(), CodecError>;
}

/// Codec information for CLI and host consumers
#[derive(Debug, Clone)]
pub struct CodecInfo {
    pub name: String,
    pub version: String,
    pub kinds: Vec<AssetKind>,
}

/// Registry mapping asset kinds to the codec that handles them
pub struct CodecRegistry {
    codecs: Arc<RwLock<HashMap<AssetKind, Arc<dyn BlibCodec>>>>,
}

impl Clone for CodecRegistry {
    fn clone(&self) -> Self {
        Self {
            codecs: Arc::clone(&self.codecs),
        }
    }
}

impl CodecRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            codecs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a codec for one or more asset kinds
    pub fn register(&mut self, kinds: &[AssetKind], codec: Arc<dyn BlibCodec>) {
        info!("Registering codec: {} v{}", codec.name(), codec.version());

        let mut codecs = self.codecs.write().unwrap();
        for kind in kinds {
            codecs.insert(*kind, Arc::clone(&codec));
        }
    }

    /// Find the codec handling the given kind
    pub fn get(&self, kind: AssetKind) -> Option<Arc<dyn BlibCodec>> {
        let codecs = self.codecs.read().unwrap();
        codecs.get(&kind).cloned()
    }

    /// Information about every registered codec
    pub fn list(&self) -> Vec<CodecInfo> {
        let codecs = self.codecs.read().unwrap();

        let mut by_name: HashMap<String, CodecInfo> = HashMap::new();
        for (kind, codec) in codecs.iter() {
            let entry = by_name
                .entry(codec.name().to_string())
                .or_insert_with(|| CodecInfo {
                    name: codec.name().to_string(),
                    version: codec.version().to_string(),
                    kinds: Vec::new(),
                });
            entry.kinds.push(*kind);
        }

        let mut infos: Vec<_> = by_name.into_values().collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    /// Number of kinds with a registered codec
    pub fn codec_count(&self) -> usize {
        let codecs = self.codecs.read().unwrap();
        codecs.len()
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullCodec;

    impl BlibCodec for NullCodec {
        fn name(&self) -> &str {
            "null"
        }

        fn version(&self) -> &str {
            "0.0.0"
        }

        fn check_asset(&self, _block: &AssetBlock) -> bool {
            true
        }

        fn check_file(&self, _path: &Path, _subtype: &str) -> Result<bool, CodecError> {
            Ok(true)
        }

        fn export(
            &self,
            _block: &AssetBlock,
            _path: &Path,
            _options: &ExportOptions,
        ) -> Result<(), CodecError> {
            Ok(())
        }

        fn import(&self, _path: &Path, _options: &ImportOptions) -> Result<(), CodecError> {
            Ok(())
        }
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = CodecRegistry::new();
        assert_eq!(registry.codec_count(), 0);
        assert!(registry.get(AssetKind::CyclesMaterial).is_none());
        assert!(registry.list().is_empty());
    }

    #[test]
    fn registered_codec_covers_all_its_kinds() {
        let mut registry = CodecRegistry::new();
        registry.register(AssetKind::all(), Arc::new(NullCodec));

        assert_eq!(registry.codec_count(), 2);
        assert!(registry.get(AssetKind::CyclesMaterial).is_some());
        assert!(registry.get(AssetKind::CyclesNodeGroup).is_some());

        let infos = registry.list();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].name, "null");
        assert_eq!(infos[0].kinds.len(), 2);
    }
}
