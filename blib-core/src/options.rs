use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Packing disposition for resources carried inside a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Embed {
    /// Pack into the host file
    Always,
    /// Store externally
    Never,
    /// Keep whatever the exported asset used
    Preserve,
}

/// Export configuration, applied uniformly to every asset in a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Include images packed in the host file
    pub include_packed_images: bool,
    /// Include images saved separately on disc
    pub include_external_images: bool,
    /// Include image sequences
    pub include_sequences: bool,
    /// Include movies
    pub include_movies: bool,
    /// Include text blocks packed in the host file
    pub include_packed_texts: bool,
    /// Include text blocks saved separately on disc
    pub include_external_texts: bool,
    /// Include scripts referenced only by path
    pub include_scripts: bool,
    /// Omit blank variables for a slightly smaller file
    pub optimize_file: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_packed_images: true,
            include_external_images: true,
            include_sequences: true,
            include_movies: true,
            include_packed_texts: true,
            include_external_texts: true,
            include_scripts: true,
            optimize_file: false,
        }
    }
}

/// Import configuration, applied uniformly to every file in a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    pub include_packed_images: bool,
    pub include_external_images: bool,
    pub include_sequences: bool,
    pub include_movies: bool,
    pub include_packed_texts: bool,
    pub include_external_texts: bool,
    pub include_scripts: bool,
    /// How to pack imported images
    pub pack_images: Embed,
    /// How to pack imported texts
    pub pack_texts: Embed,
    /// Reuse existing duplicate images instead of creating new instances
    pub reuse_images: bool,
    /// Directory for external resources; None lets the codec pick
    pub resource_dir: Option<PathBuf>,
    /// Skip file corruption verification
    pub skip_checksum: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            include_packed_images: true,
            include_external_images: true,
            include_sequences: true,
            include_movies: true,
            include_packed_texts: true,
            include_external_texts: true,
            include_scripts: true,
            pack_images: Embed::Never,
            pack_texts: Embed::Preserve,
            reuse_images: true,
            resource_dir: None,
            skip_checksum: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_defaults_include_everything_without_optimizing() {
        let options = ExportOptions::default();
        assert!(options.include_packed_images);
        assert!(options.include_scripts);
        assert!(!options.optimize_file);
    }

    #[test]
    fn import_defaults_match_export_side() {
        let options = ImportOptions::default();
        assert_eq!(options.pack_images, Embed::Never);
        assert_eq!(options.pack_texts, Embed::Preserve);
        assert!(options.reuse_images);
        assert!(options.resource_dir.is_none());
        assert!(!options.skip_checksum);
    }

    #[test]
    fn options_deserialize_with_partial_fields() {
        let options: ImportOptions =
            serde_json::from_str(r#"{"pack_images": "always", "skip_checksum": true}"#).unwrap();
        assert_eq!(options.pack_images, Embed::Always);
        assert!(options.skip_checksum);
        assert!(options.include_movies);
    }
}
