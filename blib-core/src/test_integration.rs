//! End-to-end batch flow: roster -> collision pre-check -> export -> import

use crate::asset::{AssetBlock, AssetKind, AssetRoster, MemorySource};
use crate::codec::{BlibCodec, CodecError, CodecRegistry};
use crate::conflict::{find_collisions, ExportPolicy};
use crate::export::Exporter;
use crate::import::Importer;
use crate::options::{ExportOptions, ImportOptions};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Line-based stand-in for the real container codec
struct TextCodec;

impl BlibCodec for TextCodec {
    fn name(&self) -> &str {
        "text"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }

    fn check_asset(&self, block: &AssetBlock) -> bool {
        !block.name.is_empty()
    }

    fn check_file(&self, path: &Path, subtype: &str) -> Result<bool, CodecError> {
        let content = fs::read_to_string(path)?;
        Ok(content.starts_with(&format!("BLIB:{}", subtype)))
    }

    fn export(
        &self,
        block: &AssetBlock,
        path: &Path,
        _options: &ExportOptions,
    ) -> Result<(), CodecError> {
        fs::write(path, format!("BLIB:{} {}", block.kind.subtype(), block.name))?;
        Ok(())
    }

    fn import(&self, path: &Path, _options: &ImportOptions) -> Result<(), CodecError> {
        let content = fs::read_to_string(path)?;
        if !content.starts_with("BLIB:") {
            return Err(CodecError::InvalidContainer(path.display().to_string()));
        }
        Ok(())
    }
}

fn registry() -> CodecRegistry {
    let mut registry = CodecRegistry::new();
    registry.register(AssetKind::all(), Arc::new(TextCodec));
    registry
}

#[test]
fn export_then_import_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("library");

    let source = MemorySource::new(vec![
        AssetBlock::new("wood", AssetKind::CyclesMaterial),
        AssetBlock::new("steel", AssetKind::CyclesMaterial),
        AssetBlock::new("mixer", AssetKind::CyclesNodeGroup),
    ]);

    let mut roster = AssetRoster::from_source(&source, AssetKind::CyclesMaterial, |b| {
        TextCodec.check_asset(b)
    });
    roster.select_all();

    // Fresh directory: pre-check finds nothing, implicit overwrite applies
    assert!(find_collisions(&out, "scene", &roster).is_empty());

    let report = Exporter::new(registry())
        .export_assets(
            &source,
            &roster,
            AssetKind::CyclesMaterial,
            &out,
            "scene",
            ExportPolicy::Overwrite,
            &ExportOptions::default(),
        )
        .unwrap();
    assert_eq!(report.succeeded, 2);

    // Second batch against the same directory now collides on both names
    let collisions = find_collisions(&out, "scene", &roster);
    assert_eq!(collisions.len(), 2);

    // Import what was written, as materials
    let files = vec![out.join("scene_wood.blib"), out.join("scene_steel.blib")];
    let report = Importer::new(registry())
        .import_files(&files, AssetKind::CyclesMaterial, &ImportOptions::default())
        .unwrap();
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.incompatible, 0);
}

#[test]
fn node_group_file_is_incompatible_with_material_import() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().to_path_buf();

    let source = MemorySource::new(vec![AssetBlock::new("mixer", AssetKind::CyclesNodeGroup)]);
    let mut roster = AssetRoster::from_source(&source, AssetKind::CyclesNodeGroup, |_| true);
    roster.select_all();

    Exporter::new(registry())
        .export_assets(
            &source,
            &roster,
            AssetKind::CyclesNodeGroup,
            &out,
            "scene",
            ExportPolicy::Overwrite,
            &ExportOptions::default(),
        )
        .unwrap();

    let files = vec![out.join("scene_mixer.blib")];
    let report = Importer::new(registry())
        .import_files(&files, AssetKind::CyclesMaterial, &ImportOptions::default())
        .unwrap();

    assert_eq!(report.incompatible, 1);
    assert_eq!(report.succeeded, 0);
    assert_eq!(report.failed, 0);
}
