use crate::asset::AssetRoster;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// What to do when a target file already exists
///
/// Chosen once per export batch, before any file is written, and applied to
/// every collision in that batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportPolicy {
    /// Replace the existing file
    #[default]
    Overwrite,
    /// Probe for a free numbered name and write there instead
    Rename,
    /// Skip the asset, leaving the existing file untouched
    Ignore,
}

impl fmt::Display for ExportPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportPolicy::Overwrite => "overwrite",
            ExportPolicy::Rename => "rename",
            ExportPolicy::Ignore => "ignore",
        };
        f.write_str(name)
    }
}

/// Compute the target path for one asset: `<dir>/<baseStem>_<assetName>.blib`
///
/// Any extension on `base` is dropped first, so "untitled.blib" and
/// "untitled" produce the same names.
pub fn target_path(dir: &Path, base: &str, asset_name: &str) -> PathBuf {
    let stem = Path::new(base)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| base.to_string());
    dir.join(format!("{}_{}.blib", stem, asset_name))
}

/// Find a collision-free variant of `path` by appending the first free
/// integer suffix (starting at 1) to the file stem
///
/// `base_asset1.blib` taken -> probe `base_asset11.blib`,
/// `base_asset12.blib`, ... The returned path is guaranteed not to exist at
/// the time of the probe.
pub fn uniquify(path: &Path) -> PathBuf {
    if !path.is_file() {
        return path.to_path_buf();
    }

    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path.extension().map(|e| e.to_string_lossy().into_owned());

    let mut num = 1u32;
    loop {
        let file_name = match &ext {
            Some(ext) => format!("{}{}.{}", stem, num, ext),
            None => format!("{}{}", stem, num),
        };
        let candidate = dir.join(file_name);
        if !candidate.is_file() {
            return candidate;
        }
        num += 1;
    }
}

/// Apply the batch policy to one candidate path
///
/// Returns `None` when the asset should be skipped (`Ignore` on an existing
/// file); otherwise the path to actually write.
pub fn resolve(path: PathBuf, policy: ExportPolicy) -> Option<PathBuf> {
    match policy {
        ExportPolicy::Rename => Some(uniquify(&path)),
        ExportPolicy::Ignore if path.is_file() => None,
        _ => Some(path),
    }
}

/// Pre-check pass: names of selected assets whose current target path
/// already exists
///
/// Run before the batch; only a non-empty result warrants prompting the user
/// for a policy. With no collisions the batch proceeds directly (implicit
/// overwrite).
pub fn find_collisions(dir: &Path, base: &str, roster: &AssetRoster) -> Vec<String> {
    roster
        .selected()
        .filter(|name| target_path(dir, base, name).is_file())
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetBlock, AssetKind, AssetRoster, MemorySource};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn target_path_strips_base_extension() {
        let dir = Path::new("/out");
        assert_eq!(
            target_path(dir, "untitled.blib", "wood"),
            dir.join("untitled_wood.blib")
        );
        assert_eq!(
            target_path(dir, "untitled", "wood"),
            dir.join("untitled_wood.blib")
        );
    }

    #[test]
    fn uniquify_returns_path_unchanged_when_free() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("base_wood.blib");
        assert_eq!(uniquify(&path), path);
    }

    #[test]
    fn uniquify_appends_first_free_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("base_asset1.blib");
        fs::write(&path, b"taken").unwrap();

        assert_eq!(uniquify(&path), temp_dir.path().join("base_asset11.blib"));

        fs::write(temp_dir.path().join("base_asset11.blib"), b"taken").unwrap();
        assert_eq!(uniquify(&path), temp_dir.path().join("base_asset12.blib"));
    }

    #[test]
    fn resolve_ignore_skips_only_existing_targets() {
        let temp_dir = TempDir::new().unwrap();
        let taken = temp_dir.path().join("base_wood.blib");
        fs::write(&taken, b"taken").unwrap();
        let free = temp_dir.path().join("base_steel.blib");

        assert_eq!(resolve(taken, ExportPolicy::Ignore), None);
        assert_eq!(resolve(free.clone(), ExportPolicy::Ignore), Some(free));
    }

    #[test]
    fn resolve_overwrite_keeps_the_colliding_path() {
        let temp_dir = TempDir::new().unwrap();
        let taken = temp_dir.path().join("base_wood.blib");
        fs::write(&taken, b"taken").unwrap();

        assert_eq!(
            resolve(taken.clone(), ExportPolicy::Overwrite),
            Some(taken)
        );
    }

    #[test]
    fn collision_precheck_reports_selected_assets_only() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("base_wood.blib"), b"taken").unwrap();
        fs::write(temp_dir.path().join("base_steel.blib"), b"taken").unwrap();

        let source = MemorySource::new(vec![
            AssetBlock::new("wood", AssetKind::CyclesMaterial),
            AssetBlock::new("steel", AssetKind::CyclesMaterial),
            AssetBlock::new("glass", AssetKind::CyclesMaterial),
        ]);
        let mut roster = AssetRoster::from_source(&source, AssetKind::CyclesMaterial, |_| true);
        roster.select("wood");
        roster.select("glass");

        let collisions = find_collisions(temp_dir.path(), "base", &roster);
        assert_eq!(collisions, vec!["wood".to_string()]);
    }
}
