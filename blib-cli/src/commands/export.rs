use crate::commands::{KindArg, PolicyArg};
use crate::ui::{error, info, spinner, success, warning};
use anyhow::{bail, Context, Result};
use blib_core::{
    conflict, AssetBlock, AssetKind, AssetRoster, CodecRegistry, ExportOptions, ExportPolicy,
    Exporter, MemorySource,
};
use clap::Args;
use colored::*;
use std::fs;
use std::path::PathBuf;

/// Export assets to .blib files
#[derive(Args)]
pub struct ExportCommand {
    /// Asset library to read blocks from (JSON array of asset blocks)
    #[arg(short, long)]
    pub library: PathBuf,

    /// Output directory for the exported files
    #[arg(short, long)]
    pub output: PathBuf,

    /// Base name; files are written as <base>_<asset>.blib
    #[arg(short, long, default_value = "untitled")]
    pub base: String,

    /// The kind of data to be exported
    #[arg(short, long, value_enum)]
    pub kind: KindArg,

    /// Assets to export, by name
    #[arg(long, value_delimiter = ',', conflicts_with = "all")]
    pub assets: Option<Vec<String>>,

    /// Export every eligible asset
    #[arg(long)]
    pub all: bool,

    /// What to do with files that already exist (prompted when omitted)
    #[arg(long, value_enum)]
    pub on_conflict: Option<PolicyArg>,

    /// Leave out images packed in the host file
    #[arg(long)]
    pub exclude_packed_images: bool,

    /// Leave out images saved separately on disc
    #[arg(long)]
    pub exclude_external_images: bool,

    /// Leave out image sequences
    #[arg(long)]
    pub exclude_sequences: bool,

    /// Leave out movies
    #[arg(long)]
    pub exclude_movies: bool,

    /// Leave out text blocks packed in the host file
    #[arg(long)]
    pub exclude_packed_texts: bool,

    /// Leave out text blocks saved separately on disc
    #[arg(long)]
    pub exclude_external_texts: bool,

    /// Leave out scripts referenced only by path
    #[arg(long)]
    pub exclude_scripts: bool,

    /// Omit blank variables for a slightly smaller file
    #[arg(long)]
    pub optimize: bool,
}

impl ExportCommand {
    pub fn execute(&self, registry: &CodecRegistry) -> Result<()> {
        let kind: AssetKind = self.kind.into();
        let codec = registry
            .get(kind)
            .with_context(|| format!("no codec registered for asset kind '{}'", kind))?;

        let raw = fs::read_to_string(&self.library)
            .with_context(|| format!("failed to read asset library {}", self.library.display()))?;
        let blocks: Vec<AssetBlock> =
            serde_json::from_str(&raw).context("asset library is not a valid JSON block list")?;
        let source = MemorySource::new(blocks);

        let mut roster = AssetRoster::from_source(&source, kind, |b| codec.check_asset(b));
        if roster.is_empty() {
            warning(&format!("No {} assets found in the library", kind));
            return Ok(());
        }

        self.apply_selection(&mut roster)?;

        let collisions = conflict::find_collisions(&self.output, &self.base, &roster);
        let policy = match self.on_conflict {
            Some(policy) => policy.into(),
            None if collisions.is_empty() => ExportPolicy::Overwrite,
            None => crate::ui::prompt_policy(&collisions),
        };

        info(&format!(
            "Exporting {} asset(s) to {}",
            roster.selected_count(),
            self.output.display()
        ));

        let pb = spinner("Exporting assets...");
        let report = Exporter::new(registry.clone()).export_assets(
            &source,
            &roster,
            kind,
            &self.output,
            &self.base,
            policy,
            &self.options(),
        )?;
        pb.finish_and_clear();

        for name in &report.failed_items {
            error(&format!("'{}' failed to export.", name));
        }
        if report.skipped > 0 {
            info(&format!(
                "{} asset(s) skipped, files already existed",
                report.skipped
            ));
        }

        let summary = report.export_summary();
        if report.failed == 0 {
            success(&summary);
        } else {
            println!(
                "{} {}",
                summary.yellow(),
                "Check the log for more info.".dimmed()
            );
        }

        Ok(())
    }

    fn apply_selection(&self, roster: &mut AssetRoster) -> Result<()> {
        if self.all {
            roster.select_all();
            return Ok(());
        }

        let Some(names) = &self.assets else {
            bail!("select assets to export with --assets or --all");
        };

        for name in names {
            if !roster.select(name) {
                warning(&format!("'{}' is not an exportable asset, skipping", name));
            }
        }
        if roster.selected_count() == 0 {
            bail!("none of the requested assets are exportable");
        }

        Ok(())
    }

    fn options(&self) -> ExportOptions {
        ExportOptions {
            include_packed_images: !self.exclude_packed_images,
            include_external_images: !self.exclude_external_images,
            include_sequences: !self.exclude_sequences,
            include_movies: !self.exclude_movies,
            include_packed_texts: !self.exclude_packed_texts,
            include_external_texts: !self.exclude_external_texts,
            include_scripts: !self.exclude_scripts,
            optimize_file: self.optimize,
        }
    }
}
