use crate::commands::{EmbedArg, KindArg};
use crate::ui::{error, info, spinner, success, warning};
use anyhow::Result;
use blib_core::{AssetKind, CodecRegistry, Embed, ImportOptions, Importer};
use clap::Args;
use colored::*;
use std::path::PathBuf;

/// Import assets from .blib files
#[derive(Args)]
pub struct ImportCommand {
    /// Files to import
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// The kind of data to be imported
    #[arg(short, long, value_enum)]
    pub kind: KindArg,

    /// Leave out images packed in the file
    #[arg(long)]
    pub exclude_packed_images: bool,

    /// Leave out images stored externally
    #[arg(long)]
    pub exclude_external_images: bool,

    /// Leave out image sequences
    #[arg(long)]
    pub exclude_sequences: bool,

    /// Leave out movies
    #[arg(long)]
    pub exclude_movies: bool,

    /// Leave out text blocks packed in the file
    #[arg(long)]
    pub exclude_packed_texts: bool,

    /// Leave out text blocks stored externally
    #[arg(long)]
    pub exclude_external_texts: bool,

    /// Leave out scripts referenced only by path
    #[arg(long)]
    pub exclude_scripts: bool,

    /// How to pack imported images
    #[arg(long, value_enum, default_value = "never")]
    pub pack_images: EmbedArg,

    /// How to pack imported texts
    #[arg(long, value_enum, default_value = "preserve")]
    pub pack_texts: EmbedArg,

    /// Create new image instances instead of reusing duplicates
    #[arg(long)]
    pub no_reuse_images: bool,

    /// Directory for external resources (images, texts, ...)
    #[arg(long)]
    pub resource_dir: Option<PathBuf>,

    /// Skip file corruption verification
    #[arg(long)]
    pub skip_checksum: bool,
}

impl ImportCommand {
    pub fn execute(&self, registry: &CodecRegistry) -> Result<()> {
        let kind: AssetKind = self.kind.into();

        info(&format!(
            "Importing {} file(s) as {}",
            self.files.len(),
            kind
        ));

        let pb = spinner("Importing files...");
        let report =
            Importer::new(registry.clone()).import_files(&self.files, kind, &self.options())?;
        pb.finish_and_clear();

        for name in &report.failed_items {
            error(&format!("{} failed to import.", name));
        }
        if report.incompatible > 0 {
            warning(&format!(
                "{} file(s) were not of type '{}'",
                report.incompatible, kind
            ));
        }

        let summary = report.import_summary(kind.display_name());
        if report.failed == 0 && report.incompatible == 0 {
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

    fn options(&self) -> ImportOptions {
        ImportOptions {
            include_packed_images: !self.exclude_packed_images,
            include_external_images: !self.exclude_external_images,
            include_sequences: !self.exclude_sequences,
            include_movies: !self.exclude_movies,
            include_packed_texts: !self.exclude_packed_texts,
            include_external_texts: !self.exclude_external_texts,
            include_scripts: !self.exclude_scripts,
            pack_images: Embed::from(self.pack_images),
            pack_texts: Embed::from(self.pack_texts),
            reuse_images: !self.no_reuse_images,
            resource_dir: self.resource_dir.clone(),
            skip_checksum: self.skip_checksum,
        }
    }
}
