//! # blib-io Core
//!
//! Batch export and import of named assets (materials, node groups) into
//! `.blib` container files.
//!
//! This crate carries the control flow only. The container format itself
//! lives behind the [`BlibCodec`] trait, which hosts register for each
//! [`AssetKind`] they support:
//!
//! - **Export**: build an [`AssetRoster`] from an [`AssetSource`], flag the
//!   assets to export, pre-check the destination for filename collisions,
//!   pick an [`ExportPolicy`], and run the [`Exporter`].
//! - **Import**: hand a file list to the [`Importer`]; each file is
//!   type-sniffed by the codec before deserialization.
//!
//! Both engines process their batch sequentially and convert per-item codec
//! failures into [`BatchReport`] counts; a single bad asset or file never
//! aborts the rest of the batch.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use blib_core::{
//!     AssetKind, AssetRoster, CodecRegistry, ExportOptions, ExportPolicy,
//!     Exporter, MemorySource, conflict,
//! };
//! use std::path::Path;
//!
//! let registry = CodecRegistry::new(); // host registers its codecs here
//! let source = MemorySource::default();
//!
//! let mut roster = AssetRoster::from_source(&source, AssetKind::CyclesMaterial, |_| true);
//! roster.select_all();
//!
//! let out = Path::new("./library/");
//! let policy = if conflict::find_collisions(out, "untitled", &roster).is_empty() {
//!     ExportPolicy::Overwrite
//! } else {
//!     ExportPolicy::Rename // or ask the user
//! };
//!
//! let report = Exporter::new(registry).export_assets(
//!     &source,
//!     &roster,
//!     AssetKind::CyclesMaterial,
//!     out,
//!     "untitled",
//!     policy,
//!     &ExportOptions::default(),
//! )?;
//! println!("{}", report.export_summary());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod asset;
pub mod codec;
pub mod conflict;
pub mod export;
pub mod import;
pub mod options;
pub mod report;

#[cfg(test)]
mod test_integration;

// Re-export commonly used types
pub use asset::{AssetBlock, AssetItem, AssetKind, AssetRoster, AssetSource, MemorySource};
pub use codec::{BlibCodec, CodecError, CodecInfo, CodecRegistry};
pub use conflict::ExportPolicy;
pub use export::{ExportError, Exporter};
pub use import::{ImportError, Importer};
pub use options::{Embed, ExportOptions, ImportOptions};
pub use report::BatchReport;

use anyhow::Result;
use tracing::info;

/// Version information for the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library with structured logging
pub fn init() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("blib_core=info,blib_cli=info")
        .with_target(false)
        .try_init();

    info!("Initializing blib-io Core v{}", VERSION);

    Ok(())
}
