use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

use blib_core::CodecRegistry;

mod commands;
mod ui;

use commands::{export::ExportCommand, import::ImportCommand};

/// blib CLI - batch export and import of .blib asset containers
#[derive(Parser)]
#[command(
    name = "blib",
    version = env!("CARGO_PKG_VERSION"),
    about = "Batch export and import of material and node-group assets (.blib)",
    arg_required_else_help = true
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export assets to .blib files
    Export(ExportCommand),

    /// Import assets from .blib files
    Import(ImportCommand),

    /// Show registered codecs
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    colored::control::set_override(!cli.no_color);

    init_logging(cli.verbose);

    let registry = build_registry();

    match &cli.command {
        Commands::Export(cmd) => cmd.execute(&registry),
        Commands::Import(cmd) => cmd.execute(&registry),
        Commands::Info => {
            show_info(&registry);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!("blib_core={},blib_cli={}", level, level))
        .with_target(false)
        .init();
}

/// Codec registration point
///
/// The container codecs are host-provided; embedding builds register theirs
/// here. The stock binary ships with an empty registry.
fn build_registry() -> CodecRegistry {
    CodecRegistry::new()
}

fn show_info(registry: &CodecRegistry) {
    println!("{}", "blib-io".bright_blue().bold());
    println!("  Version: {}", blib_core::VERSION);
    println!();

    let codecs = registry.list();
    if codecs.is_empty() {
        ui::warning("No codecs registered; export and import are unavailable.");
        return;
    }

    println!("{}", "Registered codecs:".bright_blue().bold());
    for codec in codecs {
        let kinds: Vec<_> = codec.kinds.iter().map(|k| k.display_name()).collect();
        println!(
            "  {} v{} ({})",
            codec.name.bright_green(),
            codec.version,
            kinds.join(", ")
        );
    }
}
