use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use wizardsheets::atlas::SheetAtlas;
use wizardsheets::bundle::write_bundle;
use wizardsheets::index::{Index, Overrides};
use wizardsheets::MissingFramePolicy;

/// Assembles per-frame PNGs into one horizontal sprite sheet per animation.
#[derive(Parser, Debug)]
#[command(name = "packer", version)]
struct Cli {
    /// YAML index listing the animations to pack (defaults to the wizard table)
    #[arg(long)]
    index: Option<PathBuf>,
    /// Directory holding the individual frame images
    #[arg(long)]
    input: Option<PathBuf>,
    /// Directory receiving the sprite sheets
    #[arg(long)]
    output: Option<PathBuf>,
    /// What to do with missing frames: compact, gaps or strict
    #[arg(long)]
    missing: Option<MissingFramePolicy>,
    /// Also pack the sheets and their metadata into this zip file
    #[arg(long)]
    bundle: Option<PathBuf>,
    /// Don't write index.json next to the sheets
    #[arg(long)]
    no_metadata: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let index = match &cli.index {
        Some(path) => Some(Index::load(path)?),
        None => None,
    };

    let overrides = Overrides {
        input_dir: cli.input,
        output_dir: cli.output,
        missing_frames: cli.missing,
    };
    let (assembler, table) = overrides.resolve(index);

    let report = assembler.run(&table);
    let atlas = SheetAtlas::from_built(&report.built);

    if !cli.no_metadata && !report.built.is_empty() {
        let path = atlas
            .write_to(&assembler.output_dir)
            .context("failed to write sheet metadata")?;
        log::info!("Wrote metadata to {}", path.display());
    }

    if let Some(zip_path) = &cli.bundle {
        write_bundle(zip_path, &report.built, &atlas)
            .with_context(|| format!("failed to write bundle {}", zip_path.display()))?;
        log::info!("Bundled {} sheets into {}", report.built.len(), zip_path.display());
    }

    if report.is_complete() {
        log::info!("Done! {} sprite sheets created", report.built.len());
    } else {
        let failed = report
            .failed
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>();
        log::warn!(
            "Done with {} sprite sheets created, {} skipped: {}",
            report.built.len(),
            failed.len(),
            failed.join(", ")
        );
    }

    Ok(())
}
