use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

use crate::atlas::{SheetAtlas, ATLAS_FILE_NAME};
use crate::batch::BuiltSheet;

/// Packs the atlas and every built sheet into a single zip file.
pub fn write_bundle(zip_path: &Path, sheets: &[BuiltSheet], atlas: &SheetAtlas) -> Result<()> {
    let zip_file = File::create(zip_path)
        .with_context(|| format!("failed to open zip file {} for writing", zip_path.display()))?;
    let mut zip_writer = zip::ZipWriter::new(zip_file);

    zip_writer.start_file(ATLAS_FILE_NAME, Default::default())?;
    serde_json::to_writer_pretty(&mut zip_writer, atlas)?;

    for sheet in sheets {
        let entry_name = sheet.animation.sheet_file_name();
        log::info!("Bundling {} as {}", sheet.animation.name, entry_name);

        zip_writer.start_file(entry_name.as_str(), Default::default())?;
        let mut image_file = File::open(&sheet.path)
            .with_context(|| format!("failed to open sprite sheet at {}", sheet.path.display()))?;

        std::io::copy(&mut image_file, &mut zip_writer)
            .with_context(|| format!("failed to write {} inside zip", entry_name))?;
    }

    zip_writer.finish().context("failed to finish zip file")?;
    Ok(())
}
