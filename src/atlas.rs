//! `index.json` written next to the sheets so the game can slice them.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::batch::BuiltSheet;

pub const ATLAS_FILE_NAME: &str = "index.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSize {
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetFrame {
    /// 1-based index of the source frame file.
    pub source_index: u32,
    pub rect: SheetRect,
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetEntry {
    pub animation: String,
    pub image: String,
    pub cell: SheetSize,
    pub frames: Vec<SheetFrame>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SheetAtlas {
    pub sheets: Vec<SheetEntry>,
}

impl SheetAtlas {
    pub fn from_built(sheets: &[BuiltSheet]) -> Self {
        SheetAtlas {
            sheets: sheets.iter().map(SheetEntry::from).collect(),
        }
    }

    pub fn write_to(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(ATLAS_FILE_NAME);
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("failed to write {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}

impl From<&BuiltSheet> for SheetEntry {
    fn from(built: &BuiltSheet) -> Self {
        SheetEntry {
            animation: built.animation.name.clone(),
            image: built.animation.sheet_file_name(),
            cell: SheetSize {
                w: built.cell_width,
                h: built.cell_height,
            },
            frames: built
                .placements
                .iter()
                .map(|p| SheetFrame {
                    source_index: p.index,
                    rect: SheetRect {
                        x: p.x,
                        y: p.y,
                        w: p.width,
                        h: p.height,
                    },
                    duration: built.animation.duration_ms,
                })
                .collect(),
            missing: built.missing.clone(),
        }
    }
}
