//! YAML index file describing what to pack.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::animation::{AnimationSpec, AnimationTable};
use crate::batch::Assembler;
use crate::frames::MissingFramePolicy;

pub const DEFAULT_INPUT_DIR: &str = "src/components/sprites";
pub const DEFAULT_OUTPUT_DIR: &str = "public/sprites/wizard";

#[derive(Debug, Deserialize)]
struct IndexFile {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    #[serde(default)]
    missing_frames: MissingFramePolicy,
    animations: Vec<AnimationSpec>,
}

/// Parsed index with directories resolved against the index file location.
#[derive(Debug)]
pub struct Index {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub missing_frames: MissingFramePolicy,
    pub animations: AnimationTable,
}

impl Index {
    pub fn from_yaml_str(s: &str, base_dir: &Path) -> Result<Index> {
        let parsed: IndexFile = serde_yaml::from_str(s).context("failed to parse index yaml")?;
        let animations = AnimationTable::new(parsed.animations).context("invalid animation table")?;

        Ok(Index {
            input_dir: parsed.input_dir.map(|dir| base_dir.join(dir)),
            output_dir: parsed.output_dir.map(|dir| base_dir.join(dir)),
            missing_frames: parsed.missing_frames,
            animations,
        })
    }

    pub fn load(path: &Path) -> Result<Index> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to open index file at {}", path.display()))?;

        let mut base_dir = path.to_path_buf();
        base_dir.pop();

        Index::from_yaml_str(&data, &base_dir)
            .with_context(|| format!("invalid index file at {}", path.display()))
    }
}

/// Settings given on the command line. They take precedence over the index
/// file, which takes precedence over the built-in defaults.
#[derive(Debug, Default)]
pub struct Overrides {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub missing_frames: Option<MissingFramePolicy>,
}

impl Overrides {
    pub fn resolve(self, index: Option<Index>) -> (Assembler, AnimationTable) {
        let (input_dir, output_dir, policy, table) = match index {
            Some(index) => (
                self.input_dir.or(index.input_dir),
                self.output_dir.or(index.output_dir),
                self.missing_frames.unwrap_or(index.missing_frames),
                index.animations,
            ),
            None => (
                self.input_dir,
                self.output_dir,
                self.missing_frames.unwrap_or_default(),
                AnimationTable::wizard(),
            ),
        };

        let assembler = Assembler::new(
            input_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
            output_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        )
        .with_policy(policy);

        (assembler, table)
    }
}
