use std::path::PathBuf;

use crate::animation::{AnimationSpec, AnimationTable};
use crate::error::SheetError;
use crate::frames::{load_frames, MissingFramePolicy};
use crate::naming::NamingConvention;
use crate::sheet::{assemble_sheet, save_sheet, Placement};

/// A sheet that was written to disk. The pixels are gone, only the layout remains.
#[derive(Debug, Clone)]
pub struct BuiltSheet {
    pub animation: AnimationSpec,
    pub path: PathBuf,
    pub cell_width: u32,
    pub cell_height: u32,
    pub placements: Vec<Placement>,
    pub missing: Vec<u32>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub built: Vec<BuiltSheet>,
    /// Failed animations by name. The errors wrap a [`SheetError`].
    pub failed: Vec<(String, anyhow::Error)>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Assembler {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub naming: NamingConvention,
    pub policy: MissingFramePolicy,
}

impl Assembler {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Assembler {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            naming: NamingConvention::default(),
            policy: MissingFramePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MissingFramePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    /// Loads, composites and writes the sheet of a single animation.
    pub fn build(&self, animation: &AnimationSpec) -> Result<BuiltSheet, SheetError> {
        let loaded = load_frames(&self.input_dir, animation, &self.naming, self.policy)?;
        let sheet = assemble_sheet(&loaded, self.policy);
        let path = save_sheet(&sheet.image, &self.output_dir, &animation.name)?;

        log::info!(
            "Created sprite sheet: {} ({} of {} frames, {}x{})",
            path.display(),
            loaded.frames.len(),
            loaded.expected,
            sheet.image.width(),
            sheet.image.height()
        );

        Ok(BuiltSheet {
            animation: animation.clone(),
            path,
            cell_width: sheet.cell_width,
            cell_height: sheet.cell_height,
            placements: sheet.placements,
            missing: loaded.missing,
        })
    }

    /// Builds every animation of `table` in order. A failing animation is
    /// logged and recorded, and the batch moves on to the next one.
    pub fn run(&self, table: &AnimationTable) -> BatchReport {
        let mut report = BatchReport::default();

        log::info!(
            "Packing {} animations from {} into {}",
            table.len(),
            self.input_dir.display(),
            self.output_dir.display()
        );
        for animation in table {
            match self.build(animation) {
                Ok(built) => report.built.push(built),
                Err(e) => {
                    let e = anyhow::Error::new(e);
                    log::error!("Skipping {}: {:#}", animation.name, e);
                    report.failed.push((animation.name.clone(), e));
                }
            }
        }

        report
    }
}
