//! Assembles per-frame PNG images into horizontal sprite sheets.

pub mod animation;
pub mod atlas;
pub mod batch;
pub mod bundle;
pub mod error;
pub mod frames;
pub mod index;
pub mod naming;
pub mod sheet;

pub use animation::{AnimationSpec, AnimationTable};
pub use batch::{Assembler, BatchReport, BuiltSheet};
pub use error::SheetError;
pub use frames::{load_frames, LoadedFrame, LoadedFrames, MissingFramePolicy};
pub use naming::{resolve_frame_path, NamingConvention};
pub use sheet::{assemble_sheet, save_sheet, SpriteSheet};
