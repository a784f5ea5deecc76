use image::{imageops, RgbaImage};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::animation::sheet_file_name;
use crate::error::SheetError;
use crate::frames::{LoadedFrames, MissingFramePolicy};

/// Where a source frame landed on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// 1-based frame index within the animation.
    pub index: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug)]
pub struct SpriteSheet {
    pub image: RgbaImage,
    pub cell_width: u32,
    pub cell_height: u32,
    pub placements: Vec<Placement>,
}

/// Composites the loaded frames left to right on a transparent canvas.
///
/// Every cell is `max_width` x `max_height`; frames sit at the top-left of
/// their cell and overwrite canvas pixels, alpha included. With
/// [`MissingFramePolicy::Gaps`] frame `i` goes to cell `i - 1` and the sheet
/// spans the expected frame count, otherwise frames are packed in load order.
pub fn assemble_sheet(loaded: &LoadedFrames, policy: MissingFramePolicy) -> SpriteSheet {
    let cell_width = loaded.max_width;
    let cell_height = loaded.max_height;
    let cells = match policy {
        MissingFramePolicy::Gaps => loaded.expected,
        MissingFramePolicy::Compact | MissingFramePolicy::Strict => loaded.frames.len() as u32,
    };

    let mut image = RgbaImage::new(cell_width * cells, cell_height);
    let mut placements = Vec::with_capacity(loaded.frames.len());

    for (position, frame) in loaded.frames.iter().enumerate() {
        let slot = match policy {
            MissingFramePolicy::Gaps => frame.index - 1,
            MissingFramePolicy::Compact | MissingFramePolicy::Strict => position as u32,
        };
        let x = slot * cell_width;
        imageops::replace(&mut image, &frame.image, i64::from(x), 0);
        placements.push(Placement {
            index: frame.index,
            x,
            y: 0,
            width: frame.image.width(),
            height: frame.image.height(),
        });
    }

    SpriteSheet {
        image,
        cell_width,
        cell_height,
        placements,
    }
}

/// Writes `image` as `{lowercase animation_name}.png` inside `output_dir`,
/// creating the directory if needed and replacing any previous sheet.
pub fn save_sheet(image: &RgbaImage, output_dir: &Path, animation_name: &str) -> Result<PathBuf, SheetError> {
    fs::create_dir_all(output_dir).map_err(|source| SheetError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(sheet_file_name(animation_name));
    let file = File::create(&path).map_err(|source| SheetError::Write {
        path: path.clone(),
        source,
    })?;

    let mut out = BufWriter::new(file);
    let mut encoder = png::Encoder::new(&mut out, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let encode_err = |source: png::EncodingError| SheetError::Encode {
        path: path.clone(),
        source,
    };
    let mut writer = encoder.write_header().map_err(encode_err)?;
    writer.write_image_data(image.as_raw()).map_err(encode_err)?;
    writer.finish().map_err(encode_err)?;
    out.flush().map_err(|source| SheetError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
