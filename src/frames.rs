use image::RgbaImage;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::animation::AnimationSpec;
use crate::error::SheetError;
use crate::naming::NamingConvention;

/// What to do when an expected frame has no file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFramePolicy {
    /// Skip the frame and pack the remaining ones contiguously. Later frames
    /// shift into earlier cells.
    Compact,
    /// Leave a transparent cell so every frame stays at `index - 1`.
    Gaps,
    /// Fail the animation.
    Strict,
}

impl Default for MissingFramePolicy {
    fn default() -> Self {
        MissingFramePolicy::Compact
    }
}

impl FromStr for MissingFramePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(MissingFramePolicy::Compact),
            "gaps" => Ok(MissingFramePolicy::Gaps),
            "strict" => Ok(MissingFramePolicy::Strict),
            other => Err(format!(
                "unknown missing frame policy \"{}\", expected compact, gaps or strict",
                other
            )),
        }
    }
}

#[derive(Debug)]
pub struct LoadedFrame {
    /// 1-based frame index within the animation.
    pub index: u32,
    pub path: PathBuf,
    pub image: RgbaImage,
}

#[derive(Debug)]
pub struct LoadedFrames {
    pub expected: u32,
    pub frames: Vec<LoadedFrame>,
    pub missing: Vec<u32>,
    pub max_width: u32,
    pub max_height: u32,
}

/// Loads frames `1..=animation.frames` from `dir` in index order.
///
/// Missing frames are logged and recorded in [`LoadedFrames::missing`];
/// under [`MissingFramePolicy::Strict`] they fail the load instead. Finding no
/// frame at all is always an error.
pub fn load_frames(
    dir: &Path,
    animation: &AnimationSpec,
    naming: &NamingConvention,
    policy: MissingFramePolicy,
) -> Result<LoadedFrames, SheetError> {
    let mut loaded = LoadedFrames {
        expected: animation.frames,
        frames: Vec::new(),
        missing: Vec::new(),
        max_width: 0,
        max_height: 0,
    };

    for index in 1..=animation.frames {
        let path = match naming.resolve(dir, &animation.name, index) {
            Some(path) => path,
            None => {
                log::warn!("Could not find frame {} for {}", index, animation.name);
                loaded.missing.push(index);
                continue;
            }
        };

        let image = image::open(&path)
            .map_err(|source| SheetError::Decode { path: path.clone(), source })?
            .to_rgba8();

        loaded.max_width = loaded.max_width.max(image.width());
        loaded.max_height = loaded.max_height.max(image.height());
        loaded.frames.push(LoadedFrame { index, path, image });
    }

    if loaded.frames.is_empty() {
        return Err(SheetError::NoFrames {
            animation: animation.name.clone(),
            dir: dir.to_path_buf(),
        });
    }

    if policy == MissingFramePolicy::Strict && !loaded.missing.is_empty() {
        return Err(SheetError::MissingFrames {
            animation: animation.name.clone(),
            indices: loaded.missing,
        });
    }

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_from_str() {
        assert_eq!("gaps".parse::<MissingFramePolicy>(), Ok(MissingFramePolicy::Gaps));
        assert_eq!("strict".parse::<MissingFramePolicy>(), Ok(MissingFramePolicy::Strict));
        assert!("Compact".parse::<MissingFramePolicy>().is_err());
    }

    #[test]
    fn policy_defaults_to_compact() {
        assert_eq!(MissingFramePolicy::default(), MissingFramePolicy::Compact);
    }
}
