use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Frame duration written to the metadata when an animation doesn't set one (6 fps).
pub const DEFAULT_FRAME_DURATION_MS: u32 = 1000 / 6;

/// File name of an animation's sheet, e.g. `Attack_1` -> `attack_1.png`.
pub fn sheet_file_name(animation_name: &str) -> String {
    format!("{}.png", animation_name.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnimationSpec {
    pub name: String,
    pub frames: u32,
    #[serde(default = "default_duration")]
    pub duration_ms: u32,
}

fn default_duration() -> u32 {
    DEFAULT_FRAME_DURATION_MS
}

impl AnimationSpec {
    pub fn new(name: impl Into<String>, frames: u32) -> Self {
        AnimationSpec {
            name: name.into(),
            frames,
            duration_ms: DEFAULT_FRAME_DURATION_MS,
        }
    }

    pub fn sheet_file_name(&self) -> String {
        sheet_file_name(&self.name)
    }
}

/// Ordered list of animations to pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationTable(Vec<AnimationSpec>);

impl AnimationTable {
    pub fn new(animations: Vec<AnimationSpec>) -> Result<Self> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for anim in animations.iter() {
            if anim.frames == 0 {
                return Err(anyhow!("animation \"{}\" expects 0 frames", anim.name));
            }
            if let Some(other) = seen.insert(anim.name.to_lowercase(), &anim.name) {
                return Err(anyhow!(
                    "animations \"{}\" and \"{}\" would both be written to {}",
                    other,
                    anim.name,
                    anim.sheet_file_name()
                ));
            }
        }
        Ok(AnimationTable(animations))
    }

    /// The wizard's animations as shipped with the game.
    pub fn wizard() -> Self {
        AnimationTable(
            [
                ("Attack_1", 6),
                ("Attack_2", 6),
                ("Charge", 4),
                ("Dead", 4),
                ("Fireball", 6),
                ("Flame_jet", 6),
                ("Hurt", 3),
                ("Idle", 6),
                ("Jump", 4),
                // also used for walking
                ("Run", 8),
            ]
            .iter()
            .map(|&(name, frames)| AnimationSpec::new(name, frames))
            .collect(),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnimationSpec> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AnimationTable {
    fn default() -> Self {
        AnimationTable::wizard()
    }
}

impl<'a> IntoIterator for &'a AnimationTable {
    type Item = &'a AnimationSpec;
    type IntoIter = std::slice::Iter<'a, AnimationSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_table_order() {
        let table = AnimationTable::wizard();
        let names: Vec<_> = table.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"Attack_1"));
        assert_eq!(names.last(), Some(&"Run"));
        assert_eq!(table.len(), 10);
        assert!(AnimationTable::new(table.iter().cloned().collect()).is_ok());
    }

    #[test]
    fn rejects_zero_frames() {
        let err = AnimationTable::new(vec![AnimationSpec::new("Idle", 0)]).unwrap_err();
        assert!(err.to_string().contains("Idle"));
    }

    #[test]
    fn rejects_names_colliding_on_output_file() {
        let table = AnimationTable::new(vec![
            AnimationSpec::new("Idle", 6),
            AnimationSpec::new("IDLE", 4),
        ]);
        assert!(table.is_err());
    }

    #[test]
    fn sheet_file_name_is_lowercase() {
        assert_eq!(AnimationSpec::new("Flame_jet", 6).sheet_file_name(), "flame_jet.png");
    }
}
