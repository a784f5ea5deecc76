//! Frame file naming conventions.
//!
//! Frame `i` of an animation may be stored under several names depending on
//! the tool that exported it. Candidates are tried in order and the first
//! existing file wins.

use std::path::{Path, PathBuf};

/// Builds a candidate file name from an animation name and a 1-based frame index.
pub type CandidateFn = fn(&str, u32) -> String;

/// `Idle_3.png`
pub fn exact(name: &str, index: u32) -> String {
    format!("{}_{}.png", name, index)
}

/// `idle_3.png`
pub fn lowercase(name: &str, index: u32) -> String {
    format!("{}_{}.png", name.to_lowercase(), index)
}

/// `IDLE_3.png`
pub fn uppercase(name: &str, index: u32) -> String {
    format!("{}_{}.png", name.to_uppercase(), index)
}

/// `3.png`
pub fn bare_index(_name: &str, index: u32) -> String {
    format!("{}.png", index)
}

pub const DEFAULT_CANDIDATES: [CandidateFn; 4] = [exact, lowercase, uppercase, bare_index];

#[derive(Clone)]
pub struct NamingConvention {
    candidates: Vec<CandidateFn>,
}

impl NamingConvention {
    pub fn new(candidates: Vec<CandidateFn>) -> Self {
        NamingConvention { candidates }
    }

    pub fn candidates<'a>(&'a self, name: &'a str, index: u32) -> impl Iterator<Item = String> + 'a {
        self.candidates.iter().map(move |candidate| candidate(name, index))
    }

    pub fn resolve(&self, dir: &Path, name: &str, index: u32) -> Option<PathBuf> {
        self.candidates(name, index)
            .map(|file_name| dir.join(file_name))
            .find(|path| {
                let found = path.is_file();
                log::debug!("{} {}", if found { "found" } else { "no file at" }, path.display());
                found
            })
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        NamingConvention::new(DEFAULT_CANDIDATES.to_vec())
    }
}

impl std::fmt::Debug for NamingConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamingConvention")
            .field("candidates", &self.candidates.len())
            .finish()
    }
}

/// Resolves frame `index` of `name` under `dir` with the default candidates.
pub fn resolve_frame_path(dir: &Path, name: &str, index: u32) -> Option<PathBuf> {
    NamingConvention::default().resolve(dir, name, index)
}
