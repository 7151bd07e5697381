use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    document::writer::WriterConfig,
    foundation::error::{SketchError, SketchResult},
    group::containment::ContainmentPolicy,
};

/// Knobs for one grouping run. Every field has a default, so a JSON file only needs the fields it
/// changes.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Which outer claims a hole.
    pub containment: ContainmentPolicy,
    /// Compute per-element geometry on a rayon pool. The document is still rewritten in order.
    pub parallel: bool,
    /// Worker threads for the parallel pool. `None` uses rayon defaults.
    pub threads: Option<usize>,
    pub writer: WriterConfig,
}

impl GroupingConfig {
    pub fn from_path(path: &Path) -> SketchResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open grouping config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse grouping config '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> SketchResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(SketchError::validation("'threads' must be >= 1 when set"));
        }
        self.writer.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
