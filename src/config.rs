use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Catalog file name inside the assets directory.
pub const CATALOG_FILE: &str = "unsigs.json";
/// Output of the monochrome pass.
pub const MONOCHROMES_FILE: &str = "monochromes.json";
/// Output of the no-liner pass.
pub const NOLINERS_FILE: &str = "noliners.json";

/// Unsig whose properties the monochrome job prints before classifying.
pub const DEFAULT_INSPECT_ID: &str = "27754";

// ---------------------------------------------------------------------------
// Job configuration
// ---------------------------------------------------------------------------

/// Where a job reads its catalog and writes its subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    /// Directory holding the catalog and the generated subsets.
    pub assets_dir: PathBuf,
    /// Record printed by the monochrome job before classifying, if any.
    pub inspect_id: Option<String>,
}

impl JobConfig {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            inspect_id: Some(DEFAULT_INSPECT_ID.to_string()),
        }
    }

    /// Defaults for a run from the project root: `<cwd>/src/assets`.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().context("resolving working directory")?;
        Ok(Self::new(cwd.join("src").join("assets")))
    }

    pub fn without_inspection(mut self) -> Self {
        self.inspect_id = None;
        self
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.assets_dir.join(CATALOG_FILE)
    }

    pub fn output_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.assets_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_inside_assets_dir() {
        let config = JobConfig::new("/data/assets");
        assert_eq!(config.catalog_path(), PathBuf::from("/data/assets/unsigs.json"));
        assert_eq!(
            config.output_path(NOLINERS_FILE),
            PathBuf::from("/data/assets/noliners.json")
        );
        assert_eq!(config.inspect_id.as_deref(), Some("27754"));
        assert_eq!(config.without_inspection().inspect_id, None);
    }

    #[test]
    fn default_dir_is_under_src_assets() {
        let config = JobConfig::from_current_dir().unwrap();
        assert!(config.assets_dir.ends_with("src/assets"));
    }
}
