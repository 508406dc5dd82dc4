use crate::shared::Result;
use std::path::{Path, PathBuf};

/// EnvironmentFileReader port for locating and reading conda environment files
pub trait EnvironmentFileReader {
    /// Finds files under `root` whose root-relative path matches `pattern`
    /// (a glob such as `**/environment.yml`). Results are sorted.
    fn find_environment_files(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>>;

    fn read_environment_file(&self, path: &Path) -> Result<String>;
}
