//! Dataset file discovery

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use inflammation_core::{Error, Result};

/// Filename prefix shared by all dataset files
pub(crate) const DATASET_PREFIX: &str = "inflammation";

/// Find dataset files in `dir` matching `inflammation*.<extension>`
///
/// The scan is non-recursive and each call re-reads the directory. Matches
/// are sorted by path so load order is deterministic. Fails with
/// `NoDataFound` naming `dir` when nothing matches.
pub(crate) fn discover_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut matches = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let named_like_dataset = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(DATASET_PREFIX));
        if named_like_dataset && path.extension().is_some_and(|ext| ext == extension) {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(Error::no_data_found(dir));
    }

    matches.sort();
    debug!(
        dir = %dir.display(),
        count = matches.len(),
        "discovered inflammation data files"
    );
    Ok(matches)
}
