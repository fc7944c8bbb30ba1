//! Locale file discovery within a project directory.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Invalid locale file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, DiscoveryError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|source| DiscoveryError::InvalidPattern { pattern: pattern.clone(), source })?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Finds locale files under `root` matching `file_pattern` and none of
/// `exclude_patterns`. Patterns are matched against paths relative to `root`.
///
/// Results are sorted so that later files deterministically override earlier
/// ones when several files contribute to the same locale.
///
/// # Errors
/// Returns error if any pattern is not a valid glob.
pub fn discover_locale_files(
    root: &Path,
    file_pattern: &str,
    exclude_patterns: &[String],
) -> Result<Vec<PathBuf>, DiscoveryError> {
    tracing::debug!(root = %root.display(), file_pattern, "Discovering locale files");

    let include_set = build_glob_set(&[file_pattern.to_string()])?;
    let exclude_set = build_glob_set(exclude_patterns)?;

    let mut found_files = Vec::new();
    for result in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(root) else {
            continue;
        };
        if !include_set.is_match(relative_path) || exclude_set.is_match(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    found_files.sort();
    tracing::debug!(count = found_files.len(), "Locale files discovered");
    Ok(found_files)
}
