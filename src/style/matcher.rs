//! Content file matcher for the style generator.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::StyleConfig;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid content pattern '{pattern}': {source}")]
    InvalidContentPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Matches files against the `content` patterns of a [`StyleConfig`].
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    project_root: PathBuf,
    content_set: GlobSet,
}

impl ContentMatcher {
    /// Creates a new matcher from the style configuration.
    pub fn new(project_root: PathBuf, config: &StyleConfig) -> Result<Self, MatcherError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in config.content_globs() {
            let glob = Glob::new(pattern).map_err(|source| MatcherError::InvalidContentPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            builder.add(glob);
        }

        Ok(Self { project_root, content_set: builder.build()? })
    }

    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns true if the path matches a content pattern.
    ///
    /// The path must be absolute and under the project root.
    #[must_use]
    pub fn is_content_file(&self, absolute_path: &Path) -> bool {
        let Some(relative_path) = absolute_path.strip_prefix(&self.project_root).ok() else {
            return false;
        };

        self.is_content_file_relative(relative_path)
    }

    /// Returns true if the path matches a content pattern.
    ///
    /// The path must be relative to the project root.
    #[must_use]
    pub fn is_content_file_relative(&self, relative_path: &Path) -> bool {
        self.content_set.is_match(relative_path)
    }
}
