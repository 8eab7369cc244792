use crate::error::FetchError;
use std::path::{Component, Path, PathBuf};

/// A file to make present locally, the directory it lives in, and where to fetch it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    path: PathBuf,
    dir: PathBuf,
    url: String,
}

impl DownloadTask {
    /// Fails with [`FetchError::Layout`] unless `dir` is the parent of `path`.
    pub fn new(
        path: impl Into<PathBuf>,
        dir: impl Into<PathBuf>,
        url: impl Into<String>,
    ) -> Result<Self, FetchError> {
        let path = path.into();
        let dir = dir.into();
        let parent = path.parent().unwrap_or(Path::new(""));

        if !same_dir(parent, &dir) {
            return Err(FetchError::Layout { path, dir });
        }

        Ok(Self {
            path,
            dir,
            url: url.into(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

// Component-wise, ignoring `.` so `Sample/`, `Sample` and `./Sample` all match.
fn same_dir(a: &Path, b: &Path) -> bool {
    let strip = |p: &Path| -> Vec<PathBuf> {
        p.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .map(|c| PathBuf::from(c.as_os_str()))
            .collect()
    };

    strip(a) == strip(b)
}
