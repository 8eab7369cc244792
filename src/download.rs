use crate::{
    error::FetchError,
    task::DownloadTask,
    util::{create_dir_tolerant, is_regular_file},
};
use reqwest::{blocking::Client, redirect::Policy};
use std::{fs, path::PathBuf, time::Duration};

/// What [`Fetcher::ensure_present`] did to make the file present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    AlreadyPresent,
    Downloaded { bytes: u64 },
}

/// Blocking HTTP client that follows redirects.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// No request timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, FetchError> {
        // The blocking client defaults to a 30s total timeout; `None` lifts it.
        let client = Client::builder()
            .redirect(Policy::limited(MAX_REDIRECTS))
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// Downloads `task.url()` to `task.path()` unless a regular file is already there.
    ///
    /// Nothing is written when the server answers with a non-success status.
    pub fn ensure_present(&self, task: &DownloadTask) -> Result<Outcome, FetchError> {
        let path = task.path();
        let url = task.url();

        let present = is_regular_file(path).map_err(|source| FetchError::Check {
            path: path.into(),
            source,
        })?;

        if present {
            debug!("Skipping an existing file: {}", path.display());
            return Ok(Outcome::AlreadyPresent);
        }

        create_dir_tolerant(task.dir()).map_err(|source| FetchError::CreateDir {
            dir: task.dir().into(),
            source,
        })?;

        info!("Downloading: {url}");

        let network = |source: reqwest::Error| FetchError::Network {
            url: url.into(),
            source,
        };

        let res = self.client.get(url).send().map_err(network)?;
        let status = res.status();

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.into(),
                status,
            });
        }

        if res.url().as_str() != url {
            debug!("Followed redirect to {}", res.url());
        }

        let body = res.bytes().map_err(network)?;

        fs::write(path, &body).map_err(|source| FetchError::Write {
            path: path.into(),
            source,
        })?;

        info!("Downloaded {} bytes to {}", body.len(), path.display());

        Ok(Outcome::Downloaded {
            bytes: body.len() as u64,
        })
    }
}

const MAX_REDIRECTS: usize = 10;

/// Makes sure `path` exists, fetching it from `url` into `dir` (its parent) if it doesn't.
pub fn ensure_present(
    path: impl Into<PathBuf>,
    dir: impl Into<PathBuf>,
    url: impl Into<String>,
) -> Result<Outcome, FetchError> {
    let task = DownloadTask::new(path, dir, url)?;

    Fetcher::new()?.ensure_present(&task)
}
