use reqwest::StatusCode;
use std::{fmt, io, path::PathBuf};
use thiserror::Error;

/// The step of [`ensure_present`](crate::download::ensure_present) that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Task,
    Check,
    Mkdir,
    Fetch,
    Write,
}

impl Stage {
    pub fn get(&self) -> &'static str {
        match *self {
            Self::Task => "task",
            Self::Check => "existence check",
            Self::Mkdir => "mkdir",
            Self::Fetch => "network fetch",
            Self::Write => "file write",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get())
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    /// The destination directory isn't the parent of the destination file.
    #[error("{dir} is not the parent directory of {path}")]
    Layout { path: PathBuf, dir: PathBuf },

    /// Probing the destination failed for a reason other than it being absent.
    #[error("Failed to check for {path}")]
    Check {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create directory {dir}")]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure: DNS, refused connection, timeout, too many redirects.
    #[error("Failed to fetch {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server responded to {url} with {status}")]
    Status { url: String, status: StatusCode },

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    pub fn stage(&self) -> Stage {
        match self {
            Self::Layout { .. } => Stage::Task,
            Self::Check { .. } => Stage::Check,
            Self::CreateDir { .. } => Stage::Mkdir,
            Self::Client(_) | Self::Network { .. } | Self::Status { .. } => Stage::Fetch,
            Self::Write { .. } => Stage::Write,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_labels() {
        let err = FetchError::Status {
            url: "https://example.com/x.bin".into(),
            status: StatusCode::NOT_FOUND,
        };

        assert_eq!(err.stage(), Stage::Fetch);
        assert_eq!(err.stage().to_string(), "network fetch");
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_io_errors_keep_source() {
        let err = FetchError::CreateDir {
            dir: "Sample".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(err.stage(), Stage::Mkdir);
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "Failed to create directory Sample");
    }
}
