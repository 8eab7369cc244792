use crate::{error::FetchError, task::DownloadTask};

pub const SAMPLE_DIR: &str = "Sample/";
pub const SAMPLE_FILE: &str = "Sample/cxcr4aMO2_290112.lsm";
pub const SAMPLE_URL: &str =
    "https://zenodo.org/record/1211599/files/cxcr4aMO2_290112.lsm?download=1";

pub fn sample_task() -> Result<DownloadTask, FetchError> {
    DownloadTask::new(SAMPLE_FILE, SAMPLE_DIR, SAMPLE_URL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_sample_task_is_consistent() {
        let task = sample_task().unwrap();

        assert_eq!(task.path(), Path::new(SAMPLE_FILE));
        assert_eq!(task.path().parent(), Some(Path::new("Sample")));
        assert!(task.url().starts_with("https://zenodo.org/"));
    }
}
