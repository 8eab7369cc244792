use std::{
    fs,
    io::{self, ErrorKind},
    path::Path,
};

/// `Ok(false)` when nothing (or something other than a regular file) is at `path`.
pub fn is_regular_file(path: impl AsRef<Path>) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// `mkdir -p`: an already existing directory is not an error.
pub fn create_dir_tolerant(dir: impl AsRef<Path>) -> io::Result<()> {
    let dir = dir.as_ref();

    if dir.as_os_str().is_empty() {
        return Ok(());
    }

    match fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(err) => Err(err),
    }
}
