//! Download destinations for exported images.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Suffixed names tried before giving up on a taken file name.
const MAX_RENAMES: u32 = 1000;

/// Receives the bytes of one exported file.
pub trait DownloadSink {
    /// Store `data` under `file_name`. Returns where it landed.
    fn deliver(&mut self, file_name: &str, data: &[u8]) -> io::Result<PathBuf>;
}

impl<S: DownloadSink + ?Sized> DownloadSink for &mut S {
    fn deliver(&mut self, file_name: &str, data: &[u8]) -> io::Result<PathBuf> {
        (**self).deliver(file_name, data)
    }
}

/// Writes downloads into a directory, creating it on first use.
///
/// An existing file is never overwritten: like a browser download, a taken
/// name gets a ` (n)` suffix before its extension.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, file_name: &str, data: &[u8]) -> io::Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        for attempt in 0..=MAX_RENAMES {
            let path = self.dir.join(numbered_name(file_name, attempt));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(data)?;
                    return Ok(path);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            }
        }
        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("no free name for {} in {}", file_name, self.dir.display()),
        ))
    }
}

/// `name.ext` for attempt 0, then `name (1).ext`, `name (2).ext`, ...
fn numbered_name(file_name: &str, attempt: u32) -> String {
    if attempt == 0 {
        return file_name.to_string();
    }
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{} ({}).{}", stem, attempt, ext),
        _ => format!("{} ({})", file_name, attempt),
    }
}
