//! Where exported files go.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// The destination of exported files.
#[async_trait]
pub trait Sink: Send + Sync {
    /// Save `data` under `file_name`.
    async fn save(&self, file_name: &str, data: Vec<u8>) -> io::Result<()>;
}

/// A sink that writes files into a directory, creating it if necessary.
///
/// Existing files with the same name are overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink for `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory files are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The path a file with the given name is written to.
    ///
    /// Fails if the name contains directory components.
    pub fn path_for(&self, file_name: &str) -> io::Result<PathBuf> {
        let name = Path::new(file_name);
        match name.file_name() {
            Some(base) if base == name.as_os_str() => Ok(self.dir.join(base)),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("`{file_name}` is not a plain file name"),
            )),
        }
    }
}

#[async_trait]
impl Sink for DirectorySink {
    async fn save(&self, file_name: &str, data: Vec<u8>) -> io::Result<()> {
        let path = self.path_for(file_name)?;
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, data).await?;
        tracing::debug!(path = %path.display(), "saved file");
        Ok(())
    }
}
