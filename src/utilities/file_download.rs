use std::fmt;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::image_utils::Logo;

pub const DOWNLOAD_FILENAME: &str = "logo.png";

#[derive(Debug)]
pub enum DownloadError {
    NothingToDownload,
    FilesystemError(io::Error),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingToDownload => write!(f, "there is no logo to download yet."),
            Self::FilesystemError(err) => write!(f, "failed to save the logo to the drive: {err}"),
        }
    }
}

impl From<io::Error> for DownloadError {
    fn from(value: io::Error) -> Self {
        Self::FilesystemError(value)
    }
}

/// saves the logo that is currently displayed, rebound after every render
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadAction {
    logo: Logo,
}

impl DownloadAction {
    pub const fn new(logo: Logo) -> Self {
        Self { logo }
    }

    pub const fn logo(&self) -> &Logo {
        &self.logo
    }

    /// writes the logo bytes unchanged to `logo.png` inside `dir`, replacing an older file
    pub fn save(&self, dir: &Path) -> Result<PathBuf, DownloadError> {
        let path = dir.join(DOWNLOAD_FILENAME);

        let mut temp_file = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(&mut temp_file);
            writer.write_all(&self.logo.bytes)?;
            writer.flush()?;
        }
        temp_file.persist(&path).map_err(|err| err.error)?;

        log::info!("saved {} to {}", self.logo(), path.display());

        Ok(path)
    }
}
