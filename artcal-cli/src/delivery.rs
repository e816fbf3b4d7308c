//! Delivery through the local system: the default browser for links and the
//! download directory for .ics files.

use std::io::Write;
use std::path::{Path, PathBuf};

use artcal_core::{ArtCalError, ArtCalResult, Deliverer, FileArtifact};
use log::debug;
use tempfile::NamedTempFile;

pub struct SystemDeliverer {
    download_dir: PathBuf,
    /// Set once a file has been saved
    pub saved_to: Option<PathBuf>,
}

impl SystemDeliverer {
    pub fn new(download_dir: PathBuf) -> Self {
        SystemDeliverer {
            download_dir,
            saved_to: None,
        }
    }
}

impl Deliverer for SystemDeliverer {
    fn open_link(&mut self, url: &str) -> ArtCalResult<()> {
        open::that(url)
            .map_err(|e| ArtCalError::DeliveryFailed(format!("Could not open browser: {e}")))
    }

    fn save_file(&mut self, file: &FileArtifact) -> ArtCalResult<()> {
        let path = save_artifact(&self.download_dir, file)?;
        self.saved_to = Some(path);
        Ok(())
    }
}

/// Write `file` into `dir` under its own filename.
///
/// The content goes to a temporary file in `dir` first and is renamed into
/// place. If any step fails the temporary file is removed when it drops.
pub fn save_artifact(dir: &Path, file: &FileArtifact) -> ArtCalResult<PathBuf> {
    let failed = |what: &str, e: std::io::Error| {
        ArtCalError::DeliveryFailed(format!("{what} {}: {e}", dir.display()))
    };

    std::fs::create_dir_all(dir).map_err(|e| failed("Could not create", e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| failed("Could not write to", e))?;
    tmp.write_all(file.content.as_bytes())
        .and_then(|_| tmp.flush())
        .map_err(|e| failed("Could not write to", e))?;

    let target = dir.join(&file.filename);
    tmp.persist(&target)
        .map_err(|e| failed("Could not save into", e.error))?;

    debug!("Saved {} ({})", target.display(), file.mime_type);

    Ok(target)
}
