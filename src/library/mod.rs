//! The directory of resume PDFs scanned on every request.

mod error;


use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

pub use error::LibraryError;

use crate::constants::RESUME_EXTENSION;
use crate::ranking::Document;

/// One listed resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeEntry {
    /// File stem.
    pub name: String,
    /// `<dir>/<file name>` as a display string.
    pub file: String,
}

#[derive(Debug, Clone)]
pub struct ResumeLibrary {
    dir: PathBuf,
}

impl ResumeLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `false` only when the path exists and is not a directory.
    pub fn is_available(&self) -> bool {
        !self.dir.exists() || self.dir.is_dir()
    }

    /// Creates the directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<(), LibraryError> {
        if self.dir.is_dir() {
            return Ok(());
        }
        if self.dir.exists() {
            return Err(LibraryError::NotADirectory {
                path: self.dir.clone(),
            });
        }

        fs::create_dir_all(&self.dir).map_err(|source| LibraryError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        info!(dir = %self.dir.display(), "Created resume directory");
        Ok(())
    }

    /// Lists `*.pdf` files (extension matched case-insensitively), sorted by
    /// file name. A missing directory is created and yields an empty list.
    pub fn list(&self) -> Result<Vec<ResumeEntry>, LibraryError> {
        Ok(self
            .pdf_paths()?
            .into_iter()
            .map(|(name, path)| ResumeEntry {
                name,
                file: path.display().to_string(),
            })
            .collect())
    }

    /// Reads every listed file into a [`Document`].
    ///
    /// A file that cannot be read becomes a document whose extraction fails,
    /// so it is reported alongside the others instead of failing the batch.
    pub fn load_documents(&self) -> Result<Vec<Document>, LibraryError> {
        let paths = self.pdf_paths()?;
        let mut documents = Vec::with_capacity(paths.len());

        for (name, path) in paths {
            let file_name = path
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| name.clone());

            match fs::read(&path) {
                Ok(bytes) => documents.push(Document::new(name, file_name, bytes)),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to read resume");
                    documents.push(Document::unreadable(name, file_name, e));
                }
            }
        }

        debug!(count = documents.len(), dir = %self.dir.display(), "Loaded resumes");
        Ok(documents)
    }

    fn pdf_paths(&self) -> Result<Vec<(String, PathBuf)>, LibraryError> {
        self.ensure_dir()?;

        let read_dir = fs::read_dir(&self.dir).map_err(|source| LibraryError::ReadDir {
            path: self.dir.clone(),
            source,
        })?;

        let mut paths: Vec<(String, PathBuf)> = read_dir
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_resume_extension(path))
            .filter_map(|path| {
                let stem = path.file_stem()?.to_string_lossy().into_owned();
                Some((stem, path))
            })
            .collect();

        paths.sort_by(|a, b| a.1.file_name().cmp(&b.1.file_name()));
        Ok(paths)
    }
}

fn has_resume_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(RESUME_EXTENSION))
}
