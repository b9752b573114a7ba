//! Source checkout queries.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Something that knows the current commit of the source tree.
pub trait CommitSource {
    /// Hash of the checked-out commit. Callers trim the result.
    fn head_commit(&self) -> Result<String>;
}

/// A git checkout read with gix; no `git` binary is needed.
#[derive(Clone, Debug)]
pub struct GitCheckout {
    path: PathBuf,
}

impl GitCheckout {
    /// Checkout containing `path` (parent directories are searched).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn commit_error(&self, source: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::Commit {
            path: self.path.clone(),
            source: Box::new(source),
        }
    }
}

impl CommitSource for GitCheckout {
    fn head_commit(&self) -> Result<String> {
        let repo = gix::discover(&self.path).map_err(|e| self.commit_error(e))?;
        let head = repo.head_id().map_err(|e| self.commit_error(e))?;
        log::debug!("HEAD of {} is {}", self.path.display(), head);
        Ok(head.to_string())
    }
}
