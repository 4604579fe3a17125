use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use path_absolutize::Absolutize;

use crate::LocateError;

/// Make `path` absolute against the process working directory with `.` and
/// `..` folded away. `what` names the directory in the error ("start", "stop").
pub fn resolve_absolute(path: &Path, what: &'static str) -> Result<PathBuf, LocateError> {
    path.absolutize()
        .map(|p| p.into_owned())
        .map_err(|source| LocateError::PathResolution {
            what,
            path: path.to_path_buf(),
            source,
        })
}

/// Strip any root or drive prefix so `name` always joins *under* a directory.
pub fn relative_part(name: &Path) -> PathBuf {
    name.components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect()
}

/// Join `name` under `dir`, clean the result and return it if it exists.
/// Target and marker go through here so both fold `..` the same way.
pub fn existing_child(dir: &Path, name: &Path) -> Option<PathBuf> {
    let joined = dir.join(name);
    let candidate = match joined.absolutize() {
        Ok(p) => p.into_owned(),
        Err(e) => {
            tracing::trace!("cannot clean {} ({})", joined.display(), e);
            return None;
        }
    };
    exists(&candidate).then_some(candidate)
}

/// Existence probe that follows symlinks. Any error counts as absent.
pub fn exists(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(_) => true,
        Err(e) => {
            if e.kind() != ErrorKind::NotFound {
                tracing::trace!("treating {} as absent ({})", path.display(), e);
            }
            false
        }
    }
}
