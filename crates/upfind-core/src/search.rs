use std::path::{Path, PathBuf};

use crate::path::{existing_child, relative_part, resolve_absolute};
use crate::LocateError;

/// Immutable description of one upward search.
///
/// Empty stop markers and stop directories count as unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    target: PathBuf,
    start_directory: PathBuf,
    stop_marker: Option<PathBuf>,
    stop_directory: Option<PathBuf>,
}

impl SearchConfig {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            start_directory: PathBuf::from("."),
            stop_marker: None,
            stop_directory: None,
        }
    }

    pub fn start_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_directory = dir.into();
        self
    }

    /// Halt after the first directory that contains `name`.
    pub fn stop_marker(mut self, name: impl Into<PathBuf>) -> Self {
        self.stop_marker = non_empty(name.into());
        self
    }

    /// Never examine `dir` or anything above it.
    pub fn stop_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stop_directory = non_empty(dir.into());
        self
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn start(&self) -> &Path {
        &self.start_directory
    }

    pub fn marker(&self) -> Option<&Path> {
        self.stop_marker.as_deref()
    }

    pub fn boundary(&self) -> Option<&Path> {
        self.stop_directory.as_deref()
    }
}

fn non_empty(path: PathBuf) -> Option<PathBuf> {
    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}

/// Walk from the start directory towards the root and return the first
/// `<dir>/<target>` that exists.
///
/// Per directory the order is: stop directory check, target probe, marker
/// probe, then move to the parent. The stop directory itself is never
/// probed, while a directory holding both target and marker yields the
/// target.
pub fn locate(config: &SearchConfig) -> Result<PathBuf, LocateError> {
    let target = relative_part(&config.target);
    if target.as_os_str().is_empty() {
        return Err(LocateError::InvalidTarget);
    }
    let marker = config
        .stop_marker
        .as_deref()
        .map(relative_part)
        .filter(|m| !m.as_os_str().is_empty());

    let start = resolve_absolute(&config.start_directory, "start")?;
    let stop = config
        .stop_directory
        .as_deref()
        .map(|dir| resolve_absolute(dir, "stop"))
        .transpose()?;
    tracing::debug!(
        "searching for {} from {} (stop directory: {:?}, marker: {:?})",
        target.display(),
        start.display(),
        stop,
        marker
    );

    let mut current = start.as_path();
    loop {
        if stop.as_deref() == Some(current) {
            tracing::debug!("reached stop directory {}", current.display());
            break;
        }

        tracing::trace!("checking {}", current.display());
        if let Some(found) = existing_child(current, &target) {
            tracing::debug!("found {}", found.display());
            return Ok(found);
        }

        if let Some(marker) = &marker {
            if existing_child(current, marker).is_some() {
                tracing::debug!("stop marker {} found in {}", marker.display(), current.display());
                break;
            }
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => {
                tracing::debug!("reached filesystem root {}", current.display());
                break;
            }
        }
    }

    Err(LocateError::NotFound {
        target: config.target.clone(),
    })
}
