use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Pick the directory to scan.
///
/// An explicit path must be an existing directory. Without one, the
/// directory holding the running executable is used.
pub fn resolve_save_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            let is_dir = std::fs::metadata(path)
                .map(|meta| meta.is_dir())
                .unwrap_or(false);
            if !is_dir {
                bail!(
                    "dir path is incorrect or dir does not exist: {}",
                    path.display()
                );
            }
            Ok(path.to_path_buf())
        }
        None => {
            let exe = std::env::current_exe().context("can't get dir")?;
            exe.parent()
                .map(Path::to_path_buf)
                .context("can't get dir: executable has no parent directory")
        }
    }
}

/// Last-modified times (Unix seconds) of the files directly inside `dir`.
///
/// Sub-directories are skipped; entries whose metadata cannot be read are
/// skipped with a warning.
pub fn load_save_timestamps(dir: &Path) -> Result<Vec<i64>> {
    let mut timestamps = Vec::new();
    let mut skipped_dirs = 0usize;

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(err)
                    .with_context(|| format!("read save dir error: {}", dir.display()));
            }
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            skipped_dirs += 1;
            continue;
        }

        let modified = entry
            .metadata()
            .map_err(anyhow::Error::from)
            .and_then(|meta| meta.modified().map_err(anyhow::Error::from));

        match modified {
            Ok(mtime) => timestamps.push(DateTime::<Utc>::from(mtime).timestamp()),
            Err(err) => warn!(
                "Skipping {}: cannot read modification time: {}",
                entry.path().display(),
                err
            ),
        }
    }

    debug!(
        "Loaded {} save timestamp(s) from {} ({} sub-directories skipped)",
        timestamps.len(),
        dir.display(),
        skipped_dirs
    );

    Ok(timestamps)
}
