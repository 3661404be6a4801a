use std::{
    fs,
    path::{Path, PathBuf},
};

/// Expand command-line paths into the list of files to average.
///
/// Directories are expanded one level deep: every immediate entry is returned,
/// subdirectories included, in the order the OS lists them. Anything else is
/// returned as given. Paths that cannot be stat'ed are logged and skipped.
pub fn collect_files<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    let mut file_vec = Vec::new();

    for path in paths {
        let path = path.as_ref();

        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(error) => {
                log::warn!("failed to stat {path:?}: {error}");
                continue;
            }
        };

        if metadata.is_dir() {
            expand_dir(path, &mut file_vec);
        } else {
            file_vec.push(path.to_path_buf());
        }
    }

    file_vec
}

fn expand_dir(dir: &Path, file_vec: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            log::warn!("failed to read {dir:?}: {error}");
            return;
        }
    };

    for entry in entries {
        match entry {
            Ok(entry) => file_vec.push(dir.join(entry.file_name())),
            Err(error) => log::warn!("failed to read entry of {dir:?}: {error}"),
        }
    }
}
