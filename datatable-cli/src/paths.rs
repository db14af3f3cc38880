//! Platform-specific log locations.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "datatable";
const APPLICATION: &str = "datatable";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

/// Get the cache directory logs are written to.
///
/// - Linux: `$XDG_CACHE_HOME/datatable` or `~/.cache/datatable`
/// - macOS: `~/Library/Caches/dev.datatable.datatable`
/// - Windows: `C:\Users\<User>\AppData\Local\datatable\datatable\cache`
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Prepare a fresh log file path.
///
/// Creates the log directory, archives the previous `latest.log` under a
/// timestamped name and prunes old archives. Returns `None` when no home
/// directory can be determined.
pub fn prepare_log_file() -> io::Result<Option<PathBuf>> {
    let Some(dir) = log_dir() else {
        return Ok(None);
    };
    fs::create_dir_all(&dir)?;

    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        fs::rename(&latest, dir.join(format!("{}.log", timestamp)))?;
    }

    prune_archives(&dir);
    Ok(Some(latest))
}

/// Remove the oldest archived logs beyond `MAX_OLD_LOGS`.
fn prune_archives(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archives: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    if archives.len() <= MAX_OLD_LOGS {
        return;
    }

    // Oldest first
    archives.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());
    for entry in archives.iter().take(archives.len() - MAX_OLD_LOGS) {
        let _ = fs::remove_file(entry.path());
    }
}
