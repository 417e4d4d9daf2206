use std::path::{Path, PathBuf};

/// Application-level constants
pub const APP_NAME: &str = "Clinic";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Store file used when no path is given, relative to the working directory
pub const DEFAULT_DB_FILE: &str = "hospital.db";

/// Log filter applied when `RUST_LOG` is unset
pub fn default_log_filter() -> &'static str {
    "clinic_lib=info,clinic=info"
}

/// Log filter for `--debug`
pub fn debug_log_filter() -> &'static str {
    "clinic_lib=debug,clinic=debug"
}

/// Resolve the store path: an explicit path wins, otherwise the default
/// file in `cwd`.
pub fn resolve_db_path(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.join(DEFAULT_DB_FILE),
    }
}
