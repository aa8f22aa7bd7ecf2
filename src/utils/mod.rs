mod atomic;
mod table;

pub use atomic::atomic_write;
pub use table::render_table;

use std::path::PathBuf;

/// The name of the per-user flora-admin folder
pub const FLORA_FOLDER: &str = ".flora-admin";

/// Get the per-user flora-admin folder (`~/.flora-admin`)
#[must_use]
pub fn flora_home() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(FLORA_FOLDER))
}

/// Get current timestamp in ISO 8601 format
#[must_use]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}
