//! Platform-specific locations for program files.
//!
//! # Directory Structure
//!
//! - **User programs**: `~/.config/cloudseed/programs/` (Linux),
//!   `~/Library/Application Support/cloudseed/programs/` (macOS),
//!   `%APPDATA%\cloudseed\programs\` (Windows)
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudseed_config::paths;
//!
//! println!("User programs: {:?}", paths::user_programs_dir());
//!
//! if let Some(path) = paths::find_program("large_hall") {
//!     println!("Found program at: {:?}", path);
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::PresetError;

const APP_NAME: &str = "cloudseed";

const PROGRAMS_SUBDIR: &str = "programs";

/// File extension of program documents.
pub const PROGRAM_EXTENSION: &str = "json";

/// Returns the user-specific programs directory.
///
/// Falls back to `./cloudseed/programs` if the config directory cannot be
/// determined.
pub fn user_programs_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(PROGRAMS_SUBDIR)
}

/// Ensures the user programs directory exists and returns it.
///
/// # Errors
///
/// Returns [`PresetError::CreateDir`] if the directory cannot be created.
pub fn ensure_user_programs_dir() -> Result<PathBuf, PresetError> {
    let dir = user_programs_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| PresetError::create_dir(&dir, e))?;
    }
    Ok(dir)
}

/// Lists program files in `dir`, sorted by path.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_programs_in(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut programs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_program_extension(path))
        .collect();
    programs.sort();
    programs
}

/// Lists program files in the user programs directory.
pub fn list_user_programs() -> Vec<PathBuf> {
    list_programs_in(&user_programs_dir())
}

/// Finds a program file by name or path.
///
/// `name` is first tried as a path; otherwise it is looked up in the user
/// programs directory, with `.json` appended if missing.
pub fn find_program(name: &str) -> Option<PathBuf> {
    find_program_in(name, &user_programs_dir())
}

pub(crate) fn find_program_in(name: &str, dir: &Path) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let candidate = if has_program_extension(&path) {
        dir.join(name)
    } else {
        dir.join(format!("{name}.{PROGRAM_EXTENSION}"))
    };
    candidate.is_file().then_some(candidate)
}

/// Program name from a file path (the file stem).
///
/// ```rust
/// use cloudseed_config::paths::program_name_from_path;
/// use std::path::Path;
///
/// let name = program_name_from_path(Path::new("/path/to/large_hall.json"));
/// assert_eq!(name.as_deref(), Some("large_hall"));
/// ```
pub fn program_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
}

fn has_program_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == PROGRAM_EXTENSION)
}
