//! Progression persistence (load/save to disk).

use super::state::ProgressionState;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Get the progression save file path (~/.keep-the-streak/progression.json).
pub fn progression_save_path() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(".keep-the-streak").join("progression.json"))
}

/// Load progression from disk, or return default if not found.
pub fn load_progression() -> ProgressionState {
    match progression_save_path() {
        Ok(path) => load_progression_from(&path),
        Err(_) => ProgressionState::default(),
    }
}

/// Load from `path`. Missing or unreadable data yields the default state.
pub fn load_progression_from(path: &Path) -> ProgressionState {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(path = %path.display(), error = %e, "could not read progression");
            }
            return ProgressionState::default();
        }
    };

    serde_json::from_str(&json).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "corrupt progression, starting fresh");
        ProgressionState::default()
    })
}

/// Save progression to disk.
pub fn save_progression(state: &ProgressionState) -> io::Result<()> {
    save_progression_to(state, &progression_save_path()?)
}

pub fn save_progression_to(state: &ProgressionState, path: &Path) -> io::Result<()> {
    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(state)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_path_location() {
        if let Ok(path) = progression_save_path() {
            assert!(path.ends_with(".keep-the-streak/progression.json"));
        }
    }

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let state = load_progression_from(&dir.path().join("nope.json"));
        assert_eq!(state, ProgressionState::default());
    }

    #[test]
    fn test_corrupt_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progression.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_progression_from(&path), ProgressionState::default());
    }
}
