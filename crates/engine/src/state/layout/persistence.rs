//! Design autosave and the saved-design library
//!
//! The engine's persistence boundary is the `DesignSnapshot`; these helpers
//! are the default file-backed collaborator. IO failures degrade to
//! `None`/`false` — losing an autosave must never take the editor down.

use std::path::PathBuf;

use shared::DesignSnapshot;

fn data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "roomplan", "roomplan")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

fn autosave_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("autosave.json"))
}

fn designs_dir() -> Option<PathBuf> {
    data_dir().map(|d| d.join("designs"))
}

/// File name for a design, with path-hostile characters replaced.
fn design_file_name(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{safe}.json")
}

fn design_path(name: &str) -> Option<PathBuf> {
    designs_dir().map(|d| d.join(design_file_name(name)))
}

fn write_snapshot(path: &PathBuf, snapshot: &DesignSnapshot) -> bool {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    match serde_json::to_string_pretty(snapshot) {
        Ok(json) => std::fs::write(path, json).is_ok(),
        Err(_) => false,
    }
}

fn read_snapshot(path: &PathBuf) -> Option<DesignSnapshot> {
    let json = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&json).ok()
}

/// Save the current design to the autosave file.
pub fn autosave(snapshot: &DesignSnapshot) {
    if let Some(path) = autosave_path() {
        if !write_snapshot(&path, snapshot) {
            tracing::warn!(?path, "autosave failed");
        }
    }
}

/// Load the autosaved design, if any.
pub fn load_autosave() -> Option<DesignSnapshot> {
    read_snapshot(&autosave_path()?)
}

/// Check if an autosave file exists.
pub fn has_autosave() -> bool {
    autosave_path().map(|p| p.exists()).unwrap_or(false)
}

/// Save a named design, overwriting any existing design with the same name.
pub fn save_design(name: &str, snapshot: &DesignSnapshot) -> bool {
    match design_path(name) {
        Some(path) => write_snapshot(&path, snapshot),
        None => false,
    }
}

/// Load a named design.
pub fn load_design(name: &str) -> Option<DesignSnapshot> {
    read_snapshot(&design_path(name)?)
}

/// Delete a named design. `false` if it did not exist.
pub fn delete_design(name: &str) -> bool {
    match design_path(name) {
        Some(path) => std::fs::remove_file(path).is_ok(),
        None => false,
    }
}

/// Names (file stems) of all saved designs, sorted.
pub fn list_designs() -> Vec<String> {
    let Some(dir) = designs_dir() else {
        return Vec::new();
    };
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let path = e.path();
            if path.extension().and_then(|x| x.to_str()) == Some("json") {
                path.file_stem().map(|s| s.to_string_lossy().into_owned())
            } else {
                None
            }
        })
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_file_name_sanitized() {
        assert_eq!(design_file_name("Living Room v2"), "Living_Room_v2.json");
        assert_eq!(design_file_name("../etc/passwd"), "___etc_passwd.json");
        assert_eq!(design_file_name("loft-01"), "loft-01.json");
    }
}
