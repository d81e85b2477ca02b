use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

// File and directory utilities for the workspace-backed buffer store and CLI.

/// Extension given to buffer files in a workspace directory
pub const BUFFER_EXTENSION: &str = "txt";

/// File operations utility
pub struct FileManager;

impl FileManager {
    /// Check file existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Check directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    /// Create a directory and its parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .context(format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    /// Read a text file into a string
    pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        fs::read_to_string(path).context(format!("Failed to read file: {:?}", path))
    }

    /// Check whether a name is usable as a buffer identity
    ///
    /// Buffer names map directly to file names in a workspace directory, so
    /// path separators and parent references are rejected.
    pub fn is_valid_buffer_name(name: &str) -> bool {
        !name.is_empty()
            && !name.contains('/')
            && !name.contains('\\')
            && name != "."
            && name != ".."
    }

    /// Path of the file backing a buffer within a workspace directory
    pub fn buffer_path<P: AsRef<Path>>(workspace: P, name: &str) -> PathBuf {
        let mut file_name = name.to_string();
        file_name.push('.');
        file_name.push_str(BUFFER_EXTENSION);
        workspace.as_ref().join(file_name)
    }

    /// Buffer name encoded by a file path, if the path is a buffer file
    pub fn buffer_name_from_path(path: &Path) -> Option<String> {
        let ext = path.extension()?;
        if !ext.to_string_lossy().eq_ignore_ascii_case(BUFFER_EXTENSION) {
            return None;
        }
        path.file_stem().map(|stem| stem.to_string_lossy().to_string())
    }
}
