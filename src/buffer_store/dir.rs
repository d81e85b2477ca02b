use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::buffer_store::{BufferStore, NamedBuffer, WriteMode, combine};
use crate::errors::BufferError;
use crate::file_utils::FileManager;

/// Directory-backed buffer store
///
/// Each buffer is a text file directly under the workspace directory, named
/// `<buffer name>.txt`. The buffer name is the file stem, so the store can be
/// inspected and edited with any text editor between runs.
#[derive(Debug)]
pub struct DirBufferStore {
    root: PathBuf,
}

impl DirBufferStore {
    /// Open a store over the given workspace directory, creating it if needed
    pub fn open<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        FileManager::ensure_dir(&root)?;
        Ok(Self { root })
    }

    /// Workspace directory backing this store
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, BufferError> {
        if !FileManager::is_valid_buffer_name(name) {
            return Err(BufferError::InvalidName(name.to_string()));
        }
        Ok(FileManager::buffer_path(&self.root, name))
    }
}

impl BufferStore for DirBufferStore {
    fn exists(&self, name: &str) -> bool {
        match self.path_for(name) {
            Ok(path) => FileManager::file_exists(path),
            Err(_) => false,
        }
    }

    fn get(&self, name: &str) -> Result<NamedBuffer, BufferError> {
        let path = self.path_for(name)?;
        if !FileManager::file_exists(&path) {
            return Err(BufferError::NotFound(name.to_string()));
        }
        let content =
            fs::read_to_string(&path).map_err(|e| BufferError::Storage(e.to_string()))?;
        Ok(NamedBuffer {
            name: name.to_string(),
            content,
        })
    }

    fn create(&self, name: &str) -> Result<NamedBuffer, BufferError> {
        let path = self.path_for(name)?;
        if FileManager::file_exists(&path) {
            return Err(BufferError::AlreadyExists(name.to_string()));
        }
        fs::write(&path, "").map_err(|e| BufferError::Storage(e.to_string()))?;
        Ok(NamedBuffer {
            name: name.to_string(),
            content: String::new(),
        })
    }

    fn write(&self, name: &str, text: &str, mode: WriteMode) -> Result<(), BufferError> {
        let path = self.path_for(name)?;
        if !FileManager::file_exists(&path) {
            return Err(BufferError::NotFound(name.to_string()));
        }
        let existing =
            fs::read_to_string(&path).map_err(|e| BufferError::Storage(e.to_string()))?;
        let combined = combine(&existing, text, mode);
        fs::write(&path, combined).map_err(|e| BufferError::Storage(e.to_string()))
    }

    fn rename(&self, from: &str, to: &str) -> Result<(), BufferError> {
        let from_path = self.path_for(from)?;
        let to_path = self.path_for(to)?;
        if !FileManager::file_exists(&from_path) {
            return Err(BufferError::NotFound(from.to_string()));
        }
        if FileManager::file_exists(&to_path) {
            return Err(BufferError::AlreadyExists(to.to_string()));
        }
        fs::rename(&from_path, &to_path).map_err(|e| BufferError::Storage(e.to_string()))
    }

    fn names(&self) -> Vec<String> {
        let mut names = Vec::new();
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(_) => return names,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = FileManager::buffer_name_from_path(&path) {
                names.push(name);
            }
        }
        names.sort();
        names
    }
}
