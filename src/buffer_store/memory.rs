use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::buffer_store::{BufferStore, NamedBuffer, WriteMode, combine};
use crate::errors::BufferError;

/// In-memory buffer registry
///
/// An explicit key-value registry of named buffers, used as the store
/// behind library callers and tests. Names are unique keys; lookups are
/// exact matches.
#[derive(Debug, Default)]
pub struct MemoryBufferStore {
    buffers: RwLock<BTreeMap<String, String>>,
}

impl MemoryBufferStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with named buffers
    pub fn with_buffers<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let buffers = entries
            .into_iter()
            .map(|(name, content)| (name.into(), content.into()))
            .collect();
        Self {
            buffers: RwLock::new(buffers),
        }
    }

    /// Number of buffers in the store
    pub fn len(&self) -> usize {
        self.buffers.read().len()
    }

    /// True when the store holds no buffers
    pub fn is_empty(&self) -> bool {
        self.buffers.read().is_empty()
    }
}

impl BufferStore for MemoryBufferStore {
    fn exists(&self, name: &str) -> bool {
        self.buffers.read().contains_key(name)
    }

    fn get(&self, name: &str) -> Result<NamedBuffer, BufferError> {
        self.buffers
            .read()
            .get(name)
            .map(|content| NamedBuffer {
                name: name.to_string(),
                content: content.clone(),
            })
            .ok_or_else(|| BufferError::NotFound(name.to_string()))
    }

    fn create(&self, name: &str) -> Result<NamedBuffer, BufferError> {
        if name.is_empty() {
            return Err(BufferError::InvalidName("empty name".to_string()));
        }
        let mut buffers = self.buffers.write();
        if buffers.contains_key(name) {
            return Err(BufferError::AlreadyExists(name.to_string()));
        }
        buffers.insert(name.to_string(), String::new());
        Ok(NamedBuffer {
            name: name.to_string(),
            content: String::new(),
        })
    }

    fn write(&self, name: &str, text: &str, mode: WriteMode) -> Result<(), BufferError> {
        let mut buffers = self.buffers.write();
        let existing = buffers
            .get(name)
            .ok_or_else(|| BufferError::NotFound(name.to_string()))?;
        let combined = combine(existing, text, mode);
        buffers.insert(name.to_string(), combined);
        Ok(())
    }

    fn rename(&self, from: &str, to: &str) -> Result<(), BufferError> {
        if to.is_empty() {
            return Err(BufferError::InvalidName("empty name".to_string()));
        }
        let mut buffers = self.buffers.write();
        if buffers.contains_key(to) {
            return Err(BufferError::AlreadyExists(to.to_string()));
        }
        let content = buffers
            .remove(from)
            .ok_or_else(|| BufferError::NotFound(from.to_string()))?;
        buffers.insert(to.to_string(), content);
        Ok(())
    }

    fn names(&self) -> Vec<String> {
        self.buffers.read().keys().cloned().collect()
    }
}
