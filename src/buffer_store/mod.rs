/*!
 * Named text-buffer store.
 *
 * Buffers are mutable text containers identified by name. The translation
 * engine consumes the store through the `BufferStore` trait and never owns
 * buffer lifecycle: it creates destinations on demand and mutates them, but
 * never deletes anything.
 *
 * Two implementations are provided:
 * - `MemoryBufferStore`: an in-process key-value registry
 * - `DirBufferStore`: one text file per buffer under a workspace directory
 */

use crate::errors::BufferError;

pub mod memory;
pub mod dir;

pub use memory::MemoryBufferStore;
pub use dir::DirBufferStore;

/// How new text is combined with a buffer's existing content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the buffer content entirely
    Overwrite,
    /// Insert the new text above the existing content
    Prepend,
}

/// Snapshot of a buffer's name and content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedBuffer {
    /// Buffer name, the primary key within the store
    pub name: String,
    /// Current text content
    pub content: String,
}

/// Store of named text buffers
///
/// Implementations take `&self` and guard their own state, so a store can be
/// shared across concurrent translation requests.
pub trait BufferStore: Send + Sync {
    /// Check whether a buffer with the given name exists
    fn exists(&self, name: &str) -> bool;

    /// Get a snapshot of a buffer by name
    fn get(&self, name: &str) -> Result<NamedBuffer, BufferError>;

    /// Create an empty buffer with the given name
    fn create(&self, name: &str) -> Result<NamedBuffer, BufferError>;

    /// Write text into an existing buffer according to the write mode
    fn write(&self, name: &str, text: &str, mode: WriteMode) -> Result<(), BufferError>;

    /// Rename a buffer, keeping its content
    fn rename(&self, from: &str, to: &str) -> Result<(), BufferError>;

    /// List the names of all buffers in the store
    fn names(&self) -> Vec<String>;
}

/// Combine existing content with new text according to the write mode
pub(crate) fn combine(existing: &str, text: &str, mode: WriteMode) -> String {
    match mode {
        WriteMode::Overwrite => text.to_string(),
        WriteMode::Prepend => {
            let mut combined = String::with_capacity(text.len() + existing.len());
            combined.push_str(text);
            combined.push_str(existing);
            combined
        }
    }
}
