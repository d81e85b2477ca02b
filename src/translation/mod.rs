/*!
 * Buffer translation engine.
 *
 * This module contains the core logic for translating the contents of a
 * named text buffer into another language. It is split into two submodules:
 *
 * - `engine`: request validation, destination-buffer resolution and writing
 * - `remap`: per-service language-code substitution tables
 */

// Re-export main types for easier usage
pub use self::engine::{
    BufferTranslator, TranslationOutcome, TranslationRequest, ensure_language_buffers,
};
pub use self::remap::{apply_remap, remap_table};

// Submodules
pub mod engine;
pub mod remap;
