/*!
 * # textlate
 *
 * A Rust library and CLI for translating named text buffers between
 * languages using online translation services.
 *
 * ## Features
 *
 * - Translate the contents of a text buffer into a destination buffer named
 *   after the target language
 * - Multiple translation services:
 *   - Google (public endpoint, no credentials)
 *   - Bing (Microsoft Translator API)
 *   - Baidu
 *   - Sogou
 * - Per-service language-code remapping
 * - Overwrite or prepend write policies for the destination buffer
 * - Two-locale UI language toggle
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `language_registry`: The closed set of translatable languages
 * - `buffer_store`: Named text-buffer store abstraction and implementations
 * - `translation`: The buffer translation engine:
 *   - `translation::engine`: Request validation and destination writing
 *   - `translation::remap`: Per-service language-code substitution
 * - `providers`: Client implementations for the translation services
 * - `ui_locale`: UI language toggle
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod buffer_store;
pub mod errors;
pub mod file_utils;
pub mod language_registry;
pub mod providers;
pub mod translation;
pub mod ui_locale;

// Re-export main types for easier usage
pub use app_config::{Config, TranslationService};
pub use app_controller::Controller;
pub use buffer_store::{BufferStore, DirBufferStore, MemoryBufferStore, NamedBuffer, WriteMode};
pub use errors::{AppError, BufferError, ProviderError, TranslationError};
pub use translation::{BufferTranslator, TranslationOutcome, TranslationRequest};
pub use ui_locale::toggle;
