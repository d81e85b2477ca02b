/*!
 * Core buffer translation implementation.
 *
 * This module contains the BufferTranslator, which executes one translation
 * request end to end against an injected translation backend and buffer
 * store: validation, service-specific code remapping, destination-buffer
 * resolution and the final write.
 */

use std::collections::HashSet;

use log::{debug, info};
use parking_lot::Mutex;

use crate::app_config::TranslationService;
use crate::buffer_store::{BufferStore, WriteMode};
use crate::errors::TranslationError;
use crate::language_registry;
use crate::providers::TranslationBackend;
use crate::translation::remap::apply_remap;

/// One translation request: a language pair, a service, a write policy and
/// the source text.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// Source language code
    pub source_language: String,
    /// Target language code
    pub target_language: String,
    /// Service to translate with
    pub service: TranslationService,
    /// Replace the destination content instead of prepending to it
    pub overwrite: bool,
    /// Text to translate
    pub source_text: String,
    /// Name of the buffer the source text was read from, if any.
    /// Used to detect a collision with the destination buffer's name.
    pub source_buffer: Option<String>,
}

impl TranslationRequest {
    /// Create a request with the default write policy (prepend)
    pub fn new(
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        service: TranslationService,
        source_text: impl Into<String>,
    ) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            service,
            overwrite: false,
            source_text: source_text.into(),
            source_buffer: None,
        }
    }

    /// Set the overwrite policy
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Name the buffer the source text came from
    pub fn from_buffer(mut self, name: impl Into<String>) -> Self {
        self.source_buffer = Some(name.into());
        self
    }
}

/// Result of a completed translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    /// Name of the destination buffer the translation was written to
    pub buffer_name: String,
    /// The translated text as returned by the service
    pub translated_text: String,
    /// New name of the source buffer, when it had to be renamed to make way
    /// for the destination
    pub renamed_source: Option<String>,
}

/// Executes translation requests against an injected backend and store.
///
/// At most one request may be in flight per destination buffer; a second
/// request for the same destination fails with `DestinationBusy` instead of
/// interleaving writes. The destination is mutated only after the backend
/// call has completed, as a single write.
#[derive(Debug, Default)]
pub struct BufferTranslator {
    in_flight: Mutex<HashSet<String>>,
}

/// Releases the in-flight claim on a destination buffer when dropped
struct InFlightClaim<'a> {
    in_flight: &'a Mutex<HashSet<String>>,
    name: String,
}

impl Drop for InFlightClaim<'_> {
    fn drop(&mut self) {
        self.in_flight.lock().remove(&self.name);
    }
}

impl BufferTranslator {
    /// Create a new translator with no requests in flight
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute one translation request end to end.
    ///
    /// Validation order: unknown language codes, then a source/target pair
    /// resolving to the same display name, then empty source text. All three
    /// fail before the backend is contacted. Backend failures surface as
    /// `Provider` errors and leave the store untouched.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
        backend: &dyn TranslationBackend,
        store: &dyn BufferStore,
    ) -> Result<TranslationOutcome, TranslationError> {
        let source_code = request.source_language.trim().to_lowercase();
        let target_code = request.target_language.trim().to_lowercase();

        let source_name = language_registry::display_name(&source_code)
            .ok_or_else(|| TranslationError::UnknownLanguage(request.source_language.clone()))?;
        let target_name = language_registry::display_name(&target_code)
            .ok_or_else(|| TranslationError::UnknownLanguage(request.target_language.clone()))?;

        if source_name == target_name {
            return Err(TranslationError::SameLanguage(target_name.to_string()));
        }
        if request.source_text.is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        let _claim = self.claim(target_name)?;

        let from_code = apply_remap(request.service, &source_code);
        let to_code = apply_remap(request.service, &target_code);
        debug!(
            "Translating {} -> {} ({} -> {}) via {}",
            source_name, target_name, from_code, to_code, request.service
        );

        let translated_text = backend
            .translate(&request.source_text, from_code, to_code)
            .await?;

        // The source buffer may itself be named like the destination; move it
        // out of the way before the destination write.
        let mut renamed_source = None;
        if let Some(source_buffer) = &request.source_buffer {
            if source_buffer == target_name && store.exists(source_buffer) {
                let new_name = free_suffixed_name(store, source_buffer);
                store.rename(source_buffer, &new_name)?;
                info!("Renamed source buffer '{}' to '{}'", source_buffer, new_name);
                renamed_source = Some(new_name);
            }
        }

        if !store.exists(target_name) {
            store.create(target_name)?;
        }
        let mode = if request.overwrite {
            WriteMode::Overwrite
        } else {
            WriteMode::Prepend
        };
        let mut payload = translated_text.clone();
        payload.push('\n');
        store.write(target_name, &payload, mode)?;

        info!("Wrote translation into buffer '{}'", target_name);
        Ok(TranslationOutcome {
            buffer_name: target_name.to_string(),
            translated_text,
            renamed_source,
        })
    }

    fn claim(&self, name: &str) -> Result<InFlightClaim<'_>, TranslationError> {
        let mut in_flight = self.in_flight.lock();
        if !in_flight.insert(name.to_string()) {
            return Err(TranslationError::DestinationBusy(name.to_string()));
        }
        Ok(InFlightClaim {
            in_flight: &self.in_flight,
            name: name.to_string(),
        })
    }
}

/// Ensure a buffer named after each language's display name exists.
///
/// Returns the display names in input order. Used when reversing the
/// language pair so both sides have a buffer to land in.
pub fn ensure_language_buffers(
    store: &dyn BufferStore,
    codes: &[&str],
) -> Result<Vec<String>, TranslationError> {
    let mut names = Vec::with_capacity(codes.len());
    for code in codes {
        let name = language_registry::display_name(code)
            .ok_or_else(|| TranslationError::UnknownLanguage((*code).to_string()))?;
        if !store.exists(name) {
            store.create(name)?;
        }
        names.push(name.to_string());
    }
    Ok(names)
}

/// First free name of the form `base.NNN`, counting up from `.001`
fn free_suffixed_name(store: &dyn BufferStore, base: &str) -> String {
    let mut counter = 1u32;
    loop {
        let candidate = format!("{}.{:03}", base, counter);
        if !store.exists(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}
