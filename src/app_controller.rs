use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::path::Path;
use std::time::Duration;

use crate::app_config::Config;
use crate::buffer_store::{BufferStore, DirBufferStore};
use crate::errors::TranslationError;
use crate::file_utils::FileManager;
use crate::language_registry;
use crate::providers::{self, TranslationBackend};
use crate::translation::{
    BufferTranslator, TranslationOutcome, TranslationRequest, ensure_language_buffers,
};
use crate::ui_locale;

/// Main application controller for buffer translation
pub struct Controller {
    /// App configuration
    config: Config,
    /// Translation engine
    engine: BufferTranslator,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            engine: BufferTranslator::new(),
        })
    }

    /// Current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.source_language.is_empty() && !self.config.target_language.is_empty()
    }

    /// Translate the contents of a text file into a buffer in its directory.
    ///
    /// The file's directory acts as the buffer workspace, the file stem as
    /// the source buffer name. The destination buffer lands next to the
    /// input, named after the target language.
    pub async fn run_translate(&self, input_file: &Path) -> Result<TranslationOutcome> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let source_text = FileManager::read_text(input_file)?;
        let workspace = input_file
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let source_buffer = input_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string());

        let store = DirBufferStore::open(workspace)?;
        let backend = providers::create_backend(&self.config.translation);

        debug!("Checking availability of the {} service", backend.service());
        backend.check_availability().await.map_err(|e| {
            anyhow!(
                "The {} service is not available: {}. Check the service settings and try again.",
                backend.service().display_name(),
                e
            )
        })?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!(
            "Translating {} -> {} via {}",
            language_registry::display_name(&self.config.source_language).unwrap_or("?"),
            language_registry::display_name(&self.config.target_language).unwrap_or("?"),
            self.config.translation.service.display_name()
        ));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self
            .translate_with(backend.as_ref(), &store, source_text, source_buffer)
            .await;
        spinner.finish_and_clear();

        let outcome = result.context("Translation failed")?;
        info!(
            "Translation written to buffer '{}' in {:?}",
            outcome.buffer_name, workspace
        );
        Ok(outcome)
    }

    /// Run one translation request against injected collaborators.
    ///
    /// This is the seam used by `run_translate` and by tests; it applies the
    /// configured language pair, service and write policy to the given text.
    pub async fn translate_with(
        &self,
        backend: &dyn TranslationBackend,
        store: &dyn BufferStore,
        source_text: String,
        source_buffer: Option<String>,
    ) -> Result<TranslationOutcome, TranslationError> {
        let mut request = TranslationRequest::new(
            &self.config.source_language,
            &self.config.target_language,
            self.config.translation.service,
            source_text,
        )
        .overwrite(self.config.translation.overwrite);
        if let Some(name) = source_buffer {
            request = request.from_buffer(name);
        }

        self.engine.translate(&request, backend, store).await
    }

    /// Swap the configured source and target languages.
    ///
    /// Ensures a buffer named after each side of the pair exists in the
    /// store, so a follow-up translation in either direction has somewhere
    /// to land. The caller persists the updated configuration.
    pub fn reverse_languages(&mut self, store: &dyn BufferStore) -> Result<(String, String)> {
        let source = self.config.source_language.clone();
        let target = self.config.target_language.clone();

        let names = ensure_language_buffers(store, &[source.as_str(), target.as_str()])
            .context("Failed to prepare language buffers")?;

        self.config.source_language = target;
        self.config.target_language = source;
        info!(
            "Reversed languages: now translating {} -> {}",
            names[1], names[0]
        );
        Ok((
            self.config.source_language.clone(),
            self.config.target_language.clone(),
        ))
    }

    /// Flip the UI language between the two configured toggle locales.
    ///
    /// Returns the new UI language. The caller persists the updated
    /// configuration.
    pub fn toggle_ui_language(&mut self) -> Result<String> {
        let toggle = &self.config.toggle;
        for locale in [&toggle.lang1, &toggle.lang2] {
            if !ui_locale::is_known_locale(locale) {
                return Err(anyhow!("Unknown toggle language: {}", locale));
            }
        }

        let new_language =
            ui_locale::toggle(&toggle.ui_language, &toggle.lang1, &toggle.lang2).to_string();
        info!(
            "UI language switched from {} to {}",
            toggle.ui_language, new_language
        );
        self.config.toggle.ui_language = new_language.clone();
        Ok(new_language)
    }
}
