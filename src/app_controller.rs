use log::{debug, info, warn};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::catalog::{Catalog, MetadataUpdate};
use crate::errors::{AppError, PersistError};
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::providers::Provider;
use crate::providers::openai::{OpenAI, OpenAIRequest, OpenAIResponse};
use crate::translation::{CatalogTranslator, apply_translations};

// @module: Application controller for catalog translation

/// One translation run as requested on the command line
#[derive(Debug, Clone)]
pub struct TranslationJob {
    /// Catalog to read
    pub input_file: PathBuf,
    /// Where the translated catalog goes
    pub output_file: PathBuf,
    /// Target language code, e.g. `fr` or `zh_CN`
    pub language: String,
}

impl TranslationJob {
    pub fn new(input_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
            language: language.into(),
        }
    }
}

/// What a successful run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The input had no entries; an empty output file was written
    NothingToTranslate,
    /// Every entry was translated and the catalog saved
    Translated {
        /// Number of entries written
        count: usize,
    },
}

/// Main application controller for catalog translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Run a job against the configured chat completion endpoint
    pub async fn run(&self, job: &TranslationJob) -> Result<RunOutcome, AppError> {
        let provider = OpenAI::new(
            self.config.api_key.clone(),
            self.config.base_url(),
            Duration::from_secs(self.config.timeout_secs),
        )?;
        self.run_with_provider(provider, job).await
    }

    /// Run a job with an explicit provider
    ///
    /// Nothing is written to the output path unless every entry received a
    /// translation, apart from the empty file produced for an empty input.
    pub async fn run_with_provider<P>(&self, provider: P, job: &TranslationJob) -> Result<RunOutcome, AppError>
    where
        P: Provider<Request = OpenAIRequest, Response = OpenAIResponse>,
    {
        let start_time = Instant::now();
        let language_name = language_utils::get_language_name(&job.language);

        if !language_utils::is_recognized_language_code(&job.language) {
            warn!(
                "'{}' does not look like a known language code, using it as the language name",
                job.language
            );
        }

        info!(
            "Starting translation for {} ({}) using model {}.",
            job.language, language_name, self.config.model
        );

        let mut catalog = Catalog::load(&job.input_file)?;

        if catalog.is_empty() {
            info!("No entries to translate in {}. Creating an empty output file.", job.input_file.display());
            FileManager::create_empty_file(&job.output_file).map_err(|source| PersistError {
                path: job.output_file.clone(),
                source,
            })?;
            return Ok(RunOutcome::NothingToTranslate);
        }

        let sources = catalog.source_texts();
        info!("Found {} entries to translate.", sources.len());

        let translator = CatalogTranslator::new(provider, self.config.model.clone());
        let progress_bar = Self::request_spinner(sources.len());
        let result = translator.translate(&sources, language_name).await;
        progress_bar.finish_and_clear();
        let translations = result?;

        apply_translations(catalog.po_mut(), translations);

        let update = MetadataUpdate::for_run(
            &self.config.model,
            &job.language,
            language_name,
            &self.config.project_id,
        );
        if let Err(e) = update.apply(catalog.metadata_mut()) {
            warn!("Could not update header metadata: {}", e);
        }

        catalog.save(&job.output_file)?;

        let count = catalog.len();
        info!("Successfully translated and saved {} entries to {}", count, job.output_file.display());
        debug!("Translation took {:.2?}", start_time.elapsed());
        info!("--- Translation for {} completed successfully! ---", job.language);

        Ok(RunOutcome::Translated { count })
    }

    fn request_spinner(entry_count: usize) -> ProgressBar {
        let progress_bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        progress_bar.set_style(style);
        progress_bar.set_message(format!("Translating {} entries", entry_count));
        progress_bar.enable_steady_tick(Duration::from_millis(120));
        progress_bar
    }
}
