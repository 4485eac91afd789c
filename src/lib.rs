/*!
 * # potwai - PO Translator with AI
 *
 * A Rust library for machine translation of Gettext `.po` catalogs through
 * an OpenAI-compatible chat completion API.
 *
 * ## Features
 *
 * - PO catalogs read and written through `polib` (comments, flags, contexts
 *   and plural forms are kept)
 * - All source strings translated in a single structured JSON request
 * - Strict validation of the model's answer before anything is written
 * - Header metadata refreshed for the target language
 * - Atomic replacement of the output file
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration resolved from environment variables
 * - `catalog`: PO catalog access and header metadata
 * - `translation`: AI-powered translation:
 *   - `translation::prompts`: System prompt and user payload
 *   - `translation::core`: Request building and response validation
 *   - `translation::merge`: Applying translations to entries
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: Language code to display name lookup
 * - `providers`: Chat completion clients:
 *   - `providers::openai`: OpenAI API client
 *   - `providers::mock`: In-memory provider for tests
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
pub mod catalog;
pub mod file_utils;
pub mod translation;
pub mod app_controller;
pub mod language_utils;
pub mod providers;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunOutcome, TranslationJob};
pub use catalog::Catalog;
pub use translation::CatalogTranslator;
pub use language_utils::get_language_name;
pub use errors::{AppError, CatalogError, ConfigError, ProviderError, TranslationError};
