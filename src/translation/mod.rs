/*!
 * Translation of catalog strings through a language model.
 *
 * - `prompts`: system prompt template and user payload encoding
 * - `core`: the single batched request and validation of its answer
 * - `merge`: positional application of translations to catalog entries
 */

pub mod core;
pub mod merge;
pub mod prompts;

pub use self::core::{CatalogTranslator, parse_translations};
pub use self::merge::apply_translations;
pub use self::prompts::PromptTemplate;
