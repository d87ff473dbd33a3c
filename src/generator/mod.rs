//! Generator adapter
//!
//! Produces a fresh record set for a key, on demand and at a price: calls
//! are slow, can fail, and may return garbage. The pipeline treats the
//! generator as a black box that either yields well-formed entries or a
//! typed error.

mod chat;
mod errors;

pub use chat::{
    ChatApiError, ChatChoice, ChatChoiceMessage, ChatCompletionGenerator, ChatMessage,
    ChatRequest, ChatResponse, ChatTransport, TransportError, SYSTEM_PROMPT,
};
pub use errors::{GeneratorError, GeneratorResult};

use crate::record::VocabularyEntry;

/// The expensive external capability behind cache misses
///
/// Safe to call repeatedly for the same key; the adapter has no
/// key-specific side effects the pipeline needs to manage.
pub trait Generator {
    /// Produce the record set for a normalized key
    fn generate(&self, word: &str) -> GeneratorResult<Vec<VocabularyEntry>>;
}

/// Generator for processes that run without a live transport
///
/// Always fails with [`GeneratorError::Unavailable`]; cache and store
/// reads still work, misses just cannot be filled.
#[derive(Debug, Default)]
pub struct NullGenerator;

impl Generator for NullGenerator {
    fn generate(&self, _word: &str) -> GeneratorResult<Vec<VocabularyEntry>> {
        Err(GeneratorError::Unavailable)
    }
}
