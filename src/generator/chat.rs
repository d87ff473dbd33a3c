//! Chat-completion generator
//!
//! Builds the chat request for a word, hands it to a [`ChatTransport`] and
//! strictly decodes the answer into vocabulary entries. The wire call
//! itself (HTTP, auth, timeouts, retries) lives behind the transport trait;
//! this module only owns the request shape and the decode/validation rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GeneratorConfig;
use crate::record::{normalize_key, VocabularyEntry};

use super::errors::{GeneratorError, GeneratorResult};
use super::Generator;

/// Instructions sent as the system message with every request
///
/// The contract with the service: a bare JSON array, one object per common
/// sense or part of speech, fields matching [`VocabularyEntry`].
pub const SYSTEM_PROMPT: &str = "\
Return data for the given English word or phrase as a bare JSON array with \
no code block wrapper. Produce one object per common sense or part of \
speech. Each object has these fields: vocabulary, part_of_speech (verb, \
noun, adj, adv), phonetic_transcription, definition, synonyms, antonyms, \
phrases (prepositions or collocations commonly paired with the word), \
example_sentence, sentence_translation, forms (derived forms in other \
parts of speech). The synonyms, antonyms, phrases and forms arrays each \
hold between 0 and 2 items. Example sentences use one of the listed \
phrases, preferably in a workplace or business context.";

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system" or "user"
    pub role: String,
    /// Message text
    pub content: String,
}

/// The request body handed to the transport
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model name
    pub model: String,
    /// System prompt followed by the user's word
    pub messages: Vec<ChatMessage>,
    /// Completion token budget
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f64,
}

/// The response body the transport hands back
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ChatResponse {
    /// Completion choices; only the first is consumed
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    /// Service-level error payload, if any
    #[serde(default)]
    pub error: Option<ChatApiError>,
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    pub message: ChatChoiceMessage,
}

/// The message inside a choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    /// Generated content; expected to be a JSON array of entries
    pub content: String,
}

/// Service-level error payload
#[derive(Debug, Clone, Deserialize)]
pub struct ChatApiError {
    /// Human-readable message from the service
    pub message: String,
}

/// Failure from the wire layer behind [`ChatTransport`]
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// The wire call to the chat-completion service
///
/// Implementations own HTTP, authentication and call-scoped timeouts.
/// A timeout is just a transport error here; the pipeline does not retry.
pub trait ChatTransport {
    /// Send one completion request and decode the response envelope
    fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError>;
}

/// Generator that produces vocabulary entries via a chat completion
#[derive(Debug)]
pub struct ChatCompletionGenerator<T> {
    transport: T,
    config: GeneratorConfig,
}

impl<T: ChatTransport> ChatCompletionGenerator<T> {
    /// Create a generator over the given transport and settings
    pub fn new(transport: T, config: GeneratorConfig) -> Self {
        Self { transport, config }
    }

    fn build_request(&self, word: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: word.to_string(),
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }

    fn decode_response(response: ChatResponse) -> GeneratorResult<Vec<VocabularyEntry>> {
        if let Some(api_error) = response.error {
            return Err(GeneratorError::MalformedResponse(format!(
                "service error: {}",
                api_error.message
            )));
        }

        let Some(choice) = response.choices.first() else {
            return Err(GeneratorError::MalformedResponse(
                "response carries no choices".to_string(),
            ));
        };

        let entries: Vec<VocabularyEntry> = serde_json::from_str(&choice.message.content)
            .map_err(|e| {
                GeneratorError::MalformedResponse(format!("content is not an entry array: {}", e))
            })?;

        if entries.is_empty() {
            return Err(GeneratorError::EmptyResult);
        }
        if entries.iter().any(|e| normalize_key(&e.vocabulary).is_empty()) {
            return Err(GeneratorError::MalformedResponse(
                "entry with an empty key field".to_string(),
            ));
        }

        Ok(entries)
    }
}

impl<T: ChatTransport> Generator for ChatCompletionGenerator<T> {
    fn generate(&self, word: &str) -> GeneratorResult<Vec<VocabularyEntry>> {
        let request = self.build_request(word);
        let response = self
            .transport
            .complete(&request)
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;
        Self::decode_response(response)
    }
}
