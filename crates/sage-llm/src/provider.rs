//! LLM provider trait definition

use crate::{CompletionRequest, ConfigOption, ModelConfig, Result, TextStreamResult};
use async_trait::async_trait;

/// Trait for LLM providers
///
/// Implementations adapt the generic chat-completion contract to a
/// concrete backend service. Providers are immutable after construction,
/// so a single instance may serve concurrent calls.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// The generation config used when a request supplies no options
    ///
    /// Callable independent of any request, for callers who need to
    /// preview behavior.
    fn default_config(&self) -> ModelConfig;

    /// Generate a completion, surfaced as a text stream
    ///
    /// # Arguments
    ///
    /// * `request` - The conversation to complete
    /// * `options` - Config transformations applied over the default
    ///   config, in order
    ///
    /// # Returns
    ///
    /// A stream of output chunks. Backends without native streaming
    /// return a pre-completed single-chunk stream.
    async fn chat_completion(
        &self,
        request: CompletionRequest,
        options: &[ConfigOption],
    ) -> Result<TextStreamResult>;

    /// Generate a completion and return the full text
    async fn chat_completion_no_stream(
        &self,
        request: CompletionRequest,
        options: &[ConfigOption],
    ) -> Result<String>;

    /// Estimate the number of tokens in `text`
    ///
    /// Providers without access to their backend's tokenizer return an
    /// approximation.
    fn count_tokens(&self, text: &str) -> usize;

    /// Maximum number of input tokens the backend accepts
    fn input_token_limit(&self) -> usize;
}
