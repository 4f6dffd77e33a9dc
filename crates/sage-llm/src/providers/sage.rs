//! Sage provider implementation
//!
//! Sage has no support for streaming or tool calling, so some features are
//! emulated or unavailable: streaming-shaped calls run the whole query up
//! front and wrap the answer as a one-chunk stream, and token counts are
//! estimated rather than exact.

use crate::client::{DEFAULT_PERSONA, QueryClient, QueryParams, SageClient, SageMessage, Speaker};
use crate::config::apply_options;
use crate::{
    CompletionRequest, ConfigOption, LanguageModel, ModelConfig, Post, Result, Role,
    ServiceConfig, TextStreamResult,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Conservative stand-in while the real Sage input limit is undocumented.
const DEFAULT_INPUT_TOKEN_LIMIT: usize = 200_000;

/// Provider for the Sage chat API
///
/// Immutable after construction; a single instance may serve concurrent
/// calls.
pub struct SageProvider {
    client: Box<dyn QueryClient>,
    default_model: String,
    input_token_limit: usize,
    output_token_limit: usize,
}

impl SageProvider {
    /// Create a new Sage provider
    ///
    /// # Arguments
    ///
    /// * `config` - Service settings (key, URL, default model, limits)
    /// * `http_client` - The HTTP transport queries are sent over
    ///
    /// Performs no I/O; connection problems surface on the first query.
    pub fn new(config: ServiceConfig, http_client: reqwest::Client) -> Self {
        let client = SageClient::new(config.api_key, http_client, config.api_url);

        Self {
            client: Box::new(client),
            default_model: config.default_model,
            input_token_limit: config.input_token_limit,
            output_token_limit: config.output_token_limit,
        }
    }

    fn create_config(&self, options: &[ConfigOption]) -> ModelConfig {
        apply_options(self.default_config(), options)
    }

    fn query_params_from_config(&self, config: &ModelConfig) -> QueryParams {
        // max_generated_tokens stays client-side: Sage has no documented
        // parameter for output length.
        QueryParams {
            model: config.model.clone(),
            message: Vec::new(),
            system_prompt: String::new(),
            persona: DEFAULT_PERSONA.to_string(),
        }
    }
}

/// Translate a generic conversation into Sage's two-speaker encoding
///
/// System turns are omitted entirely; their content travels in the
/// separate system-prompt field. Unrecognized roles map to the user
/// speaker so no content is dropped. Relative order of the remaining
/// turns is preserved.
fn conversation_to_messages(posts: &[Post]) -> Vec<SageMessage> {
    let mut result = Vec::with_capacity(posts.len());

    for post in posts {
        let speaker = match post.role {
            Role::Assistant => Speaker::Gpt,
            Role::User | Role::Unknown => Speaker::User,
            Role::System => continue,
        };
        result.push(SageMessage {
            user: speaker,
            message: post.message.clone(),
        });
    }

    result
}

#[async_trait]
impl LanguageModel for SageProvider {
    fn default_config(&self) -> ModelConfig {
        ModelConfig {
            model: self.default_model.clone(),
            max_generated_tokens: self.output_token_limit,
        }
    }

    async fn chat_completion(
        &self,
        request: CompletionRequest,
        options: &[ConfigOption],
    ) -> Result<TextStreamResult> {
        // Sage does not support streaming: run the full query, then
        // satisfy the streaming contract with a pre-completed result.
        let text = self.chat_completion_no_stream(request, options).await?;
        Ok(TextStreamResult::from_string(text))
    }

    #[instrument(skip(self, request, options))]
    async fn chat_completion_no_stream(
        &self,
        request: CompletionRequest,
        options: &[ConfigOption],
    ) -> Result<String> {
        let config = self.create_config(options);
        let mut params = self.query_params_from_config(&config);
        params.message = conversation_to_messages(&request.posts);
        params.system_prompt = request.extract_system_message();

        debug!(model = %params.model, messages = params.message.len(), "Querying Sage");

        let response = self.client.query(params).await?;
        Ok(response.message)
    }

    /// Estimate of the token count, not an exact figure
    ///
    /// Sage's tokenizer is not available, so this averages a
    /// characters-per-token and a words-per-token estimate and adds a
    /// fixed buffer, biasing toward overestimation.
    fn count_tokens(&self, text: &str) -> usize {
        let char_count = text.len() as f64 / 4.0;
        let word_count = text.split_whitespace().count() as f64 / 0.75;

        ((char_count + word_count) / 2.0) as usize + 100
    }

    fn input_token_limit(&self) -> usize {
        if self.input_token_limit > 0 {
            self.input_token_limit
        } else {
            DEFAULT_INPUT_TOKEN_LIMIT
        }
    }
}
