//! Provider configuration and functional configuration options

use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection settings for an LLM service, fixed at provider construction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// API key for authentication
    pub api_key: String,

    /// Base URL of the service
    pub api_url: String,

    /// Model used when a request does not choose one
    pub default_model: String,

    /// Input token limit; zero means "use the provider's fallback"
    pub input_token_limit: usize,

    /// Output token limit, used as the default for generation
    pub output_token_limit: usize,
}

/// Per-request generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier
    pub model: String,

    /// Maximum number of tokens to generate
    pub max_generated_tokens: usize,
}

/// An opaque transformation over [`ModelConfig`]
///
/// Options are pure `ModelConfig -> ModelConfig` functions. A request
/// carries an ordered list of them; the provider folds the list over its
/// default config, so later options override earlier ones when they touch
/// the same field.
pub struct ConfigOption(Box<dyn Fn(ModelConfig) -> ModelConfig + Send + Sync>);

impl ConfigOption {
    /// Create an option from an arbitrary config transformation
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(ModelConfig) -> ModelConfig + Send + Sync + 'static,
    {
        Self(Box::new(f))
    }

    /// Option that selects the model
    pub fn model(model: impl Into<String>) -> Self {
        let model = model.into();
        Self::new(move |config| ModelConfig {
            model: model.clone(),
            ..config
        })
    }

    /// Option that sets the generation token limit
    pub fn max_generated_tokens(max_generated_tokens: usize) -> Self {
        Self::new(move |config| ModelConfig {
            max_generated_tokens,
            ..config
        })
    }

    /// Apply this option to a config
    pub fn apply(&self, config: ModelConfig) -> ModelConfig {
        (self.0)(config)
    }
}

impl fmt::Debug for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConfigOption")
    }
}

/// Fold an ordered list of options over a base config
///
/// An empty list returns the base unchanged; application is strictly
/// sequential with last-write-wins semantics.
pub fn apply_options(base: ModelConfig, options: &[ConfigOption]) -> ModelConfig {
    options
        .iter()
        .fold(base, |config, option| option.apply(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> ModelConfig {
        ModelConfig {
            model: "sage-base".to_string(),
            max_generated_tokens: 4096,
        }
    }

    #[test]
    fn test_empty_options_return_base_exactly() {
        let config = apply_options(base_config(), &[]);
        assert_eq!(config, base_config());
    }

    #[test]
    fn test_option_sets_model() {
        let config = apply_options(base_config(), &[ConfigOption::model("sage-pro")]);
        assert_eq!(config.model, "sage-pro");
        assert_eq!(config.max_generated_tokens, 4096);
    }

    #[test]
    fn test_later_option_wins() {
        let options = [
            ConfigOption::model("first"),
            ConfigOption::model("second"),
        ];
        let config = apply_options(base_config(), &options);
        assert_eq!(config.model, "second");
    }

    #[test]
    fn test_options_compose_across_fields() {
        let options = [
            ConfigOption::model("sage-pro"),
            ConfigOption::max_generated_tokens(512),
        ];
        let config = apply_options(base_config(), &options);
        assert_eq!(config.model, "sage-pro");
        assert_eq!(config.max_generated_tokens, 512);
    }

    #[test]
    fn test_custom_option() {
        let double = ConfigOption::new(|config| ModelConfig {
            max_generated_tokens: config.max_generated_tokens * 2,
            ..config
        });
        let config = apply_options(base_config(), &[double]);
        assert_eq!(config.max_generated_tokens, 8192);
    }
}
