//! Generic chat-completion interface over the Sage synchronous chat API
//!
//! This crate adapts a generic LLM chat abstraction to Sage, a backend
//! whose native interface differs from that abstraction: Sage answers a
//! whole conversation in one shot (no incremental streaming), encodes
//! conversations as a two-speaker message list with the system prompt
//! carried separately, and selects behavior through a persona field the
//! generic layer has no equivalent for. It includes:
//!
//! - Conversation and completion-request types for the generic layer
//! - Functional configuration options folded over a provider's defaults
//! - A stream result type that lets single-shot backends satisfy the
//!   streaming contract
//! - The LanguageModel trait and the Sage provider implementation

pub mod client;
pub mod completion;
pub mod config;
pub mod conversation;
pub mod error;
pub mod provider;
pub mod providers;
pub mod stream;

// Re-export main types
pub use completion::CompletionRequest;
pub use config::{ConfigOption, ModelConfig, ServiceConfig};
pub use conversation::{Post, Role};
pub use error::{LLMError, Result};
pub use provider::LanguageModel;
pub use providers::SageProvider;
pub use stream::TextStreamResult;
