//! Concrete LLM provider implementations
//!
//! This module contains implementations of the LanguageModel trait for
//! backend services.

pub mod sage;

pub use sage::SageProvider;
