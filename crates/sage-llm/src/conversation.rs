//! Conversation types for the generic chat layer
//!
//! This module defines the role-tagged turns that make up a conversation.
//! Providers translate these into whatever encoding their backend expects.

use serde::{Deserialize, Serialize};

/// Role of a turn in a conversation
///
/// The fallback for roles the generic layer does not recognize is the
/// explicit `Unknown` variant rather than an implicit default branch.
/// Providers treat `Unknown` as `User` so that no content is silently
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User turn
    User,
    /// Assistant turn
    Assistant,
    /// System turn (carried separately by providers whose backend has no
    /// inline system role)
    System,
    /// Unrecognized role, treated as `User` by providers
    #[serde(other)]
    Unknown,
}

/// A single turn in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Turn role
    pub role: Role,

    /// Turn text
    pub message: String,
}

impl Post {
    /// Create a user turn
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            message: message.into(),
        }
    }

    /// Create an assistant turn
    pub fn assistant(message: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            message: message.into(),
        }
    }

    /// Create a system turn
    pub fn system(message: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            message: message.into(),
        }
    }
}
