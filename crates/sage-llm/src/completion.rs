//! Completion request type

use crate::{Post, Role};
use serde::{Deserialize, Serialize};

/// Request for LLM completion with full conversation history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Conversation history, in order
    pub posts: Vec<Post>,
}

impl CompletionRequest {
    /// Create a request from an ordered conversation
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Append a turn to the conversation
    pub fn add_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Combine every system turn into a single instruction string
    ///
    /// System turns are concatenated in order, newline-joined. Returns an
    /// empty string when the conversation has no system turn. The
    /// combination policy lives here in the generic layer; providers pass
    /// the result through verbatim.
    pub fn extract_system_message(&self) -> String {
        let parts: Vec<&str> = self
            .posts
            .iter()
            .filter(|post| post.role == Role::System)
            .map(|post| post.message.as_str())
            .collect();

        parts.join("\n")
    }
}
