//! Text stream results
//!
//! Completions are surfaced to callers as a stream of text chunks. Backends
//! that generate incrementally produce the [`TextStreamResult::Pending`]
//! variant; backends that only answer in one shot produce
//! [`TextStreamResult::Completed`], which still satisfies the streaming
//! contract by yielding the full text as a single chunk.

use crate::Result;
use futures::stream::{self, BoxStream, StreamExt};
use std::fmt;

/// Result of a streaming-shaped completion call
pub enum TextStreamResult {
    /// Chunks arriving incrementally from the backend
    Pending(BoxStream<'static, Result<String>>),

    /// Output that was fully generated before the call returned
    Completed(String),
}

impl TextStreamResult {
    /// Wrap an already-complete text as a one-chunk stream
    pub fn from_string(text: impl Into<String>) -> Self {
        Self::Completed(text.into())
    }

    /// Wrap an incremental chunk stream
    pub fn from_stream(chunks: BoxStream<'static, Result<String>>) -> Self {
        Self::Pending(chunks)
    }

    /// True when the full text is already available
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Consume as a chunk stream
    ///
    /// A `Completed` result yields exactly one chunk containing the full
    /// text, then terminates.
    pub fn into_stream(self) -> BoxStream<'static, Result<String>> {
        match self {
            Self::Pending(chunks) => chunks,
            Self::Completed(text) => stream::once(async move { Ok(text) }).boxed(),
        }
    }

    /// Consume the stream and return the concatenated text
    pub async fn read_all(self) -> Result<String> {
        match self {
            Self::Completed(text) => Ok(text),
            Self::Pending(mut chunks) => {
                let mut text = String::new();
                while let Some(chunk) = chunks.next().await {
                    text.push_str(&chunk?);
                }
                Ok(text)
            }
        }
    }
}

impl fmt::Debug for TextStreamResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending(_) => f.write_str("TextStreamResult::Pending(..)"),
            Self::Completed(text) => f
                .debug_tuple("TextStreamResult::Completed")
                .field(text)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completed_yields_exactly_one_chunk() {
        let result = TextStreamResult::from_string("hello");
        let mut chunks = result.into_stream();

        assert_eq!(chunks.next().await.unwrap().unwrap(), "hello");
        assert!(chunks.next().await.is_none());
    }

    #[tokio::test]
    async fn test_completed_read_all() {
        let result = TextStreamResult::from_string("hello");
        assert_eq!(result.read_all().await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_pending_read_all_concatenates() {
        let chunks = stream::iter(vec![Ok("he".to_string()), Ok("llo".to_string())]).boxed();
        let result = TextStreamResult::from_stream(chunks);

        assert!(!result.is_completed());
        assert_eq!(result.read_all().await.unwrap(), "hello");
    }

    #[test]
    fn test_is_completed() {
        assert!(TextStreamResult::from_string("x").is_completed());
    }
}
