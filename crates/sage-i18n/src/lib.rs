//! Embedded localization bundle for sage-rs user-facing messages
//!
//! Presentation code resolves message ids against an immutable [`Bundle`]
//! built once at process start from message files embedded at compile
//! time. A [`Localizer`] binds the bundle to one locale and exposes
//! `translate(id, default_message, params…)`; English defaults live at
//! the call sites, so lookups degrade gracefully when a translation is
//! missing.

pub mod bundle;
pub mod error;
pub mod localizer;

// Re-export main types
pub use bundle::Bundle;
pub use error::{I18nError, Result};
pub use localizer::Localizer;
