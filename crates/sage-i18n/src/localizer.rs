//! Message resolution and rendering

use crate::Bundle;
use minijinja::Environment;
use serde::Serialize;
use tracing::warn;

/// Resolves message ids against a [`Bundle`] for one locale
///
/// Call sites pass the message id together with its English default, so a
/// missing translation degrades to readable text instead of an error.
/// Translation never fails.
#[derive(Debug, Clone)]
pub struct Localizer<'a> {
    bundle: &'a Bundle,
    locale: String,
}

impl<'a> Localizer<'a> {
    /// Bind a bundle to a locale
    pub fn new(bundle: &'a Bundle, locale: impl Into<String>) -> Self {
        Self {
            bundle,
            locale: locale.into(),
        }
    }

    /// The locale this localizer resolves against
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Translate a message with no parameters
    pub fn translate(&self, id: &str, default_message: &str) -> String {
        self.translate_with(id, default_message, ())
    }

    /// Translate a message, substituting `params` into the template
    ///
    /// Resolution order: the bound locale's message for `id`, else the
    /// caller's default. A template that fails to render falls back to
    /// the unrendered default message.
    pub fn translate_with<S: Serialize>(
        &self,
        id: &str,
        default_message: &str,
        params: S,
    ) -> String {
        let template = self
            .bundle
            .message(&self.locale, id)
            .unwrap_or(default_message);

        // A fresh environment per render avoids template-source lifetime
        // entanglement with the bundle.
        let env = Environment::new();
        let value = minijinja::value::Value::from_serialize(&params);

        match env.render_str(template, value) {
            Ok(rendered) => rendered,
            Err(e) => {
                warn!(id, locale = %self.locale, error = %e, "Message failed to render");
                default_message.to_string()
            }
        }
    }
}
