//! Error type shared by every component mount and callback.
//!
//! Most failures here are expected absences: the same script runs on pages
//! that carry only part of the markup, so a missing element means "this
//! component does not live on this page" rather than a fault.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum BehaviorError {
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("no browser window")]
    NoWindow,
    #[error("dom error: {0}")]
    Dom(String),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl BehaviorError {
    pub fn missing(selector: &str) -> Self {
        Self::MissingElement(selector.to_owned())
    }

    /// Whether this error only means the page lacks the relevant markup.
    #[must_use]
    pub fn is_expected_absence(&self) -> bool {
        matches!(self, Self::MissingElement(_) | Self::NoWindow)
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for BehaviorError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Log the outcome of a mount or callback without propagating it.
pub fn report(context: &str, result: Result<(), BehaviorError>) {
    match result {
        Ok(()) => {}
        Err(err) if err.is_expected_absence() => log::debug!("{context}: skipped ({err})"),
        Err(err) => log::warn!("{context}: {err}"),
    }
}
