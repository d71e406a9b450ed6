use thiserror::Error;

/// Failures while binding or driving the `<audio>` element.
#[derive(Debug, Error)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum PlaybackError {
    #[error("no document available to host the audio element")]
    NoDocument,
    #[error("failed to create the audio element: {0}")]
    CreateElement(String),
    #[error("failed to subscribe to `{event}`: {reason}")]
    Subscribe { event: &'static str, reason: String },
    #[error("playback was rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed episode catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed player settings: {0}")]
    Parse(#[from] serde_json::Error),
}
