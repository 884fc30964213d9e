use thiserror::Error;

/// Failure of one resolution attempt. The Display text is the banner the
/// shell shows to the user, so it stays fixed per kind; the underlying cause
/// is logged where the failure happens.
#[derive(Error, Debug)]
pub enum NavError {
    /// Origin or destination missing. Raised before any network call.
    #[error("Please enter both origin and destination")]
    EmptyInput,

    /// The geocoder returned no usable candidate, or the lookup call itself
    /// failed.
    #[error("Location not found")]
    LocationNotFound,

    /// The routing service reported a payload code other than "Ok", or the
    /// route call itself failed. The provider code is kept for logging.
    #[error("Unable to fetch directions")]
    NoRoute { code: String },
}

/// Transport-level failure talking to either endpoint. Collapsed into the
/// matching `NavError` before it reaches the shell.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}
