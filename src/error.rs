use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonoError {
    #[error("missing secret key")]
    MissingSecretKey,

    #[error("http client cannot be empty")]
    MissingHttpClient,

    #[error("missing api url")]
    MissingApiUrl,

    #[error("invalid api url: {0}")]
    InvalidApiUrl(#[source] url::ParseError),

    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("invalid header: {name}")]
    InvalidHeader { name: String },

    #[error("failed to encode request payload: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api rejected request: {0}")]
    Api(#[from] ApiError),

    #[error("failed to decode response: {source} (body: {snippet})")]
    Decode {
        #[source]
        source: serde_json::Error,
        snippet: String,
    },
}

impl MonoError {
    /// The upstream error, when the API answered with anything but 200.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            MonoError::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// A non-200 answer from the Mono API.
///
/// The body is kept verbatim, whatever its content type, so the failing call
/// can be inspected after the fact.
#[derive(Debug, Clone, Error)]
#[error("request to {endpoint} failed with status {status} | body: {body}")]
pub struct ApiError {
    pub status: StatusCode,
    pub body: String,
    pub endpoint: String,
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }
}
