use crate::error::MonoError;
use reqwest::Client as HttpClient;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.withmono.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings a [`Client`](crate::Client) is built from.
///
/// Nothing is checked here; [`Client::new`](crate::Client::new) validates the
/// whole configuration once, before any request can be made.
#[derive(Clone)]
pub struct Config {
    pub secret_key: String,
    pub http_client: Option<HttpClient>,
    pub api_url: String,
}

impl Config {
    /// Default configuration for the given secret key: a 5 second request
    /// timeout and the production API url.
    pub fn new(secret_key: impl Into<String>) -> Result<Self, MonoError> {
        let http_client = HttpClient::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self {
            secret_key: secret_key.into(),
            http_client: Some(http_client),
            api_url: DEFAULT_API_URL.to_string(),
        })
    }

    /// Override the API url (useful for tests or proxies).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_http_client(mut self, http_client: HttpClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Check that every required field is present, in declaration order.
    pub(crate) fn validate(self) -> Result<ValidConfig, MonoError> {
        let Config {
            secret_key,
            http_client,
            api_url,
        } = self;
        if secret_key.is_empty() {
            return Err(MonoError::MissingSecretKey);
        }
        let Some(http) = http_client else {
            return Err(MonoError::MissingHttpClient);
        };
        if api_url.is_empty() {
            return Err(MonoError::MissingApiUrl);
        }
        Ok(ValidConfig {
            secret_key,
            http,
            api_url,
        })
    }
}

pub(crate) struct ValidConfig {
    pub(crate) secret_key: String,
    pub(crate) http: HttpClient,
    pub(crate) api_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("secret_key", &"<redacted>")
            .field("http_client", &self.http_client.is_some())
            .field("api_url", &self.api_url)
            .finish()
    }
}
