use crate::config::{Config, ValidConfig};
use crate::error::{ApiError, MonoError};
use log::{debug, info};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use url::Url;

const SECRET_KEY_HEADER: &str = "mono-sec-key";
const CLIENT_LIB_HEADER: &str = "x-client-lib";
const CLIENT_LIB: &str = concat!("monoapi | v1 | ", env!("CARGO_PKG_VERSION"));
const SNIPPET_LEN: usize = 256;

/// One outbound call, assembled by an endpoint method and consumed by
/// [`Client::execute`].
#[derive(Debug)]
pub(crate) struct RequestSpec {
    method: Method,
    url: Url,
    body: Option<Vec<u8>>,
    headers: Vec<(String, String)>,
}

impl RequestSpec {
    pub(crate) fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    pub(crate) fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            body: None,
            headers: Vec::new(),
        }
    }

    pub(crate) fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    // Authentication, content type and client identification are always
    // applied after these and win on a name clash.
    #[cfg(test)]
    pub(crate) fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[derive(Clone)]
pub struct Client {
    secret_key: HeaderValue,
    http: HttpClient,
    api_url: Url,
}

impl Client {
    /// Validate the configuration and build a client from it.
    pub fn new(config: Config) -> Result<Self, MonoError> {
        let ValidConfig {
            secret_key,
            http,
            api_url,
        } = config.validate()?;

        let api_url = Url::parse(&api_url).map_err(MonoError::InvalidApiUrl)?;
        if api_url.cannot_be_a_base() {
            return Err(MonoError::InvalidApiUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }

        let mut secret_key = HeaderValue::from_str(&secret_key)
            .map_err(|_| MonoError::InvalidParameter("secret key is not a valid header value"))?;
        secret_key.set_sensitive(true);

        info!("Initialized Mono API client for {}", api_url);
        Ok(Self {
            secret_key,
            http,
            api_url,
        })
    }

    /// Create a client with the default configuration for `secret_key`.
    pub fn with_secret_key(secret_key: impl Into<String>) -> Result<Self, MonoError> {
        Self::new(Config::new(secret_key)?)
    }

    /// Join percent-encoded path segments onto the API url.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, MonoError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                MonoError::InvalidApiUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send one request and decode a 200 body into `T`.
    ///
    /// Any other status, 2xx included, comes back as [`MonoError::Api`] with
    /// the body untouched.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestSpec,
    ) -> Result<T, MonoError> {
        let RequestSpec {
            method,
            url,
            body,
            headers: extra_headers,
        } = request;

        let mut headers = HeaderMap::new();
        for (name, value) in extra_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| MonoError::InvalidHeader { name: name.clone() })?;
            let header_value =
                HeaderValue::from_str(&value).map_err(|_| MonoError::InvalidHeader { name })?;
            headers.insert(header_name, header_value);
        }
        headers.insert(
            HeaderName::from_static(SECRET_KEY_HEADER),
            self.secret_key.clone(),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(CLIENT_LIB_HEADER),
            HeaderValue::from_static(CLIENT_LIB),
        );

        debug!("{} request to {}", method, url);
        let mut builder = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let response = builder.send().await?;

        let status = response.status();
        let endpoint = response.url().to_string();
        debug!("Received status {} from {}", status, endpoint);
        let bytes = response.bytes().await?;

        if status != StatusCode::OK {
            return Err(ApiError {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
                endpoint,
            }
            .into());
        }

        serde_json::from_slice(&bytes).map_err(|source| MonoError::Decode {
            source,
            snippet: snippet(&bytes),
        })
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("secret_key", &"<redacted>")
            .field("api_url", &self.api_url.as_str())
            .finish()
    }
}

fn snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let cut = text.char_indices().nth(SNIPPET_LEN).map(|(idx, _)| idx);
    match cut {
        Some(idx) => format!("{}...", &text[..idx]),
        None => text.into_owned(),
    }
}
