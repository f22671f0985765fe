use std::time::Duration;

use crate::bridge::TaggedNode;
use crate::error::ScrapeError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Something that can answer a GET with a response body.
///
/// The pipeline only ever talks to this trait, so tests can substitute an
/// in-memory source for the network.
pub trait JsonSource {
    /// Issue one GET to `url` and return the raw body.
    fn get(&self, url: &str) -> Result<Vec<u8>, ScrapeError>;
}

/// Options for [`HttpClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Upper bound for a whole request, connect to last byte.
    pub timeout: Duration,
    /// Skip certificate validation. Off unless explicitly enabled.
    pub insecure_tls: bool,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            insecure_tls: false,
            user_agent: format!("tvguide/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Blocking HTTP client. One request at a time, no retries.
pub struct HttpClient {
    http: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(options: &ClientOptions) -> Result<Self, ScrapeError> {
        if options.insecure_tls {
            log::warn!("TLS certificate validation is disabled for all requests");
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.clone())
            .danger_accept_invalid_certs(options.insecure_tls)
            .build()?;
        Ok(Self { http })
    }
}

impl JsonSource for HttpClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        log::debug!("GET {url}");
        let response = self.http.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes()?;
        Ok(bytes.to_vec())
    }
}

/// GET `url` and parse the body into a tagged tree.
///
/// A blank body is [`ScrapeError::EmptyResponse`], whatever the status was.
pub fn fetch_json_tree(source: &dyn JsonSource, url: &str) -> Result<TaggedNode, ScrapeError> {
    let body = source.get(url)?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ScrapeError::empty_response(url));
    }
    log::debug!("Fetched {} bytes from {url}", body.len());
    TaggedNode::from_slice(&body)
}
