use async_trait::async_trait;
use reqwest::{Method, Url};

use crate::error::TransportError;

/// Everything a transport needs to perform one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Path segments below the base URL, unescaped
    pub segments: Vec<String>,
    /// Query pairs, values already escaped
    pub query: Vec<(&'static str, String)>,
    pub method: Method,
    pub headers: Vec<(&'static str, String)>,
    /// Status codes whose body should be handed back
    pub accept: Vec<u16>,
}

impl Request {
    /// Read-only fetch that accepts HTTP 200
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            query: vec![],
            method: Method::GET,
            headers: vec![],
            accept: vec![200],
        }
    }

    pub fn query(mut self, name: &'static str, escaped: String) -> Self {
        self.query.push((name, escaped));
        self
    }

    pub fn header(mut self, name: &'static str, value: String) -> Self {
        self.headers.push((name, value));
        self
    }

    pub fn also_accept(mut self, status: u16) -> Self {
        if !self.accept.contains(&status) {
            self.accept.push(status);
        }
        self
    }

    pub fn accepts(&self, status: u16) -> bool {
        self.accept.contains(&status)
    }

    /// `/a/b` form, for logs and fakes
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn query_string(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }

        Some(
            self.query
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("&"),
        )
    }
}

/// Performs HTTP exchanges on behalf of the client
#[async_trait]
pub trait Transport: Send + Sync {
    /// Run the request and return the body when the status is acceptable
    async fn fetch(&self, request: &Request) -> Result<Vec<u8>, TransportError>;
}

/// reqwest-backed transport rooted at a base URL
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured reqwest client (proxies, TLS, pool settings)
    pub fn with_client(base_url: String, client: reqwest::Client) -> Self {
        Self { base_url, client }
    }

    fn url_for(&self, request: &Request) -> Result<Url, TransportError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {e}", self.base_url)))?;

        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(&request.segments);

        url.set_query(request.query_string().as_deref());

        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, request: &Request) -> Result<Vec<u8>, TransportError> {
        let url = self.url_for(request)?;

        let mut builder = self.client.request(request.method.clone(), url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        if !request.accepts(status) {
            return Err(TransportError::UnexpectedStatus { status });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
