use std::sync::Arc;

use async_trait::async_trait;
use rae_config::ClientConfig;
use rae_types::WordEntry;

use crate::context::CallContext;
use crate::envelope::{Envelope, Outcome, WordPayload};
use crate::error::{DecodeError, Operation, RaeError, TransportError};
use crate::query::{escape_terms, normalize_headword};
use crate::search::{decode_hits, hits_to_entries};
use crate::transport::{HttpTransport, Request, Transport};

/// Dictionary lookups, independent of how they are served
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Full entry for a headword
    async fn lookup(&self, word: &str) -> Result<WordEntry, RaeError>;

    /// A random headword
    async fn random(&self) -> Result<String, RaeError>;

    /// Word of the day
    async fn daily(&self) -> Result<String, RaeError>;

    /// Free-text search, possibly empty
    async fn search(&self, terms: &str) -> Result<Vec<WordEntry>, RaeError>;
}

/// Client for the dictionary service.
///
/// Holds only read-only configuration, so one instance can be cloned and
/// shared across tasks freely.
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    user_agent: String,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Client talking HTTP to `config.base_url`
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        let transport = HttpTransport::with_client(config.base_url.clone(), http);

        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let user_agent = config.user_agent();

        Self {
            config: Arc::new(config),
            user_agent,
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Look up a headword.
    ///
    /// A miss comes back as [`RaeError::NotFound`] carrying the service's
    /// alternate spellings.
    pub async fn lookup_with(&self, ctx: &CallContext, word: &str) -> Result<WordEntry, RaeError> {
        let op = Operation::Lookup;
        let headword = normalize_headword(word);
        if headword.is_empty() {
            return Err(RaeError::EmptyWord {
                arg: word.to_string(),
            });
        }

        let mut request = self.request(["words", headword.as_str()]);
        if self.config.lookup_accepts_not_found {
            request = request.also_accept(404);
        }

        // Errors keep the word as the caller wrote it
        let body = self.fetch(ctx, op, word, &request).await?;
        let envelope = Envelope::<WordEntry>::decode(&body).map_err(|e| decode_error(op, word, e))?;

        match envelope.into_outcome().map_err(|e| decode_error(op, word, e))? {
            Outcome::Found(entry) if entry.is_not_found() => {
                tracing::warn!(%headword, suggestions = ?entry.suggestions, "word not found");
                Err(RaeError::NotFound {
                    op,
                    arg: word.to_string(),
                    message: String::new(),
                    suggestions: entry.suggestions,
                })
            }
            Outcome::Found(entry) => Ok(entry),
            Outcome::Missing { error, suggestions } => {
                tracing::warn!(%headword, ?suggestions, "word not found");
                Err(RaeError::NotFound {
                    op,
                    arg: word.to_string(),
                    message: error,
                    suggestions,
                })
            }
        }
    }

    pub async fn lookup(&self, word: &str) -> Result<WordEntry, RaeError> {
        self.lookup_with(&CallContext::default(), word).await
    }

    pub async fn random_with(&self, ctx: &CallContext) -> Result<String, RaeError> {
        self.single_word(ctx, Operation::Random, "random").await
    }

    pub async fn random(&self) -> Result<String, RaeError> {
        self.random_with(&CallContext::default()).await
    }

    pub async fn daily_with(&self, ctx: &CallContext) -> Result<String, RaeError> {
        self.single_word(ctx, Operation::Daily, "daily").await
    }

    pub async fn daily(&self) -> Result<String, RaeError> {
        self.daily_with(&CallContext::default()).await
    }

    /// Free-text search. Terms are escaped but otherwise sent as given; the
    /// service decides what an empty query means.
    pub async fn search_with(
        &self,
        ctx: &CallContext,
        terms: &str,
    ) -> Result<Vec<WordEntry>, RaeError> {
        let op = Operation::Search;

        let mut request = self.request(["search"]).query("q", escape_terms(terms));
        if let Some(engine) = &self.config.search_engine {
            request = request.query("eng", escape_terms(engine));
        }

        let body = self.fetch(ctx, op, terms, &request).await?;
        let hits = decode_hits(&body).map_err(|e| match e {
            DecodeError::Rejected(message) => {
                tracing::warn!(terms, %message, "search rejected by service");
                RaeError::Service {
                    op,
                    arg: terms.to_string(),
                    message,
                }
            }
            other => decode_error(op, terms, other),
        })?;
        tracing::debug!(terms, hits = hits.len(), "search returned");

        hits_to_entries(hits).map_err(|e| {
            tracing::warn!(terms, index = e.index, id = %e.id, "search hit failed to decode");
            RaeError::SearchHit {
                terms: terms.to_string(),
                index: e.index,
                id: e.id,
                source: e.source,
            }
        })
    }

    pub async fn search(&self, terms: &str) -> Result<Vec<WordEntry>, RaeError> {
        self.search_with(&CallContext::default(), terms).await
    }

    /// Shared body of random and daily
    async fn single_word(
        &self,
        ctx: &CallContext,
        op: Operation,
        endpoint: &'static str,
    ) -> Result<String, RaeError> {
        let request = self.request([endpoint]);

        let body = self.fetch(ctx, op, "", &request).await?;
        let envelope = Envelope::<WordPayload>::decode(&body).map_err(|e| decode_error(op, "", e))?;

        match envelope.into_outcome().map_err(|e| decode_error(op, "", e))? {
            Outcome::Found(payload) => Ok(payload.word),
            Outcome::Missing { error, .. } => {
                tracing::warn!(%op, %error, "service returned no word");
                Err(RaeError::NotFound {
                    op,
                    arg: String::new(),
                    message: error,
                    suggestions: vec![],
                })
            }
        }
    }

    fn request<const N: usize>(&self, segments: [&str; N]) -> Request {
        Request::get(segments).header("User-Agent", self.user_agent.clone())
    }

    /// Run one exchange bounded by the context's deadline and cancellation
    async fn fetch(
        &self,
        ctx: &CallContext,
        op: Operation,
        arg: &str,
        request: &Request,
    ) -> Result<Vec<u8>, RaeError> {
        let limit = ctx.effective_timeout(self.config.timeout());
        tracing::debug!(%op, path = %request.path(), ?limit, "sending request");

        tokio::select! {
            biased;

            _ = ctx.cancellation().cancelled() => {
                tracing::debug!(%op, "request cancelled");
                Err(RaeError::Cancelled { op, arg: arg.to_string() })
            }
            result = tokio::time::timeout(limit, self.transport.fetch(request)) => match result {
                Err(_) => Err(RaeError::Timeout {
                    op,
                    arg: arg.to_string(),
                    after: limit,
                }),
                Ok(Err(source)) => Err(RaeError::Transport {
                    op,
                    arg: arg.to_string(),
                    source,
                }),
                Ok(Ok(body)) => Ok(body),
            }
        }
    }
}

fn decode_error(op: Operation, arg: &str, source: DecodeError) -> RaeError {
    tracing::warn!(%op, arg, error = %source, "failed to decode response");
    RaeError::Decode {
        op,
        arg: arg.to_string(),
        source,
    }
}

#[async_trait]
impl Dictionary for Client {
    async fn lookup(&self, word: &str) -> Result<WordEntry, RaeError> {
        Client::lookup(self, word).await
    }

    async fn random(&self) -> Result<String, RaeError> {
        Client::random(self).await
    }

    async fn daily(&self) -> Result<String, RaeError> {
        Client::daily(self).await
    }

    async fn search(&self, terms: &str) -> Result<Vec<WordEntry>, RaeError> {
        Client::search(self, terms).await
    }
}
