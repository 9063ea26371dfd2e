mod client;
mod context;
pub mod envelope;
pub mod error;
pub mod query;
pub mod search;
pub mod transport;

#[cfg(test)]
mod tests;

pub use client::{Client, Dictionary};
pub use context::CallContext;
pub use envelope::{Envelope, Outcome, WordPayload};
pub use error::{DecodeError, Operation, RaeError, TransportError};
pub use search::{SearchDoc, SearchHit};
pub use transport::{HttpTransport, Request, Transport};
