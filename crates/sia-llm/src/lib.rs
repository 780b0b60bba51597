//! Typed client for the hosted chat-completions API.
//!
//! The Insight Generator sends one composed prompt per submission and
//! takes the first choice's message content verbatim as the insight text.

mod client;
mod error;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
