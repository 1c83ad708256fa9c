use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by an instant query.
///
/// When a query is built with [`ignore_null_values`](crate::MetricQuery::ignore_null_values),
/// the absence conditions ([`EmptyResult`](QueryError::EmptyResult),
/// [`EmptyValue`](QueryError::EmptyValue), [`NullValue`](QueryError::NullValue),
/// [`Infinite`](QueryError::Infinite)) are suppressed and the query yields `0.0`
/// instead. Ambiguous or malformed responses are never suppressed.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid query url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to format query timestamp: {0}")]
    Timestamp(#[from] time::error::Format),

    #[error("metrics query request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read metrics response body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("metrics query api returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode metrics response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("metric {0} target may be lost, the result is empty")]
    EmptyResult(String),

    #[error("query {0} returned multiple results")]
    AmbiguousResult(String),

    #[error("metric {0} target may be lost, the value list is empty")]
    EmptyValue(String),

    #[error("query {0} didn't return enough values")]
    InsufficientValue(String),

    #[error("metric {0} value is null")]
    NullValue(String),

    #[error("query {query} returned a non-string value {value}")]
    UnexpectedValue { query: String, value: String },

    #[error("failed to parse metric value {value}: {source}")]
    ValueParse {
        value: String,
        source: std::num::ParseFloatError,
    },

    #[error("query {query} returned non-finite value {value}")]
    Infinite { query: String, value: f64 },
}
