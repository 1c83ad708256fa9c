//! Instant-query adapter for Prometheus-compatible metrics backends.
//!
//! This crate provides [`MetricsAdapter`], a thin HTTP client that evaluates
//! one PromQL/MetricsQL expression at the current instant and extracts a
//! single scalar `f64` from the response, for use by a scaling decision loop.
//! It speaks to native Prometheus or to VictoriaMetrics in multi-tenant mode
//! (see [`Backend`]).
//!
//! ## Example
//! ```rust,no_run
//! use vmq_adapter::{Backend, MetricQuery, MetricsAdapter};
//!
//! # async fn run() -> Result<(), vmq_adapter::QueryError> {
//! let adapter = MetricsAdapter::new(
//!     "http://vm:8428",
//!     Backend::VictoriaMultiTenant,
//!     reqwest::Client::new(),
//! );
//!
//! let request = MetricQuery::new("sum(rate(http_requests_total[1m]))")
//!     .with_metric_name("http_requests_total")
//!     .with_tenant(7)
//!     .ignore_null_values(true);
//!
//! let value = adapter.query(&request).await?;
//! # let _ = value;
//! # Ok(())
//! # }
//! ```
//!
//! The adapter performs exactly one GET per call: no retries, no caching, no
//! range queries. Retry/backoff policy belongs to the caller, as does
//! cancellation (drop the future, or wrap it in `tokio::time::timeout`).

mod adapter;
pub use adapter::{Backend, MetricsAdapter, MetricsSource};

mod query;
pub use query::MetricQuery;

mod response;
pub use response::{QueryData, QueryResponse, ResultEntry, SampleField};

mod errors;
pub use errors::QueryError;
