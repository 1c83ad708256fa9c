use async_trait::async_trait;
use reqwest::{Client, Url};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::error;

use crate::errors::QueryError;
use crate::query::MetricQuery;
use crate::response::{QueryResponse, SampleField};

/// Flavor of the metrics backend behind the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Native Prometheus query API (single tenant).
    Prometheus,
    /// VictoriaMetrics vmselect API in multi-tenant mode; queries are scoped
    /// to the account id carried by each [`MetricQuery`].
    VictoriaMultiTenant,
}

/// Source of scalar metric values.
///
/// This is the seam a scaling controller consumes; [`MetricsAdapter`] is the
/// HTTP-backed implementation.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn query(&self, request: &MetricQuery) -> Result<f64, QueryError>;
}

/// Executes instant queries against a Prometheus-compatible backend and
/// extracts a single scalar from the response.
///
/// The adapter holds only immutable configuration, so a single instance can
/// serve concurrent callers; the injected [`Client`] pools connections and is
/// safe to share. The address is not validated at construction — a bad
/// address surfaces as an error on the first call.
///
/// Cancellation is the caller's: dropping the `query` future (for example via
/// `tokio::time::timeout`) aborts the in-flight request.
#[derive(Debug, Clone)]
pub struct MetricsAdapter {
    server_address: String,
    backend: Backend,
    client: Client,
}

impl MetricsAdapter {
    pub fn new(server_address: impl Into<String>, backend: Backend, client: Client) -> Self {
        Self {
            server_address: server_address.into(),
            backend,
            client,
        }
    }

    /// Evaluate `request` at the current instant and return the scalar value.
    ///
    /// Exactly one result with a finite value yields that value. Absence
    /// conditions (no result, no value, `null`, ±Inf) yield `0.0` when the
    /// request ignores null values, an error otherwise. Ambiguous or
    /// malformed responses are always errors.
    pub async fn query(&self, request: &MetricQuery) -> Result<f64, QueryError> {
        let body = self.fetch(request).await?;
        let response: QueryResponse = serde_json::from_str(&body)?;
        extract_value(&response, request)
    }

    async fn fetch(&self, request: &MetricQuery) -> Result<String, QueryError> {
        let now = OffsetDateTime::now_utc().format(&Rfc3339)?;
        let url = self.endpoint(request, &now)?;

        let response = self
            .client
            .get(url)
            .headers(request.headers.clone())
            .send()
            .await
            .map_err(QueryError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(QueryError::Read)?;

        if !status.is_success() {
            error!(%status, query = %request.query, "metrics query api returned error");
            return Err(QueryError::Status { status, body });
        }
        Ok(body)
    }

    /// Build the instant-query URL for the configured backend flavor.
    fn endpoint(&self, request: &MetricQuery, time: &str) -> Result<Url, QueryError> {
        let path = match self.backend {
            Backend::Prometheus => format!("{}/api/v1/query", self.server_address),
            Backend::VictoriaMultiTenant => format!(
                "{}/select/{}/prometheus/api/v1/query",
                self.server_address, request.tenant
            ),
        };

        Url::parse_with_params(&path, [("query", request.query.as_str()), ("time", time)])
            .map_err(|e| QueryError::InvalidUrl {
                url: path,
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl MetricsSource for MetricsAdapter {
    async fn query(&self, request: &MetricQuery) -> Result<f64, QueryError> {
        MetricsAdapter::query(self, request).await
    }
}

/// Apply the result-count, value-pair and finiteness policies to a decoded
/// envelope.
fn extract_value(response: &QueryResponse, request: &MetricQuery) -> Result<f64, QueryError> {
    // Zero or one result is acceptable; more than one means the query matched
    // several series and no tolerance can pick the right one.
    let entry = match response.data.result.as_slice() {
        [] => {
            if request.ignore_null_values {
                return Ok(0.0);
            }
            return Err(QueryError::EmptyResult(request.metric_name.clone()));
        }
        [entry] => entry,
        _ => return Err(QueryError::AmbiguousResult(request.query.clone())),
    };

    let field = match entry.value.as_slice() {
        [] => {
            if request.ignore_null_values {
                return Ok(0.0);
            }
            return Err(QueryError::EmptyValue(request.metric_name.clone()));
        }
        [_] => return Err(QueryError::InsufficientValue(request.query.clone())),
        [_, field, ..] => field,
    };

    let value = match field {
        SampleField::Text(raw) => raw.parse::<f64>().map_err(|source| {
            error!(value = %raw, query = %request.query, "failed to parse metric value");
            QueryError::ValueParse {
                value: raw.clone(),
                source,
            }
        })?,
        SampleField::Absent => {
            if request.ignore_null_values {
                return Ok(0.0);
            }
            return Err(QueryError::NullValue(request.metric_name.clone()));
        }
        SampleField::Timestamp(n) => {
            return Err(QueryError::UnexpectedValue {
                query: request.query.clone(),
                value: n.to_string(),
            });
        }
    };

    if value.is_infinite() {
        if request.ignore_null_values {
            return Ok(0.0);
        }
        error!(value, query = %request.query, "metrics query returned non-finite value");
        return Err(QueryError::Infinite {
            query: request.query.clone(),
            value,
        });
    }
    Ok(value)
}
