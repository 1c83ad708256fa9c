use reqwest::header::HeaderMap;

/// Parameters for a single instant query.
///
/// Built once per call and never mutated by the adapter. `metric_name` only
/// labels diagnostics; the backend sees `query` alone.
#[derive(Debug, Clone, Default)]
pub struct MetricQuery {
    /// PromQL/MetricsQL expression to evaluate.
    pub query: String,
    /// Extra headers attached verbatim to the request (auth tokens, tenancy
    /// hints behind proxies).
    pub headers: HeaderMap,
    /// Treat an absent or non-finite metric as `0.0` instead of an error.
    pub ignore_null_values: bool,
    /// Human-readable metric name used in error messages.
    pub metric_name: String,
    /// Account id for multi-tenant backends; ignored in native mode.
    pub tenant: u32,
}

impl MetricQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_metric_name(mut self, name: impl Into<String>) -> Self {
        self.metric_name = name.into();
        self
    }

    pub fn with_tenant(mut self, tenant: u32) -> Self {
        self.tenant = tenant;
        self
    }

    pub fn ignore_null_values(mut self, ignore: bool) -> Self {
        self.ignore_null_values = ignore;
        self
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderMap, HeaderValue};

    use super::*;

    #[test]
    fn builder_sets_all_fields() {
        let mut headers = HeaderMap::new();
        headers.insert("x-scope-orgid", HeaderValue::from_static("team-a"));

        let query = MetricQuery::new("sum(rate(http_requests_total[1m]))")
            .with_headers(headers)
            .with_metric_name("http_requests_total")
            .with_tenant(7)
            .ignore_null_values(true);

        assert_eq!(query.query, "sum(rate(http_requests_total[1m]))");
        assert_eq!(query.metric_name, "http_requests_total");
        assert_eq!(query.tenant, 7);
        assert!(query.ignore_null_values);
        assert_eq!(
            query.headers.get("x-scope-orgid").unwrap(),
            &HeaderValue::from_static("team-a")
        );
    }

    #[test]
    fn defaults_are_strict() {
        let query = MetricQuery::new("up");
        assert!(!query.ignore_null_values);
        assert_eq!(query.tenant, 0);
        assert!(query.headers.is_empty());
        assert!(query.metric_name.is_empty());
    }
}
