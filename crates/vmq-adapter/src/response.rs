use std::collections::HashMap;

use serde::Deserialize;

/// Envelope returned by the `/api/v1/query` endpoint.
///
/// Only the fields the adapter consumes are modeled; the shape is shared by
/// native Prometheus and VictoriaMetrics.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub status: String,
    pub data: QueryData,
}

#[derive(Debug, Deserialize)]
pub struct QueryData {
    #[serde(rename = "resultType")]
    pub result_type: String,
    #[serde(default)]
    pub result: Vec<ResultEntry>,
}

/// One sample of an instant vector.
#[derive(Debug, Deserialize)]
pub struct ResultEntry {
    /// Label set of the sample. Carried for completeness; value extraction
    /// does not look at it.
    #[serde(default)]
    pub metric: HashMap<String, String>,
    /// The `[timestamp, value]` pair. Backends may send fewer elements.
    #[serde(default)]
    pub value: Vec<SampleField>,
}

/// One slot of the heterogeneous `[timestamp, value]` pair.
///
/// The timestamp slot is a JSON number, the value slot a decimal string, and
/// either may be `null`. Decoding into an explicit variant avoids downcasting
/// an untyped JSON value later.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SampleField {
    /// An explicit `null`.
    Absent,
    /// Evaluation timestamp (unix seconds, fractional).
    Timestamp(f64),
    /// Sample value encoded as a decimal string.
    Text(String),
}
