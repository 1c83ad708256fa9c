use std::env;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use vmq_adapter::{Backend, MetricQuery, MetricsAdapter};

/// Runs one instant query against a local backend and prints the scalar.
///
/// Usage: `scaler '<promql expression>' [tenant]`
/// Environment: `VMQ_ENDPOINT` (default `http://localhost:8428`).
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1) Logger
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    info!("logger initialized");

    // 2) Arguments
    let expression = env::args().nth(1).unwrap_or_else(|| "up".to_string());
    let tenant: Option<u32> = env::args().nth(2).map(|t| t.parse()).transpose()?;
    let endpoint =
        env::var("VMQ_ENDPOINT").unwrap_or_else(|_| "http://localhost:8428".to_string());

    // 3) Adapter with a bounded client; retries stay with the caller.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;
    let backend = match tenant {
        Some(_) => Backend::VictoriaMultiTenant,
        None => Backend::Prometheus,
    };
    let adapter = MetricsAdapter::new(&endpoint, backend, client);
    info!(endpoint, ?backend, "adapter ready");

    // 4) One instant query
    let request = MetricQuery::new(&expression)
        .with_metric_name(&expression)
        .with_tenant(tenant.unwrap_or_default());
    let value = adapter.query(&request).await?;

    info!(query = %expression, value, "query evaluated");
    println!("{value}");
    Ok(())
}
