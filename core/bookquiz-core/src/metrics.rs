use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter, register_int_counter_vec, Encoder,
    HistogramVec, IntCounter, IntCounterVec, TextEncoder,
};

lazy_static! {
    // Session Metrics
    pub static ref SESSIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "quiz_sessions_total",
        "Total number of quiz sessions by mode and status",
        &["mode", "status"]
    )
    .unwrap();

    pub static ref ANSWERS_CONFIRMED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "quiz_answers_confirmed_total",
        "Total number of confirmed answers",
        &["mode", "correct"]
    )
    .unwrap();

    // Economy Metrics
    pub static ref REWARDS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "rewards_total",
        "Total number of reward grants by result",
        &["result"]
    )
    .unwrap();

    pub static ref REWARD_COINS_TOTAL: IntCounter = register_int_counter!(
        "reward_coins_total",
        "BookCoins credited through session rewards"
    )
    .unwrap();

    pub static ref PURCHASES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "purchases_total",
        "Total number of purchase attempts by result",
        &["result"]
    )
    .unwrap();

    // Storage Metrics
    pub static ref STORAGE_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "storage_operations_total",
        "Total number of key-value storage operations",
        &["backend", "operation", "status"]
    )
    .unwrap();

    pub static ref STORAGE_OPERATION_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "storage_operation_duration_seconds",
        "Key-value storage operation duration in seconds",
        &["backend", "operation"],
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1]
    )
    .unwrap();
}

/// Renders all metrics in Prometheus text format
pub fn render_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| prometheus::Error::Msg(format!("Failed to convert metrics to UTF-8: {}", e)))
}

/// Helper: track storage operation with metrics
pub async fn track_storage_operation<F, T, E>(
    backend: &str,
    operation: &str,
    future: F,
) -> Result<T, E>
where
    F: std::future::Future<Output = Result<T, E>>,
{
    let start = std::time::Instant::now();
    let result = future.await;
    let duration = start.elapsed().as_secs_f64();

    let status = if result.is_ok() { "success" } else { "error" };

    STORAGE_OPERATIONS_TOTAL
        .with_label_values(&[backend, operation, status])
        .inc();

    STORAGE_OPERATION_DURATION_SECONDS
        .with_label_values(&[backend, operation])
        .observe(duration);

    result
}

pub fn record_reward(result: &str, coins: u64) {
    REWARDS_TOTAL.with_label_values(&[result]).inc();
    if coins > 0 {
        REWARD_COINS_TOTAL.inc_by(coins);
    }
}

pub fn record_purchase(result: &str) {
    PURCHASES_TOTAL.with_label_values(&[result]).inc();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        let _ = SESSIONS_TOTAL
            .with_label_values(&["classic", "started"])
            .get();
    }

    #[test]
    fn test_render_metrics() {
        PURCHASES_TOTAL.with_label_values(&["success"]).inc();

        let result = render_metrics();
        assert!(result.is_ok());
        let output = result.unwrap();
        assert!(output.contains("purchases_total"));
    }

    #[tokio::test]
    async fn test_track_storage_operation_counts_errors() {
        let before = STORAGE_OPERATIONS_TOTAL
            .with_label_values(&["test", "get", "error"])
            .get();

        let result: Result<(), &str> =
            track_storage_operation("test", "get", async { Err("boom") }).await;

        assert!(result.is_err());
        let after = STORAGE_OPERATIONS_TOTAL
            .with_label_values(&["test", "get", "error"])
            .get();
        assert_eq!(after, before + 1);
    }
}
