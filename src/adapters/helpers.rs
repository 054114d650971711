use std::time::Duration;

pub(crate) fn build_http_client(timeout_seconds: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent("InfoHub/0.1.0")
        .build()
        .unwrap_or_else(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            reqwest::Client::new()
        })
}

pub(crate) fn build_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(segment.trim_matches('/'));
    }
    url
}

/// Rounds halves toward positive infinity, so `-2.5` becomes `-2`.
pub(crate) fn round_half_up(value: f64) -> i64 {
    round_half_up_to(value, 0) as i64
}

/// Half-up rounding to `places` decimals. The floor difference is compared directly,
/// since `value + 0.5` can itself round up.
pub(crate) fn round_half_up_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / factor
}
