use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub jaeger_url: String,
    pub service_dashboard: String,
    pub service_volume: String,
    pub service_network: String,
    pub service_compute: String,
    /// Look-back interval: hours for the error categories, minutes for
    /// the solved-trace lookups.
    pub gap: i64,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            jaeger_url: parse_base_url(
                &env::var("JAEGER_URL").unwrap_or_else(|_| "http://localhost:30168".to_string()),
            )?,
            service_dashboard: env::var("JAEGER_SERVICE_DASHBOARD")
                .unwrap_or_else(|_| "horizon-horizon".to_string()),
            service_volume: env::var("JAEGER_SERVICE_VOLUME")
                .unwrap_or_else(|_| "cinder-cinder-api".to_string()),
            service_network: env::var("JAEGER_SERVICE_NETWORK")
                .unwrap_or_else(|_| "neutron-neutron-server".to_string()),
            service_compute: env::var("JAEGER_SERVICE_COMPUTE")
                .unwrap_or_else(|_| "nova-nova-api".to_string()),
            gap: parse_positive("JAEGER_GAP", env::var("JAEGER_GAP").ok(), 5)?,
            timeout_secs: parse_positive(
                "JAEGER_TIMEOUT_SECS",
                env::var("JAEGER_TIMEOUT_SECS").ok(),
                10,
            )? as u64,
        })
    }
}

// A bad URL or gap must stop the process at startup, not surface later
// as a per-request failure, so invalid values fail instead of falling
// back to the default.
fn parse_base_url(raw: &str) -> anyhow::Result<String> {
    match reqwest::Url::parse(raw) {
        Ok(_) => Ok(raw.trim_end_matches('/').to_string()),
        Err(e) => anyhow::bail!("JAEGER_URL '{}' is not a valid URL: {}", raw, e),
    }
}

fn parse_positive(name: &str, value: Option<String>, default: i64) -> anyhow::Result<i64> {
    match value {
        Some(raw) => match raw.parse::<i64>() {
            Ok(v) if v > 0 => Ok(v),
            _ => anyhow::bail!("{} must be a positive integer, got '{}'", name, raw),
        },
        None => Ok(default),
    }
}
