use crate::config::Config;

/// Tag-equality filter sent with every error-category search.
pub const ERROR_TAG_FILTER: &str = r#"{"error":"true"}"#;

/// One of the error-classification rules applied to a window of traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Any span carrying the error marker, regardless of message.
    Generic,
    /// Error spans whose log detail mentions a floating-IP failure.
    FloatingIp,
    /// Error spans whose log detail reports the gigabytes quota being hit.
    QuotaExceeded,
}

impl ErrorCategory {
    /// Jaeger service the category queries.
    pub fn service<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            ErrorCategory::Generic | ErrorCategory::FloatingIp => &config.service_dashboard,
            ErrorCategory::QuotaExceeded => &config.service_volume,
        }
    }

    /// Tag filter for the search query. Every category narrows the
    /// search to error-tagged spans.
    pub fn tag_filter(&self) -> Option<&'static str> {
        Some(ERROR_TAG_FILTER)
    }

    /// Substring the error span's log detail must contain, when any.
    pub fn log_pattern(&self) -> Option<&'static str> {
        match self {
            ErrorCategory::Generic => None,
            ErrorCategory::FloatingIp => Some("Floating IP"),
            ErrorCategory::QuotaExceeded => Some("exceeds allowed gigabytes quota"),
        }
    }

    /// Fixed detail string returned when the category's lookup fails.
    ///
    /// The quota category reuses the floating-ip wording. Existing
    /// consumers match on the exact text, so it stays as emitted.
    pub fn detail_message(&self) -> &'static str {
        match self {
            ErrorCategory::Generic => "failed to get traces with error tag",
            ErrorCategory::FloatingIp | ErrorCategory::QuotaExceeded => {
                "failed to get traces with floating ip error tag"
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Generic => "generic",
            ErrorCategory::FloatingIp => "floating-ip",
            ErrorCategory::QuotaExceeded => "quota",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "generic" => Some(ErrorCategory::Generic),
            "floating-ip" => Some(ErrorCategory::FloatingIp),
            "quota" => Some(ErrorCategory::QuotaExceeded),
            _ => None,
        }
    }
}
