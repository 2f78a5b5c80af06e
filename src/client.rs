use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::models::{SearchResponse, Trace};
use crate::window::TimeWindow;

/// Thin client for the Jaeger query API. One outbound call per
/// invocation; no retries, no caching.
#[derive(Clone)]
pub struct JaegerClient {
    http: reqwest::Client,
    base_url: String,
}

impl JaegerClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.jaeger_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search for traces recorded by `service` within `window`.
    pub async fn search(
        &self,
        service: &str,
        tag_filter: Option<&str>,
        window: TimeWindow,
    ) -> Result<Vec<Trace>> {
        let url = self.search_url(service, tag_filter, window);
        tracing::debug!("Searching traces: {}", url);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: SearchResponse = response.json().await?;
        Ok(body.data)
    }

    /// Fetch the raw document for a single trace, passed through
    /// unmodified for downstream detail views.
    pub async fn trace(&self, trace_id: &str) -> Result<serde_json::Value> {
        let url = format!(
            "{}/api/traces/{}",
            self.base_url,
            urlencoding::encode(trace_id)
        );
        tracing::debug!("Fetching trace: {}", url);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    fn search_url(&self, service: &str, tag_filter: Option<&str>, window: TimeWindow) -> String {
        let mut url = format!(
            "{}/api/traces?service={}&start={}&end={}",
            self.base_url,
            urlencoding::encode(service),
            window.start_us,
            window.end_us
        );
        if let Some(tags) = tag_filter {
            url.push_str("&tags=");
            url.push_str(&urlencoding::encode(tags));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::category::ERROR_TAG_FILTER;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(url: &str) -> JaegerClient {
        let config = Config {
            jaeger_url: url.to_string(),
            service_dashboard: "horizon-horizon".to_string(),
            service_volume: "cinder-cinder-api".to_string(),
            service_network: "neutron-neutron-server".to_string(),
            service_compute: "nova-nova-api".to_string(),
            gap: 5,
            timeout_secs: 2,
        };
        JaegerClient::new(&config).unwrap()
    }

    fn test_client() -> JaegerClient {
        client_for("http://localhost:30168")
    }

    #[test]
    fn test_search_url_without_tags() {
        let client = test_client();
        let window = TimeWindow {
            start_us: 1_000,
            end_us: 2_000,
        };
        assert_eq!(
            client.search_url("horizon-horizon", None, window),
            "http://localhost:30168/api/traces?service=horizon-horizon&start=1000&end=2000"
        );
    }

    #[test]
    fn test_search_url_encodes_tag_filter() {
        let client = test_client();
        let window = TimeWindow {
            start_us: 1_000,
            end_us: 2_000,
        };
        let url = client.search_url("horizon-horizon", Some(ERROR_TAG_FILTER), window);
        assert_eq!(
            url,
            "http://localhost:30168/api/traces?service=horizon-horizon&start=1000&end=2000\
             &tags=%7B%22error%22%3A%22true%22%7D"
        );
    }

    #[test]
    fn test_search_url_encodes_service_name() {
        let client = test_client();
        let window = TimeWindow {
            start_us: 0,
            end_us: 1,
        };
        let url = client.search_url("svc with space", None, window);
        assert!(url.contains("service=svc%20with%20space"));
    }

    #[tokio::test]
    async fn test_search_parses_backend_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/traces"))
            .and(query_param("service", "horizon-horizon"))
            .and(query_param("tags", ERROR_TAG_FILTER))
            .and(query_param("start", "1000"))
            .and(query_param("end", "2000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"traceID": "3f2a9c", "spans": []}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let window = TimeWindow {
            start_us: 1_000,
            end_us: 2_000,
        };
        let traces = client
            .search("horizon-horizon", Some(ERROR_TAG_FILTER), window)
            .await
            .unwrap();
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].trace_id, "3f2a9c");
    }

    #[tokio::test]
    async fn test_search_non_success_status_is_backend_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let window = TimeWindow {
            start_us: 0,
            end_us: 1,
        };
        let err = client
            .search("horizon-horizon", None, window)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Backend(_)));
    }

    #[tokio::test]
    async fn test_search_malformed_body_is_backend_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let window = TimeWindow {
            start_us: 0,
            end_us: 1,
        };
        let err = client
            .search("horizon-horizon", None, window)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Backend(_)));
    }

    #[tokio::test]
    async fn test_trace_returns_raw_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/traces/3f2a9c"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"traceID": "3f2a9c", "spans": []}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let document = client.trace("3f2a9c").await.unwrap();
        assert_eq!(document["data"][0]["traceID"], "3f2a9c");
    }
}
