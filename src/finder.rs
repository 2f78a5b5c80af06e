use crate::classify;
use crate::client::JaegerClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::ErrorCategory;
use crate::window::TimeWindow;

/// Read-only aggregation facade shared across requests. Every call
/// computes its own window and issues its own backend queries; nothing
/// is cached between requests.
#[derive(Clone)]
pub struct TraceFinder {
    client: JaegerClient,
    config: Config,
}

impl TraceFinder {
    pub fn new(client: JaegerClient, config: Config) -> Self {
        Self { client, config }
    }

    /// Trace IDs in the current window that fall into `category`.
    pub async fn errors(&self, category: ErrorCategory) -> Result<Vec<String>> {
        let window = TimeWindow::last_hours(self.config.gap);
        let traces = self
            .client
            .search(category.service(&self.config), category.tag_filter(), window)
            .await?;
        classify::classify(&traces, category)
    }

    /// Raw trace documents for `trace_ids`, in input order. The first
    /// failing fetch aborts the whole batch; partial results are never
    /// returned.
    pub async fn details(&self, trace_ids: &[String]) -> Result<Vec<serde_json::Value>> {
        let mut documents = Vec::with_capacity(trace_ids.len());
        for trace_id in trace_ids {
            documents.push(self.client.trace(trace_id).await?);
        }
        Ok(documents)
    }

    /// Traces recording a completed floating-IP association within the
    /// last `gap` minutes.
    pub async fn solved_floating_ip(&self) -> Result<Vec<String>> {
        let window = TimeWindow::last_minutes(self.config.gap);
        let traces = self
            .client
            .search(&self.config.service_network, None, window)
            .await?;
        classify::solved_floating_ip(&traces)
    }

    /// Traces recording a volume create for `instance_name` within the
    /// last `gap` minutes.
    pub async fn solved_quota(&self, instance_name: &str) -> Result<Vec<String>> {
        let window = TimeWindow::last_minutes(self.config.gap);
        let traces = self
            .client
            .search(&self.config.service_compute, None, window)
            .await?;
        classify::solved_quota(&traces, instance_name)
    }
}
