use crate::error::{Error, Result};
use crate::models::{ErrorCategory, Trace};

/// Operation the dashboard records when a floating IP is associated.
pub const NETWORK_ASSOCIATE_OPERATION: &str = "openstack_dashboard.api.neutron.associate";

/// Operation the dashboard records when an instance is created.
pub const SERVER_CREATE_OPERATION: &str = "openstack_dashboard.api.nova.server_create";

/// Volume-create call issued while an instance is being built.
pub const VOLUME_CREATE_OPERATION: &str =
    "WSGI_POST_/v3/87bd44da47334afb8c610c12c8b17aab/volumes";

/// Collect the trace IDs of error-marked spans matching `category`.
///
/// A trace is reported once per matching span, so repeated IDs mean
/// repeated failures within a single request. Any span shorter than the
/// expected document shape fails the whole call.
pub fn classify(traces: &[Trace], category: ErrorCategory) -> Result<Vec<String>> {
    let mut matches = Vec::new();
    for trace in traces {
        for span in &trace.spans {
            if span.marker_tag_key()? != "error" {
                continue;
            }
            match category.log_pattern() {
                None => matches.push(span.trace_id.clone()),
                Some(pattern) => {
                    if span.log_detail()?.contains(pattern) {
                        matches.push(span.trace_id.clone());
                    }
                }
            }
        }
    }
    Ok(matches)
}

/// Trace IDs of spans recording a completed floating-IP association.
///
/// Completed spans carry `span.kind` where failed ones carry `error`;
/// the marker is only inspected on spans for the associate operation.
pub fn solved_floating_ip(traces: &[Trace]) -> Result<Vec<String>> {
    let mut solved = Vec::new();
    for trace in traces {
        for span in &trace.spans {
            if span.operation_name == NETWORK_ASSOCIATE_OPERATION
                && span.marker_tag_key()? == "span.kind"
            {
                solved.push(span.trace_id.clone());
            }
        }
    }
    Ok(solved)
}

/// Trace IDs of volume-create spans inside a server-create trace for
/// `instance_name`. Traces whose first span is not a server-create for
/// that instance are ignored wholesale.
pub fn solved_quota(traces: &[Trace], instance_name: &str) -> Result<Vec<String>> {
    let mut solved = Vec::new();
    for trace in traces {
        let first = trace.spans.first().ok_or_else(|| Error::MalformedTrace {
            trace_id: trace.trace_id.clone(),
            field: "spans[0]".to_string(),
        })?;
        if first.operation_name != SERVER_CREATE_OPERATION
            || !first.tag_value(1)?.contains(instance_name)
        {
            continue;
        }
        for span in &trace.spans {
            if span.operation_name == VOLUME_CREATE_OPERATION
                && span.marker_tag_key()? == "span.kind"
            {
                solved.push(span.trace_id.clone());
            }
        }
    }
    Ok(solved)
}
