use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Offset of the marker tag (`error` on failed spans, `span.kind` on
/// completed ones) in the order this deployment's instrumentation emits
/// span tags. Jaeger itself makes no ordering promise; the lookup stays
/// positional because that is the observed backend contract, and a
/// shorter tag sequence is a malformed document, not a skippable span.
pub const MARKER_TAG_POSITION: usize = 4;

/// Offset of the human-readable detail field within a span's first log
/// entry, same positional contract as above.
pub const LOG_DETAIL_POSITION: usize = 2;

/// Envelope returned by the Jaeger trace-search endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub data: Vec<Trace>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Trace {
    #[serde(rename = "traceID")]
    pub trace_id: String,
    #[serde(default)]
    pub spans: Vec<Span>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    #[serde(rename = "traceID")]
    pub trace_id: String,
    pub operation_name: String,
    #[serde(default)]
    pub tags: Vec<KeyValue>,
    #[serde(default)]
    pub logs: Vec<SpanLog>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpanLog {
    #[serde(default)]
    pub fields: Vec<KeyValue>,
}

/// Jaeger tag and log-field entries share this shape. Values can be
/// strings, booleans or numbers depending on the tag type.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeyValue {
    pub key: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl Span {
    fn malformed(&self, field: impl Into<String>) -> Error {
        Error::MalformedTrace {
            trace_id: self.trace_id.clone(),
            field: field.into(),
        }
    }

    /// Key of the tag at the marker position. Fails when the span
    /// carries fewer tags than the deployment emits.
    pub fn marker_tag_key(&self) -> Result<&str> {
        self.tags
            .get(MARKER_TAG_POSITION)
            .map(|tag| tag.key.as_str())
            .ok_or_else(|| self.malformed(format!("tags[{}]", MARKER_TAG_POSITION)))
    }

    /// String value of the tag at `position`.
    pub fn tag_value(&self, position: usize) -> Result<&str> {
        self.tags
            .get(position)
            .and_then(|tag| tag.value.as_str())
            .ok_or_else(|| self.malformed(format!("tags[{}].value", position)))
    }

    /// String value of the detail field in the span's first log entry.
    pub fn log_detail(&self) -> Result<&str> {
        let log = self.logs.first().ok_or_else(|| self.malformed("logs[0]"))?;
        let field = log
            .fields
            .get(LOG_DETAIL_POSITION)
            .ok_or_else(|| self.malformed(format!("logs[0].fields[{}]", LOG_DETAIL_POSITION)))?;
        field
            .value
            .as_str()
            .ok_or_else(|| self.malformed(format!("logs[0].fields[{}].value", LOG_DETAIL_POSITION)))
    }
}
