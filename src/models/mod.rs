pub mod category;
pub mod trace;

pub use category::ErrorCategory;
pub use trace::{KeyValue, SearchResponse, Span, SpanLog, Trace};
