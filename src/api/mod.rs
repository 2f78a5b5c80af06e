pub mod health;
pub mod traces;

pub use health::health_handler;
pub use traces::{
    error_trace_details, error_traces, floating_ip_error_traces, quota_error_traces,
    solved_floating_ip_traces, solved_quota_traces,
};
