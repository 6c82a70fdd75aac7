//! Consumers of submitted form values

mod tracing_sink;
mod traits;

pub use tracing_sink::TracingSink;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;
