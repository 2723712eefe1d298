pub mod config;
pub mod descriptor;
pub mod dispatcher;
pub mod error;
pub mod metrics;
pub mod retry;

pub use config::{ClientConfig, Credentials, RetryConfig};
pub use descriptor::{Method, RequestDescriptor, RequestParams};
pub use dispatcher::{Dispatch, HttpDispatcher};
pub use error::{DispatchError, Status};
pub use metrics::{MetricsSnapshot, RequestMetrics};
pub use retry::RetryPolicy;
